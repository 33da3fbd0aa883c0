//! Localized interface strings.

use crate::reading::Language;

/// Every piece of interface text, for one language.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub preloading: &'static str,
    pub status_ready: &'static str,
    pub status_reading: &'static str,
    pub status_done: &'static str,
    pub status_manual_only: &'static str,
    pub status_access_denied: &'static str,
    pub status_flux_interference: &'static str,
    pub hint_ready: &'static str,
    pub hint_palm: &'static str,
    pub hint_victory: &'static str,
    pub hint_pinch: &'static str,
    pub label_insight: &'static str,
    pub label_action: &'static str,
    pub dismiss: &'static str,
    pub vision_start: &'static str,
    pub vision_stop: &'static str,
    pub help_title: &'static str,
    pub help_drag: &'static str,
    pub help_sensors: &'static str,
    pub help_pinch: &'static str,
    pub help_palm: &'static str,
    pub help_victory: &'static str,
    pub help_keys: &'static str,
    pub help_close: &'static str,
}

/// Status line shown under the galaxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Reading,
    Done,
    ManualOnly,
    AccessDenied,
    FluxInterference,
}

/// Gesture hint shown below the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Ready,
    Palm,
    Victory,
    Pinch,
}

pub static EN: Strings = Strings {
    title: "Andromeda Oracle",
    subtitle: "Whispers from the spiral of light",
    preloading: "Aligning the stars",
    status_ready: "Ready",
    status_reading: "Reading the stars",
    status_done: "The stars have spoken",
    status_manual_only: "Ready (manual only)",
    status_access_denied: "Access denied",
    status_flux_interference: "Flux interference",
    hint_ready: "Pinch to draw a card",
    hint_palm: "Steering the galaxy",
    hint_victory: "Returning to the stars",
    hint_pinch: "Drawing your card",
    label_insight: "Insight",
    label_action: "Action",
    dismiss: "Return to the galaxy",
    vision_start: "Enable hand sensors",
    vision_stop: "Disable hand sensors",
    help_title: "How to read the stars",
    help_drag: "Drag to spin the galaxy.",
    help_sensors: "Press C (or the center orb) to enable hand sensors.",
    help_pinch: "Pinch thumb and index finger to draw a card.",
    help_palm: "Show an open palm and move it to steer the rotation.",
    help_victory: "Make a victory sign to dismiss the reading.",
    help_keys: "Space draws, Esc dismisses, L switches language, R reshapes the galaxy.",
    help_close: "Close",
};

pub static CN: Strings = Strings {
    title: "仙女座神启",
    subtitle: "来自光之螺旋的低语",
    preloading: "星辰校准中",
    status_ready: "就绪",
    status_reading: "正在解读星辰",
    status_done: "星辰已给出答案",
    status_manual_only: "就绪（仅手动）",
    status_access_denied: "无法访问摄像头",
    status_flux_interference: "星流干扰",
    hint_ready: "捏合手指抽取一张牌",
    hint_palm: "正在引导星系",
    hint_victory: "回归星海",
    hint_pinch: "正在抽取你的牌",
    label_insight: "启示",
    label_action: "行动",
    dismiss: "回到星系",
    vision_start: "开启手势感应",
    vision_stop: "关闭手势感应",
    help_title: "如何解读星辰",
    help_drag: "拖动以旋转星系。",
    help_sensors: "按 C（或点击中心光球）开启手势感应。",
    help_pinch: "拇指与食指捏合即可抽牌。",
    help_palm: "张开手掌并移动，可引导星系旋转。",
    help_victory: "比出胜利手势即可关闭解读。",
    help_keys: "空格抽牌，Esc 关闭，L 切换语言，R 重塑星系。",
    help_close: "关闭",
};

/// Strings for `language`.
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Cn => &CN,
    }
}

impl Status {
    pub fn text(self, strings: &Strings) -> &'static str {
        match self {
            Status::Ready => strings.status_ready,
            Status::Reading => strings.status_reading,
            Status::Done => strings.status_done,
            Status::ManualOnly => strings.status_manual_only,
            Status::AccessDenied => strings.status_access_denied,
            Status::FluxInterference => strings.status_flux_interference,
        }
    }
}

impl Hint {
    pub fn text(self, strings: &Strings) -> &'static str {
        match self {
            Hint::Ready => strings.hint_ready,
            Hint::Palm => strings.hint_palm,
            Hint::Victory => strings.hint_victory,
            Hint::Pinch => strings.hint_pinch,
        }
    }
}
