//! Egui HUD: title, status line, reading card, sensor toggle and help.
//!
//! The HUD never mutates the session directly. It reports the actions the
//! user clicked and the window applies them after the egui pass.

use crate::i18n::Strings;
use crate::input::Action;
use crate::mode::Mode;
use crate::reading::{Reading, MAX_ENERGY};
use crate::session::Session;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(255, 221, 136);
const DIM: egui::Color32 = egui::Color32::from_rgb(150, 160, 190);

/// Lay out the HUD for this frame and return the clicked actions.
pub fn build(ctx: &egui::Context, session: &Session, now: f32) -> Vec<Action> {
    let mut actions = Vec::new();
    let strings = session.strings();

    title(ctx, strings);

    if !session.is_preloaded(now) {
        egui::Area::new(egui::Id::new("preloading"))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(strings.preloading).color(DIM).size(18.0));
            });
        return actions;
    }

    status(ctx, session, strings, &mut actions);

    if session.mode() == Mode::Card {
        if let Some(reading) = session.reading() {
            reading_card(ctx, reading, strings, &mut actions);
        }
    }

    if session.help_open() {
        help(ctx, strings, &mut actions);
    }

    actions
}

fn title(ctx: &egui::Context, strings: &Strings) {
    egui::Area::new(egui::Id::new("title"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 24.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(strings.title).color(ACCENT).size(28.0).strong());
                ui.label(egui::RichText::new(strings.subtitle).color(DIM).italics());
            });
        });
}

fn status(ctx: &egui::Context, session: &Session, strings: &Strings, actions: &mut Vec<Action>) {
    egui::Area::new(egui::Id::new("status"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(session.status().text(strings)).color(ACCENT));
                ui.label(egui::RichText::new(session.hint().text(strings)).color(DIM).small());
                ui.horizontal(|ui| {
                    let vision = if session.sensors_active() {
                        strings.vision_stop
                    } else {
                        strings.vision_start
                    };
                    if ui.button(vision).clicked() {
                        actions.push(Action::ToggleSensors);
                    }
                    if ui.button(session.language().toggled().code().to_uppercase()).clicked() {
                        actions.push(Action::ToggleLanguage);
                    }
                    if ui.button("?").clicked() {
                        actions.push(Action::ToggleHelp);
                    }
                });
            });
        });
}

fn reading_card(ctx: &egui::Context, reading: &Reading, strings: &Strings, actions: &mut Vec<Action>) {
    egui::Window::new(reading.card_name.as_str())
        .id(egui::Id::new("reading"))
        .anchor(egui::Align2::RIGHT_CENTER, egui::vec2(-32.0, 0.0))
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.label(energy_pips(reading.energy));
            ui.separator();
            ui.label(egui::RichText::new(strings.label_insight).color(DIM).small());
            ui.label(egui::RichText::new(&reading.insight).color(ACCENT).strong());
            ui.add_space(6.0);
            ui.label(&reading.meaning);
            ui.add_space(6.0);
            ui.label(egui::RichText::new(strings.label_action).color(DIM).small());
            ui.label(&reading.action);
            ui.add_space(10.0);
            if ui.button(strings.dismiss).clicked() {
                actions.push(Action::Dismiss);
            }
        });
}

fn help(ctx: &egui::Context, strings: &Strings, actions: &mut Vec<Action>) {
    egui::Window::new(strings.help_title)
        .id(egui::Id::new("help"))
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            for line in [
                strings.help_drag,
                strings.help_sensors,
                strings.help_pinch,
                strings.help_palm,
                strings.help_victory,
                strings.help_keys,
            ] {
                ui.label(line);
            }
            ui.add_space(8.0);
            if ui.button(strings.help_close).clicked() {
                actions.push(Action::ToggleHelp);
            }
        });
}

/// Filled and empty pips, e.g. `●●●○○` for energy 3.
pub fn energy_pips(energy: u8) -> String {
    let filled = energy.min(MAX_ENERGY) as usize;
    let mut pips = "●".repeat(filled);
    pips.push_str(&"○".repeat(MAX_ENERGY as usize - filled));
    pips
}
