//! GALAXY / DRAWING / CARD state machine.
//!
//! The reading travels inside [`Phase::Card`], so the machine can never be in
//! CARD without a reading or hold a reading outside CARD.

use crate::reading::Reading;

/// Which of the three display modes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Galaxy,
    Drawing,
    Card,
}

/// Current mode together with its payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Galaxy,
    Drawing {
        /// Clock time at which drawing began.
        started_at: f32,
    },
    Card {
        reading: Reading,
    },
}

impl Phase {
    pub fn mode(&self) -> Mode {
        match self {
            Phase::Galaxy => Mode::Galaxy,
            Phase::Drawing { .. } => Mode::Drawing,
            Phase::Card { .. } => Mode::Card,
        }
    }
}

/// Owner of the current [`Phase`].
#[derive(Debug, Clone, Default)]
pub struct ModeMachine {
    phase: Phase,
}

impl ModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.phase.mode()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Enter DRAWING at `now`. Only legal from GALAXY.
    pub fn begin_drawing(&mut self, now: f32) -> bool {
        if self.phase != Phase::Galaxy {
            return false;
        }
        self.phase = Phase::Drawing { started_at: now };
        log::info!("mode: galaxy -> drawing");
        true
    }

    /// Reveal `reading`. Only legal from DRAWING.
    pub fn reveal(&mut self, reading: Reading) -> bool {
        if self.mode() != Mode::Drawing {
            return false;
        }
        log::info!("mode: drawing -> card ({})", reading.card_name);
        self.phase = Phase::Card { reading };
        true
    }

    /// Return to GALAXY from any mode, clearing the reading.
    pub fn dismiss(&mut self) {
        if self.phase != Phase::Galaxy {
            log::info!("mode: {:?} -> galaxy", self.mode());
        }
        self.phase = Phase::Galaxy;
    }

    /// Start time of the current DRAWING phase.
    pub fn drawing_since(&self) -> Option<f32> {
        match self.phase {
            Phase::Drawing { started_at } => Some(started_at),
            _ => None,
        }
    }

    pub fn reading(&self) -> Option<&Reading> {
        match &self.phase {
            Phase::Card { reading } => Some(reading),
            _ => None,
        }
    }
}
