// Simulated contact-form submission.
//
// This is a UI mock: nothing is validated, sent or stored. The form only
// walks through a fixed sequence of button states on timers.

use super::constants::{
    CONTACT_RESET_AFTER_MS, CONTACT_SENDING_LABEL, CONTACT_SENT_AFTER_MS, CONTACT_SENT_LABEL,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStage {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitStage {
    /// Stage entered after this one. `Idle` restarts the cycle.
    pub fn next(self) -> SubmitStage {
        match self {
            SubmitStage::Idle => SubmitStage::Sending,
            SubmitStage::Sending => SubmitStage::Sent,
            SubmitStage::Sent => SubmitStage::Idle,
        }
    }

    /// Delay before leaving this stage, if it is timed.
    pub fn hold_ms(self) -> Option<i32> {
        match self {
            SubmitStage::Idle => None,
            SubmitStage::Sending => Some(CONTACT_SENT_AFTER_MS),
            SubmitStage::Sent => Some(CONTACT_RESET_AFTER_MS),
        }
    }

    /// Button label for a timed stage; `Idle` shows the original content.
    pub fn label(self) -> Option<&'static str> {
        match self {
            SubmitStage::Idle => None,
            SubmitStage::Sending => Some(CONTACT_SENDING_LABEL),
            SubmitStage::Sent => Some(CONTACT_SENT_LABEL),
        }
    }

    /// Form fields are cleared only when returning to `Idle`.
    pub fn clears_fields(self) -> bool {
        self == SubmitStage::Idle
    }
}

/// Button content per stage, with the original content captured at submit.
#[derive(Clone, Debug, Default)]
pub struct SubmitCycle {
    pub stage: SubmitStage,
    pub original: String,
}

impl SubmitCycle {
    pub fn in_flight(&self) -> bool {
        self.stage != SubmitStage::Idle
    }

    /// Start a cycle. Returns `false` if one is already running.
    pub fn begin(&mut self, original: String) -> bool {
        if self.in_flight() {
            return false;
        }
        self.original = original;
        self.stage = SubmitStage::Sending;
        true
    }

    /// Move to the next stage and return it.
    pub fn advance(&mut self) -> SubmitStage {
        self.stage = self.stage.next();
        self.stage
    }

    /// Text the button shows in the current stage.
    pub fn button_text(&self) -> &str {
        self.stage.label().unwrap_or(&self.original)
    }

    pub fn cancel(&mut self) {
        self.stage = SubmitStage::Idle;
    }
}
