// Host-side tests for the contact form submit cycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod contact {
        include!("../src/core/contact.rs");
    }
}

use crate::core::constants::*;
use crate::core::contact::*;

#[test]
fn button_text_sequence_is_exact() {
    let mut cycle = SubmitCycle::default();
    assert!(cycle.begin("Enviar Mensagem".to_string()));
    let mut seen = vec![cycle.button_text().to_string()];
    let mut cleared_at = Vec::new();
    while cycle.in_flight() {
        let stage = cycle.advance();
        cleared_at.push(stage.clears_fields());
        seen.push(cycle.button_text().to_string());
    }
    assert_eq!(seen, ["Enviando...", "Mensagem Enviada!", "Enviar Mensagem"]);
    // fields are cleared only on the final transition
    assert_eq!(cleared_at, [false, true]);
}

#[test]
fn stage_delays() {
    assert_eq!(SubmitStage::Idle.hold_ms(), None);
    assert_eq!(SubmitStage::Sending.hold_ms(), Some(1500));
    assert_eq!(SubmitStage::Sent.hold_ms(), Some(2000));
    assert_eq!(CONTACT_SENT_AFTER_MS + CONTACT_RESET_AFTER_MS, 3500);
}

#[test]
fn resubmit_while_in_flight_is_ignored() {
    let mut cycle = SubmitCycle::default();
    assert!(cycle.begin("Send".to_string()));
    assert!(!cycle.begin("Enviando...".to_string()));
    assert_eq!(cycle.original, "Send");
}

#[test]
fn cancel_returns_to_original() {
    let mut cycle = SubmitCycle::default();
    cycle.begin("Send".to_string());
    cycle.advance();
    cycle.cancel();
    assert!(!cycle.in_flight());
    assert_eq!(cycle.button_text(), "Send");
    assert!(cycle.begin("Send".to_string()));
}

#[test]
fn cycle_dropped_while_sending_accepts_next_submit() {
    // When the first timer cannot be scheduled the form falls back to idle
    // straight from `Sending`; the button must not stay stuck.
    let mut cycle = SubmitCycle::default();
    assert!(cycle.begin("Send".to_string()));
    assert_eq!(cycle.stage, SubmitStage::Sending);
    cycle.cancel();
    assert!(!cycle.in_flight());
    assert_eq!(cycle.button_text(), "Send");
    assert!(cycle.begin("Send".to_string()));
    assert_eq!(cycle.button_text(), "Enviando...");
}
