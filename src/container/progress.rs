//! Observational progress phases for seal and open.
//!
//! Phases are hints for a front end (a status line, a spinner).  They
//! carry no data and are not part of the container contract.

use std::fmt;

/// A discrete step of a seal or open call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    DerivingKey,
    Encrypting,
    Decrypting,
    ParsingPayload,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::DerivingKey => "Deriving key...",
            Phase::Encrypting => "Encrypting...",
            Phase::Decrypting => "Decrypting...",
            Phase::ParsingPayload => "Reading payload...",
        };
        f.write_str(label)
    }
}

/// Receives phases as a seal or open call advances.
pub trait Progress {
    fn phase(&mut self, phase: Phase);
}

impl<F: FnMut(Phase)> Progress for F {
    fn phase(&mut self, phase: Phase) {
        self(phase)
    }
}

/// Discards every phase.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn phase(&mut self, _phase: Phase) {}
}
