//! Cycle status codes.
//!
//! Every completed cycle produces exactly one [`Status`]. Anything other than
//! [`Status::Aok`] is terminal and stops the run loop.

use std::fmt;

/// Outcome of a single simulated cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Normal operation; execution may continue.
    #[default]
    Aok,

    /// The halt instruction was reached.
    Halted,

    /// An instruction fetch or data access fell outside memory.
    AddressFault,

    /// The instruction class is not recognised.
    InvalidInstruction,
}

impl Status {
    /// Returns true for every status that stops the run loop.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Aok)
    }

    /// Short three-letter name of the status.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aok => "AOK",
            Self::Halted => "HLT",
            Self::AddressFault => "ADR",
            Self::InvalidInstruction => "INS",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
