use thiserror::Error;

/// Program-level faults that halt the machine.
///
/// A fault ends the running program but is not an error of the host: the
/// dispatcher records it in [`HaltReason::Fault`] and reports a normal halt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Fault {
    /// `MOD` executed with a zero divisor register.
    #[error("Dividing by zero is not allowed.")]
    DivideByZero {
        /// Program counter of the faulting `MOD` instruction.
        pc: u8,
    },
}

impl Fault {
    /// Returns the fixed diagnostic line emitted when this fault halts a program.
    #[must_use]
    pub fn diagnostic(self) -> String {
        self.to_string()
    }
}

/// Why the machine entered the halted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum HaltReason {
    /// The program retired a `HLT` instruction.
    Instruction,
    /// The program raised a fatal fault.
    Fault(Fault),
}

impl HaltReason {
    /// Returns the fault that caused the halt, if any.
    #[must_use]
    pub const fn fault(self) -> Option<Fault> {
        match self {
            Self::Fault(fault) => Some(fault),
            Self::Instruction => None,
        }
    }
}

/// Memory image rejected by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ImageError {
    /// Image does not fit in the 256-byte address space.
    #[error("memory image of {len} bytes exceeds the {capacity}-byte address space")]
    TooLarge {
        /// Length of the rejected image.
        len: usize,
        /// Size of the address space.
        capacity: usize,
    },
    /// Serialized memory did not describe a full address space.
    #[error("serialized memory holds {len} bytes, expected exactly {expected}")]
    LengthMismatch {
        /// Length of the rejected byte sequence.
        len: usize,
        /// Required length.
        expected: usize,
    },
}

/// Host-level failure while driving the dispatcher.
///
/// Program-level conditions never surface here; only a failing output sink does.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Output sink rejected a `PRN` line or diagnostic.
    #[error("failed to write program output")]
    Output(#[from] std::io::Error),
}
