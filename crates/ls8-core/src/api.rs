//! Public host-facing API contracts for embedding the LS-8 core.

use crate::alu::AluOp;
use crate::fault::{HaltReason, ImageError};
use crate::memory::Memory;
use crate::state::{RegisterFile, RunState};

/// Selects how the `NOT`, `OR` and `XOR` opcodes reach the ALU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum AluCompat {
    /// Each opcode invokes the ALU operation of the same name.
    #[default]
    Named,
    /// `NOT`, `OR` and `XOR` all invoke `AND`, reproducing the historical
    /// reference machine bit-for-bit.
    AliasToAnd,
}

impl AluCompat {
    /// Returns the ALU operation actually performed for the named operation `op`.
    #[must_use]
    pub const fn effective(self, op: AluOp) -> AluOp {
        match (self, op) {
            (Self::AliasToAnd, AluOp::Not | AluOp::Or | AluOp::Xor) => AluOp::And,
            _ => op,
        }
    }
}

/// Top-level immutable configuration for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CoreConfig {
    /// ALU wiring for `NOT`, `OR` and `XOR`.
    pub alu_compat: AluCompat,
}

/// Complete CPU state: registers, memory and run state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CoreState {
    /// Register file, program counter and comparison flags.
    pub registers: RegisterFile,
    /// Flat 256-byte memory image.
    pub memory: Memory,
    /// Current execution state.
    pub run_state: RunState,
}

impl CoreState {
    /// Creates a power-on state with `image` placed at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::TooLarge`] when the image exceeds 256 bytes.
    pub fn from_image(image: &[u8]) -> Result<Self, ImageError> {
        let mut state = Self::default();
        state.memory.load_image(image)?;
        Ok(state)
    }

    /// Restores power-on registers and resumes execution at address 0.
    ///
    /// Memory is preserved.
    pub fn reset_canonical(&mut self) {
        self.registers = RegisterFile::default();
        self.run_state = RunState::Running;
    }

    /// Returns `true` once the machine has halted.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.run_state.is_halted()
    }
}

/// Output status from one dispatcher cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// Instruction executed and the machine is still running.
    Retired {
        /// Raw instruction byte that executed.
        raw: u8,
        /// Program counter after the instruction.
        next_pc: u8,
    },
    /// Machine is halted, either by this cycle or earlier.
    Halted(HaltReason),
}

/// Aggregated outcome of driving the dispatcher for several cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunOutcome {
    /// Number of instructions retired during this call, not counting the
    /// instruction that halted the machine.
    pub steps: u64,
    /// Halt reason, or `None` when a step limit stopped the run first.
    pub halted: Option<HaltReason>,
}
