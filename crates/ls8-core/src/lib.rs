//! Core emulator crate for the LS-8 virtual machine.
//!
//! The core is built from a memory image and driven by [`step_one`], [`run`]
//! or [`run_for`]. It never touches the file system; program loading lives in
//! the `ls8` crate.

/// Flat 256-byte memory model.
pub mod memory;
pub use memory::{Memory, ADDRESS_SPACE_BYTES};

/// Public host-facing API contract and integration types.
pub mod api;
pub use api::{AluCompat, CoreConfig, CoreState, RunOutcome, StepOutcome};

/// Architectural CPU state model primitives.
pub mod state;
pub use state::{
    ComparisonFlags, GeneralRegister, RegisterFile, RunState, GENERAL_REGISTER_COUNT,
    STACK_POINTER, STACK_POINTER_INITIAL,
};

/// Opcode table and arity decoding.
pub mod encoding;
pub use encoding::{instruction_len, operand_count, Opcode, OPCODE_TABLE};

/// Instruction fetch and decode.
pub mod decoder;
pub use decoder::{DecodedInstruction, Decoder};

/// Arithmetic/logic unit.
pub mod alu;
pub use alu::{alu, AluOp};

/// Fault, halt and error taxonomy.
pub mod fault;
pub use fault::{ExecError, Fault, HaltReason, ImageError};

/// Instruction execution pipeline.
pub mod execute;
pub use execute::{execute_instruction, run, run_for, step_one, ExecuteOutcome};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use serde_json as _;
