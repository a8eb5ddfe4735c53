//! Architectural CPU state model primitives.

/// Register file types and storage model.
pub mod registers;
/// Running/halted state machine.
pub mod run_state;

pub use registers::{
    ComparisonFlags, GeneralRegister, RegisterFile, GENERAL_REGISTER_COUNT, STACK_POINTER,
    STACK_POINTER_INITIAL,
};
pub use run_state::RunState;
