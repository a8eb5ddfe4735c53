//! Stack helpers shared by `PUSH`, `POP`, `CALL` and `RET`.
//!
//! The stack lives in ordinary memory below the stack pointer (`R7`) and grows
//! toward lower addresses. Nothing stops it from overwriting program bytes.

use crate::{CoreState, GeneralRegister};

/// Decrements the stack pointer, then stores `value` at the new top.
pub fn push_byte(state: &mut CoreState, value: u8) {
    let sp = state.registers.sp().wrapping_sub(1);
    state.registers.set_sp(sp);
    state.memory.write(sp, value);
}

/// Decrements the stack pointer, then stores `reg` at the new top.
///
/// `reg` is read after the decrement, so pushing `R7` stores the new
/// stack pointer.
pub fn push_register(state: &mut CoreState, reg: GeneralRegister) {
    let sp = state.registers.sp().wrapping_sub(1);
    state.registers.set_sp(sp);
    let value = state.registers.gpr(reg);
    state.memory.write(sp, value);
}

/// Loads the top of stack into `reg`, then clears the slot addressed by the
/// stack pointer and increments it.
///
/// The clear and increment use the stack pointer as it stands after the load,
/// so popping into `R7` leaves `R7` one past the loaded value.
pub fn pop_register(state: &mut CoreState, reg: GeneralRegister) {
    let value = state.memory.read(state.registers.sp());
    state.registers.set_gpr(reg, value);

    let sp = state.registers.sp();
    state.memory.write(sp, 0);
    state.registers.set_sp(sp.wrapping_add(1));
}

/// Reads the top of stack and increments the stack pointer, leaving the slot intact.
pub fn pop_byte(state: &mut CoreState) -> u8 {
    let sp = state.registers.sp();
    let value = state.memory.read(sp);
    state.registers.set_sp(sp.wrapping_add(1));
    value
}
