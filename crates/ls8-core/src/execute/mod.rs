//! Fetch-decode-execute loop for the LS-8 instruction set.
//!
//! Each cycle:
//! 1. Fetch the instruction byte at `PC`
//! 2. Decode arity from the two high bits and read the operands
//! 3. Dispatch on the opcode
//! 4. Advance `PC` by the instruction length, unless the instruction redirected it
//!
//! Register operands select a register by their low three bits.

mod helpers;

pub use helpers::{pop_byte, pop_register, push_byte, push_register};

use std::io::Write;

use crate::alu::{alu, AluOp};
use crate::decoder::{DecodedInstruction, Decoder};
use crate::encoding::Opcode;
use crate::fault::{ExecError, Fault, HaltReason};
use crate::{CoreConfig, CoreState, GeneralRegister, RunOutcome, RunState, StepOutcome};

/// Control-flow effect of executing a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// Fall through to the next sequential instruction.
    Advance,
    /// Continue at the given address; the sequential advance is skipped.
    Redirect(u8),
    /// Enter the halted state.
    Halt(HaltReason),
}

/// Executes one decoded instruction against `state`.
///
/// Register, memory and flag side effects are applied directly; the returned
/// outcome tells the caller how to update `PC` and the run state.
///
/// # Errors
///
/// Returns [`ExecError::Output`] when `output` rejects a write.
pub fn execute_instruction(
    instr: &DecodedInstruction,
    state: &mut CoreState,
    output: &mut dyn Write,
    config: &CoreConfig,
) -> Result<ExecuteOutcome, ExecError> {
    let pc = state.registers.pc();
    let reg_a = GeneralRegister::from_operand(instr.operand_a);
    let reg_b = GeneralRegister::from_operand(instr.operand_b);

    let Some(opcode) = instr.opcode else {
        log::debug!("unassigned opcode 0x{:02X} at 0x{pc:02X}, skipping", instr.raw);
        return Ok(ExecuteOutcome::Advance);
    };

    let outcome = match opcode {
        Opcode::Hlt => ExecuteOutcome::Halt(HaltReason::Instruction),
        Opcode::Ldi => {
            state.registers.set_gpr(reg_a, instr.operand_b);
            ExecuteOutcome::Advance
        }
        Opcode::Prn => {
            writeln!(output, "{}", state.registers.gpr(reg_a))?;
            ExecuteOutcome::Advance
        }
        Opcode::St => {
            state
                .memory
                .write(instr.operand_a, state.registers.gpr(reg_b));
            ExecuteOutcome::Advance
        }
        Opcode::Mod if state.registers.gpr(reg_b) == 0 => {
            let fault = Fault::DivideByZero { pc };
            writeln!(output, "{}", fault.diagnostic())?;
            ExecuteOutcome::Halt(HaltReason::Fault(fault))
        }
        Opcode::Add => apply_alu(state, config, AluOp::Add, reg_a, reg_b),
        Opcode::And => apply_alu(state, config, AluOp::And, reg_a, reg_b),
        Opcode::Cmp => apply_alu(state, config, AluOp::Cmp, reg_a, reg_b),
        Opcode::Mod => apply_alu(state, config, AluOp::Mod, reg_a, reg_b),
        Opcode::Mul => apply_alu(state, config, AluOp::Mul, reg_a, reg_b),
        Opcode::Not => apply_alu(state, config, AluOp::Not, reg_a, reg_b),
        Opcode::Or => apply_alu(state, config, AluOp::Or, reg_a, reg_b),
        Opcode::Shl => apply_alu(state, config, AluOp::Shl, reg_a, reg_b),
        Opcode::Shr => apply_alu(state, config, AluOp::Shr, reg_a, reg_b),
        Opcode::Xor => apply_alu(state, config, AluOp::Xor, reg_a, reg_b),
        Opcode::Push => {
            push_register(state, reg_a);
            ExecuteOutcome::Advance
        }
        Opcode::Pop => {
            pop_register(state, reg_a);
            ExecuteOutcome::Advance
        }
        Opcode::Call => {
            push_byte(state, pc.wrapping_add(instr.len));
            ExecuteOutcome::Redirect(state.registers.gpr(reg_a))
        }
        Opcode::Ret => ExecuteOutcome::Redirect(pop_byte(state)),
        Opcode::Jmp => ExecuteOutcome::Redirect(state.registers.gpr(reg_a)),
        Opcode::Jeq => branch_if(state.registers.flags().equal, state, reg_a),
        Opcode::Jne => branch_if(!state.registers.flags().equal, state, reg_a),
    };

    Ok(outcome)
}

fn apply_alu(
    state: &mut CoreState,
    config: &CoreConfig,
    op: AluOp,
    reg_a: GeneralRegister,
    reg_b: GeneralRegister,
) -> ExecuteOutcome {
    alu(&mut state.registers, config.alu_compat.effective(op), reg_a, reg_b);
    ExecuteOutcome::Advance
}

fn branch_if(taken: bool, state: &CoreState, target: GeneralRegister) -> ExecuteOutcome {
    if taken {
        ExecuteOutcome::Redirect(state.registers.gpr(target))
    } else {
        ExecuteOutcome::Advance
    }
}

/// Runs a single dispatcher cycle.
///
/// A machine that is already halted stays halted and executes nothing.
///
/// # Errors
///
/// Returns [`ExecError::Output`] when `output` rejects a write. The
/// instruction's register and memory effects up to that point remain applied
/// and `PC` is not advanced.
pub fn step_one(
    state: &mut CoreState,
    output: &mut dyn Write,
    config: &CoreConfig,
) -> Result<StepOutcome, ExecError> {
    if let RunState::Halted(reason) = state.run_state {
        return Ok(StepOutcome::Halted(reason));
    }

    let pc = state.registers.pc();
    let instr = Decoder::decode(&state.memory, pc);
    log::trace!("{pc:02X}: {instr}");

    match execute_instruction(&instr, state, output, config)? {
        ExecuteOutcome::Advance => {
            let next_pc = pc.wrapping_add(instr.len);
            state.registers.set_pc(next_pc);
            Ok(StepOutcome::Retired {
                raw: instr.raw,
                next_pc,
            })
        }
        ExecuteOutcome::Redirect(target) => {
            state.registers.set_pc(target);
            Ok(StepOutcome::Retired {
                raw: instr.raw,
                next_pc: target,
            })
        }
        ExecuteOutcome::Halt(reason) => {
            log::debug!("halted at 0x{pc:02X}: {reason:?}");
            state.run_state = RunState::Halted(reason);
            Ok(StepOutcome::Halted(reason))
        }
    }
}

/// Drives the dispatcher until the machine halts.
///
/// Programs that never halt keep this call running forever; use [`run_for`]
/// to bound a run.
///
/// # Errors
///
/// Returns [`ExecError::Output`] when `output` rejects a write.
pub fn run(
    state: &mut CoreState,
    output: &mut dyn Write,
    config: &CoreConfig,
) -> Result<RunOutcome, ExecError> {
    let mut steps = 0_u64;
    loop {
        let outcome = step_one(state, output, config)?;
        if let StepOutcome::Halted(reason) = outcome {
            return Ok(RunOutcome {
                steps,
                halted: Some(reason),
            });
        }
        steps += 1;
    }
}

/// Drives the dispatcher for at most `max_steps` retired instructions.
///
/// # Errors
///
/// Returns [`ExecError::Output`] when `output` rejects a write.
pub fn run_for(
    state: &mut CoreState,
    output: &mut dyn Write,
    config: &CoreConfig,
    max_steps: u64,
) -> Result<RunOutcome, ExecError> {
    let mut steps = 0_u64;
    while steps < max_steps {
        if let StepOutcome::Halted(reason) = step_one(state, output, config)? {
            return Ok(RunOutcome {
                steps,
                halted: Some(reason),
            });
        }
        steps += 1;
    }

    Ok(RunOutcome {
        steps,
        halted: state.run_state.halt_reason(),
    })
}
