//! Arithmetic/logic unit.
//!
//! Every operation reads two registers and writes its result back into the
//! first one, or into the comparison flags for `CMP`. Results wrap modulo 256.

use crate::state::{GeneralRegister, RegisterFile};

/// ALU operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum AluOp {
    Add,
    And,
    Cmp,
    Mod,
    Mul,
    Not,
    Or,
    Shl,
    Shr,
    Xor,
}

/// Applies `op` to registers `reg_a` and `reg_b`, mutating the register file.
///
/// `Mod` expects the caller to have rejected a zero divisor; with a zero
/// divisor `reg_a` is left unchanged.
pub fn alu(regs: &mut RegisterFile, op: AluOp, reg_a: GeneralRegister, reg_b: GeneralRegister) {
    let a = regs.gpr(reg_a);
    let b = regs.gpr(reg_b);

    let result = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::And => a & b,
        AluOp::Mod => a.checked_rem(b).unwrap_or(a),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Not => !a,
        AluOp::Or => a | b,
        AluOp::Shl => a.checked_shl(u32::from(b)).unwrap_or(0),
        AluOp::Shr => a.checked_shr(u32::from(b)).unwrap_or(0),
        AluOp::Xor => a ^ b,
        AluOp::Cmp => {
            compare(regs, a, b);
            return;
        }
    };

    regs.set_gpr(reg_a, result);
}

// Sets exactly one flag; the other two keep their previous values.
fn compare(regs: &mut RegisterFile, a: u8, b: u8) {
    let flags = regs.flags_mut();
    match a.cmp(&b) {
        std::cmp::Ordering::Equal => flags.equal = true,
        std::cmp::Ordering::Greater => flags.greater = true,
        std::cmp::Ordering::Less => flags.less = true,
    }
}
