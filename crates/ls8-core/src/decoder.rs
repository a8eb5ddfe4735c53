//! Instruction fetch and decode.
//!
//! Decoding never fails: unassigned bytes decode with `opcode: None` and still
//! carry the length implied by their arity bits.

use std::fmt;

use crate::encoding::{instruction_len, operand_count, Opcode};
use crate::memory::Memory;

/// Decoded instruction with its operand bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Raw instruction byte.
    pub raw: u8,
    /// Assigned opcode, or `None` for an unassigned byte.
    pub opcode: Option<Opcode>,
    /// First operand byte (`0` when the form has no operands).
    pub operand_a: u8,
    /// Second operand byte (`0` unless the form has two operands).
    pub operand_b: u8,
    /// Instruction length in bytes (1, 2 or 3).
    pub len: u8,
}

/// Stateless decoder reading instructions out of memory.
pub struct Decoder;

impl Decoder {
    /// Fetches and decodes the instruction at `pc`.
    ///
    /// Operand fetches wrap past the top of memory.
    #[must_use]
    pub fn decode(memory: &Memory, pc: u8) -> DecodedInstruction {
        let raw = memory.read(pc);
        let operands = operand_count(raw);

        let operand_a = if operands >= 1 {
            memory.read(pc.wrapping_add(1))
        } else {
            0
        };
        let operand_b = if operands == 2 {
            memory.read(pc.wrapping_add(2))
        } else {
            0
        };

        DecodedInstruction {
            raw,
            opcode: Opcode::from_byte(raw),
            operand_a,
            operand_b,
            len: instruction_len(raw),
        }
    }
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode {
            Some(opcode) => f.write_str(opcode.mnemonic())?,
            None => write!(f, ".byte 0x{:02X}", self.raw)?,
        }

        match self.len {
            2 => write!(f, " {}", self.operand_a),
            3 => write!(f, " {}, {}", self.operand_a, self.operand_b),
            _ => Ok(()),
        }
    }
}
