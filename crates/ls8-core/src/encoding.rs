/// Instruction-byte bit marking the two-operand form.
pub const TWO_OPERAND_BIT: u8 = 0x80;
/// Instruction-byte bit marking the one-operand form.
pub const ONE_OPERAND_BIT: u8 = 0x40;

/// Assigned LS-8 opcodes, keyed by their full instruction byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    Hlt = 0x01,
    Ret = 0x11,
    Push = 0x45,
    Pop = 0x46,
    Prn = 0x47,
    Call = 0x50,
    Jmp = 0x54,
    Jeq = 0x55,
    Jne = 0x56,
    Not = 0x69,
    Ldi = 0x82,
    St = 0x84,
    Add = 0xA0,
    Mul = 0xA2,
    Mod = 0xA4,
    Cmp = 0xA7,
    And = 0xA8,
    Or = 0xAA,
    Xor = 0xAB,
    Shl = 0xAC,
    Shr = 0xAD,
}

/// Single source-of-truth opcode table: instruction byte, opcode, mnemonic.
///
/// Any byte not present here is an unassigned opcode and executes as a no-op.
pub const OPCODE_TABLE: &[(u8, Opcode, &str)] = &[
    (0x01, Opcode::Hlt, "HLT"),
    (0x11, Opcode::Ret, "RET"),
    (0x45, Opcode::Push, "PUSH"),
    (0x46, Opcode::Pop, "POP"),
    (0x47, Opcode::Prn, "PRN"),
    (0x50, Opcode::Call, "CALL"),
    (0x54, Opcode::Jmp, "JMP"),
    (0x55, Opcode::Jeq, "JEQ"),
    (0x56, Opcode::Jne, "JNE"),
    (0x69, Opcode::Not, "NOT"),
    (0x82, Opcode::Ldi, "LDI"),
    (0x84, Opcode::St, "ST"),
    (0xA0, Opcode::Add, "ADD"),
    (0xA2, Opcode::Mul, "MUL"),
    (0xA4, Opcode::Mod, "MOD"),
    (0xA7, Opcode::Cmp, "CMP"),
    (0xA8, Opcode::And, "AND"),
    (0xAA, Opcode::Or, "OR"),
    (0xAB, Opcode::Xor, "XOR"),
    (0xAC, Opcode::Shl, "SHL"),
    (0xAD, Opcode::Shr, "SHR"),
];

impl Opcode {
    /// Resolves an instruction byte to its assigned opcode.
    ///
    /// `None` means the byte is unassigned.
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        OPCODE_TABLE
            .iter()
            .find_map(|(entry, opcode, _)| (*entry == byte).then_some(*opcode))
    }

    /// Returns the instruction byte that encodes this opcode.
    #[must_use]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Returns the assembly mnemonic for this opcode.
    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        OPCODE_TABLE
            .iter()
            .find_map(|(_, opcode, mnemonic)| (*opcode == self).then_some(*mnemonic))
            .unwrap_or("???")
    }
}

/// Number of operand bytes encoded in the high bits of an instruction byte.
#[must_use]
pub const fn operand_count(byte: u8) -> u8 {
    if byte & TWO_OPERAND_BIT != 0 {
        2
    } else if byte & ONE_OPERAND_BIT != 0 {
        1
    } else {
        0
    }
}

/// Total instruction length in bytes, including the instruction byte itself.
#[must_use]
pub const fn instruction_len(byte: u8) -> u8 {
    operand_count(byte) + 1
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{instruction_len, operand_count, Opcode, OPCODE_TABLE};

    #[test]
    fn table_contains_unique_bytes_and_mnemonics() {
        let bytes: HashSet<_> = OPCODE_TABLE.iter().map(|(byte, _, _)| *byte).collect();
        let names: HashSet<_> = OPCODE_TABLE.iter().map(|(_, _, name)| *name).collect();
        assert_eq!(bytes.len(), OPCODE_TABLE.len());
        assert_eq!(names.len(), OPCODE_TABLE.len());
    }

    #[test]
    fn every_table_entry_matches_enum_discriminant() {
        for (byte, opcode, _) in OPCODE_TABLE {
            assert_eq!(opcode.byte(), *byte);
            assert_eq!(Opcode::from_byte(*byte), Some(*opcode));
        }
    }

    #[test]
    fn lookup_matches_known_assigned_encodings() {
        assert_eq!(Opcode::from_byte(0b1000_0010), Some(Opcode::Ldi));
        assert_eq!(Opcode::from_byte(0b0100_0111), Some(Opcode::Prn));
        assert_eq!(Opcode::from_byte(0b0000_0001), Some(Opcode::Hlt));
        assert_eq!(Opcode::from_byte(0b1010_0111), Some(Opcode::Cmp));
        assert_eq!(Opcode::Cmp.mnemonic(), "CMP");
    }

    #[test]
    fn unassigned_bytes_have_no_opcode() {
        for byte in [0x00, 0x02, 0x48, 0x83, 0xA1, 0xA3, 0xFF] {
            assert_eq!(Opcode::from_byte(byte), None);
        }
    }

    #[test]
    fn arity_comes_from_the_two_high_bits() {
        assert_eq!(operand_count(0x01), 0);
        assert_eq!(operand_count(0x47), 1);
        assert_eq!(operand_count(0x82), 2);
        assert_eq!(operand_count(0xC0), 2);

        assert_eq!(instruction_len(0x11), 1);
        assert_eq!(instruction_len(0x50), 2);
        assert_eq!(instruction_len(0xA0), 3);
    }

    #[test]
    fn assigned_opcodes_agree_with_their_arity_bits() {
        let unary = [Opcode::Push, Opcode::Pop, Opcode::Prn, Opcode::Call, Opcode::Not];
        for (byte, opcode, _) in OPCODE_TABLE {
            let expected = match opcode {
                Opcode::Hlt | Opcode::Ret => 0,
                Opcode::Jmp | Opcode::Jeq | Opcode::Jne => 1,
                op if unary.contains(op) => 1,
                _ => 2,
            };
            assert_eq!(operand_count(*byte), expected, "{}", opcode.mnemonic());
        }
    }
}
