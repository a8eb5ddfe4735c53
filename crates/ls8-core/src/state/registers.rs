use std::fmt;

/// Number of architecturally visible general-purpose registers (`R0..R7`).
pub const GENERAL_REGISTER_COUNT: usize = 8;
/// Register reserved by convention as the stack pointer.
pub const STACK_POINTER: GeneralRegister = GeneralRegister::R7;
/// Power-on value of the stack pointer.
///
/// The stack grows downward from just below the reserved top of memory.
pub const STACK_POINTER_INITIAL: u8 = 0xF4;

/// Architecturally visible general-purpose register identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum GeneralRegister {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
}

impl GeneralRegister {
    /// Ordered list of all architectural general-purpose registers.
    pub const ALL: [Self; GENERAL_REGISTER_COUNT] = [
        Self::R0,
        Self::R1,
        Self::R2,
        Self::R3,
        Self::R4,
        Self::R5,
        Self::R6,
        Self::R7,
    ];

    /// Returns the array index for this register (`0..=7`).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Selects a register from an operand byte using its low three bits.
    #[must_use]
    pub const fn from_operand(operand: u8) -> Self {
        match operand & 0x07 {
            0 => Self::R0,
            1 => Self::R1,
            2 => Self::R2,
            3 => Self::R3,
            4 => Self::R4,
            5 => Self::R5,
            6 => Self::R6,
            _ => Self::R7,
        }
    }
}

impl fmt::Display for GeneralRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.index())
    }
}

/// Sticky comparison flags written by `CMP`.
///
/// Each flag is an independent boolean. A comparison sets exactly one of them
/// and leaves the other two holding whatever an earlier comparison stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct ComparisonFlags {
    /// `E`: operands compared equal.
    pub equal: bool,
    /// `G`: first operand compared greater.
    pub greater: bool,
    /// `L`: first operand compared less.
    pub less: bool,
}

/// Register file of the LS-8 CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RegisterFile {
    gpr: [u8; GENERAL_REGISTER_COUNT],
    pc: u8,
    flags: ComparisonFlags,
}

impl Default for RegisterFile {
    fn default() -> Self {
        let mut gpr = [0; GENERAL_REGISTER_COUNT];
        gpr[STACK_POINTER.index()] = STACK_POINTER_INITIAL;
        Self {
            gpr,
            pc: 0,
            flags: ComparisonFlags::default(),
        }
    }
}

impl RegisterFile {
    /// Reads a general-purpose register.
    #[must_use]
    pub const fn gpr(&self, reg: GeneralRegister) -> u8 {
        self.gpr[reg.index()]
    }

    /// Writes a general-purpose register.
    pub const fn set_gpr(&mut self, reg: GeneralRegister, value: u8) {
        self.gpr[reg.index()] = value;
    }

    /// Returns all general-purpose registers in index order.
    #[must_use]
    pub const fn gprs(&self) -> &[u8; GENERAL_REGISTER_COUNT] {
        &self.gpr
    }

    /// Reads the stack pointer (`R7`).
    #[must_use]
    pub const fn sp(&self) -> u8 {
        self.gpr(STACK_POINTER)
    }

    /// Writes the stack pointer (`R7`).
    pub const fn set_sp(&mut self, value: u8) {
        self.set_gpr(STACK_POINTER, value);
    }

    /// Reads the program counter.
    #[must_use]
    pub const fn pc(&self) -> u8 {
        self.pc
    }

    /// Writes the program counter.
    pub const fn set_pc(&mut self, value: u8) {
        self.pc = value;
    }

    /// Reads the comparison flags.
    #[must_use]
    pub const fn flags(&self) -> ComparisonFlags {
        self.flags
    }

    /// Mutable access to the comparison flags.
    pub const fn flags_mut(&mut self) -> &mut ComparisonFlags {
        &mut self.flags
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for reg in GeneralRegister::ALL {
            writeln!(f, "{reg}: {}", self.gpr(reg))?;
        }
        writeln!(f, "PC: {}", self.pc)?;
        write!(
            f,
            "FL: E={} G={} L={}",
            u8::from(self.flags.equal),
            u8::from(self.flags.greater),
            u8::from(self.flags.less)
        )
    }
}
