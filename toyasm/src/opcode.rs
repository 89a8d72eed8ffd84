use std::str::FromStr;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::AsmError;

#[allow(clippy::upper_case_acronyms)]
#[derive(FromPrimitive, EnumString, EnumIter, Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    ADD = 0x01,
    SUB = 0x02,
    MOV = 0x03,
    LDR = 0x04,
    STR = 0x05,
    MUL = 0x06,
    DIV = 0x07,
    AND = 0x08,
    OR = 0x09,
    XOR = 0x0A,
    NOT = 0x0B,
    JMP = 0x0C,
    JZ = 0x0D,
    JNZ = 0x0E,
    JEQ = 0x0F,
    JNE = 0x10,
    JGT = 0x11,
    JLT = 0x12,
    IN = 0x13,
    OUT = 0x14,
}

impl Opcode {
    /// Looks up an already-uppercased mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::from_str(mnemonic).ok()
    }

    pub fn byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = AsmError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        FromPrimitive::from_u8(byte).ok_or(AsmError::InvalidOpcode(byte))
    }
}
