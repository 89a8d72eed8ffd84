use std::fmt::Display;

use crate::{error::Result, opcode::Opcode};

/// One chunk of encoded output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Data {
    Opcode(Opcode),
    /// A 2-byte operand, big-endian.
    Word(u16),
    Byte(Vec<u8>),
}

impl Data {
    pub fn len(&self) -> usize {
        match self {
            Data::Opcode(_) => 1,
            Data::Word(_) => 2,
            Data::Byte(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Data::Opcode(op) => vec![op.byte()],
            Data::Word(word) => word.to_be_bytes().to_vec(),
            Data::Byte(bytes) => bytes.clone(),
        }
    }
}

impl Display for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

/// An element of a sequence awaiting linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Resolved(Data),
    Placeholder(String),
}

impl Slot {
    /// A resolved opcode chunk from its raw byte.
    pub fn opcode(byte: u8) -> Result<Self> {
        Ok(Slot::Resolved(Data::Opcode(Opcode::try_from(byte)?)))
    }

    pub fn placeholder(symbol: impl Into<String>) -> Self {
        Slot::Placeholder(symbol.into())
    }
}

impl From<Data> for Slot {
    fn from(data: Data) -> Self {
        Slot::Resolved(data)
    }
}
