use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("Duplicate label at line {line}: {label}")]
    DuplicateLabel { line: usize, label: String },
    #[error("Invalid instruction at line {line}: {mnemonic}")]
    InvalidInstruction { line: usize, mnemonic: String },
    #[error("Invalid directive at line {line}: {directive}")]
    InvalidDirective { line: usize, directive: String },
    #[error("Invalid operand at line {line}: {operand}")]
    InvalidOperand { line: usize, operand: String },
    #[error("Operand out of range at line {line}: {operand} (expected 0..=65535)")]
    OperandOutOfRange { line: usize, operand: String },
    #[error("Label {label} at line {line} lies past the last addressable instruction")]
    AddressOverflow { line: usize, label: String },
    #[error("Undefined symbol: {symbol}")]
    UndefinedSymbol { symbol: String },
    #[error("Invalid opcode: {0:#04x}")]
    InvalidOpcode(u8),
}

pub type Result<T> = std::result::Result<T, AsmError>;
