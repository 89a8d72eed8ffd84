use log::trace;
use nom::{
    character::complete::{digit1, one_of},
    combinator::{all_consuming, opt},
    sequence::pair,
    IResult,
};
use toydbg::DebugInfo;

use crate::{
    directive::{handle_directive, Directive},
    error::{AsmError, Result},
    labels::Labels,
    opcode::Opcode,
    record::Data,
    tokenizer::SourceLine,
};

/// What an operand token turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Label(u16),
    Literal(u16),
    /// A well-formed integer outside `0..=65535`.
    OutOfRange,
    Invalid,
}

fn integer_literal(i: &str) -> IResult<&str, (Option<char>, &str)> {
    all_consuming(pair(opt(one_of("+-")), digit1))(i)
}

impl Operand {
    /// Labels win over literals, so a label named `10` shadows the number.
    pub fn classify(token: &str, labels: &Labels) -> Self {
        if let Some(address) = labels.get(token) {
            return Operand::Label(address);
        }

        let Ok((_, (sign, digits))) = integer_literal(token) else {
            return Operand::Invalid;
        };

        match (sign, digits.parse::<u16>()) {
            (Some('-'), Ok(0)) => Operand::Literal(0),
            (Some('-'), _) | (_, Err(_)) => Operand::OutOfRange,
            (_, Ok(value)) => Operand::Literal(value),
        }
    }
}

struct PassTwo<'a> {
    labels: &'a Labels,
    cur_address: usize,
    data: Vec<Data>,
    offset: usize,
    debug: DebugInfo,
}

impl<'a> PassTwo<'a> {
    fn new(labels: &'a Labels) -> Self {
        Self {
            labels,
            cur_address: 0,
            data: Vec::new(),
            offset: 0,
            debug: DebugInfo::new(),
        }
    }

    fn add_data(&mut self, data: Data) {
        self.offset += data.len();
        self.data.push(data);
    }

    fn encode_operand(&self, line: &SourceLine, operand: &str) -> Result<Data> {
        match Operand::classify(operand, self.labels) {
            Operand::Label(value) | Operand::Literal(value) => Ok(Data::Word(value)),
            Operand::OutOfRange => Err(AsmError::OperandOutOfRange {
                line: line.line_no,
                operand: operand.to_owned(),
            }),
            Operand::Invalid => Err(AsmError::InvalidOperand {
                line: line.line_no,
                operand: operand.to_owned(),
            }),
        }
    }

    fn assemble_line(&mut self, line: &SourceLine) -> Result<()> {
        if line.label().is_some() {
            return Ok(());
        }

        let mnemonic = line.mnemonic().to_uppercase();
        let address = self.cur_address;
        self.cur_address += 1;

        let opcode = match Opcode::from_mnemonic(&mnemonic) {
            Some(opcode) => opcode,
            None if Directive::is_directive(&mnemonic) => {
                handle_directive(line.line_no, &mnemonic, line.operands())?;
                return Ok(());
            }
            None => {
                return Err(AsmError::InvalidInstruction {
                    line: line.line_no,
                    mnemonic,
                })
            }
        };

        self.debug
            .add_line(address, self.offset, line.text.clone(), line.line_no);
        self.add_data(Data::Opcode(opcode));

        for operand in line.operands() {
            let data = self.encode_operand(line, operand)?;
            self.add_data(data);
        }

        trace!(
            "{:04x}: {}",
            address,
            self.data[self.data.len() - 1 - line.operands().len()..]
                .iter()
                .map(Data::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );

        Ok(())
    }
}

/// Encodes every instruction line against a complete label table.
pub fn pass_two(lines: &[SourceLine], labels: &Labels) -> Result<(Vec<Data>, DebugInfo)> {
    let mut pass = PassTwo::new(labels);
    for line in lines {
        pass.assemble_line(line)?;
    }

    Ok((pass.data, pass.debug))
}
