use log::debug;
use toydbg::DebugInfo;

use pass_one::pass_one;
use pass_two::pass_two;
use pipeline::{calculate_addresses, error_scan, generate_output, optimize};

pub use error::{AsmError, Result};
pub use labels::Labels;
pub use opcode::Opcode;
pub use options::Options;
pub use record::{Data, Slot};

pub mod directive;
pub mod error;
pub mod labels;
pub mod link;
pub mod opcode;
pub mod options;
pub mod pass_one;
pub mod pass_two;
pub mod pipeline;
pub mod record;
pub mod tokenizer;

/// An assembly session.
///
/// Labels defined by one [`Assembler::assemble`] call stay in the symbol
/// table for later calls, so assembling the same source twice on one
/// session fails with a duplicate label. Use [`Assembler::reset`] or a new
/// session per independent unit.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    options: Options,
    labels: Labels,
    externals: Labels,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Assemble a program from text.
    ///
    /// Returns the hex-encoded output and the error scan's diagnostics.
    ///
    /// # Errors
    ///
    /// If there's an error in the assembly code
    pub fn assemble(&mut self, program_text: &str) -> Result<(String, Vec<String>)> {
        let (output, diagnostics, _) = self.assemble_with_debug(program_text)?;
        Ok((output, diagnostics))
    }

    pub fn assemble_with_debug(
        &mut self,
        program_text: &str,
    ) -> Result<(String, Vec<String>, DebugInfo)> {
        let lines = tokenizer::tokenize(program_text, &self.options);
        debug!("starting pass one over {} lines", lines.len());

        let defined = pass_one(&lines, &self.labels)?;
        self.labels.extend(defined);

        debug!("starting pass two");
        let (data, mut debug) = pass_two(&lines, &self.labels)?;

        let data = calculate_addresses(optimize(data));
        let diagnostics = error_scan(&data);
        let output = generate_output(&data);

        for (label, address) in self.labels.iter() {
            debug.add_label(label.to_owned(), address);
        }

        Ok((output, diagnostics, debug))
    }

    /// Resolves the placeholders of `slots` against the external symbols.
    pub fn link(&self, slots: Vec<Slot>) -> Result<Vec<Data>> {
        link::link(slots, &self.externals)
    }

    pub fn add_symbol(&mut self, label: impl Into<String>, address: u16) {
        self.labels.add(label.into(), address);
    }

    pub fn add_external_symbol(&mut self, symbol: impl Into<String>, address: u16) {
        self.externals.add(symbol.into(), address);
    }

    pub fn symbols(&self) -> &Labels {
        &self.labels
    }

    pub fn external_symbols(&self) -> &Labels {
        &self.externals
    }

    /// Forgets every label. External symbols are kept.
    pub fn reset(&mut self) {
        self.labels.clear();
    }
}

/// Assemble a program on a fresh session configured from the environment
/// (see [`Options::from_env`]).
///
/// # Errors
///
/// If there's an error in the assembly code
pub fn assemble_program(program_text: &str) -> Result<(String, Vec<String>)> {
    Assembler::with_options(Options::from_env()).assemble(program_text)
}
