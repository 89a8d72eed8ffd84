use log::{debug, warn};

use crate::{
    error::{AsmError, Result},
    labels::Labels,
    tokenizer::SourceLine,
};

struct FirstPass<'a> {
    cur_address: usize,
    known: &'a Labels,
    labels: Labels,
}

impl<'a> FirstPass<'a> {
    fn new(known: &'a Labels) -> Self {
        Self {
            cur_address: 0,
            known,
            labels: Labels::new(),
        }
    }

    fn visit_line(&mut self, line: &SourceLine) -> Result<()> {
        let Some(label) = line.label() else {
            // Directives take an address too
            self.cur_address += 1;
            return Ok(());
        };

        if self.known.contains(label) || self.labels.contains(label) {
            return Err(AsmError::DuplicateLabel {
                line: line.line_no,
                label: label.to_owned(),
            });
        }

        let address = u16::try_from(self.cur_address).map_err(|_| AsmError::AddressOverflow {
            line: line.line_no,
            label: label.to_owned(),
        })?;

        if !line.operands().is_empty() {
            warn!(
                "line {}: tokens after label {label} are ignored: {:?}",
                line.line_no,
                line.operands()
            );
        }

        debug!("label {label} = {address:#06x}");
        self.labels.add(label.to_owned(), address);

        Ok(())
    }
}

/// Assigns an instruction address to every label in `lines`.
///
/// Returns only the labels defined here; `known` holds labels already in
/// the session and is checked for duplicates but not modified.
pub fn pass_one(lines: &[SourceLine], known: &Labels) -> Result<Labels> {
    let mut pass = FirstPass::new(known);
    for line in lines {
        pass.visit_line(line)?;
    }

    debug!(
        "pass one: {} labels over {} addresses",
        pass.labels.len(),
        pass.cur_address
    );

    Ok(pass.labels)
}
