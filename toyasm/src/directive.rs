use std::str::FromStr;

use log::debug;
use strum_macros::{Display, EnumString};

use crate::error::{AsmError, Result};

/// Section directives. Neither has a layout effect yet; they are only
/// validated.
#[derive(EnumString, Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    #[strum(serialize = ".DATA")]
    Data,
    #[strum(serialize = ".TEXT")]
    Text,
}

impl Directive {
    pub fn is_directive(mnemonic: &str) -> bool {
        mnemonic.starts_with('.')
    }
}

/// Validates a directive line. `name` is the uppercased first token.
pub fn handle_directive(line: usize, name: &str, operands: &[String]) -> Result<Directive> {
    let directive = Directive::from_str(name).map_err(|_| AsmError::InvalidDirective {
        line,
        directive: name.to_owned(),
    })?;

    match directive {
        Directive::Data | Directive::Text => {
            debug!("{directive} on line {line} ({} operands ignored)", operands.len());
        }
    }

    Ok(directive)
}
