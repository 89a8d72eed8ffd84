use std::env;

pub const STRIP_COMMAS_VAR: &str = "TOYASM_STRIP_COMMAS";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Treat commas as token separators, so `ADD 1, 2` has the operands
    /// `1` and `2`. When off, a comma stays part of the token it touches.
    pub strip_commas: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strip_commas(mut self, strip: bool) -> Self {
        self.strip_commas = strip;
        self
    }

    /// Reads options from the environment, defaulting anything unset.
    pub fn from_env() -> Self {
        let strip_commas = env::var(STRIP_COMMAS_VAR)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self { strip_commas }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
