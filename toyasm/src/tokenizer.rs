use nom::{
    bytes::complete::{take_till1, take_while},
    multi::many0,
    sequence::{preceded, terminated},
    IResult,
};

use crate::options::Options;

pub const COMMENT: char = ';';
pub const LABEL_TERMINATOR: char = ':';

/// A non-blank, non-comment source line split into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub line_no: usize,
    pub text: String,
    tokens: Vec<String>,
}

impl SourceLine {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The label this line defines, with the terminator stripped.
    pub fn label(&self) -> Option<&str> {
        self.tokens[0]
            .strip_suffix(LABEL_TERMINATOR)
            .map(|name| name.trim_end_matches(LABEL_TERMINATOR))
    }

    pub fn mnemonic(&self) -> &str {
        &self.tokens[0]
    }

    pub fn operands(&self) -> &[String] {
        &self.tokens[1..]
    }
}

fn is_space(c: char) -> bool {
    c.is_whitespace()
}

fn is_space_or_comma(c: char) -> bool {
    c.is_whitespace() || c == ','
}

fn split_tokens(line: &str, separator: fn(char) -> bool) -> Vec<&str> {
    let parsed: IResult<&str, Vec<&str>> = preceded(
        take_while(separator),
        many0(terminated(take_till1(separator), take_while(separator))),
    )(line);

    // many0 accepts an empty match, so this only ever yields Ok
    parsed.map(|(_, tokens)| tokens).unwrap_or_default()
}

pub fn tokenize(program: &str, options: &Options) -> Vec<SourceLine> {
    let separator: fn(char) -> bool = if options.strip_commas {
        is_space_or_comma
    } else {
        is_space
    };

    program
        .lines()
        .enumerate()
        .filter_map(|(idx, text)| {
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
                return None;
            }

            let tokens = split_tokens(trimmed, separator)
                .into_iter()
                .map(str::to_owned)
                .collect::<Vec<_>>();

            (!tokens.is_empty()).then(|| SourceLine {
                line_no: idx + 1,
                text: text.to_owned(),
                tokens,
            })
        })
        .collect()
}
