//! Infix to postfix conversion.

pub mod token;

mod scan;


/// The input limit when none is configured.
/// Matches a 1000-byte line buffer, less its terminator.
pub const DEFAULT_MAX_INPUT_LEN: usize = 999;

/// Knobs for a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Longest accepted input, in bytes.
    pub max_input_len: usize,
    /// Reject input that leaves a `(` open at the end.
    ///
    /// When unset, leftover `(` markers are flushed to the output like any other entry.
    pub strict_parens: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            strict_parens: false,
        }
    }
}

impl Config {
    pub fn with_max_input_len(self, max_input_len: usize) -> Self {
        Config {
            max_input_len,
            ..self
        }
    }

    pub fn with_strict_parens(self, strict_parens: bool) -> Self {
        Config {
            strict_parens,
            ..self
        }
    }
}

/// Error type if a conversion does not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertErr {
    /// The input is longer than the configured maximum.
    InputTooLong { len: usize, max: usize },
    /// A `)` with no `(` pending. Column is 1-indexed.
    UnmatchedClose { column: usize },
    /// Input ended with `(` still open; only reported under `strict_parens`.
    UnclosedOpen { count: usize },
}

impl std::fmt::Display for ConvertErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            ConvertErr::InputTooLong { len, max } => {
                write!(f, "input of {len} bytes exceeds the limit of {max}")
            }
            ConvertErr::UnmatchedClose { column } => {
                write!(f, "right paren at column {column} has no matching left paren")
            }
            ConvertErr::UnclosedOpen { count } => {
                write!(f, "got end of input with {count} left paren(s) still open")
            }
        }
    }
}

impl std::error::Error for ConvertErr {}

pub type ConvertResult<T> = Result<T, ConvertErr>;

/// Convert an infix expression to postfix, with the default configuration.
pub fn convert(infix: &str) -> ConvertResult<String> {
    convert_with(infix, &Config::default())
}

/// Convert an infix expression to postfix.
///
/// Each character is one token. Operands are copied through in order;
/// operators come out after their operands and parens are dropped.
pub fn convert_with(infix: &str, config: &Config) -> ConvertResult<String> {
    let len = infix.len();
    if len > config.max_input_len {
        tracing::debug!(len, max = config.max_input_len, "rejecting long input");
        return Err(ConvertErr::InputTooLong {
            len,
            max: config.max_input_len,
        });
    }

    let result = scan::scan(infix, config);
    match &result {
        Ok(postfix) => tracing::debug!(infix, postfix = postfix.as_str(), "converted"),
        Err(err) => tracing::debug!(infix, %err, "conversion failed"),
    }
    result
}
