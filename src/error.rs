use miette::Diagnostic;
use thiserror::Error;

/// Main error type for levelz operations
#[derive(Error, Diagnostic, Debug)]
pub enum LevelError {
    #[error("IO error: {0}")]
    #[diagnostic(code(levelz::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(levelz::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("{}{message}", line_prefix(.line))]
    #[diagnostic(code(levelz::format))]
    Format {
        line: Option<usize>,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{}invalid number `{text}`", line_prefix(.line))]
    #[diagnostic(code(levelz::number))]
    NumericParse { line: Option<usize>, text: String },

    #[error("missing `---` delimiter between header and body")]
    #[diagnostic(
        code(levelz::missing_delimiter),
        help("separate the header section from the body with a line containing only `---`")
    )]
    MissingDelimiter,

    #[error("missing required header `type`")]
    #[diagnostic(
        code(levelz::missing_header),
        help("add `@type 2` or `@type 3` to the header section")
    )]
    MissingRequiredHeader,

    #[error("unknown level dimension `{0}` (expected `2` or `3`)")]
    #[diagnostic(code(levelz::dimension))]
    UnknownDimension(String),
}

impl LevelError {
    /// A format error with no known line number.
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format {
            line: None,
            message: message.into(),
            help: None,
        }
    }

    /// A format error with a fix suggestion.
    pub(crate) fn format_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Format {
            line: None,
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// A numeric parse error for the given token.
    pub(crate) fn numeric(text: impl Into<String>) -> Self {
        Self::NumericParse {
            line: None,
            text: text.into(),
        }
    }

    /// Attach a 1-based line number to errors raised while scanning a line.
    ///
    /// Only `Format` and `NumericParse` carry positions; other variants pass
    /// through unchanged. An already-set line is kept.
    pub(crate) fn at_line(self, line_no: usize) -> Self {
        match self {
            Self::Format {
                line: None,
                message,
                help,
            } => Self::Format {
                line: Some(line_no),
                message,
                help,
            },
            Self::NumericParse { line: None, text } => Self::NumericParse {
                line: Some(line_no),
                text,
            },
            other => other,
        }
    }
}

fn line_prefix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!("line {}: ", n),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, LevelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_without_line() {
        let err = LevelError::format("bad shape");
        assert_eq!(err.to_string(), "bad shape");
    }

    #[test]
    fn test_at_line_sets_position() {
        let err = LevelError::format("bad shape").at_line(7);
        assert_eq!(err.to_string(), "line 7: bad shape");
    }

    #[test]
    fn test_at_line_keeps_existing_position() {
        let err = LevelError::format("bad shape").at_line(7).at_line(12);
        assert_eq!(err.to_string(), "line 7: bad shape");
    }

    #[test]
    fn test_numeric_error_display() {
        let err = LevelError::numeric("abc").at_line(3);
        assert_eq!(err.to_string(), "line 3: invalid number `abc`");
    }

    #[test]
    fn test_at_line_passes_other_variants_through() {
        let err = LevelError::MissingDelimiter.at_line(4);
        assert!(matches!(err, LevelError::MissingDelimiter));
    }
}
