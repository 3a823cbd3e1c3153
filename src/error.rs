use miette::Diagnostic;
use thiserror::Error;

/// A shape code that does not follow the shapez grammar.
///
/// Raised by the parser at the first violation it finds. The message is
/// meant to be shown to the user as-is.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
#[diagnostic(code(shapez::format))]
pub struct ShapeFormatError {
    pub message: String,
}

impl ShapeFormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Main error type for shapez operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShapezError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] ShapeFormatError),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(shapez::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(shapez::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(shapez::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ShapezError>;
