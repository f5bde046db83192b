use crate::lexical::LexerError;
use crate::logging::Code;
use crate::syntax::SyntaxError;

/// Pipeline processing errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("Lexical analysis failed: {0}")]
    LexicalAnalysis(#[from] LexerError),

    #[error("Syntax analysis failed: {0}")]
    SyntaxAnalysis(#[from] SyntaxError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    /// Diagnostic code of the underlying failure
    pub fn error_code(&self) -> Code {
        match self {
            Self::LexicalAnalysis(inner) => inner.error_code(),
            Self::SyntaxAnalysis(inner) => inner.error_code(),
            Self::Pipeline { .. } => crate::logging::codes::system::INTERNAL_ERROR,
        }
    }
}
