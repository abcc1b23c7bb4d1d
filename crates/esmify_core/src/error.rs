use thiserror::Error;

/// Failures that abort a transform run while rewriting a single file.
#[derive(Debug, Error)]
pub enum EsmifyError {
    #[error("File \"{file}\", can not resolve import source \"{request}\"")]
    Unresolved { file: String, request: String },

    #[error("File \"{file}\", failed to parse: {message}")]
    Parse { file: String, message: String },
}
