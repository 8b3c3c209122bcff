use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserFileError {
    #[error("--operation flag has to be specified")]
    MissingOperation,

    #[error("Operation {0} not allowed!")]
    InvalidOperation(String),

    #[error("--item flag has to be specified")]
    MissingItem,

    #[error("--id flag has to be specified")]
    MissingId,

    #[error("--fileName flag has to be specified")]
    MissingFileName,

    #[error("bad file extension. Use -h to see allowed extensions")]
    InvalidFileExtension,

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl UserFileError {
    /// True for errors raised before any file is touched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            UserFileError::MissingOperation
                | UserFileError::InvalidOperation(_)
                | UserFileError::MissingItem
                | UserFileError::MissingId
                | UserFileError::MissingFileName
                | UserFileError::InvalidFileExtension
        )
    }
}

pub type Result<T> = std::result::Result<T, UserFileError>;
