use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkerError>;

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to compress request body: {0}")]
    Compression(#[source] std::io::Error),

    #[error("Response body is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Response body does not match the requested type: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl WorkerError {
    /// Stable code for the failure, suitable for logs and console output.
    pub fn code(&self) -> &'static str {
        match self {
            WorkerError::InvalidArgument(_) => "INVALID_ARGUMENT",
            WorkerError::InvalidUrl(_) => "INVALID_URL",
            WorkerError::InvalidHeader(_) => "INVALID_HEADER",
            WorkerError::RequestFailed(e) => {
                if e.is_timeout() {
                    "TIMEOUT"
                } else if e.is_connect() {
                    "CONNECTION_FAILED"
                } else if e.is_request() {
                    "REQUEST_ERROR"
                } else {
                    "REQUEST_FAILED"
                }
            }
            WorkerError::Serialize(_) => "SERIALIZE_ERROR",
            WorkerError::Compression(_) => "COMPRESSION_ERROR",
            WorkerError::Parse(_) => "PARSE_ERROR",
            WorkerError::Deserialize(_) => "DESERIALIZE_ERROR",
        }
    }

    /// True for failures raised by argument validation, before any I/O.
    pub fn is_argument(&self) -> bool {
        matches!(
            self,
            WorkerError::InvalidArgument(_)
                | WorkerError::InvalidUrl(_)
                | WorkerError::InvalidHeader(_)
        )
    }
}
