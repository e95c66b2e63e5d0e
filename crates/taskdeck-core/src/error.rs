use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("authentication required")]
    Unauthorized,
    #[error("request rejected with status {status}: {detail}")]
    Validation { status: u16, detail: String },
    #[error("server failed with status {status}")]
    Server { status: u16 },
    #[error("network failure: {0}")]
    Network(String),
    #[error("malformed response payload: {0}")]
    Decode(String),
}

impl Failure {
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            401 => Failure::Unauthorized,
            400..=499 => Failure::Validation { status, detail },
            _ => Failure::Server { status },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Failure::Unauthorized)
    }
}
