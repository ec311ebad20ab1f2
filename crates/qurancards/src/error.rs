#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<qurancards_core::reference::ReferenceError> for Error {
    fn from(err: qurancards_core::reference::ReferenceError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

impl From<qurancards_core::provider::ContentError> for Error {
    fn from(err: qurancards_core::provider::ContentError) -> Self {
        use qurancards_core::provider::ContentError;

        match err {
            ContentError::NotFound(what) => Error::NotFound(what),
            ContentError::Network(msg) => Error::Network(msg),
            ContentError::Decode(msg) => Error::Generic(format!("Unexpected API response: {msg}")),
        }
    }
}
