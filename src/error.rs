use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing 'user_query' in request.")]
    MissingQuery,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Model invocation error: {0}")]
    Model(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("UTF-8 decode error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Underlying failure message without the variant prefix, as reported
    /// back to callers in the `details` field of a 500 response.
    pub fn details(&self) -> String {
        match self {
            Self::Config(s) | Self::InvalidBody(s) | Self::Model(s) => s.clone(),
            Self::MissingQuery => self.to_string(),
            Self::Serialization(e) => e.to_string(),
            Self::Utf8(e) => e.to_string(),
            Self::Yaml(e) => e.to_string(),
            Self::Io(e) => e.to_string(),
            Self::AddrParse(e) => e.to_string(),
        }
    }

    /// Caller input errors, as opposed to internal or upstream failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingQuery)
    }
}
