use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Please log in to continue")]
    NotLoggedIn,
    #[error("Please enter a YouTube URL")]
    EmptyUrl,
    #[error("Please enter a valid YouTube URL")]
    InvalidUrl,
    #[error("Cannot connect to the server. Please make sure the backend is running on {endpoint}")]
    Unreachable { endpoint: String },
    /// Non-success answer from the comparison backend, already turned into a readable message.
    #[error("{0}")]
    Backend(String),
    #[error("Error from serde decode: {0}")]
    Decode(String),
    #[error("{0}")]
    Identity(String),
    #[error("Could not reach the server: {0}")]
    ServerFn(String),
    #[error("Your request is incorrect: {0}")]
    InvalidRequest(String),
    #[error("A env was not found: {0}")]
    EnvNotFound(String),
}

impl From<Error> for String {
    fn from(val: Error) -> Self {
        match val {
            Error::Backend(s) => s,
            Error::Identity(s) => s,
            other => other.to_string(),
        }
    }
}

impl From<leptos::prelude::ServerFnError> for Error {
    fn from(e: leptos::prelude::ServerFnError) -> Self {
        use leptos::prelude::ServerFnError;
        match e {
            ServerFnError::ServerError(message) => Error::Backend(message),
            ServerFnError::Request(message) => Error::ServerFn(message),
            other => Error::ServerFn(other.to_string()),
        }
    }
}

impl From<std::env::VarError> for Error {
    fn from(value: std::env::VarError) -> Self {
        Error::EnvNotFound(value.to_string())
    }
}

#[cfg(feature = "ssr")]
impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Decode(value.to_string())
    }
}
