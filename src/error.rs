use thiserror::Error;

pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const MISSING_FIELDS: &str = "Please enter your email and choose an activity.";
pub const SERVER_FALLBACK: &str = "An error occurred";

/// Which write request a failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SignUp,
    Unregister,
}

impl Action {
    fn failure_text(self) -> &'static str {
        match self {
            Action::SignUp => "Failed to sign up. Please try again.",
            Action::Unregister => "Failed to unregister. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("request failed: {0}")]
    Network(String),

    #[error("server answered HTTP {status}")]
    Server { status: u16, detail: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl BoardError {
    /// Text shown in the message region when `action` fails with this error.
    pub fn notice(&self, action: Action) -> String {
        match self {
            BoardError::MissingField(_) => MISSING_FIELDS.to_string(),
            BoardError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            BoardError::Server { detail: None, .. } => SERVER_FALLBACK.to_string(),
            BoardError::Network(_) | BoardError::Decode(_) => action.failure_text().to_string(),
        }
    }
}

impl From<gloo_net::Error> for BoardError {
    fn from(e: gloo_net::Error) -> Self {
        BoardError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::Decode(e.to_string())
    }
}
