use std::fmt;

// Failure of a single backend fetch, as seen through the ports.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    NotFound,
    Upstream {
        status: u16,
        message: Option<String>,
    },
    Transport(String),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "resource not found"),
            FetchError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "upstream error {status}: {message}")
                } else {
                    write!(f, "upstream error {status}")
                }
            }
            FetchError::Transport(err) => write!(f, "transport error: {err}"),
            FetchError::Decode(err) => write!(f, "response decode error: {err}"),
        }
    }
}

impl std::error::Error for FetchError {}

// Outcome of a failed movie resolution. Both kinds redirect to the landing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    NotFound,
    FetchFailed,
}

impl From<FetchError> for ResolveError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound => ResolveError::NotFound,
            _ => ResolveError::FetchFailed,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound => write!(f, "movie not found"),
            ResolveError::FetchFailed => write!(f, "failed to fetch movie"),
        }
    }
}

impl std::error::Error for ResolveError {}
