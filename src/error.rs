//! Error types for configuration and search
//!
//! Errors are `Clone` so they can be carried inside iced messages.
//! No API keys appear in any message.

/// Startup configuration failures. These are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API_KEY environment variable not set.")]
    MissingApiKey,

    #[error("invalid base URL {0:?}")]
    InvalidBaseUrl(String),
}

/// Failures of a single provider call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Failed to fetch from Gemini API: query must not be empty")]
    EmptyQuery,

    #[error("Failed to fetch from Gemini API: {0}")]
    Http(String),

    #[error("Failed to fetch from Gemini API: status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to fetch from Gemini API: malformed response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Http(err.to_string())
    }
}

/// What the view receives when a search does not produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A failure the search client recognized and described.
    Search(SearchError),
    /// The search task died without reporting anything.
    Unexpected,
}

impl Failure {
    /// Banner text shown to the user.
    pub fn display_message(&self) -> String {
        match self {
            Failure::Search(err) => format!("Error: {}", err),
            Failure::Unexpected => "An unexpected error occurred.".to_string(),
        }
    }
}

impl From<SearchError> for Failure {
    fn from(err: SearchError) -> Self {
        Failure::Search(err)
    }
}
