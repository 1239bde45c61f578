//! Search session: mode selection and the idle/loading/success/error machine
//!
//! The current result is an immutable snapshot replaced wholesale on every
//! completed request. Nothing is merged.

use std::fmt;

use crate::backend::types::SearchResult;
use crate::error::Failure;

/// User-selected variant of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    All,
    Ai,
    Videos,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::All, SearchMode::Ai, SearchMode::Videos];

    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::All => "All",
            SearchMode::Ai => "AI Mode",
            SearchMode::Videos => "Videos",
        }
    }

    /// Parse a mode name as typed on the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "all" | "general" => Some(SearchMode::All),
            "ai" | "ai-synthesis" => Some(SearchMode::Ai),
            "videos" | "video" => Some(SearchMode::Videos),
            _ => None,
        }
    }

    /// Text actually sent to the provider for this mode
    pub fn rewrite(&self, query: &str) -> String {
        match self {
            SearchMode::Videos => format!("Find videos about: {}", query),
            SearchMode::All | SearchMode::Ai => query.to_string(),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(SearchResult),
    Error(String),
}

/// Transient view state for the current query
#[derive(Debug, Default)]
pub struct Session {
    query: String,
    mode: SearchMode,
    state: SearchState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SearchState::Loading
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Change mode. Never starts a search or touches the current result.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// Submit the current query.
    ///
    /// Returns the provider-ready query text when a request should be
    /// issued. Blank input or an in-flight request makes this a no-op.
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() || self.is_loading() {
            return None;
        }

        let outbound = self.mode.rewrite(trimmed);
        // Drop the previous result and error before the request starts.
        self.state = SearchState::Loading;
        Some(outbound)
    }

    /// Record the outcome of the in-flight request.
    ///
    /// Ignored unless a request is actually in flight.
    pub fn finish(&mut self, outcome: Result<SearchResult, Failure>) {
        if !self.is_loading() {
            tracing::warn!("Discarding search outcome with no request in flight");
            return;
        }

        self.state = match outcome {
            Ok(result) => SearchState::Success(result),
            Err(failure) => SearchState::Error(failure.display_message()),
        };
    }
}
