//! Search-and-display state machine.
//!
//! [`SearchForm`] owns the query text and the display [`Status`]. A submission
//! is split into [`SearchForm::begin_submit`] and [`SearchForm::complete`] so a
//! front end can render the `Loading` state between the two; [`SearchForm::submit`]
//! runs the whole sequence against a provider.

use crate::{error::SearchError, model::WeatherView, provider::WeatherProvider, search::Lookup};

/// What the form is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(WeatherView),
}

/// Result of asking the form to start a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A search for this trimmed city name is now in flight.
    Started(String),
    /// The query was blank; the form shows the empty-query error.
    Rejected,
    /// A search is already in flight; nothing changed.
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    query: String,
    status: Status,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Edit the query. Ignored while a search is in flight, like a disabled input.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if !self.is_loading() {
            self.query = query.into();
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// The result card, if one should be shown.
    pub fn result(&self) -> Option<&WeatherView> {
        match &self.status {
            Status::Success(view) => Some(view),
            _ => None,
        }
    }

    /// Validate the query and enter `Loading`, dropping any previous error or result.
    pub fn begin_submit(&mut self) -> Submission {
        if self.is_loading() {
            tracing::debug!("search already in flight, ignoring submit");
            return Submission::Busy;
        }

        let city = self.query.trim();
        if city.is_empty() {
            self.status = Status::Error(SearchError::EmptyQuery.to_string());
            return Submission::Rejected;
        }

        let city = city.to_string();
        self.status = Status::Loading;
        Submission::Started(city)
    }

    /// Leave `Loading` with the outcome of the lookup.
    pub fn complete(&mut self, outcome: Result<WeatherView, SearchError>) {
        match outcome {
            Ok(view) => {
                tracing::info!(city = %view.city, country = %view.country, "weather lookup succeeded");
                self.status = Status::Success(view);
                self.query.clear();
            }
            Err(err) => {
                tracing::warn!(error = %err, "weather lookup failed");
                self.status = Status::Error(err.to_string());
            }
        }
    }

    /// Run a full submission: validate, geocode, fetch weather, update status.
    pub async fn submit(&mut self, provider: &dyn WeatherProvider) -> Submission {
        let submission = self.begin_submit();
        if let Submission::Started(city) = &submission {
            let outcome = Lookup::run(provider, city).await.outcome();
            self.complete(outcome);
        }
        submission
    }
}
