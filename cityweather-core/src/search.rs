//! The two-call lookup behind a search.
//!
//! A lookup geocodes the query, then uses the first match to fetch current
//! weather. Each call is tracked as its own [`Step`]; the weather step stays
//! [`Step::Pending`] when geocoding did not produce a place, so a failed or
//! empty geocode never issues the second request.

use crate::{
    error::SearchError,
    model::{GeocodeResult, WeatherView},
    provider::WeatherProvider,
};

/// Progress of a single remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    Pending,
    Failed(SearchError),
    Done(T),
}

impl<T> Default for Step<T> {
    fn default() -> Self {
        Step::Pending
    }
}

impl<T> Step<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Step::Pending)
    }

    pub fn done(&self) -> Option<&T> {
        match self {
            Step::Done(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, SearchError>> for Step<T> {
    fn from(result: Result<T, SearchError>) -> Self {
        match result {
            Ok(value) => Step::Done(value),
            Err(err) => Step::Failed(err),
        }
    }
}

/// Both steps of one search, composed in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lookup {
    pub geocode: Step<GeocodeResult>,
    pub weather: Step<WeatherView>,
}

impl Lookup {
    /// Run geocoding and, if it yields a place, the weather call.
    pub async fn run(provider: &dyn WeatherProvider, city: &str) -> Self {
        let mut lookup = Lookup::default();

        lookup.geocode = first_match(provider, city).await.into();
        let Some(place) = lookup.geocode.done().cloned() else {
            return lookup;
        };

        lookup.weather = provider
            .current_weather(place.latitude, place.longitude)
            .await
            .map(|current| WeatherView::from_lookup(place, current))
            .map_err(SearchError::from)
            .into();

        lookup
    }

    /// Collapse both steps into the single outcome the form displays.
    pub fn outcome(self) -> Result<WeatherView, SearchError> {
        match (self.geocode, self.weather) {
            (Step::Failed(err), _) | (_, Step::Failed(err)) => Err(err),
            (_, Step::Done(view)) => Ok(view),
            _ => Err(SearchError::Request(crate::error::FALLBACK_MESSAGE.to_string())),
        }
    }
}

async fn first_match(
    provider: &dyn WeatherProvider,
    city: &str,
) -> Result<GeocodeResult, SearchError> {
    provider
        .geocode(city)
        .await?
        .into_iter()
        .next()
        .ok_or(SearchError::CityNotFound)
}
