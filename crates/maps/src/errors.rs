use crate::domain::DirectionsStatus;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("script request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("script host returned status {0}")]
    Status(u16),

    #[error("not ready after {attempts} attempts")]
    NotReady { attempts: u32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectionsError {
    #[error("Google Maps API key not found. Please check your .env file.")]
    MissingApiKey,

    #[error("Failed to load Google Maps: {0}")]
    ScriptLoad(String),

    #[error("Google Maps failed to initialize")]
    NotReady,

    #[error("Failed to get directions: {0}")]
    RouteStatus(DirectionsStatus),

    #[error("Directions request was superseded")]
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    #[error("API key not configured")]
    MissingApiKey,
}

/// What the caller may offer the user after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Recovery {
    Reload,
    None,
}

impl DirectionsError {
    pub fn recovery(&self) -> Recovery {
        match self {
            DirectionsError::MissingApiKey
            | DirectionsError::ScriptLoad(_)
            | DirectionsError::NotReady => Recovery::Reload,
            DirectionsError::RouteStatus(_) | DirectionsError::Discarded => Recovery::None,
        }
    }

    /// Status literal for the error view. Script-side failures have none.
    pub fn status(&self) -> Option<&str> {
        match self {
            DirectionsError::RouteStatus(status) => Some(status.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_status_message_names_the_literal() {
        let err = DirectionsError::RouteStatus(DirectionsStatus::ZeroResults);

        assert_eq!(err.to_string(), "Failed to get directions: ZERO_RESULTS");
        assert_eq!(err.recovery(), Recovery::None);
        assert_eq!(err.status(), Some("ZERO_RESULTS"));
    }

    #[test]
    fn script_failures_offer_reload() {
        assert_eq!(DirectionsError::MissingApiKey.recovery(), Recovery::Reload);
        assert_eq!(
            DirectionsError::ScriptLoad("boom".into()).recovery(),
            Recovery::Reload
        );
        assert_eq!(DirectionsError::NotReady.recovery(), Recovery::Reload);
    }
}
