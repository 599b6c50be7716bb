//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error (transport failure, bad response, HTTP error)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Requested item does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Outcome taxonomy of a failed route calculation
///
/// The `Display` text is the message shown to the user in the error area.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Start or end location missing; no provider call was made
    #[error("Please enter both start and end locations.")]
    EmptyInput,

    /// Provider answered `ZERO_RESULTS`
    #[error(
        "No route found between these locations. Please check the addresses or try different ones."
    )]
    NoRouteFound,

    /// Any other provider status, or a transport failure
    #[error(
        "Error: {0}. Please try valid addresses, ensure your API key is correct, and all necessary \
         Google Maps APIs (Maps JavaScript, Geocoding, Directions, Places) are enabled in your \
         Google Cloud Console with proper restrictions."
    )]
    Provider(String),
}

impl RouteError {
    /// Whether this is an expected outcome rather than a failure
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::NoRouteFound)
    }

    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::NoRouteFound => "no_route",
            Self::Provider(_) => "failed",
        }
    }

    /// Provider failure from a non-OK directions status
    #[must_use]
    pub fn from_status(status: &str, provider_message: Option<&str>) -> Self {
        match provider_message.filter(|m| !m.trim().is_empty()) {
            Some(message) => Self::Provider(format!(
                "Directions request failed: {status} ({message})"
            )),
            None => Self::Provider(format!("Directions request failed: {status}")),
        }
    }
}
