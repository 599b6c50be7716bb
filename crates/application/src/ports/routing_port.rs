//! Routing service port
//!
//! Defines the interface for driving directions between two free-text
//! locations. Adapters in the infrastructure layer implement this port using
//! a directions API.

use std::fmt;

use async_trait::async_trait;
use domain::RoutePath;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A single routing request, always for driving directions in metric units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Origin as entered (address or place name)
    pub origin: String,
    /// Destination as entered
    pub destination: String,
}

impl RouteRequest {
    /// Driving directions from `origin` to `destination`
    #[must_use]
    pub fn driving(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Top-level status of a directions response
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirectionsStatus {
    /// At least one route was found
    Ok,
    /// The provider found no route between origin and destination
    ZeroResults,
    /// Any other status code, kept verbatim (e.g. `NOT_FOUND`, `REQUEST_DENIED`)
    Other(String),
}

impl DirectionsStatus {
    /// Parse a provider status code
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            other => Self::Other(other.to_string()),
        }
    }

    /// Provider status code
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for DirectionsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider answer to a routing request
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsReply {
    pub status: DirectionsStatus,
    /// Provider explanation accompanying non-OK statuses
    pub error_message: Option<String>,
    /// Candidate paths, best first
    pub routes: Vec<RoutePath>,
}

impl DirectionsReply {
    /// Reply carrying a bare status and no routes
    #[must_use]
    pub fn status_only(status: DirectionsStatus) -> Self {
        Self {
            status,
            error_message: None,
            routes: Vec::new(),
        }
    }
}

/// Port for routing operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Issue one routing request and return the provider's reply
    ///
    /// Transport failures are returned as `Err`; provider statuses (including
    /// errors such as `REQUEST_DENIED`) are returned inside the reply.
    async fn route(&self, request: &RouteRequest) -> Result<DirectionsReply, ApplicationError>;

    /// Check if the routing service is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn RoutingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RoutingPort>();
    }

    #[test]
    fn driving_request_keeps_texts() {
        let request = RouteRequest::driving("Clock Tower", "FRI");
        assert_eq!(request.origin, "Clock Tower");
        assert_eq!(request.destination, "FRI");
    }

    #[test]
    fn status_parsing() {
        assert_eq!(DirectionsStatus::parse("OK"), DirectionsStatus::Ok);
        assert_eq!(DirectionsStatus::parse("ZERO_RESULTS"), DirectionsStatus::ZeroResults);
        assert_eq!(
            DirectionsStatus::parse("OVER_QUERY_LIMIT"),
            DirectionsStatus::Other("OVER_QUERY_LIMIT".to_string())
        );
        assert_eq!(DirectionsStatus::parse("NOT_FOUND").to_string(), "NOT_FOUND");
    }
}
