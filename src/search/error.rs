use crate::Point;
use std::fmt;
use thiserror::Error;

/// Which end of a search request is meant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// where the search starts
    Origin,
    /// where the search is supposed to end
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Origin => write!(fmt, "origin"),
            Endpoint::Destination => write!(fmt, "destination"),
        }
    }
}

/// The reasons a search can fail to deliver a Path.
///
/// None of these are faults: they describe the map and the request, and the caller is expected
/// to handle all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// An endpoint is out of bounds or not traversable. Reported before any searching happens.
    #[error("invalid search request: the {endpoint} {point:?} is not a traversable cell")]
    InvalidSearchRequest {
        /// the offending endpoint
        endpoint: Endpoint,
        /// its position
        point: Point,
    },
    /// Every cell reachable from the origin was expanded without reaching the destination.
    #[error("no path exists from {origin:?} to {destination:?}")]
    NoPathExists {
        /// where the search started
        origin: Point,
        /// the unreachable destination
        destination: Point,
    },
    /// The search expanded the maximum number of cells without reaching a conclusion.
    #[error("search gave up after {iterations} iterations")]
    IterationLimitExceeded {
        /// the number of expansions performed
        iterations: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = SearchError::InvalidSearchRequest {
            endpoint: Endpoint::Destination,
            point: (3, -1),
        };
        assert_eq!(
            err.to_string(),
            "invalid search request: the destination (3, -1) is not a traversable cell"
        );
        let err = SearchError::IterationLimitExceeded { iterations: 500 };
        assert_eq!(err.to_string(), "search gave up after 500 iterations");
    }
}
