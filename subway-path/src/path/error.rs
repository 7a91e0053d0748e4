//! Path query error types.

use super::search::SearchError;
use crate::domain::StationId;

/// Error from a path query.
///
/// Both variants describe a bad request rather than an internal fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and target are the same station
    #[error("source and target are the same station: {station}")]
    InvalidRequest { station: StationId },

    /// No route connects the two stations
    #[error("no path between station {from} and station {to}")]
    NoPath { from: StationId, to: StationId },
}

impl PathError {
    /// Attach the queried stations to a strategy failure.
    pub(crate) fn from_search(err: SearchError, from: StationId, to: StationId) -> Self {
        match err {
            SearchError::SameVertex => PathError::InvalidRequest { station: from },
            SearchError::Unreachable => PathError::NoPath { from, to },
        }
    }

    /// Returns true if the caller should report this as a client error.
    ///
    /// Every variant is currently a request-validation failure.
    pub fn is_client_error(&self) -> bool {
        match self {
            PathError::InvalidRequest { .. } | PathError::NoPath { .. } => true,
        }
    }
}
