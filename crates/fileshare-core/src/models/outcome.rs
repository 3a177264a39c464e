use super::DirectoryEntry;
use crate::error::FetchError;

/// A successfully decoded directory listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Children of the listed directory, in server order
    pub entries: Vec<DirectoryEntry>,
    /// Network address of the service, used for share links
    pub local_address: String,
    /// Canonical path of the listed directory
    pub path: String,
}

/// Result of one listing request.
///
/// Failures are values, not errors: a failed listing is logged and the
/// previous view stays visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingOutcome {
    /// The service returned a listing
    Listing(Listing),
    /// The request failed or the service reported an error
    Failure {
        /// Diagnostic text
        message: String,
    },
}

impl ListingOutcome {
    /// Build a failure outcome from any message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Whether this outcome carries a listing.
    pub fn is_listing(&self) -> bool {
        matches!(self, Self::Listing(_))
    }
}

impl From<FetchError> for ListingOutcome {
    fn from(err: FetchError) -> Self {
        Self::failure(err.to_string())
    }
}

impl From<Listing> for ListingOutcome {
    fn from(listing: Listing) -> Self {
        Self::Listing(listing)
    }
}
