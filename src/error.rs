use std::io;

use thiserror::Error;

/// Error type for library operations
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The role tag does not name a known user variant
    #[error("unknown role tag: {0:?}")]
    UnknownRole(String),
    /// Writing a line to the notification sink failed
    #[error("failed to deliver notification to {observer}: {source}")]
    Delivery {
        /// Name of the observer whose line could not be written
        observer: String,
        /// Underlying sink error
        #[source]
        source: io::Error,
    },
    /// An observer refused to process an update
    #[error("observer {observer} rejected update: {reason}")]
    Rejected {
        /// Name of the rejecting observer
        observer: String,
        /// Why the update was refused
        reason: String,
    },
}
