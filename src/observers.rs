use std::io::Write;

use log::info;

use crate::{book::Book, error::LibraryError};

/// Trait for book availability observation
pub trait BookObserver {
    /// Called once per registration every time the book's availability is set
    ///
    /// # Errors
    ///
    /// An error stops the fan-out and is returned from the mutator that
    /// triggered it.
    fn update(&self, book: &Book, out: &mut dyn Write) -> Result<(), LibraryError>;
}

/// Logs every availability update through the `log` facade
#[derive(Debug, Default)]
pub struct AvailabilityLogger;

impl BookObserver for AvailabilityLogger {
    fn update(&self, book: &Book, _out: &mut dyn Write) -> Result<(), LibraryError> {
        let state = if book.is_available() { "available" } else { "unavailable" };
        info!("LOGGER: {} by {} is now {state}", book.title(), book.author());
        Ok(())
    }
}
