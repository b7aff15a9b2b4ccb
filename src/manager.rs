//! Process-wide library manager handle.

use std::sync::OnceLock;

use log::debug;

/// The single library manager for this process
///
/// It carries no operations yet; obtain it with [`LibraryManager::get_instance`].
#[derive(Debug)]
pub struct LibraryManager {
    /// Keeps the constructor private to this module
    _private: (),
}

/// Lazily initialised on first request
static INSTANCE: OnceLock<LibraryManager> = OnceLock::new();

impl LibraryManager {
    /// Get the process-wide handle, creating it on the first call
    #[must_use]
    pub fn get_instance() -> &'static Self {
        INSTANCE.get_or_init(|| {
            debug!("creating library manager");
            Self { _private: () }
        })
    }
}
