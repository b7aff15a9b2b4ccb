//! Library book availability notifications.
//!
//! Books keep a list of subscribed observers and push an update to each of
//! them whenever their availability is set. Users are built directly or from
//! a role tag through [`UserFactory`], and a single [`LibraryManager`] handle
//! exists per process.

pub mod book;
pub mod error;
pub mod factory;
pub mod manager;
pub mod observers;
pub mod user;

pub use book::Book;
pub use error::LibraryError;
pub use factory::UserFactory;
pub use manager::LibraryManager;
pub use observers::{AvailabilityLogger, BookObserver};
pub use user::{Role, User};
