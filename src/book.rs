use std::{fmt, io::Write, rc::Rc};

use log::debug;

use crate::{error::LibraryError, observers::BookObserver};

/// A book whose availability changes are pushed to subscribed observers
///
/// Observers are held through `Rc`, which keeps `Book` on a single thread.
pub struct Book {
    /// Book title, used in notification lines
    title: String,
    /// Book author
    author: String,
    /// Whether the book can currently be borrowed
    available: bool,
    /// Registered observers in registration order, duplicates allowed
    observers: Vec<Rc<dyn BookObserver>>,
}

// Manual implementation of Debug for Book
impl fmt::Debug for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Book")
            .field("title", &self.title)
            .field("author", &self.author)
            .field("available", &self.available)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Book {
    /// Create an available book with no observers
    #[must_use]
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            available: true,
            observers: Vec::new(),
        }
    }

    /// Subscribe an observer. Adding the same observer twice notifies it twice.
    pub fn add_observer(&mut self, observer: Rc<dyn BookObserver>) {
        self.observers.push(observer);
    }

    /// Drop the first registration of `observer`, compared by identity
    ///
    /// Does nothing if the observer is not registered.
    pub fn remove_observer<O: BookObserver + ?Sized>(&mut self, observer: &Rc<O>) {
        let target = Rc::as_ptr(observer);
        if let Some(pos) =
            self.observers.iter().position(|o| std::ptr::addr_eq(Rc::as_ptr(o), target))
        {
            self.observers.remove(pos);
        }
    }

    /// Number of registrations, counting duplicates
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Send an update to every observer in registration order
    ///
    /// # Errors
    ///
    /// Returns the first observer error; observers after it are not notified
    pub fn notify_observers(&self, out: &mut dyn Write) -> Result<(), LibraryError> {
        debug!(
            "notifying {} observer(s) of {:?} (available: {})",
            self.observers.len(),
            self.title,
            self.available
        );
        for observer in &self.observers {
            observer.update(self, out)?;
        }
        Ok(())
    }

    /// Set availability and notify observers, even if the value is unchanged
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an observer. The new availability is
    /// kept in that case.
    pub fn set_available(
        &mut self,
        available: bool,
        out: &mut dyn Write,
    ) -> Result<(), LibraryError> {
        self.available = available;
        self.notify_observers(out)
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the book without notifying observers
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.available { "available" } else { "unavailable" };
        write!(f, "{} by {} ({state})", self.title, self.author)
    }
}
