use std::{fmt, io::Write, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{book::Book, error::LibraryError, observers::BookObserver};

/// The kind of library user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Role {
    /// A patron who borrows books
    #[default]
    Member,
    /// Library staff
    Librarian,
}

impl Role {
    /// Label shown by [`User::show_role`]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Librarian => "Librarian",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = LibraryError;

    /// Parse a role tag, ignoring ASCII case
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag.eq_ignore_ascii_case("Librarian") {
            Ok(Self::Librarian)
        } else if tag.eq_ignore_ascii_case("Member") {
            Ok(Self::Member)
        } else {
            Err(LibraryError::UnknownRole(tag.to_string()))
        }
    }
}

/// A library user who can subscribe to book availability
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    /// Display name used in notifications
    name: String,
    /// Library card identifier
    id: String,
    /// Member or librarian
    role: Role,
}

impl User {
    /// Create a user with an explicit role
    #[must_use]
    pub fn new(role: Role, name: &str, id: &str) -> Self {
        Self { name: name.to_string(), id: id.to_string(), role }
    }

    /// Create a library member
    #[must_use]
    pub fn member(name: &str, id: &str) -> Self {
        Self::new(Role::Member, name, id)
    }

    /// Create a librarian
    #[must_use]
    pub fn librarian(name: &str, id: &str) -> Self {
        Self::new(Role::Librarian, name, id)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Write the role label as a single line
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Delivery` if the sink cannot be written to
    pub fn show_role(&self, out: &mut dyn Write) -> Result<(), LibraryError> {
        writeln!(out, "{}", self.role).map_err(|source| self.delivery_error(source))
    }

    /// Wrap a sink failure with this user's name
    fn delivery_error(&self, source: std::io::Error) -> LibraryError {
        LibraryError::Delivery { observer: self.name.clone(), source }
    }
}

impl BookObserver for User {
    fn update(&self, book: &Book, out: &mut dyn Write) -> Result<(), LibraryError> {
        if !book.is_available() {
            return Ok(());
        }
        writeln!(out, "Notification: {}, the book {} is now available.", self.name, book.title())
            .map_err(|source| self.delivery_error(source))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Member.to_string(), "Member");
        assert_eq!(Role::Librarian.to_string(), "Librarian");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_role_parse_ignores_case() {
        assert_eq!("LIBRARIAN".parse::<Role>().unwrap(), Role::Librarian);
        assert_eq!("member".parse::<Role>().unwrap(), Role::Member);
        assert_eq!("mEmBeR".parse::<Role>().unwrap(), Role::Member);
    }

    #[test]
    fn test_role_parse_unknown() {
        let result = "Admin".parse::<Role>();
        assert!(matches!(result, Err(LibraryError::UnknownRole(ref tag)) if tag == "Admin"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_show_role() {
        let mut out: Vec<u8> = Vec::new();
        User::librarian("Carol", "l1").show_role(&mut out).unwrap();
        User::member("Alice", "m1").show_role(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Librarian\nMember\n");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_update_only_when_available() {
        let alice = User::member("Alice", "m1");
        let mut book = Book::new("Dune", "Herbert");
        let mut out: Vec<u8> = Vec::new();

        alice.update(&book, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out.clone()).unwrap(),
            "Notification: Alice, the book Dune is now available.\n"
        );

        out.clear();
        book.set_available(false, &mut io::sink()).unwrap();
        alice.update(&book, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_setters() {
        let mut user = User::member("Alice", "m1");
        user.set_name("Alicia");
        user.set_id("m42");
        assert_eq!(user.name(), "Alicia");
        assert_eq!(user.id(), "m42");
        assert_eq!(user.role(), Role::Member);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_serde_shape() {
        let json = serde_json::to_string(&User::librarian("Carol", "l1")).unwrap();
        assert_eq!(json, r#"{"name":"Carol","id":"l1","role":"Librarian"}"#);
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, User::librarian("Carol", "l1"));
    }
}
