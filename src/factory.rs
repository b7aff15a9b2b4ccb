use crate::user::{Role, User};

/// Builds users from a textual role tag
#[derive(Debug)]
pub struct UserFactory;

impl UserFactory {
    /// Create a user for `tag`, matched case-insensitively against
    /// "Librarian" and "Member"
    ///
    /// Returns `None` for any other tag.
    #[must_use]
    pub fn create_user(tag: &str, name: &str, id: &str) -> Option<User> {
        let role: Role = tag.parse().ok()?;
        Some(User::new(role, name, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognised_tags_in_any_case() {
        for (tag, role) in [
            ("Librarian", Role::Librarian),
            ("librarian", Role::Librarian),
            ("LIBRARIAN", Role::Librarian),
            ("Member", Role::Member),
            ("member", Role::Member),
            ("MeMbEr", Role::Member),
        ] {
            let user = UserFactory::create_user(tag, "Carol", "l1");
            assert!(
                matches!(user, Some(ref u) if u.role() == role && u.name() == "Carol" && u.id() == "l1"),
                "tag {tag:?} produced {user:?}"
            );
        }
    }

    #[test]
    fn test_unknown_tag_is_none() {
        assert!(UserFactory::create_user("Admin", "Dave", "a1").is_none());
        assert!(UserFactory::create_user("ghost", "Eve", "g1").is_none());
        assert!(UserFactory::create_user("", "Eve", "g1").is_none());
        assert!(UserFactory::create_user(" member", "Eve", "g1").is_none());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_factory_librarian_shows_role() {
        let carol = UserFactory::create_user("librarian", "Carol", "l1").unwrap();
        let mut out: Vec<u8> = Vec::new();
        carol.show_role(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Librarian\n");
        assert_eq!(carol.name(), "Carol");
    }
}
