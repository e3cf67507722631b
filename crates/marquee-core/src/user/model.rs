//! User account domain models.

/// Name shown for an account that has none.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// A user account as stored in the remote users table.
///
/// # Security Note
///
/// The password is stored and compared in plaintext. This mirrors the existing
/// backend data and is a known defect: a real deployment needs salted hashes,
/// which would change the stored data format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_plaintext: Option<String>,
    pub profile_image_url: Option<String>,
}

impl UserAccount {
    /// Creates an account with only an id set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            password_plaintext: None,
            profile_image_url: None,
        }
    }

    /// Returns the name to show in the profile header.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// Splits the stored name into (first name, last name) for the profile editor.
    ///
    /// The first word is the first name, the remaining words joined by single
    /// spaces are the last name.
    pub fn name_parts(&self) -> (String, String) {
        let mut words = self.name.as_deref().unwrap_or_default().split_whitespace();
        let first = words.next().unwrap_or_default().to_string();
        let last = words.collect::<Vec<_>>().join(" ");
        (first, last)
    }

    /// Checks a sign-in attempt against this account.
    ///
    /// Email matches case-insensitively after trimming; the password must match
    /// exactly (a missing stored password compares as the empty string).
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        let Some(stored_email) = self.email.as_deref() else {
            return false;
        };
        let email_matches = stored_email.trim().to_lowercase() == email.trim().to_lowercase();
        let stored_password = self.password_plaintext.as_deref().unwrap_or_default();
        email_matches && stored_password == password
    }
}

/// Partial update for a user record. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_image_url: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    /// A patch that only replaces the password.
    pub fn password(new_password: impl Into<String>) -> Self {
        Self {
            password: Some(new_password.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.profile_image_url.is_none()
            && self.password.is_none()
    }
}

/// Profile fields a signed-in user may edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_image_url: Option<String>,
}

impl ProfileUpdate {
    /// Builds the update sent by the profile editor.
    ///
    /// The full name is `"first last"` trimmed. An empty image URL keeps the
    /// current image, and the email is never touched from this form.
    pub fn from_name_parts(first_name: &str, last_name: &str, image_url: &str) -> Self {
        let full_name = format!("{} {}", first_name, last_name).trim().to_string();
        let image_url = image_url.trim();

        Self {
            name: Some(full_name),
            email: None,
            profile_image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
        }
    }
}

impl From<ProfileUpdate> for UserPatch {
    fn from(update: ProfileUpdate) -> Self {
        Self {
            name: update.name,
            email: update.email,
            profile_image_url: update.profile_image_url,
            password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str, password: Option<&str>) -> UserAccount {
        UserAccount {
            email: Some(email.to_string()),
            password_plaintext: password.map(str::to_string),
            ..UserAccount::new("u1")
        }
    }

    #[test]
    fn test_email_matches_case_insensitively() {
        let user = account("A@x.com", Some("p1"));
        assert!(user.matches_credentials("a@x.com", "p1"));
        assert!(user.matches_credentials("  A@X.COM ", "p1"));
    }

    #[test]
    fn test_password_must_match_exactly() {
        let user = account("a@x.com", Some("p1"));
        assert!(!user.matches_credentials("a@x.com", "P1"));
        assert!(!user.matches_credentials("a@x.com", "p1 "));
    }

    #[test]
    fn test_missing_email_never_matches() {
        let user = UserAccount::new("u1");
        assert!(!user.matches_credentials("", ""));
    }

    #[test]
    fn test_display_name_default() {
        let mut user = UserAccount::new("u1");
        assert_eq!(user.display_name(), "User");
        user.name = Some("Sara".to_string());
        assert_eq!(user.display_name(), "Sara");
    }

    #[test]
    fn test_name_parts() {
        let mut user = UserAccount::new("u1");
        assert_eq!(user.name_parts(), (String::new(), String::new()));

        user.name = Some("Sara".to_string());
        assert_eq!(user.name_parts(), ("Sara".to_string(), String::new()));

        user.name = Some("Sara  Al Subaie".to_string());
        assert_eq!(
            user.name_parts(),
            ("Sara".to_string(), "Al Subaie".to_string())
        );
    }

    #[test]
    fn test_profile_update_from_name_parts() {
        let update = ProfileUpdate::from_name_parts("Sara", "", "");
        assert_eq!(update.name.as_deref(), Some("Sara"));
        assert!(update.profile_image_url.is_none());
        assert!(update.email.is_none());

        let update = ProfileUpdate::from_name_parts("Sara", "Ali", "https://img/x.png");
        assert_eq!(update.name.as_deref(), Some("Sara Ali"));
        assert_eq!(update.profile_image_url.as_deref(), Some("https://img/x.png"));

        let patch: UserPatch = update.into();
        assert!(patch.password.is_none());
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_password_patch() {
        let patch = UserPatch::password("secret");
        assert_eq!(patch.password.as_deref(), Some("secret"));
        assert!(patch.name.is_none());
        assert!(UserPatch::default().is_empty());
    }
}
