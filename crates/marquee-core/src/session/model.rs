use crate::user::UserAccount;

/// Login state of the running application.
///
/// Being logged in and having a current user are the same fact, so the
/// invariant `is_logged_in() == current_user().is_some()` holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    LoggedOut,
    LoggedIn(UserAccount),
}

impl SessionStatus {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn current_user(&self) -> Option<&UserAccount> {
        match self {
            Self::LoggedIn(user) => Some(user),
            Self::LoggedOut => None,
        }
    }
}
