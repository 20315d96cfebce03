use shared_types::{AppError, NewAccount, Session, UserRole};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Seeded demo directory: (username, password, first name, last name, role).
const DEMO_ACCOUNTS: &[(&str, &str, &str, &str, UserRole)] = &[
    ("worker", "worker123", "Alex", "Rivera", UserRole::Employee),
    ("lead", "lead123", "Maria", "Garcia", UserRole::Supervisor),
    ("admin", "admin123", "Sam", "Chen", UserRole::Admin),
];

/// In-memory auth provider for development and demos. No network, no
/// persistence; the directory resets on reload.
#[derive(Clone, Default)]
pub struct MockAuth {
    current: Rc<RefCell<Option<Session>>>,
    registered: Rc<RefCell<Vec<NewAccount>>>,
}

impl MockAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Result<Option<Session>, AppError> {
        Ok(self.current.borrow().clone())
    }

    pub fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let session = DEMO_ACCOUNTS
            .iter()
            .find(|(name, pass, ..)| *name == username && *pass == password)
            .map(|(name, _, first, last, role)| Session {
                id: Uuid::new_v4(),
                username: (*name).into(),
                first_name: (*first).into(),
                last_name: (*last).into(),
                role: *role,
                site_id: matches!(role, UserRole::Employee).then(|| "riverside-7".into()),
            })
            .or_else(|| {
                self.registered
                    .borrow()
                    .iter()
                    .find(|a| a.username == username && a.password == password)
                    .map(|a| Session {
                        id: Uuid::new_v4(),
                        username: a.username.clone(),
                        first_name: a.first_name.clone(),
                        last_name: a.last_name.clone(),
                        role: a.role,
                        site_id: None,
                    })
            })
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        tracing::info!(username, role = session.role.as_str(), "mock login");
        *self.current.borrow_mut() = Some(session.clone());
        Ok(session)
    }

    pub fn register(&self, account: NewAccount) -> Result<Session, AppError> {
        if account.username.trim().is_empty() {
            return Err(AppError::bad_request("Username is required"));
        }
        if account.password.len() < 6 {
            return Err(AppError::bad_request("Password must be at least 6 characters"));
        }
        let taken = DEMO_ACCOUNTS.iter().any(|(name, ..)| *name == account.username)
            || self
                .registered
                .borrow()
                .iter()
                .any(|a| a.username == account.username);
        if taken {
            return Err(AppError::bad_request("Username is already taken"));
        }

        let session = Session {
            id: Uuid::new_v4(),
            username: account.username.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            role: account.role,
            site_id: None,
        };
        tracing::info!(username = %account.username, role = account.role.as_str(), "mock registration");
        self.registered.borrow_mut().push(account);
        *self.current.borrow_mut() = Some(session.clone());
        Ok(session)
    }

    pub fn logout(&self) {
        *self.current.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn account(username: &str) -> NewAccount {
        NewAccount {
            username: username.into(),
            password: "secret99".into(),
            first_name: "Pat".into(),
            last_name: "Okafor".into(),
            role: UserRole::Supervisor,
        }
    }

    #[test]
    fn login_with_demo_credentials_succeeds() {
        let mock = MockAuth::new();
        let session = mock.login("lead", "lead123").unwrap();
        assert_eq!(session.role, UserRole::Supervisor);
        assert_eq!(session.display_name(), "Maria Garcia");
        assert_eq!(mock.current_user().unwrap(), Some(session));
    }

    #[test]
    fn login_with_wrong_password_is_unauthorized() {
        let mock = MockAuth::new();
        let err = mock.login("worker", "nope").unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::Unauthorized);
        assert_eq!(mock.current_user().unwrap(), None);
    }

    #[test]
    fn login_with_unknown_user_is_unauthorized() {
        let mock = MockAuth::new();
        assert!(mock.login("ghost", "worker123").is_err());
    }

    #[test]
    fn employee_demo_account_has_a_site() {
        let mock = MockAuth::new();
        let session = mock.login("worker", "worker123").unwrap();
        assert_eq!(session.site_id.as_deref(), Some("riverside-7"));
    }

    #[test]
    fn register_signs_the_account_in() {
        let mock = MockAuth::new();
        let session = mock.register(account("pokafor")).unwrap();
        assert_eq!(session.username, "pokafor");
        assert!(mock.current_user().unwrap().is_some());
    }

    #[test]
    fn registered_account_can_log_back_in() {
        let mock = MockAuth::new();
        mock.register(account("pokafor")).unwrap();
        mock.logout();
        let session = mock.login("pokafor", "secret99").unwrap();
        assert_eq!(session.role, UserRole::Supervisor);
    }

    #[test]
    fn register_rejects_taken_username() {
        let mock = MockAuth::new();
        let err = mock.register(account("admin")).unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::BadRequest);
    }

    #[test]
    fn register_rejects_short_password() {
        let mock = MockAuth::new();
        let mut bad = account("pokafor");
        bad.password = "abc".into();
        assert!(mock.register(bad).is_err());
    }

    #[test]
    fn logout_clears_the_session() {
        let mock = MockAuth::new();
        mock.login("admin", "admin123").unwrap();
        mock.logout();
        assert_eq!(mock.current_user().unwrap(), None);
    }

    #[test]
    fn clones_share_the_same_directory() {
        let mock = MockAuth::new();
        let other = mock.clone();
        mock.login("worker", "worker123").unwrap();
        assert!(other.current_user().unwrap().is_some());
    }
}
