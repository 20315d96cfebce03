use dioxus::prelude::*;
use shared_types::{Session, UserRole};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<Session>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn set_user(&mut self, session: Session) {
        self.current_user.set(Some(session));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The current session's role, defaulting to Employee while signed out.
/// Only meaningful to callers that already know a session exists.
pub fn use_user_role() -> UserRole {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding.as_ref().map(|s| s.role).unwrap_or_default()
}
