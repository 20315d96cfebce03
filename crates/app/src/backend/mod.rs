//! Auth providers. Two implementations of one contract, selected once at
//! startup; the rest of the app never inspects which is active.

pub mod hosted;
pub mod mock;

pub use hosted::HostedAuth;
pub use mock::MockAuth;

use shared_types::{AppError, Backend, BackendKind, NewAccount, Session};

/// The active auth provider.
///
/// Enum dispatch rather than a trait object keeps the async methods
/// dyn-free; both variants are cheap to clone.
#[derive(Clone)]
pub enum AuthClient {
    Mock(MockAuth),
    Hosted(HostedAuth),
}

impl AuthClient {
    pub fn from_config(backend: &Backend) -> Self {
        match backend.kind {
            BackendKind::Mock => {
                tracing::info!("auth backend: mock directory");
                AuthClient::Mock(MockAuth::new())
            }
            BackendKind::Hosted => {
                tracing::info!(base_url = %backend.base_url, "auth backend: hosted");
                AuthClient::Hosted(HostedAuth::new(backend.base_url.clone()))
            }
        }
    }

    /// The session this client currently holds, if any.
    pub async fn current_user(&self) -> Result<Option<Session>, AppError> {
        match self {
            AuthClient::Mock(mock) => mock.current_user(),
            AuthClient::Hosted(hosted) => hosted.current_user().await,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        match self {
            AuthClient::Mock(mock) => mock.login(username, password),
            AuthClient::Hosted(hosted) => hosted.login(username, password).await,
        }
    }

    pub async fn register(&self, account: NewAccount) -> Result<Session, AppError> {
        match self {
            AuthClient::Mock(mock) => mock.register(account),
            AuthClient::Hosted(hosted) => hosted.register(account).await,
        }
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        match self {
            AuthClient::Mock(mock) => {
                mock.logout();
                Ok(())
            }
            AuthClient::Hosted(hosted) => hosted.logout().await,
        }
    }
}
