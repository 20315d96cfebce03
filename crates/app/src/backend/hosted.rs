use reqwest::StatusCode;
use serde::Serialize;
use shared_types::{AppError, NewAccount, Session};

/// Auth provider backed by the hosted service. Sessions are carried by the
/// service's cookies; this client only shuttles JSON.
#[derive(Clone)]
pub struct HostedAuth {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl HostedAuth {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn current_user(&self) -> Result<Option<Session>, AppError> {
        let resp = self
            .http
            .get(self.url("/auth/me"))
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        match resp.status() {
            StatusCode::OK => {
                let session = resp
                    .json::<Session>()
                    .await
                    .map_err(|e| AppError::internal(e.to_string()))?;
                Ok(Some(session))
            }
            StatusCode::UNAUTHORIZED => Ok(None),
            _ => Err(error_from(resp).await),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        if resp.status() == StatusCode::OK {
            tracing::info!(username, "hosted login");
            resp.json::<Session>()
                .await
                .map_err(|e| AppError::internal(e.to_string()))
        } else {
            Err(error_from(resp).await)
        }
    }

    pub async fn register(&self, account: NewAccount) -> Result<Session, AppError> {
        let resp = self
            .http
            .post(self.url("/auth/register"))
            .json(&account)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        if resp.status() == StatusCode::OK || resp.status() == StatusCode::CREATED {
            tracing::info!(username = %account.username, "hosted registration");
            resp.json::<Session>()
                .await
                .map_err(|e| AppError::internal(e.to_string()))
        } else {
            Err(error_from(resp).await)
        }
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.http
            .post(self.url("/auth/logout"))
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        Ok(())
    }
}

/// Decode the service's structured error body, falling back to a generic
/// error for the status when the body is not one.
async fn error_from(resp: reqwest::Response) -> AppError {
    let status = resp.status();
    match resp.json::<AppError>().await {
        Ok(err) => err,
        Err(_) if status == StatusCode::UNAUTHORIZED => {
            AppError::unauthorized("Invalid username or password")
        }
        Err(_) => AppError::internal(format!("unexpected status {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = HostedAuth::new("https://api.shiftwatch.example/".into());
        assert_eq!(
            client.url("/auth/login"),
            "https://api.shiftwatch.example/auth/login"
        );

        let no_slash = HostedAuth::new("https://api.shiftwatch.example".into());
        assert_eq!(
            no_slash.url("/auth/me"),
            "https://api.shiftwatch.example/auth/me"
        );
    }
}
