use async_trait::async_trait;

use crate::config::AmiConfig;
use crate::errors::internal::NotifierError;

/// Side-channel that mirrors stoplist state into the call-routing manager
///
/// Implemented over HTTP for production and by a recording double in
/// tests; the pipeline only sees this trait.
#[async_trait]
pub trait StoplistNotifier: Send + Sync {
    /// Set the per-number playback selector (create or update)
    async fn db_put(&self, number: i64, playback: &str) -> Result<(), NotifierError>;

    /// Remove the per-number override, restoring default routing
    async fn db_del(&self, number: i64) -> Result<(), NotifierError>;
}

/// HTTP client for the manager's rawman interface
///
/// Each notification is two sequential GETs: a login that yields a session
/// cookie, then the command presenting that cookie. Sessions are not
/// reused across notifications; there is no retry.
pub struct AmiClient {
    config: AmiConfig,
}

impl AmiClient {
    pub fn new(config: AmiConfig) -> Self {
        Self { config }
    }

    /// Authenticate and return a client holding the session cookie
    async fn login(&self) -> Result<reqwest::Client, NotifierError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| NotifierError::auth(e.to_string()))?;

        let url = format!(
            "http://{}/rawman?action=login&username={}&secret={}",
            self.config.host, self.config.username, self.config.secret
        );

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| NotifierError::auth(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifierError::auth(format!(
                "login rejected with status {}",
                response.status()
            )));
        }

        Ok(client)
    }

    /// Issue one rawman command with a fresh session
    ///
    /// `data` must already be query-encoded; playback values carry their
    /// own percent escapes and must not be encoded a second time.
    async fn command(&self, action: &str, data: &str) -> Result<(), NotifierError> {
        let client = self.login().await?;

        let url = format!(
            "http://{}/rawman?action={}&{}",
            self.config.host, action, data
        );

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| NotifierError::command(action, e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifierError::command(
                action,
                format!("status {}", response.status()),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl StoplistNotifier for AmiClient {
    async fn db_put(&self, number: i64, playback: &str) -> Result<(), NotifierError> {
        self.command("DBPut", &format!("family=ART&key={}&val={}", number, playback))
            .await
    }

    async fn db_del(&self, number: i64) -> Result<(), NotifierError> {
        self.command("DBDel", &format!("family=ART&key={}", number))
            .await
    }
}
