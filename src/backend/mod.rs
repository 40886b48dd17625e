//! Remote data backend client bootstrap
//!
//! Credentials come from the environment; the client is constructed at most
//! once per process and shared from then on. Repeat initialization keeps
//! the first client.

use once_cell::sync::OnceCell;

static BACKEND: OnceCell<Backend> = OnceCell::new();

/// Client credentials for the remote data backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendCredentials {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub database_url: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
}

impl BackendCredentials {
    /// Read credentials from `BACKEND_*` environment variables. Unset
    /// variables simply stay unset; whether that is fatal is up to the
    /// feature trying to use the client.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("BACKEND_API_KEY").ok(),
            auth_domain: std::env::var("BACKEND_AUTH_DOMAIN").ok(),
            database_url: std::env::var("BACKEND_DATABASE_URL").ok(),
            project_id: std::env::var("BACKEND_PROJECT_ID").ok(),
            storage_bucket: std::env::var("BACKEND_STORAGE_BUCKET").ok(),
            messaging_sender_id: std::env::var("BACKEND_MESSAGING_SENDER_ID").ok(),
            app_id: std::env::var("BACKEND_APP_ID").ok(),
            measurement_id: std::env::var("BACKEND_MEASUREMENT_ID").ok(),
        }
    }
}

/// Process-wide backend client
#[derive(Debug)]
pub struct Backend {
    credentials: BackendCredentials,
}

impl Backend {
    /// Initialize the shared client. The first call wins; later calls
    /// return the existing client and ignore their argument.
    pub fn init(credentials: BackendCredentials) -> &'static Backend {
        BACKEND.get_or_init(|| {
            log::debug!(
                "initializing backend client (project: {:?})",
                credentials.project_id
            );
            Backend { credentials }
        })
    }

    /// The shared client, if one has been initialized.
    pub fn get() -> Option<&'static Backend> {
        BACKEND.get()
    }

    pub fn credentials(&self) -> &BackendCredentials {
        &self.credentials
    }

    /// Whether enough credentials are present to talk to the backend.
    pub fn is_configured(&self) -> bool {
        self.credentials.api_key.is_some() && self.credentials.project_id.is_some()
    }
}
