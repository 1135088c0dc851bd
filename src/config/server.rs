use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::store::{OfflineStore, RestStore, SqliteStore, Store};

/// Where content rows live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Sqlite(PathBuf),
    /// A hosted database speaking the PostgREST row protocol.
    Rest { url: String, api_key: String },
    /// No backend; every read fails and pages render built-in content.
    Offline,
}

impl Backend {
    /// Picks the hosted backend when both URL and key are set, the local
    /// database otherwise.
    pub fn select(
        service_url: Option<String>,
        service_key: Option<String>,
        offline: bool,
        db_path: PathBuf,
    ) -> Result<Self> {
        if offline {
            return Ok(Backend::Offline);
        }
        match (non_blank(service_url), non_blank(service_key)) {
            (Some(url), Some(api_key)) => Ok(Backend::Rest { url, api_key }),
            (Some(_), None) => Err(Error::Config("service URL set without a service key".into())),
            (None, Some(_)) => Err(Error::Config("service key set without a service URL".into())),
            (None, None) => Ok(Backend::Sqlite(db_path)),
        }
    }

    pub fn connect(&self) -> Result<Arc<dyn Store>> {
        match self {
            Backend::Sqlite(path) => {
                let store = SqliteStore::new(path)?;
                store.initialize()?;
                Ok(Arc::new(store))
            }
            Backend::Rest { url, api_key } => Ok(Arc::new(RestStore::new(url, api_key)?)),
            Backend::Offline => Ok(Arc::new(OfflineStore)),
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Backend::Sqlite(path) => format!("sqlite ({})", path.display()),
            Backend::Rest { url, .. } => format!("hosted ({url})"),
            Backend::Offline => "offline (built-in content only)".to_string(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub backend: Backend,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> std::result::Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        db_path(&self.data_dir)
    }
}

#[must_use]
pub fn db_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("hilltop.db")
}

impl Default for ServerConfig {
    fn default() -> Self {
        let data_dir = PathBuf::from("./data");
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            backend: Backend::Sqlite(db_path(&data_dir)),
            data_dir,
        }
    }
}
