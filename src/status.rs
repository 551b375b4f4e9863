//! Run/stop status persistence and its request/response protocol.
//!
//! The status gates the scheduled refresh. It is read from the store once per
//! cycle rather than held in process-wide state.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Whether scheduled refreshes run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Running,
    Stopped,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
        })
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "stopped" => Ok(Self::Stopped),
            other => Err(Error::Status(format!("unknown status: {other}"))),
        }
    }
}

/// Persistence for the status flag.
pub trait StatusStore: Send + Sync {
    /// Current status; `Running` when nothing was stored yet.
    fn load(&self) -> Result<Status>;

    fn save(&self, status: Status) -> Result<()>;
}

/// In-process store, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStatusStore {
    status: Mutex<Option<Status>>,
}

impl MemoryStatusStore {
    #[must_use]
    pub fn with_status(status: Status) -> Self {
        Self {
            status: Mutex::new(Some(status)),
        }
    }
}

impl StatusStore for MemoryStatusStore {
    fn load(&self) -> Result<Status> {
        Ok(self.status.lock().unwrap_or_default())
    }

    fn save(&self, status: Status) -> Result<()> {
        *self.status.lock() = Some(status);
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredStatus {
    extension_status: Status,
}

/// JSON file store: `{"extensionStatus": "running"}`.
#[derive(Debug, Clone)]
pub struct FileStatusStore {
    path: PathBuf,
}

impl FileStatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusStore for FileStatusStore {
    fn load(&self) -> Result<Status> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Status::default()),
            Err(err) => return Err(err.into()),
        };
        let stored: StoredStatus = serde_json::from_str(&json)
            .map_err(|e| Error::Status(format!("{}: {e}", self.path.display())))?;
        Ok(stored.extension_status)
    }

    fn save(&self, status: Status) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&StoredStatus {
            extension_status: status,
        })?;
        std::fs::write(&self.path, json)?;
        log::info!("status set to {status}");
        Ok(())
    }
}

/// Message sent by a controlling UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum StatusRequest {
    GetStatus,
    SetStatus { status: Status },
}

/// Reply carrying the status after the request was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
}

/// Answers status requests against a store.
pub struct StatusService<S: StatusStore> {
    store: S,
}

impl<S: StatusStore> StatusService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn handle(&self, request: StatusRequest) -> Result<StatusResponse> {
        let status = match request {
            StatusRequest::GetStatus => self.store.load()?,
            StatusRequest::SetStatus { status } => {
                self.store.save(status)?;
                status
            }
        };
        Ok(StatusResponse { status })
    }

    /// Handle one JSON-encoded request and encode the reply.
    pub fn handle_json(&self, message: &str) -> Result<String> {
        let request: StatusRequest = serde_json::from_str(message)?;
        Ok(serde_json::to_string(&self.handle(request)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_running() -> Result<()> {
        assert_eq!(MemoryStatusStore::default().load()?, Status::Running);

        let dir = tempfile::tempdir()?;
        let store = FileStatusStore::new(dir.path().join("missing.json"));
        assert_eq!(store.load()?, Status::Running);
        Ok(())
    }

    #[test]
    fn file_store_round_trips() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FileStatusStore::new(dir.path().join("nested/status.json"));

        store.save(Status::Stopped)?;
        assert_eq!(store.load()?, Status::Stopped);

        let raw = std::fs::read_to_string(store.path())?;
        assert!(raw.contains(r#""extensionStatus": "stopped""#));
        Ok(())
    }

    #[test]
    fn corrupt_file_is_a_status_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("status.json");
        std::fs::write(&path, "not json")?;

        assert!(matches!(FileStatusStore::new(path).load(), Err(Error::Status(_))));
        Ok(())
    }

    #[test]
    fn service_answers_messages() -> Result<()> {
        let service = StatusService::new(MemoryStatusStore::default());

        assert_eq!(service.handle_json(r#"{"action":"getStatus"}"#)?, r#"{"status":"running"}"#);
        assert_eq!(
            service.handle_json(r#"{"action":"setStatus","status":"stopped"}"#)?,
            r#"{"status":"stopped"}"#
        );
        assert_eq!(service.handle(StatusRequest::GetStatus)?.status, Status::Stopped);
        Ok(())
    }

    #[test]
    fn unknown_action_is_rejected() {
        let service = StatusService::new(MemoryStatusStore::default());
        assert!(matches!(service.handle_json(r#"{"action":"reboot"}"#), Err(Error::Json(_))));
    }

    #[test]
    fn parses_status_names() {
        assert_eq!("Stopped".parse::<Status>().ok(), Some(Status::Stopped));
        assert!("paused".parse::<Status>().is_err());
        assert_eq!(Status::Running.to_string(), "running");
    }
}
