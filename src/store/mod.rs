pub mod seed;
pub mod worker;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use crate::model::{Exam, Invoice, Question, SystemUser, Teacher};

pub const STORE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("unsupported store version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Every collection the portal shows. Missing collections load as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub users: Vec<SystemUser>,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub exams: Vec<Exam>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

fn default_version() -> u32 {
    STORE_VERSION
}

impl Default for Store {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            users: vec![],
            teachers: vec![],
            invoices: vec![],
            exams: vec![],
            questions: vec![],
        }
    }
}

impl Store {
    pub fn from_json(bytes: &[u8], path: &Path) -> Result<Self, StoreError> {
        let store: Store = serde_json::from_slice(bytes).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if store.version != STORE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: store.version,
                expected: STORE_VERSION,
            });
        }
        Ok(store)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&bytes, path)?;
        info!(
            path = %path.display(),
            users = store.users.len(),
            teachers = store.teachers.len(),
            invoices = store.invoices.len(),
            exams = store.exams.len(),
            questions = store.questions.len(),
            "store loaded"
        );
        Ok(store)
    }

    /// Replace the file wholesale through a uniquely named sibling temp file.
    pub async fn save(&self, path: &Path) -> Result<(), StoreError> {
        let bytes = self.to_json()?;
        let len = bytes.len();
        let target = path.to_path_buf();
        tokio::task::spawn_blocking(move || write_replacing(&target, &bytes))
            .await
            .map_err(|e| StoreError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other(e),
            })??;
        info!(path = %path.display(), bytes = len, "store saved");
        Ok(())
    }

    pub fn question_mut(&mut self, id: &str) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == id)
    }
}

fn write_replacing(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
