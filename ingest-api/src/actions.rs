use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use crate::api::{ActionResponse, IngestError};
use crate::index::DocumentIndex;

/// Sub-directory of the data directory that quarantined files are moved into.
pub const QUARANTINE_DIR: &str = "quarantine";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    Quarantine,
    Delete,
}

impl FileAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileAction::Quarantine => "quarantine",
            FileAction::Delete => "delete",
        }
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileAction {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quarantine" => Ok(FileAction::Quarantine),
            "delete" => Ok(FileAction::Delete),
            other => Err(IngestError::UnknownAction(other.to_string())),
        }
    }
}

/// A file name must name an entry directly inside the data directory.
pub fn validate_file_name(name: &str) -> Result<(), IngestError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(IngestError::InvalidFileName(name.to_string())),
    }
}

/// Applies `action` to `data_dir/name` and drops the file from `index`.
///
/// Checks run in a fixed order: the name, then the file on disk, then the
/// action, so an unknown action on a missing file reports the missing file.
/// The index stays write-locked from the first disk check to the removal, so a
/// concurrent rescan sees the file either before or after the action.
pub async fn perform_action(
    data_dir: &Path,
    index: &DocumentIndex,
    name: &str,
    action: &str,
) -> Result<ActionResponse, IngestError> {
    validate_file_name(name)?;

    let mut documents = index.write().await;
    let path = data_dir.join(name);
    let is_file = fs::metadata(&path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(IngestError::FileNotFound(name.to_string()));
    }

    let action: FileAction = action.parse()?;
    let response = match action {
        FileAction::Quarantine => {
            let destination = quarantine(data_dir, &path, name).await?;
            ActionResponse::Quarantined {
                ok: true,
                moved_to: destination.display().to_string(),
            }
        }
        FileAction::Delete => {
            fs::remove_file(&path).await?;
            ActionResponse::Deleted {
                ok: true,
                deleted: name.to_string(),
            }
        }
    };

    documents.remove(name);
    drop(documents);

    metrics::counter!("ingest_actions_total", "action" => action.as_str()).increment(1);
    info!(file = name, action = %action, "applied file action");

    Ok(response)
}

async fn quarantine(data_dir: &Path, path: &Path, name: &str) -> Result<PathBuf, IngestError> {
    let quarantine_dir = data_dir.join(QUARANTINE_DIR);
    fs::create_dir_all(&quarantine_dir).await?;

    let destination = quarantine_dir.join(name);
    fs::rename(path, &destination).await?;
    Ok(destination)
}
