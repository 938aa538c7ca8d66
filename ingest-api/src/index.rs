use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockWriteGuard};

use crate::api::IngestError;
use crate::scan::scan_directory;

pub type Documents = BTreeMap<String, String>;

/// File name to file text, shared by every request handler of one service.
///
/// Cloning is cheap and clones see the same entries. Anything that changes
/// the files on disk holds the write guard for the whole change, so a scan
/// never observes half of it.
#[derive(Clone, Default, Debug)]
pub struct DocumentIndex {
    documents: Arc<RwLock<Documents>>,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the index from `dir` and returns the indexed names, sorted.
    ///
    /// The scan runs under the write guard. A failed scan leaves the index empty.
    pub async fn rescan(&self, dir: &Path) -> Result<Vec<String>, IngestError> {
        let mut documents = self.documents.write().await;
        match scan_directory(dir).await {
            Ok(scanned) => {
                *documents = scanned.into_iter().collect();
                Ok(documents.keys().cloned().collect())
            }
            Err(err) => {
                documents.clear();
                Err(err)
            }
        }
    }

    /// Exclusive access, held by file actions across their disk changes.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Documents> {
        self.documents.write().await
    }

    pub async fn get(&self, name: &str) -> Option<String> {
        self.documents.read().await.get(name).cloned()
    }

    pub async fn snapshot(&self) -> Documents {
        self.documents.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}
