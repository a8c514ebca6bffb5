//! Async page store loader
//!
//! Streaming variant of [`PageLoader`](super::PageLoader) for large stores:
//! directory discovery runs in a blocking task (jwalk), feeding page paths
//! over a channel to per-page parse tasks as they are found rather than
//! after the walk completes.

use crate::catalog::RecordBuilder;
use crate::loader::pages::{image_file_name, outcome_from_rows, LoadOutcome, PAGE_EXTENSION};
use crate::{CatalogError, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Concurrent page store loader. Produces the same catalog as the
/// synchronous loader for the same store: completion order is discarded and
/// records are ordered by image file name.
pub struct AsyncPageLoader {
    builder: Arc<RecordBuilder>,
}

impl AsyncPageLoader {
    pub fn new() -> Self {
        Self::with_builder(RecordBuilder::new())
    }

    pub fn with_builder(builder: RecordBuilder) -> Self {
        AsyncPageLoader {
            builder: Arc::new(builder),
        }
    }

    pub async fn load_dir(&self, dir: &Path) -> Result<LoadOutcome> {
        if !dir.exists() {
            return Err(CatalogError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Page store not found: {dir:?}"),
            )));
        }

        let (path_tx, mut path_rx) = mpsc::unbounded_channel();

        // Walk in a blocking task, streaming paths out as they are discovered
        let walk_root = dir.to_path_buf();
        let walker = tokio::task::spawn_blocking(move || {
            for entry in jwalk::WalkDir::new(&walk_root).skip_hidden(false) {
                let Ok(entry) = entry else {
                    return;
                };
                if entry.file_type().is_file()
                    && entry.path().extension().and_then(|s| s.to_str()) == Some(PAGE_EXTENSION)
                {
                    // Receiver gone means the load was abandoned
                    if path_tx.send(entry.path()).is_err() {
                        return;
                    }
                }
            }
        });

        // Spawn a parse task per page as paths arrive
        let mut tasks = Vec::new();
        while let Some(path) = path_rx.recv().await {
            let builder = Arc::clone(&self.builder);
            tasks.push(tokio::spawn(async move {
                let file_name = image_file_name(&path)?;
                let content = tokio::fs::read_to_string(&path).await?;
                let (record, report) = builder.build_reporting(&file_name, &content);
                Ok::<_, CatalogError>((file_name, record, report, false))
            }));
        }
        walker.await?;

        let mut rows = Vec::with_capacity(tasks.len());
        for task in tasks {
            rows.push(task.await??);
        }
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(outcome_from_rows(rows))
    }
}

impl Default for AsyncPageLoader {
    fn default() -> Self {
        Self::new()
    }
}
