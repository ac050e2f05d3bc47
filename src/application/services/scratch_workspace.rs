use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use uuid::Uuid;

use crate::domain::{AudioContainer, OutputTemplate};

const MAX_TOKEN_LEN: usize = 64;
const ANONYMOUS_TOKEN: &str = "anon";

/// Kind of request a scratch stem is allocated for; doubles as the file prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScratchKind {
    Stream,
    Download,
}

impl ScratchKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ScratchKind::Stream => "stream",
            ScratchKind::Download => "download",
        }
    }

    fn all() -> [ScratchKind; 2] {
        [ScratchKind::Stream, ScratchKind::Download]
    }
}

/// Process-wide scratch directory for per-request artifacts.
#[derive(Debug)]
pub struct ScratchWorkspace {
    root: PathBuf,
}

impl ScratchWorkspace {
    pub fn new(root: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Allocates a stem that no other request can share, even for equal ids.
    pub fn allocate(&self, kind: ScratchKind, id: &str) -> ScratchLease {
        let name = format!(
            "{}_{}_{}",
            kind.prefix(),
            path_token(id),
            Uuid::new_v4().simple()
        );
        ScratchLease {
            template: OutputTemplate::new(self.root.join(&name)),
            name,
            tracked: Vec::new(),
        }
    }

    /// Deletes request artifacts older than `max_age`. Returns how many were removed.
    pub fn purge_stale(&self, max_age: Duration) -> io::Result<usize> {
        let now = SystemTime::now();
        let mut removed = 0;

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            let owned = ScratchKind::all()
                .iter()
                .any(|k| file_name.starts_with(&format!("{}_", k.prefix())));
            if !owned {
                continue;
            }

            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            let age = metadata
                .modified()
                .ok()
                .and_then(|m| now.duration_since(m).ok())
                .unwrap_or_default();
            if age < max_age {
                continue;
            }

            match fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }

        Ok(removed)
    }
}

/// Ownership of one request's stem.
///
/// On drop, deletes every path the engine may have written for the stem plus
/// any path registered with [`ScratchLease::track`]. Files outside that set are
/// left to [`ScratchSweeper`].
#[derive(Debug)]
pub struct ScratchLease {
    template: OutputTemplate,
    name: String,
    tracked: Vec<PathBuf>,
}

impl ScratchLease {
    pub fn template(&self) -> &OutputTemplate {
        &self.template
    }

    /// Registers an extra file to delete with the lease, e.g. an artifact with an unlisted extension.
    pub fn track(&mut self, path: PathBuf) {
        if path.parent() == self.template.stem().parent() && !self.tracked.contains(&path) {
            self.tracked.push(path);
        }
    }

    /// Every path this lease will try to remove, without touching the filesystem.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = AudioContainer::ALL
            .iter()
            .flat_map(|container| {
                let ext = container.extension();
                [
                    ext.to_string(),
                    format!("{}.part", ext),
                    format!("{}.ytdl", ext),
                    format!("temp.{}", ext),
                ]
            })
            .chain(["part".to_string(), "ytdl".to_string()])
            .map(|suffix| self.template.with_extension(&suffix))
            .collect();
        for path in &self.tracked {
            if !paths.contains(path) {
                paths.push(path.clone());
            }
        }
        paths
    }

    pub fn remove_artifacts(&self) -> io::Result<usize> {
        let mut removed = 0;
        for path in self.candidate_paths() {
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        Ok(removed)
    }
}

impl Drop for ScratchLease {
    fn drop(&mut self) {
        match self.remove_artifacts() {
            Ok(0) => {}
            Ok(removed) => tracing::debug!(stem = %self.name, removed, "Scratch artifacts removed"),
            Err(e) => tracing::warn!(stem = %self.name, error = %e, "Scratch cleanup failed"),
        }
    }
}

/// Periodically purges artifacts left behind by requests that never finished.
pub struct ScratchSweeper {
    workspace: Arc<ScratchWorkspace>,
    retention: Duration,
    interval: Duration,
}

impl ScratchSweeper {
    pub fn new(workspace: Arc<ScratchWorkspace>, retention: Duration, interval: Duration) -> Self {
        Self {
            workspace,
            retention,
            interval,
        }
    }

    pub async fn run(self) {
        tracing::info!(
            retention_secs = self.retention.as_secs(),
            interval_secs = self.interval.as_secs(),
            "Scratch sweeper started"
        );
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;

            let workspace = Arc::clone(&self.workspace);
            let retention = self.retention;
            match tokio::task::spawn_blocking(move || workspace.purge_stale(retention)).await {
                Ok(Ok(0)) => {}
                Ok(Ok(removed)) => tracing::info!(removed, "Purged stale scratch artifacts"),
                Ok(Err(e)) => tracing::warn!(error = %e, "Scratch sweep failed"),
                Err(e) => tracing::error!(error = %e, "Scratch sweep task panicked"),
            }
        }
    }
}

fn path_token(id: &str) -> String {
    let token: String = id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .take(MAX_TOKEN_LEN)
        .collect();
    if token.is_empty() {
        ANONYMOUS_TOKEN.to_string()
    } else {
        token
    }
}
