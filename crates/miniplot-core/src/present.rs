// File: crates/miniplot-core/src/present.rs
// Summary: Presenter: keeps, writes, or displays a rendered artifact and reports the outcome as text.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::chart::RenderArtifact;
use crate::config::default_viewer_candidates;
use crate::error::PresentError;
use crate::kind::ChartKind;
use crate::message::ResultMessage;

static FILE_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresentMode {
    /// Keep the latest artifact in memory.
    Memory,
    /// Write image files into `dir`.
    File { dir: PathBuf },
    /// Write the image into `dir` and open it in a viewer process.
    Viewer { program: Option<PathBuf>, blocking: bool, dir: PathBuf },
}

struct ViewerSession {
    child: Child,
    image: PathBuf,
}

pub struct Presenter {
    mode: PresentMode,
    sessions: Mutex<Vec<ViewerSession>>,
    last: Mutex<Option<RenderArtifact>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// `miniplot_<slug>_<pid>_<seq>.<ext>`, unique within the process.
pub fn artifact_file_name(kind: ChartKind, extension: &str) -> String {
    let seq = FILE_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("miniplot_{}_{}_{}.{}", kind.slug(), std::process::id(), seq, extension)
}

impl Presenter {
    pub fn new(mode: PresentMode) -> Self {
        Self { mode, sessions: Mutex::new(Vec::new()), last: Mutex::new(None) }
    }

    pub fn mode(&self) -> &PresentMode { &self.mode }

    /// Present `artifact`. Never fails: problems come back as failure messages.
    /// Viewer sessions that have exited since the last call are reaped first.
    pub fn present(&self, artifact: RenderArtifact) -> ResultMessage {
        self.close();
        let kind = artifact.kind;
        match self.try_present(artifact) {
            Ok(message) => message,
            Err(err) => {
                warn!(kind = kind.slug(), error = %err, "presentation failed");
                match err {
                    PresentError::Launch { .. } => ResultMessage::failure(err.to_string()),
                    PresentError::Io { .. } => ResultMessage::chart_failed(kind, err),
                }
            }
        }
    }

    fn try_present(&self, artifact: RenderArtifact) -> Result<ResultMessage, PresentError> {
        let slug = artifact.kind.slug();
        match &self.mode {
            PresentMode::Memory => {
                let text = format!("{slug} chart rendered ({})", artifact.describe());
                debug!(kind = slug, bytes = artifact.len(), "artifact kept in memory");
                *lock(&self.last) = Some(artifact);
                Ok(ResultMessage::success(text))
            }
            PresentMode::File { dir } => {
                let path = write_artifact(dir, &artifact)?;
                info!(kind = slug, path = %path.display(), "chart written");
                Ok(ResultMessage::success(format!("{slug} chart written to {}", path.display())))
            }
            PresentMode::Viewer { program, blocking, dir } => {
                let image = write_artifact(dir, &artifact)?;
                let mut child = match launch_viewer(program.as_deref(), &image, &artifact) {
                    Ok(child) => child,
                    Err(source) => {
                        let _ = std::fs::remove_file(&image);
                        return Err(PresentError::Launch { kind: artifact.kind, source });
                    }
                };
                if *blocking {
                    let status = child.wait();
                    let _ = std::fs::remove_file(&image);
                    debug!(kind = slug, status = ?status.ok(), "viewer exited");
                    Ok(ResultMessage::success(format!("{slug} chart viewer closed")))
                } else {
                    info!(kind = slug, pid = child.id(), "viewer launched");
                    lock(&self.sessions).push(ViewerSession { child, image });
                    Ok(ResultMessage::success(format!("{slug} chart viewer launched")))
                }
            }
        }
    }

    /// Take the artifact kept by [`PresentMode::Memory`].
    pub fn take_last(&self) -> Option<RenderArtifact> {
        lock(&self.last).take()
    }

    /// Viewer sessions still tracked (running or not yet reaped).
    pub fn active_sessions(&self) -> usize {
        lock(&self.sessions).len()
    }

    /// Reap viewer sessions that have exited and delete their image files.
    pub fn close(&self) {
        lock(&self.sessions).retain_mut(|s| match s.child.try_wait() {
            Ok(Some(_)) | Err(_) => {
                if let Err(err) = std::fs::remove_file(&s.image) {
                    debug!(path = %s.image.display(), error = %err, "viewer image already gone");
                }
                false
            }
            Ok(None) => true,
        });
    }
}

impl Drop for Presenter {
    fn drop(&mut self) {
        self.close();
    }
}

fn write_artifact(dir: &Path, artifact: &RenderArtifact) -> Result<PathBuf, PresentError> {
    let path = dir.join(artifact_file_name(artifact.kind, artifact.format.extension()));
    let io_err = |source| PresentError::Io { path: path.clone(), source };
    std::fs::create_dir_all(dir).map_err(io_err)?;
    std::fs::write(&path, &artifact.bytes).map_err(io_err)?;
    Ok(path)
}

/// Try the configured program, then the default candidates, in order.
fn launch_viewer(program: Option<&Path>, image: &Path, artifact: &RenderArtifact) -> io::Result<Child> {
    let candidates = program.map(Path::to_path_buf).into_iter().chain(default_viewer_candidates());
    let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no viewer candidates");
    for candidate in candidates {
        match Command::new(&candidate)
            .arg(image)
            .arg(artifact.kind.slug())
            .arg(&artifact.title)
            .spawn()
        {
            Ok(child) => return Ok(child),
            Err(err) => {
                debug!(program = %candidate.display(), error = %err, "viewer candidate failed");
                last_err = err;
            }
        }
    }
    Err(last_err)
}
