//! Export flow: render, encode, download, notify.

use super::encode::{encode, Snapshot};
use super::messages::{Notifier, Translator, SAVED_KEY, SAVE_FAILED_KEY};
use super::{CaptureError, CaptureType};
use crate::config::get_config;
use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

/// An element that can produce an image of its current visual state.
///
/// Implemented by the host's rendering backend. Rendering may take time, so
/// it is awaited.
pub trait Renderable {
    /// Renders the element.
    fn render(&self) -> impl Future<Output = Result<Snapshot, CaptureError>> + Send;
}

/// Destination for exported files.
pub trait DownloadSink {
    /// Delivers `bytes` under `file_name`.
    fn download(&self, file_name: &str, bytes: &[u8]) -> Result<(), CaptureError>;
}

/// Sink that writes downloads into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `dir`, which is created on first download.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn download(&self, file_name: &str, bytes: &[u8]) -> Result<(), CaptureError> {
        if file_name.contains(['/', '\\']) || file_name.starts_with('.') {
            return Err(CaptureError::Download(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid download name: {}", file_name),
            )));
        }

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        fs::write(self.dir.join(file_name), bytes)?;
        Ok(())
    }
}

/// Renders `element` and downloads it as `<filename>.<ext>`.
///
/// Returns `Ok(None)` without doing anything when `element` is `None`.
/// `kind` defaults to PNG.
///
/// # Returns
///
/// The downloaded file name.
pub async fn capture_image<R, D>(
    filename: &str,
    element: Option<&R>,
    kind: Option<CaptureType>,
    sink: &D,
) -> Result<Option<String>, CaptureError>
where
    R: Renderable + ?Sized,
    D: DownloadSink + ?Sized,
{
    let element = match element {
        Some(element) => element,
        None => return Ok(None),
    };

    let kind = kind.unwrap_or_default();
    let snapshot = element.render().await?;
    let bytes = encode(&snapshot, kind)?;

    let file_name = format!("{}.{}", filename, kind.extension());
    sink.download(&file_name, &bytes)?;

    log::debug!("Exported {} ({} bytes)", file_name, bytes.len());
    Ok(Some(file_name))
}

/// Export action bound to one element, as wired into a UI handler.
///
/// Failures are reported through the notifier and never returned.
pub struct ImageCapture<R, D, N, T> {
    element: Option<R>,
    sink: D,
    notifier: N,
    translator: T,
}

impl<R, D, N, T> ImageCapture<R, D, N, T>
where
    R: Renderable,
    D: DownloadSink,
    N: Notifier,
    T: Translator,
{
    /// Creates the action. `element` may be unset until the UI has mounted it.
    pub fn new(element: Option<R>, sink: D, notifier: N, translator: T) -> Self {
        Self {
            element,
            sink,
            notifier,
            translator,
        }
    }

    /// Replaces the element reference.
    pub fn set_element(&mut self, element: Option<R>) {
        self.element = element;
    }

    /// Exports the element and notifies the user of the outcome.
    ///
    /// `kind` falls back to the configured `defaultCaptureType`. While the
    /// element is unset nothing is downloaded, but the success notice is
    /// still shown.
    ///
    /// # Returns
    ///
    /// The downloaded file name, or `None` when nothing was downloaded.
    pub async fn save(&self, filename: &str, kind: Option<CaptureType>) -> Option<String> {
        let kind = kind.unwrap_or_else(|| get_config().default_capture_type);

        match capture_image(filename, self.element.as_ref(), Some(kind), &self.sink).await {
            Ok(file_name) => {
                if file_name.is_none() {
                    log::debug!("Skipping export of {}: no element", filename);
                }
                self.notifier
                    .success(&self.translator.translate(SAVED_KEY, &[]));
                file_name
            }
            Err(e) => {
                log::error!("Failed to export {}: {}", filename, e);
                let message = e.to_string();
                self.notifier.error(
                    &self
                        .translator
                        .translate(SAVE_FAILED_KEY, &[("message", message.as_str())]),
                );
                None
            }
        }
    }
}
