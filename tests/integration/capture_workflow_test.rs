//! Export workflows through the public capture API.

use super::init_test_env;
use image::{Rgba, RgbaImage};
use lookup_kit::capture::{
    capture_image, CaptureError, CaptureType, Catalog, DirectorySink, ImageCapture, Notifier,
    Renderable, Snapshot,
};
use serde_json::json;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

/// Stands in for a rendered result panel.
struct ResultPanel {
    width: u32,
    height: u32,
}

impl Renderable for ResultPanel {
    async fn render(&self) -> Result<Snapshot, CaptureError> {
        Ok(Snapshot::Raster(RgbaImage::from_pixel(
            self.width,
            self.height,
            Rgba([240, 240, 240, 255]),
        )))
    }
}

/// A panel already serialized as SVG markup.
struct VectorPanel;

impl Renderable for VectorPanel {
    async fn render(&self) -> Result<Snapshot, CaptureError> {
        Ok(Snapshot::Vector(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#.to_string(),
        ))
    }
}

#[derive(Default)]
struct Toasts {
    shown: Mutex<Vec<(bool, String)>>,
}

impl Notifier for Toasts {
    fn success(&self, message: &str) {
        self.shown.lock().unwrap().push((true, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.shown.lock().unwrap().push((false, message.to_string()));
    }
}

#[tokio::test]
async fn test_png_export_decodes_back() {
    init_test_env();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let sink = DirectorySink::new(temp_dir.path().join("downloads"));
    let panel = ResultPanel {
        width: 12,
        height: 7,
    };

    let name = capture_image("whois-example.com", Some(&panel), Some(CaptureType::Png), &sink)
        .await
        .unwrap();
    assert_eq!(name.as_deref(), Some("whois-example.com.png"));

    let bytes = fs::read(sink.dir().join("whois-example.com.png")).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (12, 7));
}

#[tokio::test]
async fn test_vector_snapshot_exports_only_as_svg() {
    init_test_env();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let sink = DirectorySink::new(temp_dir.path());

    let name = capture_image("rdap", Some(&VectorPanel), Some(CaptureType::Svg), &sink)
        .await
        .unwrap();
    assert_eq!(name.as_deref(), Some("rdap.svg"));

    let result = capture_image("rdap", Some(&VectorPanel), Some(CaptureType::Jpeg), &sink).await;
    assert!(matches!(result, Err(CaptureError::Unsupported(_))));
    assert!(!temp_dir.path().join("rdap.jpg").exists());
}

#[tokio::test]
async fn test_localized_failure_toast() {
    init_test_env();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let toasts = Toasts::default();
    let german = Catalog::english().merged(Catalog::from_json(&json!({
        "toast": {
            "saved": "Gespeichert",
            "save_failed": "Speichern fehlgeschlagen: {message}"
        }
    })));

    let capture = ImageCapture::new(
        Some(VectorPanel),
        DirectorySink::new(temp_dir.path()),
        &toasts,
        &german,
    );

    assert!(capture.save("rdap", Some(CaptureType::Png)).await.is_none());
    assert_eq!(
        capture.save("rdap", Some(CaptureType::Svg)).await.as_deref(),
        Some("rdap.svg")
    );

    let shown = toasts.shown.lock().unwrap();
    assert_eq!(shown.len(), 2);
    assert!(!shown[0].0);
    assert!(shown[0].1.starts_with("Speichern fehlgeschlagen: "));
    assert_eq!(shown[1], (true, "Gespeichert".to_string()));
}
