use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use image::DynamicImage;

use crate::models::RawDetection;

/// External object-detector boundary.
///
/// Implementations own threshold filtering: every record they return already
/// satisfies the requested confidence threshold. They also validate the shape
/// of their own output and fail fast on malformed records, so the pipeline
/// never needs a recovery branch for detector input.
pub trait ObjectDetector {
    /// Backend identifier.
    fn name(&self) -> &'static str;

    /// Run detection on an image at the given confidence threshold.
    fn detect(
        &mut self,
        image: &DynamicImage,
        conf_threshold: f32,
    ) -> Result<Vec<RawDetection>>;
}

/// Check one raw record against the boundary contract.
pub fn validate_raw(det: &RawDetection) -> Result<()> {
    if !(0.0..=1.0).contains(&det.confidence) {
        bail!(
            "detection '{}': confidence {} outside [0, 1]",
            det.class,
            det.confidence
        );
    }
    if !det.bbox.is_valid() {
        bail!(
            "detection '{}': degenerate bounding box ({}, {}, {}, {})",
            det.class,
            det.bbox.x1,
            det.bbox.y1,
            det.bbox.x2,
            det.bbox.y2
        );
    }
    Ok(())
}

/// Detector fed from a JSON sidecar file of raw model output.
///
/// This is the hand-off format of a detached exporter:
/// `[{"class": "gun", "confidence": 0.91, "bbox": {"x1": .., "y1": .., "x2": .., "y2": ..}}]`.
/// Records are validated once at load time.
pub struct SidecarDetector {
    detections: Vec<RawDetection>,
}

impl SidecarDetector {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open detections file {}", path.display()))?;
        let detections: Vec<RawDetection> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse detections file {}", path.display()))?;
        for det in &detections {
            validate_raw(det)?;
        }
        Ok(Self { detections })
    }
}

impl ObjectDetector for SidecarDetector {
    fn name(&self) -> &'static str {
        "sidecar"
    }

    fn detect(
        &mut self,
        _image: &DynamicImage,
        conf_threshold: f32,
    ) -> Result<Vec<RawDetection>> {
        Ok(self
            .detections
            .iter()
            .filter(|det| det.confidence >= conf_threshold)
            .cloned()
            .collect())
    }
}

/// Detector returning a fixed in-memory set. The stub backend for tests.
pub struct StaticDetector {
    detections: Vec<RawDetection>,
}

impl StaticDetector {
    pub fn new(detections: Vec<RawDetection>) -> Self {
        Self { detections }
    }
}

impl ObjectDetector for StaticDetector {
    fn name(&self) -> &'static str {
        "static"
    }

    fn detect(
        &mut self,
        _image: &DynamicImage,
        conf_threshold: f32,
    ) -> Result<Vec<RawDetection>> {
        for det in &self.detections {
            validate_raw(det)?;
        }
        Ok(self
            .detections
            .iter()
            .filter(|det| det.confidence >= conf_threshold)
            .cloned()
            .collect())
    }
}
