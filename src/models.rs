use image::Rgb;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in absolute pixel coordinates, with x1 < x2 and y1 < y2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// True when the box spans a positive area.
    pub fn is_valid(&self) -> bool {
        self.x1 < self.x2 && self.y1 < self.y2
    }
}

/// One unprocessed record from the external detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Raw class identifier as the model emitted it.
    pub class: String,
    /// Confidence score in [0, 1].
    pub confidence: f32,
    pub bbox: BoundingBox,
}

/// Display-ready detection with a stable sequential ID.
///
/// IDs are 1-based and follow the detector's emission order, not confidence
/// or class. `confidence` keeps the detector's full precision; use
/// `reported_confidence` for anything user-facing.
#[derive(Debug, Clone)]
pub struct Detection {
    pub id: u32,
    /// Canonical lowercase class key.
    pub class_key: String,
    /// Localized display name resolved from the label table.
    pub class_name: String,
    pub confidence: f32,
    /// Display color resolved from the label table.
    pub color: Rgb<u8>,
    pub bbox: BoundingBox,
}

impl Detection {
    /// Confidence rounded to the 4-decimal reporting precision.
    pub fn reported_confidence(&self) -> f32 {
        crate::detection::normalize::round_confidence(self.confidence)
    }

    /// Table row for the outbound detection listing.
    pub fn row(&self) -> DetectionRow {
        DetectionRow {
            id: self.id,
            class: self.class_name.clone(),
            confidence: self.reported_confidence(),
        }
    }
}

/// One row of the outbound detection table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRow {
    pub id: u32,
    pub class: String,
    pub confidence: f32,
}

/// Three-level aggregate risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThreatLevel {
    None,
    Moderate,
    High,
}

/// Static presentation triple for a threat level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictStyle {
    pub title: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
}

/// Aggregate verdict over one detection sequence.
///
/// `max_confidence` is the full-precision maximum, 0.0 when the sequence is
/// empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatVerdict {
    pub level: ThreatLevel,
    pub object_count: usize,
    pub max_confidence: f32,
}

/// Outbound presentation descriptor for the status banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictSummary {
    pub level: ThreatLevel,
    pub title: &'static str,
    pub accent_color: &'static str,
    pub background_color: &'static str,
    pub count: usize,
    pub max_confidence: f32,
}

/// Synthesized audio cue emitted for high-threat verdicts.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertSignal {
    pub sample_rate: u32,
    pub duration_s: f32,
    /// Mono samples in [-0.2, 0.2].
    pub samples: Vec<f32>,
}
