//! Detection-result processing and threat alerting for X-ray baggage
//! screening.
//!
//! Raw object-detector output goes in; out come an annotated image, a
//! detection table, a threat verdict with presentation metadata, and, for
//! high-threat verdicts, an audible alert tone. The detector itself lives
//! behind the [`ObjectDetector`] trait and is supplied by the caller.

pub mod detection;
pub mod detector;
pub mod models;

pub use detection::alert::{ALERT_DURATION_S, ALERT_FREQ_HZ, ALERT_SAMPLE_RATE};
pub use detection::labels::LabelTable;
pub use detection::threat::HIGH_THREAT_CONF;
pub use detection::{ScreeningPipeline, ScreeningReport};
pub use detector::{ObjectDetector, SidecarDetector, StaticDetector};
pub use models::{
    AlertSignal, BoundingBox, Detection, DetectionRow, RawDetection, ThreatLevel, ThreatVerdict,
    VerdictStyle, VerdictSummary,
};
