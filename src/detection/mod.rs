pub mod alert;
pub mod annotate;
pub mod labels;
pub mod normalize;
pub mod threat;

use anyhow::Result;
use image::{DynamicImage, RgbImage};

use crate::detector::ObjectDetector;
use crate::models::{AlertSignal, Detection, DetectionRow, ThreatLevel, VerdictSummary};
use self::labels::LabelTable;

/// One screening call's complete output.
///
/// The four slots fill together: a supplied image always yields an annotated
/// image, a table, and a verdict (the alert depends on the threat level); a
/// missing image yields the all-empty report.
#[derive(Debug, Clone, Default)]
pub struct ScreeningReport {
    pub annotated: Option<RgbImage>,
    pub detections: Option<Vec<DetectionRow>>,
    pub verdict: Option<VerdictSummary>,
    pub alert: Option<AlertSignal>,
}

impl ScreeningReport {
    /// The defined response when no image was supplied.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Main screening pipeline orchestrator.
///
/// Sequences detector output through normalization, annotation, threat
/// classification, and tone synthesis. Holds only the read-only label
/// tables, so one pipeline can serve concurrent calls.
pub struct ScreeningPipeline {
    labels: LabelTable,
}

impl ScreeningPipeline {
    pub fn new() -> Self {
        Self {
            labels: LabelTable::french(),
        }
    }

    pub fn with_labels(labels: LabelTable) -> Self {
        Self { labels }
    }

    /// Run the full pipeline with a wall-clock tone phase.
    pub fn process(
        &self,
        detector: &mut dyn ObjectDetector,
        image: Option<&DynamicImage>,
        conf_threshold: f32,
    ) -> Result<ScreeningReport> {
        self.process_with_phase(detector, image, conf_threshold, alert::live_phase())
    }

    /// Run the full pipeline with a pinned tone phase.
    ///
    /// A missing image is a defined no-op: every slot of the report comes
    /// back empty and no error is raised. Threshold filtering happened in
    /// the detector; the returned set is trusted as-is.
    pub fn process_with_phase(
        &self,
        detector: &mut dyn ObjectDetector,
        image: Option<&DynamicImage>,
        conf_threshold: f32,
        phase: f32,
    ) -> Result<ScreeningReport> {
        let Some(image) = image else {
            log::debug!("no image supplied, returning empty report");
            return Ok(ScreeningReport::empty());
        };

        let raw = detector.detect(image, conf_threshold)?;
        log::debug!(
            "{}: {} detections at threshold {:.2}",
            detector.name(),
            raw.len(),
            conf_threshold
        );

        let detections = normalize::normalize(&raw, &self.labels);
        let annotated = annotate::annotate(image, &detections);
        let verdict = threat::classify(&detections);

        let signal = match verdict.level {
            ThreatLevel::High => Some(alert::alert_tone(phase)),
            ThreatLevel::None | ThreatLevel::Moderate => None,
        };

        log::info!(
            "verdict {:?}: {} objects, max confidence {:.2}",
            verdict.level,
            verdict.object_count,
            verdict.max_confidence
        );

        Ok(ScreeningReport {
            annotated: Some(annotated),
            detections: Some(detections.iter().map(Detection::row).collect()),
            verdict: Some(verdict.summary()),
            alert: signal,
        })
    }
}

impl Default for ScreeningPipeline {
    fn default() -> Self {
        Self::new()
    }
}
