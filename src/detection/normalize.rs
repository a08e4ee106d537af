use crate::detection::labels::LabelTable;
use crate::models::{Detection, RawDetection};

const REPORT_PRECISION: f32 = 10_000.0;

/// Round a confidence to the 4-decimal reporting precision.
///
/// Display only. Threat classification keeps working on the unrounded value,
/// since rounding could shift a score across the high-threat boundary.
pub fn round_confidence(confidence: f32) -> f32 {
    (confidence * REPORT_PRECISION).round() / REPORT_PRECISION
}

/// Convert raw detector output into display-ready detections.
///
/// Emission order is preserved and becomes the display ID, starting at 1.
/// Class name and color are resolved through the label table. An empty raw
/// set yields an empty vector.
pub fn normalize(raw: &[RawDetection], labels: &LabelTable) -> Vec<Detection> {
    raw.iter()
        .enumerate()
        .map(|(idx, det)| {
            let key = det.class.to_lowercase();
            Detection {
                id: idx as u32 + 1,
                class_name: labels.display_name(&key),
                color: labels.color(&key),
                class_key: key,
                confidence: det.confidence,
                bbox: det.bbox,
            }
        })
        .collect()
}
