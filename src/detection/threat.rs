use crate::models::{Detection, ThreatLevel, ThreatVerdict, VerdictStyle, VerdictSummary};

/// Confidence at or above which a detection set counts as a high threat.
pub const HIGH_THREAT_CONF: f32 = 0.70;

/// Aggregate a detection sequence into a threat verdict.
///
/// Rules apply in order: an empty sequence is the only path to `None`; a
/// maximum confidence at or above `HIGH_THREAT_CONF` (boundary inclusive) is
/// `High`; anything else is `Moderate`. The comparison uses the
/// full-precision confidence, never the rounded reporting value.
pub fn classify(detections: &[Detection]) -> ThreatVerdict {
    let object_count = detections.len();
    let max_confidence = detections
        .iter()
        .map(|det| det.confidence)
        .fold(0.0_f32, f32::max);

    let level = if object_count == 0 {
        ThreatLevel::None
    } else if max_confidence >= HIGH_THREAT_CONF {
        ThreatLevel::High
    } else {
        ThreatLevel::Moderate
    };

    ThreatVerdict {
        level,
        object_count,
        max_confidence,
    }
}

impl ThreatLevel {
    /// Presentation triple for the status banner.
    pub fn style(self) -> VerdictStyle {
        match self {
            ThreatLevel::None => VerdictStyle {
                title: "🟢 AUCUNE MENACE",
                accent: "#2e7d32",
                background: "#e8f5e9",
            },
            ThreatLevel::Moderate => VerdictStyle {
                title: "🟠 MENACE MODÉRÉE",
                accent: "#ef6c00",
                background: "#fff3e0",
            },
            ThreatLevel::High => VerdictStyle {
                title: "🔴 MENACE DÉTECTÉE",
                accent: "#c62828",
                background: "#ffebee",
            },
        }
    }
}

impl ThreatVerdict {
    /// Flatten verdict and style into the outbound presentation descriptor.
    pub fn summary(&self) -> VerdictSummary {
        let style = self.level.style();
        VerdictSummary {
            level: self.level,
            title: style.title,
            accent_color: style.accent,
            background_color: style.background,
            count: self.object_count,
            max_confidence: self.max_confidence,
        }
    }
}
