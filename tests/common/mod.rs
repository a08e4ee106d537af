mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from bagscreen for tests
pub use bagscreen::{
    BoundingBox, HIGH_THREAT_CONF, LabelTable, RawDetection, ScreeningPipeline, StaticDetector,
    ThreatLevel,
};
