use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::WEEK_COUNT;

/// One synthetic posting-volume sample: a trend, a week in 1..=6, and a
/// non-negative video count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyObservation {
    pub trend: String,
    pub week: u32,
    pub video_count: u32,
}

/// Weekly adoption intensities for one trend, generated once per run.
pub type AdoptionSeries = [f64; WEEK_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalLabel {
    #[serde(rename = "Strong Signal")]
    StrongSignal,
    #[serde(rename = "Emerging Signal")]
    EmergingSignal,
    Noise,
    Burnout,
}

impl fmt::Display for SignalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignalLabel::StrongSignal => "Strong Signal",
            SignalLabel::EmergingSignal => "Emerging Signal",
            SignalLabel::Noise => "Noise",
            SignalLabel::Burnout => "Burnout",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalScoreRecord {
    pub trend: String,
    pub viral_intensity: f64,
    pub adoption_growth_pct: f64,
    pub viral_norm: f64,
    pub signal_score: f64,
    pub signal_label: SignalLabel,
}
