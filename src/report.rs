use std::fmt::Write;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;

use crate::models::{SignalScoreRecord, WeeklyObservation};

pub const WEEKLY_CSV: &str = "style_signals_tiktok_weekly.csv";
pub const SCORES_CSV: &str = "style_signals_scores.csv";

pub fn write_weekly_csv(path: &Path, observations: &[WeeklyObservation]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    for observation in observations {
        writer.serialize(observation)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_scores_csv(path: &Path, records: &[SignalScoreRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn read_scores_csv(path: &Path) -> anyhow::Result<Vec<SignalScoreRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut records = Vec::new();

    for result in reader.deserialize::<SignalScoreRecord>() {
        records.push(result?);
    }

    Ok(records)
}

pub fn render_ranking(records: &[SignalScoreRecord], limit: usize) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "STYLE SIGNALS RANKING (generated {})",
        Utc::now().date_naive()
    );
    let _ = writeln!(output);

    if records.is_empty() {
        let _ = writeln!(output, "No trends scored in this run.");
        return output;
    }

    for (rank, record) in records.iter().take(limit).enumerate() {
        let _ = writeln!(
            output,
            "{:>2}. {:<18} score {:>8.2} [{}] (growth {:.1}%, intensity {:.1}, norm {:.2})",
            rank + 1,
            record.trend,
            record.signal_score,
            record.signal_label,
            record.adoption_growth_pct,
            record.viral_intensity,
            record.viral_norm,
        );
    }

    output
}
