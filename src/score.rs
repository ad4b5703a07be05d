use crate::models::{AdoptionSeries, SignalLabel, SignalScoreRecord, WeeklyObservation};

pub fn score_trends(
    observations: &[WeeklyObservation],
    adoption: &[(&'static str, AdoptionSeries)],
) -> Vec<SignalScoreRecord> {
    let mut baselines: Vec<(&str, f64, f64)> = Vec::with_capacity(adoption.len());

    for (trend, series) in adoption {
        let counts: Vec<f64> = observations
            .iter()
            .filter(|observation| observation.trend == *trend)
            .map(|observation| f64::from(observation.video_count))
            .collect();

        if counts.is_empty() {
            continue;
        }

        let viral_intensity = round_to(counts.iter().sum::<f64>() / counts.len() as f64, 1);
        let first = series[0];
        let last = series[series.len() - 1];
        let adoption_growth_pct = round_to((last - first) / first * 100.0, 1);

        baselines.push((*trend, viral_intensity, adoption_growth_pct));
    }

    let max_intensity = baselines
        .iter()
        .map(|(_, intensity, _)| *intensity)
        .fold(0.0, f64::max);

    if max_intensity <= 0.0 {
        return Vec::new();
    }

    let mut records: Vec<SignalScoreRecord> = baselines
        .into_iter()
        .map(|(trend, viral_intensity, adoption_growth_pct)| {
            let viral_norm = viral_intensity / max_intensity;
            let signal_score = round_to(adoption_growth_pct / viral_norm, 2);

            SignalScoreRecord {
                trend: trend.to_string(),
                viral_intensity,
                adoption_growth_pct,
                viral_norm,
                signal_score,
                signal_label: label_signal(signal_score),
            }
        })
        .collect();

    // Vec::sort_by is stable, so equal scores keep catalog order.
    records.sort_by(|a, b| {
        b.signal_score
            .partial_cmp(&a.signal_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    records
}

/// Buckets a score with strict thresholds; 40, 15 and 0 land in the lower
/// bracket.
pub fn label_signal(score: f64) -> SignalLabel {
    if score > 40.0 {
        SignalLabel::StrongSignal
    } else if score > 15.0 {
        SignalLabel::EmergingSignal
    } else if score > 0.0 {
        SignalLabel::Noise
    } else {
        SignalLabel::Burnout
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const BURNOUT_SERIES: AdoptionSeries = [30.0, 27.0, 24.0, 20.0, 17.0, 14.0];
    const DORMANT_SERIES: AdoptionSeries = [12.0, 13.0, 13.0, 14.0, 14.0, 15.0];

    fn flat_observations(trend: &str, video_count: u32) -> Vec<WeeklyObservation> {
        (1..=6)
            .map(|week| WeeklyObservation {
                trend: trend.to_string(),
                week,
                video_count,
            })
            .collect()
    }

    #[test]
    fn labels_follow_expected_brackets() {
        assert_eq!(label_signal(41.0), SignalLabel::StrongSignal);
        assert_eq!(label_signal(16.0), SignalLabel::EmergingSignal);
        assert_eq!(label_signal(0.5), SignalLabel::Noise);
        assert_eq!(label_signal(0.0), SignalLabel::Burnout);
        assert_eq!(label_signal(-5.0), SignalLabel::Burnout);
    }

    #[test]
    fn boundary_scores_resolve_to_the_lower_bracket() {
        assert_eq!(label_signal(40.0), SignalLabel::EmergingSignal);
        assert_eq!(label_signal(15.0), SignalLabel::Noise);
    }

    #[test]
    fn most_viral_trend_normalizes_to_one() {
        let mut observations = flat_observations("loud", 180);
        observations.extend(flat_observations("quiet", 90));
        let adoption = vec![
            ("loud", DORMANT_SERIES),
            ("quiet", DORMANT_SERIES),
        ];

        let records = score_trends(&observations, &adoption);
        let loud = records.iter().find(|r| r.trend == "loud").unwrap();
        assert_eq!(loud.viral_norm, 1.0);
        // With viral_norm at exactly 1 the score collapses to raw growth.
        assert_eq!(loud.signal_score, loud.adoption_growth_pct);
    }

    #[test]
    fn burnout_profile_scores_negative_at_peak_virality() {
        let observations = flat_observations("mobwife", 100);
        let adoption = vec![("mobwife", BURNOUT_SERIES)];

        let records = score_trends(&observations, &adoption);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.viral_intensity, 100.0);
        assert_eq!(record.adoption_growth_pct, -53.3);
        assert_eq!(record.viral_norm, 1.0);
        assert_eq!(record.signal_score, -53.3);
        assert_eq!(record.signal_label, SignalLabel::Burnout);
    }

    #[test]
    fn quiet_dormant_growth_outranks_the_hype() {
        let mut observations = flat_observations("loud", 200);
        observations.extend(flat_observations("quiet", 100));
        let adoption = vec![
            ("loud", BURNOUT_SERIES),
            ("quiet", DORMANT_SERIES),
        ];

        let records = score_trends(&observations, &adoption);
        let quiet = records.iter().find(|r| r.trend == "quiet").unwrap();
        assert_eq!(quiet.viral_norm, 0.5);
        assert_eq!(quiet.adoption_growth_pct, 25.0);
        assert_eq!(quiet.signal_score, 50.0);
        assert_eq!(quiet.signal_label, SignalLabel::StrongSignal);
        // Ranking is descending, so the dormant trend leads.
        assert_eq!(records[0].trend, "quiet");
    }

    #[test]
    fn scoring_nothing_yields_nothing() {
        assert!(score_trends(&[], &[]).is_empty());
    }

    #[test]
    fn trends_without_observations_are_skipped() {
        let observations = flat_observations("present", 120);
        let adoption = vec![
            ("present", DORMANT_SERIES),
            ("missing", DORMANT_SERIES),
        ];

        let records = score_trends(&observations, &adoption);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].trend, "present");
    }
}
