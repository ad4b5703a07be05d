use rand::Rng;

use crate::catalog::{AdoptionCategory, TREND_CATALOG, WEEK_COUNT};
use crate::models::{AdoptionSeries, WeeklyObservation};

/// Simulated posting behavior: each trend gets a baseline spike level, then
/// a week-by-week volatility swing that may dip below the baseline. Counts
/// clamp at zero even when the swing is strongly negative.
pub fn viral_observations(rng: &mut impl Rng) -> Vec<WeeklyObservation> {
    let mut observations = Vec::with_capacity(TREND_CATALOG.len() * WEEK_COUNT);

    for (trend, _) in TREND_CATALOG {
        let spike_base: i32 = rng.gen_range(60..=200);

        for week in 1..=WEEK_COUNT as u32 {
            let volatility: i32 = rng.gen_range(-30..=60);
            let video_count = (spike_base + volatility).max(0) as u32;

            observations.push(WeeklyObservation {
                trend: trend.to_string(),
                week,
                video_count,
            });
        }
    }

    observations
}

/// Weekly adoption intensities for one profile category. `Burnout` and
/// `Dormant` are fixed sequences; the other two draw from the supplied source.
pub fn adoption_series(category: AdoptionCategory, rng: &mut impl Rng) -> AdoptionSeries {
    match category {
        AdoptionCategory::Adopted => {
            // Running total over increments of 1 or 2, offset by 20, so the
            // series is strictly increasing and starts above 20.
            let mut total = 20.0;
            let mut series = [0.0; WEEK_COUNT];
            for value in &mut series {
                total += rng.gen_range(1..3) as f64;
                *value = total;
            }
            series
        }
        AdoptionCategory::Performative => {
            let mut series = [0.0; WEEK_COUNT];
            for value in &mut series {
                *value = rng.gen_range(18..22) as f64;
            }
            series
        }
        AdoptionCategory::Burnout => [30.0, 27.0, 24.0, 20.0, 17.0, 14.0],
        AdoptionCategory::Dormant => [12.0, 13.0, 13.0, 14.0, 14.0, 15.0],
    }
}

/// One adoption series per catalog trend, in catalog order.
pub fn adoption_by_trend(rng: &mut impl Rng) -> Vec<(&'static str, AdoptionSeries)> {
    TREND_CATALOG
        .iter()
        .map(|(trend, category)| (*trend, adoption_series(*category, rng)))
        .collect()
}
