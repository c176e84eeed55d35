use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::models::BuildHistory;

pub const HISTORY_DAYS: u64 = 30;

const BUILD_TIME_JITTER: f64 = 0.3;
const BUNDLE_SIZE_JITTER: f64 = 0.2;
const FAILURE_PROBABILITY: f64 = 0.05;

/// Daily snapshots for the trailing `days` days ending at `today`, oldest first.
///
/// Each snapshot perturbs the base values upward by a bounded random fraction.
pub fn generate_build_history<R: Rng>(
    base_time: f64,
    base_size: f64,
    days: u64,
    rng: &mut R,
    today: NaiveDate,
) -> Vec<BuildHistory> {
    let mut history: Vec<BuildHistory> = (0..days)
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| BuildHistory {
            date,
            build_time: base_time + rng.gen::<f64>() * (base_time * BUILD_TIME_JITTER),
            bundle_size: base_size + rng.gen::<f64>() * (base_size * BUNDLE_SIZE_JITTER),
            success: rng.gen::<f64>() > FAILURE_PROBABILITY,
        })
        .collect();

    history.reverse();
    history
}
