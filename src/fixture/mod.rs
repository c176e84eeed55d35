//! In-memory stand-in for build-system telemetry.

mod catalog;
mod history;
mod reference;

use chrono::{NaiveDate, Utc};
use log::debug;
use rand::Rng;

use crate::models::BuildData;

pub use history::{generate_build_history, HISTORY_DAYS};
pub use reference::{
    cost_breakdown, generate_comparison_data, generate_cost_trend, infrastructure_metrics,
    COST_TREND_MONTHS,
};

/// Builds a fresh dataset with new random jitter and today's date.
pub fn generate_build_data() -> BuildData {
    generate_build_data_with(&mut rand::thread_rng(), Utc::now().date_naive())
}

/// Builds the dataset from an explicit random source and reference day.
pub fn generate_build_data_with<R: Rng>(rng: &mut R, today: NaiveDate) -> BuildData {
    let projects = catalog::projects(rng, today);
    debug!(
        "Generated {} projects with history ending {}",
        projects.len(),
        today
    );

    BuildData {
        projects,
        organization_metrics: catalog::organization_metrics(),
        optimization_opportunities: catalog::optimization_opportunities(),
    }
}
