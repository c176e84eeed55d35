//! Pure derivations over a [`BuildData`](crate::models::BuildData) snapshot.

pub mod cost;
pub mod dependencies;
pub mod opportunities;
pub mod report;
pub mod teams;
pub mod trend;

#[cfg(test)]
pub(crate) mod test_support;

pub use cost::{
    potential_monthly_savings, project_costs, quick_wins, roi_estimate, roi_estimates,
    savings_by_effort,
};
pub use dependencies::{
    aggregate_dependencies, assess_dependencies, bundle_composition, dependency_types,
    filter_aggregated, filter_dependencies, is_potentially_outdated, risk_level, risk_summary,
    size_class,
};
pub use opportunities::{filter_by_effort, organization_success_rate, resolve_project_labels};
pub use report::{build_insights, cost_summary, project_insights};
pub use teams::{team_distribution, team_performance};
pub use trend::{
    build_trend, chunk_shares, dependency_shares, recent_builds, trend_percentage, BuildMetric,
};

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[allow(clippy::cast_precision_loss)]
fn percentage_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64) * 100.0
}
