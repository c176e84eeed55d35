use crate::models::{Effort, OptimizationOpportunity, OrganizationMetrics, Project};

/// Display names for the projects an opportunity touches.
///
/// Ids missing from the catalog come back unchanged.
pub fn resolve_project_labels(
    opportunity: &OptimizationOpportunity,
    projects: &[Project],
) -> Vec<String> {
    opportunity
        .projects
        .iter()
        .map(|id| {
            projects
                .iter()
                .find(|p| &p.id == id)
                .map_or_else(|| id.clone(), |p| p.name.clone())
        })
        .collect()
}

/// `None` keeps every opportunity.
pub fn filter_by_effort(
    opportunities: &[OptimizationOpportunity],
    effort: Option<Effort>,
) -> Vec<&OptimizationOpportunity> {
    opportunities
        .iter()
        .filter(|opp| effort.map_or(true, |e| opp.effort == e))
        .collect()
}

pub fn organization_success_rate(metrics: &OrganizationMetrics) -> f64 {
    (1.0 - metrics.failure_rate) * 100.0
}
