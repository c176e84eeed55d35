use chrono::Utc;
use log::{info, warn};

use super::{cost, dependencies, opportunities, teams, trend};
use crate::config::Policy;
use crate::error::Result;
use crate::insights::{BuildInsights, CostSummary, OrganizationSummary, ProjectInsights};
use crate::metrics::trend::BuildMetric;
use crate::models::{BuildData, OptimizationStatus, Project};

/// Runs every derivation over one dataset snapshot.
pub fn build_insights(data: &BuildData, policy: &Policy) -> Result<BuildInsights> {
    info!(
        "Deriving insights for {} projects and {} opportunities",
        data.projects.len(),
        data.optimization_opportunities.len()
    );

    if data.projects.is_empty() {
        warn!("Dataset contains no projects");
    }

    let dependencies = dependencies::aggregate_dependencies(&data.projects);
    let duplicated_dependencies = dependencies.iter().filter(|d| d.duplicated).count();

    let projects = data
        .projects
        .iter()
        .map(|p| project_insights(p, policy))
        .collect();

    Ok(BuildInsights {
        generated_at: Utc::now(),
        total_projects: data.projects.len(),
        organization: organization_summary(data),
        teams: teams::team_performance(&data.projects),
        team_distribution: teams::team_distribution(&data.projects),
        dependencies,
        duplicated_dependencies,
        cost: cost_summary(data, policy)?,
        projects,
    })
}

fn organization_summary(data: &BuildData) -> OrganizationSummary {
    let metrics = &data.organization_metrics;

    OrganizationSummary {
        total_projects: metrics.total_projects,
        avg_build_time_seconds: metrics.avg_build_time,
        monthly_cost: metrics.cost_per_month,
        developer_hours: metrics.developer_hours,
        cicd_pipelines: metrics.cicd_pipelines,
        success_rate: opportunities::organization_success_rate(metrics),
        opportunities_identified: data.optimization_opportunities.len(),
    }
}

pub fn cost_summary(data: &BuildData, policy: &Policy) -> Result<CostSummary> {
    let opps = &data.optimization_opportunities;
    let roi = cost::roi_estimates(opps, policy)?;
    let potential = cost::potential_monthly_savings(opps)?.as_dollars();

    Ok(CostSummary {
        current_monthly_cost: data.organization_metrics.cost_per_month,
        potential_monthly_savings: potential,
        potential_annual_savings: potential * 12.0,
        savings_by_effort: cost::savings_by_effort(&roi),
        quick_wins: cost::quick_wins(opps, policy)
            .into_iter()
            .map(|o| o.kind.clone())
            .collect(),
        projects: cost::project_costs(&data.projects, policy),
        roi,
    })
}

pub fn project_insights(project: &Project, policy: &Policy) -> ProjectInsights {
    let builds = project.builds();
    let deps = project.dependency_list();

    ProjectInsights {
        id: project.id.clone(),
        name: project.name.clone(),
        team: project.team.clone(),
        build_time: trend::build_trend(builds, BuildMetric::BuildTime),
        bundle_size: trend::build_trend(builds, BuildMetric::BundleSize),
        chunks: trend::chunk_shares(project.chunks()),
        dependencies: trend::dependency_shares(deps),
        bundle_composition: dependencies::bundle_composition(deps),
        dependency_risk: dependencies::assess_dependencies(deps, policy),
        risk_summary: dependencies::risk_summary(deps, policy),
        optimizations_in_flight: project
            .optimizations()
            .iter()
            .filter(|o| o.status == OptimizationStatus::InProgress)
            .count(),
    }
}
