use crate::config::Policy;
use crate::insights::{EffortSavings, ProjectCost, RoiEstimate};
use crate::models::{Effort, OptimizationOpportunity, Project};
use crate::money::{Money, ParseError};

const DAYS_PER_MONTH: f64 = 30.0;

pub fn monthly_savings(opportunity: &OptimizationOpportunity) -> Result<Money, ParseError> {
    Money::parse_monthly(&opportunity.savings)
}

/// Annual return on investment, in percent.
pub fn annual_roi(monthly_savings: f64, implementation_cost: f64) -> f64 {
    if implementation_cost == 0.0 {
        return 0.0;
    }
    ((monthly_savings * 12.0 - implementation_cost) / implementation_cost) * 100.0
}

/// Whole months until savings cover the cost; `None` if nothing is saved.
pub fn payback_months(monthly_savings: f64, implementation_cost: f64) -> Option<u32> {
    if monthly_savings <= 0.0 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let months = (implementation_cost / monthly_savings).ceil().max(0.0) as u32;
    Some(months)
}

pub fn roi_estimate(
    opportunity: &OptimizationOpportunity,
    policy: &Policy,
) -> Result<RoiEstimate, ParseError> {
    let savings = monthly_savings(opportunity)?.as_dollars();
    let cost = policy.implementation_cost.for_effort(opportunity.effort);

    Ok(RoiEstimate {
        optimization: opportunity.kind.clone(),
        effort: opportunity.effort,
        monthly_savings: savings,
        implementation_cost: cost,
        roi: annual_roi(savings, cost),
        payback_months: payback_months(savings, cost),
    })
}

pub fn roi_estimates(
    opportunities: &[OptimizationOpportunity],
    policy: &Policy,
) -> Result<Vec<RoiEstimate>, ParseError> {
    opportunities
        .iter()
        .map(|opp| roi_estimate(opp, policy))
        .collect()
}

/// Total monthly savings across opportunities.
///
/// A total too large to represent is reported as [`ParseError::Overflow`]
/// against the figure that pushed it over.
pub fn potential_monthly_savings(
    opportunities: &[OptimizationOpportunity],
) -> Result<Money, ParseError> {
    opportunities.iter().try_fold(Money::ZERO, |total, opp| {
        total
            .checked_add(monthly_savings(opp)?)
            .ok_or_else(|| ParseError::Overflow(opp.savings.clone()))
    })
}

/// Savings grouped by effort, always reporting all three effort levels.
pub fn savings_by_effort(estimates: &[RoiEstimate]) -> Vec<EffortSavings> {
    Effort::ALL
        .iter()
        .map(|&effort| {
            let matching: Vec<_> = estimates.iter().filter(|e| e.effort == effort).collect();

            EffortSavings {
                effort,
                opportunities: matching.len(),
                monthly_savings: matching.iter().map(|e| e.monthly_savings).sum(),
            }
        })
        .collect()
}

/// Low-effort opportunities, capped by the policy's quick win limit.
pub fn quick_wins<'a>(
    opportunities: &'a [OptimizationOpportunity],
    policy: &Policy,
) -> Vec<&'a OptimizationOpportunity> {
    opportunities
        .iter()
        .filter(|opp| opp.effort == Effort::Low)
        .take(policy.quick_win_limit)
        .collect()
}

/// Machine time plus developer wait time, from each project's build time.
pub fn project_costs(projects: &[Project], policy: &Policy) -> Vec<ProjectCost> {
    let per_minute = policy.cost_per_build_minute + policy.developer_wait_cost_per_minute;

    projects
        .iter()
        .map(|project| {
            let daily_cost = (project.build_time / 60.0) * policy.builds_per_day * per_minute;

            ProjectCost {
                project_id: project.id.clone(),
                name: project.name.clone(),
                team: project.team.clone(),
                build_time_seconds: project.build_time,
                daily_cost,
                monthly_cost: daily_cost * DAYS_PER_MONTH,
            }
        })
        .collect()
}
