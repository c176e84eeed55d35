use indexmap::IndexMap;

use crate::insights::{TeamShare, TeamSummary};
use crate::models::Project;

#[derive(Default)]
struct TeamTotals {
    build_time: f64,
    bundle_size: f64,
    count: usize,
}

/// Groups projects by exact team name, in order of first appearance.
pub fn team_performance(projects: &[Project]) -> Vec<TeamSummary> {
    let totals = projects
        .iter()
        .fold(IndexMap::<&str, TeamTotals>::new(), |mut acc, project| {
            let entry = acc.entry(project.team.as_str()).or_default();
            entry.build_time += project.build_time;
            entry.bundle_size += project.bundle_size;
            entry.count += 1;
            acc
        });

    totals
        .into_iter()
        .map(|(team, t)| {
            // Every group has at least one member
            #[allow(clippy::cast_precision_loss)]
            let count = t.count as f64;

            TeamSummary {
                team: team.to_string(),
                project_count: t.count,
                total_build_time_seconds: t.build_time,
                avg_build_time_seconds: t.build_time / count,
                avg_bundle_size_mb: t.bundle_size / count,
            }
        })
        .collect()
}

pub fn team_distribution(projects: &[Project]) -> Vec<TeamShare> {
    let counts = projects.iter().fold(IndexMap::new(), |mut acc, project| {
        *acc.entry(project.team.as_str()).or_insert(0_usize) += 1;
        acc
    });

    counts
        .into_iter()
        .map(|(team, project_count)| TeamShare {
            team: team.to_string(),
            project_count,
            percentage: super::percentage_of(project_count, projects.len()),
        })
        .collect()
}
