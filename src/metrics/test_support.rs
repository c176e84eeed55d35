use chrono::NaiveDate;

use crate::models::{Dependency, Effort, OptimizationOpportunity, Project};

pub fn project(id: &str, team: &str, build_time: f64, bundle_size: f64) -> Project {
    Project {
        id: id.to_string(),
        name: id.to_string(),
        kind: "Next.js 14".to_string(),
        team: team.to_string(),
        build_time,
        bundle_size,
        dependencies: 0,
        last_optimized: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
        builds: None,
        chunks: None,
        dependency_list: None,
        optimizations: None,
    }
}

pub fn project_with_deps(name: &str, deps: Vec<Dependency>) -> Project {
    let mut p = project(&name.to_lowercase(), "Platform", 100.0, 1.0);
    p.name = name.to_string();
    p.dependency_list = Some(deps);
    p
}

pub fn dependency(
    name: &str,
    size: f64,
    kind: &str,
    treeshakable: bool,
    version: Option<&str>,
) -> Dependency {
    Dependency {
        name: name.to_string(),
        size,
        kind: kind.to_string(),
        treeshakable,
        version: version.map(str::to_string),
        last_updated: None,
    }
}

pub fn opportunity(
    kind: &str,
    effort: Effort,
    savings: &str,
    projects: &[&str],
) -> OptimizationOpportunity {
    OptimizationOpportunity {
        kind: kind.to_string(),
        projects: projects.iter().map(|p| (*p).to_string()).collect(),
        impact: String::new(),
        effort,
        savings: savings.to_string(),
        description: None,
        implementation_steps: None,
    }
}
