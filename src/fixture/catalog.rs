use chrono::NaiveDate;
use rand::Rng;

use super::history::{generate_build_history, HISTORY_DAYS};
use crate::models::{
    Chunk, ChunkType, Dependency, Effort, Optimization, OptimizationOpportunity,
    OptimizationStatus, OrganizationMetrics, Project,
};

struct ProjectSeed {
    id: &'static str,
    name: &'static str,
    kind: &'static str,
    team: &'static str,
    build_time: f64,
    bundle_size: f64,
    dependencies: u32,
    last_optimized: (i32, u32, u32),
}

const PROJECT_SEEDS: [ProjectSeed; 4] = [
    ProjectSeed {
        id: "web-app",
        name: "Main Web Application",
        kind: "Next.js 14",
        team: "Platform Engineering",
        build_time: 847.0,
        bundle_size: 2.3,
        dependencies: 245,
        last_optimized: (2024, 12, 15),
    },
    ProjectSeed {
        id: "mobile-app",
        name: "Mobile Application",
        kind: "React Native",
        team: "Mobile Engineering",
        build_time: 1240.0,
        bundle_size: 4.7,
        dependencies: 180,
        last_optimized: (2024, 11, 28),
    },
    ProjectSeed {
        id: "admin-portal",
        name: "Admin Portal",
        kind: "Vue.js 3",
        team: "Backend Engineering",
        build_time: 445.0,
        bundle_size: 1.8,
        dependencies: 156,
        last_optimized: (2024, 12, 20),
    },
    ProjectSeed {
        id: "analytics-dashboard",
        name: "Analytics Dashboard",
        kind: "Angular 17",
        team: "Data Engineering",
        build_time: 1120.0,
        bundle_size: 3.2,
        dependencies: 198,
        last_optimized: (2024, 10, 15),
    },
];

pub fn projects<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<Project> {
    PROJECT_SEEDS
        .iter()
        .map(|seed| {
            let (y, m, d) = seed.last_optimized;
            let builds =
                generate_build_history(seed.build_time, seed.bundle_size, HISTORY_DAYS, rng, today);

            let mut project = Project {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                kind: seed.kind.to_string(),
                team: seed.team.to_string(),
                build_time: seed.build_time,
                bundle_size: seed.bundle_size,
                dependencies: seed.dependencies,
                last_optimized: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(today),
                builds: Some(builds),
                chunks: None,
                dependency_list: None,
                optimizations: Some(optimizations_for(seed.id)),
            };

            // Only the web app ships a chunk and dependency breakdown
            if seed.id == "web-app" {
                project.chunks = Some(web_app_chunks());
                project.dependency_list = Some(web_app_dependencies());
            }

            project
        })
        .collect()
}

fn web_app_chunks() -> Vec<Chunk> {
    [
        ("main", 580.0, ChunkType::Entry),
        ("vendor", 720.0, ChunkType::Vendor),
        ("commons", 180.0, ChunkType::Common),
        ("runtime", 45.0, ChunkType::Runtime),
        ("async-chunks", 775.0, ChunkType::Async),
    ]
    .into_iter()
    .map(|(name, size, kind)| Chunk {
        name: name.to_string(),
        size,
        kind,
    })
    .collect()
}

fn web_app_dependencies() -> Vec<Dependency> {
    [
        ("react", 142.0, "framework", true, "18.2.0"),
        ("lodash", 528.0, "utility", false, "4.17.21"),
        ("moment", 329.0, "date", false, "2.29.4"),
        ("antd", 892.0, "ui", true, "5.0.0"),
        ("recharts", 234.0, "visualization", true, "2.8.0"),
    ]
    .into_iter()
    .map(|(name, size, kind, treeshakable, version)| Dependency {
        name: name.to_string(),
        size,
        kind: kind.to_string(),
        treeshakable,
        version: Some(version.to_string()),
        last_updated: None,
    })
    .collect()
}

fn optimizations_for(project_id: &str) -> Vec<Optimization> {
    use OptimizationStatus::{InProgress, Implemented, Recommended};

    let entries: &[(&str, &str, OptimizationStatus)] = match project_id {
        "web-app" => &[
            ("Code Splitting", "-15%", Implemented),
            ("Tree Shaking", "-23%", Implemented),
            ("Bundle Analysis", "-12%", Recommended),
            ("Lazy Loading", "-8%", InProgress),
        ],
        "mobile-app" => &[
            ("Metro Bundle Splitting", "-20%", Recommended),
            ("Hermes Engine", "-35%", InProgress),
        ],
        "admin-portal" => &[
            ("Vite Migration", "-45%", Implemented),
            ("Component Lazy Loading", "-12%", Implemented),
        ],
        "analytics-dashboard" => &[
            ("Ivy Renderer", "-25%", Implemented),
            ("OnPush Strategy", "-18%", Recommended),
        ],
        _ => &[],
    };

    entries
        .iter()
        .map(|&(kind, impact, status)| Optimization {
            kind: kind.to_string(),
            impact: impact.to_string(),
            status,
            description: None,
        })
        .collect()
}

pub fn organization_metrics() -> OrganizationMetrics {
    OrganizationMetrics {
        total_build_time: 3652.0,
        total_projects: 12,
        avg_build_time: 678.0,
        cost_per_month: 15_600.0,
        developer_hours: 340.0,
        cicd_pipelines: 45,
        failure_rate: 0.063,
    }
}

pub fn optimization_opportunities() -> Vec<OptimizationOpportunity> {
    vec![
        OptimizationOpportunity {
            kind: "Webpack to Vite Migration".to_string(),
            projects: to_strings(&["web-app", "analytics-dashboard"]),
            impact: "Reduce build time by 60%".to_string(),
            effort: Effort::High,
            savings: "$5,800/month".to_string(),
            description: Some(
                "Migrate from Webpack to Vite for significantly faster development builds"
                    .to_string(),
            ),
            implementation_steps: Some(to_strings(&[
                "Audit existing webpack configuration",
                "Create Vite configuration",
                "Update build scripts",
                "Test in staging environment",
                "Gradual rollout to production",
            ])),
        },
        OptimizationOpportunity {
            kind: "Dependency Deduplication".to_string(),
            projects: to_strings(&["web-app", "admin-portal", "analytics-dashboard"]),
            impact: "Reduce bundle size by 18%".to_string(),
            effort: Effort::Medium,
            savings: "$2,400/month".to_string(),
            description: Some("Eliminate duplicate dependencies across projects".to_string()),
            implementation_steps: None,
        },
        OptimizationOpportunity {
            kind: "Build Cache Optimization".to_string(),
            projects: to_strings(&["mobile-app"]),
            impact: "Reduce build time by 35%".to_string(),
            effort: Effort::Medium,
            savings: "$4,200/month".to_string(),
            description: Some(
                "Implement distributed build caching with Nx or similar".to_string(),
            ),
            implementation_steps: None,
        },
        OptimizationOpportunity {
            kind: "Micro-Frontend Architecture".to_string(),
            projects: to_strings(&["web-app"]),
            impact: "Enable independent deployments".to_string(),
            effort: Effort::High,
            savings: "$7,200/month".to_string(),
            description: Some(
                "Split monolithic frontend into independently deployable modules".to_string(),
            ),
            implementation_steps: None,
        },
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
