use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ChunkType, Effort};

#[derive(Debug, Serialize, Deserialize)]
pub struct BuildInsights {
    pub generated_at: DateTime<Utc>,
    pub total_projects: usize,
    pub organization: OrganizationSummary,
    pub teams: Vec<TeamSummary>,
    pub team_distribution: Vec<TeamShare>,
    pub dependencies: Vec<AggregatedDependency>,
    pub duplicated_dependencies: usize,
    pub cost: CostSummary,
    pub projects: Vec<ProjectInsights>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub total_projects: u32,
    pub avg_build_time_seconds: f64,
    pub monthly_cost: f64,
    pub developer_hours: f64,
    pub cicd_pipelines: u32,
    pub success_rate: f64,
    pub opportunities_identified: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team: String,
    pub project_count: usize,
    pub total_build_time_seconds: f64,
    pub avg_build_time_seconds: f64,
    pub avg_bundle_size_mb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamShare {
    pub team: String,
    pub project_count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedDependency {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub treeshakable: bool,
    pub version: Option<String>,
    /// Size declared by the first project that lists this dependency
    pub size_kb: f64,
    pub total_size_kb: f64,
    /// Names of the declaring projects, in discovery order
    pub projects: Vec<String>,
    pub usage_count: usize,
    pub duplicated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_points(points: u8) -> Self {
        match points {
            0 => Self::Low,
            1 => Self::Medium,
            _ => Self::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRisk {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size_kb: f64,
    pub treeshakable: bool,
    pub version: String,
    pub risk: RiskLevel,
    pub size_class: SizeClass,
    pub potentially_outdated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub outdated: usize,
    pub non_treeshakable: usize,
    pub large: usize,
    pub total_risk: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeComposition {
    #[serde(rename = "type")]
    pub kind: String,
    pub size_kb: f64,
    pub count: usize,
    pub treeshakable: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub optimization: String,
    pub effort: Effort,
    pub monthly_savings: f64,
    pub implementation_cost: f64,
    /// Annual return on the implementation cost, in percent
    pub roi: f64,
    /// `None` when the opportunity saves nothing
    pub payback_months: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortSavings {
    pub effort: Effort,
    pub opportunities: usize,
    pub monthly_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCost {
    pub project_id: String,
    pub name: String,
    pub team: String,
    pub build_time_seconds: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSummary {
    pub current_monthly_cost: f64,
    pub potential_monthly_savings: f64,
    pub potential_annual_savings: f64,
    pub roi: Vec<RoiEstimate>,
    pub savings_by_effort: Vec<EffortSavings>,
    pub quick_wins: Vec<String>,
    pub projects: Vec<ProjectCost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub samples: usize,
    pub average: f64,
    pub trend_percentage: f64,
    pub successful_builds: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkShare {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChunkType,
    pub size_kb: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyShare {
    pub name: String,
    pub size_kb: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInsights {
    pub id: String,
    pub name: String,
    pub team: String,
    pub build_time: TrendSummary,
    pub bundle_size: TrendSummary,
    pub chunks: Vec<ChunkShare>,
    pub dependencies: Vec<DependencyShare>,
    pub bundle_composition: Vec<TypeComposition>,
    pub dependency_risk: Vec<DependencyRisk>,
    pub risk_summary: RiskSummary,
    pub optimizations_in_flight: usize,
}
