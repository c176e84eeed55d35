use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildData {
    pub projects: Vec<Project>,
    pub organization_metrics: OrganizationMetrics,
    pub optimization_opportunities: Vec<OptimizationOpportunity>,
}

impl BuildData {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub team: String,
    /// Seconds
    pub build_time: f64,
    /// Megabytes
    pub bundle_size: f64,
    /// Declared dependency count. Not required to match `dependency_list`.
    pub dependencies: u32,
    pub last_optimized: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builds: Option<Vec<BuildHistory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<Chunk>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_list: Option<Vec<Dependency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizations: Option<Vec<Optimization>>,
}

impl Project {
    pub fn builds(&self) -> &[BuildHistory] {
        self.builds.as_deref().unwrap_or_default()
    }

    pub fn chunks(&self) -> &[Chunk] {
        self.chunks.as_deref().unwrap_or_default()
    }

    pub fn dependency_list(&self) -> &[Dependency] {
        self.dependency_list.as_deref().unwrap_or_default()
    }

    pub fn optimizations(&self) -> &[Optimization] {
        self.optimizations.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildHistory {
    pub date: NaiveDate,
    pub build_time: f64,
    pub bundle_size: f64,
    pub success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkType {
    Entry,
    Vendor,
    Common,
    Runtime,
    Async,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub name: String,
    /// Kilobytes
    pub size: f64,
    #[serde(rename = "type")]
    pub kind: ChunkType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub name: String,
    /// Kilobytes
    pub size: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub treeshakable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizationStatus {
    Implemented,
    Recommended,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optimization {
    #[serde(rename = "type")]
    pub kind: String,
    pub impact: String,
    pub status: OptimizationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMetrics {
    pub total_build_time: f64,
    pub total_projects: u32,
    pub avg_build_time: f64,
    pub cost_per_month: f64,
    pub developer_hours: f64,
    pub cicd_pipelines: u32,
    /// Fraction in `0.0..=1.0`
    pub failure_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub const ALL: [Effort; 3] = [Effort::Low, Effort::Medium, Effort::High];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOpportunity {
    #[serde(rename = "type")]
    pub kind: String,
    /// Ids of the affected projects
    pub projects: Vec<String>,
    pub impact: String,
    pub effort: Effort,
    /// Currency text such as `"$5,800/month"`
    pub savings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_steps: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonData {
    pub build_tools: Vec<BuildToolBenchmark>,
    pub optimization_impact: Vec<OptimizationImpact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildToolBenchmark {
    pub name: String,
    pub avg_build_time: f64,
    pub dev_server_start: f64,
    pub hmr_speed: f64,
    /// Percent of surveyed projects
    pub adoption: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationImpact {
    pub optimization: String,
    pub before_time: f64,
    pub after_time: f64,
    pub bundle_reduction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCategory {
    pub category: String,
    pub cost: f64,
    pub percentage: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCost {
    pub month: String,
    pub infrastructure_cost: f64,
    pub developer_cost: f64,
    pub opportunity_cost: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl HealthStatus {
    /// True when the metric needs someone to look at it.
    pub fn needs_attention(self) -> bool {
        match self {
            Self::Excellent | Self::Good => false,
            Self::Warning | Self::Critical => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureMetric {
    pub metric: String,
    pub value: f64,
    pub target: f64,
    pub status: HealthStatus,
}
