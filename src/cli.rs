use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use buildlens::error::BuildLensError;
use buildlens::fixture::{self, COST_TREND_MONTHS};
use buildlens::insights::DependencyRisk;
use buildlens::metrics::{self, BuildMetric};
use buildlens::models::{
    BuildData, CostCategory, Effort, InfrastructureMetric, MonthlyCost, Project,
};
use buildlens::Policy;

#[derive(Parser)]
#[command(name = "buildlens")]
#[command(author, version, about = "Build Insights Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output file path (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,

    /// Policy file overriding thresholds and cost constants
    #[arg(short, long, global = true, env = "BUILDLENS_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generated dataset
    Fixture,

    /// Derive every view from a freshly generated dataset
    Insights,

    /// Analyze a single project
    Project {
        /// Project ID (e.g., "web-app")
        #[arg(short, long)]
        id: String,

        /// Number of most recent builds to include
        #[arg(short, long, default_value_t = 7)]
        recent: usize,
    },

    /// Dependency aggregation and risk
    Dependencies {
        /// Restrict to one project's dependency list
        #[arg(short = 'P', long)]
        project: Option<String>,

        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact dependency type filter
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Return on investment for optimization opportunities
    Roi {
        /// Only opportunities with this effort
        #[arg(short, long, value_enum)]
        effort: Option<Effort>,
    },

    /// Cost breakdown, monthly cost trend and infrastructure health
    Costs,

    /// Build tool benchmark tables
    Comparison,
}

#[derive(Serialize)]
struct ProjectReport<'a> {
    #[serde(flatten)]
    insights: buildlens::insights::ProjectInsights,
    recent_builds: &'a [buildlens::models::BuildHistory],
    build_time_trend_recent: f64,
    bundle_size_trend_recent: f64,
}

#[derive(Serialize)]
struct DependencyReport<T> {
    /// Every type present before filtering, for building a type picker
    available_types: Vec<String>,
    dependencies: Vec<T>,
}

#[derive(Serialize)]
struct OpportunityRoi {
    #[serde(flatten)]
    estimate: buildlens::insights::RoiEstimate,
    projects: Vec<String>,
}

#[derive(Serialize)]
struct CostReport {
    breakdown: Vec<CostCategory>,
    trend: Vec<MonthlyCost>,
    infrastructure: Vec<InfrastructureMetric>,
    needs_attention: Vec<String>,
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        let policy = Policy::load(self.config.as_deref()).context("Failed to load policy")?;
        let data = fixture::generate_build_data();

        match &self.command {
            Commands::Fixture => self.emit(&data),
            Commands::Insights => {
                info!("Deriving insights for {} projects", data.projects.len());
                let insights = metrics::build_insights(&data, &policy)?;
                self.emit(&insights)
            }
            Commands::Project { id, recent } => {
                let project = find_project(&data, id)?;
                info!("Analyzing project: {}", project.name);

                let window = metrics::recent_builds(project.builds(), *recent);
                let series = |metric: BuildMetric| -> Vec<f64> {
                    window.iter().map(|b| metric.sample(b)).collect()
                };

                self.emit(&ProjectReport {
                    insights: metrics::project_insights(project, &policy),
                    recent_builds: window,
                    build_time_trend_recent: metrics::trend_percentage(&series(
                        BuildMetric::BuildTime,
                    )),
                    bundle_size_trend_recent: metrics::trend_percentage(&series(
                        BuildMetric::BundleSize,
                    )),
                })
            }
            Commands::Dependencies {
                project,
                search,
                kind,
            } => match project {
                Some(id) => {
                    let project = find_project(&data, id)?;
                    let filtered: Vec<_> = metrics::filter_dependencies(
                        project.dependency_list(),
                        search,
                        kind.as_deref(),
                    )
                    .into_iter()
                    .cloned()
                    .collect();

                    let risks: Vec<DependencyRisk> =
                        metrics::assess_dependencies(&filtered, &policy);
                    self.emit(&DependencyReport {
                        available_types: metrics::dependency_types(project.dependency_list()),
                        dependencies: risks,
                    })
                }
                None => {
                    let aggregated = metrics::aggregate_dependencies(&data.projects);
                    self.emit(&DependencyReport {
                        available_types: metrics::dependency_types(
                            data.projects.iter().flat_map(Project::dependency_list),
                        ),
                        dependencies: metrics::filter_aggregated(
                            &aggregated,
                            search,
                            kind.as_deref(),
                        ),
                    })
                }
            },
            Commands::Roi { effort } => {
                let report = opportunity_roi(&data, *effort, &policy)?;
                self.emit(&report)
            }
            Commands::Costs => {
                let infrastructure = fixture::infrastructure_metrics();
                let needs_attention = infrastructure
                    .iter()
                    .filter(|m| m.status.needs_attention())
                    .map(|m| m.metric.clone())
                    .collect();

                self.emit(&CostReport {
                    breakdown: fixture::cost_breakdown(),
                    trend: fixture::generate_cost_trend(
                        COST_TREND_MONTHS,
                        &mut rand::thread_rng(),
                        Utc::now().date_naive(),
                    ),
                    infrastructure,
                    needs_attention,
                })
            }
            Commands::Comparison => self.emit(&fixture::generate_comparison_data()),
        }
    }

    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let json_output = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, json_output)?;
            info!("Output written to: {}", output_path.display());
        } else {
            println!("{json_output}");
        }

        Ok(())
    }
}

fn find_project<'a>(data: &'a BuildData, id: &str) -> buildlens::Result<&'a Project> {
    data.project(id)
        .ok_or_else(|| BuildLensError::NotFoundError(format!("project '{id}'")))
}

fn opportunity_roi(
    data: &BuildData,
    effort: Option<Effort>,
    policy: &Policy,
) -> buildlens::Result<Vec<OpportunityRoi>> {
    metrics::filter_by_effort(&data.optimization_opportunities, effort)
        .into_iter()
        .map(|opp| -> buildlens::Result<OpportunityRoi> {
            Ok(OpportunityRoi {
                estimate: metrics::roi_estimate(opp, policy)?,
                projects: metrics::resolve_project_labels(opp, &data.projects),
            })
        })
        .collect()
}
