use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::models::{
    BuildToolBenchmark, ComparisonData, CostCategory, HealthStatus, InfrastructureMetric,
    MonthlyCost, OptimizationImpact,
};

pub const COST_TREND_MONTHS: u32 = 12;

pub fn generate_comparison_data() -> ComparisonData {
    let build_tools = [
        ("Webpack", 125.0, 8.5, 2.1, 65.0),
        ("Vite", 45.0, 1.2, 0.3, 25.0),
        ("Parcel", 78.0, 3.8, 1.5, 8.0),
        ("esbuild", 12.0, 0.8, 0.2, 2.0),
    ]
    .into_iter()
    .map(
        |(name, avg_build_time, dev_server_start, hmr_speed, adoption)| BuildToolBenchmark {
            name: name.to_string(),
            avg_build_time,
            dev_server_start,
            hmr_speed,
            adoption,
        },
    )
    .collect();

    let optimization_impact = [
        ("Code Splitting", 180.0, 153.0, 15.0),
        ("Tree Shaking", 153.0, 118.0, 23.0),
        ("Lazy Loading", 118.0, 108.0, 8.0),
        ("Bundle Analysis", 108.0, 95.0, 12.0),
    ]
    .into_iter()
    .map(
        |(optimization, before_time, after_time, bundle_reduction)| OptimizationImpact {
            optimization: optimization.to_string(),
            before_time,
            after_time,
            bundle_reduction,
        },
    )
    .collect();

    ComparisonData {
        build_tools,
        optimization_impact,
    }
}

/// Fixed monthly spend split by category.
pub fn cost_breakdown() -> Vec<CostCategory> {
    [
        ("CI/CD Infrastructure", 4200.0, 27.0, "Build servers, storage, networking"),
        ("Developer Time", 8400.0, 54.0, "Time spent waiting for builds"),
        ("Cloud Resources", 2100.0, 13.0, "AWS, deployment infrastructure"),
        ("Tool Licenses", 900.0, 6.0, "Build tools, monitoring, analytics"),
    ]
    .into_iter()
    .map(|(category, cost, percentage, description)| CostCategory {
        category: category.to_string(),
        cost,
        percentage,
        description: description.to_string(),
    })
    .collect()
}

/// Jittered spend for the trailing `months` months ending with the month of `today`.
pub fn generate_cost_trend<R: Rng>(months: u32, rng: &mut R, today: NaiveDate) -> Vec<MonthlyCost> {
    (0..months)
        .rev()
        .map(|months_back| {
            let infrastructure_cost = 8000.0 + rng.gen::<f64>() * 3000.0;
            let developer_cost = 12_000.0 + rng.gen::<f64>() * 4000.0;
            let opportunity_cost = 2000.0 + rng.gen::<f64>() * 1500.0;

            MonthlyCost {
                month: month_label(today, months_back),
                infrastructure_cost,
                developer_cost,
                opportunity_cost,
                total_cost: infrastructure_cost + developer_cost + opportunity_cost,
            }
        })
        .collect()
}

fn month_label(today: NaiveDate, months_back: u32) -> String {
    let index = today.year() * 12 + today.month0() as i32 - months_back as i32;
    let year = index.div_euclid(12);
    #[allow(clippy::cast_sign_loss)]
    let month = index.rem_euclid(12) as u32 + 1;

    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}

pub fn infrastructure_metrics() -> Vec<InfrastructureMetric> {
    [
        ("CPU Usage", 67.0, 80.0, HealthStatus::Good),
        ("Memory Usage", 72.0, 85.0, HealthStatus::Good),
        ("Disk I/O", 45.0, 70.0, HealthStatus::Excellent),
        ("Network", 38.0, 60.0, HealthStatus::Excellent),
        ("Cache Hit Rate", 89.0, 85.0, HealthStatus::Excellent),
        ("Error Rate", 6.3, 5.0, HealthStatus::Warning),
    ]
    .into_iter()
    .map(|(metric, value, target, status)| InfrastructureMetric {
        metric: metric.to_string(),
        value,
        target,
        status,
    })
    .collect()
}
