use serde::{Deserialize, Serialize};

use crate::insights::{ChunkShare, DependencyShare, TrendSummary};
use crate::models::{BuildHistory, Chunk, Dependency};

/// Which series of a build history to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildMetric {
    BuildTime,
    BundleSize,
}

impl BuildMetric {
    pub fn sample(self, build: &BuildHistory) -> f64 {
        match self {
            Self::BuildTime => build.build_time,
            Self::BundleSize => build.bundle_size,
        }
    }
}

/// Relative change from the first sample to the last, in percent.
///
/// Defined as 0 for fewer than two samples or a zero first sample.
pub fn trend_percentage(samples: &[f64]) -> f64 {
    match samples {
        [first, .., last] if *first != 0.0 => (last - first) / first * 100.0,
        _ => 0.0,
    }
}

pub fn build_trend(builds: &[BuildHistory], metric: BuildMetric) -> TrendSummary {
    let samples: Vec<f64> = builds.iter().map(|b| metric.sample(b)).collect();

    TrendSummary {
        samples: samples.len(),
        average: super::mean(&samples),
        trend_percentage: trend_percentage(&samples),
        successful_builds: builds.iter().filter(|b| b.success).count(),
    }
}

/// The most recent `n` builds, oldest first.
pub fn recent_builds(builds: &[BuildHistory], n: usize) -> &[BuildHistory] {
    &builds[builds.len().saturating_sub(n)..]
}

pub fn chunk_shares(chunks: &[Chunk]) -> Vec<ChunkShare> {
    let total: f64 = chunks.iter().map(|c| c.size).sum();

    chunks
        .iter()
        .map(|chunk| ChunkShare {
            name: chunk.name.clone(),
            kind: chunk.kind,
            size_kb: chunk.size,
            percentage: share(chunk.size, total),
        })
        .collect()
}

pub fn dependency_shares(deps: &[Dependency]) -> Vec<DependencyShare> {
    let total: f64 = deps.iter().map(|d| d.size).sum();

    deps.iter()
        .map(|dep| DependencyShare {
            name: dep.name.clone(),
            size_kb: dep.size,
            percentage: share(dep.size, total),
        })
        .collect()
}

fn share(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::ChunkType;

    fn build(day: u32, build_time: f64, bundle_size: f64, success: bool) -> BuildHistory {
        BuildHistory {
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            build_time,
            bundle_size,
            success,
        }
    }

    #[test]
    fn test_trend_percentage_increase_and_decrease() {
        assert!((trend_percentage(&[100.0, 150.0]) - 50.0).abs() < f64::EPSILON);
        assert!((trend_percentage(&[100.0, 50.0]) + 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trend_percentage_uses_endpoints_only() {
        assert!((trend_percentage(&[200.0, 900.0, 10.0, 300.0]) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trend_percentage_degenerate_inputs() {
        assert!(trend_percentage(&[]).abs() < f64::EPSILON);
        assert!(trend_percentage(&[100.0]).abs() < f64::EPSILON);
        assert!(trend_percentage(&[0.0, 100.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_build_trend_by_metric() {
        let builds = vec![
            build(1, 100.0, 2.0, true),
            build(2, 110.0, 2.5, false),
            build(3, 120.0, 3.0, true),
        ];

        let time = build_trend(&builds, BuildMetric::BuildTime);
        assert_eq!(time.samples, 3);
        assert!((time.average - 110.0).abs() < 1e-9);
        assert!((time.trend_percentage - 20.0).abs() < 1e-9);
        assert_eq!(time.successful_builds, 2);

        let size = build_trend(&builds, BuildMetric::BundleSize);
        assert!((size.average - 2.5).abs() < 1e-9);
        assert!((size.trend_percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_trend_empty_history() {
        let summary = build_trend(&[], BuildMetric::BuildTime);
        assert_eq!(summary.samples, 0);
        assert!(summary.average.abs() < f64::EPSILON);
        assert!(summary.trend_percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn test_recent_builds_window() {
        let builds: Vec<_> = (1..=10).map(|d| build(d, 1.0, 1.0, true)).collect();

        let recent = recent_builds(&builds, 7);
        assert_eq!(recent.len(), 7);
        assert_eq!(recent[0].date, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
        assert_eq!(recent_builds(&builds, 50).len(), 10);
        assert!(recent_builds(&builds, 0).is_empty());
    }

    #[test]
    fn test_chunk_shares_sum_to_hundred() {
        let chunks = vec![
            Chunk {
                name: "main".to_string(),
                size: 750.0,
                kind: ChunkType::Entry,
            },
            Chunk {
                name: "vendor".to_string(),
                size: 250.0,
                kind: ChunkType::Vendor,
            },
        ];

        let shares = chunk_shares(&chunks);
        assert!((shares[0].percentage - 75.0).abs() < f64::EPSILON);
        assert!((shares[1].percentage - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dependency_shares_zero_total() {
        let deps = vec![Dependency {
            name: "empty".to_string(),
            size: 0.0,
            kind: "misc".to_string(),
            treeshakable: true,
            version: None,
            last_updated: None,
        }];

        assert!(dependency_shares(&deps)[0].percentage.abs() < f64::EPSILON);
    }
}
