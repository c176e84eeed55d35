use indexmap::IndexMap;

use crate::config::Policy;
use crate::insights::{
    AggregatedDependency, DependencyRisk, RiskLevel, RiskSummary, SizeClass, TypeComposition,
};
use crate::models::{Dependency, Project};

/// Merges dependency lists across projects, keyed by dependency name.
///
/// The first project to declare a name supplies the base record; later
/// declarations only add to the size total and the list of users.
pub fn aggregate_dependencies(projects: &[Project]) -> Vec<AggregatedDependency> {
    let merged = projects
        .iter()
        .flat_map(|project| {
            project
                .dependency_list()
                .iter()
                .map(move |dep| (project.name.as_str(), dep))
        })
        .fold(
            IndexMap::<&str, AggregatedDependency>::new(),
            |mut acc, (project_name, dep)| {
                acc.entry(dep.name.as_str())
                    .and_modify(|existing| {
                        existing.total_size_kb += dep.size;
                        existing.projects.push(project_name.to_string());
                        existing.usage_count += 1;
                    })
                    .or_insert_with(|| AggregatedDependency {
                        name: dep.name.clone(),
                        kind: dep.kind.clone(),
                        treeshakable: dep.treeshakable,
                        version: dep.version.clone(),
                        size_kb: dep.size,
                        total_size_kb: dep.size,
                        projects: vec![project_name.to_string()],
                        usage_count: 1,
                        duplicated: false,
                    });
                acc
            },
        );

    merged
        .into_values()
        .map(|mut dep| {
            dep.duplicated = dep.usage_count > 1;
            dep
        })
        .collect()
}

pub fn risk_points(dep: &Dependency, policy: &Policy) -> u8 {
    u8::from(!dep.treeshakable) + u8::from(dep.size > policy.large_dependency_kb)
}

pub fn risk_level(dep: &Dependency, policy: &Policy) -> RiskLevel {
    RiskLevel::from_points(risk_points(dep, policy))
}

/// Leading integer of a version string, e.g. `4` for `"4.17.21"` or `3` for
/// `"3-beta.1"`. `None` when the version does not start with a digit.
pub fn major_version(version: &str) -> Option<u64> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    let digits = version
        .find(|c: char| !c.is_ascii_digit())
        .map_or(version, |end| &version[..end]);
    digits.parse().ok()
}

/// A dependency whose major version sits below the policy floor.
///
/// Missing versions fall back to the policy default, and unparseable ones
/// count as outdated.
pub fn is_potentially_outdated(dep: &Dependency, policy: &Policy) -> bool {
    let version = dep.version.as_deref().unwrap_or(&policy.default_version);
    major_version(version).map_or(true, |major| major < policy.outdated_major_below)
}

pub fn size_class(size_kb: f64, policy: &Policy) -> SizeClass {
    if size_kb > policy.large_size_class_kb {
        SizeClass::Large
    } else if size_kb > policy.medium_size_class_kb {
        SizeClass::Medium
    } else {
        SizeClass::Small
    }
}

pub fn risk_summary(deps: &[Dependency], policy: &Policy) -> RiskSummary {
    let outdated = deps
        .iter()
        .filter(|d| is_potentially_outdated(d, policy))
        .count();
    let non_treeshakable = deps.iter().filter(|d| !d.treeshakable).count();
    let large = deps
        .iter()
        .filter(|d| d.size > policy.large_dependency_kb)
        .count();

    RiskSummary {
        outdated,
        non_treeshakable,
        large,
        total_risk: outdated + non_treeshakable + large,
    }
}

pub fn assess_dependencies(deps: &[Dependency], policy: &Policy) -> Vec<DependencyRisk> {
    deps.iter()
        .map(|dep| DependencyRisk {
            name: dep.name.clone(),
            kind: dep.kind.clone(),
            size_kb: dep.size,
            treeshakable: dep.treeshakable,
            version: dep
                .version
                .clone()
                .unwrap_or_else(|| policy.default_version.clone()),
            risk: risk_level(dep, policy),
            size_class: size_class(dep.size, policy),
            potentially_outdated: is_potentially_outdated(dep, policy),
        })
        .collect()
}

/// Per-type totals for a dependency list, in order of first appearance.
pub fn bundle_composition(deps: &[Dependency]) -> Vec<TypeComposition> {
    deps.iter()
        .fold(IndexMap::<&str, TypeComposition>::new(), |mut acc, dep| {
            let entry = acc
                .entry(dep.kind.as_str())
                .or_insert_with(|| TypeComposition {
                    kind: dep.kind.clone(),
                    size_kb: 0.0,
                    count: 0,
                    treeshakable: 0,
                });
            entry.size_kb += dep.size;
            entry.count += 1;
            entry.treeshakable += usize::from(dep.treeshakable);
            acc
        })
        .into_values()
        .collect()
}

/// Distinct dependency types, in order of first appearance.
pub fn dependency_types<'a, I>(deps: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Dependency>,
{
    deps.into_iter()
        .map(|d| d.kind.as_str())
        .fold(Vec::new(), |mut types: Vec<String>, kind| {
            if !types.iter().any(|t| t == kind) {
                types.push(kind.to_string());
            }
            types
        })
}

/// Case-insensitive name search plus an optional exact type filter.
struct DependencyFilter<'a> {
    needle: String,
    kind: Option<&'a str>,
}

impl<'a> DependencyFilter<'a> {
    fn new(search: &str, kind: Option<&'a str>) -> Self {
        Self {
            needle: search.to_lowercase(),
            kind,
        }
    }

    fn matches(&self, name: &str, kind: &str) -> bool {
        name.to_lowercase().contains(&self.needle) && self.kind.map_or(true, |k| kind == k)
    }
}

pub fn filter_dependencies<'a>(
    deps: &'a [Dependency],
    search: &str,
    kind: Option<&str>,
) -> Vec<&'a Dependency> {
    let filter = DependencyFilter::new(search, kind);
    deps.iter()
        .filter(|dep| filter.matches(&dep.name, &dep.kind))
        .collect()
}

/// Same filter as [`filter_dependencies`], over cross-project aggregates.
pub fn filter_aggregated<'a>(
    deps: &'a [AggregatedDependency],
    search: &str,
    kind: Option<&str>,
) -> Vec<&'a AggregatedDependency> {
    let filter = DependencyFilter::new(search, kind);
    deps.iter()
        .filter(|dep| filter.matches(&dep.name, &dep.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::{dependency, project_with_deps};

    #[test]
    fn test_aggregate_accumulates_across_projects() {
        let projects = vec![
            project_with_deps(
                "Web",
                vec![
                    dependency("react", 142.0, "framework", true, Some("18.2.0")),
                    dependency("lodash", 528.0, "utility", false, Some("4.17.21")),
                ],
            ),
            project_with_deps(
                "Admin",
                vec![dependency("react", 150.0, "lib", false, Some("17.0.0"))],
            ),
        ];

        let deps = aggregate_dependencies(&projects);
        assert_eq!(deps.len(), 2);

        let react = &deps[0];
        assert_eq!(react.name, "react");
        assert!((react.total_size_kb - 292.0).abs() < f64::EPSILON);
        assert_eq!(react.projects, ["Web", "Admin"]);
        assert_eq!(react.usage_count, 2);
        assert!(react.duplicated);

        // Base record comes from the first declaration
        assert_eq!(react.kind, "framework");
        assert!(react.treeshakable);
        assert_eq!(react.version.as_deref(), Some("18.2.0"));
        assert!((react.size_kb - 142.0).abs() < f64::EPSILON);

        let lodash = &deps[1];
        assert_eq!(lodash.usage_count, 1);
        assert!(!lodash.duplicated);
    }

    #[test]
    fn test_aggregate_skips_projects_without_lists() {
        let mut bare = project_with_deps("Bare", vec![]);
        bare.dependency_list = None;

        assert!(aggregate_dependencies(&[bare]).is_empty());
    }

    #[test]
    fn test_risk_levels() {
        let policy = Policy::default();

        let low = dependency("a", 100.0, "x", true, None);
        let medium_size = dependency("b", 301.0, "x", true, None);
        let medium_shake = dependency("c", 100.0, "x", false, None);
        let high = dependency("d", 528.0, "x", false, None);
        let boundary = dependency("e", 300.0, "x", true, None);

        assert_eq!(risk_level(&low, &policy), RiskLevel::Low);
        assert_eq!(risk_level(&medium_size, &policy), RiskLevel::Medium);
        assert_eq!(risk_level(&medium_shake, &policy), RiskLevel::Medium);
        assert_eq!(risk_level(&high, &policy), RiskLevel::High);
        assert_eq!(risk_level(&boundary, &policy), RiskLevel::Low);
    }

    #[test]
    fn test_outdated_heuristic() {
        let policy = Policy::default();

        let old = dependency("a", 1.0, "x", true, Some("1.9.3"));
        let current = dependency("b", 1.0, "x", true, Some("2.0.0"));
        let unversioned = dependency("c", 1.0, "x", true, None);
        let garbage = dependency("d", 1.0, "x", true, Some("latest"));

        assert!(is_potentially_outdated(&old, &policy));
        assert!(!is_potentially_outdated(&current, &policy));
        assert!(is_potentially_outdated(&unversioned, &policy));
        assert!(is_potentially_outdated(&garbage, &policy));
    }

    #[test]
    fn test_outdated_follows_policy_floor() {
        let policy = Policy {
            outdated_major_below: 5,
            ..Policy::default()
        };
        let dep = dependency("lodash", 1.0, "x", true, Some("4.17.21"));

        assert!(is_potentially_outdated(&dep, &policy));
    }

    #[test]
    fn test_major_version_parsing() {
        assert_eq!(major_version("18.2.0"), Some(18));
        assert_eq!(major_version("v3.1"), Some(3));
        assert_eq!(major_version("7"), Some(7));
        assert_eq!(major_version(""), None);
        assert_eq!(major_version("next"), None);
        assert_eq!(major_version("v"), None);
    }

    #[test]
    fn test_major_version_ignores_prerelease_suffix() {
        assert_eq!(major_version("3-beta.1"), Some(3));
        assert_eq!(major_version("2rc"), Some(2));
        assert_eq!(major_version("18.0.0-rc.1"), Some(18));
        assert_eq!(major_version("1-alpha"), Some(1));
    }

    #[test]
    fn test_prerelease_outdated_by_major_only() {
        let policy = Policy::default();

        let beta = dependency("a", 1.0, "x", true, Some("3-beta.1"));
        let rc = dependency("b", 1.0, "x", true, Some("2rc"));
        let alpha = dependency("c", 1.0, "x", true, Some("1-alpha.2"));

        assert!(!is_potentially_outdated(&beta, &policy));
        assert!(!is_potentially_outdated(&rc, &policy));
        assert!(is_potentially_outdated(&alpha, &policy));
    }

    #[test]
    fn test_size_classes() {
        let policy = Policy::default();
        assert_eq!(size_class(892.0, &policy), SizeClass::Large);
        assert_eq!(size_class(500.0, &policy), SizeClass::Medium);
        assert_eq!(size_class(234.0, &policy), SizeClass::Medium);
        assert_eq!(size_class(200.0, &policy), SizeClass::Small);
    }

    #[test]
    fn test_risk_summary_counts() {
        let deps = vec![
            dependency("react", 142.0, "framework", true, Some("18.2.0")),
            dependency("lodash", 528.0, "utility", false, Some("4.17.21")),
            dependency("moment", 329.0, "date", false, Some("2.29.4")),
            dependency("tiny", 10.0, "utility", true, None),
        ];

        let summary = risk_summary(&deps, &Policy::default());
        assert_eq!(
            summary,
            RiskSummary {
                outdated: 1,
                non_treeshakable: 2,
                large: 2,
                total_risk: 5,
            }
        );
    }

    #[test]
    fn test_assess_fills_default_version() {
        let deps = vec![dependency("tiny", 10.0, "utility", true, None)];
        let assessed = assess_dependencies(&deps, &Policy::default());

        assert_eq!(assessed[0].version, "1.0.0");
        assert!(assessed[0].potentially_outdated);
        assert_eq!(assessed[0].risk, RiskLevel::Low);
        assert_eq!(assessed[0].size_class, SizeClass::Small);
    }

    #[test]
    fn test_bundle_composition_by_type() {
        let deps = vec![
            dependency("lodash", 528.0, "utility", false, None),
            dependency("react", 142.0, "framework", true, None),
            dependency("ramda", 100.0, "utility", true, None),
        ];

        let composition = bundle_composition(&deps);
        assert_eq!(composition.len(), 2);
        assert_eq!(composition[0].kind, "utility");
        assert!((composition[0].size_kb - 628.0).abs() < f64::EPSILON);
        assert_eq!(composition[0].count, 2);
        assert_eq!(composition[0].treeshakable, 1);
        assert_eq!(composition[1].kind, "framework");
    }

    #[test]
    fn test_dependency_types_are_distinct_and_ordered() {
        let deps = vec![
            dependency("a", 1.0, "ui", true, None),
            dependency("b", 1.0, "date", true, None),
            dependency("c", 1.0, "ui", true, None),
        ];

        assert_eq!(dependency_types(&deps), ["ui", "date"]);
    }

    #[test]
    fn test_filter_by_search_and_type() {
        let deps = vec![
            dependency("React", 1.0, "framework", true, None),
            dependency("react-dom", 1.0, "framework", true, None),
            dependency("recharts", 1.0, "visualization", true, None),
        ];

        let names = |found: Vec<&Dependency>| -> Vec<String> {
            found.into_iter().map(|d| d.name.clone()).collect()
        };

        assert_eq!(names(filter_dependencies(&deps, "REACT", None)), ["React", "react-dom"]);
        assert_eq!(names(filter_dependencies(&deps, "re", Some("visualization"))), ["recharts"]);
        assert_eq!(filter_dependencies(&deps, "", None).len(), 3);
        assert!(filter_dependencies(&deps, "vue", None).is_empty());
    }

    #[test]
    fn test_filter_aggregated_matches_dependency_filter() {
        let projects = vec![
            project_with_deps(
                "Web",
                vec![
                    dependency("React", 142.0, "framework", true, None),
                    dependency("recharts", 400.0, "visualization", true, None),
                ],
            ),
            project_with_deps(
                "Admin",
                vec![dependency("react-dom", 120.0, "framework", true, None)],
            ),
        ];
        let aggregated = aggregate_dependencies(&projects);

        let names = |found: Vec<&AggregatedDependency>| -> Vec<String> {
            found.into_iter().map(|d| d.name.clone()).collect()
        };

        assert_eq!(names(filter_aggregated(&aggregated, "react", None)), ["React", "react-dom"]);
        assert_eq!(
            names(filter_aggregated(&aggregated, "RE", Some("visualization"))),
            ["recharts"]
        );
        assert_eq!(filter_aggregated(&aggregated, "", None).len(), 3);
        assert!(filter_aggregated(&aggregated, "react", Some("ui")).is_empty());
    }

    #[test]
    fn test_dependency_types_across_projects() {
        let projects = vec![
            project_with_deps("Web", vec![dependency("a", 1.0, "ui", true, None)]),
            project_with_deps(
                "Admin",
                vec![
                    dependency("b", 1.0, "date", true, None),
                    dependency("c", 1.0, "ui", true, None),
                ],
            ),
        ];

        let types = dependency_types(projects.iter().flat_map(Project::dependency_list));
        assert_eq!(types, ["ui", "date"]);
    }
}
