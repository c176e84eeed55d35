use std::io::Write;

use buildlens::fixture::generate_build_data;
use buildlens::insights::RiskLevel;
use buildlens::metrics::{build_insights, risk_level};
use buildlens::{BuildLensError, Policy};

#[test]
fn test_policy_file_changes_risk_threshold() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "large_dependency_kb = 100.0").unwrap();

    let policy = Policy::from_file(file.path()).unwrap();
    let data = generate_build_data();
    let react = data
        .project("web-app")
        .unwrap()
        .dependency_list()
        .iter()
        .find(|d| d.name == "react")
        .unwrap();

    // react is treeshakable at 142 KB
    assert_eq!(risk_level(react, &Policy::default()), RiskLevel::Low);
    assert_eq!(risk_level(react, &policy), RiskLevel::Medium);
}

#[test]
fn test_policy_file_changes_roi() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[implementation_cost]\nhigh = 69600.0").unwrap();

    let policy = Policy::from_file(file.path()).unwrap();
    let insights = build_insights(&generate_build_data(), &policy).unwrap();

    let vite = insights
        .cost
        .roi
        .iter()
        .find(|r| r.optimization == "Webpack to Vite Migration")
        .unwrap();
    assert!(vite.roi.abs() < 1e-9);
    assert_eq!(vite.payback_months, Some(12));
}

#[test]
fn test_invalid_policy_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "quick_win_limit = -1").unwrap();

    let result = Policy::from_file(file.path());
    assert!(matches!(result, Err(BuildLensError::TomlError(_))));
}

#[test]
fn test_insights_serialize_to_json() {
    let insights = build_insights(&generate_build_data(), &Policy::default()).unwrap();
    let json = serde_json::to_value(&insights).unwrap();

    assert_eq!(json["total_projects"], 4);
    assert_eq!(json["cost"]["savings_by_effort"].as_array().unwrap().len(), 3);
    assert_eq!(json["dependencies"][0]["type"], "framework");
}
