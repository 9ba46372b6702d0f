use construction_estimator::config::PricingConfig;
use construction_estimator::engine::estimate;
use construction_estimator::export::{export_csv, export_json, EstimateReport};
use construction_estimator::model::{ConstructionInput, HandoverMode, PackageType};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn sample() -> (ConstructionInput, PricingConfig) {
    let input = ConstructionInput {
        package_type: PackageType::Good,
        handover_mode: HandoverMode::BuiltIn,
        include_permits: true,
        ..ConstructionInput::default()
    };
    (input, PricingConfig::default())
}

#[test]
fn json_report_carries_input_and_result() {
    let (input, config) = sample();
    let result = estimate(&input, &config);
    let dir = tempdir().unwrap();
    let path = dir.path().join("estimate.json");

    let report = EstimateReport {
        pricing_version: &config.version,
        input: &input,
        result: &result,
    };
    export_json(&report, &path).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["pricing_version"], "2025.1");
    assert_eq!(written["input"]["package_type"], "good");
    assert_eq!(written["input"]["handover_mode"], "built_in");
    assert_eq!(
        written["result"]["total_investment"].as_f64().unwrap(),
        result.total_investment
    );

    let reloaded: ConstructionInput = serde_json::from_value(written["input"].clone()).unwrap();
    assert_eq!(reloaded, input);
}

#[test]
fn csv_lists_items_costs_and_materials() {
    let (input, config) = sample();
    let result = estimate(&input, &config);
    let dir = tempdir().unwrap();
    let path = dir.path().join("estimate.csv");

    export_csv(&result, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "Section",
            "Item",
            "Description",
            "Input Area",
            "Coefficient",
            "Converted Area",
            "Cost"
        ]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    let sections: Vec<&str> = rows.iter().map(|r| &r[0]).collect();

    assert_eq!(sections.iter().filter(|s| **s == "Core").count(), 3);
    assert_eq!(
        sections.iter().filter(|s| **s == "Extra").count(),
        result.extra_items().count()
    );
    assert!(sections.contains(&"Cost"));
    assert!(sections.contains(&"Material"));
    assert!(rows.iter().any(|r| &r[1] == "Permits"));
}

#[test]
fn export_to_missing_directory_fails() {
    let (input, config) = sample();
    let result = estimate(&input, &config);
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("estimate.csv");

    assert!(export_csv(&result, &path).is_err());
}
