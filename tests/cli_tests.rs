use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_impactcalc"))
        .args(args)
        .output()
        .expect("Failed to run impactcalc")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn json(args: &[&str]) -> serde_json::Value {
    let out = run(args);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_str(&stdout(&out)).expect("stdout was not JSON")
}

#[test]
fn test_calculate_prints_breakdown_and_total() {
    let out = run(&["calculate"]);
    assert!(out.status.success());
    let text = stdout(&out);

    let re = Regex::new(r"Total Annual Economic Cost: (\$[0-9.]+[KMB]?)").unwrap();
    let caps = re.captures(&text).expect("total line missing");
    assert_eq!(&caps[1], "$106.3M");
    assert!(text.contains("Musculoskeletal Disorders"));
    assert!(text.contains("Nurses and Techs"));
}

#[test]
fn test_calculate_json_with_override() {
    let v = json(&["calculate", "--json", "--preset", "2018", "--vsl", "0"]);
    assert_eq!(v["cancer"]["total"]["fatalCost"].as_f64(), Some(0.0));
    assert_eq!(v["workforce"]["physicians"].as_f64(), Some(8538.0));
}

#[test]
fn test_compare_json_reports_growth() {
    let v = json(&["compare", "--json"]);
    assert!(v["percentChange"].as_f64().unwrap() > 0.0);
    assert_eq!(v["formatted"]["percentChange"], "+111.6%");
}

#[test]
fn test_sensitivity_default_is_vsl_sweep() {
    let v = json(&["sensitivity", "--json"]);
    let points = v.as_array().unwrap();
    assert_eq!(points.len(), 7);
    assert_eq!(points[0]["value"].as_f64(), Some(6_300_000.0));
}

#[test]
fn test_sensitivity_custom_param() {
    let v = json(&[
        "sensitivity",
        "--json",
        "--param",
        "nurses",
        "--values",
        "0, 1000,2000",
    ]);
    assert_eq!(v.as_array().unwrap().len(), 3);
}

#[test]
fn test_sensitivity_rejects_unknown_param() {
    let out = run(&["sensitivity", "--param", "bogus", "--values", "1"]);
    assert!(!out.status.success());
}

#[test]
fn test_unknown_preset_fails() {
    let out = run(&["calculate", "--preset", "1990"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown preset"));
}

#[test]
fn test_share_then_query_round_trip() {
    let out = run(&["share", "--preset", "2018", "--nurses", "12345"]);
    assert!(out.status.success());
    let query = stdout(&out).trim().to_string();
    assert!(query.contains("nurses=12345"));

    let v = json(&["calculate", "--json", "--query", &query]);
    assert_eq!(v["workforce"]["support"].as_f64(), Some(12345.0 + 11300.0));
}

#[test]
fn test_chart_json_has_three_series() {
    let v = json(&["chart"]);
    assert_eq!(v["byCategory"]["labels"].as_array().unwrap().len(), 3);
    assert_eq!(v["byGroup"]["colors"][1], "#16a085");
    assert_eq!(v["breakdown"]["data"].as_array().unwrap().len(), 6);
}

#[test]
fn test_config_file_and_cli_override() {
    let dir = TempDir::new().unwrap();
    let presets = dir.path().join("presets.json");
    let scenario = dir.path().join("scenario.json");

    let mut inputs = serde_json::to_value(impactcalc::KnownPreset::Y2025.inputs()).unwrap();
    inputs["nurses"] = serde_json::json!(20000.0);
    let mut f = File::create(&presets).unwrap();
    write!(f, "{}", serde_json::json!({ "future": inputs })).unwrap();

    let mut f = File::create(&scenario).unwrap();
    write!(
        f,
        "{}",
        serde_json::json!({
            "scenario": { "preset": "future", "presetsFile": presets.to_str().unwrap() },
            "overrides": { "technicians": 1000.0 }
        })
    )
    .unwrap();

    let v = json(&[
        "calculate",
        "--json",
        "--config",
        scenario.to_str().unwrap(),
        "--technicians",
        "2000",
    ]);
    assert_eq!(v["workforce"]["support"].as_f64(), Some(22000.0));

    let out = run(&["presets", "--presets-file", presets.to_str().unwrap()]);
    assert!(stdout(&out).contains("future"));
}
