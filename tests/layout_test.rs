mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn quire() -> Command {
    Command::cargo_bin("quire").unwrap()
}

fn json_of(args: &[&str]) -> serde_json::Value {
    let out = quire().args(args).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn test_cover_line() {
    quire()
        .args(["layout", "cover", "--pages", "300"])
        .assert()
        .success()
        .stdout("Full cover: 12.676in x 9.000in; Spine: 0.676in\n");
}

#[test]
fn test_cover_with_bleed() {
    quire()
        .args([
            "layout", "cover", "--pages", "300", "--trim", "6x9", "--paper", "cream_55lb", "--bleed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("12.926in x 9.250in"));
}

#[test]
fn test_cover_json() {
    let cover = json_of(&["layout", "cover", "--pages", "512", "--paper", "white_50lb", "--json"]);
    assert_eq!(cover["spine_width"], 1.0);
    assert_eq!(cover["width"], 13.0);
    assert_eq!(cover["bleed"], 0.0);
}

#[test]
fn test_compute_text() {
    quire()
        .args(["layout", "compute", "--pages", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trim:"))
        .stdout(predicate::str::contains("6x9"))
        .stdout(predicate::str::contains("0.800in"))
        .stdout(predicate::str::contains("12.676in x 9.000in"));
}

#[test]
fn test_compute_json() {
    let layout = json_of(&["layout", "compute", "--pages", "150", "--trim", "5x8", "--json"]);
    assert_eq!(layout["trim"], "5x8");
    assert_eq!(layout["paper"], "cream_55lb");
    assert_eq!(layout["page_width"], 5.0);
    assert_eq!(layout["gutter_margin"], 0.7);
    assert_eq!(layout["spine_width"], 0.338);
    assert_eq!(layout["full_cover_width"], 10.338);
    assert!(layout.get("millimeters").is_none());
}

#[test]
fn test_compute_millimeters() {
    let layout = json_of(&["layout", "compute", "--pages", "300", "--mm", "--json"]);
    assert_eq!(layout["millimeters"]["page_width_mm"], 152.4);
    assert_eq!(layout["millimeters"]["page_height_mm"], 228.6);
    assert_eq!(layout["millimeters"]["spine_width_mm"], 17.17);

    quire()
        .args(["layout", "compute", "--pages", "300", "--mm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page size (mm):"))
        .stdout(predicate::str::contains("152.400 x 228.600"));
}

#[test]
fn test_compute_explicit_gutter() {
    let layout = json_of(&["layout", "compute", "--pages", "600", "--gutter", "0.5", "--json"]);
    assert_eq!(layout["gutter_margin"], 0.5);
}

#[test]
fn test_compute_from_manuscript() {
    let (_tmp, path) = common::temp_file("draft.txt", &common::prose_manuscript(1048));
    let layout = json_of(&[
        "layout",
        "compute",
        "--manuscript",
        path.to_str().unwrap(),
        "--json",
    ]);
    assert_eq!(layout["page_count"], 3);
    assert_eq!(layout["gutter_margin"], 0.6);
}

#[test]
fn test_compute_requires_page_source() {
    quire().args(["layout", "compute"]).assert().failure();
}

#[test]
fn test_compute_rejects_both_page_sources() {
    let fixture = common::fixture_arg("storm.txt");
    quire()
        .args(["layout", "compute", "--pages", "10", "--manuscript", &fixture])
        .assert()
        .failure();
}

#[test]
fn test_unknown_trim_fails() {
    quire()
        .args(["layout", "compute", "--pages", "300", "--trim", "7x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown trim size '7x10'"))
        .stderr(predicate::str::contains("5.5x8.5"));
}

#[test]
fn test_unknown_paper_falls_back_with_warning() {
    let out = quire()
        .args(["layout", "cover", "--pages", "300", "--paper", "vellum"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Full cover: 12.676in x 9.000in; Spine: 0.676in\n")
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(out).unwrap();
    assert!(stderr.contains("unknown paper stock"), "stderr: {stderr}");
}

#[test]
fn test_quiet_suppresses_warnings() {
    quire()
        .args(["layout", "cover", "--pages", "300", "--paper", "vellum", "--quiet"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_negative_gutter_fails() {
    quire()
        .args(["layout", "compute", "--pages", "300", "--gutter=-0.2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid margin"));
}

#[test]
fn test_presets() {
    quire()
        .args(["layout", "presets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.5x8.5"))
        .stdout(predicate::str::contains("workbook"))
        .stdout(predicate::str::contains("cream_55lb"))
        .stdout(predicate::str::contains("512"));
}

#[test]
fn test_presets_json() {
    let presets = json_of(&["layout", "presets", "--json"]);
    assert_eq!(presets["trims"].as_array().unwrap().len(), 4);
    assert_eq!(presets["papers"][0]["key"], "cream_55lb");
    assert_eq!(presets["papers"][0]["pages_per_inch"], 444.0);
}
