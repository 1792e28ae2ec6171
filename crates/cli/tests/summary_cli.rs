use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn make_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}

fn write_dataset(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write dataset");
    path
}

fn run_in(home: &Path, cwd: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tagsight"));
    cmd.args(args)
        .current_dir(cwd)
        .env("HOME", home)
        .env("NO_COLOR", "1");
    cmd.output().expect("run tagsight")
}

#[test]
fn summary_counts_tags_per_file() {
    let home = make_home();
    let data = write_dataset(
        home.path(),
        "a.jsonl",
        "{\"tag\":\"x\"}\n{\"tag\":\"x\"}\n{\"tag\":\"y\"}\n",
    );

    let out = run_in(home.path(), home.path(), &["summary", data.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("a.jsonl"));
    assert!(stdout.contains('x'));
    assert!(stdout.contains("(2)"));
    assert!(stdout.contains("(1)"));
}

#[test]
fn summary_json_reports_the_whole_pipeline() {
    let home = make_home();
    let a = write_dataset(home.path(), "a.jsonl", "{\"tag\":\"x\"}\nnot json\n");
    let b = write_dataset(home.path(), "b.jsonl", "{\"tag\":\"x\"}\n");

    let out = run_in(
        home.path(),
        home.path(),
        &[
            "summary",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--tag",
            "x",
            "--format",
            "json",
        ],
    );
    assert!(out.status.success());
    let json: Value = serde_json::from_slice(&out.stdout).expect("json output");

    assert_eq!(json["filter"]["tag"], "x");
    assert_eq!(json["filter"]["file"], "All");
    assert_eq!(json["log"].as_array().unwrap().len(), 2);
    // One row per file, each with count 1.
    let filtered = json["filtered"].as_array().unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r["count"] == 1));
    // The malformed line is reported, not silently lost.
    let reports = json["reports"].as_array().unwrap();
    assert_eq!(reports[0]["skipped_invalid_json"], 1);
}

#[test]
fn summary_of_tagless_file_reports_no_records() {
    let home = make_home();
    let data = write_dataset(home.path(), "a.jsonl", "{\"text\":\"hi\"}\n");

    let out = run_in(home.path(), home.path(), &["summary", data.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("No tagged records found."));
}

#[test]
fn csv_export_writes_the_standard_artifact() {
    let home = make_home();
    let data = write_dataset(
        home.path(),
        "a.jsonl",
        "{\"tag\":\"x\"}\n{\"tag\":\"x\"}\n{\"tag\":\"y\"}\n",
    );

    let out = run_in(
        home.path(),
        home.path(),
        &["export", "--format", "csv", data.to_str().unwrap()],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let csv = fs::read_to_string(home.path().join("tag_summary_by_file.csv")).unwrap();
    assert_eq!(csv, "File,Tag,Count\na.jsonl,x,2\na.jsonl,y,1\n");
}

#[test]
fn csv_export_is_idempotent() {
    let home = make_home();
    let data = write_dataset(home.path(), "a.jsonl", "{\"tag\":\"x\"}\n");
    let args = ["export", "--format", "csv", data.to_str().unwrap()];

    assert!(run_in(home.path(), home.path(), &args).status.success());
    let first = fs::read(home.path().join("tag_summary_by_file.csv")).unwrap();
    assert!(run_in(home.path(), home.path(), &args).status.success());
    let second = fs::read(home.path().join("tag_summary_by_file.csv")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn chart_export_refuses_an_empty_filtered_summary() {
    let home = make_home();
    let data = write_dataset(home.path(), "a.jsonl", "{\"tag\":\"x\"}\n");

    let out = run_in(
        home.path(),
        home.path(),
        &[
            "export",
            "--format",
            "png",
            data.to_str().unwrap(),
            "--tag",
            "absent",
        ],
    );
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("nothing to export"), "{stderr}");
}

#[test]
fn config_set_then_show_roundtrips() {
    let home = make_home();

    let out = run_in(
        home.path(),
        home.path(),
        &["config", "--user-id", "riley", "--logo", "brand.png"],
    );
    assert!(out.status.success());

    let out = run_in(home.path(), home.path(), &["config"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("user_id = \"riley\""));
    assert!(stdout.contains("logo_path = \"brand.png\""));
}

#[test]
fn non_jsonl_arguments_are_skipped_with_a_warning() {
    let home = make_home();
    let data = write_dataset(home.path(), "a.jsonl", "{\"tag\":\"x\"}\n");
    let stray = write_dataset(home.path(), "b.json", "{\"tag\":\"y\"}\n");

    let out = run_in(
        home.path(),
        home.path(),
        &["summary", data.to_str().unwrap(), stray.to_str().unwrap()],
    );
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("skipping"));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(!stdout.contains("b.json"));
}
