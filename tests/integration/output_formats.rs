// tests/integration/output_formats.rs
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{LeadFixture, march_leads};

fn leadlens() -> Command {
    Command::cargo_bin("leadlens").expect("binary builds")
}

#[test]
fn json_output_is_a_parseable_array() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &march_leads());

    let assert = leadlens().arg(&input).args(["--format", "json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("UTF-8 output");

    let parsed: Value = serde_json::from_str(&stdout).expect("valid JSON");
    let rows = parsed.as_array().expect("array of leads");
    assert_eq!(rows.len(), march_leads().len());
    assert_eq!(rows[0]["id"], "1");
    assert_eq!(rows[0]["source"], "WEB");
}

#[test]
fn jsonl_output_has_one_object_per_line() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &march_leads());

    let assert = leadlens().arg(&input).args(["--format", "jsonl"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("UTF-8 output");

    assert_eq!(stdout.lines().count(), march_leads().len());
    for line in stdout.lines() {
        serde_json::from_str::<Value>(line).expect("each line is JSON");
    }
}

#[test]
fn csv_output_starts_with_the_header() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &march_leads());

    leadlens()
        .arg(&input)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,title,source,created_at\n"))
        .stdout(predicate::str::contains("2,Pricing call,CALL,2024-03-15T13:00:00Z"));
}

#[test]
fn table_output_shows_friendly_source_names() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &march_leads());

    leadlens()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Website"))
        .stdout(predicate::str::contains("CRM Form"))
        .stdout(predicate::str::contains("6 leads (0 filtered out)"));
}

#[test]
fn by_source_summary_counts_leads() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &march_leads());

    leadlens()
        .arg(&input)
        .arg("--by-source")
        .assert()
        .success()
        .stdout(predicate::str::contains("SOURCE"))
        .stdout(predicate::str::contains("Website"))
        .stdout(predicate::str::contains("TOTAL"));
}
