// tests/integration/end_to_end.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{LeadFixture, march_leads};

fn leadlens() -> Command {
    Command::cargo_bin("leadlens").expect("binary builds")
}

#[test]
fn custom_range_keeps_both_boundary_instants() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &march_leads());

    leadlens()
        .arg(&input)
        .args(["--since", "2024-03-15T00:00:00Z", "--until", "2024-03-15T23:59:59.999Z"])
        .args(["--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"1\""))
        .stdout(predicate::str::contains("\"2\""))
        .stdout(predicate::str::contains("\"3\""))
        .stdout(predicate::str::contains("\"4\"").not())
        .stdout(predicate::str::contains("\"5\"").not());
}

#[test]
fn leads_without_timestamps_pass_an_active_range_filter() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &march_leads());

    leadlens()
        .arg(&input)
        .args(["--since", "2024-03-15T00:00:00Z", "--until", "2024-03-15T23:59:59.999Z"])
        .args(["--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No date"));
}

#[test]
fn period_day_keeps_the_reference_instant_and_drops_far_leads() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl(
        "leads.jsonl",
        &[
            r#"{"id":"ref","created_at":"2024-03-15T12:00:00Z"}"#,
            r#"{"id":"far-past","created_at":"2024-03-01T12:00:00Z"}"#,
            r#"{"id":"far-future","created_at":"2024-03-29T12:00:00Z"}"#,
        ],
    );

    // Whatever local zone the test machine runs in, the reference belongs to
    // its own day and instants two weeks away never do.
    leadlens()
        .arg(&input)
        .args(["--period", "day", "--on", "2024-03-15T12:00:00Z"])
        .args(["--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ref\""))
        .stdout(predicate::str::contains("far-past").not())
        .stdout(predicate::str::contains("far-future").not());
}

#[test]
fn malformed_timestamp_is_flagged_not_dropped_silently() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl(
        "leads.jsonl",
        &[
            r#"{"id":"1","created_at":"2024-03-15T13:00:00Z"}"#,
            r#"{"id":"99","created_at":"not-a-date"}"#,
        ],
    );

    leadlens()
        .arg(&input)
        .args(["--since", "2024-03-15T00:00:00Z", "--until", "2024-03-15T23:59:59.999Z"])
        .args(["--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"1\""))
        .stdout(predicate::str::contains("\"99\"").not())
        .stderr(predicate::str::contains("warning: lead 99"))
        .stderr(predicate::str::contains("Malformed timestamp 'not-a-date'"));
}

#[test]
fn strict_mode_fails_on_rejected_records() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &[r#"{"id":"99","created_at":"garbage"}"#]);

    leadlens()
        .arg(&input)
        .args(["--since", "2024-03-15T00:00:00Z", "--until", "2024-03-15T23:59:59.999Z"])
        .args(["--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("warning: lead 99"));
}

#[test]
fn source_filter_composes_with_the_date_filter() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &march_leads());

    leadlens()
        .arg(&input)
        .args(["--since", "2024-03-15T00:00:00Z", "--until", "2024-03-15T23:59:59.999Z"])
        .args(["--source", "web,webform"])
        .args(["--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"1\""))
        .stdout(predicate::str::contains("\"3\""))
        .stdout(predicate::str::contains("\"2\"").not());
}

#[test]
fn reads_leads_from_stdin_when_no_inputs_given() {
    leadlens()
        .args(["--format", "jsonl"])
        .write_stdin(r#"{"id":"1","title":"Piped"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Piped"));
}

#[test]
fn malformed_jsonl_row_fails_with_its_line_number() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &[r#"{"id":"1"}"#, "not json"]);

    leadlens()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(":2"));
}

#[test]
fn inverted_custom_range_is_a_usage_error() {
    let fixture = LeadFixture::new();
    let input = fixture.write_jsonl("leads.jsonl", &march_leads());

    leadlens()
        .arg(&input)
        .args(["--since", "2024-04-01T00:00:00Z", "--until", "2024-03-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid interval"));
}
