use predicates::prelude::*;
use venue_testing::assertions::parse_json_stdout;
use venue_testing::TestFixture;

#[test]
fn test_export_agenda_csv() {
    let fixture = TestFixture::new();
    fixture.setup().expect("Failed to set up fixture");

    let output = fixture
        .command()
        .args(["export", "agenda"])
        .output()
        .expect("Failed to export");
    assert!(output.status.success());

    let csv = String::from_utf8_lossy(&output.stdout);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("day,date,theme,time,block,title,location,speakers")
    );
    // One row per session across both days
    assert_eq!(lines.count(), 4);
    assert!(csv.contains("Opening Keynote"));
    assert!(csv.contains("innovation_day"));
}

#[test]
fn test_export_speakers_json() {
    let fixture = TestFixture::new();
    fixture.setup().expect("Failed to set up fixture");

    let output = fixture
        .command()
        .args(["export", "speakers", "--as", "json"])
        .output()
        .expect("Failed to export");
    assert!(output.status.success());

    let rows = parse_json_stdout(&output.stdout);
    let rows = rows.as_array().expect("Expected row array");
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().any(|r| r["slug"] == "jane-doe" && r["sessions"] == 2));
}

#[test]
fn test_export_to_file() {
    let fixture = TestFixture::new();
    fixture.setup().expect("Failed to set up fixture");

    let out = fixture.data_dir().join("agenda.csv");
    fixture
        .command()
        .args(["export", "agenda", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));

    let written = std::fs::read_to_string(&out).expect("Export file should exist");
    assert!(written.starts_with("day,date,theme,time,block,title,location,speakers"));
}
