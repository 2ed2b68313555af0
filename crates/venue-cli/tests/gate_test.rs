use predicates::prelude::*;
use venue_testing::TestFixture;

#[test]
fn test_data_commands_locked_until_unlock() {
    let fixture = TestFixture::new();
    fixture
        .install_sample_program()
        .expect("Failed to install program");

    fixture
        .command()
        .arg("days")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Locked"))
        .stderr(predicate::str::contains("venue unlock"));

    fixture.unlock().expect("Failed to unlock");

    fixture.command().arg("days").assert().success();
}

#[test]
fn test_wrong_code_rejected() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["unlock", "WRONG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid access code"));
}

#[test]
fn test_unlock_persists_across_invocations() {
    let fixture = TestFixture::new();
    fixture.setup().expect("Failed to set up fixture");

    // A fresh process against the same data dir stays unlocked
    fixture.command().arg("days").assert().success();
}

#[test]
fn test_lock_forgets_access() {
    let fixture = TestFixture::new();
    fixture.setup().expect("Failed to set up fixture");

    fixture.command().arg("lock").assert().success();

    fixture
        .command()
        .arg("days")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Locked"));
}

#[test]
fn test_custom_access_code_from_init() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("init")
        .arg("--program")
        .arg(fixture.samples().program_path())
        .args(["--access-code", "OPENSESAME"])
        .assert()
        .success();

    fixture
        .command()
        .args(["unlock", "CCOI2026"])
        .assert()
        .failure();

    fixture
        .command()
        .args(["unlock", "OPENSESAME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Access granted"));
}
