//! End-to-end tests for the `pendulum` binary in headless mode.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get a Command for the pendulum binary, isolated from the caller's
/// environment.
#[allow(deprecated)]
fn pendulum_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pendulum").unwrap();
    for var in [
        "PENDULUM_CONFIG",
        "PENDULUM_ANGLE",
        "PENDULUM_DAMPING",
        "PENDULUM_DT",
        "PENDULUM_TRAIL_LENGTH",
        "PENDULUM_FPS",
        "PENDULUM_FRAMES",
        "PENDULUM_LOG_FILE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// Headless runs
// =============================================================================

mod headless {
    use super::*;

    #[test]
    fn test_rest_start_keeps_readout_at_zero() {
        pendulum_cmd()
            .args(["--headless", "--frames", "120"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("frames=120 elapsed=0.0 "))
            .stdout(predicate::str::contains("settled=1"));
    }

    #[test]
    fn test_swing_reports_elapsed_time() {
        pendulum_cmd()
            .args(["--headless", "--angle", "30", "--frames", "120", "--fps", "60"])
            .assert()
            .success()
            .stdout(predicate::str::contains("elapsed=2.0"))
            .stdout(predicate::str::contains("trail=75"))
            .stdout(predicate::str::contains("settled=no"));
    }

    #[test]
    fn test_heavy_damping_settles() {
        pendulum_cmd()
            .args(["--headless", "--angle", "20", "--damping", "1", "--frames", "2000"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"settled=\d+").unwrap());
    }

    #[test]
    fn test_show_frame_draws_the_pendulum() {
        pendulum_cmd()
            .args(["--headless", "--frames", "3", "--show-frame"])
            .assert()
            .success()
            .stdout(predicate::str::contains("O"))
            .stdout(predicate::str::contains("[running]"));
    }

    #[test]
    fn test_env_var_sets_angle() {
        pendulum_cmd()
            .env("PENDULUM_ANGLE", "45")
            .args(["--headless", "--frames", "1", "--show-frame"])
            .assert()
            .success()
            .stdout(predicate::str::contains("angle 45\u{b0}"));
    }
}

// =============================================================================
// Configuration
// =============================================================================

mod configuration {
    use super::*;

    #[test]
    fn test_config_file_is_applied() {
        let file = config_file("angle = 90.0\nmax_trail_length = 10\n");
        pendulum_cmd()
            .arg("--config")
            .arg(file.path())
            .args(["--headless", "--frames", "50"])
            .assert()
            .success()
            .stdout(predicate::str::contains("trail=10"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = config_file("max_trail_length = 10\n");
        pendulum_cmd()
            .arg("--config")
            .arg(file.path())
            .args(["--headless", "--frames", "50", "--trail-length", "20", "--angle", "90"])
            .assert()
            .success()
            .stdout(predicate::str::contains("trail=20"));
    }

    #[test]
    fn test_unknown_config_key_fails() {
        let file = config_file("colour = \"red\"\n");
        pendulum_cmd()
            .arg("--config")
            .arg(file.path())
            .arg("--headless")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config file"));
    }

    #[test]
    fn test_missing_config_file_fails() {
        pendulum_cmd()
            .args(["--config", "/nonexistent/pendulum.toml", "--headless"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read config file"));
    }

    #[test]
    fn test_out_of_range_damping_fails() {
        pendulum_cmd()
            .args(["--headless", "--damping", "1.5"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("damping must be within 0..=1"));
    }

    #[test]
    fn test_zero_fps_fails() {
        pendulum_cmd()
            .args(["--headless", "--fps", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("fps must be between 1 and 240"));
    }
}

// =============================================================================
// CLI surface
// =============================================================================

mod cli_surface {
    use super::*;

    #[test]
    fn test_help() {
        pendulum_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--headless"))
            .stdout(predicate::str::contains("--damping"));
    }

    #[test]
    fn test_version() {
        pendulum_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("pendulum"));
    }

    #[test]
    fn test_bad_flag_value() {
        pendulum_cmd()
            .args(["--headless", "--frames", "many"])
            .assert()
            .failure();
    }
}
