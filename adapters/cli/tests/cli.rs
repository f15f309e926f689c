use std::{fs, path::PathBuf, process::Command};

fn lane_defence(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_lane-defence"))
        .args(args)
        .output()
        .expect("failed to launch lane-defence binary");

    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn demo_wave_is_cleared() {
    let (success, stdout, _) = lane_defence(&[]);
    assert!(success, "demo run should succeed");

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"Starting demo wave..."));
    assert!(lines.contains(
        &"Tick 5: enemies [pos 3.6 (1 hp), pos 1.1 (6 hp)], defeated 1, lost: false"
    ));
    assert!(lines.contains(&"Tick 8: enemies [none], defeated 3, lost: false"));
    assert_eq!(lines.last(), Some(&"Wave cleared!"));
}

#[test]
fn tick_bound_stops_the_demo_early() {
    let (success, stdout, _) = lane_defence(&["--max-ticks", "2"]);
    assert!(success);

    let status: Vec<_> = stdout
        .lines()
        .filter(|line| line.starts_with("Tick "))
        .collect();
    assert_eq!(
        status,
        vec![
            "Tick 1: enemies [pos 1.0 (4 hp)], defeated 0, lost: false",
            "Tick 2: enemies [pos 2.0 (2 hp)], defeated 0, lost: false",
        ]
    );
    assert_eq!(stdout.lines().last(), Some("Tick limit reached."));
}

#[test]
fn scenario_file_drives_the_match() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("unguarded_lane.toml");
    fs::write(
        &path,
        "track_length = 3\n\n[[spawns]]\ntick = -1\nhealth = 1\nspeed = 1.0\n",
    )
    .expect("failed to write scenario file");

    let (success, stdout, _) = lane_defence(&["--scenario", path.to_str().expect("utf-8 path")]);
    assert!(success);

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Starting demo wave...",
            "Tick 1: enemies [pos 1.0 (1 hp)], defeated 0, lost: false",
            "  - Spawned enemy with 1 hp at tick 0.",
            "  - Enemy advanced to 1.0 with 1 hp remaining.",
            "Tick 2: enemies [pos 2.0 (1 hp)], defeated 0, lost: false",
            "  - Enemy advanced to 2.0 with 1 hp remaining.",
            "Tick 3: enemies [pos 3.0 (1 hp)], defeated 0, lost: true",
            "  - Enemy advanced to 3.0 with 1 hp remaining.",
            "Base lost!",
        ]
    );
}

#[test]
fn missing_scenario_file_fails_with_its_path() {
    let (success, stdout, stderr) = lane_defence(&["--scenario", "no/such/wave.toml"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("no/such/wave.toml"), "stderr was: {stderr}");
}
