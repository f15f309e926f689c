//! Scenario sources available to the command-line adapter.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use lane_defence_core::{Scenario, SpawnPlan, Tower};

/// Track length of the built-in demo wave.
const DEMO_TRACK_LENGTH: i64 = 12;

/// Built-in wave played when no scenario file is supplied.
pub(crate) fn demo() -> Scenario {
    Scenario {
        track_length: DEMO_TRACK_LENGTH,
        towers: vec![Tower::new(3, 2, 2), Tower::new(7, 3, 3)],
        spawns: vec![
            SpawnPlan::new(0, 4, 1.0),
            SpawnPlan::new(2, 5, 1.2),
            SpawnPlan::new(4, 6, 1.1),
        ],
    }
}

/// Reads a TOML scenario from disk.
pub(crate) fn load(path: &Path) -> Result<Scenario> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    parse(&source).with_context(|| format!("failed to parse scenario {}", path.display()))
}

fn parse(source: &str) -> Result<Scenario, toml::de::Error> {
    toml::from_str(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scenario_is_valid() {
        let scenario = demo();
        assert_eq!(scenario.validate(), Ok(()));
        assert_eq!(scenario.towers.len(), 2);
        assert_eq!(scenario.spawns.len(), 3);
    }

    #[test]
    fn towers_and_spawns_default_to_empty() {
        let scenario = parse("track_length = 5").expect("scenario parses");
        assert_eq!(scenario.track_length, 5);
        assert!(scenario.towers.is_empty());
        assert!(scenario.spawns.is_empty());
    }

    #[test]
    fn missing_track_length_is_rejected() {
        let source = r#"
            [[towers]]
            position = 1
            attack_range = 1
            damage = 1
        "#;
        assert!(parse(source).is_err());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let error = load(Path::new("does/not/exist.toml")).expect_err("file is missing");
        assert!(error.to_string().contains("does/not/exist.toml"));
    }
}
