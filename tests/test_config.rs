use std::time::Duration;

use line_shooter::config::{GameConfig, MAX_CANVAS_WIDTH};
use line_shooter::GameError;

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("line_shooter")
        .chain(list.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn defaults() {
    let c = GameConfig::default();
    assert_eq!(c.canvas_width, 80);
    assert_eq!(c.capacity, 50);
    assert_eq!(c.initial_objects, 5);
    assert_eq!(c.target_range, 75);
    assert_eq!(c.blink_frames, 30);
    assert_eq!(c.enemy_hp, 1);
    assert_eq!(c.frame_interval, Duration::from_millis(100));
    assert!(c.reclaim_dead_enemies);
    assert_eq!(c.seed, None);
}

#[test]
fn no_args_means_defaults() {
    assert_eq!(GameConfig::from_args(args(&[])).unwrap(), GameConfig::default());
}

#[test]
fn parses_every_flag() {
    let c = GameConfig::from_args(args(&["--seed", "42", "--width", "40", "--faithful-leak"]))
        .unwrap();
    assert_eq!(c.seed, Some(42));
    assert_eq!(c.canvas_width, 40);
    assert!(!c.reclaim_dead_enemies);
}

#[test]
fn rejects_bad_values() {
    assert!(GameConfig::from_args(args(&["--seed"])).is_err());
    assert!(GameConfig::from_args(args(&["--seed", "abc"])).is_err());
    assert!(GameConfig::from_args(args(&["--width", "0"])).is_err());
    assert!(GameConfig::from_args(args(&["--width", "-3"])).is_err());
    assert!(GameConfig::from_args(args(&["--level", "hard"])).is_err());
    assert!(GameConfig::from_args(args(&["--width", "65536"])).is_err());
    assert!(GameConfig::from_args(args(&["--width", "4294967296"])).is_err());
}

#[test]
fn width_cap_is_inclusive() {
    let c = GameConfig::from_args(args(&["--width", "65535"])).unwrap();
    assert_eq!(c.canvas_width, MAX_CANVAS_WIDTH);
}

#[test]
fn validate_flags_each_zero_field() {
    let zero_width = GameConfig {
        canvas_width: 0,
        ..GameConfig::default()
    };
    let zero_range = GameConfig {
        target_range: 0,
        ..GameConfig::default()
    };
    assert!(matches!(
        zero_width.validate(),
        Err(GameError::InvalidConfig { field: "canvas_width", .. })
    ));
    assert!(matches!(
        zero_range.validate(),
        Err(GameError::InvalidConfig { field: "target_range", .. })
    ));
    assert_eq!(GameConfig::default().validate(), Ok(()));
}
