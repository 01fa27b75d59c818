//! Engine configuration and match results on disk.

use std::fs;

use oxo::{
    Error,
    app::EngineConfig,
    engine::{DEFAULT_THREAT_WEIGHT, Difficulty, EvalConfig, Strategy},
    pipeline::MatchResult,
};
use tempfile::tempdir;

#[test]
fn test_config_round_trips_through_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");

    let config = EngineConfig::default()
        .with_depth_limit(4)
        .with_difficulty(Difficulty::new(2).unwrap())
        .with_strategy(Strategy::Minimax)
        .with_eval(EvalConfig::new(0.5))
        .with_seed(42);
    config.save(&path).unwrap();

    let loaded = EngineConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"strategy\": \"minimax\""), "{raw}");
}

#[test]
fn test_partial_config_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "depth_limit": 3, "strategy": "alpha-beta" }"#).unwrap();

    let loaded = EngineConfig::load(&path).unwrap();
    assert_eq!(loaded.depth_limit, 3);
    assert_eq!(loaded.strategy, Strategy::AlphaBeta);
    assert_eq!(loaded.difficulty, Difficulty::default());
    assert_eq!(loaded.eval, EvalConfig::default());
    assert_eq!(loaded.seed, None);
}

#[test]
fn test_partial_eval_section_uses_default_weight() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("eval.json");
    fs::write(&path, r#"{ "eval": { "scale": 0.5 } }"#).unwrap();

    let loaded = EngineConfig::load(&path).unwrap();
    assert_eq!(loaded.eval.scale, 0.5);
    assert_eq!(loaded.eval.threat_weight, DEFAULT_THREAT_WEIGHT);
    assert_eq!(loaded.depth_limit, EngineConfig::default().depth_limit);
}

#[test]
fn test_out_of_range_difficulty_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "difficulty": 12 }"#).unwrap();

    let err = EngineConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)), "{err:?}");
}

#[test]
fn test_excessive_depth_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deep.json");
    fs::write(&path, r#"{ "depth_limit": 12 }"#).unwrap();

    let err = EngineConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }), "{err:?}");
}

#[test]
fn test_negative_scale_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scale.json");
    fs::write(&path, r#"{ "eval": { "scale": -1.0, "threat_weight": 11.0 } }"#).unwrap();

    assert!(EngineConfig::load(&path).is_err());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = EngineConfig::load(&path).unwrap_err();
    match err {
        Error::Io { operation, .. } => assert!(operation.contains("absent.json")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_match_result_saves_rates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("result.json");

    let result = MatchResult::new(4, 1, 2, 1);
    result.save(&path).unwrap();

    let loaded: MatchResult = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, result);
    assert_eq!(loaded.draw_rate, 0.5);
}
