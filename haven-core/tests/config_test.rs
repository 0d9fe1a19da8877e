use haven_core::config::{AggregationConfig, LearnerConfig};

#[test]
fn learner_defaults_match_contract() {
    let cfg = LearnerConfig::default();
    assert_eq!(cfg.feedback_batch_size, 500);
    assert_eq!(cfg.run_interval_secs, 6 * 60 * 60);
}

#[test]
fn aggregation_defaults_match_contract() {
    let cfg = AggregationConfig::default();
    assert_eq!(cfg.tenant_page_size, 500);
    assert_eq!(cfg.review_threshold, 10);
}

#[test]
fn partial_config_fills_defaults() {
    let cfg: LearnerConfig = serde_json::from_str(r#"{"feedback_batch_size": 100}"#).unwrap();
    assert_eq!(cfg.feedback_batch_size, 100);
    assert_eq!(cfg.run_interval_secs, 6 * 60 * 60);
}
