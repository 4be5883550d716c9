use canny_core::consts::{
    DEFAULT_BOUNDARY_EDGE_THRESHOLD, DEFAULT_GAUSSIAN_SIGMA, DEFAULT_GAUSSIAN_SIZE,
    DEFAULT_HYSTERESIS_ROUNDS, DEFAULT_MAX_RATE, DEFAULT_MIN_RATE,
};
use canny_core::{BoundaryParams, CannyConfig, CannyError, EdgeParams, KernelConfig, TieBreak};

#[test]
fn test_defaults() {
    let config = CannyConfig::default();
    assert_eq!(config.kernels.gaussian_size, DEFAULT_GAUSSIAN_SIZE);
    assert_eq!(config.kernels.gaussian_sigma, DEFAULT_GAUSSIAN_SIGMA);
    assert_eq!(config.edges.min_rate, DEFAULT_MIN_RATE);
    assert_eq!(config.edges.max_rate, DEFAULT_MAX_RATE);
    assert_eq!(config.edges.rounds, DEFAULT_HYSTERESIS_ROUNDS);
    assert!(config.edges.preserve_size);
    assert!(!config.edges.raw_only);
    assert!(!config.edges.remove_high_val);
    assert_eq!(config.edges.tie_break, TieBreak::Strict);
    assert_eq!(config.boundary.edge_threshold, DEFAULT_BOUNDARY_EDGE_THRESHOLD);
    assert!(config.validate().is_ok());
}

#[test]
fn test_json_roundtrip() {
    let mut config = CannyConfig::default();
    config.edges.tie_break = TieBreak::Leading;
    config.edges.rounds = 4;
    config.boundary.dilation_iterations = 1;

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"Leading\""));
    let back: CannyConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let text = r#"
        [edges]
        max_rate = 0.6
        tie_break = "Leading"

        [boundary]
        erosion_iterations = 1
    "#;
    let config: CannyConfig = toml::from_str(text).unwrap();

    assert_eq!(config.edges.max_rate, 0.6);
    assert_eq!(config.edges.min_rate, DEFAULT_MIN_RATE);
    assert_eq!(config.edges.tie_break, TieBreak::Leading);
    assert!(config.edges.preserve_size);
    assert_eq!(config.boundary.erosion_iterations, 1);
    assert_eq!(config.boundary.dilation_iterations, BoundaryParams::default().dilation_iterations);
    assert_eq!(config.kernels, KernelConfig::default());
}

#[test]
fn test_empty_toml_is_default() {
    let config: CannyConfig = toml::from_str("").unwrap();
    assert_eq!(config, CannyConfig::default());
}

#[test]
fn test_toml_output_parses_back() {
    let text = toml::to_string_pretty(&CannyConfig::default()).unwrap();
    assert!(text.contains("[kernels]"));
    assert!(text.contains("[edges]"));
    assert!(text.contains("[boundary]"));
    let back: CannyConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, CannyConfig::default());
}

#[test]
fn test_validate_reports_each_section() {
    let mut config = CannyConfig::default();
    config.kernels.gaussian_size = 4;
    assert!(matches!(config.validate(), Err(CannyError::InvalidParameter(_))));

    let mut config = CannyConfig::default();
    config.edges = EdgeParams {
        min_rate: 0.9,
        max_rate: 0.1,
        ..EdgeParams::default()
    };
    assert!(matches!(config.validate(), Err(CannyError::InvalidParameter(_))));

    let mut config = CannyConfig::default();
    config.boundary.edge_threshold = 2.0;
    assert!(matches!(config.validate(), Err(CannyError::InvalidParameter(_))));
}

#[test]
fn test_builders_use_config() {
    let mut config = CannyConfig::default();
    config.kernels.gaussian_size = 5;
    config.boundary.erosion_iterations = 3;

    let detector = config.detector().unwrap();
    assert_eq!(detector.kernels().gaussian().dim(), (5, 5));

    let extractor = config.boundary_extractor().unwrap();
    assert_eq!(extractor.params().erosion_iterations, 3);
}
