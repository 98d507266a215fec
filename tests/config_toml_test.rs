use spatio_kdtree::{Config, KdTree, KdTreeError, SearchOrder};

#[test]
fn test_toml_round_trip() {
    let config = Config::default()
        .with_nearest_order(SearchOrder::LowerFirst)
        .with_depth_warning(128);

    let toml_str = config.to_toml().expect("Failed to serialize config");
    assert!(toml_str.contains("lower_first"));

    let parsed = Config::from_toml(&toml_str).expect("Failed to parse config");
    assert_eq!(parsed, config);

    let tree: KdTree<()> = KdTree::with_config(parsed).unwrap();
    assert_eq!(tree.config().depth_warning, Some(128));
}

#[test]
fn test_toml_defaults_and_errors() {
    let parsed = Config::from_toml("").expect("Empty config should use defaults");
    assert_eq!(parsed, Config::default());

    let err = Config::from_toml("depth_warning = 0").unwrap_err();
    assert!(matches!(err, KdTreeError::InvalidConfig(_)));

    let err = Config::from_toml("unknown_field = true").unwrap_err();
    assert!(matches!(err, KdTreeError::Toml(_)));
}
