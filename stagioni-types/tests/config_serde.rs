use stagioni_types::{FetchPolicy, LeapDayPolicy, SeasonConfig, ValueMode};

#[test]
fn season_config_roundtrip() {
    let cfg = SeasonConfig {
        years: 5,
        mode: ValueMode::Percentage,
        fetch_policy: FetchPolicy::SkipYear,
        leap_day: LeapDayPolicy::ClampToFeb28,
    };

    let json = serde_json::to_string(&cfg).expect("serialize season config");
    let de: SeasonConfig = serde_json::from_str(&json).expect("deserialize season config");

    assert_eq!(de, cfg);
}

#[test]
fn season_config_defaults_match_cli_defaults() {
    let cfg = SeasonConfig::default();
    assert_eq!(cfg.years, 2);
    assert_eq!(cfg.mode, ValueMode::Absolute);
    assert_eq!(cfg.fetch_policy, FetchPolicy::Abort);
    assert_eq!(cfg.leap_day, LeapDayPolicy::Drop);
}

#[test]
fn plot_title_follows_mode() {
    assert_eq!(ValueMode::from_percentage_flag(false).plot_title(), "Adjusted Close Price");
    assert_eq!(
        ValueMode::from_percentage_flag(true).plot_title(),
        "Percentage Gain/Loss from annual average price"
    );
}
