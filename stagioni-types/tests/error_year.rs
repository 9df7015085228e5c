use stagioni_types::StagioniError;

#[test]
fn for_year_wraps_once() {
    let e = StagioniError::connector("stagioni-yfinance", "status 500")
        .for_year(2021)
        .for_year(1999);
    assert_eq!(e.year(), Some(2021));
    assert!(matches!(
        e.into_root(),
        StagioniError::Connector { ref connector, .. } if connector == "stagioni-yfinance"
    ));
}

#[test]
fn empty_series_reports_its_year() {
    let e = StagioniError::EmptySeries { year: 2019 };
    assert_eq!(e.year(), Some(2019));
    assert_eq!(e.to_string(), "no price rows returned for 2019");
}

#[test]
fn year_failed_survives_serde() {
    let e = StagioniError::not_found("history for TSLA").for_year(2020);
    let json = serde_json::to_string(&e).expect("serialize error");
    let de: StagioniError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(de, e);
}
