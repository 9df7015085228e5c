use chrono::{Datelike, Days, NaiveDate, Weekday};
use stagioni_core::{PricePoint, YearWindow};

/// Starting level for the synthetic curve of a known symbol.
pub fn base_price(symbol: &str) -> Option<f64> {
    match symbol {
        "TSLA" => Some(200.0),
        "AAPL" => Some(150.0),
        "MSFT" => Some(300.0),
        "GOOG" => Some(110.0),
        _ => None,
    }
}

/// Deterministic close: a yearly drift plus a seasonal wave.
pub fn synthetic_close(base: f64, date: NaiveDate) -> f64 {
    let drift = f64::from(date.year() - 2000) * 2.5;
    let phase = f64::from(date.ordinal0()) / 365.0 * std::f64::consts::TAU;
    (base + drift) * 0.1f64.mul_add(phase.sin(), 1.0)
}

/// One synthetic close per weekday inside `window`.
pub fn weekdays(base: f64, window: &YearWindow) -> Vec<PricePoint> {
    let mut out = Vec::new();
    let mut day = window.start();
    while day <= window.end() {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            out.push(PricePoint::new(day, synthetic_close(base, day)));
        }
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    out
}
