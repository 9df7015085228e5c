use crate::calendar::YearSlot;
use crate::series::remap::remap_series;
use crate::series::stats::percent_deviation;
use crate::series::{NormalizedSeries, PricePoint, PriceSeries};
use crate::{LeapDayPolicy, StagioniError, ValueMode};

/// Turn one fetched year into a plottable series.
///
/// - `Percentage` replaces values with their deviation from this year's own mean
///   (for the current year that mean covers elapsed trading days only).
/// - Past years are remapped onto `current_year`; the current year keeps its dates.
///
/// # Errors
/// - `EmptySeries` if `series` has no rows.
/// - `Data` if the percentage transform has no usable mean.
pub fn normalize_year(
    slot: YearSlot,
    series: PriceSeries,
    current_year: i32,
    mode: ValueMode,
    leap_day: LeapDayPolicy,
) -> Result<NormalizedSeries, StagioniError> {
    if series.is_empty() {
        return Err(StagioniError::EmptySeries { year: slot.year });
    }

    let mut points = series.into_points();
    if mode == ValueMode::Percentage {
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let deviations = percent_deviation(&values)?;
        for (p, v) in points.iter_mut().zip(deviations) {
            p.value = v;
        }
    }

    let points: Vec<PricePoint> = if slot.is_current() {
        points
    } else {
        remap_series(&points, current_year, leap_day)
    };

    Ok(NormalizedSeries {
        year: slot.year,
        label: slot.year.to_string(),
        points,
    })
}
