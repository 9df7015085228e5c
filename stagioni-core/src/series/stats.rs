use crate::StagioniError;

/// Arithmetic mean; `None` for an empty input.
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0_f64, 0_u32), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / f64::from(n))
}

/// Replace every value with its percent offset from the slice's own mean.
///
/// `(value - mean) / mean * 100`, so the transformed values average to zero.
///
/// # Errors
/// - `Data` if the input is empty.
/// - `Data` if the mean is zero or not finite.
pub fn percent_deviation(values: &[f64]) -> Result<Vec<f64>, StagioniError> {
    let avg = mean(values.iter().copied())
        .ok_or_else(|| StagioniError::Data("percentage of an empty series".into()))?;
    if avg == 0.0 || !avg.is_finite() {
        return Err(StagioniError::Data(format!(
            "cannot express prices relative to a mean of {avg}"
        )));
    }
    Ok(values.iter().map(|v| (v - avg) / avg * 100.0).collect())
}
