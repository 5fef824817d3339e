use chrono::{Duration, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

const TWO_YEARS_IN_SECONDS: i64 = 60 * 60 * 24 * 365 * 2;

/// Uniform integer in the inclusive range [min, max].
pub fn random_int(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

/// Uniform float in [min, max) truncated to `precision` decimal digits.
///
/// Truncation rather than rounding: rounding a draw just below `max` up to
/// `max` would leak the excluded upper bound out of the half-open range.
pub fn random_float(min: f64, max: f64, precision: u32) -> f64 {
    let value = rand::thread_rng().gen_range(min..max);
    let factor = 10f64.powi(precision as i32);
    (value * factor).floor() / factor
}

/// Fair coin flip.
pub fn random_bool() -> bool {
    rand::thread_rng().gen_bool(0.5)
}

/// Uniform pick from a slice.
///
/// # Panics
///
/// Panics if `items` is empty; callers must guarantee a non-empty slice.
pub fn random_item<T>(items: &[T]) -> &T {
    let index = rand::thread_rng().gen_range(0..items.len());
    &items[index]
}

/// Random subset of `items`: a uniform length in [min, min(max, len)], then
/// that many distinct elements in shuffled order.
pub fn random_subset<T: Clone>(items: &[T], min: usize, max: usize) -> Vec<T> {
    let mut rng = rand::thread_rng();
    let upper = max.min(items.len());
    let length = rng.gen_range(min.min(upper)..=upper);
    let mut shuffled: Vec<T> = items.to_vec();
    shuffled.shuffle(&mut rng);
    shuffled.truncate(length);
    shuffled
}

/// ISO-8601 timestamp uniformly distributed over the past two years,
/// re-derived from the clock on every call.
pub fn random_date() -> String {
    let offset = random_int(0, TWO_YEARS_IN_SECONDS);
    (Utc::now() - Duration::seconds(offset)).to_rfc3339_opts(SecondsFormat::Millis, true)
}
