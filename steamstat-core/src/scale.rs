/// Tallest bar in the genre chart, in pixels.
pub const MAX_CHART_HEIGHT: f64 = 285.0;

/// Shortest bar, so tiny genres stay visible.
pub const MIN_BAR_HEIGHT: f64 = 20.0;

/// Above this many hours for the top genre, bars use a log scale.
const LOG_SCALE_THRESHOLD: u64 = 5000;

/// Above this many hours (and up to the log threshold), a square-root scale.
const SQRT_SCALE_THRESHOLD: u64 = 1000;

/// Height in pixels of a genre bar with `hours`, relative to the largest
/// genre's `max_hours`.
///
/// Large totals are compressed so one dominant genre doesn't flatten the
/// rest: logarithmic when `max_hours > 5000`, square root when
/// `max_hours > 1000`, linear otherwise. The result always lies in
/// `[MIN_BAR_HEIGHT, MAX_CHART_HEIGHT]`.
pub fn scale_bar_height(hours: u64, max_hours: u64) -> f64 {
    let max_hours = max_hours.max(1);
    let h = hours as f64;
    let max = max_hours as f64;

    let ratio = if max_hours > LOG_SCALE_THRESHOLD {
        (h + 1.0).ln() / (max + 1.0).ln()
    } else if max_hours > SQRT_SCALE_THRESHOLD {
        h.sqrt() / max.sqrt()
    } else {
        h / max
    };

    (ratio * MAX_CHART_HEIGHT).clamp(MIN_BAR_HEIGHT, MAX_CHART_HEIGHT)
}
