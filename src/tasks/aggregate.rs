use crate::model::TaskInterval;
use chrono::Duration;

/// Exact sum of interval durations. Negative durations never reach this
/// point; they are clamped at extraction.
pub fn total_duration<'a, I>(intervals: I) -> Duration
where
    I: IntoIterator<Item = &'a TaskInterval>,
{
    intervals
        .into_iter()
        .fold(Duration::zero(), |acc, interval| acc + interval.duration())
}

/// `2d 03:07` when the span covers whole days, `03:07` otherwise. The same
/// policy applies to per-task and total displays.
pub fn format_duration(duration: Duration) -> String {
    let days = duration.num_days();
    let hours = duration.num_hours() - days * 24;
    let minutes = duration.num_minutes() - duration.num_hours() * 60;

    if days > 0 {
        format!("{days}d {hours:02}:{minutes:02}")
    } else {
        format!("{hours:02}:{minutes:02}")
    }
}
