use crate::domain::model::DelayResult;
use chrono::NaiveDate;

/// Computes the delay between the planned and the actual start date.
///
/// `total_days` is the whole-day difference. The year/month/day breakdown
/// uses fixed 365/30 divisors; the decomposition is calendar-naive and must
/// stay that way for parity with the dashboard's historical output.
///
/// Precondition: `actual_start >= planned_start`. The caller validates the
/// ordering; a negative difference produces an unspecified message.
pub fn compute_delay(planned_start: NaiveDate, actual_start: NaiveDate) -> DelayResult {
    let total_days = (actual_start - planned_start).num_days();

    let years = total_days / 365;
    let months = (total_days % 365) / 30;
    let days = total_days % 30;

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(component(years, "year"));
    }
    if months > 0 {
        parts.push(component(months, "month"));
    }
    if days > 0 {
        parts.push(component(days, "day"));
    }

    // A zero-day delay leaves the list empty and the message reads
    // "within ." verbatim.
    let message = format!(
        "Notice of delay letter to be sent within {}.",
        parts.join(", ")
    );

    DelayResult {
        total_days,
        years,
        months,
        days,
        message,
    }
}

fn component(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
