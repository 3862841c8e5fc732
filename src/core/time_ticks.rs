use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::scale::Ticks;

/// Calendar unit used to step time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    Second,
    #[default]
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeFormat {
    /// Fixed length of one unit in milliseconds, `None` for calendar units.
    #[must_use]
    pub const fn fixed_millis(self) -> Option<f64> {
        match self {
            Self::Second => Some(1_000.0),
            Self::Minute => Some(60_000.0),
            Self::Hour => Some(3_600_000.0),
            Self::Day => Some(86_400_000.0),
            Self::Month | Self::Year => None,
        }
    }
}

const MAX_TIME_TICKS: usize = 512;

/// Ticks every `count` units of `format` inside `[start, end]` (milliseconds),
/// aligned to multiples of the step like UTC calendar boundaries.
#[must_use]
pub fn time_ticks(domain: (f64, f64), format: TimeFormat, count: u32) -> Ticks {
    let mut ticks = Ticks::new();
    let (lo, hi) = if domain.0 <= domain.1 {
        domain
    } else {
        (domain.1, domain.0)
    };
    if !lo.is_finite() || !hi.is_finite() || count == 0 {
        return ticks;
    }

    match format.fixed_millis() {
        Some(unit) => {
            let step = unit * f64::from(count);
            let mut tick = (lo / step).ceil() * step;
            while tick <= hi && ticks.len() < MAX_TIME_TICKS {
                ticks.push(tick);
                tick += step;
            }
        }
        None => calendar_ticks(&mut ticks, lo, hi, format, count),
    }

    if domain.0 > domain.1 {
        ticks.reverse();
    }
    ticks
}

fn calendar_ticks(ticks: &mut Ticks, lo: f64, hi: f64, format: TimeFormat, count: u32) {
    let Some(start) = DateTime::<Utc>::from_timestamp_millis(lo.floor() as i64) else {
        return;
    };
    let months_per_step = match format {
        TimeFormat::Year => count.checked_mul(12),
        _ => Some(count),
    };
    let (Some(months_per_step), Ok(years_per_step)) = (months_per_step, i32::try_from(count))
    else {
        return;
    };

    // First boundary at or before `lo`, aligned so that the month (or year)
    // index is a multiple of `count`.
    let first = match format {
        TimeFormat::Year => {
            let year = start.year() - start.year().rem_euclid(years_per_step);
            Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()
        }
        _ => {
            let month0 = start.month0() - start.month0() % count.min(12);
            Utc.with_ymd_and_hms(start.year(), month0 + 1, 1, 0, 0, 0)
                .single()
        }
    };
    let Some(mut cursor) = first else {
        return;
    };

    while ticks.len() < MAX_TIME_TICKS {
        let millis = cursor.timestamp_millis() as f64;
        if millis > hi {
            break;
        }
        if millis >= lo {
            ticks.push(millis);
        }
        match cursor.checked_add_months(Months::new(months_per_step)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeFormat, time_ticks};

    #[test]
    fn minute_ticks_align_to_step() {
        let ticks = time_ticks((30_000.0, 400_000.0), TimeFormat::Minute, 2);
        assert_eq!(ticks.as_slice(), &[120_000.0, 240_000.0, 360_000.0]);
    }

    #[test]
    fn month_ticks_land_on_first_day_of_month() {
        // 2024-01-15 .. 2024-05-20 UTC
        let ticks = time_ticks(
            (1_705_276_800_000.0, 1_716_163_200_000.0),
            TimeFormat::Month,
            1,
        );
        assert_eq!(
            ticks.as_slice(),
            &[
                1_706_745_600_000.0, // 2024-02-01
                1_709_251_200_000.0, // 2024-03-01
                1_711_929_600_000.0, // 2024-04-01
                1_714_521_600_000.0, // 2024-05-01
            ]
        );
    }

    #[test]
    fn year_step_too_large_for_months_yields_no_ticks() {
        let ticks = time_ticks((0.0, 1.0e12), TimeFormat::Year, 400_000_000);
        assert!(ticks.is_empty());
        assert!(time_ticks((0.0, 1.0e12), TimeFormat::Year, u32::MAX).is_empty());
    }

    #[test]
    fn year_ticks_land_on_new_year() {
        // 1970-06-01 .. 1973-02-01 UTC
        let ticks = time_ticks((13_046_400_000.0, 97_372_800_000.0), TimeFormat::Year, 1);
        assert_eq!(
            ticks.as_slice(),
            &[
                31_536_000_000.0, // 1971-01-01
                63_072_000_000.0, // 1972-01-01
                94_694_400_000.0, // 1973-01-01
            ]
        );
    }

    #[test]
    fn zero_count_yields_no_ticks() {
        assert!(time_ticks((0.0, 1.0e9), TimeFormat::Hour, 0).is_empty());
    }
}
