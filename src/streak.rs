//! Habit streaks and the monthly check-in heatmap.
//!
//! Both computations are pure: they read check-in stamps and return plain
//! values. The `*_at` variants take "today" explicitly; the plain variants
//! use the local calendar date.

use crate::models::HeatmapCell;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use tracing::debug;

pub fn compute_streak<S: AsRef<str>>(check_dates: &[S]) -> u32 {
    compute_streak_at(Local::now().date_naive(), check_dates)
}

/// Consecutive checked days counted backwards from `today`. A missing check
/// today does not break the streak as long as yesterday is checked.
pub fn compute_streak_at<S: AsRef<str>>(today: NaiveDate, check_dates: &[S]) -> u32 {
    let days = unique_days(check_dates);

    let mut streak = 0;
    let mut reference = today;
    for day in days.iter().rev() {
        let gap = (reference - *day).num_days();
        if gap > 1 {
            break;
        }
        // future stamps neither count nor break the run
        if gap >= 0 {
            streak += 1;
            reference = *day;
        }
    }

    streak
}

pub fn build_heatmap<'a, I>(habits: I, year: i32, month: u32) -> Vec<HeatmapCell>
where
    I: IntoIterator<Item = &'a [String]>,
{
    build_heatmap_at(Local::now().date_naive(), habits, year, month)
}

/// One cell per day of the zero-based `month`, ascending. `checks` counts the
/// habits checked that day; `level` buckets it against the busiest day.
pub fn build_heatmap_at<'a, I>(today: NaiveDate, habits: I, year: i32, month: u32) -> Vec<HeatmapCell>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let Some(days) = month_days(year, month) else {
        return Vec::new();
    };

    let mut counts = vec![0u32; days.len()];
    for check_dates in habits {
        for day in unique_days(check_dates) {
            if day.year() == year && day.month0() == month {
                counts[day.day0() as usize] += 1;
            }
        }
    }

    let max_checks = counts.iter().copied().max().unwrap_or(0).max(1);

    days.into_iter()
        .zip(counts)
        .map(|(date, checks)| HeatmapCell {
            date: date_key(date),
            checks,
            level: intensity_level(checks, max_checks),
            is_today: date == today,
        })
        .collect()
}

/// Busiest day's count, never below 1.
pub fn max_checks(cells: &[HeatmapCell]) -> u32 {
    cells.iter().map(|cell| cell.checks).max().unwrap_or(0).max(1)
}

fn intensity_level(checks: u32, max_checks: u32) -> u8 {
    let mut level = 0;
    if checks > 0 {
        level = 1;
    }
    if f64::from(checks) >= f64::from(max_checks) * 0.5 {
        level = 2;
    }
    if checks >= max_checks {
        level = 3;
    }
    level
}

/// Every day of the zero-based `month`, or `None` when the month is out of range.
pub fn month_days(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month.checked_add(1)?, 1)?;
    Some(
        first
            .iter_days()
            .take_while(|date| date.month() == first.month())
            .collect(),
    )
}

/// Reduces a stored stamp to its calendar day. Accepts plain dates, RFC 3339
/// timestamps and naive `YYYY-MM-DDTHH:MM:SS` values.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(&Local).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|stamp| stamp.date())
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn unique_days<S: AsRef<str>>(check_dates: &[S]) -> BTreeSet<NaiveDate> {
    check_dates
        .iter()
        .filter_map(|raw| {
            let parsed = parse_day(raw.as_ref());
            if parsed.is_none() {
                debug!("skipping malformed check date {:?}", raw.as_ref());
            }
            parsed
        })
        .collect()
}
