//! Area-rotation scheduling.
//!
//! Pure calendar functions deciding which area is worked on a given day.
//! Every function takes an explicit reference date; nothing in this module
//! reads the wall clock, so behavior is fully deterministic under test.
//!
//! Two independent rotations coexist here, on purpose:
//!
//! - [`area_for_date`] counts **working days** (weekends excluded) since
//!   [`ROTATION_EPOCH`] and cycles `45 → 14 → 12`.
//! - [`day_plan`] counts **raw calendar days** (weekends included) since
//!   [`PLAN_EPOCH`] and cycles `12 → 14 → 45`, pairing each day with the
//!   area to prepare for the following day.
//!
//! The two disagree on most dates. That divergence is inherited from the
//! dashboard this backend models and is preserved rather than reconciled;
//! callers pick the rotation that matches their screen.
//!
//! Dates before either epoch are handled with a Euclidean remainder, so
//! both cycles extend backwards consistently.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::Area;

/// Epoch of the working-day rotation: Monday 2024-01-08 delivers Zone 45.
pub const ROTATION_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 8) {
    Some(d) => d,
    None => unreachable!(),
};

/// Epoch of the calendar-day plan rotation: 2024-01-01 delivers Zone 12.
pub const PLAN_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(d) => d,
    None => unreachable!(),
};

/// Working-day rotation order.
const DELIVERY_ROTATION: [Area; 3] = [Area::Zone45, Area::Zone14, Area::Zone12];

/// Calendar-day plan rotation order.
const PLAN_ROTATION: [Area; 3] = [Area::Zone12, Area::Zone14, Area::Zone45];

/// The day's delivery assignment and the area to prepare for tomorrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub delivery_area: Area,
    pub preparation_area: Area,
}

/// True for the five delivery days; false for the Friday/Saturday weekend.
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

/// Signed count of working days in the half-open interval `[from, to)`.
///
/// Antisymmetric: `working_days_between(a, b) == -working_days_between(b, a)`.
pub fn working_days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    if to < from {
        return -working_days_between(to, from);
    }

    let total_days = to.signed_duration_since(from).num_days();
    let full_weeks = total_days / 7;
    let mut count = full_weeks * 5;

    // At most six remainder days left to scan.
    let mut day = from + Duration::weeks(full_weeks);
    while day < to {
        if is_working_day(day) {
            count += 1;
        }
        day += Duration::days(1);
    }
    count
}

/// Area delivered on `date` under the working-day rotation.
///
/// Weekend days do not advance the cycle. Pre-epoch dates reduce through
/// `rem_euclid`, so the rotation is defined for every calendar date.
pub fn area_for_date(date: NaiveDate) -> Area {
    let elapsed = working_days_between(ROTATION_EPOCH, date);
    DELIVERY_ROTATION[elapsed.rem_euclid(3) as usize]
}

/// Delivery/preparation pairing for `date` under the calendar-day rotation.
///
/// Counts every calendar day since [`PLAN_EPOCH`], weekends included; the
/// preparation area is simply the next area in the cycle.
pub fn day_plan(date: NaiveDate) -> DayPlan {
    let elapsed = date.signed_duration_since(PLAN_EPOCH).num_days();
    let idx = elapsed.rem_euclid(3) as usize;
    DayPlan {
        delivery_area: PLAN_ROTATION[idx],
        preparation_area: PLAN_ROTATION[(idx + 1) % 3],
    }
}

/// Plan for the given reference date.
pub fn today_plan(reference_date: NaiveDate) -> DayPlan {
    day_plan(reference_date)
}

/// Plan for the day after the given reference date.
pub fn tomorrow_plan(reference_date: NaiveDate) -> DayPlan {
    day_plan(reference_date + Duration::days(1))
}

/// Fixed successor within the `45 → 14 → 12` cycle.
pub fn next_area(area: Area) -> Area {
    match area {
        Area::Zone45 => Area::Zone14,
        Area::Zone14 => Area::Zone12,
        Area::Zone12 => Area::Zone45,
    }
}

/// Fixed predecessor within the `45 → 14 → 12` cycle.
pub fn previous_area(area: Area) -> Area {
    match area {
        Area::Zone45 => Area::Zone12,
        Area::Zone14 => Area::Zone45,
        Area::Zone12 => Area::Zone14,
    }
}
