//! Month calendar layout.
//!
//! Lays the shifts of one month out on a Sunday-first week grid. Days
//! without shifts still get a cell; cells before the first and after the
//! last day of the month are empty.

use crate::libs::month::YearMonth;
use crate::libs::shift::Shift;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

pub const WEEK_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Shifts of the day ordered by start time.
    pub shifts: Vec<Shift>,
}

pub type Week = [Option<CalendarDay>; 7];

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub month: YearMonth,
    pub weeks: Vec<Week>,
}

impl CalendarMonth {
    /// Builds the grid for `month`. Shifts dated outside the month are
    /// ignored.
    pub fn build(month: YearMonth, shifts: &[Shift]) -> Self {
        let mut by_day = shifts_by_day(month, shifts);
        let mut weeks: Vec<Week> = Vec::new();
        let mut week: Week = std::array::from_fn(|_| None);
        let mut column = leading_blanks(month);

        for day in 1..=month.days_in_month() {
            let date = month.first_day().with_day(day).unwrap_or_else(|| month.first_day());
            week[column] = Some(CalendarDay {
                date,
                shifts: by_day.remove(&day).unwrap_or_default(),
            });
            column += 1;
            if column == 7 {
                weeks.push(std::mem::replace(&mut week, std::array::from_fn(|_| None)));
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        Self { month, weeks }
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|week| week.iter().flatten())
    }
}

/// Empty cells before day 1 in a Sunday-first week.
pub fn leading_blanks(month: YearMonth) -> usize {
    month.first_day().weekday().num_days_from_sunday() as usize
}

/// Groups the shifts of `month` by day of month, each day sorted by start
/// time.
pub fn shifts_by_day(month: YearMonth, shifts: &[Shift]) -> BTreeMap<u32, Vec<Shift>> {
    let mut days: BTreeMap<u32, Vec<Shift>> = BTreeMap::new();
    for shift in shifts.iter().filter(|s| month.contains(s.date)) {
        days.entry(shift.date.day()).or_default().push(shift.clone());
    }
    for list in days.values_mut() {
        list.sort_by_key(|s| s.start_time);
    }
    days
}
