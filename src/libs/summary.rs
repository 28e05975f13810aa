use crate::libs::error::ValidationError;
use crate::libs::shift::Shift;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Hours and pay summed over a set of shifts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub total_hours: f64,
    pub total_pay: f64,
}

impl Totals {
    fn add(self, hours: f64, pay: f64) -> Self {
        Totals {
            total_hours: self.total_hours + hours,
            total_pay: self.total_pay + pay,
        }
    }
}

pub trait ShiftTotals {
    /// Folds shifts into totals. Service-computed hours and pay win over
    /// local computation; `monthly_default` is only used for shifts the
    /// service has not resolved.
    fn totals(&self, monthly_default: f64) -> Result<Totals, ValidationError>;

    /// Totals per calendar day, in date order.
    fn daily_totals(&self, monthly_default: f64) -> Result<BTreeMap<NaiveDate, Totals>, ValidationError>;
}

impl ShiftTotals for [Shift] {
    fn totals(&self, monthly_default: f64) -> Result<Totals, ValidationError> {
        self.iter().try_fold(Totals::default(), |acc, shift| {
            Ok(acc.add(shift.hours()?, shift.pay(monthly_default)?))
        })
    }

    fn daily_totals(&self, monthly_default: f64) -> Result<BTreeMap<NaiveDate, Totals>, ValidationError> {
        let mut days: BTreeMap<NaiveDate, Totals> = BTreeMap::new();
        for shift in self {
            let entry = days.entry(shift.date).or_default();
            *entry = entry.add(shift.hours()?, shift.pay(monthly_default)?);
        }
        Ok(days)
    }
}
