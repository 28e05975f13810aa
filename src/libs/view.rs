use super::calendar::{CalendarDay, CalendarMonth, WEEK_LABELS};
use super::controller::MonthSnapshot;
use super::formatter::{format_clock, format_duration, format_hours, format_money, FormattedShift};
use super::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Datelike;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn shifts(snapshot: &MonthSnapshot, currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TIME", "HOURS", "RATE", "PAY", "DONE"]);
        for shift in &snapshot.shifts {
            let formatted = FormattedShift::new(shift, snapshot.monthly_default_rate, currency);
            table.add_row(row![
                formatted.id,
                formatted.date,
                formatted.time_range,
                r->formatted.hours,
                formatted.rate,
                r->formatted.pay,
                c->formatted.completed
            ]);
        }
        table.printstd();

        Self::totals(snapshot, currency);
        Ok(())
    }

    pub fn calendar(calendar: &CalendarMonth, snapshot: &MonthSnapshot, currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(Row::new(WEEK_LABELS.iter().map(|label| Cell::new(label)).collect()));
        for week in &calendar.weeks {
            let cells = week
                .iter()
                .map(|day| match day {
                    Some(day) => Cell::new(&Self::calendar_cell(day, snapshot.monthly_default_rate, currency)),
                    None => Cell::new(""),
                })
                .collect();
            table.add_row(Row::new(cells));
        }
        table.printstd();

        Self::totals(snapshot, currency);
        Ok(())
    }

    pub fn totals(snapshot: &MonthSnapshot, currency: &str) {
        msg_print!(
            Message::MonthTotals {
                hours: format_hours(snapshot.totals.total_hours),
                duration: format_duration(snapshot.totals.total_hours),
                pay: format_money(currency, snapshot.totals.total_pay),
            },
            true
        );
        msg_print!(Message::MonthlyDefaultRate(format!(
            "{}/hr",
            format_money(currency, snapshot.monthly_default_rate)
        )));
    }

    fn calendar_cell(day: &CalendarDay, monthly_default: f64, currency: &str) -> String {
        let mut lines = vec![day.date.day().to_string()];
        for shift in &day.shifts {
            let pay = shift.pay(monthly_default).unwrap_or_default();
            lines.push(format!(
                "#{} {}-{}{}",
                shift.id,
                format_clock(shift.start_time),
                format_clock(shift.end_time),
                if shift.is_completed { " ✔" } else { "" }
            ));
            lines.push(format!("  {}", format_money(currency, pay)));
        }
        lines.join("\n")
    }
}
