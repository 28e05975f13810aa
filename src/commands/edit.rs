use super::{open_month, MonthArgs};
use crate::{
    libs::{
        messages::Message,
        month::YearMonth,
        rate::parse_optional_rate,
        shift::ShiftDraft,
        time::{parse_date, parse_time_of_day},
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Shift id
    id: i64,
    #[command(flatten)]
    month: MonthArgs,
    /// New date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
    /// New start time
    #[arg(long)]
    start: Option<String>,
    /// New end time
    #[arg(long)]
    end: Option<String>,
    /// New hourly rate; an empty value switches to the monthly default
    #[arg(long)]
    rate: Option<String>,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let start = args.start.as_deref().map(parse_time_of_day).transpose()?;
    let end = args.end.as_deref().map(parse_time_of_day).transpose()?;
    let rate = args.rate.as_deref().map(parse_optional_rate).transpose()?;

    if date.is_none() && start.is_none() && end.is_none() && rate.is_none() {
        msg_info!(Message::ShiftEditNoChanges);
        return Ok(());
    }

    let session = open_month(args.month.resolve()).await?;
    let Some(shift) = session.controller.shift(args.id) else {
        msg_bail_anyhow!(Message::ShiftNotFound(args.id));
    };

    let mut draft = ShiftDraft::from_shift(&shift)?;
    if let Some(date) = date {
        draft = draft.with_date(date);
    }
    draft = draft.with_times(start.unwrap_or(shift.start_time), end.unwrap_or(shift.end_time))?;
    if let Some(rate) = rate {
        draft = draft.with_rate(rate);
    }

    let saved = session.controller.update(args.id, &draft).await?;
    msg_success!(Message::ShiftUpdated(saved.id));
    if YearMonth::of(saved.date) != session.controller.month() {
        msg_info!(Message::ShiftAddedToOtherMonth(YearMonth::of(saved.date).to_string()));
    }
    Ok(())
}
