use super::open_month;
use crate::{
    libs::{formatter::describe_shift, messages::Message, month::YearMonth, shift::ShiftDraft},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Shift date (YYYY-MM-DD)
    date: String,
    /// Start time (HH:mm or HH:mm:ss)
    start: String,
    /// End time (HH:mm or HH:mm:ss), not before the start
    end: String,
    /// Hourly rate for this shift; leave out to use the monthly default
    #[arg(short, long, default_value = "")]
    rate: String,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    // Input is validated before anything is sent.
    let draft = ShiftDraft::parse(&args.date, &args.start, &args.end, &args.rate)?;

    let session = open_month(YearMonth::of(draft.date())).await?;
    let created = session.controller.add(&draft).await?;

    msg_success!(Message::ShiftAdded(format!("#{} {}", created.id, describe_shift(&created))));
    if session.controller.shift(created.id).is_none() {
        msg_info!(Message::ShiftAddedToOtherMonth(YearMonth::of(created.date).to_string()));
    }
    Ok(())
}
