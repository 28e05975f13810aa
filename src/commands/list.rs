use super::{open_month, MonthArgs};
use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    month: MonthArgs,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let session = open_month(args.month.resolve()).await?;
    let snapshot = session.controller.snapshot()?;

    if snapshot.shifts.is_empty() {
        msg_info!(Message::NoShiftsForMonth(snapshot.month.label()));
        return Ok(());
    }

    msg_print!(Message::ShiftsHeader(snapshot.month.label()), true);
    View::shifts(&snapshot, &session.display.currency)
}
