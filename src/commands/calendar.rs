use super::{open_month, MonthArgs};
use crate::{
    libs::{calendar::CalendarMonth, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    month: MonthArgs,
    /// Show the month before the selected one
    #[arg(long, conflicts_with = "next")]
    prev: bool,
    /// Show the month after the selected one
    #[arg(long)]
    next: bool,
}

pub async fn cmd(args: CalendarArgs) -> Result<()> {
    let offset = match (args.prev, args.next) {
        (true, _) => -1,
        (_, true) => 1,
        _ => 0,
    };
    let month = args.month.resolve().add_months(offset);

    let session = open_month(month).await?;
    let snapshot = session.controller.snapshot()?;
    let calendar = CalendarMonth::build(snapshot.month, &snapshot.shifts);

    msg_print!(Message::CalendarHeader(snapshot.month.label()), true);
    View::calendar(&calendar, &snapshot, &session.display.currency)
}
