use super::{open_month, MonthArgs};
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Shift id
    id: i64,
    /// Mark the shift as not completed instead
    #[arg(long)]
    undo: bool,
    #[command(flatten)]
    month: MonthArgs,
}

pub async fn cmd(args: CompleteArgs) -> Result<()> {
    let session = open_month(args.month.resolve()).await?;
    session.controller.set_completed(args.id, !args.undo).await?;

    match args.undo {
        true => msg_success!(Message::ShiftReopened(args.id)),
        false => msg_success!(Message::ShiftCompleted(args.id)),
    }
    Ok(())
}
