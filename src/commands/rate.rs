use super::{open_month, MonthArgs};
use crate::{
    libs::{formatter::format_money, messages::Message, rate::parse_optional_rate},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RateArgs {
    /// Shift id
    id: i64,
    /// Hourly rate override; leave out to follow the monthly default
    rate: Option<String>,
    #[command(flatten)]
    month: MonthArgs,
}

pub async fn cmd(args: RateArgs) -> Result<()> {
    let rate = parse_optional_rate(args.rate.as_deref().unwrap_or(""))?;

    let session = open_month(args.month.resolve()).await?;
    session.controller.set_shift_rate(args.id, rate).await?;

    match rate {
        Some(rate) => msg_success!(Message::ShiftRateSet(
            args.id,
            format!("{}/hr", format_money(&session.display.currency, rate.value()))
        )),
        None => msg_success!(Message::ShiftRateCleared(args.id)),
    }
    Ok(())
}
