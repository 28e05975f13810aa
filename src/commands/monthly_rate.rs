use super::{open_month, MonthArgs};
use crate::{
    libs::{formatter::format_money, messages::Message, rate::parse_rate},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MonthlyRateArgs {
    /// Default hourly rate for the month (1-1000)
    rate: String,
    #[command(flatten)]
    month: MonthArgs,
}

pub async fn cmd(args: MonthlyRateArgs) -> Result<()> {
    let rate = parse_rate(&args.rate)?;

    let session = open_month(args.month.resolve()).await?;
    session.controller.set_monthly_rate(rate).await?;

    msg_success!(Message::MonthlyRateSaved(
        session.controller.month().label(),
        format!("{}/hr", format_money(&session.display.currency, rate.value()))
    ));
    Ok(())
}
