use super::{open_month, MonthArgs};
use crate::{
    libs::{formatter::describe_shift, messages::Message},
    msg_bail_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Shift id
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
    #[command(flatten)]
    month: MonthArgs,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let session = open_month(args.month.resolve()).await?;
    let Some(shift) = session.controller.shift(args.id) else {
        msg_bail_anyhow!(Message::ShiftNotFound(args.id));
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteShift(describe_shift(&shift)).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match session.controller.delete(args.id).await {
        Ok(_) => {
            msg_success!(Message::ShiftDeleted(args.id));
            Ok(())
        }
        Err(e) => {
            msg_warning!(Message::ShiftDeleteRolledBack(args.id));
            Err(e.into())
        }
    }
}
