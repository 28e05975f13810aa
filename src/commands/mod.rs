pub mod add;
pub mod calendar;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod monthly_rate;
pub mod rate;

use crate::{
    api::ShiftsApi,
    libs::{
        config::{Config, DisplayConfig},
        controller::ShiftController,
        messages::Message,
        month::YearMonth,
    },
    msg_debug,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List the shifts of a month")]
    List(list::ListArgs),
    #[command(about = "Show a month as a calendar grid")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Add a shift", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Edit a shift", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Set or clear the hourly rate of a shift", arg_required_else_help = true)]
    Rate(rate::RateArgs),
    #[command(about = "Mark a shift as completed", arg_required_else_help = true)]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a shift", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Set the default hourly rate of a month", arg_required_else_help = true)]
    MonthlyRate(monthly_rate::MonthlyRateArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args).await,
            Commands::Calendar(args) => calendar::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Rate(args) => rate::cmd(args).await,
            Commands::Complete(args) => complete::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::MonthlyRate(args) => monthly_rate::cmd(args).await,
        }
    }
}

/// `--month` selector shared by the month-scoped commands.
#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Month to work on (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    month: Option<YearMonth>,
}

impl MonthArgs {
    pub fn resolve(&self) -> YearMonth {
        self.month.unwrap_or_else(YearMonth::current)
    }
}

/// A controller with `month` loaded, plus the display settings.
pub struct MonthSession {
    pub controller: ShiftController<ShiftsApi>,
    pub display: DisplayConfig,
}

pub async fn open_month(month: YearMonth) -> Result<MonthSession> {
    let config = Config::read()?;
    let server = config.server_config();
    msg_debug!(Message::LoadingMonth(format!("{} from {}", month.label(), server.api_url)));

    let controller = ShiftController::new(ShiftsApi::new(&server), month);
    controller.refresh().await?;

    Ok(MonthSession {
        controller,
        display: config.display_config(),
    })
}
