use anyhow::Result;
use clap::{Parser, Subcommand};

use iou_wizard::cli::{handle_journal_command, handle_run_command, JournalCommands, RunArgs};
use iou_wizard::config::{Settings, WizardPaths};
use iou_wizard::logging::init_tracing;
use iou_wizard::tui::{run_tui, TuiArgs};

#[derive(Parser)]
#[command(
    name = "iou",
    version,
    about = "Request, split or send money through a step-by-step wizard",
    long_about = "iou walks through the money request wizard: enter an amount, \
                  pick participants when the report has none, then confirm. \
                  Dispatched actions are kept in a local journal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one wizard session from arguments
    Run(RunArgs),

    /// Open the wizard as a terminal modal
    #[command(alias = "ui")]
    Tui(TuiArgs),

    /// Inspect or export dispatched actions
    #[command(subcommand)]
    Journal(JournalCommands),

    /// Write the settings file and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WizardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(settings.log_filter.as_deref());

    match cli.command {
        Some(Commands::Run(args)) => handle_run_command(&paths, &settings, args)?,
        Some(Commands::Tui(args)) => run_tui(&paths, &settings, &args)?,
        Some(Commands::Journal(cmd)) => handle_journal_command(&paths, cmd)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                println!("Initialized iou-wizard at: {}", paths.base_dir().display());
                println!();
                println!("Add people under \"personal_details\" in:");
                println!("  {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("iou-wizard Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Journal file:   {}", paths.journal_file().display());
            println!();
            println!("Settings:");
            println!("  Current user:     {}", settings.current_user_login);
            println!("  Local currency:   {}", settings.local_currency_code);
            println!("  Preferred locale: {}", settings.preferred_locale);
            println!("  Journal enabled:  {}", settings.journal_enabled);
            println!("  Known people:     {}", settings.personal_details.len());
        }
        None => {
            println!("iou - step-by-step money requests");
            println!();
            println!("Run 'iou --help' for usage information.");
            println!("Run 'iou tui' to open the interactive wizard.");
        }
    }

    Ok(())
}
