use crate::prelude::{println, *};
use casemorph_core::{JsonFileStore, OutputCommand, SettingsManager};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, clap::Parser)]
#[command(name = "settings")]
#[command(about = "Show or change which transformations are enabled and their order")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show the current settings
    #[clap(name = "show")]
    Show(ShowOptions),

    /// Enable a transformation
    #[clap(name = "enable")]
    Enable(NameArgs),

    /// Disable a transformation
    #[clap(name = "disable")]
    Disable(NameArgs),

    /// Set the display order (comma-separated names; unlisted ones follow)
    #[clap(name = "order")]
    Order(OrderArgs),

    /// Revert to the default display order
    #[clap(name = "reset-order")]
    ResetOrder,

    /// Set the default output command
    #[clap(name = "output")]
    Output(OutputArgs),
}

#[derive(Debug, clap::Args)]
pub struct ShowOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct NameArgs {
    /// Transformation name, as shown by `casemorph list --all`
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Debug, clap::Args)]
pub struct OrderArgs {
    /// Order specification, e.g. "camelCase, snake_case"
    #[arg(value_name = "SPEC")]
    pub spec: String,
}

#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    #[arg(value_enum, value_name = "COMMAND")]
    pub command: OutputChoice,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputChoice {
    /// Copy the chosen result to the clipboard
    Copy,
    /// Type the chosen result into the focused window
    Type,
}

impl From<OutputChoice> for OutputCommand {
    fn from(choice: OutputChoice) -> Self {
        match choice {
            OutputChoice::Copy => OutputCommand::Copy,
            OutputChoice::Type => OutputCommand::Type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsOutput {
    pub path: String,
    pub default_output: OutputCommand,
    pub order: String,
    pub enabled: Vec<&'static str>,
    pub disabled: Vec<&'static str>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let mut manager = crate::config::open_settings(&global)?;

    match app.command {
        Commands::Show(options) => show(&manager, options),
        Commands::Enable(args) => set_enabled(&mut manager, &args.name, true),
        Commands::Disable(args) => set_enabled(&mut manager, &args.name, false),
        Commands::Order(args) => {
            manager
                .set_order(&args.spec)
                .context("Failed to save settings")?;
            println!("Order: {}", manager.order());
            Ok(())
        }
        Commands::ResetOrder => {
            manager.reset_order().context("Failed to save settings")?;
            println!("Order: {}", manager.order());
            Ok(())
        }
        Commands::Output(args) => {
            manager
                .set_default_output(args.command.into())
                .context("Failed to save settings")?;
            println!("Default output: {}", manager.default_output());
            Ok(())
        }
    }
}

fn set_enabled(
    manager: &mut SettingsManager<JsonFileStore>,
    name: &str,
    enabled: bool,
) -> Result<()> {
    manager.set_enabled(name, enabled).map_err(|e| match e {
        casemorph_core::Error::UnknownTransformation(_) => eyre!(
            "{}. Run `casemorph list --all` to see the available transformations",
            e
        ),
        e => eyre!("Failed to save settings: {}", e),
    })?;

    let state = if enabled {
        "enabled".green()
    } else {
        "disabled".red()
    };
    println!("{name} {state}");
    println!("Order: {}", manager.order());

    Ok(())
}

pub fn settings_data(manager: &SettingsManager<JsonFileStore>) -> SettingsOutput {
    let settings = manager.settings();

    SettingsOutput {
        path: manager.store().path().display().to_string(),
        default_output: settings.default_output,
        order: settings.order.clone(),
        enabled: settings.ordered_enabled(),
        disabled: settings
            .toggles
            .iter()
            .filter_map(|(name, enabled)| (!enabled).then_some(name))
            .collect(),
    }
}

fn show(manager: &SettingsManager<JsonFileStore>, options: ShowOptions) -> Result<()> {
    let output = settings_data(manager);

    if options.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{json}");
        return Ok(());
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row!["Settings file", output.path]);
    table.add_row(prettytable::row![
        "Default output",
        output.default_output.to_string()
    ]);
    table.add_row(prettytable::row!["Order", output.order]);
    table.add_row(prettytable::row!["Disabled", output.disabled.join(", ")]);
    table.printstd();

    Ok(())
}
