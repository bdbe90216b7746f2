use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod apply;
mod config;
mod error;
mod input;
mod list;
mod mcp;
mod morph;
mod prelude;
mod settings;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Transform text between camelCase, snake_case, Title Case and friends"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct Global {
    /// Path to the settings file (defaults to <config dir>/casemorph/settings.json)
    #[clap(long, env = "CASEMORPH_SETTINGS", global = true)]
    settings: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "CASEMORPH_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List transformations in display order
    List(crate::list::ListOptions),

    /// Apply a single transformation
    Apply(crate::apply::ApplyOptions),

    /// Apply every enabled transformation, in display order
    Morph(crate::morph::MorphOptions),

    /// Show or change which transformations are enabled and their order
    Settings(crate::settings::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::list::run(options, app.global).await,
        SubCommands::Apply(options) => crate::apply::run(options, app.global).await,
        SubCommands::Morph(options) => crate::morph::run(options, app.global).await,
        SubCommands::Settings(sub_app) => crate::settings::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
