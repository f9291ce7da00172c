use crate::prelude::*;
use clap::Parser;

mod cli;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Query players, tournaments, directors and rankings from the IFPA API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: cli::Global,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Player lookups and search
    Players(cli::players::App),

    /// Tournament lookups and search
    Tournaments(cli::tournaments::App),

    /// Tournament director lookups and search
    Directors(cli::directors::App),

    /// WPPR rankings
    Rankings(cli::rankings::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Players(sub_app) => cli::players::run(sub_app, app.global).await,
        SubCommands::Tournaments(sub_app) => cli::tournaments::run(sub_app, app.global).await,
        SubCommands::Directors(sub_app) => cli::directors::run(sub_app, app.global).await,
        SubCommands::Rankings(sub_app) => cli::rankings::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
