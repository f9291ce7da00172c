use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use ifpa::prelude::QueryBuilder;
use ifpa_core::models::{Player, PlayerSearchHit};

use super::{or_dash, output_json, LocationArgs, PageArgs};

#[derive(Debug, clap::Parser)]
#[command(name = "players")]
#[command(about = "Player lookups and search")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show one player profile
    #[clap(name = "get")]
    Get(GetOptions),

    /// Search players by name and location
    #[clap(name = "search")]
    Search(SearchOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// IFPA player id
    pub player_id: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
#[command(after_help = "EXAMPLES:
  # Find players named Elwin:
  ifpa players search Elwin

  # Every player in Illinois, refusing to collect more than 5000:
  ifpa players search --state IL --all --max-results 5000")]
pub struct SearchOptions {
    /// Player name (partial matches allowed)
    pub name: Option<String>,

    /// Only players who played in a tournament with this name
    #[arg(long)]
    pub tournament: Option<String>,

    #[clap(flatten)]
    pub location: LocationArgs,

    #[clap(flatten)]
    pub page: PageArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: super::Global) -> Result<()> {
    let client = global.client()?;
    let players = client.players();

    match app.command {
        Commands::Get(options) => {
            let player = players.get(options.player_id).await?;
            if options.json {
                output_json(&player)
            } else {
                print_player(&player);
                Ok(())
            }
        }
        Commands::Search(options) => {
            let mut query = match &options.name {
                Some(name) => players.search(name),
                None => players.query(),
            };
            if let Some(tournament) = &options.tournament {
                query = query.tournament(tournament);
            }
            let query = options.location.apply(query);

            if global.verbose {
                eprintln!("Searching players with {}", query.params().to_query_string());
            }

            let hits = options.page.fetch(query).await?;
            if options.json {
                output_json(&hits)
            } else {
                print_hits(&hits);
                Ok(())
            }
        }
    }
}

fn print_player(player: &Player) {
    println!(
        "{} {}",
        player.name().white().bold(),
        format!("#{}", player.player_id).yellow()
    );

    let location = player.location();
    if !location.is_empty() {
        println!("    {}: {}", "Location".green(), location);
    }

    if let Some(stats) = &player.player_stats {
        println!(
            "    {}: {} | {}: {} | {}: {}",
            "Rank".green(),
            or_dash(stats.current_wppr_rank).bright_yellow(),
            "WPPR".green(),
            or_dash(stats.current_wppr_value.map(|v| format!("{v:.2}"))).bright_yellow(),
            "Events".green(),
            or_dash(stats.total_events_all_time).bright_magenta()
        );
    }
}

fn print_hits(hits: &[PlayerSearchHit]) {
    if hits.is_empty() {
        println!("{}", "No players found.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Name".bold().cyan(),
        "Location".bold().cyan(),
        "WPPR Rank".bold().cyan()
    ]);
    for hit in hits {
        table.add_row(prettytable::row![
            hit.player_id.to_string().green(),
            hit.name().bright_white(),
            hit.location(),
            or_dash(hit.wppr_rank).bright_yellow()
        ]);
    }
    table.printstd();
}
