use crate::prelude::{println, *};
use colored::Colorize;
use ifpa_core::models::{Tournament, TournamentSearchHit};

use super::{or_dash, output_json, LocationArgs, PageArgs};

#[derive(Debug, clap::Parser)]
#[command(name = "tournaments")]
#[command(about = "Tournament lookups and search")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show one tournament
    #[clap(name = "get")]
    Get(GetOptions),

    /// Search tournaments by name, location and date range
    #[clap(name = "search")]
    Search(SearchOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// IFPA tournament id
    pub tournament_id: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
#[command(after_help = "EXAMPLES:
  # Tournaments in Washington during 2024:
  ifpa tournaments search --state WA --start-date 2024-01-01 --end-date 2024-12-31

  # Every women's tournament, as JSON:
  ifpa tournaments search --type women --all --json")]
pub struct SearchOptions {
    /// Tournament name (partial matches allowed)
    pub name: Option<String>,

    /// Earliest start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Latest end date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Tournament type (e.g. "women", "youth")
    #[arg(long = "type")]
    pub tournament_type: Option<String>,

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
    let tournaments = client.tournaments();

    match app.command {
        Commands::Get(options) => {
            let tournament = tournaments.get(options.tournament_id).await?;
            if options.json {
                output_json(&tournament)
            } else {
                print_tournament(&tournament);
                Ok(())
            }
        }
        Commands::Search(options) => {
            let mut query = match &options.name {
                Some(name) => tournaments.search(name),
                None => tournaments.query(),
            };
            if let Some(date) = &options.start_date {
                query = query.start_date(date);
            }
            if let Some(date) = &options.end_date {
                query = query.end_date(date);
            }
            if let Some(kind) = &options.tournament_type {
                query = query.tournament_type(kind);
            }
            let query = options.location.apply(query);

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

fn print_tournament(tournament: &Tournament) {
    println!(
        "{} {}",
        tournament
            .tournament_name
            .as_deref()
            .unwrap_or("(No name)")
            .white()
            .bold(),
        format!("#{}", tournament.tournament_id).yellow()
    );

    if let Some(event) = &tournament.event_name {
        println!("    {}: {}", "Event".green(), event);
    }

    let location = tournament.location();
    if !location.is_empty() {
        println!("    {}: {}", "Location".green(), location);
    }

    println!(
        "    {}: {} to {}",
        "Dates".green(),
        or_dash(tournament.event_start_date.as_deref()),
        or_dash(tournament.event_end_date.as_deref())
    );
    println!(
        "    {}: {} | {}: {}",
        "Players".green(),
        or_dash(tournament.player_count).bright_magenta(),
        "Value".green(),
        or_dash(tournament.event_value.map(|v| format!("{v:.2}"))).bright_yellow()
    );

    if let Some(director) = &tournament.director_name {
        println!("    {}: {}", "Director".green(), director);
    }
    if let Some(website) = &tournament.website {
        println!("    {}: {}", "Website".green(), website.cyan().underline());
    }
}

fn print_hits(hits: &[TournamentSearchHit]) {
    if hits.is_empty() {
        println!("{}", "No tournaments found.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Name".bold().cyan(),
        "Date".bold().cyan(),
        "Location".bold().cyan(),
        "Players".bold().cyan()
    ]);
    for hit in hits {
        table.add_row(prettytable::row![
            hit.tournament_id.to_string().green(),
            hit.tournament_name.as_deref().unwrap_or("(No name)").bright_white(),
            or_dash(hit.event_start_date.as_deref()),
            hit.location(),
            or_dash(hit.player_count).bright_magenta()
        ]);
    }
    table.printstd();
}
