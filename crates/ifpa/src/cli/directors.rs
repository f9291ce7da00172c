use crate::prelude::{println, *};
use colored::Colorize;
use ifpa::prelude::FetchExt;
use ifpa_core::models::{Director, DirectorSearchHit};

use super::{or_dash, output_json, LocationArgs};

#[derive(Debug, clap::Parser)]
#[command(name = "directors")]
#[command(about = "Tournament director lookups and search")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show one director
    #[clap(name = "get")]
    Get(GetOptions),

    /// Search directors by name and location
    #[clap(name = "search")]
    Search(SearchOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// IFPA director id
    pub director_id: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Director name (partial matches allowed)
    pub name: Option<String>,

    #[clap(flatten)]
    pub location: LocationArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: super::Global) -> Result<()> {
    let client = global.client()?;
    let directors = client.directors();

    match app.command {
        Commands::Get(options) => {
            let director = directors.get(options.director_id).await?;
            if options.json {
                output_json(&director)
            } else {
                print_director(&director);
                Ok(())
            }
        }
        Commands::Search(options) => {
            let query = match &options.name {
                Some(name) => directors.search(name),
                None => directors.query(),
            };
            let hits = options.location.apply(query).fetch_items().await?;

            if options.json {
                output_json(&hits)
            } else {
                print_hits(&hits);
                Ok(())
            }
        }
    }
}

fn print_director(director: &Director) {
    println!(
        "{} {}",
        director.name.as_deref().unwrap_or("(No name)").white().bold(),
        format!("#{}", director.director_id).yellow()
    );

    let location = director.location();
    if !location.is_empty() {
        println!("    {}: {}", "Location".green(), location);
    }
    println!(
        "    {}: {}",
        "Tournaments".green(),
        or_dash(director.tournament_count).bright_magenta()
    );
}

fn print_hits(hits: &[DirectorSearchHit]) {
    if hits.is_empty() {
        println!("{}", "No directors found.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Name".bold().cyan(),
        "Location".bold().cyan(),
        "Tournaments".bold().cyan()
    ]);
    for hit in hits {
        table.add_row(prettytable::row![
            hit.director_id.to_string().green(),
            hit.name.as_deref().unwrap_or("(No name)").bright_white(),
            hit.location(),
            or_dash(hit.tournament_count).bright_magenta()
        ]);
    }
    table.printstd();
}
