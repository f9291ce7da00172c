use crate::prelude::{println, *};
use colored::Colorize;
use ifpa_core::models::RankingEntry;

use super::{or_dash, output_json, PageArgs};

#[derive(Debug, clap::Parser)]
#[command(name = "rankings")]
#[command(about = "WPPR rankings")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Overall WPPR rankings
    #[clap(name = "wppr")]
    Wppr(WpprOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct WpprOptions {
    #[clap(flatten)]
    pub page: PageArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: super::Global) -> Result<()> {
    let client = global.client()?;

    match app.command {
        Commands::Wppr(options) => {
            let rows = options.page.fetch(client.rankings().wppr()).await?;
            if options.json {
                output_json(&rows)
            } else {
                print_rankings(&rows);
                Ok(())
            }
        }
    }
}

fn print_rankings(rows: &[RankingEntry]) {
    if rows.is_empty() {
        println!("{}", "No rankings returned.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Rank".bold().cyan(),
        "Player".bold().cyan(),
        "Country".bold().cyan(),
        "WPPR".bold().cyan(),
        "Events".bold().cyan()
    ]);
    for row in rows {
        table.add_row(prettytable::row![
            or_dash(row.current_rank).bright_yellow(),
            row.name().bright_white(),
            or_dash(row.country_name.as_deref()),
            or_dash(row.wppr_points.map(|v| format!("{v:.2}"))),
            or_dash(row.event_count).bright_magenta()
        ]);
    }
    table.printstd();
}
