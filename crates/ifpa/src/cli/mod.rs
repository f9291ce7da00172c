use crate::prelude::{eprintln, println, *};
use ifpa::prelude::{FetchExt, IfpaClient, IfpaConfig, LocationFilter, Paginate, PaginationFilter};
use serde::Serialize;

pub mod directors;
pub mod players;
pub mod rankings;
pub mod tournaments;

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// IFPA API key
    #[clap(long, env = "IFPA_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// IFPA API base URL
    #[clap(long, env = "IFPA_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "IFPA_VERBOSE", global = true, default_value = "false")]
    pub verbose: bool,
}

impl Global {
    /// Build a client from the global flags (which already fall back to the environment)
    pub fn client(&self) -> Result<IfpaClient> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_eyre("No API key provided. Set IFPA_API_KEY or pass --api-key")?;
        let config = IfpaConfig::new(api_key).with_overrides(self.base_url.clone(), None);

        if self.verbose {
            eprintln!("IFPA API Base: {}", config.base_url);
        }

        IfpaClient::new(&config).wrap_err("Failed to create IFPA client")
    }
}

/// Location filters shared by the search commands
#[derive(Debug, Clone, clap::Args)]
pub struct LocationArgs {
    /// Country code (e.g. "US")
    #[arg(long)]
    pub country: Option<String>,

    /// State or province code (e.g. "IL")
    #[arg(long)]
    pub state: Option<String>,

    /// City name
    #[arg(long)]
    pub city: Option<String>,
}

impl LocationArgs {
    pub fn apply<B: LocationFilter>(&self, query: B) -> B {
        let mut query = query;
        if let Some(country) = &self.country {
            query = query.country(country);
        }
        if let Some(state) = &self.state {
            query = query.state(state);
        }
        if let Some(city) = &self.city {
            query = query.city(city);
        }
        query
    }
}

/// Paging flags shared by the paginated commands
#[derive(Debug, Clone, clap::Args)]
pub struct PageArgs {
    /// Number of results per page
    #[arg(short, long, default_value = "25")]
    pub limit: usize,

    /// Zero-based position of the first result
    #[arg(long, default_value = "0", conflicts_with = "all")]
    pub offset: usize,

    /// Fetch every page instead of a single one
    #[arg(long)]
    pub all: bool,

    /// With --all, fail once this many results have been collected
    #[arg(long, requires = "all")]
    pub max_results: Option<usize>,
}

impl PageArgs {
    /// Fetch one page, or every page when `--all` is set
    pub async fn fetch<B: Paginate>(&self, query: B) -> Result<Vec<B::Item>> {
        let items = if self.all {
            query.collect_all(Some(self.limit), self.max_results).await?
        } else {
            query
                .offset(self.offset)?
                .limit(self.limit)
                .fetch_items()
                .await?
        };
        Ok(items)
    }
}

/// Print any serializable value as pretty JSON
pub fn output_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).wrap_err("JSON serialization failed")?;
    println!("{json}");
    Ok(())
}

/// Render an optional value, or a dash when missing
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some(12)), "12");
        assert_eq!(or_dash(None::<u64>), "-");
    }
}
