//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `pixel_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use pixel_status::export::{export_areas, ExportFormat, ExportOptions};
use pixel_status::initialization::init_logger_with;
use pixel_status::overlay::{
    build_render_plan, resolve_click, ClickOutcome, Point, TransitionConfig, Viewport,
};
use pixel_status::search::{
    DateRange, LengthRange, QueryAction, QueryCoordinator, SearchFilters,
};
use pixel_status::tooltip::{place, TooltipContent};
use pixel_status::{load_snapshot, Config, DatasetSource, LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    name = "pixel_status",
    about = "Query, inspect, and export the pixel-map domain status dataset"
)]
struct Cli {
    /// Dataset document: a URL or a local file path
    #[arg(long)]
    dataset: String,

    /// Map HTML fragment carrying the authoritative <area> geometry
    #[arg(long)]
    map_html: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the dataset and print matching areas
    Query {
        /// Query text (empty lists everything up to the result cap)
        #[arg(default_value = "")]
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Export the current result set
    Export {
        /// Query text applied before exporting
        #[arg(default_value = "")]
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Skip the analytics columns
        #[arg(long)]
        no_analytics: bool,

        /// Include the rectangle columns
        #[arg(long)]
        include_coordinates: bool,

        /// Include the probe timestamp columns
        #[arg(long)]
        include_timestamps: bool,

        /// Export the whole registry instead of only the filtered results
        #[arg(long)]
        all: bool,
    },
    /// Resolve a canvas point against the overlay, like a click would
    Hit {
        /// Pointer x in canvas pixels
        #[arg(long)]
        x: f64,

        /// Pointer y in canvas pixels
        #[arg(long)]
        y: f64,

        /// Query text shaping the highlighted layer
        #[arg(default_value = "")]
        query: String,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Structured filter flags shared by the subcommands.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// DNS status filter (NOERROR, NXDOMAIN, SERVFAIL, TIMEOUT, REFUSED)
    #[arg(long)]
    dns_status: Option<String>,

    /// HTTP status filter, compared against the stringified code
    #[arg(long)]
    http_status: Option<String>,

    /// WHOIS status filter (registered, available, unknown, error)
    #[arg(long)]
    whois_status: Option<String>,

    /// Require (true) or exclude (false) areas with analytics
    #[arg(long)]
    has_analytics: Option<bool>,

    /// Minimum domain length, inclusive
    #[arg(long)]
    min_domain_length: Option<usize>,

    /// Maximum domain length, inclusive
    #[arg(long)]
    max_domain_length: Option<usize>,

    /// Earliest registration date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    registered_after: Option<String>,

    /// Latest registration date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    registered_before: Option<String>,

    /// Require (true) or exclude (false) areas with nameservers
    #[arg(long)]
    has_nameservers: Option<bool>,
}

impl FilterArgs {
    fn into_filters(self) -> Result<SearchFilters> {
        let parse_date = |value: &str| {
            value
                .parse::<chrono::NaiveDate>()
                .with_context(|| format!("Invalid date (expected YYYY-MM-DD): {value}"))
        };

        let domain_length = if self.min_domain_length.is_some() || self.max_domain_length.is_some()
        {
            Some(LengthRange {
                min: self.min_domain_length,
                max: self.max_domain_length,
            })
        } else {
            None
        };

        let date_range = if self.registered_after.is_some() || self.registered_before.is_some() {
            Some(DateRange {
                start: self
                    .registered_after
                    .as_deref()
                    .map(parse_date)
                    .transpose()?,
                end: self
                    .registered_before
                    .as_deref()
                    .map(parse_date)
                    .transpose()?,
            })
        } else {
            None
        };

        Ok(SearchFilters {
            dns_status: self
                .dns_status
                .as_deref()
                .map(|s| s.parse().map_err(anyhow::Error::msg))
                .transpose()?,
            http_status: self.http_status,
            whois_status: self
                .whois_status
                .as_deref()
                .map(|s| s.parse().map_err(anyhow::Error::msg))
                .transpose()?,
            has_analytics: self.has_analytics,
            domain_length,
            date_range,
            has_nameservers: self.has_nameservers,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config {
        dataset: DatasetSource::from_arg(&cli.dataset),
        map_html: cli.map_html.clone(),
        ..Default::default()
    };

    match run(cli.command, config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("pixel_status error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(command: Command, config: Config) -> Result<()> {
    let report = load_snapshot(&config).await?;
    if report.retry_count > 0 {
        println!(
            "(dataset fetch succeeded after {} retr{})",
            report.retry_count,
            if report.retry_count == 1 { "y" } else { "ies" }
        );
    }
    let snapshot = report.snapshot;
    let mut coordinator = QueryCoordinator::new();

    match command {
        Command::Query {
            query,
            filters,
            limit,
        } => {
            coordinator.dispatch(QueryAction::SetFilters(filters.into_filters()?), &snapshot);
            coordinator.dispatch(QueryAction::SetQuery(query), &snapshot);
            let state = coordinator.state();

            println!(
                "{} match(es) across {} domain(s)",
                state.results.len(),
                state.highlighted_domains.len()
            );
            let shown = limit.unwrap_or(usize::MAX);
            for &id in state.results.iter().take(shown) {
                let Some(area) = snapshot.registry.by_id(id) else {
                    continue;
                };
                let status = match &area.analytics {
                    Some(a) => format!(
                        "dns {}  http {}  whois {}",
                        a.dns_status, a.http_status, a.whois_status
                    ),
                    None => "no analytics".to_string(),
                };
                println!("  [{}] {}  {}  ({status})", area.id, area.domain, area.title);
            }
            Ok(())
        }
        Command::Export {
            query,
            filters,
            format,
            output,
            no_analytics,
            include_coordinates,
            include_timestamps,
            all,
        } => {
            coordinator.dispatch(QueryAction::SetFilters(filters.into_filters()?), &snapshot);
            coordinator.dispatch(QueryAction::SetQuery(query), &snapshot);

            let options = ExportOptions {
                format,
                include_analytics: !no_analytics,
                include_coordinates,
                include_timestamps,
                only_filtered: !all,
                output: output.clone(),
            };
            let areas = coordinator.effective_results(&snapshot, options.only_filtered);
            let count = export_areas(&areas, &options)?;
            if let Some(path) = output {
                println!("Exported {count} record(s) to {}", path.display());
            }
            Ok(())
        }
        Command::Hit {
            x,
            y,
            query,
            filters,
        } => {
            coordinator.dispatch(QueryAction::SetFilters(filters.into_filters()?), &snapshot);
            coordinator.dispatch(QueryAction::SetQuery(query), &snapshot);

            let plan = build_render_plan(
                &snapshot.registry,
                coordinator.state(),
                TransitionConfig::default(),
            );
            let point = Point::new(x, y);
            match resolve_click(&plan, &snapshot.registry, point) {
                ClickOutcome::Selected { area_id, domain } => {
                    coordinator.dispatch(QueryAction::SelectDomain(domain.clone()), &snapshot);
                    println!("hit: [{area_id}] {domain}");

                    if let Some(area) = snapshot.registry.by_id(area_id) {
                        let content = TooltipContent::for_area(area);
                        println!(
                            "  dns {}  http {}  whois {}",
                            content.dns_status, content.http_status, content.whois_status
                        );
                        println!(
                            "  registered {}  expires {}",
                            content.registered_at, content.expiry_date
                        );
                    }
                    let viewport = Viewport::new(1000.0, 1000.0);
                    let placement = place(point, &viewport);
                    println!(
                        "  tooltip at ({:.0}, {:.0}) in a 1000x1000 viewport",
                        placement.left, placement.top
                    );
                }
                ClickOutcome::Background => {
                    coordinator.dispatch(QueryAction::ClearSelection, &snapshot);
                    println!("background (selection cleared)");
                }
            }
            Ok(())
        }
    }
}
