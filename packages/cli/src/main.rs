#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the crime pattern detection tool.

use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use crime_patterns_analytics::{DEFAULT_CLUSTER_WINDOW, DEFAULT_TOP_N, PatternAnalyzer};
use crime_patterns_analytics_models::AnalysisReport;
use crime_patterns_charts::ChartBundle;
use crime_patterns_ingest::loader::{self, CsvLoader};
use crime_patterns_ingest::profile::DatasetProfile;

/// How many matches the search output shows before truncating.
const SEARCH_PREVIEW: usize = 10;

#[derive(Parser)]
#[command(name = "crime_patterns_cli", about = "Crime pattern detection tool")]
struct Cli {
    /// CSV file of incident records to analyze
    #[arg(short, long, global = true, default_value = "crime_data.csv")]
    input: PathBuf,
    /// Dataset profile TOML mapping CSV columns to record fields
    #[arg(long, global = true)]
    profile: Option<PathBuf>,
    /// Maximum number of records to load
    #[arg(long, global = true)]
    max_records: Option<u64>,
    /// Abort on the first invalid row instead of skipping it
    #[arg(long, global = true)]
    strict: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the record set and print the pattern report
    Analyze {
        /// Number of entries in the ranked type and location lists
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
        /// Cluster window width, in distinct dates
        #[arg(long, default_value_t = DEFAULT_CLUSTER_WINDOW)]
        window_size: usize,
        /// Print the report as pretty JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print record totals and the covered date range
    Summary,
    /// Search records by crime type, location, or date range
    Search {
        /// Exact crime type to match (case-insensitive)
        #[arg(long)]
        crime_type: Option<String>,
        /// Location substring to match (case-insensitive)
        #[arg(long)]
        location: Option<String>,
        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Generate chart data for the web dashboard
    Charts {
        /// Where to write the chart JSON
        #[arg(long, default_value = "chart_data.json")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let loader = build_loader(&cli)?;

    let Some(command) = cli.command else {
        return run_pipeline(&loader);
    };

    let records = loader.load()?;

    match command {
        Commands::Analyze {
            top_n,
            window_size,
            json,
        } => {
            let start = Instant::now();
            let analyzer = PatternAnalyzer::new(&records);
            let report = analyzer.report_with(top_n, window_size);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("ANALYSIS RESULTS");
                println!("{}", "-".repeat(40));
                print_report(&report);
            }
            log::info!("Analysis complete in {:.1}s", start.elapsed().as_secs_f64());
        }
        Commands::Summary => {
            let summary = loader::summarize(&records);
            println!("{:<20} {}", "Total records", summary.total_records);
            println!("{:<20} {}", "Unique crime types", summary.unique_types);
            println!("{:<20} {}", "Unique locations", summary.unique_locations);
            match &summary.date_range {
                Some(range) => println!("{:<20} {} to {}", "Date range", range.start, range.end),
                None => println!("{:<20} (no records)", "Date range"),
            }
        }
        Commands::Search {
            crime_type,
            location,
            from,
            to,
        } => {
            let analyzer = PatternAnalyzer::new(&records);
            let matches = match (crime_type, location, from, to) {
                (Some(query), None, None, None) => analyzer.search_by_type(&query),
                (None, Some(query), None, None) => analyzer.search_by_location(&query),
                (None, None, from, to) if from.is_some() || to.is_some() => {
                    analyzer.search_by_date_range(from, to)
                }
                _ => {
                    return Err(
                        "Specify exactly one of --crime-type, --location, or --from/--to".into(),
                    );
                }
            };

            println!("Found {} matching records", matches.len());
            for crime in matches.iter().take(SEARCH_PREVIEW) {
                println!(
                    "  {} at {} in {} ({})",
                    crime.date, crime.time.format("%H:%M"), crime.location, crime.incident_type
                );
            }
            if matches.len() > SEARCH_PREVIEW {
                println!("  ... and {} more", matches.len() - SEARCH_PREVIEW);
            }
        }
        Commands::Charts { output } => {
            let analyzer = PatternAnalyzer::new(&records);
            let report = analyzer.comprehensive_report();
            ChartBundle::from_report(&report).write_json(&output)?;
            println!("Chart data saved to {}", output.display());
        }
    }

    Ok(())
}

/// Builds the CSV loader from the global CLI options.
fn build_loader(cli: &Cli) -> Result<CsvLoader, Box<dyn std::error::Error>> {
    let mut csv_loader = CsvLoader::new(&cli.input).strict(cli.strict);
    if let Some(max) = cli.max_records {
        csv_loader = csv_loader.with_max_records(max);
    }
    if let Some(path) = &cli.profile {
        let profile = DatasetProfile::from_toml_str(&std::fs::read_to_string(path)?)?;
        csv_loader = csv_loader.with_profile(profile);
    }
    Ok(csv_loader)
}

/// Runs the full load/analyze/export flow and prints the numbered report.
fn run_pipeline(csv_loader: &CsvLoader) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "=".repeat(60));
    println!("CRIME PATTERN DETECTION SYSTEM");
    println!("{}", "=".repeat(60));

    let start = Instant::now();

    println!("\n1. Loading crime data...");
    let records = csv_loader.load()?;
    if records.is_empty() {
        println!("Failed to load data. Exiting...");
        return Ok(());
    }
    println!("Loaded {} crime records", records.len());

    println!("\n2. Analyzing crime patterns...");
    let analyzer = PatternAnalyzer::new(&records);
    let report = analyzer.comprehensive_report();

    println!("\n3. ANALYSIS RESULTS");
    println!("{}", "-".repeat(40));
    print_report(&report);

    println!("\n4. Generating visualization data...");
    ChartBundle::from_report(&report).write_json("chart_data.json")?;
    println!("Chart data generated successfully!");
    println!("\nVisualization data saved to 'chart_data.json'");
    println!("You can now view the web dashboard for interactive charts.");

    println!("\n5. SEARCH FUNCTIONALITY DEMO");
    println!("{}", "-".repeat(40));

    let theft_crimes = analyzer.search_by_type("theft");
    println!("\nFound {} theft incidents:", theft_crimes.len());
    for crime in theft_crimes.iter().take(3) {
        println!("  {} at {} in {}", crime.date, crime.time.format("%H:%M"), crime.location);
    }

    let downtown_crimes = analyzer.search_by_location("downtown");
    println!("\nFound {} crimes in downtown area:", downtown_crimes.len());
    for crime in downtown_crimes.iter().take(3) {
        println!("  {} on {} at {}", crime.incident_type, crime.date, crime.time.format("%H:%M"));
    }

    println!("\n{}", "=".repeat(60));
    println!("ANALYSIS COMPLETE!");
    println!("Check the web dashboard for interactive visualizations.");
    println!("{}", "=".repeat(60));

    log::info!("Pipeline complete in {:.1}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Prints the report sections in the numbered-report layout.
fn print_report(report: &AnalysisReport) {
    println!("\nTotal Crimes: {}", report.total_crimes);
    println!("Unique Crime Types: {}", report.unique_types);
    println!("Unique Locations: {}", report.unique_locations);

    println!("\nMost Frequent Crime Types:");
    for (i, entry) in report.frequent_crimes.iter().enumerate() {
        println!("  {}. {}: {} incidents", i + 1, entry.crime_type, entry.count);
    }

    println!("\nCrime Hotspots:");
    for (i, entry) in report.hotspots.iter().enumerate() {
        println!("  {}. {}: {} incidents", i + 1, entry.location, entry.count);
    }

    println!("\nTime Pattern Analysis:");
    for entry in &report.time_patterns.periods {
        println!("  {}: {} incidents", entry.period.label(), entry.count);
    }

    if !report.clusters.is_empty() {
        println!("\nDetected {} high-activity clusters:", report.clusters.len());
        for (i, cluster) in report.clusters.iter().enumerate() {
            println!(
                "  {}. {} to {}: {} crimes",
                i + 1, cluster.start_date, cluster.end_date, cluster.total_crimes
            );
        }
    }
}
