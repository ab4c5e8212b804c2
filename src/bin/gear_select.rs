// Packing checklist CLI
//
// Usage: cargo run --bin gear-select -- --catalog materiel_enriched.json \
//            --destination alpes --days 5
//        cargo run --bin gear-select -- --weather archive.json --geocode search.json \
//            --place Chamonix --month 7

use anyhow::{bail, Context, Result};
use clap::Parser;
use gear_selector::catalog::load_catalog;
use gear_selector::selection::{SelectionCriteria, SelectionResult};
use gear_selector::weather::nominatim::location_from_search_response;
use gear_selector::weather::open_meteo::sample_from_archive_response;
use gear_selector::weather::{reference_year, Coordinates, GeoLocation, MonthWindow};
use gear_selector::{
    resolve_weather, summarize, ClimateCategory, ClimateSample, GearError, GearResult, Geocoder,
    PresetTable, Settings, WeatherArchive,
};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "gear-select", about = "Build a packing checklist from an equipment catalog")]
#[command(group(clap::ArgGroup::new("location").args(["geocode", "lat"])))]
struct Cli {
    /// Equipment catalog (JSON array)
    #[arg(long, env = "GEAR_CATALOG", default_value = "materiel_enriched.json")]
    catalog: PathBuf,

    /// Settings file (JSON)
    #[arg(long, env = "GEAR_CONFIG")]
    config: Option<PathBuf>,

    /// Destination preset key (see --list-destinations)
    #[arg(long)]
    destination: Option<String>,

    #[arg(long)]
    activity: Option<String>,

    /// Climate: Froid, Tempéré, Chaud, Pluie, Neige (or Cold, Temperate, Hot, Rain, Snow)
    #[arg(long, value_parser = parse_climate)]
    climate: Option<ClimateCategory>,

    /// Self-sufficient trip: yes/no
    #[arg(long, action = clap::ArgAction::Set, value_parser = parse_yes_no)]
    autonomy: Option<bool>,

    /// Technical level ceiling
    #[arg(long, default_value_t = 1)]
    tech: u32,

    /// Trip duration in days
    #[arg(long, default_value_t = 7)]
    days: u32,

    /// Month of travel (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Saved weather-archive response for the destination
    #[arg(long, requires_all = ["place", "month", "location"])]
    weather: Option<PathBuf>,

    /// Place name to geocode
    #[arg(long)]
    place: Option<String>,

    /// Saved geocoding search response for --place
    #[arg(long)]
    geocode: Option<PathBuf>,

    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,

    /// Print JSON instead of a checklist
    #[arg(long)]
    json: bool,

    /// Also list rejected items with the rule they failed
    #[arg(long)]
    explain: bool,

    /// List destination presets and exit
    #[arg(long)]
    list_destinations: bool,
}

fn parse_yes_no(s: &str) -> Result<bool, String> {
    match s.trim().to_lowercase().as_str() {
        "yes" | "y" | "oui" | "true" | "1" => Ok(true),
        "no" | "n" | "non" | "false" | "0" => Ok(false),
        other => Err(format!("expected yes or no, got '{}'", other)),
    }
}

fn parse_climate(s: &str) -> Result<ClimateCategory, String> {
    s.parse()
}

// ============================================================================
// File-backed collaborators
// ============================================================================

fn read_json(path: &Path) -> GearResult<Value> {
    let contents = fs::read_to_string(path)
        .map_err(|e| GearError::DataUnavailable(format!("{:?}: {}", path, e)))?;
    serde_json::from_str(&contents).map_err(|e| GearError::DataUnavailable(format!("{:?}: {}", path, e)))
}

/// Geocoder answering with the coordinates given on the command line
struct StaticLocation(GeoLocation);

impl Geocoder for StaticLocation {
    fn geocode(&self, _address: &str) -> GearResult<Option<GeoLocation>> {
        Ok(Some(self.0.clone()))
    }
}

/// Geocoder backed by a saved search response
struct SearchResponseFile(PathBuf);

impl Geocoder for SearchResponseFile {
    fn geocode(&self, _address: &str) -> GearResult<Option<GeoLocation>> {
        Ok(location_from_search_response(&read_json(&self.0)?))
    }
}

/// Archive backed by a saved response file
struct ArchiveFile(PathBuf);

impl WeatherArchive for ArchiveFile {
    fn daily_sample(&self, _at: Coordinates, _window: &MonthWindow) -> GearResult<ClimateSample> {
        sample_from_archive_response(&read_json(&self.0)?)
    }
}

fn geocoder_for(cli: &Cli, place: &str) -> Result<Box<dyn Geocoder>> {
    match (&cli.geocode, cli.lat, cli.lon) {
        (Some(path), _, _) => Ok(Box::new(SearchResponseFile(path.clone()))),
        (None, Some(latitude), Some(longitude)) => Ok(Box::new(StaticLocation(GeoLocation {
            coordinates: Coordinates::new(latitude, longitude),
            display_name: place.to_string(),
        }))),
        _ => bail!("--weather needs --geocode or both --lat and --lon"),
    }
}

// ============================================================================
// Main
// ============================================================================

fn build_criteria(cli: &Cli, destinations: &PresetTable) -> Result<SelectionCriteria> {
    let mut criteria = SelectionCriteria::new()
        .with_tech_level(cli.tech)
        .with_duration(cli.days);
    if let Some(activity) = &cli.activity {
        criteria = criteria.with_activity(activity.as_str());
    }
    if let Some(climate) = cli.climate {
        criteria = criteria.with_climate_category(climate);
    }
    if let Some(required) = cli.autonomy {
        criteria = criteria.with_autonomy(required);
    }
    if let Some(month) = cli.month {
        criteria = criteria.with_month(month);
    }
    if let Some(place) = &cli.place {
        criteria = criteria.with_place(place.as_str());
    }

    if let Some(key) = &cli.destination {
        let Some(preset) = destinations.get(key) else {
            bail!("Unknown destination '{}' (try --list-destinations)", key);
        };
        criteria = preset.apply(criteria);
    }
    Ok(criteria)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gear_selector=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli.config.as_deref())?;
    let destinations = settings.destinations();

    if cli.list_destinations {
        for key in destinations.keys() {
            if let Some(preset) = destinations.get(key) {
                println!("{:<12} {}", key, preset.label);
            }
        }
        return Ok(());
    }

    let mut criteria = build_criteria(&cli, &destinations)?;

    if let (Some(path), Some(place), Some(month)) = (&cli.weather, &cli.place, cli.month) {
        let geocoder = geocoder_for(&cli, place)?;
        let year = reference_year(chrono::Local::now().date_naive());
        let resolution = resolve_weather(
            geocoder.as_ref(),
            &ArchiveFile(path.clone()),
            place,
            month,
            year,
            &settings.climate,
        )
        .with_context(|| "Weather analysis failed; no checklist generated")?;
        criteria = resolution.apply_to(criteria);
    }

    let catalog = load_catalog(&cli.catalog)?;
    let engine = settings.engine();
    tracing::debug!("Autonomy policy: {}", engine.policy().as_str());
    let result = engine.select(&catalog, &criteria);
    let summary = summarize(&criteria, &result);

    if cli.json {
        let mut output = json!({
            "criteria": criteria,
            "autonomy_policy": engine.policy().as_str(),
            "result": result,
            "summary": summary,
        });
        if cli.explain {
            let rejected: Vec<_> = engine
                .explain(&catalog, &criteria)
                .into_iter()
                .filter_map(|(item, verdict)| {
                    verdict.err().map(|reason| json!({"item": item.display_name(), "reason": reason}))
                })
                .collect();
            output["rejected"] = json!(rejected);
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_checklist(&result);
    if cli.explain {
        println!();
        println!("Rejected:");
        for (item, verdict) in engine.explain(&catalog, &criteria) {
            if let Err(reason) = verdict {
                println!("  {} ({})", item.display_name(), reason);
            }
        }
    }
    println!();
    println!("{}", summary);
    Ok(())
}

fn print_checklist(result: &SelectionResult<'_>) {
    if result.is_empty() {
        println!("No equipment matches these criteria.");
        return;
    }

    for line in &result.items {
        let item = line.item;
        let weight = line
            .line_weight()
            .map(|w| format!("{:.0} g", w))
            .unwrap_or_else(|| "?".to_string());
        println!(
            "[ ] {:<24} {:<32} x{:<3} {:>8}  {}",
            item.category,
            item.display_name(),
            line.quantity,
            weight,
            item.details
        );
    }

    println!();
    print!("Total: {} items, {:.0} g", result.total_quantity, result.total_weight_grams);
    if result.unknown_weight_count > 0 {
        print!(" ({} without weight)", result.unknown_weight_count);
    }
    println!();
}
