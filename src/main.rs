use std::path::PathBuf;

use anisan::algorithm::reporting::{Grouping, ScreeningReport, most_severe_records};
use anisan::utils::io::{JsonRecordStore, write_csv_file, write_parquet_file};
use anisan::utils::logging::log_rejected_intake;
use anisan::{
    ChildRecord, Classifier, Measurement, MeasurementInput, RegionCatalog, RegionRef,
    ScreeningConfig, Sex,
};
use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

/// Child nutritional-status screening from MUAC and edema
#[derive(Debug, Parser)]
#[command(name = "anisan", version, about)]
struct Cli {
    /// JSON screening configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Record store file (overrides the configuration)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// JSON country/region catalog (defaults to the built-in catalog)
    #[arg(long, global = true)]
    regions_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a single MUAC value without storing anything
    Classify {
        /// MUAC in the configured unit
        #[arg(long)]
        muac: f64,
        /// Bilateral pitting edema present
        #[arg(long)]
        edema: bool,
    },
    /// Validate, classify and store a child's measurement
    Add {
        #[arg(long)]
        name: String,
        /// M or F
        #[arg(long)]
        sex: String,
        /// Age in months
        #[arg(long)]
        age: u32,
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Height in centimeters
        #[arg(long)]
        height: f64,
        /// MUAC in the configured unit
        #[arg(long)]
        muac: f64,
        #[arg(long)]
        edema: bool,
        /// Measurement date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, requires = "region")]
        country: Option<String>,
        #[arg(long, requires = "country")]
        region: Option<String>,
    },
    /// Remove every record for a child
    Remove {
        #[arg(long)]
        name: String,
    },
    /// List stored records, most severe first
    List,
    /// Summarize stored records by category
    Report {
        #[arg(long, value_enum, default_value_t = ReportBy::Region)]
        by: ReportBy,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export stored records
    Export {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        parquet: Option<PathBuf>,
    },
    /// List known countries, or the regions of one country
    Regions { country: Option<String> },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportBy {
    Region,
    Country,
    Sex,
    Age,
}

impl From<ReportBy> for Grouping {
    fn from(by: ReportBy) -> Self {
        match by {
            ReportBy::Region => Self::Region,
            ReportBy::Country => Self::Country,
            ReportBy::Sex => Self::Sex,
            ReportBy::Age => Self::AgeBand,
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<ScreeningConfig> {
    let config = match &cli.config {
        Some(path) => ScreeningConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => ScreeningConfig::default(),
    };
    let mut config = config.with_env_overrides()?;
    if let Some(store) = &cli.store {
        config.store_path = store.clone();
    }
    Ok(config)
}

fn load_catalog(cli: &Cli) -> anyhow::Result<RegionCatalog> {
    match &cli.regions_file {
        Some(path) => Ok(RegionCatalog::from_json_file(path)?),
        None => Ok(RegionCatalog::default()),
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let classifier = Classifier::new(&config);
    let store = JsonRecordStore::from_config(&config);

    match &cli.command {
        Command::Classify { muac, edema } => {
            let muac_cm = config.muac_unit.to_centimeters(*muac);
            let result = classifier.classify(muac_cm, *edema)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Add {
            name,
            sex,
            age,
            weight,
            height,
            muac,
            edema,
            date,
            country,
            region,
        } => {
            let catalog = load_catalog(&cli)?;
            let region: Option<RegionRef> = match (country, region) {
                (Some(country), Some(region)) => Some(catalog.resolve(country, region)?),
                _ => None,
            };
            let input = MeasurementInput {
                age_months: *age,
                weight_kg: *weight,
                height_cm: *height,
                muac: *muac,
                muac_unit: None,
                edema_present: *edema,
                sex: sex.parse::<Sex>()?,
                measured_on: date.unwrap_or_else(|| chrono::Local::now().date_naive()),
            };

            let record = Measurement::from_input(input, &config)
                .and_then(|m| ChildRecord::classify(name, region, m, &classifier))
                .inspect_err(|e| log_rejected_intake(name, e))?;

            let mut register = store.load(&config, &classifier)?;
            let index = register.append(record);
            store
                .save(&mut register)
                .context("Record was classified but could not be saved")?;

            let saved = register.get(index).context("Appended record missing")?;
            info!("Recorded {} as {}", saved.name(), saved.category());
            println!("{}", serde_json::to_string_pretty(saved.classification())?);
        }
        Command::Remove { name } => {
            let mut register = store.load(&config, &classifier)?;
            let removed = register.remove_by_name(name)?;
            store.save(&mut register)?;
            println!("Removed {} record(s) for {name}", removed.len());
        }
        Command::List => {
            let register = store.load(&config, &classifier)?;
            if register.is_empty() {
                println!("No records.");
            }
            for record in most_severe_records(&register, register.len()) {
                let m = record.measurement();
                println!(
                    "{:<24} {:>3} mo  {}  MUAC {:>5.1} cm  edema: {:<5}  {:<38} {}",
                    record.name(),
                    m.age_months(),
                    m.sex().code(),
                    m.muac_cm(),
                    m.edema_present(),
                    record.category().label(),
                    record.region().map(ToString::to_string).unwrap_or_default()
                );
            }
        }
        Command::Report { by, json } => {
            let register = store.load(&config, &classifier)?;
            let report = ScreeningReport::build(register.records(), (*by).into());
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render());
            }
        }
        Command::Export { csv, parquet } => {
            if csv.is_none() && parquet.is_none() {
                bail!("Nothing to export: pass --csv and/or --parquet");
            }
            let register = store.load(&config, &classifier)?;
            if let Some(path) = csv {
                let rows = write_csv_file(path, register.records())?;
                println!("Wrote {rows} rows to {}", path.display());
            }
            if let Some(path) = parquet {
                let rows = write_parquet_file(path, register.records())?;
                println!("Wrote {rows} rows to {}", path.display());
            }
        }
        Command::Regions { country } => {
            let catalog = load_catalog(&cli)?;
            match country {
                Some(country) => {
                    let regions = catalog
                        .regions(country)
                        .with_context(|| format!("Unknown country: {country}"))?;
                    for region in regions {
                        println!("{}", region.name);
                    }
                }
                None => {
                    for country in catalog.countries() {
                        println!("{country}");
                    }
                }
            }
        }
    }

    Ok(())
}
