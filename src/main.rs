use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use construction_estimator::advisor::{self, Advisor};
use construction_estimator::config::{load_input_file, load_pricing_file, PricingConfig};
use construction_estimator::display::{format_area, format_vnd};
use construction_estimator::engine::estimate;
use construction_estimator::export::{export_csv, export_json, EstimateReport};
use construction_estimator::logging;
use construction_estimator::model::{CalculationResult, ConstructionInput};
use construction_estimator::ui::App;

#[derive(Parser, Debug)]
#[command(name = "construction-estimator")]
#[command(about = "Construction Estimator - preliminary building cost estimates")]
#[command(version)]
struct Args {
    /// Construction input record (JSON)
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Pricing table (JSON), built-in defaults when omitted
    #[arg(long, value_name = "FILE")]
    pricing: Option<PathBuf>,

    /// Export to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Print a summary to stdout instead of opening the form
    #[arg(long)]
    summary: bool,

    /// Ask the advisory service to review the estimate
    #[arg(long)]
    advise: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Args {
    fn is_batch(&self) -> bool {
        self.csv.is_some() || self.json.is_some() || self.summary || self.advise
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(&args.log_level);

    let config = match &args.pricing {
        Some(path) => load_pricing_file(path)?,
        None => PricingConfig::default(),
    };
    let input = match &args.input {
        Some(path) => load_input_file(path)?,
        None => ConstructionInput::default(),
    };

    if !args.is_batch() {
        let terminal = ratatui::init();
        let result = App::new(input, config).run(terminal);
        ratatui::restore();
        return result;
    }

    let result = estimate(&input, &config);

    if let Some(csv_path) = &args.csv {
        export_csv(&result, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        let report = EstimateReport {
            pricing_version: &config.version,
            input: &input,
            result: &result,
        };
        export_json(&report, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.summary {
        print_summary(&result);
    }

    if args.advise {
        let backend = advisory_backend();
        println!("{}", advisor::advise(backend.as_ref(), &input, &result));
    }

    Ok(())
}

fn print_summary(result: &CalculationResult) {
    let costs = &result.cost_structure;
    println!("Converted area:    {}", format_area(result.total_converted_area));
    println!("Unit price:        {}/m²", format_vnd(result.unit_price));
    println!("Core cost:         {}", format_vnd(result.core_cost));
    println!("Construction cost: {}", format_vnd(result.total_cost));
    println!("  Labour:          {}", format_vnd(costs.labor));
    println!("  Rough material:  {}", format_vnd(costs.rough_material));
    println!("  Finishing:       {}", format_vnd(costs.finishing));
    println!("  Equipment:       {}", format_vnd(costs.equipment));
    println!("  Furniture:       {}", format_vnd(costs.furniture));
    println!("  Soft costs:      {}", format_vnd(costs.soft));
    println!("  Contingency:     {}", format_vnd(costs.contingency));
    println!("Total investment:  {}", format_vnd(result.total_investment));
    println!("Schedule:          {} weeks", result.schedule_weeks);
}

#[cfg(feature = "advisor")]
fn advisory_backend() -> Box<dyn Advisor> {
    match advisor::GeminiAdvisor::from_env() {
        Ok(gemini) => Box::new(gemini),
        Err(e) => {
            tracing::warn!("{e}");
            Box::new(advisor::DisabledAdvisor)
        }
    }
}

#[cfg(not(feature = "advisor"))]
fn advisory_backend() -> Box<dyn Advisor> {
    Box::new(advisor::DisabledAdvisor)
}
