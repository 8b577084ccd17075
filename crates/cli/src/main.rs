//! platequote CLI: analyze DXF cut parts and quote orders.

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use platequote_core::{AnalysisResult, Analyzer};
use platequote_dxf::read_drawing;
use platequote_pricing::{compute_quote, PricingConfig, QuoteBreakdown};

#[derive(Parser)]
#[command(name = "platequote")]
#[command(about = "Net area, cutting perimeter, and quotation for DXF cut parts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more DXF drawings
    Analyze {
        /// DXF files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write the full report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyze a drawing and quote an order
    Quote {
        /// DXF file to quote
        file: PathBuf,

        /// Number of pieces
        #[arg(short = 'n', long, default_value = "1")]
        quantity: u32,

        /// Material cost per square meter
        #[arg(long, default_value = "90000")]
        area_cost: f64,

        /// Cutting cost per meter
        #[arg(long, default_value = "6000")]
        cut_cost: f64,
    },
}

/// Per-file analysis outcome, serialized as the JSON report entry.
#[derive(Serialize)]
struct FileReport {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn analyze_file(path: &Path) -> FileReport {
    let file = path.display().to_string();

    let entities = match read_drawing(path) {
        Ok(entities) => entities,
        Err(e) => {
            return FileReport {
                file,
                result: None,
                error: Some(e.to_string()),
            }
        }
    };

    if let Err(e) = entities.validate() {
        return FileReport {
            file,
            result: None,
            error: Some(e.to_string()),
        };
    }

    match Analyzer::default().analyze(&entities) {
        Ok(result) => FileReport {
            file,
            result: Some(result),
            error: None,
        },
        Err(e) => FileReport {
            file,
            result: None,
            error: Some(e.to_string()),
        },
    }
}

fn print_report(report: &FileReport) {
    println!("{}", report.file);
    match (&report.result, &report.error) {
        (Some(result), _) => {
            println!(
                "  outer boundary: {:.3} m x {:.3} m, area {:.6} m²",
                result.outer.width, result.outer.height, result.outer.area
            );
            println!("  net area:       {:.6} m²", result.net_area);
            println!("  cut perimeter:  {:.3} m", result.total_perimeter);
            println!(
                "  containment:    {}",
                if result.validation.valid {
                    "all interior shapes inside the outer boundary"
                } else {
                    "VIOLATED"
                }
            );
            for violation in &result.validation.violations {
                println!("    {}: {}", violation.shape, violation.reason);
            }
            for warning in result.diagnostics() {
                println!("  warning: {}", warning);
            }
        }
        (None, Some(error)) => println!("  failed: {}", error),
        (None, None) => {}
    }
}

fn print_quote(quote: &QuoteBreakdown, quantity: u32) {
    println!("quote for {} piece(s):", quantity.max(1));
    println!(
        "  production price per unit:  ${:.2}",
        quote.production_price
    );
    println!("  margin applied:             {:.2}%", quote.margin_percent);
    println!(
        "  unit price before discount: ${:.2}",
        quote.unit_price_before_discount
    );
    println!(
        "  discount applied:           {:.2}%",
        quote.discount_percent
    );
    println!("  unit price:                 ${:.2}", quote.unit_price);
    println!("  total price:                ${:.2}", quote.total_price);
    println!("  margin per unit:            ${:.2}", quote.margin_per_unit);
    println!("  total margin:               ${:.2}", quote.total_margin);
    println!(
        "  profit per unit:            {:.2}%",
        quote.profit_percent_per_unit
    );
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Analyze { files, output } => {
            // Drawings are independent; analyze them in parallel
            let reports: Vec<FileReport> =
                files.par_iter().map(|path| analyze_file(path)).collect();

            for report in &reports {
                print_report(report);
            }

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&reports)?;
                std::fs::write(&path, json)?;
                println!("report written to {}", path.display());
            }

            let failed = reports.iter().filter(|r| r.error.is_some()).count();
            if failed > 0 {
                return Err(format!("{} drawing(s) failed to analyze", failed).into());
            }
            Ok(())
        }
        Commands::Quote {
            file,
            quantity,
            area_cost,
            cut_cost,
        } => {
            let entities = read_drawing(&file)?;
            entities.validate()?;
            let result = Analyzer::default().analyze(&entities)?;

            print_report(&FileReport {
                file: file.display().to_string(),
                result: Some(result.clone()),
                error: None,
            });

            let config = PricingConfig::default()
                .with_area_cost(area_cost)
                .with_cut_cost(cut_cost);
            let quote = compute_quote(&config, result.net_area, result.total_perimeter, quantity);
            print_quote(&quote, quantity);
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
