use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::Table;
use polars::prelude::DataFrame;

use trendlens_core::aggregate::{CategoryShare, CorrelationMatrix, HourlyViews};
use trendlens_core::{ingest, sample};

pub fn handle_analyze(file: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let df = load_dataset(file.as_deref())?;
    let analysis = trendlens_core::run(&df)?;

    println!("{} videos after cleaning\n", analysis.rows);
    print_distribution(&analysis.category_distribution);
    print_correlation(&analysis.correlation);
    print_hourly(&analysis.hourly_views);
    println!(
        "{} (views, likes) pairs available for scatter plotting",
        analysis.scatter.len()
    );

    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(&analysis)?)?;
        println!("analysis written to {}", path.display());
    }

    Ok(())
}

fn load_dataset(file: Option<&Path>) -> Result<DataFrame> {
    match file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(content) => {
                println!("Loaded {}", path.display());
                Ok(ingest::read_csv(&content)?)
            }
            Err(err) => {
                eprintln!(
                    "WARNING: could not read {}: {}. Using built-in sample data.",
                    path.display(),
                    err
                );
                Ok(sample::sample_dataset()?)
            }
        },
        None => {
            eprintln!("No input file given. Using built-in sample data.");
            Ok(sample::sample_dataset()?)
        }
    }
}

fn print_distribution(shares: &[CategoryShare]) {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Videos", "Share (%)"]);
    for share in shares {
        table.add_row(vec![
            share.category.clone(),
            share.count.to_string(),
            format!("{:.1}", share.percent),
        ]);
    }
    println!("Category distribution\n{table}\n");
}

fn print_correlation(matrix: &CorrelationMatrix) {
    let mut table = Table::new();
    let mut header = vec![String::new()];
    header.extend(matrix.fields.iter().map(|field| field.to_string()));
    table.set_header(header);

    for (row, field) in matrix.fields.iter().enumerate() {
        let mut cells = vec![field.to_string()];
        cells.extend(matrix.values[row].iter().map(|value| format!("{value:.3}")));
        table.add_row(cells);
    }
    println!("Correlation between views, likes, and comments\n{table}\n");
}

fn print_hourly(hourly: &[HourlyViews]) {
    let mut table = Table::new();
    table.set_header(vec!["Hour", "Average views"]);
    for entry in hourly {
        table.add_row(vec![
            entry.hour.to_string(),
            format!("{:.0}", entry.mean_views),
        ]);
    }
    println!("Average views by publish hour\n{table}\n");
}
