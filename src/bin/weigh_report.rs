use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::{Table, Tabled, settings::Style};

use weigh_in_candles::data::read_document;
use weigh_in_candles::utils::{format_date, format_delta, format_pct, format_weight};
use weigh_in_candles::{CandlestickPoint, TransformResult, transform_weigh_ins};

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize a weigh-in JSON document as candles and trend stats")]
struct ReportArgs {
    /// Weigh-in JSON file (reads stdin when omitted or `-`)
    file: Option<PathBuf>,

    /// Print the raw transform result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Tabled)]
struct CandleRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    close: String,
}

impl From<&CandlestickPoint> for CandleRow {
    fn from(c: &CandlestickPoint) -> Self {
        Self {
            date: format_date(c.time),
            open: format_weight(c.open),
            high: format_weight(c.high),
            low: format_weight(c.low),
            close: format_weight(c.close),
        }
    }
}

fn print_report(result: &TransformResult) {
    if result.has_errors() {
        println!("Fix these issues:");
        for message in result.error_messages() {
            println!("  - {}", message);
        }
        return;
    }

    if !result.warnings.is_empty() {
        println!("Warnings:");
        for message in result.warning_messages() {
            println!("  - {}", message);
        }
        println!();
    }

    let rows: Vec<CandleRow> = result.candles.iter().map(CandleRow::from).collect();
    println!("{}", Table::new(rows).with(Style::rounded()));

    let s = &result.summary;
    println!("Trend:        {}", s.direction.label());
    println!(
        "Net Change:   {} ({})",
        format_delta(s.net_change),
        format_pct(s.net_change_pct)
    );
    println!(
        "7-Day Change: {} ({})",
        format_delta(s.rolling_change),
        format_pct(s.rolling_change_pct)
    );
    println!("Entries:      {}", result.entry_count());
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = ReportArgs::parse();
    let input = read_document(args.file.as_deref())?;
    let result = transform_weigh_ins(&input);

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", json);
    } else {
        print_report(&result);
    }

    Ok(if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
