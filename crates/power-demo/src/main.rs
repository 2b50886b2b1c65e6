// File: crates/power-demo/src/main.rs
// Summary: Demo loads subtotal rows from CSV and renders the generation-mix chart to SVG.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDateTime};
use power_chart_core::series::summary_window;
use power_chart_core::time::parse_timestamp;
use power_chart_core::{ChartRenderer, PresentationMode, RenderConfig, RenderRequest, SeriesRow, SeriesSource};
use serde::Deserialize;
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => RenderConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => RenderConfig::default(),
    };
    let mode = PresentationMode::try_from(args.plot_type)?;
    let request = RenderRequest::new(args.width, args.height, mode);
    let now = args.now.unwrap_or_else(|| Local::now().naive_local());

    let source = CsvSeriesSource::new(&args.input);
    let (start, end) = summary_window(now.date());
    let table = source
        .load_table(&start, &end)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    info!(rows = table.len(), %start, %end, "loaded series");
    if table.is_empty() {
        bail!("no rows inside {start}..{end}; check the CSV timestamps or pass --now");
    }

    let plot_info = table.plot_info()?;
    println!("Latest {}: {} total generation", plot_info.timestamp, plot_info.total_generation);

    let renderer = ChartRenderer::new(config);
    let out = renderer.render_at(&table, &request, now)?;
    println!("Wrote {}", out.display());

    if let Some(path) = &args.summary {
        let json = serde_json::to_string_pretty(&table)?;
        std::fs::write(path, json).with_context(|| format!("failed to write '{}'", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

#[derive(Debug)]
struct Args {
    input: PathBuf,
    config: Option<PathBuf>,
    width: i32,
    height: i32,
    plot_type: u8,
    now: Option<NaiveDateTime>,
    summary: Option<PathBuf>,
}

impl Args {
    fn parse(mut it: impl Iterator<Item = String>) -> Result<Self> {
        let defaults = RenderRequest::default();
        let mut args = Args {
            input: PathBuf::new(),
            config: None,
            width: defaults.width,
            height: defaults.height,
            plot_type: u8::from(defaults.mode),
            now: None,
            summary: None,
        };
        let mut input = None;
        while let Some(arg) = it.next() {
            let mut value = |name: &str| it.next().with_context(|| format!("{name} needs a value"));
            match arg.as_str() {
                "--config" => args.config = Some(PathBuf::from(value("--config")?)),
                "--width" => args.width = value("--width")?.parse().context("--width must be an integer")?,
                "--height" => args.height = value("--height")?.parse().context("--height must be an integer")?,
                "--plot-type" => {
                    args.plot_type = value("--plot-type")?.parse().context("--plot-type must be 0..=3")?
                }
                "--now" => {
                    let raw = value("--now")?;
                    let ts = parse_timestamp(&raw).with_context(|| format!("bad --now '{raw}'"))?;
                    args.now = Some(ts);
                }
                "--summary" => args.summary = Some(PathBuf::from(value("--summary")?)),
                flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
                _ if input.is_none() => input = Some(PathBuf::from(&arg)),
                _ => warn!(%arg, "ignoring extra positional argument"),
            }
        }
        args.input = input.context(
            "usage: power-demo <rows.csv> [--config f.toml] [--width N] [--height N] [--plot-type N] [--now TS] [--summary out.json]",
        )?;
        Ok(args)
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    timestamp: String,
    category: String,
    generation: f64,
}

/// Reads a CSV dump of subtotal rows with a `timestamp,category,generation` header.
struct CsvSeriesSource {
    path: PathBuf,
}

impl CsvSeriesSource {
    fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }
}

impl SeriesSource for CsvSeriesSource {
    fn subtotal_rows(&self, start: &str, end: &str) -> power_chart_core::Result<Vec<SeriesRow>> {
        let mut rdr = csv::Reader::from_path(&self.path).map_err(csv_to_io)?;
        let mut rows = Vec::new();
        for rec in rdr.deserialize::<CsvRow>() {
            let rec = rec.map_err(csv_to_io)?;
            if rec.timestamp.as_str() < start || rec.timestamp.as_str() > end {
                continue;
            }
            rows.push(SeriesRow { timestamp: rec.timestamp, category: rec.category, generation: rec.generation });
        }
        rows.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(rows)
    }
}

fn csv_to_io(err: csv::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, err)
}
