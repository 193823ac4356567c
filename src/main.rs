mod config;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Datelike, Local, Weekday};
use config::AppConfig;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// ─── Arguments ───────────────────────────────────────────────────────────────

const USAGE: &str = "\
usage: monthgrid [YEAR MONTH] [--events FILE] [--week-start DAY] [--config FILE]

Prints the month-view grid for YEAR/MONTH (default: the current month) as JSON.
FILE for --events is TOML when it ends in .toml, JSON otherwise; its top level
maps day of month to one event or a list of events.";

#[derive(Debug, Default, PartialEq)]
struct Args {
    year:       Option<String>,
    month:      Option<String>,
    events:     Option<PathBuf>,
    week_start: Option<Weekday>,
    config:     Option<PathBuf>,
    help:       bool,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut out = Args::default();
        let mut positional = Vec::new();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            match arg.as_str() {
                "-h" | "--help" => out.help = true,
                "--events"      => out.events = Some(flag_value(&mut it, "--events")?.into()),
                "--config"      => out.config = Some(flag_value(&mut it, "--config")?.into()),
                "--week-start"  => {
                    let day = flag_value(&mut it, "--week-start")?;
                    out.week_start = Some(
                        day.parse().map_err(|_| anyhow!("unknown weekday {day:?} for --week-start"))?,
                    );
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n\n{USAGE}"),
                _ => positional.push(arg),
            }
        }

        match <[String; 2]>::try_from(positional) {
            Ok([year, month]) => {
                out.year  = Some(year);
                out.month = Some(month);
            }
            Err(rest) if rest.is_empty() => {}
            Err(rest) => bail!("expected YEAR and MONTH, got {} positional argument(s)\n\n{USAGE}", rest.len()),
        }
        Ok(out)
    }
}

fn flag_value(it: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    it.next().ok_or_else(|| anyhow!("{flag} needs a value"))
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the JSON document.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let cfg = AppConfig::load(args.config.as_deref())?;
    let mut options = cfg.grid_options()?;
    if let Some(day) = args.week_start {
        options.week_start = day;
    }

    let today  = Local::now().date_naive();
    let year   = args.year.map(Value::String).unwrap_or_else(|| Value::from(today.year()));
    let month  = args.month.map(Value::String).unwrap_or_else(|| Value::from(today.month()));
    let events = args.events.as_deref().map(read_events).transpose()?;

    let calendar = monthgrid::generate_from_value(Some(&year), Some(&month), events.as_ref())?;
    let view = calendar.month_view(&options);
    tracing::info!("rendered {}-{:02}", calendar.year(), calendar.month());

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

// ─── Events file ─────────────────────────────────────────────────────────────

fn read_events(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading events from {}", path.display()))?;
    let events = parse_events(&text, path.extension().and_then(|e| e.to_str()))
        .with_context(|| format!("parsing events from {}", path.display()))?;
    tracing::debug!("read events from {}", path.display());
    Ok(events)
}

fn parse_events(text: &str, extension: Option<&str>) -> Result<Value> {
    match extension {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => {
            let table: toml::Table = text.parse()?;
            Ok(serde_json::to_value(table)?)
        }
        _ => Ok(serde_json::from_str(text)?),
    }
}
