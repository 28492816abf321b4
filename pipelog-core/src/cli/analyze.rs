use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::conf::{ConfigLayer, PipelogConfig, load_profile};
use crate::render::{TableStyle, render_json, render_table};
use crate::scan::{Analysis, Reports, scan};
use anyhow::{Result, anyhow};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};

const NO_INPUT_HINT: &str =
    "You should either pipe something into pipelog or specify an existing file to parse";

/// Profile first, then command-line flags on top.
pub fn resolve_config(args: &AnalyzeArgs) -> Result<PipelogConfig> {
    let profile = match &args.config {
        Some(path) => load_profile(path)?,
        None => ConfigLayer::default(),
    };

    Ok(PipelogConfig::from_layer(profile.merge(args.layer()))?)
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    let analysis = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| anyhow!("failed to open {}: {e}", path.display()))?;
            scan(BufReader::new(file), &config)?
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("{NO_INPUT_HINT}");
                return Ok(());
            }
            scan(stdin.lock(), &config)?
        }
    };

    write_reports(&analysis, &config, args.format)
}

fn write_reports(analysis: &Analysis, config: &PipelogConfig, format: OutputFormat) -> Result<()> {
    let reports = analysis.reports(&config.report);
    let mut stdout = io::stdout().lock();

    match format {
        OutputFormat::Table => {
            let style = TableStyle {
                show_stddev: config.report.show_stddev,
                color: stdout.is_terminal(),
            };
            write_tables(&mut stdout, &reports, style)?;
        }
        OutputFormat::Json => {
            writeln!(stdout, "{}", render_json(&reports)?)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn write_tables(out: &mut impl Write, reports: &Reports, style: TableStyle) -> io::Result<()> {
    write!(out, "{}", render_table(&reports.by_day, style))?;
    writeln!(out)?;
    write!(out, "{}", render_table(&reports.by_endpoint, style))
}
