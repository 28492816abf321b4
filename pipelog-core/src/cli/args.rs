use crate::conf::{ConfigLayer, FieldsLayer};
use crate::logging::LogFormat;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Path to request duration [default: duration]
    #[arg(short = 'd', long)]
    pub duration: Option<String>,

    /// Path to request uri [default: uri]
    #[arg(short = 'u', long)]
    pub uri: Option<String>,

    /// Path to request method [default: method]
    #[arg(short = 'm', long)]
    pub method: Option<String>,

    /// Path to request timestamp [default: time]
    #[arg(short = 't', long)]
    pub time: Option<String>,

    /// JSON path to apply to all other fields [default: $]
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Log file to be parsed (reads stdin when omitted)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Fail if an error occurs while parsing a single line
    #[arg(short = 'F', long, overrides_with = "no_fail")]
    pub fail: bool,

    /// Skip lines that fail to parse, even if the profile sets fail_fast
    #[arg(long, overrides_with = "fail")]
    pub no_fail: bool,

    /// If a UUID is found in the URI, hide it and merge URIs with same structure
    #[arg(short = 'U', long, overrides_with = "no_merge_uuid")]
    pub merge_uuid: bool,

    /// Keep UUIDs in URIs, even if the profile sets mask_identifiers
    #[arg(long, overrides_with = "merge_uuid")]
    pub no_merge_uuid: bool,

    /// Number of endpoints shown, 0 for all [default: 20]
    #[arg(long)]
    pub top: Option<usize>,

    /// Show the standard deviation column, even if the profile hides it
    #[arg(long, overrides_with = "no_stddev")]
    pub stddev: bool,

    /// Hide the standard deviation column
    #[arg(long, overrides_with = "stddev")]
    pub no_stddev: bool,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// HCL profile with default settings
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Diagnostics format on stderr (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormatArg>,
}

impl AnalyzeArgs {
    /// The settings given on the command line. Flags that were not passed
    /// stay unset so that a profile can provide them. Of a flag and its
    /// negation, the one given last wins.
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            namespace: self.namespace.clone(),
            fail_fast: toggle(self.fail, self.no_fail),
            mask_identifiers: toggle(self.merge_uuid, self.no_merge_uuid),
            top: self.top,
            show_stddev: toggle(self.stddev, self.no_stddev),
            fields: FieldsLayer {
                duration: self.duration.clone(),
                uri: self.uri.clone(),
                method: self.method.clone(),
                timestamp: self.time.clone(),
            },
        }
    }
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
