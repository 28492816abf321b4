use crate::conf::error::ConfigError;
use crate::extract::FieldPath;
use crate::record::{Field, RecordSchema};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION_PATH: &str = "duration";
pub const DEFAULT_URI_PATH: &str = "uri";
pub const DEFAULT_METHOD_PATH: &str = "method";
pub const DEFAULT_TIMESTAMP_PATH: &str = "time";
pub const DEFAULT_NAMESPACE: &str = "$";
pub const DEFAULT_TOP: usize = 20;

/// One source of settings. Every key is optional so that layers can be
/// stacked: defaults, then a profile file, then command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub namespace: Option<String>,
    pub fail_fast: Option<bool>,
    pub mask_identifiers: Option<bool>,
    pub top: Option<usize>,
    pub show_stddev: Option<bool>,

    #[serde(default)]
    pub fields: FieldsLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldsLayer {
    pub duration: Option<String>,
    pub uri: Option<String>,
    pub method: Option<String>,
    pub timestamp: Option<String>,
}

impl ConfigLayer {
    /// Values set in `over` win.
    pub fn merge(self, over: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            namespace: over.namespace.or(self.namespace),
            fail_fast: over.fail_fast.or(self.fail_fast),
            mask_identifiers: over.mask_identifiers.or(self.mask_identifiers),
            top: over.top.or(self.top),
            show_stddev: over.show_stddev.or(self.show_stddev),
            fields: FieldsLayer {
                duration: over.fields.duration.or(self.fields.duration),
                uri: over.fields.uri.or(self.fields.uri),
                method: over.fields.method.or(self.fields.method),
                timestamp: over.fields.timestamp.or(self.fields.timestamp),
            },
        }
    }
}

/// Presentation settings for the two reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Endpoint rows shown; 0 shows every endpoint.
    pub top: usize,
    pub show_stddev: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            show_stddev: true,
        }
    }
}

/// Settings for one run, fixed before the first line is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelogConfig {
    pub schema: RecordSchema,
    pub fail_fast: bool,
    pub mask_identifiers: bool,
    pub report: ReportOptions,
}

impl PipelogConfig {
    /// Fills unset keys with defaults and compiles the field paths.
    pub fn from_layer(layer: ConfigLayer) -> Result<Self, ConfigError> {
        let namespace = layer
            .namespace
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        let fields = layer.fields;

        let compile = |field: Field, path: Option<String>, default: &str| {
            let path = path.unwrap_or_else(|| default.to_string());
            FieldPath::with_namespace(&namespace, &path)
                .map_err(|source| ConfigError::InvalidFieldPath { field, source })
        };

        let schema = RecordSchema {
            duration: compile(Field::Duration, fields.duration, DEFAULT_DURATION_PATH)?,
            uri: compile(Field::Uri, fields.uri, DEFAULT_URI_PATH)?,
            method: compile(Field::Method, fields.method, DEFAULT_METHOD_PATH)?,
            timestamp: compile(Field::Timestamp, fields.timestamp, DEFAULT_TIMESTAMP_PATH)?,
        };

        Ok(Self {
            schema,
            fail_fast: layer.fail_fast.unwrap_or(false),
            mask_identifiers: layer.mask_identifiers.unwrap_or(false),
            report: ReportOptions {
                top: layer.top.unwrap_or(DEFAULT_TOP),
                show_stddev: layer.show_stddev.unwrap_or(true),
            },
        })
    }
}

impl Default for PipelogConfig {
    fn default() -> Self {
        Self::from_layer(ConfigLayer::default()).expect("default field paths compile")
    }
}
