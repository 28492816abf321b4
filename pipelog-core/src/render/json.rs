use crate::scan::Reports;

/// Both reports as one pretty-printed JSON document.
pub fn render_json(reports: &Reports) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
