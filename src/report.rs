use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::types::ResultRecord;

const LABEL_WIDTH: usize = 27;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Three labelled lines: log rate, wear rate, savings.
    #[default]
    Text,
    /// Pretty-printed JSON of the full result, intermediates included.
    Json,
}

pub fn render(result: &ResultRecord, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result),
    }
}

pub fn render_text(result: &ResultRecord) -> String {
    let mut out = String::new();
    push_line(&mut out, "log_rate:", result.log_rate(), "B/s");
    push_line(&mut out, "wear_rate:", result.wear_rate(), "B/s");
    push_line(&mut out, "savings:", result.savings_percent(), "%");
    out
}

pub fn render_json(result: &ResultRecord) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}

fn push_line(out: &mut String, label: &str, value: f64, unit: &str) {
    out.push_str(&format!("{label:<width$}{value:5.2} {unit}\n", width = LABEL_WIDTH));
}
