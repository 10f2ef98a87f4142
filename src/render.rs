//! Output rendering for expanded schedules

use crate::error::CliError;
use crate::schedule::Schedule;

/// Width of the label column in table output
pub const LABEL_WIDTH: usize = 14;

/// Output format for an expanded schedule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One aligned line per field, then the command
    #[default]
    Table,
    /// A single JSON object
    Json,
}

impl OutputFormat {
    pub fn render(self, schedule: &Schedule) -> Result<String, CliError> {
        match self {
            OutputFormat::Table => Ok(table(schedule)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(schedule)?),
        }
    }
}

/// Render a schedule as a label/value table
///
/// ```text
/// minute        0 15 30 45
/// hour          0
/// ...
/// command       /usr/bin/find
/// ```
pub fn table(schedule: &Schedule) -> String {
    let mut out = String::new();
    for (spec, values) in schedule.fields() {
        let joined = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("{:<width$}{}\n", spec.name, joined, width = LABEL_WIDTH));
    }
    out.push_str(&format!(
        "{:<width$}{}\n",
        "command",
        schedule.command(),
        width = LABEL_WIDTH
    ));
    out
}
