//! Text, CSV and JSON rendering of a run summary.

use attrition_core::enums::Outcome;
use attrition_core::state::RunSummary;

use crate::args::OutputFormat;

pub fn render(summary: &RunSummary, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Result => Ok(format_result(summary)),
        OutputFormat::Full => Ok(format_full(summary)),
        OutputFormat::Json => serde_json::to_string_pretty(summary),
    }
}

/// Step count, outcome line and the final strength of each side.
pub fn format_result(summary: &RunSummary) -> String {
    let [blue_name, red_name] = &summary.names;
    let result = match summary.outcome {
        Outcome::BlueVictory | Outcome::RedVictory => {
            format!("{} victory", summary.winner_name().unwrap_or_default())
        }
        Outcome::MutualDestruction => "both forces down".to_string(),
        Outcome::Undecided => "no winner yet".to_string(),
    };
    format!(
        "steps: {}\nresult: {}\n{} force strength: {}\n{} force strength: {}",
        summary.steps, result, blue_name, summary.blue_final, red_name, summary.red_final
    )
}

/// CSV: a header of both names, then one `blue,red` row per step.
pub fn format_full(summary: &RunSummary) -> String {
    let [blue_name, red_name] = &summary.names;
    let mut out = format!("{blue_name},{red_name}");
    for (blue, red) in summary.series() {
        out.push_str(&format!("\n{blue},{red}"));
    }
    out
}
