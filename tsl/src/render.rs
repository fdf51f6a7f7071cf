//! Console rendering of an itinerary.

use crate::domain::{Itinerary, Station};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per trip, one indented line per edge
    #[default]
    Text,
    /// The whole model as pretty-printed JSON
    Json,
}

/// Render an itinerary in the given format.
pub fn render(itinerary: &Itinerary, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(itinerary)),
        OutputFormat::Json => render_json(itinerary),
    }
}

/// Render an itinerary as text.
///
/// Each trip prints its duration, then each edge prints on its own line:
///
/// ```text
/// (23 min)
///   [Duvbo : 10:00]      --buss 176-->     [Universitetet : 10:23]
/// (31 min)
///   [Duvbo : 10:04]      --Gång-->         [Sundbyberg : 10:09]
///   [Sundbyberg : 10:12] --pendeltåg 43--> [Karlberg : 10:18]
/// ```
///
/// Origins and travel kinds are padded to the widest in the whole
/// itinerary so the columns line up across trips.
pub fn render_text(itinerary: &Itinerary) -> String {
    let edges = || itinerary.iter().flat_map(|trip| trip.edges());
    let origin_width = edges()
        .map(|e| bracket(e.origin()).chars().count())
        .max()
        .unwrap_or(0);
    let arrow_width = edges().map(|e| arrow(e.kind()).chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for trip in itinerary {
        out.push_str(&format!("({} min)\n", trip.duration()));
        for edge in trip.edges() {
            out.push_str(&format!(
                "  {:<origin_width$} {:<arrow_width$} {}\n",
                bracket(edge.origin()),
                arrow(edge.kind()),
                bracket(edge.destination()),
            ));
        }
    }
    out
}

/// Render an itinerary as pretty JSON.
pub fn render_json(itinerary: &Itinerary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(itinerary)
}

fn bracket(station: &Station) -> String {
    format!("[{station}]")
}

fn arrow(kind: &str) -> String {
    format!("--{kind}-->")
}
