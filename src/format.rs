//! Rendering of note tables for the command line.

use crate::config::OutputConfig;
use crate::error::EmsError;
use crate::note::Note;
use serde::{Deserialize, Serialize};

/// Output format of a rendered note table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per note
    #[default]
    Text,
    Json,
    Yaml,
}

/// A note with its absolute frequency, as written by the json and yaml formats.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct NoteRecord {
    ratio: f32,
    duration_ms: u32,
    frequency: f32,
}

impl NoteRecord {
    fn new(note: &Note, reference_hz: f32) -> Self {
        Self {
            ratio: note.ratio,
            duration_ms: note.duration_ms,
            frequency: note.frequency(reference_hz),
        }
    }
}

/// Render `notes` in the configured format.
///
/// # Example
/// ```
/// use ems::{compile, render, OutputConfig};
///
/// let notes = compile("6, 0,");
/// let text = render(&notes, &OutputConfig::default()).unwrap();
/// assert_eq!(
///     text,
///     "ratio: 1, duration: 500ms, freq: 440.00Hz\nratio: 0, duration: 500ms, freq: rest\n"
/// );
/// ```
pub fn render(notes: &[Note], config: &OutputConfig) -> Result<String, EmsError> {
    match config.format {
        OutputFormat::Text => Ok(render_text(notes, config.reference_hz)),
        OutputFormat::Json => serde_json::to_string_pretty(&records(notes, config.reference_hz))
            .map(|mut out| {
                out.push('\n');
                out
            })
            .map_err(|e| EmsError::Serialize(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(&records(notes, config.reference_hz))
            .map_err(|e| EmsError::Serialize(e.to_string())),
    }
}

fn records(notes: &[Note], reference_hz: f32) -> Vec<NoteRecord> {
    notes
        .iter()
        .map(|note| NoteRecord::new(note, reference_hz))
        .collect()
}

fn render_text(notes: &[Note], reference_hz: f32) -> String {
    let mut out = String::new();
    for note in notes {
        let frequency = if note.is_rest() {
            "rest".to_string()
        } else {
            format!("{:.2}Hz", note.frequency(reference_hz))
        };
        out.push_str(&format!(
            "ratio: {}, duration: {}ms, freq: {}\n",
            note.ratio, note.duration_ms, frequency
        ));
    }
    out
}
