//! Console output.
//!
//! Commands build a [`Report`]: the human lines and the JSON document for
//! the same result, plus whether it counts as success. Human text goes to
//! stderr, `--json` documents to stdout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Good,
    Warn,
    Bad,
}

impl Tone {
    fn paint(self, s: &str) -> String {
        match self {
            Tone::Plain => s.to_string(),
            Tone::Good => s.green().to_string(),
            Tone::Warn => s.yellow().to_string(),
            Tone::Bad => s.red().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Text(Tone, String),
    /// Indented and dimmed, under the previous line.
    Detail(String),
    Label(String, Tone, String),
}

impl Line {
    pub fn text(tone: Tone, s: impl Into<String>) -> Self {
        Line::Text(tone, s.into())
    }

    pub fn label(key: impl Into<String>, tone: Tone, value: impl Into<String>) -> Self {
        Line::Label(key.into(), tone, value.into())
    }

    fn render(&self) -> String {
        match self {
            Line::Text(tone, s) => tone.paint(s),
            Line::Detail(s) => format!("  {}", s.dimmed()),
            Line::Label(key, tone, value) => {
                format!("{} {}", format!("{key}:").bold(), tone.paint(value))
            }
        }
    }
}

/// One command result in both renderings.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub lines: Vec<Line>,
    pub json: Value,
    pub ok: bool,
}

impl Report {
    /// Print in the active mode; returns `ok` for the exit code.
    pub fn emit(&self) -> bool {
        if is_json() {
            json_output(&self.json);
        } else {
            for line in &self.lines {
                eprintln!("{}", line.render());
            }
        }
        self.ok
    }
}

pub fn success(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.green());
    }
}

pub fn label(key: &str, val: &str) {
    if !is_json() {
        eprintln!("{}", Line::label(key, Tone::Plain, val).render());
    }
}

pub fn json_output(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(_) => println!("{value}"),
    }
}

/// `--json` rendering of a command that failed before producing a result.
pub fn error_document(err: &anyhow::Error) -> Value {
    serde_json::json!({ "success": false, "error": format!("{err:#}") })
}

pub fn spinner(msg: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg} {elapsed:.dim}")
    {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Error with a follow-up hint. Uncolored in JSON mode so the message
/// embeds cleanly in the error document.
pub fn fail_with_hint(error: &str, hint: &str) -> anyhow::Error {
    if is_json() {
        anyhow::anyhow!("{error} (hint: {hint})")
    } else {
        anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_document_keeps_context_chain() {
        let err = anyhow::anyhow!("connection refused").context("calling verifyTx");
        let doc = error_document(&err);
        assert_eq!(doc["success"], false);
        assert_eq!(doc["error"], "calling verifyTx: connection refused");
    }

    #[test]
    fn label_render_contains_key_and_value() {
        let s = Line::label("network", Tone::Good, "5777").render();
        assert!(s.contains("network:"));
        assert!(s.contains("5777"));
    }
}
