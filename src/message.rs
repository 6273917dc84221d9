//! Severity-tagged notifications.
//!
//! [`Notifier`] builds a [`MessageOptions`] payload for each call and hands it to a
//! [`MessageDisplay`], which owns rendering, stacking and dismissal.

use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Info,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }

    /// Text shown when the caller gives no message
    pub fn default_message(self) -> &'static str {
        match self {
            Severity::Success => "成功",
            Severity::Warning => "警告",
            Severity::Info => "提示",
            Severity::Error => "异常",
        }
    }
}

/// Payload accepted by a display: `{ showClose, message, type? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOptions {
    pub show_close: bool,
    pub message: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Severity>,
}

/// The surface that actually renders a notification
pub trait MessageDisplay {
    fn show(&mut self, options: MessageOptions);
}

impl<D: MessageDisplay + ?Sized> MessageDisplay for &mut D {
    fn show(&mut self, options: MessageOptions) {
        (**self).show(options)
    }
}

/// Four-severity facade over a [`MessageDisplay`].
pub struct Notifier<D: MessageDisplay> {
    display: D,
}

impl<D: MessageDisplay> Notifier<D> {
    pub fn new(display: D) -> Self {
        Self { display }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    pub fn success(&mut self, message: Option<&str>) {
        self.emit(Severity::Success, message, true);
    }

    pub fn warning(&mut self, message: Option<&str>) {
        self.emit(Severity::Warning, message, true);
    }

    /// Unlike the other three, info messages carry no `type` tag.
    pub fn info(&mut self, message: Option<&str>) {
        self.emit(Severity::Info, message, false);
    }

    pub fn error(&mut self, message: Option<&str>) {
        self.emit(Severity::Error, message, true);
    }

    pub fn notify(&mut self, severity: Severity, message: Option<&str>) {
        match severity {
            Severity::Success => self.success(message),
            Severity::Warning => self.warning(message),
            Severity::Info => self.info(message),
            Severity::Error => self.error(message),
        }
    }

    fn emit(&mut self, severity: Severity, message: Option<&str>, tagged: bool) {
        let options = build_options(severity, message, tagged);
        tracing::debug!(severity = severity.as_str(), text = %options.message, "showing message");
        self.display.show(options);
    }
}

fn build_options(severity: Severity, message: Option<&str>, tagged: bool) -> MessageOptions {
    let message = match message {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => severity.default_message().to_string(),
    };
    MessageOptions {
        show_close: true,
        message,
        kind: tagged.then_some(severity),
    }
}

/// Payload the facade would send for `severity`, without a display
pub fn options_for(severity: Severity, message: Option<&str>) -> MessageOptions {
    build_options(severity, message, severity != Severity::Info)
}

/// Writes one line per message, prefixed with `[type]` when the payload has one
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalDisplay<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> MessageDisplay for TerminalDisplay<W> {
    fn show(&mut self, options: MessageOptions) {
        let line = match options.kind {
            Some(kind) => format!("[{}] {}", kind.as_str(), options.message),
            None => options.message,
        };
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!(error = %e, "failed to write message");
        }
    }
}
