//! Output channels.
//!
//! `show`, `error` and `alert` write to three independent channels. Where
//! that output goes is the host's choice:
//! - Stdout: `show` to stdout, `error` and `alert` to stderr
//! - Buffer: recorded as [`OutputEvent`]s for tests and embedding hosts
//!
//! Uses enum dispatch instead of trait objects.

use std::fmt;
use std::sync::Arc;

use kq_ir::PrintKind;
use parking_lot::Mutex;

/// Destination channel of one piece of output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// `show`
    Info,
    /// `error`
    Error,
    /// `alert`
    Warning,
}

impl From<PrintKind> for Channel {
    fn from(kind: PrintKind) -> Self {
        match kind {
            PrintKind::Show => Channel::Info,
            PrintKind::Error => Channel::Error,
            PrintKind::Alert => Channel::Warning,
        }
    }
}

/// One line written by the program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputEvent {
    pub channel: Channel,
    pub text: String,
}

impl fmt::Display for OutputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.channel {
            Channel::Info => f.write_str(&self.text),
            Channel::Error => write!(f, "error: {}", self.text),
            Channel::Warning => write!(f, "warning: {}", self.text),
        }
    }
}

#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn emit(&self, channel: Channel, text: &str) {
        match channel {
            Channel::Info => println!("{text}"),
            Channel::Error => eprintln!("{text}"),
            Channel::Warning => eprintln!("warning: {text}"),
        }
    }
}

/// Records every line in order.
#[derive(Default)]
pub struct BufferPrintHandler {
    events: Mutex<Vec<OutputEvent>>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler::default()
    }

    pub fn emit(&self, channel: Channel, text: &str) {
        self.events.lock().push(OutputEvent {
            channel,
            text: text.to_string(),
        });
    }

    pub fn events(&self) -> Vec<OutputEvent> {
        self.events.lock().clone()
    }

    /// Drain everything recorded so far.
    pub fn take_events(&self) -> Vec<OutputEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    pub fn emit(&self, channel: Channel, text: &str) {
        match self {
            Self::Stdout(h) => h.emit(channel, text),
            Self::Buffer(h) => h.emit(channel, text),
        }
    }

    /// Recorded events; empty for stdout.
    pub fn take_events(&self) -> Vec<OutputEvent> {
        match self {
            Self::Stdout(_) => Vec::new(),
            Self::Buffer(h) => h.take_events(),
        }
    }

    /// Lines recorded on one channel, without draining.
    pub fn lines(&self, channel: Channel) -> Vec<String> {
        match self {
            Self::Stdout(_) => Vec::new(),
            Self::Buffer(h) => h
                .events()
                .into_iter()
                .filter(|event| event.channel == channel)
                .map(|event| event.text)
                .collect(),
        }
    }
}

/// Print handler shared between the interpreter and its host.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_keeps_order_across_channels() {
        let handler = buffer_handler();
        handler.emit(Channel::Info, "one");
        handler.emit(Channel::Warning, "two");
        handler.emit(Channel::Info, "three");

        assert_eq!(handler.lines(Channel::Info), vec!["one", "three"]);
        let events = handler.take_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].to_string(), "warning: two");
        assert!(handler.take_events().is_empty());
    }

    #[test]
    fn stdout_records_nothing() {
        let handler = stdout_handler();
        assert!(handler.take_events().is_empty());
        assert!(handler.lines(Channel::Error).is_empty());
    }

    #[test]
    fn print_kinds_map_to_channels() {
        assert_eq!(Channel::from(PrintKind::Show), Channel::Info);
        assert_eq!(Channel::from(PrintKind::Error), Channel::Error);
        assert_eq!(Channel::from(PrintKind::Alert), Channel::Warning);
    }
}
