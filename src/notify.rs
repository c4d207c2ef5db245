//! User-facing error notification.

/// Surface for messages the user must see, e.g. an editor's modal dialog.
pub trait Notifier {
    fn error(&mut self, message: &str);
}

/// Prints notifications to stderr.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Keeps every notification, for callers that want to show them later.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn error(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
