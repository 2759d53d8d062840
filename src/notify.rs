//! User-facing notification channel: a deferred alert and a confirm gate.

use std::{
    cell::RefCell,
    io::{self, Write},
    time::Duration,
};

use tokio::runtime::Handle;

pub trait Notifier {
    /// Shows `message` once `delay` has passed. Must return immediately.
    fn schedule_alert(&self, message: &str, delay: Duration);

    /// Asks the visitor a yes/no question.
    fn confirm(&self, message: &str) -> bool;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn schedule_alert(&self, message: &str, delay: Duration) {
        (**self).schedule_alert(message, delay);
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Headless notifier: keeps scheduled alerts and asked questions in memory and
/// answers every confirmation with a fixed reply.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    answer: bool,
    alerts: RefCell<Vec<(String, Duration)>>,
    questions: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<(String, Duration)> {
        self.alerts.borrow().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn schedule_alert(&self, message: &str, delay: Duration) {
        self.alerts.borrow_mut().push((message.to_string(), delay));
    }

    fn confirm(&self, message: &str) -> bool {
        self.questions.borrow_mut().push(message.to_string());
        self.answer
    }
}

/// Prints alerts from a tokio task and reads confirmations from stdin.
pub struct TerminalNotifier {
    handle: Handle,
    delay_override: Option<Duration>,
}

impl TerminalNotifier {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            delay_override: None,
        }
    }

    /// Replaces the delay callers ask for, when set.
    pub fn with_delay(mut self, delay: Option<Duration>) -> Self {
        self.delay_override = delay;
        self
    }
}

impl Notifier for TerminalNotifier {
    fn schedule_alert(&self, message: &str, delay: Duration) {
        let delay = self.delay_override.unwrap_or(delay);
        let message = message.to_string();
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            println!("\n{message}");
        });
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if let Err(err) = io::stdout().flush() {
            log::warn!("could not flush prompt: {err}");
        }
        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(err) => {
                log::warn!("could not read confirmation: {err}");
                false
            }
        }
    }
}

pub(crate) fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
