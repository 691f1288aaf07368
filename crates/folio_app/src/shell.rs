use std::io::{self, Write};

use folio_core::complete::{complete, Completion};
use folio_core::history::HistoryBuffer;
use folio_core::model::PROMPT;
use folio_rt::clock::SystemClock;
use folio_rt::download::RecordingDownloadTrigger;
use folio_rt::panel::{PanelManager, SingleActivePanelManager};
use folio_rt::render::{BufferRenderer, Renderer};

use crate::session::SessionCoordinator;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// The three discrete navigation signals plus plain submission, decoded
/// from one stdin line: `ESC[A`/`ESC[B` arrow sequences navigate history,
/// a trailing TAB asks for completion, anything else submits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSignal {
    Submit(String),
    HistoryPrevious,
    HistoryNext,
    Complete(String),
}

pub fn parse_input_signal(raw: &str) -> InputSignal {
    match raw {
        "\x1b[A" => InputSignal::HistoryPrevious,
        "\x1b[B" => InputSignal::HistoryNext,
        _ => match raw.strip_suffix('\t') {
            Some(partial) => InputSignal::Complete(partial.to_string()),
            None => InputSignal::Submit(raw.to_string()),
        },
    }
}

/// The pending input line: history navigation fills it, a single-match
/// completion replaces it.
#[derive(Clone, Debug, Default)]
pub struct InputLine {
    pending: String,
}

impl InputLine {
    pub fn as_str(&self) -> &str {
        &self.pending
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn apply_previous(&mut self, history: &mut HistoryBuffer) {
        if let Some(entry) = history.previous() {
            self.pending = entry.to_string();
        }
    }

    pub fn apply_next(&mut self, history: &mut HistoryBuffer) {
        match history.next() {
            Some(entry) => self.pending = entry.to_string(),
            None => self.pending.clear(),
        }
    }

    /// Returns the informational line to display when several verbs match.
    pub fn apply_completion(&mut self, partial: &str) -> Option<String> {
        self.pending = partial.to_string();
        match complete(partial) {
            Completion::NoMatch => None,
            Completion::Single(verb) => {
                self.pending = verb.to_string();
                None
            }
            Completion::Multiple(matches) => Some(matches.join("  ")),
        }
    }
}

pub fn run_interactive_shell() -> Result<(), ShellError> {
    let mut session = SessionCoordinator::new();
    let mut renderer = BufferRenderer::default();
    let mut panels = SingleActivePanelManager::default();
    let mut trigger = RecordingDownloadTrigger::default();
    let clock = SystemClock::new();
    let mut input = InputLine::default();
    let mut status = String::from("Session ready. Type 'help' for available commands.");

    loop {
        print!("\x1B[2J\x1B[H");
        for line in renderer.lines() {
            println!("{line}");
        }
        println!("-- {status}");
        print!("{PROMPT}{}", input.as_str());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let raw = line.trim_end_matches(['\r', '\n']);

        match parse_input_signal(raw) {
            InputSignal::Submit(text) => {
                // Enter on an empty line after history navigation submits
                // the recalled entry.
                let submitted = if text.is_empty() && !input.as_str().is_empty() {
                    input.as_str().to_string()
                } else {
                    text
                };
                let report = session.submit_line(
                    &submitted,
                    &mut renderer,
                    &mut panels,
                    &clock,
                    clock.now_ms(),
                );
                input.clear();
                status = format!(
                    "lines={} panels_opened={} downloads_scheduled={} active={}",
                    report.lines_rendered,
                    report.panels_opened,
                    report.downloads_scheduled,
                    panels.active().label()
                );
            }
            InputSignal::HistoryPrevious => input.apply_previous(session.history_mut()),
            InputSignal::HistoryNext => input.apply_next(session.history_mut()),
            InputSignal::Complete(partial) => {
                if let Some(info) = input.apply_completion(&partial) {
                    renderer.append_line(&info);
                }
            }
        }

        let fired = session.poll_downloads(clock.now_ms(), &mut trigger);
        if fired > 0 {
            if let Some(filename) = trigger.started().last() {
                status = format!("download started: {filename}");
            }
        }
    }

    Ok(())
}
