use folio_core::history::HistoryBuffer;
use folio_core::interpreter::Interpreter;
use folio_core::model::{Clock, SideEffect};
use folio_rt::download::{DownloadScheduler, DownloadTrigger};
use folio_rt::panel::PanelManager;
use folio_rt::render::Renderer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitReport {
    pub lines_rendered: usize,
    pub panels_opened: usize,
    pub downloads_scheduled: usize,
    pub output_cleared: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub commands_processed: u64,
    pub history_len: usize,
    pub pending_downloads: usize,
}

/// Owns the per-session state (history, interpreter, download queue) and
/// applies interpreter side effects to the collaborators, strictly in the
/// order commands are submitted.
#[derive(Default)]
pub struct SessionCoordinator {
    history: HistoryBuffer,
    interpreter: Interpreter,
    downloads: DownloadScheduler,
    commands_processed: u64,
}

impl SessionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one submitted line to completion: interpret against the history
    /// so far, apply effects, render output, then record the line.
    pub fn submit_line(
        &mut self,
        raw: &str,
        renderer: &mut dyn Renderer,
        panels: &mut dyn PanelManager,
        clock: &dyn Clock,
        now_ms: u64,
    ) -> SubmitReport {
        let response = self.interpreter.run(raw, &self.history, clock);
        let mut report = SubmitReport::default();

        for effect in &response.effects {
            match effect {
                SideEffect::ClearOutput => {
                    renderer.clear();
                    report.output_cleared = true;
                }
                SideEffect::OpenPanel(panel) => {
                    panels.open(*panel);
                    report.panels_opened += 1;
                }
                SideEffect::ScheduleDownload { filename, delay_ms } => {
                    self.downloads.schedule(filename.clone(), *delay_ms, now_ms);
                    report.downloads_scheduled += 1;
                }
            }
        }

        for line in &response.lines {
            renderer.append_line(line);
        }
        report.lines_rendered = response.lines.len();

        self.history.submit(raw);
        self.commands_processed += 1;
        log::debug!(
            "submit #{}: {} lines, {} effects",
            self.commands_processed,
            response.lines.len(),
            response.effects.len()
        );

        report
    }

    pub fn poll_downloads(&mut self, now_ms: u64, trigger: &mut dyn DownloadTrigger) -> usize {
        self.downloads.poll_due(now_ms, trigger)
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryBuffer {
        &mut self.history
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            commands_processed: self.commands_processed,
            history_len: self.history.len(),
            pending_downloads: self.downloads.pending(),
        }
    }
}
