use std::collections::VecDeque;

pub trait DownloadTrigger {
    /// Initiate a file save; called once per scheduled download after its
    /// delay has elapsed.
    fn begin(&mut self, filename: &str);
}

#[derive(Default)]
pub struct RecordingDownloadTrigger {
    started: Vec<String>,
}

impl RecordingDownloadTrigger {
    pub fn started(&self) -> &[String] {
        &self.started
    }
}

impl DownloadTrigger for RecordingDownloadTrigger {
    fn begin(&mut self, filename: &str) {
        self.started.push(filename.to_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingDownload {
    filename: String,
    due_at_ms: u64,
}

/// Fire-and-forget delayed downloads. Entries are not cancellable and fire
/// in scheduling order once their deadline passes.
#[derive(Clone, Debug, Default)]
pub struct DownloadScheduler {
    pending: VecDeque<PendingDownload>,
    fired_total: u64,
}

impl DownloadScheduler {
    pub fn schedule(&mut self, filename: impl Into<String>, delay_ms: u64, now_ms: u64) {
        let entry = PendingDownload {
            filename: filename.into(),
            due_at_ms: now_ms.saturating_add(delay_ms),
        };
        log::debug!("download scheduled: {} at {}ms", entry.filename, entry.due_at_ms);
        self.pending.push_back(entry);
    }

    /// Fire every entry whose deadline has passed; returns how many fired.
    pub fn poll_due(&mut self, now_ms: u64, trigger: &mut dyn DownloadTrigger) -> usize {
        let mut fired = 0usize;
        let mut remaining = VecDeque::with_capacity(self.pending.len());

        while let Some(entry) = self.pending.pop_front() {
            if entry.due_at_ms <= now_ms {
                trigger.begin(&entry.filename);
                fired += 1;
            } else {
                remaining.push_back(entry);
            }
        }

        self.pending = remaining;
        self.fired_total += fired as u64;
        fired
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn fired_total(&self) -> u64 {
        self.fired_total
    }
}
