use folio_core::model::Panel;

pub trait PanelManager {
    fn open(&mut self, panel: Panel);
    fn close(&mut self, panel: Panel);
    fn active(&self) -> Panel;
}

#[derive(Default)]
pub struct NoopPanelManager {
    opens: usize,
}

impl NoopPanelManager {
    pub fn opens(&self) -> usize {
        self.opens
    }
}

impl PanelManager for NoopPanelManager {
    fn open(&mut self, _panel: Panel) {
        self.opens = self.opens.saturating_add(1);
    }

    fn close(&mut self, _panel: Panel) {}

    fn active(&self) -> Panel {
        Panel::Terminal
    }
}

/// One panel visible at a time: opening a panel deactivates the rest, and
/// closing the active panel falls back to the terminal.
pub struct SingleActivePanelManager {
    active: Panel,
    opens: usize,
}

impl Default for SingleActivePanelManager {
    fn default() -> Self {
        Self {
            active: Panel::Terminal,
            opens: 0,
        }
    }
}

impl SingleActivePanelManager {
    pub fn opens(&self) -> usize {
        self.opens
    }
}

impl PanelManager for SingleActivePanelManager {
    fn open(&mut self, panel: Panel) {
        log::debug!("panel open: {}", panel.label());
        self.active = panel;
        self.opens = self.opens.saturating_add(1);
    }

    fn close(&mut self, panel: Panel) {
        if self.active == panel {
            self.active = Panel::Terminal;
        }
    }

    fn active(&self) -> Panel {
        self.active
    }
}
