mod session;
mod shell;

use folio_core::model::DOWNLOAD_DELAY_MS;
use folio_rt::clock::SystemClock;
use folio_rt::download::RecordingDownloadTrigger;
use folio_rt::panel::{PanelManager, SingleActivePanelManager};
use folio_rt::render::{BufferRenderer, Renderer};

use session::SessionCoordinator;

fn main() -> Result<(), shell::ShellError> {
    env_logger::init();

    if std::env::args().any(|arg| arg == "--demo") {
        run_demo();
        return Ok(());
    }

    shell::run_interactive_shell()
}

fn run_demo() {
    let mut session = SessionCoordinator::new();
    let mut renderer = BufferRenderer::default();
    let mut panels = SingleActivePanelManager::default();
    let mut trigger = RecordingDownloadTrigger::default();
    let clock = SystemClock::new();

    let script = [
        "help",
        "whoami",
        "open about",
        "nano resume.pdf",
        "assistant ask why should we hire you",
        "xyzzy",
        "history",
    ];

    let mut now_ms = 0u64;
    for command in script {
        session.submit_line(command, &mut renderer, &mut panels, &clock, now_ms);
        now_ms += 250;
    }
    let downloads_started = session.poll_downloads(now_ms + DOWNLOAD_DELAY_MS, &mut trigger);

    for line in renderer.lines() {
        println!("{line}");
    }

    let snapshot = session.snapshot();
    println!(
        "folio demo: commands={}, lines_rendered={}, active_panel={}, downloads_started={}",
        snapshot.commands_processed,
        renderer.lines_rendered(),
        panels.active().label(),
        downloads_started
    );
}
