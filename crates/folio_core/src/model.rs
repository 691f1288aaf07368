pub const PROMPT: &str = "kelly@portfolio:~$ ";

pub const RESUME_FILENAME: &str = "Kelly_Mbeyah_Resume.pdf";
pub const DOWNLOAD_DELAY_MS: u64 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Terminal,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Panel {
    pub fn label(&self) -> &'static str {
        match self {
            Panel::Terminal => "Terminal",
            Panel::About => "About",
            Panel::Skills => "Skills",
            Panel::Projects => "Projects",
            Panel::Experience => "Experience",
            Panel::Contact => "Contact",
        }
    }
}

/// Declarative request for a collaborator; the interpreter never executes
/// these itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    OpenPanel(Panel),
    ClearOutput,
    ScheduleDownload { filename: String, delay_ms: u64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<String>,
    pub effects: Vec<SideEffect>,
}

/// Supplies the timestamp rendered by the `date` command so the core stays
/// deterministic under test.
pub trait Clock {
    fn timestamp(&self) -> String;
}
