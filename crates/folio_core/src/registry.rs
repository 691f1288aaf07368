use crate::model::{Panel, DOWNLOAD_DELAY_MS, RESUME_FILENAME};

pub const HELP_TEXT: &str = "Available commands:

System Commands:
  help, --help     Show this help message
  whoami           Display user information
  ls               List directory contents
  ls projects      List projects
  ls skills        List technical skills
  cat about.txt    Display about information
  open [module]    Open a module window
  nano resume.pdf  Download resume
  sudo hire        Contact for hiring
  man [command]    Show manual for command
  clear            Clear terminal
  history          Show command history
  date             Show current date
  pwd              Print working directory
  uname -a         System information

AI Assistant:
  assistant ask \"question\"   Ask a question about me
  assistant skills          Show key strengths
  assistant why hire        Why you should hire me
  assistant experience      Summarize work experience

Navigation:
  open about       Open About window
  open skills      Open Skills window
  open projects    Open Projects window
  open experience  Open Experience window
  open contact     Open Contact window";

const WHOAMI_TEXT: &str =
    "Kelly Mbeyah - Systems Thinker | Full-Stack Developer | Strategic Leader";
const LS_TEXT: &str = "about/  skills/  projects/  experience/  contact/  resume.pdf";
const LS_PROJECTS_TEXT: &str =
    "twitter-sentiment/  sales-dashboard/  crm-optimization/  qa-framework/";
const LS_SKILLS_TEXT: &str =
    "python  r-programming  html5  css3  django  git  aws  powerbi  zoho  postgresql  mysql";
const ABOUT_TEXT: &str = "Professional with technical expertise and business acumen. Currently pursuing MBA in Strategic Management. Career spans technical roles, sales operations, quality assurance, and communications leadership.";
const RESUME_TEXT: &str = "Resume download initiated. Check your downloads folder.";
const SUDO_HIRE_TEXT: &str = "Opening hiring contact form...";
const MAN_EXPERIENCE_TEXT: &str = "EXPERIENCE(1)          User Commands          EXPERIENCE(1)\n\nNAME\n       experience - Display professional experience timeline\n\nSYNOPSIS\n       experience [options]\n\nDESCRIPTION\n       Shows detailed work history with achievements and metrics.\n       Includes roles at Network International, Youth Agenda, Tradco Agency, and Oigetit.";
const PWD_TEXT: &str = "/home/kelly";
const UNAME_TEXT: &str =
    "Linux portfolio 5.15.0-generic #1 SMP Professional Portfolio x86_64 GNU/Linux";

const ASSISTANT_SKILLS_TEXT: &str = "My key strengths include: Systems thinking, technical proficiency in Python and data analysis, business acumen from MBA studies, leadership experience, and a proven track record of delivering measurable results (88% efficiency improvement, 30% engagement boost).";
const ASSISTANT_WHY_HIRE_TEXT: &str = "I bring a unique combination of technical expertise and business strategy. With proven results in sales operations (88% efficiency gain), quality assurance, and communications (30% engagement increase), plus strong technical skills in Python, data analysis, and full-stack development, I can deliver both technical solutions and business impact.";
const ASSISTANT_EXPERIENCE_TEXT: &str = "I have diverse experience across technical and business roles: Currently at Network International as Sales Operations and QA Officer, previously Communications Associate at Youth Agenda, Sales Executive at Tradco Agency, and Communications Lead at Oigetit Fake News Filter. This spans sales operations, quality assurance, communications, and technical project management.";

const PROJECTS_HINT: &str = "Type \"open projects\" to see my project portfolio, or \"open experience\" to view my work history.";
const SKILLS_HINT: &str = "Type \"open skills\" to see my technical skills and proficiency levels.";
const CONTACT_HINT: &str = "Type \"sudo hire\" or \"open contact\" to access my contact information.";
const EDUCATION_TEXT: &str = "I hold a Bachelor of Science in Computer Science from University of Eldoret and am currently pursuing an MBA in Strategic Management at USIU.";

const ASSISTANT_ASK_PREFIX: &str = "assistant ask";

/// A literal registry entry's resolved action. Everything here is static
/// data; parameterized and dynamic commands are separate [`Resolved`]
/// variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Show(&'static str),
    OpenPanel { panel: Panel, text: &'static str },
    Download {
        filename: &'static str,
        delay_ms: u64,
        text: &'static str,
    },
    Clear,
    History,
    Date,
}

/// Literal alias table, matched against the normalized line before any
/// pattern or heuristic rule. Multiple aliases may share one behavior.
const LITERAL_RULES: &[(&[&str], Behavior)] = &[
    (&["help", "--help"], Behavior::Show(HELP_TEXT)),
    (&["whoami"], Behavior::Show(WHOAMI_TEXT)),
    (&["ls"], Behavior::Show(LS_TEXT)),
    (&["ls projects", "ls /var/projects"], Behavior::Show(LS_PROJECTS_TEXT)),
    (&["ls skills", "ls /bin/skills"], Behavior::Show(LS_SKILLS_TEXT)),
    (&["cat about.txt", "cat /home/about"], Behavior::Show(ABOUT_TEXT)),
    (
        &["open about", "cd about"],
        Behavior::OpenPanel { panel: Panel::About, text: "Opening About window..." },
    ),
    (
        &["open skills", "cd skills"],
        Behavior::OpenPanel { panel: Panel::Skills, text: "Opening Skills window..." },
    ),
    (
        &["open projects", "cd projects"],
        Behavior::OpenPanel { panel: Panel::Projects, text: "Opening Projects window..." },
    ),
    (
        &["open experience", "cd experience"],
        Behavior::OpenPanel { panel: Panel::Experience, text: "Opening Experience window..." },
    ),
    (
        &["open contact", "cd contact"],
        Behavior::OpenPanel { panel: Panel::Contact, text: "Opening Contact window..." },
    ),
    (
        &["nano resume.pdf", "open resume.pdf"],
        Behavior::Download {
            filename: RESUME_FILENAME,
            delay_ms: DOWNLOAD_DELAY_MS,
            text: RESUME_TEXT,
        },
    ),
    (
        &["sudo hire"],
        Behavior::OpenPanel { panel: Panel::Contact, text: SUDO_HIRE_TEXT },
    ),
    (&["man experience"], Behavior::Show(MAN_EXPERIENCE_TEXT)),
    (&["clear", "cls"], Behavior::Clear),
    (&["history"], Behavior::History),
    (&["date"], Behavior::Date),
    (&["pwd"], Behavior::Show(PWD_TEXT)),
    (&["uname -a"], Behavior::Show(UNAME_TEXT)),
    (&["assistant skills"], Behavior::Show(ASSISTANT_SKILLS_TEXT)),
    (&["assistant why hire"], Behavior::Show(ASSISTANT_WHY_HIRE_TEXT)),
    (&["assistant experience"], Behavior::Show(ASSISTANT_EXPERIENCE_TEXT)),
];

/// Keyword heuristic consulted only after the literal and pattern rules
/// miss. First containment hit wins; order is part of the contract.
const SUGGESTION_RULES: &[(&[&str], &str)] = &[
    (&["project", "work"], PROJECTS_HINT),
    (&["skill", "ability"], SKILLS_HINT),
    (&["contact", "hire"], CONTACT_HINT),
    (&["education", "school"], EDUCATION_TEXT),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// Empty submission: echo only, no body.
    Quiet,
    Literal(Behavior),
    /// `assistant ask <question>`, question kept in its original case.
    AssistantAsk { question: String },
    Suggestion(&'static str),
    NotFound,
}

/// Resolve a normalized line through the ordered rule list: literal alias
/// table, then the `assistant ask` prefix pattern, then the keyword
/// heuristic. Total over all inputs.
pub fn resolve(normalized: &str, raw: &str) -> Resolved {
    if normalized.is_empty() {
        return Resolved::Quiet;
    }

    for (aliases, behavior) in LITERAL_RULES {
        if aliases.contains(&normalized) {
            return Resolved::Literal(*behavior);
        }
    }

    if normalized.starts_with(ASSISTANT_ASK_PREFIX) {
        // Slice the trimmed raw line past the prefix so the question keeps
        // its original case. `get` guards the one way lowercasing can shift
        // byte offsets (non-ASCII case folding).
        let question = raw
            .trim()
            .get(ASSISTANT_ASK_PREFIX.len()..)
            .unwrap_or("")
            .trim_start()
            .to_string();
        return Resolved::AssistantAsk { question };
    }

    for (keywords, hint) in SUGGESTION_RULES {
        if keywords.iter().any(|keyword| normalized.contains(keyword)) {
            return Resolved::Suggestion(hint);
        }
    }

    Resolved::NotFound
}

#[cfg(test)]
mod tests {
    use super::{resolve, Behavior, Resolved, HELP_TEXT};
    use crate::model::Panel;

    fn resolve_line(line: &str) -> Resolved {
        resolve(&line.trim().to_lowercase(), line)
    }

    #[test]
    fn aliases_share_one_behavior() {
        assert_eq!(resolve_line("open about"), resolve_line("cd about"));
        assert_eq!(resolve_line("help"), resolve_line("--help"));
        assert_eq!(resolve_line("clear"), resolve_line("cls"));
        assert_eq!(resolve_line("ls projects"), resolve_line("ls /var/projects"));
    }

    #[test]
    fn panel_commands_carry_panel_and_confirmation() {
        let Resolved::Literal(Behavior::OpenPanel { panel, text }) = resolve_line("open skills")
        else {
            panic!("expected panel behavior");
        };
        assert_eq!(panel, Panel::Skills);
        assert_eq!(text, "Opening Skills window...");
    }

    #[test]
    fn sudo_hire_routes_to_contact_panel() {
        let Resolved::Literal(Behavior::OpenPanel { panel, .. }) = resolve_line("sudo hire")
        else {
            panic!("expected panel behavior");
        };
        assert_eq!(panel, Panel::Contact);
    }

    #[test]
    fn resume_command_schedules_fixed_delay_download() {
        let Resolved::Literal(Behavior::Download { filename, delay_ms, .. }) =
            resolve_line("nano resume.pdf")
        else {
            panic!("expected download behavior");
        };
        assert_eq!(filename, "Kelly_Mbeyah_Resume.pdf");
        assert_eq!(delay_ms, 1_000);
        assert_eq!(resolve_line("open resume.pdf"), resolve_line("nano resume.pdf"));
    }

    #[test]
    fn literal_rules_win_over_assistant_prefix() {
        assert!(matches!(
            resolve_line("assistant skills"),
            Resolved::Literal(Behavior::Show(_))
        ));
    }

    #[test]
    fn assistant_ask_keeps_question_case() {
        let Resolved::AssistantAsk { question } =
            resolve_line("  assistant ask What are your STRENGTHS?  ")
        else {
            panic!("expected assistant ask");
        };
        assert_eq!(question, "What are your STRENGTHS?");
    }

    #[test]
    fn assistant_ask_without_question_is_empty() {
        assert_eq!(
            resolve_line("assistant ask"),
            Resolved::AssistantAsk { question: String::new() }
        );
    }

    #[test]
    fn suggestion_order_is_first_match_wins() {
        // "homework" contains "work"; suggestion fires before not-found.
        assert_eq!(
            resolve_line("show me your homework"),
            Resolved::Suggestion(super::PROJECTS_HINT)
        );
        // "hire" would also match, but the project/work rule is checked first.
        assert_eq!(
            resolve_line("work hire"),
            Resolved::Suggestion(super::PROJECTS_HINT)
        );
        assert_eq!(
            resolve_line("where did you go to school"),
            Resolved::Suggestion(super::EDUCATION_TEXT)
        );
    }

    #[test]
    fn empty_line_is_quiet_and_garbage_is_not_found() {
        assert_eq!(resolve_line(""), Resolved::Quiet);
        assert_eq!(resolve_line("   "), Resolved::Quiet);
        assert_eq!(resolve_line("xyzzy"), Resolved::NotFound);
    }

    #[test]
    fn help_text_enumerates_every_top_level_command() {
        for verb in ["help", "whoami", "ls", "cat about.txt", "nano resume.pdf", "sudo hire", "clear", "history", "date", "pwd", "uname -a", "assistant ask"] {
            assert!(HELP_TEXT.contains(verb), "help text missing {verb}");
        }
    }
}
