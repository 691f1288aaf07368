use crate::assistant;
use crate::history::HistoryBuffer;
use crate::model::{Clock, Response, SideEffect, PROMPT};
use crate::registry::{self, Behavior, Resolved};

/// Turns one raw input line into a [`Response`]. Stateless: history is owned
/// by the session layer and passed in read-only, so `history` output covers
/// the lines submitted before the current one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Total over all inputs; unknown commands degrade to the not-found
    /// line, never an error.
    pub fn run(&self, raw: &str, history: &HistoryBuffer, clock: &dyn Clock) -> Response {
        let normalized = raw.trim().to_lowercase();
        let resolved = registry::resolve(&normalized, raw);
        log::debug!("dispatch {normalized:?} -> {resolved:?}");

        let mut response = Response::default();

        // `clear` suppresses the echo entirely; only the effect goes out.
        if let Resolved::Literal(Behavior::Clear) = resolved {
            response.effects.push(SideEffect::ClearOutput);
            return response;
        }

        response.lines.push(format!("{PROMPT}{raw}"));

        let body: Option<String> = match resolved {
            Resolved::Quiet => None,
            Resolved::Literal(Behavior::Clear) => None,
            Resolved::Literal(Behavior::Show(text)) => Some(text.to_string()),
            Resolved::Literal(Behavior::OpenPanel { panel, text }) => {
                response.effects.push(SideEffect::OpenPanel(panel));
                Some(text.to_string())
            }
            Resolved::Literal(Behavior::Download { filename, delay_ms, text }) => {
                response.effects.push(SideEffect::ScheduleDownload {
                    filename: filename.to_string(),
                    delay_ms,
                });
                Some(text.to_string())
            }
            Resolved::Literal(Behavior::History) => Some(render_history(history)),
            Resolved::Literal(Behavior::Date) => Some(clock.timestamp()),
            Resolved::AssistantAsk { question } => {
                Some(assistant::answer(&question).to_string())
            }
            Resolved::Suggestion(hint) => Some(hint.to_string()),
            Resolved::NotFound => Some(format!(
                "Command not found: {raw}. Type 'help' for available commands."
            )),
        };

        if let Some(body) = body {
            if !body.is_empty() {
                response
                    .lines
                    .extend(body.split('\n').map(str::to_string));
            }
        }

        response
    }
}

fn render_history(history: &HistoryBuffer) -> String {
    history
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}  {}", index + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::Interpreter;
    use crate::history::HistoryBuffer;
    use crate::model::{Clock, Panel, SideEffect, PROMPT};

    struct FixedClock(&'static str);

    impl Clock for FixedClock {
        fn timestamp(&self) -> String {
            self.0.to_string()
        }
    }

    const CLOCK: FixedClock = FixedClock("Sat Aug 30 2025 12:00:00 +0000");

    fn run(raw: &str) -> crate::model::Response {
        Interpreter::new().run(raw, &HistoryBuffer::new(), &CLOCK)
    }

    #[test]
    fn known_command_echoes_then_prints_body() {
        let response = run("whoami");
        assert_eq!(
            response.lines,
            [
                format!("{PROMPT}whoami"),
                "Kelly Mbeyah - Systems Thinker | Full-Stack Developer | Strategic Leader"
                    .to_string(),
            ]
        );
        assert!(response.effects.is_empty());
    }

    #[test]
    fn echo_preserves_raw_case_and_spacing() {
        let response = run("  WhoAmI  ");
        assert_eq!(response.lines[0], format!("{PROMPT}  WhoAmI  "));
        assert_eq!(response.lines.len(), 2);
    }

    #[test]
    fn open_about_emits_panel_effect_and_confirmation() {
        let response = run("open about");
        assert_eq!(response.effects, [SideEffect::OpenPanel(Panel::About)]);
        assert_eq!(response.lines[1], "Opening About window...");
    }

    #[test]
    fn multi_line_body_becomes_discrete_lines() {
        let response = run("man experience");
        assert_eq!(response.lines[1], "EXPERIENCE(1)          User Commands          EXPERIENCE(1)");
        assert!(response.lines.contains(&"NAME".to_string()));
        assert!(response.lines.contains(&String::new()));
    }

    #[test]
    fn clear_suppresses_echo_and_is_idempotent() {
        for _ in 0..2 {
            let response = run("clear");
            assert!(response.lines.is_empty());
            assert_eq!(response.effects, [SideEffect::ClearOutput]);
        }
        let response = run("cls");
        assert_eq!(response.effects, [SideEffect::ClearOutput]);
    }

    #[test]
    fn empty_line_echoes_and_nothing_else() {
        let response = run("");
        assert_eq!(response.lines, [PROMPT.to_string()]);
        assert!(response.effects.is_empty());
    }

    #[test]
    fn unknown_command_reports_not_found_with_raw_line() {
        let response = run("xyzzy");
        assert_eq!(
            response.lines,
            [
                format!("{PROMPT}xyzzy"),
                "Command not found: xyzzy. Type 'help' for available commands.".to_string(),
            ]
        );
        assert!(response.effects.is_empty());
    }

    #[test]
    fn resume_download_is_scheduled_not_executed() {
        let response = run("nano resume.pdf");
        assert_eq!(
            response.effects,
            [SideEffect::ScheduleDownload {
                filename: "Kelly_Mbeyah_Resume.pdf".to_string(),
                delay_ms: 1_000,
            }]
        );
        assert_eq!(
            response.lines[1],
            "Resume download initiated. Check your downloads folder."
        );
    }

    #[test]
    fn date_uses_the_injected_clock() {
        let response = run("date");
        assert_eq!(response.lines[1], "Sat Aug 30 2025 12:00:00 +0000");
    }

    #[test]
    fn history_renders_one_based_submission_order() {
        let mut history = HistoryBuffer::new();
        history.submit("help");
        history.submit("open about");
        history.submit("");

        let response = Interpreter::new().run("history", &history, &CLOCK);
        assert_eq!(
            response.lines,
            [
                format!("{PROMPT}history"),
                "1  help".to_string(),
                "2  open about".to_string(),
                "3  ".to_string(),
            ]
        );
    }

    #[test]
    fn history_on_fresh_session_prints_only_the_echo() {
        let response = run("history");
        assert_eq!(response.lines, [format!("{PROMPT}history")]);
    }

    #[test]
    fn assistant_ask_routes_question_to_lookup() {
        let response = run("assistant ask what are your technical skills");
        assert!(response.lines[1].starts_with("I specialize in Python, R, HTML5"));

        let fallback = run("assistant ask");
        assert!(fallback.lines[1].starts_with("I'm a professional"));
    }

    #[test]
    fn heuristic_suggestions_fire_before_not_found() {
        let response = run("tell me about your projects please");
        assert_eq!(
            response.lines[1],
            "Type \"open projects\" to see my project portfolio, or \"open experience\" to view my work history."
        );
    }
}
