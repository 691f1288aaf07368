//! Prefix autocomplete over the top-level command verbs.

pub const COMMAND_VERBS: &[&str] = &[
    "help", "whoami", "ls", "cat", "open", "nano", "sudo", "man", "clear", "history", "date",
    "pwd", "uname",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// No verb matched; the input line stays as typed.
    NoMatch,
    /// One verb matched; the caller replaces the input line with it.
    Single(&'static str),
    /// Several verbs matched; the caller shows them as an informational
    /// line and leaves the input unchanged.
    Multiple(Vec<&'static str>),
}

/// Case-sensitive prefix match against the verb list, never against full
/// command lines. An empty partial matches every verb.
pub fn complete(partial: &str) -> Completion {
    let matches: Vec<&'static str> = COMMAND_VERBS
        .iter()
        .copied()
        .filter(|verb| verb.starts_with(partial))
        .collect();

    match matches.len() {
        0 => Completion::NoMatch,
        1 => Completion::Single(matches[0]),
        _ => Completion::Multiple(matches),
    }
}
