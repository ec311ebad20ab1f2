/// One line of input in the study loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyCommand {
    Next,
    Previous,
    Flip,
    Shuffle,
    Reset,
    /// Load another chapter with the same language
    Open(u32),
    Help,
    Quit,
    Unknown(String),
}

/// Parse a raw stdin line (without its newline)
///
/// An empty line advances; a line made only of spaces flips, mirroring the
/// arrow-key/space bindings of the web client.
pub fn parse_command(line: &str) -> StudyCommand {
    if line.is_empty() {
        return StudyCommand::Next;
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return StudyCommand::Flip;
    }

    let mut parts = trimmed.split_whitespace();
    let head = parts.next().unwrap_or_default().to_ascii_lowercase();

    match head.as_str() {
        "n" | "next" => StudyCommand::Next,
        "p" | "prev" | "previous" => StudyCommand::Previous,
        "f" | "flip" => StudyCommand::Flip,
        "s" | "shuffle" => StudyCommand::Shuffle,
        "r" | "reset" => StudyCommand::Reset,
        "h" | "help" | "?" => StudyCommand::Help,
        "q" | "quit" | "exit" => StudyCommand::Quit,
        "o" | "open" => match parts.next().map(str::parse::<u32>) {
            Some(Ok(chapter)) => StudyCommand::Open(chapter),
            _ => StudyCommand::Unknown(trimmed.to_string()),
        },
        _ => StudyCommand::Unknown(trimmed.to_string()),
    }
}
