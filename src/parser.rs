/// Strip a trailing `//` comment and every whitespace character.
///
/// The marker is the two-character sequence; a lone `/` stays in the line.
/// Idempotent, so both passes may sanitize the same raw line.
pub fn sanitize_line(line: &str) -> String {
    let code = match line.find("//") {
        Some(i) => &line[..i],
        None => line,
    };
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A sanitized source line, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Empty,
    /// `(name)`, occupies no instruction slot.
    Label(&'a str),
    /// `@operand`, where the operand is a symbol or decimal literal.
    Addr(&'a str),
    /// `[dest=]comp[;jump]`
    Compute(&'a str),
}

pub fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        Line::Empty
    } else if let Some(operand) = line.strip_prefix('@') {
        Line::Addr(operand)
    } else if line.len() >= 2 && line.starts_with('(') && line.ends_with(')') {
        Line::Label(&line[1..line.len() - 1])
    } else {
        Line::Compute(line)
    }
}
