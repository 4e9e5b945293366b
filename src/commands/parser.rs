use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
}

/// A command line split into its name and whitespace-separated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split a command line on whitespace. The first token is the name and is
/// taken verbatim, so `s/a b/c/` style spellings are not interpreted.
pub fn parse(line: &str) -> Result<ParsedCommand, ParseError> {
    let mut parts = line.split_whitespace();
    let name = parts.next().ok_or(ParseError::Empty)?;

    Ok(ParsedCommand {
        name: name.to_string(),
        args: parts.map(str::to_string).collect(),
    })
}
