//! # Command surface
//!
//! The closed set of commands the bot understands, and the token parsing that
//! maps raw message text onto it. Dispatch is an explicit enum match — no
//! string-to-handler lookup — so adding a command is a compile error until
//! every match arm handles it.

use std::str::FromStr;

pub mod handlers;

pub use handlers::CommandHandlers;

/// Messages must start with this to be considered commands at all.
pub const COMMAND_PREFIX: char = '/';

/// The commands the bot responds to. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    AddMe,
    RemoveMe,
    Go,
}

impl FromStr for Command {
    type Err = ();

    /// Parses a bare token (no prefix). Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Command::Start),
            "add_me" => Ok(Command::AddMe),
            "remove_me" => Ok(Command::RemoveMe),
            "go" => Ok(Command::Go),
            _ => Err(()),
        }
    }
}

impl Command {
    /// The user-facing spelling, prefix included. Used for keyboard buttons
    /// and help text.
    pub fn as_command(&self) -> &'static str {
        match self {
            Command::Start => "/start",
            Command::AddMe => "/add_me",
            Command::RemoveMe => "/remove_me",
            Command::Go => "/go",
        }
    }
}

/// Extracts the command token from raw message text, or `None` if the text is
/// not a command at all.
///
/// The token is everything after the prefix up to the first whitespace;
/// trailing text is ignored. A `@botname` suffix is stripped, since Telegram
/// group clients append it when the user taps a command.
pub fn command_token(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(COMMAND_PREFIX)?;
    // The token must sit directly after the prefix; "/ add_me" is not a command.
    let token = rest.split(char::is_whitespace).next().unwrap_or("");
    Some(token.split('@').next().unwrap_or(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_known_commands() {
        assert_eq!("start".parse(), Ok(Command::Start));
        assert_eq!("add_me".parse(), Ok(Command::AddMe));
        assert_eq!("remove_me".parse(), Ok(Command::RemoveMe));
        assert_eq!("go".parse(), Ok(Command::Go));
    }

    #[test]
    fn rejects_unknown_and_wrong_case_tokens() {
        assert_eq!("unknown".parse::<Command>(), Err(()));
        assert_eq!("ADD_ME".parse::<Command>(), Err(()));
        assert_eq!("Go".parse::<Command>(), Err(()));
        assert_eq!("".parse::<Command>(), Err(()));
    }

    #[test]
    fn token_requires_the_prefix() {
        assert_eq!(command_token("add_me"), None);
        assert_eq!(command_token("hello there"), None);
        assert_eq!(command_token(""), None);
    }

    #[test]
    fn token_ignores_trailing_text() {
        assert_eq!(command_token("/go now please"), Some("go"));
        assert_eq!(command_token("/add_me extra"), Some("add_me"));
    }

    #[test]
    fn token_must_follow_the_prefix_directly() {
        assert_eq!(command_token("/ add_me"), Some(""));
    }

    #[test]
    fn token_strips_bot_mention_suffix() {
        assert_eq!(command_token("/go@rollcall_bot"), Some("go"));
        assert_eq!(command_token("/add_me@rollcall_bot please"), Some("add_me"));
    }

    #[test]
    fn bare_slash_yields_an_empty_token() {
        assert_eq!(command_token("/"), Some(""));
        assert_eq!("".parse::<Command>(), Err(()));
    }

    #[test]
    fn command_text_round_trips_through_the_parser() {
        for cmd in [Command::Start, Command::AddMe, Command::RemoveMe, Command::Go] {
            let token = command_token(cmd.as_command()).unwrap();
            assert_eq!(token.parse(), Ok(cmd));
        }
    }
}
