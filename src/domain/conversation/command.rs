//! Classification of inbound chat text.

use crate::domain::search::SearchMode;

/// Exact strings answered with a greeting.
pub const GREETINGS: [&str; 2] = ["Привет", "hello"];

/// Top-level commands the bot recognises verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Search(SearchMode),
}

/// What an inbound text message means before any step consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundText<'a> {
    Command(Command),
    Greeting,
    Other(&'a str),
}

impl<'a> InboundText<'a> {
    pub fn classify(text: &'a str) -> Self {
        match text {
            "/start" => InboundText::Command(Command::Start),
            "/help" => InboundText::Command(Command::Help),
            t if GREETINGS.contains(&t) => InboundText::Greeting,
            t => match SearchMode::from_command(t) {
                Some(mode) => InboundText::Command(Command::Search(mode)),
                None => InboundText::Other(t),
            },
        }
    }

    /// The search mode, if this text starts a new search.
    pub fn search_mode(&self) -> Option<SearchMode> {
        match self {
            InboundText::Command(Command::Search(mode)) => Some(*mode),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_top_level_commands() {
        assert_eq!(InboundText::classify("/start"), InboundText::Command(Command::Start));
        assert_eq!(InboundText::classify("/help"), InboundText::Command(Command::Help));
    }

    #[test]
    fn recognises_search_commands() {
        assert_eq!(
            InboundText::classify("/bestdeal").search_mode(),
            Some(SearchMode::BestDeal)
        );
        assert_eq!(
            InboundText::classify("/highprice").search_mode(),
            Some(SearchMode::Priciest)
        );
    }

    #[test]
    fn greeting_must_match_exactly() {
        assert_eq!(InboundText::classify("Привет"), InboundText::Greeting);
        assert_eq!(InboundText::classify("hello"), InboundText::Greeting);
        assert_eq!(InboundText::classify("привет"), InboundText::Other("привет"));
        assert_eq!(InboundText::classify("hello!"), InboundText::Other("hello!"));
    }

    #[test]
    fn anything_else_is_other() {
        assert_eq!(InboundText::classify("Paris"), InboundText::Other("Paris"));
        assert_eq!(InboundText::classify("/unknown"), InboundText::Other("/unknown"));
    }
}
