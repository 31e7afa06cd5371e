//! Outgoing messages and the fixed texts the bot sends.

use crate::domain::search::HotelCount;

/// How the transport should render a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFormat {
    Plain,
    Markdown,
}

/// One outgoing chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: ReplyFormat,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ReplyFormat::Plain,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ReplyFormat::Markdown,
        }
    }
}

pub const ABOUT: &str = "I will help you find suitable hotels in cities around the world";
pub const COMMANDS_TITLE: &str = "You can use the following commands:";
pub const COMMANDS_HELP: &str = "/help - show command help\n\
/lowprice - the cheapest hotels\n\
/highprice - the most expensive hotels\n\
/bestdeal - the cheapest hotels closest to the center";

pub const ASK_CITY: &str = "Which city are you searching in?";
pub const ASK_MIN_PRICE: &str = "What is the minimum price (whole number)?";
pub const ASK_MAX_PRICE: &str = "What is the maximum price (whole number)?";
pub const ASK_MIN_DISTANCE: &str =
    "What is the minimum distance to the center in kilometres (a comma is fine)?";
pub const ASK_MAX_DISTANCE: &str =
    "What is the maximum distance to the center in kilometres (a comma is fine)?";
pub const ASK_HOTEL_COUNT: &str = "How many hotels do you want to find?";

pub const GENERIC_FAILURE: &str = "Oops. Something went wrong, please try again";
pub const CITY_NOT_FOUND: &str = "There is no city with that name";
pub const INVALID_MIN_PRICE: &str = "The minimum price is not valid";
pub const INVALID_MAX_PRICE: &str = "The maximum price is not valid";
pub const INVALID_MIN_DISTANCE: &str = "The minimum distance is not valid";
pub const INVALID_MAX_DISTANCE: &str = "The maximum distance is not valid";
pub const NOTHING_FOUND: &str = "Nothing found, try a looser search";

pub fn greeting() -> String {
    format!("Hello!\n{}\n\n{}\n{}", ABOUT, COMMANDS_TITLE, COMMANDS_HELP)
}

pub fn start() -> String {
    format!("{}\n\n{}\n{}", ABOUT, COMMANDS_TITLE, COMMANDS_HELP)
}

pub fn help() -> String {
    format!("{}\n{}", COMMANDS_TITLE, COMMANDS_HELP)
}

pub fn unknown() -> String {
    format!("I can't understand the command\n\n{}\n{}", COMMANDS_TITLE, COMMANDS_HELP)
}

pub fn too_many_hotels() -> String {
    format!(
        "That's too many hotels, I'll find {0}, I can't do more than {0}",
        HotelCount::MAX
    )
}

pub fn invalid_hotel_count() -> String {
    format!(
        "Invalid number of hotels, I'll find the maximum, {}",
        HotelCount::MAX
    )
}

pub fn too_few_hotels() -> String {
    format!("I'll look for at least {} hotel", HotelCount::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_includes_about_and_commands() {
        let text = start();
        assert!(text.starts_with(ABOUT));
        assert!(text.contains("/lowprice"));
        assert!(text.contains("/bestdeal"));
    }

    #[test]
    fn help_is_command_summary_only() {
        let text = help();
        assert!(text.starts_with(COMMANDS_TITLE));
        assert!(!text.contains(ABOUT));
    }

    #[test]
    fn count_messages_mention_the_limit() {
        assert!(too_many_hotels().contains("10"));
        assert!(invalid_hotel_count().contains("10"));
        assert_ne!(too_many_hotels(), invalid_hotel_count());
    }
}
