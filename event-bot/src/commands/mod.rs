//! Chat command surface: parsing of incoming text and rendering of replies.

mod format;
mod parse;

pub use format::{
    command_list, recommendations_reply, search_reply, visited_reply, wishlist_reply,
    list_added_reply, list_removed_reply, unknown_command_reply, MENU_BUTTON_TEXT, MENU_CALLBACK,
    MENU_PROMPT,
};
pub use parse::{Command, ListArgs, ListArgsError};
