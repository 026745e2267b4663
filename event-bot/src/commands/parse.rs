//! Turns message text into a [`Command`].
//!
//! The first whitespace-delimited token picks the command (case-insensitive); the rest are its
//! arguments. Argument errors are carried inside the command so the dispatcher can answer them
//! without touching storage.

use std::str::FromStr;
use storage::ListKind;
use thiserror::Error;

/// Arguments of `/addtolist` and `/removefromlist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListArgs {
    pub list: ListKind,
    pub event_id: i64,
}

/// Why list arguments were rejected. Checked in this order: count, event id, list name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListArgsError {
    #[error("Укажите имя списка (visited/wishlist) и event ID.")]
    Missing,
    #[error("Неверный event ID.")]
    InvalidEventId,
    #[error("Неверное имя списка. Пожалуйста используйте 'visited' или 'wishlist'.")]
    InvalidListName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    /// Free-text query: everything after the command, `None` when blank.
    Search(Option<String>),
    AddToList(Result<ListArgs, ListArgsError>),
    RemoveFromList(Result<ListArgs, ListArgsError>),
    Recommendations,
    GetWishlist,
    GetVisitedList,
    /// Anything else, echoed back to the user.
    Unknown,
}

impl Command {
    pub fn parse(text: &str) -> Self {
        let text = text.trim_start();
        let (head, rest) = match text.find(char::is_whitespace) {
            Some(pos) => (&text[..pos], text[pos..].trim()),
            None => (text, ""),
        };

        match head.to_lowercase().as_str() {
            "/start" => Command::Start,
            "/search" => Command::Search((!rest.is_empty()).then(|| rest.to_string())),
            "/addtolist" => Command::AddToList(parse_list_args(rest)),
            "/removefromlist" => Command::RemoveFromList(parse_list_args(rest)),
            "/recommendations" => Command::Recommendations,
            "/getwishlist" => Command::GetWishlist,
            "/getvisitedlist" => Command::GetVisitedList,
            _ => Command::Unknown,
        }
    }
}

fn parse_list_args(rest: &str) -> Result<ListArgs, ListArgsError> {
    let mut parts = rest.split_whitespace();
    let (Some(list_name), Some(raw_id)) = (parts.next(), parts.next()) else {
        return Err(ListArgsError::Missing);
    };
    let event_id = raw_id
        .parse::<i64>()
        .map_err(|_| ListArgsError::InvalidEventId)?;
    let list = ListKind::from_str(list_name).map_err(|_| ListArgsError::InvalidListName)?;
    Ok(ListArgs { list, event_id })
}
