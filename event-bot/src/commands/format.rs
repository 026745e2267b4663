//! Reply texts (Russian, as the bot's users see them).

use storage::ListKind;
use timepad_client::Event;

pub const MENU_PROMPT: &str = "Выберите меню:";
pub const MENU_BUTTON_TEXT: &str = "Меню";
/// Callback payload of the menu button.
pub const MENU_CALLBACK: &str = "menu";

const SEARCH_SEPARATOR: &str = "-----------------------------";

/// Help text listing every command.
pub fn command_list() -> String {
    [
        "Вот доступные команды:",
        "/search - Поиск ближайших по времени мероприятий в Москве.",
        "/addtolist {название_списка} {id_мероприятия} - Добавить мероприятие в список 'visited' или 'wishlist'.",
        "/removefromlist {название_списка} {id_мероприятия} - Удалить мероприятие из списка 'visited' или 'wishlist'.",
        "/getwishlist - Получить список желаемых мероприятий.",
        "/getvisitedlist - Получить список посещенных мероприятий.",
        "/recommendations - Получить мероприятия по категории ИТ и интернет",
        "/start - Показать меню.",
    ]
    .join("\n")
}

/// `/search` results; the location line is fixed to the default city.
pub fn search_reply(events: &[Event]) -> String {
    if events.is_empty() {
        return "Мероприятия не найдены.".to_string();
    }

    events
        .iter()
        .map(|event| {
            format!(
                "ID мероприятия: {}\nНазвание: {}\nМестоположение: Москва\nURL: {}\n{}\n",
                event.id, event.name, event.url, SEARCH_SEPARATOR
            )
        })
        .collect()
}

pub fn recommendations_reply(events: &[Event]) -> String {
    if events.is_empty() {
        return "Похожие мероприятия не найдены.".to_string();
    }
    titled_listing("Несколько рекомендаций на основе категории ИТ и интернет:", events)
}

pub fn wishlist_reply(events: &[Event]) -> String {
    if events.is_empty() {
        return "Ваш список желаний пуст.".to_string();
    }
    titled_listing("Список желаний:", events)
}

pub fn visited_reply(events: &[Event]) -> String {
    if events.is_empty() {
        return "Список посещенных событий пуст.".to_string();
    }
    titled_listing("Посещенные события:", events)
}

pub fn list_added_reply(list: ListKind) -> String {
    format!("Событие добавлено в список ({}).", list)
}

pub fn list_removed_reply(list: ListKind) -> String {
    format!("Событие удалено из списка ({}).", list)
}

/// Echoes the whole message text back.
pub fn unknown_command_reply(text: &str) -> String {
    format!("Неизвестная комманда: {}", text)
}

fn titled_listing(title: &str, events: &[Event]) -> String {
    let mut out = format!("{}\n\n", title);
    for event in events {
        out.push_str(&format!(
            "ID события: {}\nНазвание: {}\nURL: {}\n\n",
            event.id, event.name, event.url
        ));
    }
    out
}
