use lazy_static::lazy_static;

use crate::domain::Holiday;

pub const BIRTHDAY_LABEL: &str = "твоего дня рождения";
pub const BIRTHDAY_NOT_SET: &str =
    "День рождения не установлен. Установите его командой `/birthday 31 12`.";
pub const BIRTHDAY_USAGE: &str = "Пример использования команды\n`/birthday 31 12`";
pub const DATE_USAGE: &str = "Пример использования команды\n`/date 31 12`";
pub const CUSTOM_DATE_USAGE: &str = "Пример использования команды\n`/customdate holidays 14 06` или `/customdate event 17 05 2030`";
pub const NO_CUSTOM_DATES: &str =
    "У тебя нет сохранённых дат\nСоздай их командой `/customdate name 31 12`";
pub const UNKNOWN_COMMAND: &str = "Команда не найдена! Список команд -> /help";
pub const INTERNAL_FAILURE: &str = "Не получилось выполнить команду, попробуй позже";

pub const HELP_DESCRIPTION: &str = "Помощь";
pub const BIRTHDAY_DESCRIPTION: &str = "День рождения";
pub const DATE_DESCRIPTION: &str = "Любая дата";
pub const CUSTOM_DATE_DESCRIPTION: &str = "Установить свою дату";

lazy_static! {
    /// Command overview shown by /start and /help, grouped by topic
    pub static ref HELP_MESSAGE: String = {
        let holidays: Vec<String> = Holiday::ALL
            .iter()
            .map(|holiday| format!("/{} - {}", holiday.command_names()[0], holiday.description()))
            .collect();

        let groups = [
            holidays.join("\n"),
            format!("/birthday - {}", BIRTHDAY_DESCRIPTION),
            format!(
                "/date - {}\n/customdate - {}",
                DATE_DESCRIPTION, CUSTOM_DATE_DESCRIPTION
            ),
            format!("/help - {}", HELP_DESCRIPTION),
        ];

        format!("**Список команд**\n\n{}", groups.join("\n\n"))
    };
}

/// `DD.MM` with zero padding
pub fn format_day_month(day: i64, month: i64) -> String {
    format!("{:02}.{:02}", day, month)
}

pub fn birthday_saved(day: i64, month: i64) -> String {
    format!("День рождения установлен на `{}`", format_day_month(day, month))
}

pub fn custom_date_not_found(name: &str, similar: &[String]) -> String {
    let mut message = format!(
        "Событие `{name}` не найдено\nСоздай его командой `/customdate {name} 31 12`"
    );

    if !similar.is_empty() {
        let names: Vec<String> = similar.iter().map(|n| format!("`{}`", n)).collect();
        message.push_str(&format!("\nПохожие события: {}", names.join(", ")));
    }

    message
}

pub fn custom_date_list(names: &[String]) -> String {
    format!("**Твои даты:**\n\n{}", names.join("\n"))
}
