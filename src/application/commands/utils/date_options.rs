use serenity::all::{CommandOptionType, CreateCommandOption};

use crate::domain::entities::custom_date::MAX_NAME_LENGTH;

pub fn day_option(required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, "day", "День месяца (1-31)")
        .min_int_value(1)
        .max_int_value(31)
        .required(required)
}

pub fn month_option(required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, "month", "Месяц (1-12)")
        .min_int_value(1)
        .max_int_value(12)
        .required(required)
}

pub fn year_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, "year", "Год, если событие не повторяется")
        .min_int_value(1)
        .max_int_value(9999)
        .required(false)
}

pub fn name_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "name", "Название события")
        .min_length(1)
        .max_length(MAX_NAME_LENGTH as u16)
        .required(false)
}
