pub mod args;
pub mod date_options;
pub mod get_option;
pub mod respond;

pub use args::{parse_birthday_args, parse_custom_date_args, parse_date_args};
pub use date_options::{day_option, month_option, name_option, year_option};
pub use get_option::{get_integer_option, get_string_option};
pub use respond::respond;
