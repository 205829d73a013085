pub mod birthday;
pub mod customdate;
pub mod date;
pub mod help;
pub mod holidays;
pub mod utils;

pub use birthday::{BIRTHDAY_COMMAND_NAMES, register_birthday_commands, run_birthday};
pub use customdate::{register_customdate_command, run_customdate};
pub use date::{register_date_command, run_date};
pub use help::{register_help_command, register_start_command, run_help_command, run_unknown_command};
pub use holidays::{register_holiday_commands, run_holiday};

use serenity::builder::CreateCommand;

/// Every slash command the bot answers to
pub fn all_commands() -> Vec<CreateCommand> {
    let mut commands = vec![register_start_command(), register_help_command()];
    commands.extend(register_holiday_commands());
    commands.extend(register_birthday_commands());
    commands.push(register_date_command());
    commands.push(register_customdate_command());
    commands
}
