use serenity::all::{CommandDataOption, CommandDataOptionValue};

/// Extract a string option from a slash command by name
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options.iter().find(|opt| opt.name == name).and_then(|opt| {
        if let CommandDataOptionValue::String(s) = &opt.value {
            Some(s.clone())
        } else {
            None
        }
    })
}

/// Extract an integer option from a slash command by name
pub fn get_integer_option(options: &[CommandDataOption], name: &str) -> Option<i64> {
    options.iter().find(|opt| opt.name == name).and_then(|opt| {
        if let CommandDataOptionValue::Integer(n) = opt.value {
            Some(n)
        } else {
            None
        }
    })
}
