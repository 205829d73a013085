use crate::domain::entities::date_spec::DateSpec;

/// Fixed yearly dates with their own commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holiday {
    NewYear,
    Christmas,
    Summer,
}

impl Holiday {
    pub const ALL: [Holiday; 3] = [Holiday::NewYear, Holiday::Christmas, Holiday::Summer];

    pub fn date(&self) -> DateSpec {
        match self {
            Holiday::NewYear => DateSpec::annual(1, 1),
            Holiday::Christmas => DateSpec::annual(7, 1),
            Holiday::Summer => DateSpec::annual(1, 6),
        }
    }

    /// Genitive form used in "До ... осталось"
    pub fn label(&self) -> &'static str {
        match self {
            Holiday::NewYear => "Нового года",
            Holiday::Christmas => "Рождества",
            Holiday::Summer => "лета",
        }
    }

    /// Command names answering with this holiday, canonical name first
    pub fn command_names(&self) -> &'static [&'static str] {
        match self {
            Holiday::NewYear => &["newyear", "ny", "ng"],
            Holiday::Christmas => &["christmas"],
            Holiday::Summer => &["summer", "leto"],
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Holiday::NewYear => "Новый год",
            Holiday::Christmas => "Рождество",
            Holiday::Summer => "Лето",
        }
    }

    pub fn from_command(name: &str) -> Option<Holiday> {
        Self::ALL
            .into_iter()
            .find(|holiday| holiday.command_names().iter().any(|n| *n == name))
    }
}
