/// Russian word forms for a counted noun.
///
/// `one` is the nominative singular (1, 21, 101), `few` the genitive singular
/// (2-4, 22-24) and `many` the genitive plural (0, 5-20, 25-30, 111).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralForms {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

impl PluralForms {
    pub const WEEKS: Self = Self::new("неделя", "недели", "недель");
    pub const DAYS: Self = Self::new("день", "дня", "дней");
    pub const HOURS: Self = Self::new("час", "часа", "часов");
    pub const MINUTES: Self = Self::new("минута", "минуты", "минут");
    pub const SECONDS: Self = Self::new("секунда", "секунды", "секунд");

    pub const fn new(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self { one, few, many }
    }

    /// Picks the form agreeing with `n`. The sign is ignored.
    pub fn select(&self, n: i64) -> &'static str {
        let n = n.unsigned_abs();

        // 11..14 always take the plural regardless of the last digit
        if (11..=14).contains(&(n % 100)) {
            return self.many;
        }

        match n % 10 {
            1 => self.one,
            2..=4 => self.few,
            _ => self.many,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PluralForms; 5] = [
        PluralForms::WEEKS,
        PluralForms::DAYS,
        PluralForms::HOURS,
        PluralForms::MINUTES,
        PluralForms::SECONDS,
    ];

    #[test]
    fn test_singular_for_one() {
        assert_eq!(PluralForms::HOURS.select(1), "час");
    }

    #[test]
    fn test_genitive_singular_for_two_to_four() {
        for n in 2..=4 {
            assert_eq!(PluralForms::HOURS.select(n), "часа");
        }
    }

    #[test]
    fn test_genitive_plural_for_five_to_twenty() {
        for n in 5..=20 {
            assert_eq!(PluralForms::HOURS.select(n), "часов", "n = {}", n);
        }
    }

    #[test]
    fn test_teens_ignore_last_digit() {
        for n in [11, 12, 13, 14, 111, 112, 1014] {
            assert_eq!(PluralForms::DAYS.select(n), "дней", "n = {}", n);
        }
    }

    #[test]
    fn test_second_decade() {
        assert_eq!(PluralForms::HOURS.select(21), "час");
        assert_eq!(PluralForms::HOURS.select(31), "час");
        assert_eq!(PluralForms::HOURS.select(41), "час");
        for n in 22..=24 {
            assert_eq!(PluralForms::HOURS.select(n), "часа");
        }
        for n in 25..=30 {
            assert_eq!(PluralForms::HOURS.select(n), "часов");
        }
    }

    #[test]
    fn test_zero_is_plural() {
        for forms in ALL {
            assert_eq!(forms.select(0), forms.many);
        }
    }

    #[test]
    fn test_sign_does_not_matter() {
        for forms in ALL {
            for n in -250..=250 {
                assert_eq!(forms.select(n), forms.select(-n), "n = {}", n);
            }
        }
        assert_eq!(PluralForms::HOURS.select(-1), "час");
        assert_eq!(PluralForms::HOURS.select(-2), "часа");
        assert_eq!(PluralForms::HOURS.select(-11), "часов");
        assert_eq!(PluralForms::HOURS.select(i64::MIN), PluralForms::HOURS.select(8));
    }

    #[test]
    fn test_table_holds_for_every_unit() {
        for forms in ALL {
            assert_eq!(forms.select(1), forms.one);
            assert_eq!(forms.select(2), forms.few);
            assert_eq!(forms.select(5), forms.many);
            assert_eq!(forms.select(11), forms.many);
            assert_eq!(forms.select(21), forms.one);
            assert_eq!(forms.select(24), forms.few);
        }
        assert_eq!(PluralForms::WEEKS.select(21), "неделя");
        assert_eq!(PluralForms::MINUTES.select(2), "минуты");
        assert_eq!(PluralForms::SECONDS.select(5), "секунд");
    }
}
