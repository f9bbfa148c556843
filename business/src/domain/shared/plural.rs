/// Grammatical number class for Russian nouns after a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    /// 1, 21, 101 ...
    One,
    /// 2-4, 22-24 ...
    Few,
    /// 0, 5-20, 11-14, 111 ...
    Many,
}

impl PluralForm {
    pub fn for_count(count: i64) -> Self {
        let count = count.unsigned_abs();
        if (11..=19).contains(&(count % 100)) {
            return PluralForm::Many;
        }
        match count % 10 {
            1 => PluralForm::One,
            2..=4 => PluralForm::Few,
            _ => PluralForm::Many,
        }
    }
}

/// Picks the noun form that follows `count`: `one`, `few` or `many`.
pub fn pluralize(count: i64, one: &'static str, few: &'static str, many: &'static str) -> &'static str {
    match PluralForm::for_count(count) {
        PluralForm::One => one,
        PluralForm::Few => few,
        PluralForm::Many => many,
    }
}

/// "день" / "дня" / "дней"
pub fn day_word(count: i64) -> &'static str {
    pluralize(count, "день", "дня", "дней")
}

/// "месяц" / "месяца" / "месяцев"
pub fn month_word(count: i64) -> &'static str {
    pluralize(count, "месяц", "месяца", "месяцев")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_inflect_day_word_for_reference_counts() {
        assert_eq!(day_word(1), "день");
        assert_eq!(day_word(2), "дня");
        assert_eq!(day_word(5), "дней");
        assert_eq!(day_word(11), "дней");
        assert_eq!(day_word(21), "день");
        assert_eq!(day_word(101), "день");
        assert_eq!(day_word(111), "дней");
    }

    #[test]
    fn should_inflect_month_word_for_reference_counts() {
        assert_eq!(month_word(1), "месяц");
        assert_eq!(month_word(2), "месяца");
        assert_eq!(month_word(5), "месяцев");
        assert_eq!(month_word(11), "месяцев");
        assert_eq!(month_word(21), "месяц");
        assert_eq!(month_word(101), "месяц");
        assert_eq!(month_word(111), "месяцев");
    }

    #[test]
    fn should_use_many_form_for_teens_even_when_last_digit_is_small() {
        for count in [12, 13, 14, 112, 214] {
            assert_eq!(PluralForm::for_count(count), PluralForm::Many, "{count}");
        }
    }

    #[test]
    fn should_use_few_form_for_two_to_four() {
        for count in [3, 4, 22, 34, 1002] {
            assert_eq!(PluralForm::for_count(count), PluralForm::Few, "{count}");
        }
    }

    #[test]
    fn should_use_many_form_for_zero() {
        assert_eq!(day_word(0), "дней");
    }

    #[test]
    fn should_inflect_negative_counts_by_magnitude() {
        assert_eq!(day_word(-1), "день");
        assert_eq!(day_word(-3), "дня");
    }
}
