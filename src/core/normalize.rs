//! Case folding for guesses and targets

/// Uppercase every letter of `word`, leaving other characters untouched
///
/// # Examples
/// ```
/// use wordle_daily::core::normalize;
///
/// assert_eq!(normalize("pools"), "POOLS");
/// assert_eq!(normalize("a-b 1"), "A-B 1");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_letters() {
        assert_eq!(normalize("abide"), "ABIDE");
        assert_eq!(normalize("SpOoL"), "SPOOL");
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(normalize("12 !?"), "12 !?");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("x_y-z"), "X_Y-Z");
    }

    #[test]
    fn idempotent() {
        for s in ["pools", "ERROR", "MiXeD 42", "straße", "ǆemal", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {s:?}");
        }
    }
}
