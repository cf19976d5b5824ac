//! Boarding stage heuristics.
//!
//! Without real stage data we guess the boarding stage from the location
//! text the user typed.

/// Known localities and the stage a matatu rider would board from.
///
/// Evaluated in order; the first keyword found in the location wins.
pub const STAGES: &[(&str, &str)] = &[
    ("nairobi", "Kencom"),
    ("westlands", "Westlands Stage"),
    ("thika", "Thika Stage"),
    ("kiambu", "Kiambu Stage"),
    ("karen", "Karen Shopping Centre"),
    ("eastleigh", "Eastleigh Stage"),
    ("kasarani", "Kasarani Stage"),
    ("embakasi", "Embakasi Stage"),
    ("roysambu", "Roysambu Stage"),
    ("githurai", "Githurai Stage"),
];

/// Stage used when no keyword matches.
pub const DEFAULT_STAGE: &str = "Kencom";

/// Generic stage labels used for alternative itineraries.
pub const ALTERNATIVE_STAGES: [&str; 3] = ["Bus Station", "Town Centre", "Market Stage"];

/// Stage name for a free-text location.
///
/// Matching is a case-insensitive substring search over [`STAGES`].
///
/// # Examples
///
/// ```
/// use matatu_server::domain::derive_stage;
///
/// assert_eq!(derive_stage("Sarit Centre, WESTLANDS"), "Westlands Stage");
/// assert_eq!(derive_stage("Kilimani"), "Kencom");
/// ```
pub fn derive_stage(location: &str) -> &'static str {
    let location = location.to_lowercase();
    STAGES
        .iter()
        .find(|(keyword, _)| location.contains(keyword))
        .map(|&(_, stage)| stage)
        .unwrap_or(DEFAULT_STAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keywords() {
        assert_eq!(derive_stage("Westlands"), "Westlands Stage");
        assert_eq!(derive_stage("Karen"), "Karen Shopping Centre");
        assert_eq!(derive_stage("Githurai 45"), "Githurai Stage");
        assert_eq!(derive_stage("Nairobi CBD"), "Kencom");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(derive_stage("EASTLEIGH"), "Eastleigh Stage");
        assert_eq!(derive_stage("eMbAkAsI"), "Embakasi Stage");
    }

    #[test]
    fn unknown_falls_back_to_kencom() {
        assert_eq!(derive_stage("Kilimani"), DEFAULT_STAGE);
        assert_eq!(derive_stage(""), DEFAULT_STAGE);
    }

    #[test]
    fn first_declared_keyword_wins() {
        // Both "nairobi" and "karen" appear; "nairobi" is declared first.
        assert_eq!(derive_stage("Karen, Nairobi"), "Kencom");
        // "westlands" is declared before "thika".
        assert_eq!(derive_stage("Thika Road via Westlands"), "Westlands Stage");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A keyword embedded anywhere, in any case, yields its stage
        #[test]
        fn embedded_keyword_matches(
            idx in 0..STAGES.len(),
            prefix in "[0-9 ,]{0,8}",
            suffix in "[0-9 ,]{0,8}",
            upper in any::<bool>(),
        ) {
            let (keyword, stage) = STAGES[idx];
            let keyword = if upper { keyword.to_uppercase() } else { keyword.to_string() };
            let location = format!("{prefix}{keyword}{suffix}");
            prop_assert_eq!(derive_stage(&location), stage);
        }

        /// Text without letters never matches a keyword
        #[test]
        fn no_letters_is_default(s in "[0-9 ,.-]{0,20}") {
            prop_assert_eq!(derive_stage(&s), DEFAULT_STAGE);
        }
    }
}
