// Property-based tests for field validation and shortening
//
// Properties tested:
// 1. shorten keeps min(len, n) characters
// 2. shorten returns a character prefix of its input
// 3. shorten is idempotent
// 4. validate_an accepts exactly the values of 1..=n characters
// 5. validate_null_or_an always accepts an absent value

use omnikassa::orders::DataHelper;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_shorten_length(s in "\\PC{0,80}", n in 0usize..100) {
        let shortened = DataHelper::shorten(&s, n);
        let expected = s.chars().count().min(n);

        prop_assert_eq!(shortened.chars().count(), expected);
    }

    #[test]
    fn test_shorten_is_character_prefix(s in "\\PC{0,80}", n in 0usize..100) {
        let shortened = DataHelper::shorten(&s, n);

        prop_assert!(s.starts_with(&shortened));
        prop_assert!(s.chars().zip(shortened.chars()).all(|(a, b)| a == b));
    }

    #[test]
    fn test_shorten_is_idempotent(s in "\\PC{0,80}", n in 0usize..100) {
        let once = DataHelper::shorten(&s, n);
        let twice = DataHelper::shorten(&once, n);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_validate_an_matches_length(s in "\\PC{0,40}", n in 0usize..50) {
        let length = s.chars().count();
        let valid = DataHelper::validate_an(&s, n).is_ok();

        prop_assert_eq!(valid, length >= 1 && length <= n);
    }

    #[test]
    fn test_validate_null_always_passes(n in 0usize..10_000) {
        prop_assert!(DataHelper::validate_null_or_an(None, n).is_ok());
    }
}

#[test]
fn test_exact_length_boundary() {
    assert!(DataHelper::validate_an("1234567890", 10).is_ok());
    assert!(DataHelper::validate_an("12345678901", 10).is_err());
}

#[test]
fn test_shorten_scenarios() {
    assert_eq!(DataHelper::shorten("1234567890", 5), "12345");
    assert_eq!(DataHelper::shorten("ÀÁÂÃÄÅÆÇÈÉ", 5), "ÀÁÂÃÄ");
    assert_eq!(
        DataHelper::shorten("كنت أريد أن أقرأ كتابا عن تاريخ المرأة في فرنسا", 10),
        "كنت أريد أ"
    );
}

#[test]
fn test_shorten_combining_marks_by_code_point() {
    // "e" followed by a combining acute accent is two characters
    let value = "e\u{301}e\u{301}e\u{301}";
    assert_eq!(DataHelper::shorten(value, 3), "e\u{301}e");
}
