use crate::{
    cardinal::verbalize_str,
    lang::DigitClass,
    profile::LanguageProfile,
    rule::MAX_TIER,
};

/// Fraction samples checked against every integer.
const FRACTIONS: &[&str] = &["0", "5", "14", "007"];

/// Assert that a profile satisfies the verbalization laws.
///
/// 1. `audit_passes` → every tier is total and its rules disjoint
/// 2. `every_integer_is_read` → `0..=9999` all have a non-empty reading
/// 3. `percent_appends_word` → `"{n}%"` is `"{n}"` plus the percent word
/// 4. `fraction_reads_digits` → `"{n}.{d}"` is `"{n}"`, the marker word, one word per digit
/// 5. `sign_prefixes_word` → `"-{n}"` is the sign word plus `"{n}"`
/// 6. `out_of_range_is_rejected` → five digits and double markers have no reading
#[macro_export]
macro_rules! assert_profile_contract {
    ($profile:expr) => {{
        let profile: &$crate::profile::LanguageProfile = &$profile;
        $crate::testing::profile_contract::audit_passes(profile);
        $crate::testing::profile_contract::every_integer_is_read(profile);
        $crate::testing::profile_contract::percent_appends_word(profile);
        $crate::testing::profile_contract::fraction_reads_digits(profile);
        $crate::testing::profile_contract::sign_prefixes_word(profile);
        $crate::testing::profile_contract::out_of_range_is_rejected(profile);
    }};
}

fn read(profile: &LanguageProfile, text: &str) -> String {
    match verbalize_str(text, profile) {
        Some(v) => v.into_string(),
        None => panic!("{}: no reading for `{text}`", profile.lang().code()),
    }
}

fn integers() -> impl Iterator<Item = u32> {
    0..10u32.pow(MAX_TIER as u32)
}

pub fn audit_passes(profile: &LanguageProfile) {
    if let Err(e) = profile.audit() {
        panic!("audit failed: {e}");
    }
}

pub fn every_integer_is_read(profile: &LanguageProfile) {
    for n in integers() {
        let spoken = read(profile, &n.to_string());
        assert!(
            !spoken.trim().is_empty() && !spoken.contains("  "),
            "{}: bad reading `{spoken}` for {n}",
            profile.lang().code()
        );
    }
}

pub fn percent_appends_word(profile: &LanguageProfile) {
    for n in integers() {
        let plain = read(profile, &n.to_string());
        let percent = read(profile, &format!("{n}%"));
        assert_eq!(percent, format!("{plain} {}", profile.percent()));
    }
}

pub fn fraction_reads_digits(profile: &LanguageProfile) {
    let markers: Vec<&str> = profile.decimal_markers().keys().collect();
    for n in integers() {
        let plain = read(profile, &n.to_string());
        for &marker in &markers {
            let word = profile.decimal_markers().get(marker).unwrap_or_default();
            for digits in FRACTIONS {
                let mut expected = format!("{plain} {word}");
                for d in digits.bytes() {
                    expected.push(' ');
                    expected.push_str(profile.lexicon().word_for(d, DigitClass::Any).unwrap_or_default());
                }
                assert_eq!(read(profile, &format!("{n}{marker}{digits}")), expected);
            }
        }
    }
}

pub fn sign_prefixes_word(profile: &LanguageProfile) {
    let signs: Vec<&str> = profile.signs().keys().collect();
    for n in integers() {
        let plain = read(profile, &n.to_string());
        for &sign in &signs {
            let word = profile.signs().get(sign).unwrap_or_default();
            assert_eq!(read(profile, &format!("{sign}{n}")), format!("{word} {plain}"));
        }
    }
}

pub fn out_of_range_is_rejected(profile: &LanguageProfile) {
    for text in ["10000", "99999", "012", "1..5", "%", "", "5%%"] {
        assert!(
            verbalize_str(text, profile).is_none(),
            "{}: `{text}` should have no reading",
            profile.lang().code()
        );
    }
    for marker in profile.decimal_markers().keys() {
        let text = format!("1{marker}2{marker}3");
        assert!(verbalize_str(&text, profile).is_none(), "`{text}` should have no reading");
    }
}
