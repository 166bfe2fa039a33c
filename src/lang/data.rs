use crate::lang::{
    CompoundRule as R,
    Continuation::{Digit, End, TeenUnit, Tier},
    DigitClass::{Any, NonOne, NonZero},
    Lang, LangEntry,
    Table::{Teens, Tens},
    Trigger::{Class, Irregular, Literal},
    WordMap,
};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro: generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $code:ident, $code_str:literal, $name:literal,
        zero: $zero:literal,
        digits: [ $($digit:literal),* $(,)? ],
        teens: [ $($tk:literal => $tw:literal),* $(,)? ],
        tens: [ $($dk:literal => $dw:literal),* $(,)? ],
        signs: [ $($sk:literal => $sw:literal),* $(,)? ],
        dot: [ $($pk:literal => $pw:literal),* $(,)? ],
        percent: $percent:literal,
        tiers: [ $t1:expr, $t2:expr, $t3:expr, $t4:expr $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub const DIGITS: &[&str; 9] = &[$($digit),*];

                    pub const TEENS: &[WordMap] = &[
                        $(WordMap { key: $tk, word: $tw }),*
                    ];

                    pub const TENS: &[WordMap] = &[
                        $(WordMap { key: $dk, word: $dw }),*
                    ];

                    pub const SIGNS: &[WordMap] = &[
                        $(WordMap { key: $sk, word: $sw }),*
                    ];

                    pub const DOT: &[WordMap] = &[
                        $(WordMap { key: $pk, word: $pw }),*
                    ];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        zero: $zero,
                        digits: [<$code:lower _data>]::DIGITS,
                        teens: [<$code:lower _data>]::TEENS,
                        tens: [<$code:lower _data>]::TENS,
                        signs: [<$code:lower _data>]::SIGNS,
                        decimal_markers: [<$code:lower _data>]::DOT,
                        percent: $percent,
                        tiers: [$t1, $t2, $t3, $t4],
                    }
                ),*
            };
        }

        // Helper: `Lang::from_code`
        pub fn from_code(code: &str) -> Option<Lang> {
            let upper = code.to_uppercase();
            match upper.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }

        pub fn all_langs() -> &'static [Lang] {
            &[$($code),*]
        }
    };
}

// ---------------------------------------------------------------------------
//    Magnitude tiers
//    Each tier lists disjoint rules; order never changes the outcome.
// ---------------------------------------------------------------------------
const ONE_DIGIT: &[R] = &[R::new(Class(Any, ""), "", End)];

// Basque counts in twenties: the odd decades (30s, 50s, 70s, 90s) add a teen
// word to the even base instead of a unit.
const EUS_TWO_DIGIT: &[R] = &[
    R::new(Irregular(Teens, ""), "", End),
    R::new(Irregular(Tens, ""), "", End),
    R::new(Literal("2"), "hogeita ", Digit(NonZero)),
    R::new(Literal("3"), "hogeita ", TeenUnit),
    R::new(Literal("4"), "berrogeita ", Digit(NonZero)),
    R::new(Literal("5"), "berrogeita ", TeenUnit),
    R::new(Literal("6"), "hirurogeita ", Digit(NonZero)),
    R::new(Literal("7"), "hirurogeita ", TeenUnit),
    R::new(Literal("8"), "laurogeita ", Digit(NonZero)),
    R::new(Literal("9"), "laurogeita ", TeenUnit),
];

const EUS_THREE_DIGIT: &[R] = &[
    R::new(Literal("100"), "ehun", End),
    R::new(Literal("10"), "ehun eta ", Digit(NonZero)),
    R::new(Literal("1"), "ehun eta ", Tier(2)),
    R::new(Class(NonOne, "00"), " ehun", End),
    R::new(Class(NonOne, "0"), " ehun eta ", Digit(NonZero)),
    R::new(Class(NonOne, ""), " ehun eta ", Tier(2)),
];

const EUS_FOUR_DIGIT: &[R] = &[
    R::new(Literal("1000"), "mila", End),
    R::new(Literal("100"), "mila eta ", Digit(NonZero)),
    R::new(Literal("10"), "mila eta ", Tier(2)),
    R::new(Literal("1"), "mila ", Tier(3)),
    R::new(Class(NonOne, "000"), " mila", End),
    R::new(Class(NonOne, "00"), " mila eta ", Digit(NonZero)),
    R::new(Class(NonOne, "0"), " mila eta ", Tier(2)),
    R::new(Class(NonOne, ""), " mila ", Tier(3)),
];

const CAT_TWO_DIGIT: &[R] = &[
    R::new(Irregular(Teens, ""), "", End),
    R::new(Literal("20"), "vint", End),
    R::new(Literal("2"), "vint-i-", Digit(NonZero)),
    R::new(Irregular(Tens, "0"), "", End),
    R::new(Irregular(Tens, ""), "-", Digit(NonZero)),
];

const CAT_THREE_DIGIT: &[R] = &[
    R::new(Literal("100"), "cent", End),
    R::new(Literal("10"), "cent ", Digit(NonZero)),
    R::new(Literal("1"), "cent ", Tier(2)),
    R::new(Class(NonOne, "00"), "-cents", End),
    R::new(Class(NonOne, "0"), "-cents ", Digit(NonZero)),
    R::new(Class(NonOne, ""), "-cents ", Tier(2)),
];

// Shared by Catalan and Galician: both say "mil" and never "un mil".
const MIL_FOUR_DIGIT: &[R] = &[
    R::new(Literal("1000"), "mil", End),
    R::new(Literal("100"), "mil ", Digit(NonZero)),
    R::new(Literal("10"), "mil ", Tier(2)),
    R::new(Literal("1"), "mil ", Tier(3)),
    R::new(Class(NonOne, "000"), " mil", End),
    R::new(Class(NonOne, "00"), " mil ", Digit(NonZero)),
    R::new(Class(NonOne, "0"), " mil ", Tier(2)),
    R::new(Class(NonOne, ""), " mil ", Tier(3)),
];

const GLG_TWO_DIGIT: &[R] = &[
    R::new(Irregular(Teens, ""), "", End),
    R::new(Literal("20"), "vinte", End),
    R::new(Literal("2"), "vinte e ", Digit(NonZero)),
    R::new(Irregular(Tens, "0"), "", End),
    R::new(Irregular(Tens, ""), " e ", Digit(NonZero)),
];

// Galician glues the multiplier onto the hundreds ("douscentos").
const GLG_THREE_DIGIT: &[R] = &[
    R::new(Literal("100"), "cen", End),
    R::new(Literal("10"), "cento ", Digit(NonZero)),
    R::new(Literal("1"), "cento ", Tier(2)),
    R::new(Class(NonOne, "00"), "centos", End),
    R::new(Class(NonOne, "0"), "centos ", Digit(NonZero)),
    R::new(Class(NonOne, ""), "centos ", Tier(2)),
];

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
// ---------------------------------------------------------------------------
define_languages! {
    EUS, "EUS", "Basque",
        zero: "zero",
        digits: ["bat", "bi", "hiru", "lau", "bost", "sei", "zazpi", "zortzi", "bederatzi"],
        teens: [
            "10" => "hamar", "11" => "hamaika", "12" => "hamabi", "13" => "hamahiru",
            "14" => "hamalau", "15" => "hamabost", "16" => "hamasei", "17" => "hamazazpi",
            "18" => "hemezortzi", "19" => "hemeretzi",
        ],
        tens: [ "20" => "hogei", "40" => "berrogei", "60" => "hirurogei", "80" => "laurogei" ],
        signs: [ "-" => "minus", "\u{2212}" => "minus", "+" => "plus" ],
        dot: [ "." => "koma" ],
        percent: "ehuneko",
        tiers: [ONE_DIGIT, EUS_TWO_DIGIT, EUS_THREE_DIGIT, EUS_FOUR_DIGIT],

    CAT, "CAT", "Catalan",
        zero: "zero",
        digits: ["un", "dos", "tres", "quatre", "cinc", "sis", "set", "vuit", "nou"],
        teens: [
            "10" => "deu", "11" => "onze", "12" => "dotze", "13" => "tretze",
            "14" => "catorze", "15" => "quinze", "16" => "setze", "17" => "disset",
            "18" => "divuit", "19" => "dinou",
        ],
        tens: [
            "3" => "trenta", "4" => "quaranta", "5" => "cinquanta", "6" => "seixanta",
            "7" => "setanta", "8" => "vuitanta", "9" => "noranta",
        ],
        signs: [ "-" => "menys", "\u{2212}" => "menys", "+" => "més" ],
        dot: [ "." => "coma" ],
        percent: "per cent",
        tiers: [ONE_DIGIT, CAT_TWO_DIGIT, CAT_THREE_DIGIT, MIL_FOUR_DIGIT],

    GLG, "GLG", "Galician",
        zero: "cero",
        digits: ["un", "dous", "tres", "catro", "cinco", "seis", "sete", "oito", "nove"],
        teens: [
            "10" => "dez", "11" => "once", "12" => "doce", "13" => "trece",
            "14" => "catorce", "15" => "quince", "16" => "dezaseis", "17" => "dezasete",
            "18" => "dezaoito", "19" => "dezanove",
        ],
        tens: [
            "3" => "trinta", "4" => "corenta", "5" => "cincuenta", "6" => "sesenta",
            "7" => "setenta", "8" => "oitenta", "9" => "noventa",
        ],
        signs: [ "-" => "menos", "\u{2212}" => "menos", "+" => "máis" ],
        dot: [ "." => "coma" ],
        percent: "por cento",
        tiers: [ONE_DIGIT, GLG_TWO_DIGIT, GLG_THREE_DIGIT, MIL_FOUR_DIGIT],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{Continuation, Table, Trigger};

    fn get_from_table(code: &str) -> &'static LangEntry {
        LANG_TABLE
            .get(code)
            .unwrap_or_else(|| panic!("{code} missing from LANG_TABLE"))
    }

    #[test]
    fn every_lang_is_in_the_table() {
        for lang in all_langs() {
            assert!(LANG_TABLE.get(lang.code()).is_some(), "{}", lang.name());
            assert_eq!(lang.entry().map(|e| e.zero), Some(get_from_table(lang.code()).zero));
        }
        assert_eq!(all_langs().len(), LANG_TABLE.len());
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(from_code("eus"), Some(EUS));
        assert_eq!(from_code("Cat"), Some(CAT));
        assert_eq!(from_code("GLG"), Some(GLG));
        assert_eq!(from_code("spa"), None);
        assert_eq!(Lang::from_code("glg"), Some(GLG));
    }

    #[test]
    fn teens_cover_ten_to_nineteen() {
        for lang in all_langs() {
            let teens = get_from_table(lang.code()).teens;
            let keys: Vec<&str> = teens.iter().map(|m| m.key).collect();
            let expected: Vec<String> = (10..20).map(|n| n.to_string()).collect();
            assert_eq!(keys, expected, "{}", lang.name());
        }
    }

    #[test]
    fn basque_tens_are_vigesimal() {
        let keys: Vec<&str> = get_from_table("EUS").tens.iter().map(|m| m.key).collect();
        assert_eq!(keys, ["20", "40", "60", "80"]);
        assert!(get_from_table("EUS").uses_table(Table::Teens));
    }

    #[test]
    fn romance_tens_are_keyed_by_leading_digit() {
        for code in ["CAT", "GLG"] {
            let keys: Vec<&str> = get_from_table(code).tens.iter().map(|m| m.key).collect();
            assert_eq!(keys, ["3", "4", "5", "6", "7", "8", "9"]);
        }
    }

    #[test]
    fn only_basque_reads_teen_units() {
        let reads_teen_unit = |code: &str| {
            get_from_table(code)
                .tiers
                .iter()
                .flat_map(|t| t.iter())
                .any(|r| r.continuation == Continuation::TeenUnit)
        };
        assert!(reads_teen_unit("EUS"));
        assert!(!reads_teen_unit("CAT"));
        assert!(!reads_teen_unit("GLG"));
    }

    #[test]
    fn tiers_recurse_strictly_downwards() {
        for lang in all_langs() {
            let entry = get_from_table(lang.code());
            for digits in 1..=4 {
                for rule in entry.tier(digits) {
                    if let Continuation::Tier(n) = rule.continuation {
                        assert!(n < digits, "{} tier {digits} recurses into {n}", lang.name());
                    }
                }
            }
        }
    }

    #[test]
    fn catalan_hundreds_are_hyphenated_and_galician_glued() {
        let connector = |code: &str| {
            get_from_table(code)
                .tier(3)
                .iter()
                .find(|r| r.trigger == Trigger::Class(NonOne, "00"))
                .map(|r| r.connector)
        };
        assert_eq!(connector("EUS"), Some(" ehun"));
        assert_eq!(connector("CAT"), Some("-cents"));
        assert_eq!(connector("GLG"), Some("centos"));
    }
}
