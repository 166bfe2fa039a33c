pub mod data;

pub use data::{CAT, EUS, GLG, LANG_TABLE, all_langs, from_code};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Case-insensitive lookup by ISO 639-3 code.
    #[inline]
    pub fn from_code(code: &str) -> Option<Lang> {
        from_code(code)
    }

    /// Built-in data for this language.
    #[inline]
    pub fn entry(&self) -> Option<&'static LangEntry> {
        LANG_TABLE.get(self.code)
    }
}

pub const DEFAULT_LANG: Lang = EUS;

/// Which digits a rule position may bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitClass {
    /// `0`-`9`
    Any,
    /// `1`-`9`
    NonZero,
    /// `2`-`9`
    NonOne,
}

impl DigitClass {
    #[inline(always)]
    pub const fn contains(self, digit: u8) -> bool {
        match self {
            DigitClass::Any => digit.is_ascii_digit(),
            DigitClass::NonZero => matches!(digit, b'1'..=b'9'),
            DigitClass::NonOne => matches!(digit, b'2'..=b'9'),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DigitClass::Any => "any",
            DigitClass::NonZero => "non-zero",
            DigitClass::NonOne => "non-one",
        }
    }
}

/// The irregular (non-compositional) tables of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// `10`-`19`
    Teens,
    /// Decade bases: the twenties of Basque, the `3`-`9` tens of Catalan and Galician.
    Tens,
}

impl Table {
    pub const fn name(self) -> &'static str {
        match self {
            Table::Teens => "teen",
            Table::Tens => "tens",
        }
    }
}

/// Leading part of a [`CompoundRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Consumes this exact digit prefix and emits nothing for it.
    Literal(&'static str),
    /// Consumes one digit of the class, emits its lexicon word, then consumes the literal.
    Class(DigitClass, &'static str),
    /// Consumes a key of the table, emits its word, then consumes the literal.
    Irregular(Table, &'static str),
}

/// What reads the digits left over after the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Nothing may be left.
    End,
    /// Exactly one digit of the class.
    Digit(DigitClass),
    /// Exactly one digit `u`, read as the teen `1u` (Basque vigesimal compounds).
    TeenUnit,
    /// Exactly `n` digits, read by magnitude tier `n`.
    Tier(usize),
}

/// One decomposition of a magnitude tier: trigger, connector text, continuation.
///
/// The connector is inserted verbatim, so it carries its own spacing or
/// hyphenation (`"hogeita "`, `"vint-i-"`, `"-cents "`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundRule {
    pub trigger: Trigger,
    pub connector: &'static str,
    pub continuation: Continuation,
}

impl CompoundRule {
    pub const fn new(trigger: Trigger, connector: &'static str, continuation: Continuation) -> Self {
        Self {
            trigger,
            connector,
            continuation,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WordMap {
    pub key: &'static str,
    pub word: &'static str,
}

/// Static lexical data and tier rules for one language.
#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    pub zero: &'static str,
    /// Words for `1`-`9`, in order.
    pub digits: &'static [&'static str; 9],
    pub teens: &'static [WordMap],
    pub tens: &'static [WordMap],
    pub signs: &'static [WordMap],
    pub decimal_markers: &'static [WordMap],
    pub percent: &'static str,
    /// Rule sets for one- to four-digit strings.
    pub tiers: [&'static [CompoundRule]; 4],
}

impl LangEntry {
    #[inline]
    pub fn tier(&self, digits: usize) -> &'static [CompoundRule] {
        match digits {
            1..=4 => self.tiers[digits - 1],
            _ => &[],
        }
    }

    /// Does any rule read from the given table?
    pub fn uses_table(&self, table: Table) -> bool {
        self.tiers.iter().flat_map(|t| t.iter()).any(|r| {
            matches!(r.trigger, Trigger::Irregular(t, _) if t == table)
                || (table == Table::Teens && r.continuation == Continuation::TeenUnit)
        })
    }
}
