//! Magnitude tier matching.
//!
//! A tier is an ordered slice of [`CompoundRule`]s over digit strings of one
//! length. The rules of a tier are disjoint, so the first rule that matches
//! is the only one; [`matching_rules`] exists to prove that in the audit.

use crate::{
    lang::{CompoundRule, Continuation, DigitClass, Trigger},
    profile::LanguageProfile,
};
use smallvec::SmallVec;

pub const MAX_TIER: usize = 4;

/// Append the spoken form of `digits` (1-4 ASCII digits) to `out`.
///
/// Returns `false`, leaving `out` untouched, when no rule matches.
pub fn render(profile: &LanguageProfile, digits: &str, out: &mut String) -> bool {
    render_tier(profile, digits.len(), digits, out)
}

pub fn render_tier(profile: &LanguageProfile, tier: usize, digits: &str, out: &mut String) -> bool {
    if digits.len() != tier || !(1..=MAX_TIER).contains(&tier) {
        return false;
    }
    profile
        .tier(tier)
        .iter()
        .any(|rule| apply(rule, profile, digits, out))
}

/// Indices of every rule of `tier` that matches the full `digits` span.
pub fn matching_rules(profile: &LanguageProfile, tier: usize, digits: &str) -> SmallVec<[usize; 2]> {
    let mut scratch = String::new();
    profile
        .tier(tier)
        .iter()
        .enumerate()
        .filter(|(_, rule)| {
            scratch.clear();
            apply(rule, profile, digits, &mut scratch)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Try one rule against the full span. On failure `out` is restored.
pub fn apply(rule: &CompoundRule, profile: &LanguageProfile, digits: &str, out: &mut String) -> bool {
    let mark = out.len();
    if apply_inner(rule, profile, digits, out).is_some() {
        return true;
    }
    out.truncate(mark);
    false
}

fn apply_inner(
    rule: &CompoundRule,
    profile: &LanguageProfile,
    digits: &str,
    out: &mut String,
) -> Option<()> {
    let rest = match rule.trigger {
        Trigger::Literal(lit) => digits.strip_prefix(lit)?,
        Trigger::Class(class, lit) => {
            let &lead = digits.as_bytes().first()?;
            let word = profile.lexicon().word_for(lead, class)?;
            let rest = digits[1..].strip_prefix(lit)?;
            out.push_str(word);
            rest
        }
        Trigger::Irregular(table, lit) => {
            let (len, word) = profile.table(table).longest_prefix(digits)?;
            let rest = digits[len..].strip_prefix(lit)?;
            out.push_str(word);
            rest
        }
    };

    out.push_str(rule.connector);

    match rule.continuation {
        Continuation::End => rest.is_empty().then_some(()),
        Continuation::Digit(class) => {
            let &[unit] = rest.as_bytes() else {
                return None;
            };
            out.push_str(profile.lexicon().word_for(unit, class)?);
            Some(())
        }
        Continuation::TeenUnit => {
            let &[unit] = rest.as_bytes() else {
                return None;
            };
            if !DigitClass::Any.contains(unit) {
                return None;
            }
            let key = [b'1', unit];
            let key = std::str::from_utf8(&key).ok()?;
            out.push_str(profile.teens().get(key)?);
            Some(())
        }
        Continuation::Tier(n) => render_tier(profile, n, rest, out).then_some(()),
    }
}
