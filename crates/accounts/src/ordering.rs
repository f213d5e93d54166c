//! Display ordering of accounts.
//!
//! The effective display name is the trimmed custom name when one is set,
//! otherwise the name reported by the game service. Names compare
//! case- and accent-insensitively, character by character, with digit runs
//! compared by numeric value, so "Player2" sorts before "Player10" and
//! "Player 2" before "Player10". Equal names keep their relative order.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::types::{AccountRecord, AccountSummary};

/// Anything that carries a service display name and an optional override.
pub trait DisplayNamed {
    fn display_name(&self) -> &str;
    fn custom_display_name(&self) -> Option<&str>;
}

impl DisplayNamed for AccountRecord {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn custom_display_name(&self) -> Option<&str> {
        self.custom_display_name.as_deref()
    }
}

impl DisplayNamed for AccountSummary {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn custom_display_name(&self) -> Option<&str> {
        self.custom_display_name.as_deref()
    }
}

/// The custom name, trimmed, when it is not blank.
fn custom_name<T: DisplayNamed + ?Sized>(account: &T) -> Option<&str> {
    account
        .custom_display_name()
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Name an account is shown and sorted by.
pub fn effective_name<T: DisplayNamed + ?Sized>(account: &T) -> &str {
    custom_name(account).unwrap_or_else(|| account.display_name())
}

/// Annotation appended after the service name, e.g. `" (Main)"`.
///
/// Empty when no custom name is set.
pub fn custom_name_suffix<T: DisplayNamed + ?Sized>(account: &T) -> String {
    custom_name(account)
        .map(|name| format!(" ({})", name))
        .unwrap_or_default()
}

/// Stable sort by effective name.
pub fn sort_by_effective_name<T: DisplayNamed>(mut accounts: Vec<T>) -> Vec<T> {
    accounts.sort_by(|a, b| compare_names(effective_name(a), effective_name(b)));
    accounts
}

/// Locale-style comparison with numeric awareness.
///
/// Primary strength ignores case and accents; lowercase and unaccented forms
/// sort first only when the names are otherwise equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    compare_primary(a, b).then_with(|| compare_case(a, b))
}

/// Punctuation and spaces, then digits, then letters.
fn char_class(c: char) -> u8 {
    if c.is_ascii_digit() {
        1
    } else if c.is_alphanumeric() {
        2
    } else {
        0
    }
}

/// Primary-strength form of a name: decomposed, accents dropped, lowercased.
fn fold(name: &str) -> Vec<char> {
    name.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn digit_run(chars: &[char], start: usize) -> &[char] {
    let len = chars[start..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();
    &chars[start..start + len]
}

fn compare_primary(a: &str, b: &str) -> Ordering {
    let left = fold(a);
    let right = fold(b);
    let (mut i, mut j) = (0, 0);

    loop {
        let ordering = match (left.get(i), right.get(j)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let x = digit_run(&left, i);
                let y = digit_run(&right, j);
                i += x.len();
                j += y.len();
                compare_digits(x, y)
            }
            (Some(&x), Some(&y)) => {
                i += 1;
                j += 1;
                char_class(x).cmp(&char_class(y)).then(x.cmp(&y))
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn compare_digits(a: &[char], b: &[char]) -> Ordering {
    let skip_zeros = |run: &[char]| run.iter().take_while(|&&c| c == '0').count();
    let a = &a[skip_zeros(a)..];
    let b = &b[skip_zeros(b)..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Provider, Token};

    fn record(id: &str, name: &str, custom: Option<&str>) -> AccountRecord {
        let record = AccountRecord::new(id, name, Provider::Epic, Token::new("t"));
        match custom {
            Some(custom) => record.with_custom_display_name(custom),
            None => record,
        }
    }

    fn names(records: &[AccountRecord]) -> Vec<&str> {
        records.iter().map(|r| effective_name(r)).collect()
    }

    #[test]
    fn numeric_runs_compare_by_value() {
        let sorted = sort_by_effective_name(vec![
            record("a", "Player10", None),
            record("b", "Player2", None),
        ]);
        assert_eq!(names(&sorted), vec!["Player2", "Player10"]);
    }

    #[test]
    fn comparison_ignores_case_at_primary_strength() {
        assert_eq!(compare_names("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_names("Beta", "alpha"), Ordering::Greater);
        assert_eq!(compare_names("abc", "ABC"), Ordering::Less);
        assert_eq!(compare_names("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn leading_zeros_do_not_change_numeric_value() {
        assert_eq!(compare_primary("item007", "item7"), Ordering::Equal);
        assert_eq!(compare_names("item9", "item010"), Ordering::Less);
    }

    #[test]
    fn digits_sort_before_letters_and_after_punctuation() {
        assert_eq!(compare_names("1abc", "abc"), Ordering::Less);
        assert_eq!(compare_names("_abc", "1abc"), Ordering::Less);
        assert_eq!(compare_names("Player", "Player1"), Ordering::Less);
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        let input = vec![
            record("first", "Same", None),
            record("z", "Zed", None),
            record("second", "Same", None),
            record("x", "Other", Some("Alpha")),
        ];
        let sorted = sort_by_effective_name(input);
        let ids: Vec<_> = sorted.iter().map(|r| r.account_id.as_str()).collect();
        assert_eq!(ids, vec!["x", "first", "second", "z"]);

        let again = sort_by_effective_name(sorted.clone());
        assert_eq!(again, sorted);
    }

    #[test]
    fn custom_name_overrides_display_name_when_not_blank() {
        let blank = record("a", "Service", Some("   "));
        assert_eq!(effective_name(&blank), "Service");
        assert_eq!(custom_name_suffix(&blank), "");

        let custom = record("b", "Service", Some("Main"));
        assert_eq!(effective_name(&custom), "Main");
        assert_eq!(custom_name_suffix(&custom), " (Main)");

        let none = record("c", "Service", None);
        assert_eq!(effective_name(&none), "Service");
        assert_eq!(custom_name_suffix(&none), "");
    }

    #[test]
    fn custom_name_is_trimmed() {
        let padded = record("a", "Service", Some("  Main  "));
        assert_eq!(effective_name(&padded), "Main");
        assert_eq!(custom_name_suffix(&padded), " (Main)");
    }

    #[test]
    fn spaces_and_punctuation_sort_before_digits_mid_name() {
        assert_eq!(compare_names("Bob Smith", "Bob2"), Ordering::Less);
        assert_eq!(compare_names("Player 2", "Player10"), Ordering::Less);
        assert_eq!(compare_names("a!", "a5"), Ordering::Less);
        assert_eq!(compare_names("Player2", "Player 2"), Ordering::Greater);
    }

    #[test]
    fn accents_are_ignored_at_primary_strength() {
        assert_eq!(compare_names("Émile", "Zed"), Ordering::Less);
        assert_eq!(compare_names("émile", "Emily"), Ordering::Less);
        assert_eq!(compare_primary("Émile", "emile"), Ordering::Equal);
        assert_eq!(compare_names("Emile", "Émile"), Ordering::Less);

        let sorted = sort_by_effective_name(vec![
            record("z", "Zed", None),
            record("e", "Émile", None),
            record("a", "Adam", None),
        ]);
        assert_eq!(names(&sorted), vec!["Adam", "Émile", "Zed"]);
    }
}
