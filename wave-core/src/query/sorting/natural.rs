//! Human-friendly string ordering.
//!
//! Letters compare case- and accent-insensitively (`"Émile" == "emile"`),
//! and runs of ASCII digits compare by numeric value (`"item2" <
//! "item10"`). Characters sort in groups the way collation tables order
//! them: whitespace, then punctuation and symbols, then digits, then
//! letters. Within a group the order is by code point, which approximates
//! but does not reproduce a locale's tailoring.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = fold(a);
    let b = fold(b);
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let lhs = take_digits(&mut left);
                let rhs = take_digits(&mut right);
                match compare_digit_runs(&lhs, &rhs) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
            (Some(x), Some(y)) => {
                left.next();
                right.next();
                match char_group(x).cmp(&char_group(y)).then(x.cmp(&y)) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
        }
    }
}

/// Base letters only: decomposed, combining marks dropped, lowercased.
fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn char_group(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphanumeric() {
        3
    } else {
        1
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        run.push(digit);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
