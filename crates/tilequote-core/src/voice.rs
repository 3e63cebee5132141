//! Spoken value parser.
//!
//! Turns a speech-to-text transcript into a field value. Numeric fields
//! accept the words a tiler says while measuring:
//!
//! ```text
//! "two point four metres"     → "2.4"
//! "twenty five"               → "25"
//! "one hundred and five"      → "105"
//! "point seven five"          → "0.75"
//! "3.6m"                      → "3.6"
//! "about three"               → None
//! ```
//!
//! Reading stops at the first word that cannot continue the number, so
//! "three by four" reads as 3.

const UNIT_WORDS: [&str; 5] = ["m", "metre", "metres", "meter", "meters"];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Word {
    /// zero to twelve, and fifteen
    Small(u64),
    /// twenty, thirty, forty, fifty
    Tens(u64),
    Hundred,
    Point,
    And,
}

fn word(token: &str) -> Option<Word> {
    let w = match token {
        "zero" => Word::Small(0),
        "one" => Word::Small(1),
        "two" => Word::Small(2),
        "three" => Word::Small(3),
        "four" => Word::Small(4),
        "five" => Word::Small(5),
        "six" => Word::Small(6),
        "seven" => Word::Small(7),
        "eight" => Word::Small(8),
        "nine" => Word::Small(9),
        "ten" => Word::Small(10),
        "eleven" => Word::Small(11),
        "twelve" => Word::Small(12),
        "fifteen" => Word::Small(15),
        "twenty" => Word::Tens(20),
        "thirty" => Word::Tens(30),
        "forty" => Word::Tens(40),
        "fifty" => Word::Tens(50),
        "hundred" => Word::Hundred,
        "point" => Word::Point,
        "and" => Word::And,
        _ => return None,
    };
    Some(w)
}

/// Leading `[0-9.]` run of a token, and whether anything followed it.
fn numeric_prefix(token: &str) -> (&str, bool) {
    let end = token
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(token.len());
    (&token[..end], end < token.len())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Last {
    Nothing,
    Small,
    Tens,
    Hundred,
    Digits,
}

/// Parses a transcript for a field.
///
/// Text fields get the trimmed transcript back. Numeric fields get a decimal
/// string, or `None` when no number can be read (the caller should then
/// leave the field unchanged).
pub fn parse_spoken_value(raw: &str, numeric: bool) -> Option<String> {
    if !numeric {
        return Some(raw.trim().to_string());
    }

    let lowered = raw.to_lowercase();
    let tokens = lowered
        .split_whitespace()
        .filter(|t| !UNIT_WORDS.contains(t));

    let mut whole: u64 = 0;
    let mut literal: Option<String> = None;
    let mut last = Last::Nothing;
    let mut fraction = String::new();
    let mut in_fraction = false;

    for token in tokens {
        if in_fraction {
            match word(token) {
                Some(Word::Small(n)) if n < 10 => fraction.push_str(&n.to_string()),
                Some(Word::And) => {}
                _ => {
                    let (digits, trailing) = numeric_prefix(token);
                    if digits.is_empty() || digits.contains('.') {
                        break;
                    }
                    fraction.push_str(digits);
                    if trailing {
                        break;
                    }
                }
            }
            continue;
        }

        match (word(token), last) {
            (Some(Word::And), _) => {}
            (Some(Word::Point), _) => in_fraction = true,
            (Some(Word::Small(n)), Last::Nothing | Last::Hundred) => {
                whole += n;
                last = Last::Small;
            }
            (Some(Word::Small(n)), Last::Tens) if n < 10 => {
                whole += n;
                last = Last::Small;
            }
            (Some(Word::Tens(n)), Last::Nothing | Last::Hundred) => {
                whole += n;
                last = Last::Tens;
            }
            (Some(Word::Hundred), Last::Nothing) => {
                whole = 100;
                last = Last::Hundred;
            }
            (Some(Word::Hundred), Last::Small | Last::Tens | Last::Digits) => {
                whole = whole.saturating_mul(100);
                last = Last::Hundred;
            }
            (Some(_), _) => break,
            (None, Last::Nothing) => {
                let (digits, trailing) = numeric_prefix(token);
                if digits.is_empty() {
                    return None;
                }
                if digits.contains('.') {
                    literal = Some(digits.to_string());
                    break;
                }
                whole = digits.parse().ok()?;
                last = Last::Digits;
                if trailing {
                    break;
                }
            }
            (None, _) => break,
        }
    }

    let text = match literal {
        Some(text) => text,
        None if last == Last::Nothing && fraction.is_empty() => return None,
        None if fraction.is_empty() => whole.to_string(),
        None => format!("{whole}.{fraction}"),
    };
    let value: f64 = text.trim_end_matches('.').parse().ok()?;
    value.is_finite().then(|| value.to_string())
}
