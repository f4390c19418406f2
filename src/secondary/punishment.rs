//! Misery card counts in punishment text
//!
//! Only the Misery card part of a punishment has a reliable printed form
//! ("+2 Cartas de Miséria", "+1 Misery card"). Everything else in a
//! punishment (SP loss, spawn modifiers, restrictions) is applied by the
//! players from the text.

/// Number of Misery cards a punishment adds
///
/// Matches "+N Carta(s) de Miséria" and "+N Misery card(s)" in any case,
/// with or without spaces between the parts. Returns 0 when the text names
/// no numeric Misery card count.
pub fn parse_misery_card_punishment(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let mut rest = lower.as_str();

    while let Some(plus) = rest.find('+') {
        rest = &rest[plus + 1..];

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            continue;
        }
        let (number, tail) = rest.split_at(digits);
        if names_misery_cards(tail) {
            if let Ok(count) = number.parse() {
                return count;
            }
        }
    }

    0
}

fn names_misery_cards(text: &str) -> bool {
    english(text).or_else(|| portuguese(text)).is_some()
}

fn english(text: &str) -> Option<()> {
    let rest = word(text, "misery")?;
    word(rest, "card")?;
    Some(())
}

fn portuguese(text: &str) -> Option<()> {
    let rest = word(text, "carta")?;
    let rest = rest.strip_prefix('s').unwrap_or(rest);
    let rest = word(rest, "de")?;
    word(rest, "miséria").or_else(|| word(rest, "miseria"))?;
    Some(())
}

fn word<'a>(text: &'a str, expected: &str) -> Option<&'a str> {
    text.trim_start().strip_prefix(expected)
}
