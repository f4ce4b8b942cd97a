//! Poetic literal decoding.
//!
//! A poetic number is a sequence of words; each word is one digit, the
//! number of letters it has modulo 10. Hyphens count as letters, any other
//! character is ignored. The first period starts the fractional part.
//! Parenthesised comments are skipped.

/// Decode a poetic number. `None` if the text holds no digit at all.
pub fn poetic_number(text: &str) -> Option<f64> {
    let mut integer = String::new();
    let mut fraction = String::new();
    let mut in_fraction = false;
    let mut in_comment = false;
    let mut letters = 0u32;

    let mut flush = |letters: &mut u32, in_fraction: bool| {
        if *letters > 0 {
            let digit = char::from(b'0' + (*letters % 10) as u8);
            if in_fraction {
                fraction.push(digit);
            } else {
                integer.push(digit);
            }
        }
        *letters = 0;
    };

    for c in text.chars() {
        if in_comment {
            in_comment = c != ')';
            continue;
        }
        match c {
            '(' => {
                flush(&mut letters, in_fraction);
                in_comment = true;
            }
            '.' => {
                flush(&mut letters, in_fraction);
                in_fraction = true;
            }
            c if c.is_whitespace() => flush(&mut letters, in_fraction),
            c if c.is_alphabetic() || c == '-' => letters += 1,
            _ => {}
        }
    }
    flush(&mut letters, in_fraction);

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    if integer.is_empty() {
        integer.push('0');
    }
    let literal = if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    };
    literal.parse().ok()
}

/// Decode a poetic string: the rest of the line after `says`, minus the
/// single separating space.
pub fn poetic_string(text: &str) -> &str {
    let text = text.strip_suffix('\r').unwrap_or(text);
    text.strip_prefix(' ').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_bad_monster() {
        assert_eq!(poetic_number("a big bad monster"), Some(1337.0));
    }

    #[test]
    fn word_lengths_wrap_at_ten() {
        assert_eq!(poetic_number("a lean mean wrecking machine"), Some(14487.0));
        assert_eq!(poetic_number("dispassionately"), Some(5.0));
        assert_eq!(poetic_number("incandescent"), Some(2.0));
    }

    #[test]
    fn ten_letters_is_zero() {
        assert_eq!(poetic_number("a motorcycle"), Some(10.0));
    }

    #[test]
    fn first_period_starts_fraction() {
        assert_eq!(poetic_number("ice. A life unfulfilled"), Some(3.141));
        assert_eq!(poetic_number("ice. A life. unfulfilled"), Some(3.141));
    }

    #[test]
    fn hyphens_count_and_punctuation_does_not() {
        assert_eq!(poetic_number("double-take"), Some(1.0));
        assert_eq!(poetic_number("a dog's life!"), Some(144.0));
    }

    #[test]
    fn comments_are_ignored() {
        assert_eq!(poetic_number("a big (really) bad monster"), Some(1337.0));
    }

    #[test]
    fn no_words_is_none() {
        assert_eq!(poetic_number("   "), None);
        assert_eq!(poetic_number("!!"), None);
    }

    #[test]
    fn poetic_strings_keep_the_rest_verbatim() {
        assert_eq!(poetic_string(" Hello San Francisco!\r"), "Hello San Francisco!");
        assert_eq!(poetic_string("  two spaces"), " two spaces");
    }
}
