//! Field rules and the patterns they use.
//!
//! Word and digit classes are spelled out as ASCII ranges so the patterns
//! accept exactly what a browser's `RegExp` would.

use std::sync::LazyLock;

use regex::Regex;

/// Message for a required field left empty.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message for a password of the wrong length.
pub const PASSWORD_LENGTH_MESSAGE: &str = "Password's length must be between 6 and 40.";

/// Message for a password missing a character class.
pub const PASSWORD_CLASSES_MESSAGE: &str =
    "Password must contain at least a symbol (!@#$%^&*), upper and lower case letters and a number.";

/// Accepted password length, in characters.
pub const PASSWORD_LENGTH: std::ops::RangeInclusive<usize> = 6..=40;

pub static PERSON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z\s]+)$").expect("Invalid regex"));

pub static SINGLE_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)$").expect("Invalid regex"));

pub static CONTACT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([7-9][0-9]{9})$").expect("Invalid regex"));

pub static STREET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9,/\s\-_@]+)$").expect("Invalid regex"));

pub static ZIPCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([1-9][0-9]{5})$").expect("Invalid regex"));

pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$",
    )
    .expect("Invalid regex")
});

pub static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(\.[0-9]{1,2})?)$").expect("Invalid regex"));

pub static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)$").expect("Invalid regex"));

static PASSWORD_CLASSES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [r"[0-9]", r"[!@#$%^&*]", r"[a-z]", r"[A-Z]"]
        .map(|class| Regex::new(class).expect("Invalid regex"))
});

/// Validation rule for one field.
///
/// `F` is the schema's field type, used by rules that compare against
/// another field.
#[derive(Debug, Clone, Copy)]
pub enum Rule<F> {
    /// Value must match `pattern`. Optional fields are valid when empty.
    Pattern {
        required: bool,
        pattern: &'static Regex,
        message: &'static str,
    },
    /// Any non-blank value.
    Required,
    /// Free text, may be empty.
    Optional,
    /// Length check, then one of each character class.
    Password,
    /// Must be non-empty and equal to the current value of `field`.
    SameAs { field: F, message: &'static str },
}

impl<F: Copy> Rule<F> {
    pub fn required(pattern: &'static Regex, message: &'static str) -> Self {
        Rule::Pattern {
            required: true,
            pattern,
            message,
        }
    }

    pub fn optional(pattern: &'static Regex, message: &'static str) -> Self {
        Rule::Pattern {
            required: false,
            pattern,
            message,
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            Rule::Pattern { required, .. } => *required,
            Rule::Optional => false,
            Rule::Required | Rule::Password | Rule::SameAs { .. } => true,
        }
    }

    /// Check `value`. `lookup` yields the current value of another field.
    pub fn check<'a>(&self, value: &str, lookup: impl FnOnce(F) -> &'a str) -> Result<(), &'static str> {
        if value.trim().is_empty() {
            return if self.is_required() {
                Err(REQUIRED_MESSAGE)
            } else {
                Ok(())
            };
        }

        match self {
            Rule::Pattern {
                pattern, message, ..
            } => {
                if pattern.is_match(value) {
                    Ok(())
                } else {
                    Err(*message)
                }
            }
            Rule::Required | Rule::Optional => Ok(()),
            Rule::Password => check_password(value),
            Rule::SameAs { field, message } => {
                if value == lookup(*field) {
                    Ok(())
                } else {
                    Err(*message)
                }
            }
        }
    }
}

/// Password policy: 6 to 40 characters with a digit, a symbol from
/// `!@#$%^&*`, a lower-case and an upper-case letter. Line breaks are not
/// allowed anywhere.
pub fn check_password(value: &str) -> Result<(), &'static str> {
    if !PASSWORD_LENGTH.contains(&value.chars().count()) {
        return Err(PASSWORD_LENGTH_MESSAGE);
    }
    let has_line_break = value
        .chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'));
    if has_line_break || !PASSWORD_CLASSES.iter().all(|class| class.is_match(value)) {
        return Err(PASSWORD_CLASSES_MESSAGE);
    }
    Ok(())
}
