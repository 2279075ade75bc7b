//! Declarative validation rules for the registration form.
//!
//! DESIGN
//! ======
//! Each field maps to an ordered list of rules. Evaluation stops at the first
//! failing rule, so a field reports at most one message. Fields are checked
//! independently; there are no cross-field rules.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::RegistrationInput;

pub const NAME_MAX_LEN: usize = 32;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 32;

pub const NAME_REQUIRED: &str = "Name is required";
// Quoted number does not match NAME_MAX_LEN.
pub const NAME_TOO_LONG: &str = "Name must be less than 100 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be more than 8 characters";
pub const PASSWORD_TOO_LONG: &str = "Password must be less than 32 characters";

/// Local part, `@`, one or more dotted labels, then an alphabetic TLD.
///
/// The leading-dot and double-dot cases are rejected separately in
/// [`is_email_shape`] because the `regex` crate has no lookahead. Case folding
/// is ASCII-only, so non-ASCII lookalikes such as KELVIN SIGN never match `[a-z]`.
static EMAIL_SHAPE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
});

/// Whether `value` looks like an email address.
pub fn is_email_shape(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_SHAPE.as_ref().is_ok_and(|re| re.is_match(value))
}

/// Form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    /// Wire and DOM name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Visible label rendered above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

/// A single predicate applied to one field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty. Whitespace counts as content.
    Required,
    /// At least this many UTF-16 code units.
    MinLen(usize),
    /// At most this many UTF-16 code units.
    MaxLen(usize),
    /// Must look like an email address.
    Email,
}

impl Rule {
    pub fn passes(self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::MinLen(min) => value.encode_utf16().count() >= min,
            Rule::MaxLen(max) => value.encode_utf16().count() <= max,
            Rule::Email => is_email_shape(value),
        }
    }
}

/// A rule paired with the message shown when it fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }
}

/// Current raw text of every field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Failing fields mapped to their message. Passing fields are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }
}

/// Ordered rules for every field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    rules: BTreeMap<Field, Vec<FieldRule>>,
}

impl Schema {
    /// The registration form rules.
    pub fn registration() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            Field::Name,
            vec![
                FieldRule::new(Rule::Required, NAME_REQUIRED),
                FieldRule::new(Rule::MaxLen(NAME_MAX_LEN), NAME_TOO_LONG),
            ],
        );
        rules.insert(
            Field::Email,
            vec![
                FieldRule::new(Rule::Required, EMAIL_REQUIRED),
                FieldRule::new(Rule::Email, EMAIL_INVALID),
            ],
        );
        rules.insert(
            Field::Password,
            vec![
                FieldRule::new(Rule::Required, PASSWORD_REQUIRED),
                FieldRule::new(Rule::MinLen(PASSWORD_MIN_LEN), PASSWORD_TOO_SHORT),
                FieldRule::new(Rule::MaxLen(PASSWORD_MAX_LEN), PASSWORD_TOO_LONG),
            ],
        );
        Self { rules }
    }

    pub fn rules(&self, field: Field) -> &[FieldRule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Message of the first rule `value` violates, if any.
    pub fn check_field(&self, field: Field, value: &str) -> Option<&'static str> {
        self.rules(field)
            .iter()
            .find(|r| !r.rule.passes(value))
            .map(|r| r.message)
    }

    /// Validate every field, producing the input to submit or the error map.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldErrors`] holding one message per failing field.
    pub fn validate(&self, values: &FieldValues) -> Result<RegistrationInput, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Some(message) = self.check_field(field, values.get(field)) {
                errors.insert(field, message);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegistrationInput {
            name: values.name.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
        })
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::registration()
    }
}
