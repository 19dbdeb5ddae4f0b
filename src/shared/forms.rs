//! Form Input and Validation
//!
//! Each HTML form posted to the server has a matching struct here. The
//! struct is deserialized straight from the urlencoded body (missing fields
//! become empty strings) and then consumed by `validate()`, which returns a
//! [`Validated`] value:
//!
//! - `Valid(form)` - every rule passed
//! - `Invalid(form, errors)` - at least one field failed; `form` still holds
//!   what the user typed so the page can be re-displayed with their input
//!
//! # Rules
//!
//! - **NewSnippet**: title required (max 100 chars), content required,
//!   expires required and one of 1, 7 or 365 days
//! - **SignupUser**: name required, email required (max 254 chars, must look
//!   like an address), password required (min 8 chars)
//! - **LoginUser**: email and password required
//!
//! No field on any form may contain a NUL character.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Message for an empty required field
pub const REQUIRED: &str = "This field is required";
/// Message for a value outside the permitted set or format
pub const INVALID: &str = "This field is invalid";
/// Message shown on the login form for any credential failure
pub const INVALID_CREDENTIALS: &str = "Email or Password is incorrect";
/// Message shown on the signup form when the email is taken
pub const DUPLICATE_EMAIL: &str = "Address is already in use";

/// Snippet lifetimes offered by the creation form, in days
pub const PERMITTED_EXPIRES: [&str; 3] = ["365", "7", "1"];

/// Field name to failure message
///
/// Ordered so that rendered error lists are stable.
pub type FieldErrors = BTreeMap<String, String>;

/// Outcome of validating a submitted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T> {
    /// All rules passed
    Valid(T),
    /// One or more fields failed; the form keeps the submitted values
    Invalid(T, FieldErrors),
}

impl<T> Validated<T> {
    fn from_parts(form: T, errors: FieldErrors) -> Self {
        if errors.is_empty() {
            Self::Valid(form)
        } else {
            Self::Invalid(form, errors)
        }
    }

    /// True for `Valid`
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Collects failures for one form, keeping only the first per field
#[derive(Debug, Default)]
struct Checker {
    errors: FieldErrors,
}

impl Checker {
    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    fn required(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.fail(field, REQUIRED);
        }
    }

    fn max_length(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.fail(field, format!("This field is too long (maximum is {} characters)", max));
        }
    }

    fn min_length(&mut self, field: &str, value: &str, min: usize) {
        if !value.is_empty() && value.chars().count() < min {
            self.fail(field, format!("This field is too short (minimum is {} characters)", min));
        }
    }

    fn no_nul(&mut self, field: &str, value: &str) {
        if value.contains('\0') {
            self.fail(field, INVALID);
        }
    }

    fn email(&mut self, field: &str, value: &str) {
        if !value.is_empty() && !is_valid_email(value) {
            self.fail(field, INVALID);
        }
    }
}

/// Check the `local@domain.tld` shape
///
/// The local part may not contain whitespace or a second `@`. The domain must
/// have at least one dot, no empty labels, and labels made of ASCII
/// alphanumerics and hyphens that do not start or end with a hyphen.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 {
        return false;
    }
    if local.chars().any(|c| c.is_whitespace() || c == '@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// The "create snippet" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSnippet {
    pub title: String,
    pub content: String,
    /// Lifetime in days, as submitted
    pub expires: String,
}

impl NewSnippet {
    /// Apply the snippet rules
    pub fn validate(self) -> Validated<Self> {
        let mut check = Checker::default();

        check.no_nul("title", &self.title);
        check.required("title", &self.title);
        check.max_length("title", &self.title, 100);
        check.no_nul("content", &self.content);
        check.required("content", &self.content);
        check.required("expires", &self.expires);
        if !self.expires.is_empty() && self.lifetime().is_none() {
            check.fail("expires", INVALID);
        }

        Validated::from_parts(self, check.errors)
    }

    /// How long the snippet stays visible
    ///
    /// `None` unless `expires` is one of [`PERMITTED_EXPIRES`].
    pub fn lifetime(&self) -> Option<chrono::Duration> {
        if !PERMITTED_EXPIRES.contains(&self.expires.as_str()) {
            return None;
        }
        self.expires.parse::<i64>().ok().map(chrono::Duration::days)
    }
}

/// The signup form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupUser {
    /// Apply the signup rules
    pub fn validate(self) -> Validated<Self> {
        let mut check = Checker::default();

        check.no_nul("name", &self.name);
        check.required("name", &self.name);
        check.max_length("name", &self.name, 255);
        check.no_nul("email", &self.email);
        check.required("email", &self.email);
        check.max_length("email", &self.email, 254);
        check.email("email", &self.email);
        check.no_nul("password", &self.password);
        check.required("password", &self.password);
        check.min_length("password", &self.password, 8);

        Validated::from_parts(self, check.errors)
    }

    /// Copy safe to send back to the browser
    pub fn redisplay(&self) -> Self {
        Self {
            password: String::new(),
            ..self.clone()
        }
    }
}

/// The login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

impl LoginUser {
    /// Apply the login rules
    pub fn validate(self) -> Validated<Self> {
        let mut check = Checker::default();

        check.no_nul("email", &self.email);
        check.required("email", &self.email);
        check.no_nul("password", &self.password);
        check.required("password", &self.password);

        Validated::from_parts(self, check.errors)
    }

    /// Copy safe to send back to the browser
    pub fn redisplay(&self) -> Self {
        Self {
            email: self.email.clone(),
            password: String::new(),
        }
    }
}
