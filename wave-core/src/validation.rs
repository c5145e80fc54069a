//! Client-side validation for user drafts.
//!
//! Failures are data: [`validate_form`] returns a [`FormErrors`] map keyed
//! by field path, empty when the draft can be submitted.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use wave_model::{FieldPath, UserDraft};

pub const MIN_USERNAME_LEN: usize = 3;

pub const NAME_REQUIRED: &str = "Full name is required";
pub const USERNAME_REQUIRED: &str = "Username is required";
pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const CITY_REQUIRED: &str = "City is required";
pub const COMPANY_REQUIRED: &str = "Company name is required";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const WEBSITE_INVALID: &str = "Please enter a valid website URL";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email regex should compile")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone regex should compile")
});

static PHONE_SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\-()]").expect("phone separator regex should compile")
});

pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `local@domain.tld` shape only; no DNS lookups.
pub fn validate_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Up to 16 digits with an optional leading `+`, ignoring spaces,
/// parentheses and hyphens.
pub fn validate_phone(value: &str) -> bool {
    let digits = PHONE_SEPARATORS.replace_all(value, "");
    PHONE_PATTERN.is_match(&digits)
}

/// Empty is valid. Values not starting with `http` are checked as
/// `https://{value}`.
pub fn validate_url(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    if value.starts_with("http") {
        Url::parse(value).is_ok()
    } else {
        Url::parse(&format!("https://{value}")).is_ok()
    }
}

/// Message for `path` if the draft's value there is invalid.
pub fn validate_field(draft: &UserDraft, path: FieldPath) -> Option<&'static str> {
    let value = draft.get(path);
    match path {
        FieldPath::Name => (!validate_required(value)).then_some(NAME_REQUIRED),
        FieldPath::Username => {
            if !validate_required(value) {
                Some(USERNAME_REQUIRED)
            } else if value.chars().count() < MIN_USERNAME_LEN {
                Some(USERNAME_TOO_SHORT)
            } else {
                None
            }
        }
        FieldPath::Email => {
            if !validate_required(value) {
                Some(EMAIL_REQUIRED)
            } else if !validate_email(value) {
                Some(EMAIL_INVALID)
            } else {
                None
            }
        }
        FieldPath::AddressCity => {
            (!validate_required(value)).then_some(CITY_REQUIRED)
        }
        FieldPath::CompanyName => {
            (!validate_required(value)).then_some(COMPANY_REQUIRED)
        }
        FieldPath::Phone => {
            (!value.is_empty() && !validate_phone(value))
                .then_some(PHONE_INVALID)
        }
        FieldPath::Website => (!validate_url(value)).then_some(WEBSITE_INVALID),
        FieldPath::AddressStreet
        | FieldPath::AddressSuite
        | FieldPath::AddressZipcode
        | FieldPath::CompanyCatchPhrase => None,
    }
}

pub fn validate_form(draft: &UserDraft) -> FormErrors {
    FieldPath::VALIDATION_ORDER
        .into_iter()
        .filter_map(|path| validate_field(draft, path).map(|msg| (path, msg)))
        .collect()
}

/// Per-field messages in the order the fields were validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: Vec<(FieldPath, &'static str)>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, path: FieldPath) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(field, _)| *field == path)
            .map(|(_, msg)| *msg)
    }

    pub fn contains(&self, path: FieldPath) -> bool {
        self.get(path).is_some()
    }

    pub fn remove(&mut self, path: FieldPath) -> Option<&'static str> {
        let index = self.entries.iter().position(|(field, _)| *field == path)?;
        Some(self.entries.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Field the presentation layer should focus.
    pub fn first(&self) -> Option<FieldPath> {
        self.entries.first().map(|(path, _)| *path)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldPath> + '_ {
        self.entries.iter().map(|(path, _)| *path)
    }

    /// All messages in validation order, for an aggregate summary.
    pub fn messages(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(_, msg)| *msg).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldPath, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<(FieldPath, &'static str)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (FieldPath, &'static str)>>(
        iter: I,
    ) -> Self {
        let mut errors = Self::default();
        for (path, msg) in iter {
            errors.remove(path);
            errors.entries.push((path, msg));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> UserDraft {
        let mut draft = UserDraft::default();
        draft.set(FieldPath::Name, "Leanne Graham");
        draft.set(FieldPath::Username, "Bret");
        draft.set(FieldPath::Email, "Sincere@april.biz");
        draft.set(FieldPath::AddressCity, "Gwenborough");
        draft.set(FieldPath::CompanyName, "Romaguera-Crona");
        draft
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate_form(&valid_draft()).is_empty());
    }

    #[test]
    fn reports_exactly_the_failing_required_fields() {
        let mut draft = UserDraft::default();
        draft.set(FieldPath::Username, "ab");
        draft.set(FieldPath::Email, "bad");

        let errors = validate_form(&draft);

        let fields: Vec<FieldPath> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                FieldPath::Name,
                FieldPath::Username,
                FieldPath::Email,
                FieldPath::AddressCity,
                FieldPath::CompanyName,
            ]
        );
        assert_eq!(errors.get(FieldPath::Username), Some(USERNAME_TOO_SHORT));
        assert_eq!(errors.get(FieldPath::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.first(), Some(FieldPath::Name));
    }

    #[test]
    fn whitespace_only_is_missing() {
        let mut draft = valid_draft();
        draft.set(FieldPath::AddressCity, "   ");
        assert_eq!(
            validate_form(&draft).get(FieldPath::AddressCity),
            Some(CITY_REQUIRED)
        );
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("a@b.co"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.io"));
        assert!(!validate_email("@c.io"));
    }

    #[test]
    fn phone_allows_separators_and_plus() {
        assert!(validate_phone("+1 (770) 736-8031"));
        assert!(validate_phone("770-736-8031"));
        assert!(!validate_phone("024-648-3804"));
        assert!(!validate_phone("0123"));
        assert!(!validate_phone("1-770-736-8031 x56442"));
        assert!(!validate_phone("12345678901234567"));
    }

    #[test]
    fn optional_fields_only_checked_when_present() {
        let mut draft = valid_draft();
        draft.set(FieldPath::Phone, "");
        draft.set(FieldPath::Website, "");
        assert!(validate_form(&draft).is_empty());

        draft.set(FieldPath::Phone, "call me");
        draft.set(FieldPath::Website, "not a site");
        let errors = validate_form(&draft);
        assert_eq!(errors.messages(), vec![PHONE_INVALID, WEBSITE_INVALID]);
    }

    #[test]
    fn required_fields_come_before_format_checks() {
        let mut draft = valid_draft();
        draft.set(FieldPath::Phone, "call me");
        draft.set(FieldPath::AddressCity, "");

        let errors = validate_form(&draft);

        assert_eq!(errors.first(), Some(FieldPath::AddressCity));
        assert_eq!(errors.messages(), vec![CITY_REQUIRED, PHONE_INVALID]);
    }

    #[test]
    fn website_without_scheme_gets_https() {
        assert!(validate_url("hildegard.org"));
        assert!(validate_url("http://anastasia.net"));
        assert!(!validate_url("http://"));
    }
}
