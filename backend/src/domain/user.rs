//! User data model and field validation.
//!
//! A [`User`] can only be built from a [`UserDraft`], and a draft can only be
//! built from fields that pass [`is_valid_field`]. Stored records therefore
//! always hold trimmed, non-empty `name` and `email` values.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Validation errors returned by [`UserDraft::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    /// `name` was absent, not a string, or blank.
    MissingName,
    /// `email` was absent, not a string, or blank.
    MissingEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "name must be a non-empty string"),
            Self::MissingEmail => write!(f, "email must be a non-empty string"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Whether `c` is stripped from the ends of a field.
///
/// This is the Unicode `White_Space` set without NEL (U+0085), plus the
/// byte-order mark (U+FEFF): the set ECMAScript `String.prototype.trim` strips.
fn is_trimmed_char(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{FEFF}' => true,
        _ => c.is_whitespace(),
    }
}

/// Strip leading and trailing field whitespace.
///
/// # Examples
/// ```
/// use user_service::domain::trim_field;
///
/// assert_eq!(trim_field("\u{FEFF} Ann\t"), "Ann");
/// assert_eq!(trim_field("\u{85}Ann"), "\u{85}Ann");
/// ```
#[must_use]
pub fn trim_field(raw: &str) -> &str {
    raw.trim_matches(is_trimmed_char)
}

/// Return `true` when `value` is present and non-blank once trimmed.
///
/// The same rule applies to `name` and `email`; no format check is made on
/// email addresses.
///
/// # Examples
/// ```
/// use user_service::domain::is_valid_field;
///
/// assert!(is_valid_field(Some(" Ann ")));
/// assert!(!is_valid_field(Some("   ")));
/// assert!(!is_valid_field(None));
/// ```
#[must_use]
pub fn is_valid_field(value: Option<&str>) -> bool {
    value.is_some_and(|raw| !trim_field(raw).is_empty())
}

fn trimmed_field(value: Option<&str>) -> Option<String> {
    value
        .filter(|raw| is_valid_field(Some(raw)))
        .map(|raw| trim_field(raw).to_owned())
}

/// Opaque user identifier.
///
/// Identifiers are random UUID v4 strings and are compared by exact string
/// equality, so lookups never parse caller input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Whether this identifier equals the raw string `other`.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated and trimmed `name`/`email` pair.
///
/// # Examples
/// ```
/// use user_service::domain::UserDraft;
///
/// let draft = UserDraft::try_from_parts(Some("  Ann "), Some("a@x.com"))
///     .expect("valid fields");
/// assert_eq!(draft.name(), "Ann");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Validate raw fields; `None` stands for a missing or non-string value.
    ///
    /// `name` is checked before `email`.
    pub fn try_from_parts(
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, UserValidationError> {
        let name = trimmed_field(name).ok_or(UserValidationError::MissingName)?;
        let email = trimmed_field(email).ok_or(UserValidationError::MissingEmail)?;
        Ok(Self { name, email })
    }

    /// Trimmed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Stored user record.
///
/// Serialises as `{"id": ..., "name": ..., "email": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a new record with a freshly generated identifier.
    #[must_use]
    pub fn create(draft: UserDraft) -> Self {
        let UserDraft { name, email } = draft;
        Self {
            id: UserId::random(),
            name,
            email,
        }
    }

    /// Replace `name` and `email`, keeping the identifier.
    #[must_use]
    pub fn with_draft(self, draft: UserDraft) -> Self {
        let UserDraft { name, email } = draft;
        Self {
            id: self.id,
            name,
            email,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
