//! Identifier newtypes for values interpolated into GraphQL text.
//!
//! Query text is rendered by string templating, so anything that ends up in
//! a selector or a selection set must be restricted to the GraphQL
//! identifier alphabet. These types can only be built through their
//! validating constructors.

use std::fmt;

use crate::error::ValidationError;

/// Fields selected when a request does not name any.
pub const DEFAULT_FIELDS: &[&str] = &["title", "url", "uid", "_content_type_uid"];

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Content type uid, e.g. `blog_post`.
///
/// Rendered into the `all_<uid>` selector of an entries query.
///
/// # Example
///
/// ```
/// use bff_core::ContentTypeUid;
///
/// let uid = ContentTypeUid::parse("blog_post").unwrap();
/// assert_eq!(uid.as_str(), "blog_post");
/// assert!(ContentTypeUid::parse("blog_post{ x }").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentTypeUid(String);

impl ContentTypeUid {
    /// Validates and wraps a content type uid.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty {
                field: "contentTypeUid",
            });
        }
        if !value.chars().all(is_identifier_char) {
            return Err(ValidationError::InvalidIdentifier {
                field: "contentTypeUid",
                value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the uid as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentTypeUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentTypeUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ContentTypeUid {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// A single field in the `items` selection set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName(String);

impl FieldName {
    /// Validates and wraps a field name.
    ///
    /// Field names follow the GraphQL name grammar: no leading digit.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: "fields" });
        }
        let leading_digit = value.starts_with(|c: char| c.is_ascii_digit());
        if leading_digit || !value.chars().all(is_identifier_char) {
            return Err(ValidationError::InvalidIdentifier {
                field: "fields",
                value,
            });
        }
        Ok(Self(value))
    }

    /// Parses a comma separated list, skipping blank segments.
    ///
    /// Returns an empty list when the input holds no names.
    pub fn parse_list(value: &str) -> Result<Vec<Self>, ValidationError> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::parse)
            .collect()
    }

    /// The fields selected by default.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_FIELDS.iter().map(|f| Self((*f).to_string())).collect()
    }

    /// Returns the field name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
