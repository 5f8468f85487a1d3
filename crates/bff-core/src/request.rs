//! Entries query request.

use crate::types::{ContentTypeUid, FieldName};

/// A validated request to list entries of one content type.
///
/// Only lives for a single HTTP request; it is rendered into query text and
/// variables and then dropped.
///
/// # Example
///
/// ```
/// use bff_core::{ContentTypeUid, EntriesQueryRequest};
///
/// let uid = ContentTypeUid::parse("blog_post").unwrap();
/// let request = EntriesQueryRequest::new(uid, "en-us").with_variants(vec!["v1".into()]);
///
/// assert_eq!(request.locale(), "en-us");
/// assert_eq!(request.fields().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntriesQueryRequest {
    content_type_uid: ContentTypeUid,
    locale: String,
    variants: Vec<String>,
    fields: Vec<FieldName>,
    limit: Option<u32>,
    skip: Option<u32>,
}

impl EntriesQueryRequest {
    /// Creates a request selecting the default fields.
    pub fn new(content_type_uid: ContentTypeUid, locale: impl Into<String>) -> Self {
        Self {
            content_type_uid,
            locale: locale.into(),
            variants: Vec::new(),
            fields: FieldName::defaults(),
            limit: None,
            skip: None,
        }
    }

    /// Sets the variant uids.
    pub fn with_variants(mut self, variants: Vec<String>) -> Self {
        self.variants = variants;
        self
    }

    /// Replaces the selected fields. An empty list keeps the defaults.
    pub fn with_fields(mut self, fields: Vec<FieldName>) -> Self {
        if !fields.is_empty() {
            self.fields = fields;
        }
        self
    }

    /// Sets pagination, forwarded as the `$limit` / `$skip` variables.
    pub fn with_page(mut self, limit: Option<u32>, skip: Option<u32>) -> Self {
        self.limit = limit;
        self.skip = skip;
        self
    }

    /// Returns the content type uid.
    pub fn content_type_uid(&self) -> &ContentTypeUid {
        &self.content_type_uid
    }

    /// Returns the requested locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the variant uids.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Returns the selected fields.
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// Returns the page size, if any.
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the page offset, if any.
    pub fn skip(&self) -> Option<u32> {
        self.skip
    }
}

/// Splits a comma separated `variants` parameter into a list.
pub fn parse_variants(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
