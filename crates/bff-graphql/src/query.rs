//! GraphQL query text for the Delivery API.
//!
//! Both builders are pure: no I/O, no error paths. Values interpolated into
//! the text are restricted to identifiers by their types.

use std::fmt::Write;

use bff_core::{ContentTypeUid, EntriesQueryRequest, FieldName};
use serde_json::{Map, Value};

/// Operation name of the entries query.
pub const LIST_ENTRIES_OPERATION: &str = "GetAllEntries";

/// Operation name of the personalization config query.
pub const PERSONALIZED_CONFIG_OPERATION: &str = "GetPersonalizedConfig";

const PERSONALIZED_CONFIG_QUERY: &str = "query GetPersonalizedConfig {
  all_personalize_config {
    items {
      title
      taxonomy_path
      audiences {
        group {
          name
          attributes {
            key
            value
          }
        }
      }
      system {
        uid
      }
    }
  }
}
";

/// Renders the query listing entries of a content type.
///
/// Every field lands on its own line inside `items { ... }`. Pagination is
/// declared as `$limit` / `$skip`; see [`build_list_entries_variables`].
///
/// # Example
///
/// ```
/// use bff_core::{ContentTypeUid, FieldName};
/// use bff_graphql::build_list_entries_query;
///
/// let uid = ContentTypeUid::parse("blog_post").unwrap();
/// let query = build_list_entries_query(&uid, &FieldName::defaults());
///
/// assert!(query.contains("all_blog_post(limit: $limit, skip: $skip)"));
/// assert!(query.contains("\n      _content_type_uid\n"));
/// ```
pub fn build_list_entries_query(content_type: &ContentTypeUid, fields: &[FieldName]) -> String {
    let mut query = String::with_capacity(160 + fields.len() * 24);

    // Writing into a String cannot fail.
    let _ = writeln!(query, "query {LIST_ENTRIES_OPERATION}($limit: Int, $skip: Int) {{");
    let _ = writeln!(query, "  all_{content_type}(limit: $limit, skip: $skip) {{");
    query.push_str("    items {\n");
    for field in fields {
        let _ = writeln!(query, "      {field}");
    }
    query.push_str("    }\n  }\n}\n");
    query
}

/// Builds the variables object for an entries request.
///
/// Returns `None` when no pagination was requested so the request body
/// carries no `variables` member.
pub fn build_list_entries_variables(request: &EntriesQueryRequest) -> Option<Value> {
    let mut variables = Map::new();
    if let Some(limit) = request.limit() {
        variables.insert("limit".into(), Value::from(limit));
    }
    if let Some(skip) = request.skip() {
        variables.insert("skip".into(), Value::from(skip));
    }
    (!variables.is_empty()).then_some(Value::Object(variables))
}

/// Returns the fixed personalization config query.
pub fn build_personalized_config_query() -> &'static str {
    PERSONALIZED_CONFIG_QUERY
}
