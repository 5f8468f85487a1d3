use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bff_core::{ContentTypeUid, EntriesQueryRequest, FieldName, parse_variants};
use serde::Deserialize;

use crate::error::AppError;

/// Query parameters accepted by the content endpoints.
///
/// Every key is collected as a list so that repeated keys decode. A
/// required parameter counts as present only when it carries exactly one
/// non-empty value; anything else produces the `Missing required parameter`
/// body instead of a decoder rejection.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ContentParams {
    pub locale: Vec<String>,

    #[serde(rename = "contentTypeUid")]
    pub content_type_uid: Vec<String>,

    /// Cada valor es una lista separada por comas.
    pub variants: Vec<String>,

    /// Igual que `variants`; vacia usa los campos por defecto.
    pub fields: Vec<String>,

    pub limit: Option<u32>,

    pub skip: Option<u32>,
}

impl ContentParams {
    /// Checks `locale` then `contentTypeUid` for presence.
    ///
    /// Returns both values, in that order.
    pub fn require_common(&self) -> Result<(&str, &str), AppError> {
        let locale = single(&self.locale).ok_or_else(|| AppError::missing_parameter("locale"))?;
        let content_type_uid = single(&self.content_type_uid)
            .ok_or_else(|| AppError::missing_parameter("contentTypeUid"))?;
        Ok((locale, content_type_uid))
    }

    /// Variants from every `variants` value, split on commas.
    pub fn variant_list(&self) -> Vec<String> {
        self.variants.iter().flat_map(|v| parse_variants(v)).collect()
    }

    /// Validates the parameters into an entries request.
    pub fn into_entries_request(self) -> Result<EntriesQueryRequest, AppError> {
        let (locale, uid) = self.require_common()?;
        let uid = ContentTypeUid::parse(uid)?;
        let locale = locale.to_string();

        let variants = self.variant_list();
        let fields = FieldName::parse_list(&self.fields.join(","))?;

        Ok(EntriesQueryRequest::new(uid, locale)
            .with_variants(variants)
            .with_fields(fields)
            .with_page(self.limit, self.skip))
    }
}

fn single(values: &[String]) -> Option<&str> {
    match values {
        [value] if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Extractor decoding [`ContentParams`], rejecting with a JSON 400.
pub struct ContentQuery(pub ContentParams);

impl<S> FromRequestParts<S> for ContentQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        serde_html_form::from_str(query).map(Self).map_err(|e| {
            AppError::BadRequest(format!("Failed to deserialize query string: {e}"))
        })
    }
}
