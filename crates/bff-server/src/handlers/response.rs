use serde::Serialize;

/// Envelope for successful content responses: `{success: true, data}`.
///
/// `data` is passed through from the upstream untouched, so its shape is
/// whatever the GraphQL query selected.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    /// Wraps `data` in a successful envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
