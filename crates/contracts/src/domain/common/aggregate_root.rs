use super::AggregateId;
use serde::{de::DeserializeOwned, Serialize};

/// Record type exchanged with the REST backend
///
/// Carries the static metadata the HTTP layer and the pages need:
/// the collection path and the UI labels.
pub trait AggregateRoot: Clone + Serialize + DeserializeOwned + 'static {
    /// Identifier type of the record
    type Id: AggregateId;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Backend id, `None` until the record has been created
    fn id(&self) -> Option<Self::Id>;

    /// Required-field check run before a form is submitted
    fn validate(&self) -> Result<(), String>;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Index of the record type (e.g. "a003")
    fn aggregate_index() -> &'static str;

    /// REST collection segment (e.g. "milk-receptions")
    fn collection_name() -> &'static str;

    /// Singular UI label (e.g. "Milk reception")
    fn element_name() -> &'static str;

    /// Plural UI label (e.g. "Milk receptions")
    fn list_name() -> &'static str;

    // ============================================================================
    // Defaults
    // ============================================================================

    /// Collection endpoint (e.g. "/api/milk-receptions")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }

    /// Endpoint of a single record
    fn item_path(id: Self::Id) -> String {
        format!("{}/{}", Self::api_path(), id.as_string())
    }

    /// Whether the form edits an existing record
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
