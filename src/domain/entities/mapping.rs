//! URL mapping entity.

/// A persisted association of a long URL, its row identifier, and the
/// short code derived from that identifier.
///
/// `short_code` is `None` between the initial insert and the follow-up
/// attach: the code is computed from the identifier, which is only
/// known once the row exists. The identifier is the source of truth;
/// the code is a derived value and can always be recomputed from it.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub long_url: String,
    pub short_code: Option<String>,
}

impl UrlMapping {
    /// Creates a new mapping instance.
    pub fn new(id: i64, long_url: String, short_code: Option<String>) -> Self {
        Self {
            id,
            long_url,
            short_code,
        }
    }

    /// Returns true once the derived short code has been attached.
    pub fn has_code(&self) -> bool {
        self.short_code.is_some()
    }
}
