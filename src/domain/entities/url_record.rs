//! URL record entity, the unit of persistence.

/// Id value meaning "not yet assigned".
///
/// Inserting a record carrying this id makes the store allocate the next
/// id in its place.
pub const UNASSIGNED_ID: i64 = -1;

/// A shortened URL with its visit counter.
///
/// The alias is derived from `id` and the redirect target is computed once
/// at creation; both are stored verbatim and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub original: String,
    pub alias: String,
    pub redirect_target: String,
    pub visit_count: u64,
}

impl UrlRecord {
    /// Creates a record with a zero visit count.
    pub fn new(id: i64, original: String, alias: String, redirect_target: String) -> Self {
        Self {
            id,
            original,
            alias,
            redirect_target,
            visit_count: 0,
        }
    }

    /// Creates a record whose id is left to the store.
    pub fn unassigned(original: String, alias: String, redirect_target: String) -> Self {
        Self::new(UNASSIGNED_ID, original, alias, redirect_target)
    }

    /// Returns true if the store still has to allocate an id.
    pub fn is_unassigned(&self) -> bool {
        self.id == UNASSIGNED_ID
    }
}
