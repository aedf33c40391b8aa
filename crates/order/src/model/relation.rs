use serde::{Deserialize, de::IgnoredAny};

/// A joined relation as the data API returns it.
///
/// Depending on how the foreign key is declared, the same embed can come back
/// as a bare object, as an array, or as `null`/missing. Anything else (a bare
/// scalar, an array of scalars) lands in `Other` and reads as absent, so only
/// that field of that row loses its value. Every consumer goes
/// through [`Relation::into_first`] or [`Relation::into_vec`] instead of
/// matching on the shape itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    Many(Vec<T>),
    One(T),
    Null,
    Other(IgnoredAny),
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Relation::Null
    }
}

impl<T> Relation<T> {
    /// First element of an array, the object itself, or `None`.
    pub fn into_first(self) -> Option<T> {
        match self {
            Relation::Many(items) => items.into_iter().next(),
            Relation::One(item) => Some(item),
            Relation::Null | Relation::Other(_) => None,
        }
    }

    /// Every element, in order. A bare object counts as a one-element list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Relation::Many(items) => items,
            Relation::One(item) => vec![item],
            Relation::Null | Relation::Other(_) => Vec::new(),
        }
    }
}
