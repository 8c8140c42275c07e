use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Server-assigned identifier for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntryId(i64);

impl CatalogEntryId {
    /// Creates a catalog entry identifier from a raw server value.
    #[must_use]
    pub fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw server value.
    #[must_use]
    pub fn as_raw(&self) -> i64 {
        self.0
    }
}

impl Display for CatalogEntryId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// The three independent tag catalogs sharing the `{id, name}` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// A skill/qualification a soldier may hold and a position may require.
    Functionality,
    /// A tag marking a soldier as ineligible for certain duty.
    Restriction,
    /// A situational requirement attached to a position.
    Condition,
}

impl CatalogKind {
    /// Returns the collaborator collection path for this catalog.
    #[must_use]
    pub fn collection_path(&self) -> &'static str {
        match self {
            Self::Functionality => "functionalities",
            Self::Restriction => "restrictions",
            Self::Condition => "conditions",
        }
    }
}

impl Display for CatalogKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Functionality => "functionality",
            Self::Restriction => "restriction",
            Self::Condition => "condition",
        };
        write!(formatter, "{label}")
    }
}

/// One entry of a tag catalog, as listed by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Server-assigned identifier.
    pub id: CatalogEntryId,
    /// Display name; uniqueness is not enforced client-side.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::{CatalogEntry, CatalogEntryId, CatalogKind};

    #[test]
    fn collection_paths_match_the_collaborator() {
        assert_eq!(CatalogKind::Functionality.collection_path(), "functionalities");
        assert_eq!(CatalogKind::Restriction.collection_path(), "restrictions");
        assert_eq!(CatalogKind::Condition.collection_path(), "conditions");
    }

    #[test]
    fn entries_deserialize_from_the_list_shape() {
        let parsed: Result<CatalogEntry, _> =
            serde_json::from_str(r#"{"id": 3, "name": "Medic"}"#);
        assert_eq!(
            parsed.ok(),
            Some(CatalogEntry {
                id: CatalogEntryId::from_raw(3),
                name: "Medic".to_owned(),
            })
        );
    }
}
