use std::fmt::{Display, Formatter};

use guardpost_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntryId;

/// Server-assigned identifier for a soldier record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoldierId(i64);

impl SoldierId {
    /// Creates a soldier identifier from a raw server value.
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

impl Display for SoldierId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A roster member as listed by the collaborator.
///
/// Functionality and restriction tags arrive resolved to display names;
/// incompatibilities arrive as raw soldier ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Soldier {
    /// Server-assigned identifier.
    pub id: SoldierId,
    /// Display ordinal assigned by the collaborator.
    pub index: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Optional service number.
    pub personal_id: Option<String>,
    /// Names of held functionalities.
    pub functionalities: Vec<String>,
    /// Names of applied restrictions.
    pub restrictions: Vec<String>,
    /// Soldiers this one must not be scheduled with, as stored (directed).
    pub incompatible_ids: Vec<SoldierId>,
}

impl Soldier {
    /// Returns "First Last" for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Enrollment request assembled by the wizard's terminal step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSoldier {
    first_name: String,
    last_name: String,
    personal_id: Option<String>,
    functionality_ids: Vec<CatalogEntryId>,
    restriction_ids: Vec<CatalogEntryId>,
    incompatible_ids: Vec<SoldierId>,
}

impl NewSoldier {
    /// Creates a validated enrollment request.
    ///
    /// First and last name must be non-empty after trimming, and exactly one
    /// functionality must be held at creation.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        personal_id: Option<String>,
        functionality: CatalogEntryId,
        restriction_ids: Vec<CatalogEntryId>,
        incompatible_ids: Vec<SoldierId>,
    ) -> AppResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(AppError::Validation(
                "first and last name must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            first_name,
            last_name,
            personal_id: personal_id.filter(|value| !value.trim().is_empty()),
            functionality_ids: vec![functionality],
            restriction_ids,
            incompatible_ids,
        })
    }

    /// Returns the given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the optional service number.
    #[must_use]
    pub fn personal_id(&self) -> Option<&str> {
        self.personal_id.as_deref()
    }

    /// Returns the single-element functionality id list.
    #[must_use]
    pub fn functionality_ids(&self) -> &[CatalogEntryId] {
        &self.functionality_ids
    }

    /// Returns the applied restriction ids.
    #[must_use]
    pub fn restriction_ids(&self) -> &[CatalogEntryId] {
        &self.restriction_ids
    }

    /// Returns the incompatible soldier ids.
    #[must_use]
    pub fn incompatible_ids(&self) -> &[SoldierId] {
        &self.incompatible_ids
    }
}

#[cfg(test)]
mod tests {
    use super::NewSoldier;
    use crate::catalog::CatalogEntryId;

    #[test]
    fn enrollment_requires_both_names() {
        let result = NewSoldier::new(
            "   ",
            "Levi",
            None,
            CatalogEntryId::from_raw(1),
            Vec::new(),
            Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn enrollment_carries_exactly_one_functionality() {
        let soldier = NewSoldier::new(
            "Dana",
            "Levi",
            Some("1234567".to_owned()),
            CatalogEntryId::from_raw(3),
            Vec::new(),
            Vec::new(),
        )
        .unwrap_or_else(|_| unreachable!());
        assert_eq!(soldier.functionality_ids(), [CatalogEntryId::from_raw(3)]);
    }

    #[test]
    fn blank_personal_id_is_dropped() {
        let soldier = NewSoldier::new(
            "Dana",
            "Levi",
            Some("  ".to_owned()),
            CatalogEntryId::from_raw(3),
            Vec::new(),
            Vec::new(),
        )
        .unwrap_or_else(|_| unreachable!());
        assert_eq!(soldier.personal_id(), None);
    }

    #[test]
    fn enrollment_serializes_with_the_collaborator_field_names() {
        let soldier = NewSoldier::new(
            "Dana",
            "Levi",
            None,
            CatalogEntryId::from_raw(3),
            Vec::new(),
            Vec::new(),
        )
        .unwrap_or_else(|_| unreachable!());
        let value = serde_json::to_value(&soldier).unwrap_or_default();
        assert_eq!(value["functionality_ids"], serde_json::json!([3]));
        assert_eq!(value["restriction_ids"], serde_json::json!([]));
        assert_eq!(value["incompatible_ids"], serde_json::json!([]));
    }
}
