use std::fmt::{Display, Formatter};

use guardpost_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntryId;

/// Server-assigned identifier for a duty position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionId(i64);

impl PositionId {
    /// Creates a position identifier from a raw server value.
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

impl Display for PositionId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A duty post as listed by the collaborator, eligibility tags resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Server-assigned identifier.
    pub id: PositionId,
    /// Station name; the generation collaborator references positions by it.
    pub name: String,
    /// Staffing headcount.
    pub required_count: u32,
    /// Names of required functionalities.
    pub functionalities: Vec<String>,
    /// Names of attached conditions.
    pub conditions: Vec<String>,
    /// Names of attached restrictions.
    pub restrictions: Vec<String>,
}

/// Creation request for a duty position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPosition {
    name: NonEmptyString,
    required_count: u32,
    functionality_ids: Vec<CatalogEntryId>,
    condition_ids: Vec<CatalogEntryId>,
    restriction_ids: Vec<CatalogEntryId>,
}

impl NewPosition {
    /// Creates a validated position request; headcount must be at least one.
    pub fn new(
        name: impl Into<String>,
        required_count: u32,
        functionality_ids: Vec<CatalogEntryId>,
        condition_ids: Vec<CatalogEntryId>,
        restriction_ids: Vec<CatalogEntryId>,
    ) -> AppResult<Self> {
        if required_count == 0 {
            return Err(AppError::Validation(
                "required_count must be at least 1".to_owned(),
            ));
        }

        Ok(Self {
            name: NonEmptyString::new(name)?,
            required_count,
            functionality_ids,
            condition_ids,
            restriction_ids,
        })
    }

    /// Returns the station name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the staffing headcount.
    #[must_use]
    pub fn required_count(&self) -> u32 {
        self.required_count
    }
}
