use async_trait::async_trait;

use guardpost_core::{AppResult, NonEmptyString};
use guardpost_domain::{
    CatalogEntry, CatalogKind, GenerateShiftsRequest, GenerateShiftsResponse, GuardDuty,
    GuardDutyId, NewGuardDuty, NewPosition, NewSoldier, Position, PositionId, Soldier, SoldierId,
};

/// Uniform request wrapper over the roster collaborator's resource collections.
///
/// Carries no business logic; every method maps to exactly one remote call.
/// Creates return acknowledgements only: the collaborator assigns ids and
/// ordinals, so callers re-list for authoritative state.
#[async_trait]
pub trait RosterGateway: Send + Sync {
    /// Lists one tag catalog.
    async fn list_catalog(&self, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>>;

    /// Adds one entry to a tag catalog.
    async fn create_catalog_entry(
        &self,
        kind: CatalogKind,
        name: NonEmptyString,
    ) -> AppResult<()>;

    /// Lists the personnel roster in collaborator ordinal order.
    async fn list_soldiers(&self) -> AppResult<Vec<Soldier>>;

    /// Enrolls one soldier.
    async fn create_soldier(&self, soldier: NewSoldier) -> AppResult<()>;

    /// Removes one soldier.
    async fn delete_soldier(&self, id: SoldierId) -> AppResult<()>;

    /// Lists the duty positions.
    async fn list_positions(&self) -> AppResult<Vec<Position>>;

    /// Adds one duty position.
    async fn create_position(&self, position: NewPosition) -> AppResult<()>;

    /// Removes one duty position.
    async fn delete_position(&self, id: PositionId) -> AppResult<()>;

    /// Lists the committed guard duties.
    async fn list_duties(&self) -> AppResult<Vec<GuardDuty>>;

    /// Commits one proposed assignment as a durable duty record.
    async fn create_duty(&self, duty: NewGuardDuty) -> AppResult<()>;

    /// Removes one committed duty.
    async fn delete_duty(&self, id: GuardDutyId) -> AppResult<()>;

    /// Asks the generation collaborator for proposed assignments.
    async fn generate_shifts(
        &self,
        request: GenerateShiftsRequest,
    ) -> AppResult<GenerateShiftsResponse>;
}
