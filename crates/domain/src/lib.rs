//! Domain entities, wire shapes, and invariants for the roster client.

#![forbid(unsafe_code)]

mod catalog;
mod duty;
mod position;
mod shift;
mod soldier;

pub use catalog::{CatalogEntry, CatalogEntryId, CatalogKind};
pub use duty::{
    GenerateShiftsRequest, GenerateShiftsResponse, GeneratedShift, GuardDuty, GuardDutyId,
    NewGuardDuty,
};
pub use position::{NewPosition, Position, PositionId};
pub use shift::ShiftWindow;
pub use soldier::{NewSoldier, Soldier, SoldierId};
