//! Application services and ports for the roster client.

#![forbid(unsafe_code)]

mod choice_set;
mod enrollment_wizard;
mod gateway;
mod shift_planning;

#[cfg(test)]
mod test_support;

pub use choice_set::{ChoiceMode, ChoiceSet};
pub use enrollment_wizard::{EnrollmentWizard, NextOutcome, SoldierDraft, WizardStep};
pub use gateway::RosterGateway;
pub use shift_planning::{ShiftPlanOutcome, ShiftPlanningService};
