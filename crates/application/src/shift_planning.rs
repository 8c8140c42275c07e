use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use guardpost_core::{AppError, AppResult};
use guardpost_domain::{
    GenerateShiftsRequest, GeneratedShift, GuardDuty, NewGuardDuty, PositionId, ShiftWindow,
};
use tracing::{info, warn};

use crate::gateway::RosterGateway;

/// Settled result of one generate-and-commit run.
///
/// Warnings, skips, and failures are all operator-visible; nothing on a
/// failure path is swallowed. `duties` is the authoritative post-state
/// re-fetched from the collaborator, never synthesized locally.
#[derive(Debug, Default)]
pub struct ShiftPlanOutcome {
    /// Infeasibility notes reported by the generation collaborator, verbatim.
    pub warnings: Vec<String>,
    /// Number of proposals committed as durable duty records.
    pub committed: usize,
    /// Proposals dropped because their station name resolved to no local position.
    pub skipped: Vec<String>,
    /// Proposals whose commit call failed after resolution.
    pub failures: Vec<String>,
    /// The refreshed duty roster.
    pub duties: Vec<GuardDuty>,
}

/// Turns operator-configured time windows into committed duty records.
///
/// The generation collaborator produces *proposals*; each one becomes durable
/// only through its own commit call. Commit calls run concurrently and the
/// batch is joined all-settled, so one failure cannot short-circuit siblings
/// or the final refresh.
#[derive(Clone)]
pub struct ShiftPlanningService {
    gateway: Arc<dyn RosterGateway>,
}

impl ShiftPlanningService {
    /// Creates a new planning service over a gateway implementation.
    #[must_use]
    pub fn new(gateway: Arc<dyn RosterGateway>) -> Self {
        Self { gateway }
    }

    /// Runs the full pipeline: generate, resolve, commit each proposal,
    /// then re-fetch the duty roster as the source of truth.
    ///
    /// A generation failure aborts the whole run; previously committed duties
    /// are untouched. Resolution and commit failures are per-item.
    pub async fn generate_and_commit(
        &self,
        windows: &[ShiftWindow],
    ) -> AppResult<ShiftPlanOutcome> {
        if windows.is_empty() {
            return Err(AppError::Validation(
                "at least one shift window is required".to_owned(),
            ));
        }

        let positions = self.gateway.list_positions().await?;
        let by_name: HashMap<&str, PositionId> = positions
            .iter()
            .map(|position| (position.name.as_str(), position.id))
            .collect();

        let response = self
            .gateway
            .generate_shifts(GenerateShiftsRequest {
                shift_times: windows.to_vec(),
            })
            .await?;

        for warning in &response.warnings {
            warn!(warning = %warning, "generation collaborator warning");
        }

        let mut outcome = ShiftPlanOutcome {
            warnings: response.warnings,
            ..ShiftPlanOutcome::default()
        };

        let mut resolved: Vec<(GeneratedShift, PositionId)> = Vec::new();
        for shift in response.generated_shifts {
            match by_name.get(shift.station.as_str()) {
                Some(position_id) => resolved.push((shift, *position_id)),
                None => {
                    let reason = AppError::Resolution(format!(
                        "no local position named '{}' for soldier {}",
                        shift.station, shift.soldier_id
                    ));
                    warn!(station = %shift.station, "skipping unresolvable proposal");
                    outcome.skipped.push(reason.to_string());
                }
            }
        }

        let commits = resolved.iter().map(|(shift, position_id)| {
            self.gateway.create_duty(NewGuardDuty {
                soldier_id: shift.soldier_id,
                position_id: *position_id,
                start_time: shift.start_time,
                end_time: shift.end_time,
            })
        });
        let settled = join_all(commits).await;

        for ((shift, _), result) in resolved.iter().zip(settled) {
            match result {
                Ok(()) => outcome.committed += 1,
                Err(error) => {
                    warn!(
                        station = %shift.station,
                        soldier = %shift.soldier_id,
                        error = %error,
                        "duty commit failed"
                    );
                    outcome.failures.push(format!(
                        "'{}' / soldier {}: {error}",
                        shift.station, shift.soldier_id
                    ));
                }
            }
        }

        info!(
            committed = outcome.committed,
            skipped = outcome.skipped.len(),
            failed = outcome.failures.len(),
            "shift commit batch settled"
        );

        outcome.duties = self.gateway.list_duties().await?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests;
