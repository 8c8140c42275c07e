//! Scriptable in-memory gateway used by the service tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use guardpost_core::{AppError, AppResult, NonEmptyString};
use guardpost_domain::{
    CatalogEntry, CatalogKind, GenerateShiftsRequest, GenerateShiftsResponse, GuardDuty,
    GuardDutyId, NewGuardDuty, NewPosition, NewSoldier, Position, PositionId, Soldier, SoldierId,
};

use crate::gateway::RosterGateway;

/// Records every call and lets tests script responses and failures.
#[derive(Default)]
pub struct FakeRosterGateway {
    /// Position catalog returned by `list_positions`.
    pub positions: Mutex<Vec<Position>>,
    /// Committed duties returned by `list_duties`.
    pub duties: Mutex<Vec<GuardDuty>>,
    /// Response handed out by `generate_shifts`, unless failing.
    pub generate_response: Mutex<GenerateShiftsResponse>,
    /// When set, `generate_shifts` fails with this transport message.
    pub generate_failure: Mutex<Option<String>>,
    /// When set, `create_soldier` fails with this transport message.
    pub soldier_create_failure: Mutex<Option<String>>,
    /// Soldier ids whose `create_duty` calls fail with a transport error.
    pub failing_duty_soldiers: Mutex<Vec<SoldierId>>,
    /// Every accepted enrollment request.
    pub created_soldiers: Mutex<Vec<NewSoldier>>,
    /// Every attempted duty commit, settled or not.
    pub created_duties: Mutex<Vec<NewGuardDuty>>,
    /// Number of `list_duties` refreshes observed.
    pub duty_list_calls: Mutex<usize>,
}

impl FakeRosterGateway {
    /// Shorthand for seeding the position catalog.
    pub async fn seed_position(&self, id: i64, name: &str) {
        self.positions.lock().await.push(Position {
            id: PositionId::from_raw(id),
            name: name.to_owned(),
            required_count: 1,
            functionalities: Vec::new(),
            conditions: Vec::new(),
            restrictions: Vec::new(),
        });
    }
}

#[async_trait]
impl RosterGateway for FakeRosterGateway {
    async fn list_catalog(&self, _kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
        Ok(Vec::new())
    }

    async fn create_catalog_entry(
        &self,
        _kind: CatalogKind,
        _name: NonEmptyString,
    ) -> AppResult<()> {
        Ok(())
    }

    async fn list_soldiers(&self) -> AppResult<Vec<Soldier>> {
        Ok(Vec::new())
    }

    async fn create_soldier(&self, soldier: NewSoldier) -> AppResult<()> {
        if let Some(message) = self.soldier_create_failure.lock().await.clone() {
            return Err(AppError::Transport(message));
        }
        self.created_soldiers.lock().await.push(soldier);
        Ok(())
    }

    async fn delete_soldier(&self, _id: SoldierId) -> AppResult<()> {
        Ok(())
    }

    async fn list_positions(&self) -> AppResult<Vec<Position>> {
        Ok(self.positions.lock().await.clone())
    }

    async fn create_position(&self, _position: NewPosition) -> AppResult<()> {
        Ok(())
    }

    async fn delete_position(&self, _id: PositionId) -> AppResult<()> {
        Ok(())
    }

    async fn list_duties(&self) -> AppResult<Vec<GuardDuty>> {
        *self.duty_list_calls.lock().await += 1;
        Ok(self.duties.lock().await.clone())
    }

    async fn create_duty(&self, duty: NewGuardDuty) -> AppResult<()> {
        self.created_duties.lock().await.push(duty);
        if self
            .failing_duty_soldiers
            .lock()
            .await
            .contains(&duty.soldier_id)
        {
            return Err(AppError::Transport(format!(
                "duty commit refused for soldier {}",
                duty.soldier_id
            )));
        }

        let position = self
            .positions
            .lock()
            .await
            .iter()
            .find(|position| position.id == duty.position_id)
            .map(|position| position.name.clone())
            .unwrap_or_else(|| "unknown".to_owned());
        let mut duties = self.duties.lock().await;
        let id = GuardDutyId::from_raw(duties.len() as i64 + 1);
        duties.push(GuardDuty {
            id,
            position,
            soldier: format!("soldier {}", duty.soldier_id),
            start_time: duty.start_time,
            end_time: duty.end_time,
        });
        Ok(())
    }

    async fn delete_duty(&self, _id: GuardDutyId) -> AppResult<()> {
        Ok(())
    }

    async fn generate_shifts(
        &self,
        _request: GenerateShiftsRequest,
    ) -> AppResult<GenerateShiftsResponse> {
        if let Some(message) = self.generate_failure.lock().await.clone() {
            return Err(AppError::Transport(message));
        }
        Ok(self.generate_response.lock().await.clone())
    }
}
