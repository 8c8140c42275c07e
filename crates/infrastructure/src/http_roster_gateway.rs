use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use guardpost_application::RosterGateway;
use guardpost_core::{AppError, AppResult, NonEmptyString};
use guardpost_domain::{
    CatalogEntry, CatalogKind, GenerateShiftsRequest, GenerateShiftsResponse, GuardDuty,
    GuardDutyId, NewGuardDuty, NewPosition, NewSoldier, Position, PositionId, Soldier, SoldierId,
};

/// HTTP implementation of the roster gateway over a shared reqwest client.
///
/// Every non-2xx response maps to an [`AppError`]. There is no retry policy;
/// a failed call surfaces at the call site that issued it.
pub struct HttpRosterGateway {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpRosterGateway {
    /// Creates a gateway rooted at the collaborator's base URL.
    #[must_use]
    pub fn new(http_client: reqwest::Client, mut base_url: Url) -> Self {
        // Url::join drops the last path segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Self {
            http_client,
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|error| AppError::Internal(format!("invalid endpoint '{path}': {error}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;
        let response = checked(response).await?;
        response.json::<T>().await.map_err(|error| {
            AppError::Transport(format!("malformed response from /{path}: {error}"))
        })
    }

    async fn post_acknowledged<B: Serialize + Sync>(&self, path: &str, body: &B) -> AppResult<()> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        checked(response).await?;
        Ok(())
    }

    async fn delete_resource(&self, path: &str) -> AppResult<()> {
        let url = self.endpoint(path)?;
        debug!(%url, "DELETE");
        let response = self
            .http_client
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;
        checked(response).await?;
        Ok(())
    }
}

fn transport_error(error: reqwest::Error) -> AppError {
    AppError::Transport(error.to_string())
}

fn error_for_status(status: StatusCode, body: &str) -> AppError {
    if status == StatusCode::NOT_FOUND {
        AppError::NotFound(body.to_owned())
    } else {
        AppError::Transport(format!("collaborator returned {status}: {body}"))
    }
}

async fn checked(response: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<response body unavailable>".to_owned());
    Err(error_for_status(status, &body))
}

#[async_trait]
impl RosterGateway for HttpRosterGateway {
    async fn list_catalog(&self, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
        self.get_json(kind.collection_path()).await
    }

    async fn create_catalog_entry(
        &self,
        kind: CatalogKind,
        name: NonEmptyString,
    ) -> AppResult<()> {
        self.post_acknowledged(
            kind.collection_path(),
            &serde_json::json!({ "name": name.as_str() }),
        )
        .await
    }

    async fn list_soldiers(&self) -> AppResult<Vec<Soldier>> {
        self.get_json("soldiers").await
    }

    async fn create_soldier(&self, soldier: NewSoldier) -> AppResult<()> {
        self.post_acknowledged("soldiers", &soldier).await
    }

    async fn delete_soldier(&self, id: SoldierId) -> AppResult<()> {
        self.delete_resource(&format!("soldiers/{id}")).await
    }

    async fn list_positions(&self) -> AppResult<Vec<Position>> {
        self.get_json("positions").await
    }

    async fn create_position(&self, position: NewPosition) -> AppResult<()> {
        self.post_acknowledged("positions", &position).await
    }

    async fn delete_position(&self, id: PositionId) -> AppResult<()> {
        self.delete_resource(&format!("positions/{id}")).await
    }

    async fn list_duties(&self) -> AppResult<Vec<GuardDuty>> {
        self.get_json("guard_duties").await
    }

    async fn create_duty(&self, duty: NewGuardDuty) -> AppResult<()> {
        self.post_acknowledged("guard_duties", &duty).await
    }

    async fn delete_duty(&self, id: GuardDutyId) -> AppResult<()> {
        self.delete_resource(&format!("guard_duties/{id}")).await
    }

    async fn generate_shifts(
        &self,
        request: GenerateShiftsRequest,
    ) -> AppResult<GenerateShiftsResponse> {
        let url = self.endpoint("generate_shifts")?;
        debug!(%url, "POST");
        let response = self
            .http_client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        let response = checked(response).await?;
        response.json::<GenerateShiftsResponse>().await.map_err(|error| {
            AppError::Transport(format!("malformed generation response: {error}"))
        })
    }
}
