//! The write-back client: batched clear + update with bounded retry

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tally_sheets_core::{CellWrite, ClearRange};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::api::{ApiErrorBody, BatchClearRequest, BatchUpdateRequest, BatchUpdateResponse, ValueRange};
use crate::error::{Result, SheetsError};
use crate::target::parse_spreadsheet_id;

/// Maximum number of attempts before a rate-limited call gives up
pub const MAX_ATTEMPTS: u32 = 5;

/// Error reasons that mean the service account lacks editor access
const PERMISSION_REASONS: [&str; 4] = [
    "forbidden",
    "notAuthorized",
    "insufficientPermissions",
    "PERMISSION_DENIED",
];

/// Delay before retry number `attempt + 1` (the counter starts at 1)
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base * (1 + (1u32 << attempt))
}

/// The service-account identity used to authenticate against the API
#[derive(Debug, Clone)]
pub struct ServiceAccount {
    /// Account email; named in permission-denied messages so admins know
    /// who to grant editor access to
    pub email: String,
    /// Bearer token for the API (loading credentials is the caller's job)
    pub token: String,
}

/// Connection settings for one configuration epoch
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// API base URL. Overridable for tests.
    pub base_url: String,
    /// Base delay of the retry backoff formula `base × (1 + 2^attempt)`
    pub retry_base_delay: Duration,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sheets.googleapis.com".to_string(),
            retry_base_delay: Duration::from_millis(1000),
        }
    }
}

/// One immutable service handle: HTTP client + credentials + settings.
/// Rebuilt wholesale on configuration change.
struct SheetsService {
    http: reqwest::Client,
    account: ServiceAccount,
    config: SheetsConfig,
}

impl SheetsService {
    fn new(account: ServiceAccount, config: SheetsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            account,
            config,
        }
    }

    /// One attempt: clear (when needed), then one batched update.
    async fn execute(
        &self,
        document_id: &str,
        writes: &[CellWrite],
        clears: &[ClearRange],
    ) -> Result<()> {
        if !clears.is_empty() {
            let url = format!(
                "{}/v4/spreadsheets/{document_id}/values:batchClear",
                self.config.base_url
            );
            let body = BatchClearRequest {
                ranges: clears.iter().map(ClearRange::qualified).collect(),
            };
            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.account.token)
                .json(&body)
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(self.interpret_failure(response).await);
            }
        }

        let url = format!(
            "{}/v4/spreadsheets/{document_id}/values:batchUpdate",
            self.config.base_url
        );
        let body = BatchUpdateRequest {
            value_input_option: "RAW",
            data: writes.iter().map(ValueRange::from).collect(),
        };
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.account.token)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(self.interpret_failure(response).await);
        }

        let parsed: BatchUpdateResponse = response.json().await?;
        if parsed.responses.iter().any(|r| r.updated_cells == 0) {
            return Err(SheetsError::PartialUpdate);
        }
        Ok(())
    }

    /// Map a non-success response onto the error taxonomy.
    async fn interpret_failure(&self, response: reqwest::Response) -> SheetsError {
        let status = response.status();
        let body: ApiErrorBody = response.json().await.unwrap_or_default();

        let permission_denied = body.reasons().iter().any(|reason| {
            PERMISSION_REASONS
                .iter()
                .any(|p| reason.eq_ignore_ascii_case(p))
        });
        if permission_denied {
            return SheetsError::PermissionDenied {
                email: self.account.email.clone(),
            };
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return SheetsError::RateLimited;
        }

        SheetsError::Api {
            status: status.as_u16(),
            message: body.message().unwrap_or("unknown error").to_string(),
        }
    }
}

/// The write-back client
///
/// Holds the hot-swappable service handle. Cheap to share behind an `Arc`;
/// all methods take `&self`.
#[derive(Default)]
pub struct SheetsClient {
    service: RwLock<Option<Arc<SheetsService>>>,
}

impl SheetsClient {
    /// Create an unconfigured client; [`SheetsClient::update`] fails until
    /// [`SheetsClient::configure`] is called
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly built service handle.
    ///
    /// The swap is a single pointer replacement: in-flight calls keep the
    /// handle they captured, and the previous handle is released only after
    /// the new one is installed.
    pub fn configure(&self, account: ServiceAccount, config: SheetsConfig) {
        let service = Arc::new(SheetsService::new(account, config));
        let previous = {
            let mut guard = self
                .service
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            guard.replace(service)
        };
        drop(previous);
    }

    /// Whether credentials have been configured
    pub fn is_configured(&self) -> bool {
        self.service
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    /// Clear the writes' target ranges and apply all writes to the document
    /// identified by `target`, retrying on rate limits.
    pub async fn update(
        &self,
        writes: &[CellWrite],
        clears: &[ClearRange],
        target: &str,
    ) -> Result<()> {
        // Capture one handle for the whole call, retries included.
        let service = self
            .service
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .ok_or(SheetsError::NotConfigured)?;

        let document_id = parse_spreadsheet_id(target)?;
        debug!(
            document_id,
            writes = writes.len(),
            clears = clears.len(),
            "starting batched update"
        );

        let mut attempt: u32 = 1;
        loop {
            match service.execute(&document_id, writes, clears).await {
                Ok(()) => return Ok(()),
                Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                    let delay = backoff_delay(service.config.retry_base_delay, attempt);
                    warn!(attempt, ?delay, "rate limited; backing off");
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
