use futures::future::{AbortHandle, AbortRegistration, Abortable};
use landing_api_types::{AccountsCount, ACCOUNTS_COUNT_PATH};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::ApiConfig;

/// Shown until a count was fetched, and for any count that can't be displayed
pub const DEFAULT_JOINED_USERS: f64 = 6000.0;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Environment variables for Nad.fun API are missing")]
    ConfigMissing,
    #[error("Failed to load accounts count: {0}")]
    HttpStatus(StatusCode),
    #[error("Failed to load accounts count: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Accounts count request was cancelled")]
    Cancelled,
    #[error("Accounts count response contained no numeric count")]
    NoData,
}

/// Last known member count of one mounted counter
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JoinedCount {
    #[default]
    Default,
    Loaded(f64),
}

impl JoinedCount {
    pub fn value(self) -> f64 {
        match self {
            JoinedCount::Default => DEFAULT_JOINED_USERS,
            JoinedCount::Loaded(count) => count,
        }
    }

    pub fn display_value(self) -> f64 {
        round_up_dynamic(self.value())
    }

    /// Stores the result of a finished fetch, returns whether anything changed.
    /// Failed or cancelled fetches (`None`) keep the previous state.
    pub fn apply(&mut self, fetched: Option<f64>) -> bool {
        match fetched {
            Some(count) => {
                *self = JoinedCount::Loaded(count);
                true
            }
            None => false,
        }
    }
}

/// Rounds up to a "nice" number with two significant digits, e.g. 6234 to
/// 6300. Numbers below 100 are rounded up to the next integer. Anything that
/// isn't a positive finite number becomes [`DEFAULT_JOINED_USERS`].
///
/// The result is always a whole number, but stays `f64` so arbitrarily large
/// counts never get clamped below their input.
pub fn round_up_dynamic(number: f64) -> f64 {
    if !number.is_finite() || number <= 0.0 {
        return DEFAULT_JOINED_USERS;
    }

    let magnitude = number.log10().floor() as i32;
    let scale = 10f64.powi(magnitude - 1).max(1.0);

    let rounded = (number / scale).ceil() * scale;
    // near f64::MAX the next round number overflows
    if rounded.is_finite() {
        rounded
    } else {
        number
    }
}

/// Cancellation handle for the count request of a single mount.
///
/// Cancels the request when [`FetchLifecycle::cancel`] is called or when the
/// handle is dropped, whichever happens first.
#[derive(Debug)]
pub struct FetchLifecycle {
    handle: AbortHandle,
}

impl FetchLifecycle {
    pub fn new() -> (Self, AbortRegistration) {
        let (handle, registration) = AbortHandle::new_pair();
        (FetchLifecycle { handle }, registration)
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for FetchLifecycle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Fetches the member count from `{base_url}/accounts_count`.
///
/// Resolves to [`FetchError::Cancelled`] as soon as the matching
/// [`FetchLifecycle`] is cancelled, dropping the in-flight request.
pub async fn fetch_count(
    client: &reqwest::Client,
    base_url: &str,
    registration: AbortRegistration,
) -> Result<f64, FetchError> {
    Abortable::new(request_count(client, base_url), registration)
        .await
        .map_err(|_| FetchError::Cancelled)?
}

async fn request_count(client: &reqwest::Client, base_url: &str) -> Result<f64, FetchError> {
    let url = format!("{base_url}{ACCOUNTS_COUNT_PATH}");
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status));
    }

    let payload: serde_json::Value = response.json().await?;
    AccountsCount::from_json(&payload)
        .map(|accounts| accounts.count)
        .ok_or(FetchError::NoData)
}

/// Everything a freshly mounted counter does: resolve the API, fetch the
/// count and log failures. Returns the count to store, if any.
pub async fn load_joined_count(
    client: &reqwest::Client,
    config: &ApiConfig<'_>,
    registration: AbortRegistration,
) -> Option<f64> {
    let result = match config.resolve() {
        Some(base_url) => fetch_count(client, &base_url, registration).await,
        None => Err(FetchError::ConfigMissing),
    };

    match result {
        Ok(count) => Some(count),
        Err(FetchError::Cancelled) => None,
        Err(FetchError::NoData) => {
            debug!("Ignoring accounts count response without a numeric count");
            None
        }
        Err(e @ FetchError::ConfigMissing) => {
            warn!("{e}; using fallback values.");
            None
        }
        Err(e) => {
            warn!("Unable to fetch Nad.fun member count. Falling back to default. {e}");
            None
        }
    }
}
