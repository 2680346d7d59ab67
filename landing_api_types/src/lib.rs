use serde::{Deserialize, Serialize};

/// Path of the member counter endpoint, relative to the API base URL
pub const ACCOUNTS_COUNT_PATH: &str = "/accounts_count";

/// Body of `GET /accounts_count`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountsCount {
    pub count: f64,
}

impl AccountsCount {
    /// Decodes a response body that may have any shape. Only an object with a
    /// numeric `count` field yields a value, everything else counts as absent.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        // serde also accepts `[count]` for structs, the API only ever sends objects
        value.as_object()?;
        AccountsCount::deserialize(value).ok()
    }
}
