use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, DashResult};
use crate::page::Page;

pub const PAGE_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope hosts can persist and reload without inventing their
/// own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageJsonContractV1 {
    pub schema_version: u32,
    pub page: Page,
}

impl Page {
    pub fn to_json_contract_v1_pretty(&self) -> DashResult<String> {
        let payload = PageJsonContractV1 {
            schema_version: PAGE_JSON_SCHEMA_V1,
            page: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ConfigurationError::ContractPayload(format!(
                "failed to serialize page contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare `Page` or a v1 envelope; unknown envelope
    /// versions are rejected.
    pub fn from_json_compat_str(input: &str) -> DashResult<Self> {
        if let Ok(page) = serde_json::from_str::<Page>(input) {
            return Ok(page);
        }
        let payload: PageJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ConfigurationError::ContractPayload(format!("failed to parse page json payload: {e}"))
        })?;
        if payload.schema_version != PAGE_JSON_SCHEMA_V1 {
            return Err(ConfigurationError::ContractPayload(format!(
                "unsupported page schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.page)
    }
}
