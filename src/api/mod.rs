mod engine;
mod json_contract;

pub use engine::DashboardEngine;
pub use json_contract::{PageJsonContractV1, PAGE_JSON_SCHEMA_V1};
