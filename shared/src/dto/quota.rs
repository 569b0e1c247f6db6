//! # Matrix Quota DTOs
//!
//! Quotas are allocated per (sub-type, college) cell for an academic period
//! such as `"113-1"` or `"113"`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Allocation state of one matrix cell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotaCell {
    pub total_quota: u32,
    #[serde(default)]
    pub used: u32,
    #[serde(default)]
    pub available: u32,
    #[serde(default)]
    pub applications: u32,
}

/// `GET .../matrix-quota-status/{period}` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixQuotaStatus {
    pub period: String,
    /// sub-type code → college code → cell
    #[serde(default)]
    pub phd_quotas: BTreeMap<String, BTreeMap<String, QuotaCell>>,
    #[serde(default)]
    pub grand_total: Option<QuotaCell>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Body of `PUT .../matrix-quota`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatrixQuotaUpdate {
    pub sub_type: String,
    pub college: String,
    pub new_quota: u32,
}

/// Result of one successful cell update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixQuotaUpdateResult {
    pub sub_type: String,
    pub college: String,
    #[serde(default)]
    pub old_quota: Option<u32>,
    pub new_quota: u32,
}

/// Period selectable in the quota matrix
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotaPeriod {
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub is_current: bool,
}
