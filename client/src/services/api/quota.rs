//! # Scholarship Quota Endpoints
//!
//! Matrix quotas are keyed by scholarship sub type and college. Batch updates
//! are issued one cell at a time; a failed cell is recorded and the rest of
//! the batch still runs.

use shared::{ApiResponse, MatrixQuotaStatus, MatrixQuotaUpdate, MatrixQuotaUpdateResult, QuotaPeriod};

use super::client::ApiClient;
use super::request::{path_segment, QueryParams};
use crate::core::error::ApiResult;

pub async fn get_available_periods(client: &ApiClient) -> ApiResult<ApiResponse<Vec<QuotaPeriod>>> {
    client.get("/scholarship-quotas/periods", QueryParams::new()).await
}

/// Quota matrix for `period` (e.g. `113` or `113-1`).
pub async fn get_matrix_quota_status(client: &ApiClient, period: &str) -> ApiResult<ApiResponse<MatrixQuotaStatus>> {
    client
        .get(&format!("/scholarship-quotas/matrix-quota-status/{}", path_segment(period)), QueryParams::new())
        .await
}

pub async fn update_matrix_quota(
    client: &ApiClient,
    update: &MatrixQuotaUpdate,
) -> ApiResult<ApiResponse<MatrixQuotaUpdateResult>> {
    client.put("/scholarship-quotas/matrix-quota", update).await
}

/// Apply every update in order and report the outcome as one envelope.
///
/// `success` is true only when every cell was updated. Each failure is listed
/// in `errors` as `"{sub_type}/{college}: {message}"`.
#[tracing::instrument(skip(client, updates), fields(count = updates.len()))]
pub async fn batch_update_matrix_quotas(
    client: &ApiClient,
    updates: &[MatrixQuotaUpdate],
) -> ApiResponse<Vec<MatrixQuotaUpdateResult>> {
    let mut results = Vec::with_capacity(updates.len());
    let mut errors = Vec::new();

    for update in updates {
        let outcome = match update_matrix_quota(client, update).await {
            Ok(response) if response.success => match response.data {
                Some(result) => Ok(result),
                None => Ok(MatrixQuotaUpdateResult {
                    sub_type: update.sub_type.clone(),
                    college: update.college.clone(),
                    old_quota: None,
                    new_quota: update.new_quota,
                }),
            },
            Ok(response) => Err(response.message),
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(result) => results.push(result),
            Err(message) => {
                tracing::warn!(sub_type = %update.sub_type, college = %update.college, %message, "Quota update failed");
                errors.push(format!("{}/{}: {}", update.sub_type, update.college, message));
            }
        }
    }

    let message = format!("Updated {} of {} quotas", results.len(), updates.len());
    tracing::info!(updated = results.len(), failed = errors.len(), "Batch quota update finished");

    ApiResponse {
        success: errors.is_empty(),
        message,
        data: Some(results),
        errors: (!errors.is_empty()).then_some(errors),
        trace_id: None,
    }
}
