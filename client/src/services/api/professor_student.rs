//! # Professor-Student Relationship Endpoints

use serde_json::Value;
use shared::{ApiResponse, ProfessorStudentRelationship, RelationshipCreateRequest, RelationshipFilter};

use super::client::ApiClient;
use super::request::QueryParams;
use crate::core::error::ApiResult;

pub async fn get_all(
    client: &ApiClient,
    filter: RelationshipFilter,
) -> ApiResult<ApiResponse<Vec<ProfessorStudentRelationship>>> {
    let query = QueryParams::new()
        .push_opt("professor_id", filter.professor_id)
        .push_opt("student_id", filter.student_id);
    client.get("/professor-student", query).await
}

pub async fn create(
    client: &ApiClient,
    request: &RelationshipCreateRequest,
) -> ApiResult<ApiResponse<ProfessorStudentRelationship>> {
    client.post("/professor-student", request).await
}

pub async fn delete(client: &ApiClient, id: i64) -> ApiResult<ApiResponse<Value>> {
    client.delete(&format!("/professor-student/{id}")).await
}
