use serde::{Deserialize, Serialize};

/// Advising link between a professor and a student
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfessorStudentRelationship {
    pub id: i64,
    pub professor_id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub relationship_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub professor_name: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub can_view_applications: bool,
    #[serde(default)]
    pub can_upload_documents: bool,
    #[serde(default)]
    pub can_review_applications: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /professor-student`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationshipCreateRequest {
    pub professor_id: i64,
    pub student_id: i64,
    pub relationship_type: String,
    #[serde(default)]
    pub can_view_applications: bool,
    #[serde(default)]
    pub can_upload_documents: bool,
    #[serde(default)]
    pub can_review_applications: bool,
}

/// Filters accepted by `GET /professor-student`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationshipFilter {
    pub professor_id: Option<i64>,
    pub student_id: Option<i64>,
}
