use serde::{Deserialize, Serialize};

/// Scholarship definition as listed in the catalogue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scholarship {
    pub id: i64,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub academic_year: Option<i32>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub application_start_date: Option<String>,
    #[serde(default)]
    pub application_end_date: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Scholarship the current student may apply to, with rule outcomes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EligibleScholarship {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub eligible_sub_types: Vec<String>,
    #[serde(default)]
    pub passed_rules: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub application_end_date: Option<String>,
}

/// Filters accepted by `GET /scholarships`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScholarshipFilter {
    pub category: Option<String>,
    pub academic_year: Option<i32>,
    pub semester: Option<String>,
    pub is_active: Option<bool>,
}
