use serde::{Deserialize, Serialize};

/// Rule linking a work type to the card type (and optional training)
/// a permit applicant must hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitRequirement {
    pub requirement_id: i64,
    pub work_type: String,
    pub required_card_type_id: i64,
    pub required_card_type_name: String,
    pub required_training: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitRequirementCreate {
    pub work_type: String,
    pub required_card_type_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_training: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PermitRequirementCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.work_type.trim().is_empty() {
            return Err("Work type is required".into());
        }
        if self.required_card_type_id <= 0 {
            return Err("Required card type is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitRequirementUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_card_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_training: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
