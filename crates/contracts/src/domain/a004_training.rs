use serde::{Deserialize, Serialize};

/// Completed (or scheduled) safety training of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub training_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub training_name: String,
    pub completion_date: String,
    pub expiry_date: String,
    #[serde(rename = "certificateURL")]
    pub certificate_url: Option<String>,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingCreate {
    pub user_id: i64,
    pub training_name: String,
    pub completion_date: String,
    pub expiry_date: String,
    #[serde(rename = "certificateURL", skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TrainingCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id <= 0 {
            return Err("Participant is required".into());
        }
        if self.training_name.trim().is_empty() {
            return Err("Training name is required".into());
        }
        if self.completion_date.trim().is_empty() {
            return Err("Completion date is required".into());
        }
        if self.expiry_date.trim().is_empty() {
            return Err("Expiry date is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(rename = "certificateURL", skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
