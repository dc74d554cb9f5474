use serde::{Deserialize, Serialize};

/// Root-cause analysis record attached to an incident. Open/closed is
/// not a stored status, it is derived from `close_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investigation {
    pub investigation_id: i64,
    pub incident_id: i64,
    pub incident_title: Option<String>,
    pub hse_officer_id: i64,
    pub hse_officer_name: String,
    pub root_cause: Option<String>,
    pub corrective_action: Option<String>,
    pub preventive_action: Option<String>,
    pub close_date: Option<String>,
}

impl Investigation {
    pub fn is_closed(&self) -> bool {
        self.close_date.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationCreate {
    pub incident_id: i64,
    pub hse_officer_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrective_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preventive_action: Option<String>,
}

impl InvestigationCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.incident_id <= 0 {
            return Err("Incident is required".into());
        }
        if self.hse_officer_id <= 0 {
            return Err("HSE officer is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrective_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preventive_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<String>,
}

/// Incident dropdown option for the create dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentOption {
    pub incident_id: i64,
    pub incident_title: String,
    pub incident_number: String,
}

/// HSE officer dropdown option for the create dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HseOfficerOption {
    pub hse_officer_id: i64,
    pub name: String,
    pub email: Option<String>,
}
