use serde::{Deserialize, Serialize};

/// Incident categories offered by the report form.
pub const INCIDENT_CATEGORIES: &[&str] = &[
    "Near Miss",
    "First Aid",
    "Medical Treatment",
    "Lost Time Injury",
    "Property Damage",
    "Environmental",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub incident_id: i64,
    pub incident_number: String,
    pub user_id: i64,
    pub user_name: String,
    pub date: String,
    pub location: Option<String>,
    pub category: String,
    pub description: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub status: String,
    /// Investigation summary joined in by the client from
    /// `GET /investigation/incident/{id}`; not part of the incident DTO
    /// the backend serves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investigation: Option<IncidentInvestigation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentInvestigation {
    pub root_cause: Option<String>,
    pub corrective_action: Option<String>,
    pub preventive_action: Option<String>,
    pub close_date: Option<String>,
}

/// Where an incident stands in the investigation lifecycle. Derived
/// client-side from the joined investigation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestigationPhase {
    NotStarted,
    InProgress,
    Completed,
}

impl Incident {
    pub fn investigation_phase(&self) -> InvestigationPhase {
        match &self.investigation {
            None => InvestigationPhase::NotStarted,
            Some(inv) => {
                if inv.close_date.is_some() {
                    InvestigationPhase::Completed
                } else if inv.root_cause.is_some()
                    || inv.corrective_action.is_some()
                    || inv.preventive_action.is_some()
                {
                    InvestigationPhase::InProgress
                } else {
                    InvestigationPhase::NotStarted
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentCreate {
    pub user_id: i64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl IncidentCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id <= 0 {
            return Err("Reporter is required".into());
        }
        if self.date.trim().is_empty() {
            return Err("Incident date is required".into());
        }
        if self.category.trim().is_empty() {
            return Err("Category is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(investigation: Option<IncidentInvestigation>) -> Incident {
        Incident {
            incident_id: 1,
            incident_number: "INC-2025-001".into(),
            user_id: 1,
            user_name: "reporter".into(),
            date: "2025-02-03".into(),
            location: None,
            category: "Near Miss".into(),
            description: None,
            photo_url: None,
            status: "reported".into(),
            investigation,
        }
    }

    #[test]
    fn phase_not_started_without_investigation() {
        assert_eq!(incident(None).investigation_phase(), InvestigationPhase::NotStarted);
        // an empty investigation record is still "not started"
        let empty = incident(Some(IncidentInvestigation::default()));
        assert_eq!(empty.investigation_phase(), InvestigationPhase::NotStarted);
    }

    #[test]
    fn phase_in_progress_with_any_finding() {
        let inv = IncidentInvestigation {
            corrective_action: Some("Guard rail installed".into()),
            ..Default::default()
        };
        assert_eq!(incident(Some(inv)).investigation_phase(), InvestigationPhase::InProgress);
    }

    #[test]
    fn phase_completed_once_closed() {
        let inv = IncidentInvestigation {
            root_cause: Some("Valve left open".into()),
            close_date: Some("2025-03-01".into()),
            ..Default::default()
        };
        assert_eq!(incident(Some(inv)).investigation_phase(), InvestigationPhase::Completed);
    }
}
