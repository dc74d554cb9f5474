use serde::{Deserialize, Serialize};

use super::a011_approval::Approval;

/// Permit to work with its approval chain, as served by `GET /permittowork`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitDetail {
    pub permit_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub work_type: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub required_card_type_id: Option<i64>,
    pub required_card_type_name: Option<String>,
    pub status: String,
    /// Set by the backend when the applicant already holds the required
    /// card, the permit skips the manual approval chain.
    pub auto_approved: bool,
    pub auto_approved_date: Option<String>,
    pub auto_approved_by: Option<i64>,
    pub auto_approved_by_name: Option<String>,
    pub created_at: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub approvals: Vec<Approval>,
}

impl PermitDetail {
    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case("pending")
    }

    /// Display number in the `PTW-0001` convention.
    pub fn display_number(&self) -> String {
        format!("PTW-{:04}", self.permit_id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitCreate {
    pub user_id: i64,
    pub work_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub required_card_type_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PermitCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id <= 0 {
            return Err("Applicant is required".into());
        }
        if self.work_type.trim().is_empty() {
            return Err("Work type is required".into());
        }
        if self.start_date.trim().is_empty() || self.end_date.trim().is_empty() {
            return Err("Start and end dates are required".into());
        }
        if self.end_date < self.start_date {
            return Err("End date must not precede the start date".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for `POST /permits/{id}/reject`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermitReject {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> PermitCreate {
        PermitCreate {
            user_id: 3,
            work_type: "Hot Work".into(),
            location: Some("Boiler house".into()),
            start_date: "2025-06-10".into(),
            end_date: "2025-06-12".into(),
            required_card_type_id: 1,
            notes: None,
        }
    }

    #[test]
    fn create_accepts_valid_range() {
        assert!(valid_create().validate().is_ok());
        // single-day permits are allowed
        let mut dto = valid_create();
        dto.end_date = dto.start_date.clone();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn create_rejects_inverted_range() {
        let mut dto = valid_create();
        dto.end_date = "2025-06-09".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn display_number_is_zero_padded() {
        let mut permit = PermitDetail {
            permit_id: 7,
            user_id: 1,
            user_name: String::new(),
            work_type: String::new(),
            location: None,
            start_date: String::new(),
            end_date: String::new(),
            required_card_type_id: None,
            required_card_type_name: None,
            status: "pending".into(),
            auto_approved: false,
            auto_approved_date: None,
            auto_approved_by: None,
            auto_approved_by_name: None,
            created_at: String::new(),
            notes: None,
            approvals: vec![],
        };
        assert_eq!(permit.display_number(), "PTW-0007");
        permit.permit_id = 12345;
        assert_eq!(permit.display_number(), "PTW-12345");
        assert!(permit.is_pending());
    }
}
