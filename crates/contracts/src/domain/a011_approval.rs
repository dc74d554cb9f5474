use serde::{Deserialize, Serialize};

/// Decision values the backend stores. Comparison in the UI is always
/// case-insensitive, the backend has been seen returning both casings.
pub const DECISIONS: &[&str] = &["Pending", "Approved", "Rejected"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub approval_id: i64,
    pub permit_id: i64,
    pub approver_id: i64,
    pub approver_name: String,
    pub role: String,
    pub decision: String,
    pub decision_date: String,
    pub comment: Option<String>,
}

impl Approval {
    pub fn is_pending(&self) -> bool {
        self.decision.eq_ignore_ascii_case("pending")
    }
}

/// Approval joined with a summary of its permit, from
/// `GET /approvals/with-permit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalWithPermit {
    #[serde(flatten)]
    pub approval: Approval,
    pub permit_data: Option<PermitSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitSummary {
    pub permit_id: i64,
    pub work_type: String,
    pub location: Option<String>,
    pub user_name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

/// Body of `PUT /approvals/{id}`. The backend stamps `decisionDate`
/// itself whenever the decision changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalUpdate {
    pub decision: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ApprovalUpdate {
    pub fn validate(&self) -> Result<(), String> {
        let known = DECISIONS
            .iter()
            .any(|d| d.eq_ignore_ascii_case(&self.decision));
        if !known {
            return Err(format!("Unknown decision: {}", self.decision));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_check_is_case_insensitive() {
        assert!(ApprovalUpdate { decision: "approved".into(), comment: None }.validate().is_ok());
        assert!(ApprovalUpdate { decision: "PENDING".into(), comment: None }.validate().is_ok());
        assert!(ApprovalUpdate { decision: "maybe".into(), comment: None }.validate().is_err());
    }

    #[test]
    fn with_permit_flattens_the_approval() {
        let json = r#"{
            "approvalId": 5,
            "permitId": 9,
            "approverId": 2,
            "approverName": "Siti",
            "role": "Supervisor",
            "decision": "Pending",
            "decisionDate": "2025-04-01T08:00:00Z",
            "permitData": {
                "permitId": 9,
                "workType": "Working at Height",
                "userName": "Budi",
                "startDate": "2025-04-02",
                "endDate": "2025-04-03",
                "status": "pending"
            }
        }"#;
        let parsed: ApprovalWithPermit = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.approval.approval_id, 5);
        assert!(parsed.approval.is_pending());
        assert_eq!(parsed.permit_data.unwrap().work_type, "Working at Height");
    }
}
