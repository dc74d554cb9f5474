//! Badge-variant classification for backend status strings.
//!
//! The backend stores statuses as free strings and has been seen
//! returning mixed casings, so every match here is case-insensitive.

/// Badge variant for a permit status.
pub fn permit_status_variant(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "approved" | "inprogress" | "completed" => "success",
        "pending" => "warning",
        "rejected" => "error",
        "draft" => "neutral",
        _ => "neutral",
    }
}

/// Display text for a permit status.
pub fn permit_status_text(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "approved" => "Approved".into(),
        "pending" => "Pending".into(),
        "rejected" => "Rejected".into(),
        "draft" => "Draft".into(),
        "inprogress" => "In progress".into(),
        "completed" => "Completed".into(),
        _ => status.to_string(),
    }
}

/// Badge variant for an approval decision.
pub fn decision_variant(decision: &str) -> &'static str {
    match decision.to_lowercase().as_str() {
        "approved" => "success",
        "rejected" => "error",
        "pending" => "warning",
        _ => "neutral",
    }
}

/// Badge variant for an incident status.
pub fn incident_status_variant(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "reported" => "warning",
        "investigating" | "in progress" => "primary",
        "resolved" => "success",
        "closed" => "neutral",
        _ => "neutral",
    }
}

/// Badge variant for a card/training status.
pub fn validity_status_variant(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "active" | "valid" => "success",
        "expired" => "error",
        "suspended" | "revoked" => "warning",
        _ => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(permit_status_variant("Approved"), "success");
        assert_eq!(permit_status_variant("PENDING"), "warning");
        assert_eq!(decision_variant("rejected"), "error");
        assert_eq!(incident_status_variant("Reported"), "warning");
        assert_eq!(validity_status_variant("EXPIRED"), "error");
    }

    #[test]
    fn unknown_statuses_fall_back_to_neutral() {
        assert_eq!(permit_status_variant("weird"), "neutral");
        assert_eq!(decision_variant(""), "neutral");
        assert_eq!(permit_status_text("weird"), "weird");
    }
}
