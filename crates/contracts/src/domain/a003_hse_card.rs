use serde::{Deserialize, Serialize};

/// HSE identification card issued to a user.
///
/// `issued_date`/`expired_date` are ISO date strings as returned by the
/// backend; the client never parses them beyond lexicographic comparison
/// (valid for ISO-8601 within the same representation).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HseCard {
    pub card_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub card_number: String,
    pub card_type_id: i64,
    pub card_type_name: String,
    pub issued_by: i64,
    pub issued_by_name: String,
    pub issued_date: String,
    pub expired_date: String,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HseCardCreate {
    pub user_id: i64,
    pub card_number: String,
    pub card_type_id: i64,
    pub issued_by: i64,
    pub issued_date: String,
    pub expired_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HseCardCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id <= 0 {
            return Err("Card holder is required".into());
        }
        if self.card_number.trim().is_empty() {
            return Err("Card number is required".into());
        }
        if self.card_type_id <= 0 {
            return Err("Card type is required".into());
        }
        if self.issued_by <= 0 {
            return Err("Issuer is required".into());
        }
        validate_date_range(&self.issued_date, &self.expired_date)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HseCardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for `POST /hsecards/{id}/renew`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HseCardRenew {
    pub expired_date: String,
}

pub fn validate_date_range(issued: &str, expired: &str) -> Result<(), String> {
    if issued.trim().is_empty() {
        return Err("Issued date is required".into());
    }
    if expired.trim().is_empty() {
        return Err("Expiry date is required".into());
    }
    let issued_date = chrono::NaiveDate::parse_from_str(issued.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid issued date: {}", issued))?;
    let expired_date = chrono::NaiveDate::parse_from_str(expired.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid expiry date: {}", expired))?;
    if expired_date <= issued_date {
        return Err("Expiry date must be after the issued date".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_ordering() {
        assert!(validate_date_range("2025-01-01", "2026-01-01").is_ok());
        assert!(validate_date_range("2025-01-01", "2025-01-01").is_err());
        assert!(validate_date_range("2025-01-01", "2024-12-31").is_err());
        assert!(validate_date_range("", "2024-12-31").is_err());
        assert!(validate_date_range("not-a-date", "2024-12-31").is_err());
    }

    #[test]
    fn create_requires_references() {
        let dto = HseCardCreate {
            user_id: 7,
            card_number: "HSE-0042".into(),
            card_type_id: 2,
            issued_by: 1,
            issued_date: "2025-03-01".into(),
            expired_date: "2026-03-01".into(),
            notes: None,
        };
        assert!(dto.validate().is_ok());

        let missing_type = HseCardCreate { card_type_id: 0, ..dto.clone() };
        assert!(missing_type.validate().is_err());

        let missing_number = HseCardCreate { card_number: " ".into(), ..dto };
        assert!(missing_number.validate().is_err());
    }
}
