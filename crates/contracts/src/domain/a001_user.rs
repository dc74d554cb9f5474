use serde::{Deserialize, Serialize};

/// Known user roles. The backend stores the role as a free string,
/// these are the values the UI offers.
pub const USER_ROLES: &[&str] = &["Supervisor", "HSSE", "Worker"];

/// Known user statuses.
pub const USER_STATUSES: &[&str] = &["Active", "Inactive"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub user_name: String,
    pub email: Option<String>,
    pub role: String,
    pub department: String,
    pub status: String,
    pub created_at: String,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub department: String,
}

impl UserCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".into());
        }
        if !is_plausible_email(&self.email) {
            return Err("Email format is invalid".into());
        }
        if self.password.len() < 6 {
            return Err("Password must be at least 6 characters".into());
        }
        if self.role.trim().is_empty() {
            return Err("Role is required".into());
        }
        if self.department.trim().is_empty() {
            return Err("Department is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(email) = &self.email {
            if !is_plausible_email(email) {
                return Err("Email format is invalid".into());
            }
        }
        if let Some(password) = &self.password {
            if password.len() < 6 {
                return Err("Password must be at least 6 characters".into());
            }
        }
        Ok(())
    }
}

/// Cheap shape check: one '@' with a dot somewhere after it.
/// The backend performs the authoritative validation.
fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, host)) => {
            !local.is_empty() && host.contains('.') && !host.starts_with('.') && !host.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> UserCreate {
        UserCreate {
            name: "Budi Santoso".into(),
            email: "budi@plant.example".into(),
            password: "secret1".into(),
            role: "Worker".into(),
            department: "Maintenance".into(),
        }
    }

    #[test]
    fn create_accepts_valid_input() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn create_rejects_missing_fields() {
        let mut dto = valid_create();
        dto.name = "  ".into();
        assert!(dto.validate().is_err());

        let mut dto = valid_create();
        dto.department = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_rejects_bad_email_and_short_password() {
        let mut dto = valid_create();
        dto.email = "not-an-email".into();
        assert!(dto.validate().is_err());

        let mut dto = valid_create();
        dto.email = "a@b".into();
        assert!(dto.validate().is_err());

        let mut dto = valid_create();
        dto.password = "12345".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_only_checks_present_fields() {
        let dto = UserUpdate::default();
        assert!(dto.validate().is_ok());

        let dto = UserUpdate {
            email: Some("broken".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
