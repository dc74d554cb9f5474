use serde::{Deserialize, Serialize};

/// Document uploaded by (or for) a user against a document requirement.
///
/// Create/update go over multipart form-data (`userId`,
/// `documentRequirementId` and either a `file` part or a `fileURL` field),
/// so there is no JSON create DTO here; see the frontend api module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub user_document_id: i64,
    pub document_name: String,
    pub document_requirement_id: i64,
    #[serde(default)]
    pub document_requirement_name: String,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(rename = "fileURL")]
    pub file_url: String,
    pub upload_date: String,
    pub status: String,
}

/// Client-side form state for the upload dialog, validated before the
/// multipart body is assembled.
#[derive(Debug, Clone, Default)]
pub struct UserDocumentForm {
    pub user_id: i64,
    pub document_requirement_id: i64,
    pub has_file: bool,
    pub file_url: String,
}

impl UserDocumentForm {
    /// `existing` is true when editing an already-stored document, in
    /// which case keeping the stored file (no new file, no URL) is fine.
    pub fn validate(&self, existing: bool) -> Result<(), String> {
        if self.user_id <= 0 {
            return Err("Select a user".into());
        }
        if self.document_requirement_id <= 0 {
            return Err("Select a document requirement".into());
        }
        if !existing && !self.has_file && self.file_url.trim().is_empty() {
            return Err("Select a file or provide a file URL".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_needs_a_file_or_url_on_create() {
        let form = UserDocumentForm {
            user_id: 1,
            document_requirement_id: 2,
            has_file: false,
            file_url: String::new(),
        };
        assert!(form.validate(false).is_err());
        assert!(form.validate(true).is_ok());

        let with_url = UserDocumentForm { file_url: "https://files/doc.pdf".into(), ..form.clone() };
        assert!(with_url.validate(false).is_ok());

        let with_file = UserDocumentForm { has_file: true, ..form };
        assert!(with_file.validate(false).is_ok());
    }
}
