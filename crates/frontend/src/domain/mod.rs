pub mod a001_user;
pub mod a002_card_type;
pub mod a003_hse_card;
pub mod a004_training;
pub mod a005_permit_to_work;
pub mod a006_permit_requirement;
pub mod a007_document_requirement;
pub mod a008_user_document;
pub mod a009_incident;
pub mod a010_investigation;
pub mod a011_approval;
