//! Tab labels - single source of truth for tab titles.

/// Returns the human-readable tab title for a tab key.
/// Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d4xx) ────────────────────────────────────────────
        "d400_overview" => "Dashboard",

        // ── Domain aggregates (a0xx) ─────────────────────────────────────
        "a001_user" => "Users",
        "a002_card_type" => "Card types",
        "a003_hse_card" => "HSE cards",
        "a004_training" => "Trainings",
        "a005_permit_to_work" => "Work permits",
        "a006_permit_requirement" => "Permit requirements",
        "a007_document_requirement" => "Document requirements",
        "a008_user_document" => "User documents",
        "a009_incident" => "Incident reports",
        "a010_investigation" => "Investigations",
        "a011_approval" => "Approvals",

        _ => "Unknown",
    }
}
