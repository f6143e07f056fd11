use serde::{Deserialize, Serialize};

use super::staff::StaffId;

/// Free-text part of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub site_name: String,
    pub work_content: String,
    pub contractor_id: String,
    pub estimate_id: String,
    pub notes: String,
}

/// In-progress registration form, persisted under `projectFormData` and
/// cleared once the job is registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormDraft {
    pub form_data: FormData,
    pub selected_staff: Vec<StaffId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_period_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_period_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_period_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_period_end: Option<String>,
}

impl FormDraft {
    /// Add a staff member once; repeated adds keep the original position.
    pub fn add_staff(&mut self, id: StaffId) {
        if !self.selected_staff.contains(&id) {
            self.selected_staff.push(id);
        }
    }

    pub fn remove_staff(&mut self, id: &StaffId) {
        self.selected_staff.retain(|s| s != id);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_staff_is_idempotent() {
        let mut draft = FormDraft::default();
        draft.add_staff("2".into());
        draft.add_staff("1".into());
        draft.add_staff("2".into());
        assert_eq!(draft.selected_staff, vec![StaffId::from("2"), StaffId::from("1")]);

        draft.remove_staff(&StaffId::from("2"));
        assert_eq!(draft.selected_staff, vec![StaffId::from("1")]);
    }

    #[test]
    fn test_partial_draft_deserializes() {
        let draft: FormDraft =
            serde_json::from_str(r#"{"formData": {"siteName": "B現場"}, "workPeriodStart": "2024-03-01"}"#)
                .unwrap();
        assert_eq!(draft.form_data.site_name, "B現場");
        assert_eq!(draft.work_period_start.as_deref(), Some("2024-03-01"));
        assert!(draft.selected_staff.is_empty());
        assert!(!draft.is_empty());
    }
}
