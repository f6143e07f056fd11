use crate::Result;
use crate::storage::{self, DRAFT_KEY, KeyValueStore};
use chrono::NaiveDate;
use sitecal_types::{FormDraft, StaffId, format_calendar_date};
use std::sync::Arc;

/// Partial edit of the saved registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftUpdate {
    pub site_name: Option<String>,
    pub work_content: Option<String>,
    pub contractor_id: Option<String>,
    pub estimate_id: Option<String>,
    pub notes: Option<String>,
    pub work_period_start: Option<NaiveDate>,
    pub work_period_end: Option<NaiveDate>,
    pub construction_period_start: Option<NaiveDate>,
    pub construction_period_end: Option<NaiveDate>,
    pub add_staff: Vec<StaffId>,
    pub remove_staff: Vec<StaffId>,
}

impl DraftUpdate {
    pub fn apply_to(self, draft: &mut FormDraft) {
        let form = &mut draft.form_data;
        if let Some(v) = self.site_name {
            form.site_name = v;
        }
        if let Some(v) = self.work_content {
            form.work_content = v;
        }
        if let Some(v) = self.contractor_id {
            form.contractor_id = v;
        }
        if let Some(v) = self.estimate_id {
            form.estimate_id = v;
        }
        if let Some(v) = self.notes {
            form.notes = v;
        }

        let set_date = |slot: &mut Option<String>, value: Option<NaiveDate>| {
            if let Some(date) = value {
                *slot = Some(format_calendar_date(date));
            }
        };
        set_date(&mut draft.work_period_start, self.work_period_start);
        set_date(&mut draft.work_period_end, self.work_period_end);
        set_date(&mut draft.construction_period_start, self.construction_period_start);
        set_date(&mut draft.construction_period_end, self.construction_period_end);

        for id in self.add_staff {
            draft.add_staff(id);
        }
        for id in &self.remove_staff {
            draft.remove_staff(id);
        }
    }
}

pub struct DraftOps {
    store: Arc<dyn KeyValueStore>,
}

impl DraftOps {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn show(&self) -> Result<FormDraft> {
        Ok(storage::load(self.store.as_ref(), DRAFT_KEY)?.unwrap_or_default())
    }

    /// Merge `update` into the saved draft and persist the result.
    pub fn save(&self, update: DraftUpdate) -> Result<FormDraft> {
        let mut draft = self.show()?;
        update.apply_to(&mut draft);
        storage::save(self.store.as_ref(), DRAFT_KEY, &draft)?;
        tracing::info!(staff = draft.selected_staff.len(), "draft saved");
        Ok(draft)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(DRAFT_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_save_merges_into_existing_draft() -> Result<()> {
        let drafts = DraftOps::new(Arc::new(MemoryStore::new()));

        drafts.save(DraftUpdate {
            site_name: Some("B現場".to_string()),
            add_staff: vec![StaffId::from("1"), StaffId::from("2")],
            ..DraftUpdate::default()
        })?;
        let draft = drafts.save(DraftUpdate {
            work_period_start: NaiveDate::from_ymd_opt(2024, 1, 15),
            remove_staff: vec![StaffId::from("1")],
            ..DraftUpdate::default()
        })?;

        assert_eq!(draft.form_data.site_name, "B現場");
        assert_eq!(draft.selected_staff, vec![StaffId::from("2")]);
        assert_eq!(draft.work_period_start.as_deref(), Some("2024-01-15"));
        assert_eq!(drafts.show()?, draft);

        drafts.clear()?;
        assert!(drafts.show()?.is_empty());
        Ok(())
    }
}
