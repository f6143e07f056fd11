use crate::storage::{self, KeyValueStore, STAFF_KEY};
use crate::{Error, Result};
use chrono::Utc;
use sitecal_types::{StaffId, StaffMember, default_roster, is_valid_color, next_time_id};
use std::sync::Arc;

pub const MISSING_NAME: &str = "名前を入力してください";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaff {
    pub name: String,
    pub color: String,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Fields to change; `Some("")` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(MISSING_NAME.to_string()));
    }
    Ok(())
}

fn check_color(color: &str) -> Result<()> {
    if !is_valid_color(color) {
        return Err(Error::Validation(format!("Unknown color: {}", color)));
    }
    Ok(())
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

pub struct StaffOps {
    store: Arc<dyn KeyValueStore>,
}

impl StaffOps {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current roster; the default five members until the roster is first saved.
    pub fn list(&self) -> Result<Vec<StaffMember>> {
        Ok(storage::load_collection(self.store.as_ref(), STAFF_KEY)?.unwrap_or_else(default_roster))
    }

    pub fn get(&self, id: &str) -> Result<StaffMember> {
        self.list()?
            .into_iter()
            .find(|m| m.id.as_str() == id)
            .ok_or_else(|| Error::NotFound(format!("staff {}", id)))
    }

    fn save(&self, roster: &[StaffMember]) -> Result<()> {
        storage::save(self.store.as_ref(), STAFF_KEY, roster)
    }

    pub fn add(&self, new_staff: NewStaff) -> Result<StaffMember> {
        check_name(&new_staff.name)?;
        check_color(&new_staff.color)?;

        let mut roster = self.list()?;
        let id = next_time_id(Utc::now().timestamp_millis(), |candidate| {
            roster.iter().any(|m| m.id.as_str() == candidate)
        });

        let member = StaffMember {
            id: StaffId::new(id),
            name: new_staff.name,
            color: new_staff.color,
            position: optional(new_staff.position),
            phone: optional(new_staff.phone),
            email: optional(new_staff.email),
        };

        roster.push(member.clone());
        self.save(&roster)?;
        tracing::info!(staff_id = %member.id, name = %member.name, "staff added");
        Ok(member)
    }

    pub fn edit(&self, id: &str, update: StaffUpdate) -> Result<StaffMember> {
        let mut roster = self.list()?;
        let member = roster
            .iter_mut()
            .find(|m| m.id.as_str() == id)
            .ok_or_else(|| Error::NotFound(format!("staff {}", id)))?;

        if let Some(name) = update.name {
            check_name(&name)?;
            member.name = name;
        }
        if let Some(color) = update.color {
            check_color(&color)?;
            member.color = color;
        }
        if let Some(position) = update.position {
            member.position = optional(Some(position));
        }
        if let Some(phone) = update.phone {
            member.phone = optional(Some(phone));
        }
        if let Some(email) = update.email {
            member.email = optional(Some(email));
        }

        let updated = member.clone();
        self.save(&roster)?;
        tracing::info!(staff_id = %updated.id, "staff updated");
        Ok(updated)
    }

    /// Hard removal; jobs keep the id and render it as absent.
    pub fn remove(&self, id: &str) -> Result<StaffMember> {
        let mut roster = self.list()?;
        let index = roster
            .iter()
            .position(|m| m.id.as_str() == id)
            .ok_or_else(|| Error::NotFound(format!("staff {}", id)))?;

        let removed = roster.remove(index);
        self.save(&roster)?;
        tracing::info!(staff_id = %removed.id, "staff removed");
        Ok(removed)
    }
}
