use anyhow::{Result, bail};
use sitecal_types::{ReferenceData, StaffDirectory, StaffId};

/// Accept an exact contractor id, or a name/code fragment matching exactly one contractor
pub fn contractor_id(reference: &ReferenceData, raw: &str) -> Result<String> {
    if raw.is_empty() || reference.contractor(raw).is_some() {
        return Ok(raw.to_string());
    }
    match reference.search_contractors(raw).as_slice() {
        [one] => Ok(one.id.clone()),
        [] => bail!("No contractor matches '{}'", raw),
        many => {
            let names: Vec<String> = many
                .iter()
                .map(|c| format!("{} ({})", c.name, c.id))
                .collect();
            bail!("'{}' matches several contractors: {}", raw, names.join(", "))
        }
    }
}

/// Accept an exact estimate id, or a number/project fragment matching exactly one estimate
pub fn estimate_id(reference: &ReferenceData, raw: &str) -> Result<String> {
    if raw.is_empty() || reference.estimate(raw).is_some() {
        return Ok(raw.to_string());
    }
    match reference.search_estimates(raw).as_slice() {
        [one] => Ok(one.id.clone()),
        [] => bail!("No estimate matches '{}'", raw),
        many => {
            let numbers: Vec<&str> = many.iter().map(|e| e.number.as_str()).collect();
            bail!("'{}' matches several estimates: {}", raw, numbers.join(", "))
        }
    }
}

/// Parse staff ids given on the command line, rejecting ids not on the roster
pub fn staff_ids(raw: &[String], staff: StaffDirectory<'_>) -> Result<Vec<StaffId>> {
    let mut ids: Vec<StaffId> = Vec::new();
    for value in raw.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let id = StaffId::from(value);
        if !staff.contains(&id) {
            bail!("Unknown staff id: {}", value);
        }
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
