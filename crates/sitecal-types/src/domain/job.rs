use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::staff::StaffId;
use crate::util::parse_calendar_date;

/// Job identifier (time-based, assigned at registration)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

fn read_date(raw: Option<&str>, zone: FixedOffset) -> Option<NaiveDate> {
    raw.and_then(|raw| parse_calendar_date(raw, zone))
}

/// A registered job, as persisted under the `projects` key.
///
/// Period bounds stay as the raw persisted strings; they are reduced to
/// calendar dates on read so one malformed value only hides this record
/// from the calendar instead of failing the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: JobId,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub work_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_period_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_period_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_period_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_period_end: Option<String>,
    #[serde(default)]
    pub selected_staff: Vec<StaffId>,
    #[serde(default)]
    pub created_at: String,
}

impl JobRecord {
    pub fn work_start(&self, zone: FixedOffset) -> Option<NaiveDate> {
        read_date(self.work_period_start.as_deref(), zone)
    }

    pub fn work_end(&self, zone: FixedOffset) -> Option<NaiveDate> {
        read_date(self.work_period_end.as_deref(), zone)
    }

    /// Both work bounds as calendar dates in `zone`, or `None` if either is
    /// missing or unparseable.
    pub fn work_period(&self, zone: FixedOffset) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.work_start(zone)?, self.work_end(zone)?))
    }

    pub fn construction_period(&self, zone: FixedOffset) -> Option<(NaiveDate, NaiveDate)> {
        Some((
            read_date(self.construction_period_start.as_deref(), zone)?,
            read_date(self.construction_period_end.as_deref(), zone)?,
        ))
    }

    pub fn is_assigned_to(&self, staff_id: &StaffId) -> bool {
        self.selected_staff.contains(staff_id)
    }

    /// Contractor id, treating the form's empty selection as absent
    pub fn contractor_ref(&self) -> Option<&str> {
        self.contractor_id.as_deref().filter(|s| !s.is_empty())
    }

    /// Estimate id, treating the form's empty selection as absent
    pub fn estimate_ref(&self) -> Option<&str> {
        self.estimate_id.as_deref().filter(|s| !s.is_empty())
    }

    pub fn created_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_json() -> &'static str {
        r#"{
            "id": "1705300000000",
            "siteName": "A現場 配管工事",
            "workContent": "給水管の交換作業",
            "contractorId": "1",
            "estimateId": "",
            "notes": "緊急対応案件",
            "workPeriodStart": "2024-01-15T00:00:00.000Z",
            "workPeriodEnd": "2024-01-20T00:00:00.000Z",
            "selectedStaff": ["1", "3"],
            "createdAt": "2024-01-10T09:00:00.000Z"
        }"#
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn test_deserialize_persisted_job() {
        let job: JobRecord = serde_json::from_str(job_json()).unwrap();
        assert_eq!(job.id.as_str(), "1705300000000");
        assert_eq!(
            job.work_period(utc()),
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
            ))
        );
        assert_eq!(job.contractor_ref(), Some("1"));
        assert_eq!(job.estimate_ref(), None);
        assert!(job.is_assigned_to(&StaffId::from("3")));
        assert!(!job.is_assigned_to(&StaffId::from("2")));
        assert!(job.construction_period(utc()).is_none());
    }

    #[test]
    fn test_malformed_bound_hides_period_only() {
        let mut job: JobRecord = serde_json::from_str(job_json()).unwrap();
        job.work_period_end = Some("someday".to_string());

        assert!(job.work_start(utc()).is_some());
        assert!(job.work_period(utc()).is_none());
    }

    #[test]
    fn test_form_timestamps_read_in_local_zone() {
        let mut job: JobRecord = serde_json::from_str(job_json()).unwrap();
        job.work_period_start = Some("2024-01-14T15:00:00.000Z".to_string());
        job.work_period_end = Some("2024-01-19T15:00:00.000Z".to_string());
        job.construction_period_start = Some("2023-12-31T15:00:00.000Z".to_string());
        job.construction_period_end = Some("2024-02-27T15:00:00.000Z".to_string());

        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        assert_eq!(job.work_period(jst()), Some((d(1, 15), d(1, 20))));
        assert_eq!(job.construction_period(jst()), Some((d(1, 1), d(2, 28))));
        assert_eq!(job.work_start(utc()), Some(d(1, 14)));
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let job: JobRecord = serde_json::from_str(job_json()).unwrap();
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["siteName"], "A現場 配管工事");
        assert_eq!(value["selectedStaff"][1], "3");
        assert!(value.get("constructionPeriodStart").is_none());
    }
}
