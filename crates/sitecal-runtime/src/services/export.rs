use crate::config::ExportConfig;
use crate::services::{JobOps, StaffOps};
use crate::storage::atomic_write;
use crate::{Error, Result};
use chrono::{FixedOffset, NaiveDate};
use sitecal_engine::{
    ExportArtifact, ExportOptions, ExportStyle, JobFilter, StaffFilter, export_jobs, export_staff,
};
use sitecal_types::{ReferenceData, StaffDirectory};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Which datasets one export run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportSelection {
    #[default]
    Jobs,
    Staff,
    Both,
}

impl FromStr for ExportSelection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "jobs" | "projects" => Ok(ExportSelection::Jobs),
            "staff" => Ok(ExportSelection::Staff),
            "both" => Ok(ExportSelection::Both),
            _ => Err(format!("Unknown export dataset: {}", s)),
        }
    }
}

impl ExportSelection {
    fn includes_jobs(self) -> bool {
        matches!(self, ExportSelection::Jobs | ExportSelection::Both)
    }

    fn includes_staff(self) -> bool {
        matches!(self, ExportSelection::Staff | ExportSelection::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub selection: ExportSelection,
    pub style: ExportStyle,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub staff: StaffFilter,
    pub include_notes: bool,
    pub filemaker: bool,
}

impl ExportRequest {
    /// A jobs export using the configured defaults
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            selection: ExportSelection::Jobs,
            style: config.default_style,
            from: None,
            to: None,
            staff: StaffFilter::All,
            include_notes: config.include_notes,
            filemaker: false,
        }
    }
}

pub struct ExportOps {
    jobs: JobOps,
    staff: StaffOps,
    reference: Arc<ReferenceData>,
    config: ExportConfig,
    zone: FixedOffset,
}

impl ExportOps {
    pub fn new(
        jobs: JobOps,
        staff: StaffOps,
        reference: Arc<ReferenceData>,
        config: ExportConfig,
        zone: FixedOffset,
    ) -> Self {
        Self {
            jobs,
            staff,
            reference,
            config,
            zone,
        }
    }

    /// Build every requested artifact; fails before anything is written if
    /// any dataset ends up empty.
    pub fn build(&self, request: &ExportRequest, today: NaiveDate) -> Result<Vec<ExportArtifact>> {
        let options = ExportOptions {
            style: request.style,
            zone: self.zone,
            filemaker: request.filemaker,
            today,
        };
        let roster = self.staff.list()?;
        let mut artifacts = Vec::new();

        if request.selection.includes_jobs() {
            let jobs = self.jobs.list()?;
            let filter = JobFilter::new()
                .with_staff(request.staff.clone())
                .with_work_date_range(request.from, request.to, self.zone);
            let selected = filter.apply(&jobs, &self.reference);

            artifacts.push(export_jobs(
                &selected,
                StaffDirectory::new(&roster),
                &self.reference,
                request.include_notes,
                &options,
            )?);
        }

        if request.selection.includes_staff() {
            artifacts.push(export_staff(&roster, &options)?);
        }

        Ok(artifacts)
    }

    /// Directory exports land in when none is given explicitly
    pub fn default_output_dir(&self) -> PathBuf {
        self.config
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn write(&self, artifacts: &[ExportArtifact], output_dir: &Path) -> Result<Vec<PathBuf>> {
        if output_dir.is_file() {
            return Err(Error::Config(format!(
                "Output path is a file: {}",
                output_dir.display()
            )));
        }

        artifacts
            .iter()
            .map(|artifact| -> Result<PathBuf> {
                let path = output_dir.join(&artifact.filename);
                atomic_write(&path, artifact.content.as_bytes())?;
                tracing::info!(path = %path.display(), "export written");
                Ok(path)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore, PROJECTS_KEY};
    use sitecal_engine::export::BOM;
    use sitecal_types::StaffId;

    const JOBS: &str = r#"[
        {"id":"1","siteName":"A現場","workContent":"配管","workPeriodStart":"2024-01-15","workPeriodEnd":"2024-01-20","selectedStaff":["1"],"createdAt":"2024-01-10T09:00:00.000Z"},
        {"id":"2","siteName":"B現場","workContent":"点検","workPeriodStart":"2024-02-01","workPeriodEnd":"2024-02-01","selectedStaff":["2"],"createdAt":"2024-01-12T14:30:00.000Z"}
    ]"#;

    fn ops() -> Result<ExportOps> {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(PROJECTS_KEY, JOBS)?;
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        Ok(ExportOps::new(
            JobOps::new(store.clone(), jst),
            StaffOps::new(store),
            Arc::new(ReferenceData::builtin()),
            ExportConfig::default(),
            jst,
        ))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_both_builds_two_artifacts() -> Result<()> {
        let exports = ops()?;
        let request = ExportRequest {
            selection: ExportSelection::Both,
            ..ExportRequest::from_config(&ExportConfig::default())
        };

        let artifacts = exports.build(&request, today())?;
        let names: Vec<&str> = artifacts.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(names, vec!["案件データ_2024-03-01.csv", "担当者データ_2024-03-01.csv"]);
        assert!(artifacts[0].content.starts_with(BOM));
        Ok(())
    }

    #[test]
    fn test_filters_apply_to_jobs() -> Result<()> {
        let exports = ops()?;
        let request = ExportRequest {
            staff: StaffFilter::Only(StaffId::from("2")),
            filemaker: true,
            ..ExportRequest::from_config(&ExportConfig::default())
        };

        let artifacts = exports.build(&request, today())?;
        let lines: Vec<&str> = artifacts[0].content.lines().collect();
        assert_eq!(artifacts[0].filename, "案件データ_FileMaker形式_2024-03-01.csv");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("2,B現場,2024-02-01,佐藤花子,"));
        assert!(lines[1].ends_with(",2024/1/12 23:30:00"));
        Ok(())
    }

    #[test]
    fn test_empty_selection_is_an_error() -> Result<()> {
        let exports = ops()?;
        let request = ExportRequest {
            from: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..ExportRequest::from_config(&ExportConfig::default())
        };

        let err = exports.build(&request, today()).unwrap_err();
        assert!(matches!(err, Error::Engine(sitecal_engine::Error::EmptyExport(_))));
        Ok(())
    }
}
