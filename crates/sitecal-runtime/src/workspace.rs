use crate::Result;
use crate::config::{CONFIG_FILE, Config};
use crate::services::{CalendarOps, DraftOps, ExportOps, JobOps, StaffOps};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use chrono::FixedOffset;
use sitecal_types::ReferenceData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const REFERENCE_FILE: &str = "reference.json";

/// Contractor/estimate lists from `reference.json`, or the built-in fixtures.
pub fn load_reference(data_dir: &Path) -> Result<ReferenceData> {
    let path = data_dir.join(REFERENCE_FILE);
    if !path.exists() {
        return Ok(ReferenceData::builtin());
    }

    let content = std::fs::read_to_string(&path)?;
    match ReferenceData::from_json(&content) {
        Ok(reference) => Ok(reference),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "malformed reference data, using built-in lists"
            );
            Ok(ReferenceData::builtin())
        }
    }
}

/// Entry point for every operation against one data directory.
pub struct SiteCal {
    data_dir: Option<PathBuf>,
    config: Arc<Config>,
    store: Arc<dyn KeyValueStore>,
    reference: Arc<ReferenceData>,
}

impl SiteCal {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)?;
        let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;
        let reference = load_reference(&data_dir)?;
        let store = FileStore::new(data_dir.clone());

        tracing::debug!(data_dir = %data_dir.display(), "opened data directory");
        Ok(Self {
            data_dir: Some(data_dir),
            config: Arc::new(config),
            store: Arc::new(store),
            reference: Arc::new(reference),
        })
    }

    /// Nothing is read from or written to disk.
    pub fn in_memory(config: Config) -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), config, ReferenceData::builtin())
    }

    pub fn with_store(
        store: Arc<dyn KeyValueStore>,
        config: Config,
        reference: ReferenceData,
    ) -> Self {
        Self {
            data_dir: None,
            config: Arc::new(config),
            store,
            reference: Arc::new(reference),
        }
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Zone in which stored timestamps become calendar dates
    pub fn utc_offset(&self) -> FixedOffset {
        self.config.utc_offset()
    }

    pub fn jobs(&self) -> JobOps {
        JobOps::new(self.store.clone(), self.utc_offset())
    }

    pub fn staff(&self) -> StaffOps {
        StaffOps::new(self.store.clone())
    }

    pub fn draft(&self) -> DraftOps {
        DraftOps::new(self.store.clone())
    }

    pub fn calendar(&self) -> CalendarOps {
        CalendarOps::new(
            self.jobs(),
            self.staff(),
            self.reference.clone(),
            self.utc_offset(),
        )
    }

    pub fn exports(&self) -> ExportOps {
        ExportOps::new(
            self.jobs(),
            self.staff(),
            self.reference.clone(),
            self.config.export.clone(),
            self.utc_offset(),
        )
    }
}
