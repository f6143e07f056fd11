use sitecal_engine::ExportArtifact;
use std::path::PathBuf;

use crate::presentation::view_models::{
    CommandResultViewModel, ExportResultViewModel, ExportedFileViewModel, StatusBadge,
};

/// `written` pairs each artifact with the path it landed at
pub fn present_export(
    artifacts: &[ExportArtifact],
    written: Vec<PathBuf>,
) -> CommandResultViewModel<ExportResultViewModel> {
    let files: Vec<ExportedFileViewModel> = artifacts
        .iter()
        .zip(written)
        .map(|(artifact, path)| ExportedFileViewModel {
            path,
            filename: artifact.filename.clone(),
            mime_type: artifact.mime_type.clone(),
            bytes: artifact.content.len(),
        })
        .collect();

    let badge = StatusBadge::success(format!("Exported {} file(s)", files.len()));
    CommandResultViewModel::new(ExportResultViewModel { files }).with_badge(badge)
}
