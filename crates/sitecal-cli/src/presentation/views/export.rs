use std::fmt;

use crate::presentation::view_models::ExportResultViewModel;

pub struct ExportResultView<'a> {
    data: &'a ExportResultViewModel,
}

impl<'a> ExportResultView<'a> {
    pub fn new(data: &'a ExportResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ExportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for file in &self.data.files {
            writeln!(
                f,
                "  {} ({}, {} bytes)",
                file.path.display(),
                file.mime_type,
                file.bytes
            )?;
        }
        Ok(())
    }
}
