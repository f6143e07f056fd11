use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, RenderOptions};

#[derive(Debug, Serialize)]
pub struct ExportedFileViewModel {
    pub path: PathBuf,
    pub filename: String,
    pub mime_type: String,
    pub bytes: usize,
}

#[derive(Debug, Serialize)]
pub struct ExportResultViewModel {
    pub files: Vec<ExportedFileViewModel>,
}

impl CreateView for ExportResultViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::export::ExportResultView;
        Box::new(ExportResultView::new(self))
    }
}
