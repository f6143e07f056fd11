use serde::Serialize;
use std::fmt;

use super::{CreateView, RenderOptions};

#[derive(Debug, Clone, Serialize)]
pub struct StaffEntryViewModel {
    pub id: String,
    pub name: String,
    /// Stored color value (palette name or literal)
    pub color: String,
    pub color_label: String,
    pub hex: String,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub assigned_jobs: usize,
}

#[derive(Debug, Serialize)]
pub struct StaffListViewModel {
    pub members: Vec<StaffEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct SwatchViewModel {
    pub value: String,
    pub label: String,
    pub hex: String,
}

#[derive(Debug, Serialize)]
pub struct PaletteViewModel {
    pub swatches: Vec<SwatchViewModel>,
}

impl CreateView for StaffListViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::staff::StaffListView;
        Box::new(StaffListView::new(&self.members, options))
    }
}

impl CreateView for StaffEntryViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::staff::StaffListView;
        Box::new(StaffListView::new(std::slice::from_ref(self), options))
    }
}

impl CreateView for PaletteViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::staff::PaletteView;
        Box::new(PaletteView::new(self, options))
    }
}
