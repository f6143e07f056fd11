use std::fmt;

use super::swatch;
use crate::presentation::formatters::{fit, pad};
use crate::presentation::view_models::{PaletteViewModel, RenderOptions, StaffEntryViewModel};

// --------------------------------------------------------
// Staff List View
// --------------------------------------------------------

pub struct StaffListView<'a> {
    members: &'a [StaffEntryViewModel],
    options: RenderOptions,
}

impl<'a> StaffListView<'a> {
    pub fn new(members: &'a [StaffEntryViewModel], options: RenderOptions) -> Self {
        Self { members, options }
    }
}

impl<'a> fmt::Display for StaffListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.members.is_empty() {
            writeln!(f, "No staff registered.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{} {} {} {} {} {} EMAIL",
            pad("ID", 14),
            pad("NAME", 16),
            pad("COLOR", 12),
            pad("POSITION", 12),
            pad("PHONE", 14),
            pad("JOBS", 5),
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for member in self.members {
            let mark = swatch(&member.hex, self.options.color);
            let color = if mark.is_empty() {
                fit(&member.color_label, 12)
            } else {
                format!("{} {}", mark, fit(&member.color_label, 10))
            };
            writeln!(
                f,
                "{} {} {} {} {} {} {}",
                fit(&member.id, 14),
                fit(&member.name, 16),
                color,
                fit(member.position.as_deref().unwrap_or("-"), 12),
                fit(member.phone.as_deref().unwrap_or("-"), 14),
                pad(&member.assigned_jobs.to_string(), 5),
                member.email.as_deref().unwrap_or("-"),
            )?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Palette View
// --------------------------------------------------------

pub struct PaletteView<'a> {
    data: &'a PaletteViewModel,
    options: RenderOptions,
}

impl<'a> PaletteView<'a> {
    pub fn new(data: &'a PaletteViewModel, options: RenderOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for PaletteView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for swatch_vm in &self.data.swatches {
            let mark = swatch(&swatch_vm.hex, self.options.color);
            writeln!(
                f,
                "{} {} {} {}",
                if mark.is_empty() { " ".to_string() } else { mark },
                pad(&swatch_vm.value, 16),
                pad(&swatch_vm.label, 6),
                swatch_vm.hex
            )?;
        }
        Ok(())
    }
}
