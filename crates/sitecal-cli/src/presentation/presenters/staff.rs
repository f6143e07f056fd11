use sitecal_types::{JobRecord, PALETTE, StaffMember, color_label, resolve_color};

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, PaletteViewModel, StaffEntryViewModel, StaffListViewModel,
    StatusBadge, SwatchViewModel,
};

pub fn staff_entry(member: &StaffMember, jobs: &[JobRecord]) -> StaffEntryViewModel {
    StaffEntryViewModel {
        id: member.id.to_string(),
        name: member.name.clone(),
        color: member.color.clone(),
        color_label: color_label(&member.color).to_string(),
        hex: resolve_color(&member.color).to_hex(),
        position: member.position.clone(),
        phone: member.phone.clone(),
        email: member.email.clone(),
        assigned_jobs: jobs.iter().filter(|j| j.is_assigned_to(&member.id)).count(),
    }
}

pub fn present_staff_list(
    members: &[StaffMember],
    jobs: &[JobRecord],
) -> CommandResultViewModel<StaffListViewModel> {
    let content = StaffListViewModel {
        members: members.iter().map(|m| staff_entry(m, jobs)).collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    if members.is_empty() {
        result = result.with_suggestion(Guidance::new("Add someone").with_command(cmd::STAFF_ADD));
    }
    result
}

/// After `staff add` or `staff edit`
pub fn present_staff_saved(
    member: &StaffMember,
    jobs: &[JobRecord],
    created: bool,
) -> CommandResultViewModel<StaffEntryViewModel> {
    let verb = if created { "Added" } else { "Updated" };
    CommandResultViewModel::new(staff_entry(member, jobs))
        .with_badge(StatusBadge::success(format!("{} {}", verb, member.name)))
        .with_suggestion(Guidance::new("Available colors").with_command(cmd::STAFF_COLORS))
}

pub fn present_staff_removed(
    member: &StaffMember,
    jobs: &[JobRecord],
) -> CommandResultViewModel<StaffEntryViewModel> {
    let entry = staff_entry(member, jobs);
    let orphaned = entry.assigned_jobs;

    let mut result = CommandResultViewModel::new(entry);
    if orphaned > 0 {
        result = result
            .with_badge(StatusBadge::warning(format!(
                "Removed {}; {} job(s) still reference id {}",
                member.name, orphaned, member.id
            )))
            .with_suggestion(
                Guidance::new("Those jobs no longer show this person on the calendar")
                    .with_command(cmd::JOB_LIST),
            );
    } else {
        result = result.with_badge(StatusBadge::success(format!("Removed {}", member.name)));
    }
    result
}

pub fn present_palette() -> CommandResultViewModel<PaletteViewModel> {
    let swatches = PALETTE
        .iter()
        .map(|s| SwatchViewModel {
            value: s.value.to_string(),
            label: s.label.to_string(),
            hex: s.rgb.to_hex(),
        })
        .collect();

    CommandResultViewModel::new(PaletteViewModel { swatches }).with_suggestion(
        Guidance::new("Any #rrggbb literal is accepted too").with_command(cmd::STAFF_ADD),
    )
}
