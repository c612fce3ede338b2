use view_access_domain::{View, ViewAccessReport};

/// Renders one line per group with access, then one per failed group.
pub fn report_lines(report: &ViewAccessReport) -> Vec<String> {
    if report.entries().is_empty() && report.failures().is_empty() {
        return vec![format!("No group has access to view {}", report.view_id())];
    }

    let granted = report.entries().iter().map(|entry| {
        format!(
            "Group '{}' has {} access",
            entry.group_name(),
            entry.access_level()
        )
    });
    let failed = report.failures().iter().map(|failure| {
        format!(
            "Group '{}' could not be resolved: {}",
            failure.group_name(),
            failure.error()
        )
    });

    granted.chain(failed).collect()
}

/// Renders the selectable views, one `<id>\t<label>` line each.
pub fn view_lines(views: &[View]) -> Vec<String> {
    views
        .iter()
        .map(|view| format!("{}\t{}", view.id(), view.label()))
        .collect()
}
