use crate::view_model::JobRowView;

/// Case-insensitive substring filter over title, company and location.
///
/// A blank query returns the rows untouched, in their original order. The
/// description field is deliberately not searched.
pub fn filter_rows(rows: &[JobRowView], query: &str) -> Vec<JobRowView> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            row.title.to_lowercase().contains(&needle)
                || row.company.to_lowercase().contains(&needle)
                || row.location.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
