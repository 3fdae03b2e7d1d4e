use jobboard_core::{AppViewModel, ApplicationField, JobRowView, SubmissionStatus};

/// Prints the current catalog view: banners first, then the row table.
pub fn render(view: &AppViewModel) {
    if view.loading {
        println!("Fetching listings...");
    }
    if let Some(error) = &view.last_fetch_error {
        println!("! fetch failed: {error} (run `fetch` to retry)");
    }
    if let Some(error) = &view.last_store_error {
        println!("! could not persist saved jobs: {error} (try again)");
    }
    for (field, message) in &view.form_errors {
        println!("! application form, {}: {message}", field_label(*field));
    }
    match &view.submission {
        SubmissionStatus::Idle => {}
        SubmissionStatus::Pending => println!("Application submitted, waiting for the source..."),
        SubmissionStatus::Accepted => println!("Application accepted."),
        SubmissionStatus::Rejected(message) => println!("! application rejected: {message}"),
    }

    if view.rows.is_empty() {
        if !view.query.trim().is_empty() {
            println!(
                "No listings match {:?} ({} fetched).",
                view.query, view.job_count
            );
        } else if !view.loading {
            println!("No listings fetched yet.");
        }
        return;
    }

    if view.query.trim().is_empty() {
        println!("{} listings, {} saved:", view.job_count, view.saved_count);
    } else {
        println!(
            "{} of {} listings match {:?}:",
            view.rows.len(),
            view.job_count,
            view.query
        );
    }
    for (index, row) in view.rows.iter().enumerate() {
        println!("{}", format_row(index, row));
    }
}

pub fn saved_list(view: &AppViewModel) {
    if view.saved.is_empty() {
        println!("No saved jobs.");
        return;
    }
    println!("{} saved:", view.saved_count);
    for (index, row) in view.saved.iter().enumerate() {
        println!("{}", format_row(index, row));
    }
}

pub fn help() {
    println!("commands:");
    println!("  fetch                refresh the catalog");
    println!("  search <text>        filter by title, company or location");
    println!("  search               clear the filter");
    println!("  save <row>           save the listing shown at <row>");
    println!("  remove <row>         drop entry <row> of the saved list");
    println!("  saved                show the saved list");
    println!("  list                 show the catalog again");
    println!("  apply <row> <name>|<email>|<phone>|<cover letter>");
    println!("  quit");
}

pub fn usage_error(message: &str) {
    println!("! {message}");
}

fn format_row(index: usize, row: &JobRowView) -> String {
    let marker = if row.is_saved { "*" } else { " " };
    format!(
        "{:>3}. [{marker}] {} at {} ({}) {}",
        index + 1,
        row.title,
        row.company,
        row.location,
        row.salary
    )
}

fn field_label(field: ApplicationField) -> &'static str {
    match field {
        ApplicationField::Name => "name",
        ApplicationField::Email => "email",
        ApplicationField::Phone => "phone",
        ApplicationField::CoverLetter => "cover letter",
    }
}
