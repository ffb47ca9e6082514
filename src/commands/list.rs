use crate::context::AppContext;
use crate::error::AppResult;
use crate::registry::{Listing, ProfileRecord};

const HEADERS: [&str; 4] = ["Name", "Path", "Default", "Created"];

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let listing = ctx.registry.list()?;
    let rows = listing.profiles.iter().map(table_row).collect::<Vec<_>>();

    ctx.output
        .emit_table(&HEADERS, &rows, &status_line(&listing), &listing)
}

fn table_row(record: &ProfileRecord) -> Vec<String> {
    vec![
        record.name.clone(),
        record.display_path.clone(),
        (if record.is_default { "✓" } else { "" }).to_string(),
        record.created_at.clone(),
    ]
}

fn status_line(listing: &Listing) -> String {
    if !listing.registry_found {
        return "No Firefox profiles found".to_string();
    }

    format!("Loaded {} profile(s)", listing.profiles.len())
}
