use crate::domain::{
    models::{import::{ImportEntry, ImportOutcome}, invitee::{Invitee, NewInvitee}},
    ports::InviteeRepository,
};
use tracing::{error, info};

/// Creates one record per entry with a non-blank name, one at a time, stopping at the first failure.
///
/// Nothing is rolled back: records created before the failing entry remain.
/// `failed_at` indexes `entries` as given, blank rows included.
pub async fn import_entries(repo: &dyn InviteeRepository, entries: &[ImportEntry]) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();

    for (index, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            continue;
        }

        let result = match NewInvitee::new(&entry.name, entry.phone.as_deref()) {
            Ok(details) => repo.create(&Invitee::new(details)).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            error!("Import stopped at entry {} ({}): {}", index, entry.name, e);
            outcome.failed_at = Some(index);
            outcome.error = Some(e.to_string());
            return outcome;
        }
        outcome.created += 1;
    }

    info!("Imported {} of {} entries", outcome.created, entries.len());
    outcome
}
