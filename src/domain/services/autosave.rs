use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info};
use crate::domain::ports::TemplateRepository;

#[derive(Default)]
struct PendingSave {
    generation: u64,
    text: Option<String>,
    /// Generation whose text a timer task has taken and is writing.
    saving: Option<u64>,
}

/// Debounced writer for the template: only the last edit within the idle
/// window reaches the store.
pub struct TemplateAutosaver {
    repo: Arc<dyn TemplateRepository>,
    debounce: Duration,
    pending: Arc<Mutex<PendingSave>>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl TemplateAutosaver {
    pub fn new(repo: Arc<dyn TemplateRepository>, debounce: Duration) -> Self {
        Self {
            repo,
            debounce,
            pending: Arc::new(Mutex::new(PendingSave::default())),
            timer: Mutex::new(None),
        }
    }

    /// Cancels any scheduled save and schedules `text` after the idle interval.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, text: String) {
        let generation = {
            let mut pending = lock(&self.pending);
            pending.generation += 1;
            pending.text = Some(text);
            pending.saving = None;
            pending.generation
        };

        let repo = self.repo.clone();
        let pending = self.pending.clone();
        let debounce = self.debounce;

        let handle = tokio::spawn(async move {
            sleep(debounce).await;
            let text = {
                let mut slot = lock(&pending);
                if slot.generation != generation {
                    return;
                }
                slot.saving = Some(generation);
                slot.text.take()
            };
            if let Some(text) = text {
                save(repo.as_ref(), &text).await;
            }
            let mut slot = lock(&pending);
            if slot.saving == Some(generation) {
                slot.saving = None;
            }
        });

        if let Some(previous) = lock(&self.timer).replace(handle) {
            debug!("Superseding pending template save");
            previous.abort();
        }
    }

    /// Saves the pending text right away, if any.
    ///
    /// A save already started by the timer is awaited instead of aborted.
    pub async fn flush(&self) {
        let handle = lock(&self.timer).take();
        let (text, in_flight) = {
            let mut pending = lock(&self.pending);
            pending.generation += 1;
            (pending.text.take(), pending.saving.is_some())
        };

        if let Some(handle) = handle {
            if in_flight {
                let _ = handle.await;
            } else {
                handle.abort();
            }
        }

        if let Some(text) = text {
            save(self.repo.as_ref(), &text).await;
        }
    }

    /// Drops the scheduled save without writing anything.
    pub fn cancel(&self) {
        {
            let mut pending = lock(&self.pending);
            pending.generation += 1;
            pending.text = None;
            pending.saving = None;
        }
        if let Some(handle) = lock(&self.timer).take() {
            debug!("Cancelled pending template save");
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        let pending = lock(&self.pending);
        pending.text.is_some() || pending.saving.is_some()
    }
}

async fn save(repo: &dyn TemplateRepository, text: &str) {
    match repo.set(text).await {
        Ok(_) => info!("Template saved ({} chars)", text.chars().count()),
        Err(e) => error!("Error saving template: {}", e),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
