use crate::error::{EngineError, EngineResult};
use crate::session::Session;
use chrono::{Local, NaiveDate};
use devterm_gateway::Classify;
use devterm_storage::ProfileStore;
use devterm_store::{export_file_name, render_export, DictionaryStore, GroupedProjection, GroupedView};
use devterm_types::{Identity, TermEntry};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

/// Result of one generate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The classification completed and was merged into the store.
    Merged {
        /// Entries actually added (batch minus existing-term duplicates).
        added: Vec<TermEntry>,
        /// Raw tokens the service judged out-of-domain; surfaced as a
        /// dismissible warning, they never block the accepted remainder.
        rejected: Vec<String>,
    },
    /// The response arrived after a newer request, a sign-out, or a sign-in
    /// moved the session on; it was dropped without touching the store.
    Stale,
}

/// Orchestrates the dictionary: session transitions, the generate/merge flow,
/// mutations with their persistence side effects, and read projections.
///
/// Every mutation that changes the collection re-saves the signed-in
/// identity's full dataset. `load` at the session boundary is the one
/// exception: its contents come *from* persistence and are never echoed back.
///
/// The generation counter fences the single suspension point (the
/// classification call): completions carrying a stale generation are
/// discarded rather than clobbering newer state.
pub struct DictionaryEngine {
    store: RwLock<DictionaryStore>,
    projection: Mutex<GroupedProjection>,
    storage: Arc<ProfileStore>,
    classifier: Arc<dyn Classify>,
    session: RwLock<Session>,
    generation: AtomicU64,
}

impl DictionaryEngine {
    pub fn new(storage: Arc<ProfileStore>, classifier: Arc<dyn Classify>) -> Self {
        Self {
            store: RwLock::new(DictionaryStore::new()),
            projection: Mutex::new(GroupedProjection::new()),
            storage,
            classifier,
            session: RwLock::new(Session::new()),
            generation: AtomicU64::new(0),
        }
    }

    // ── Session transitions ──────────────────────────────────────

    /// Resumes a persisted session, if one exists: loads the saved current
    /// identity and its dataset. Returns the resumed identity.
    pub async fn resume(&self) -> EngineResult<Option<Identity>> {
        match self.storage.load_current_identity()? {
            None => Ok(None),
            Some(identity) => {
                self.establish(identity.clone()).await?;
                Ok(Some(identity))
            }
        }
    }

    /// Signs an authenticated identity in: persists it as current and loads
    /// its dataset into the store.
    pub async fn sign_in(&self, identity: Identity) -> EngineResult<()> {
        self.storage.save_current_identity(&identity)?;
        self.establish(identity).await
    }

    async fn establish(&self, identity: Identity) -> EngineResult<()> {
        let entries = self.storage.load_entries(&identity.email)?;
        info!(email = %identity.email, entries = entries.len(), "session established");

        self.generation.fetch_add(1, Ordering::SeqCst);
        self.store.write().await.load(entries);
        self.session.write().await.sign_in(identity);
        Ok(())
    }

    /// Signs out: clears the persisted current identity and empties the
    /// in-memory store. The identity's saved dataset is left intact.
    pub async fn sign_out(&self) -> EngineResult<()> {
        self.storage.clear_current_identity()?;
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.store.write().await.load(Vec::new());
        self.session.write().await.sign_out();
        Ok(())
    }

    pub async fn current_identity(&self) -> Option<Identity> {
        self.session.read().await.current().cloned()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.session.read().await.is_signed_in()
    }

    // ── Generate / merge ─────────────────────────────────────────

    /// Classifies a raw text blob and merges the accepted batch.
    ///
    /// Each call supersedes any still-in-flight predecessor: when the
    /// classification completes under a generation that has since moved, the
    /// result is dropped ([`GenerateOutcome::Stale`]). Gateway failures leave
    /// store and persisted state untouched.
    pub async fn generate(&self, raw_text: &str) -> EngineResult<GenerateOutcome> {
        let identity = self
            .current_identity()
            .await
            .ok_or(EngineError::NotSignedIn)?;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.classifier.classify(raw_text).await?;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("dropping stale classification result");
            return Ok(GenerateOutcome::Stale);
        }

        let mut store = self.store.write().await;
        let added = store.merge_batch(outcome.accepted);
        if !added.is_empty() {
            self.storage.save_entries(&identity.email, store.entries())?;
        }

        Ok(GenerateOutcome::Merged {
            added,
            rejected: outcome.rejected,
        })
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Removes entries whose term exactly equals `term` (case-sensitive).
    /// Idempotent; saves only when something was removed. Returns whether a
    /// removal happened. Confirmation of this destructive action is the
    /// caller's concern.
    pub async fn delete_term(&self, term: &str) -> EngineResult<bool> {
        let identity = self
            .current_identity()
            .await
            .ok_or(EngineError::NotSignedIn)?;

        let mut store = self.store.write().await;
        let removed = store.delete_one(term);
        if removed {
            self.storage.save_entries(&identity.email, store.entries())?;
        }
        Ok(removed)
    }

    /// Empties the dictionary and persists the empty dataset. Confirmation
    /// is the caller's concern.
    pub async fn clear_all(&self) -> EngineResult<()> {
        let identity = self
            .current_identity()
            .await
            .ok_or(EngineError::NotSignedIn)?;

        let mut store = self.store.write().await;
        store.clear_all();
        self.storage.save_entries(&identity.email, store.entries())?;
        Ok(())
    }

    // ── Read projections ─────────────────────────────────────────

    /// The category → entries view, memoized on the store version.
    pub async fn grouped(&self) -> GroupedView {
        let store = self.store.read().await;
        self.projection.lock().await.view(&store).clone()
    }

    /// The raw entry list, newest first.
    pub async fn entries(&self) -> Vec<TermEntry> {
        self.store.read().await.entries().to_vec()
    }

    pub async fn entry_count(&self) -> usize {
        self.store.read().await.len()
    }

    // ── Export ───────────────────────────────────────────────────

    /// Renders the export document dated today.
    pub async fn export(&self) -> EngineResult<String> {
        self.export_as_of(Local::now().date_naive()).await
    }

    /// Renders the export document for an explicit date.
    pub async fn export_as_of(&self, date: NaiveDate) -> EngineResult<String> {
        let identity = self
            .current_identity()
            .await
            .ok_or(EngineError::NotSignedIn)?;

        let store = self.store.read().await;
        if store.is_empty() {
            return Err(EngineError::EmptyDictionary);
        }

        let mut projection = self.projection.lock().await;
        Ok(render_export(
            projection.view(&store),
            &identity.username,
            date,
        ))
    }

    /// Suggested file name for a download of today's export.
    pub async fn export_name(&self) -> EngineResult<String> {
        let identity = self
            .current_identity()
            .await
            .ok_or(EngineError::NotSignedIn)?;
        Ok(export_file_name(
            &identity.username,
            Local::now().date_naive(),
        ))
    }
}
