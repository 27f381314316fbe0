//! The generation orchestrator.

use std::sync::Arc;

use tokio::sync::RwLock;

use signalforge_core::design::GenerationResult;
use signalforge_core::error::CoreError;
use signalforge_core::generator::ConceptGenerator;
use signalforge_core::params::GenerationParameters;
use signalforge_core::session::ViewState;
use signalforge_core::types::DesignId;

use crate::error::StudioError;
use crate::session::{SessionSnapshot, SessionState};

/// Coordinates generation attempts and owns all session state.
///
/// The studio is the sole writer of the archive, and a generation attempt
/// has an all-or-nothing visible outcome: either one fully populated
/// result is archived and made active, or nothing changes. The generating
/// flag is cleared on every exit path.
pub struct Studio {
    generator: Arc<dyn ConceptGenerator>,
    state: RwLock<SessionState>,
}

impl Studio {
    pub fn new(generator: Arc<dyn ConceptGenerator>) -> Self {
        Self {
            generator,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Run one generation attempt end to end.
    ///
    /// The image call and the specification call run concurrently and both
    /// are awaited before anything is committed. An image failure aborts
    /// the attempt with no state change. The specification call cannot
    /// fail; a degraded sheet is already the fallback.
    pub async fn generate(
        &self,
        params: GenerationParameters,
    ) -> Result<GenerationResult, StudioError> {
        {
            let mut state = self.state.write().await;
            if state.generating {
                return Err(StudioError::Core(CoreError::Conflict(
                    "A generation attempt is already in flight".to_string(),
                )));
            }
            state.generating = true;
        }

        tracing::info!(
            category = %params.device_category,
            material = %params.material,
            style = %params.style,
            "Starting generation attempt",
        );

        let (image, sheet) = tokio::join!(
            self.generator.concept_image(&params),
            self.generator.specification_sheet(&params),
        );

        let image_ref = match image {
            Ok(image_ref) => image_ref,
            Err(e) => {
                self.state.write().await.generating = false;
                tracing::error!(error = %e, "Generation attempt aborted");
                return Err(StudioError::Generation(e));
            }
        };

        let design = GenerationResult::assemble(image_ref, params, sheet);

        {
            let mut state = self.state.write().await;
            state.archive.prepend(design.clone());
            state.active = Some(design.id);
            state.view = ViewState::Details;
            state.generating = false;
        }

        tracing::info!(design_id = %design.id, "Design archived");
        Ok(design)
    }

    /// Point-in-time copy of the navigation state.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            view: state.view,
            generating: state.generating,
            active_design_id: state.active,
        }
    }

    /// All archived designs, newest first.
    pub async fn designs(&self) -> Vec<GenerationResult> {
        self.state.read().await.archive.designs().to_vec()
    }

    /// The `n` newest designs.
    pub async fn recent(&self, n: usize) -> Vec<GenerationResult> {
        self.state.read().await.archive.recent(n).to_vec()
    }

    pub async fn design_count(&self) -> usize {
        self.state.read().await.archive.len()
    }

    /// Look up one archived design by id.
    pub async fn design(&self, id: DesignId) -> Result<GenerationResult, StudioError> {
        self.state
            .read()
            .await
            .archive
            .get(id)
            .cloned()
            .ok_or(StudioError::Core(CoreError::NotFound {
                entity: "Design",
                id,
            }))
    }

    /// The currently active design, if any.
    pub async fn active_design(&self) -> Option<GenerationResult> {
        let state = self.state.read().await;
        state.active.and_then(|id| state.archive.get(id).cloned())
    }

    /// Make an archived design active and switch to the details view.
    pub async fn select(&self, id: DesignId) -> Result<GenerationResult, StudioError> {
        let mut state = self.state.write().await;
        let design = state
            .archive
            .get(id)
            .cloned()
            .ok_or(StudioError::Core(CoreError::NotFound {
                entity: "Design",
                id,
            }))?;
        state.active = Some(id);
        state.view = ViewState::Details;
        Ok(design)
    }

    /// Switch the active view without touching anything else.
    pub async fn set_view(&self, view: ViewState) {
        self.state.write().await.view = view;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
