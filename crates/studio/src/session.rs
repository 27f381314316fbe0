//! Session state owned by the studio.

use serde::Serialize;

use signalforge_core::archive::DesignArchive;
use signalforge_core::session::ViewState;
use signalforge_core::types::DesignId;

/// Mutable session state behind the studio's lock.
///
/// `active` is a weak reference into the archive by id, never an owner.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) archive: DesignArchive,
    pub(crate) view: ViewState,
    pub(crate) active: Option<DesignId>,
    pub(crate) generating: bool,
}

/// Point-in-time copy of the navigation state handed to the presentation
/// layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub view: ViewState,
    pub generating: bool,
    pub active_design_id: Option<DesignId>,
}
