use crate::layout::LayoutId;
use crate::scene::SceneModel;
use std::collections::HashMap;

/// Visualization option flags, forwarded to the engine unchanged.
pub type VisSettings = HashMap<String, bool>;

/// The slice of a host session the wall overlay needs.
///
/// Hosts adapt their engine session to this trait rather than the overlay
/// reaching into engine internals. Before the first reset a session may have
/// no live scene yet; `scene` returns `None` then and every overlay
/// operation degrades to a silent no-op.
pub trait Session {
    type Scene: SceneModel;

    fn scene(&self) -> Option<&Self::Scene>;

    fn scene_mut(&mut self) -> Option<&mut Self::Scene>;

    /// Layout the current scene was built from, if known.
    fn layout_id(&self) -> Option<LayoutId>;

    /// Forward visualization settings to the engine.
    fn visualize(&mut self, settings: &VisSettings);

    /// Redraw without advancing simulation time. Interactive viewers redraw
    /// independently of the step loop and would otherwise show a stale frame
    /// until the next camera event. `render` tells viewer-less hosts whether
    /// a full render fallback is wanted.
    fn request_redraw(&mut self, render: bool);
}
