use crate::hotkey::WallRequests;
use crate::layout::{get_enclosing_wall_names, LayoutSource};
use crate::resolver::resolve_wall_geoms;
use crate::scene::SceneModel;
use crate::session::{Session, VisSettings};
use crate::settings::OverlaySettings;
use std::collections::HashMap;

/// Visualization-only transparency override for enclosing walls.
///
/// In interactive viewers the renderer can redraw the scene independently of
/// the step loop, so a one-shot alpha write would not survive camera switches
/// and user interaction. While enabled, the overlay keeps a persistent alpha
/// override applied to the live scene graph's geometry colors and re-asserts
/// it after every visualization pass. The authoritative scene description is
/// never touched: saved demos and exports read the scene description, not
/// the live color buffer adjusted here.
pub struct WallOverlay<S: Session, L: LayoutSource> {
    session: S,
    layouts: L,
    alpha: f32,
    enabled: bool,
    geom_ids: Option<Vec<usize>>,
    saved_alpha: HashMap<usize, f32>,
    last_generation: Option<u64>,
    last_vis: Option<VisSettings>,
}

impl<S: Session, L: LayoutSource> WallOverlay<S, L> {
    pub fn new(session: S, layouts: L, settings: &OverlaySettings) -> Self {
        let mut overlay = Self {
            session,
            layouts,
            alpha: settings.alpha.clamp(0.0, 1.0),
            enabled: false,
            geom_ids: None,
            saved_alpha: HashMap::new(),
            last_generation: None,
            last_vis: None,
        };
        overlay.set_enabled(settings.enabled);
        overlay
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Alpha written to wall geometry while enabled.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }

    pub fn toggle(&mut self) {
        self.set_enabled(!self.enabled);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        tracing::debug!(enabled, "wall overlay switched");
        self.apply_or_restore();
    }

    /// Forward `settings` to the engine, then re-assert the overlay.
    ///
    /// Engine visualization passes may rewrite the same color buffer, so the
    /// override has to be applied again after every push.
    pub fn visualize(&mut self, settings: &VisSettings) {
        self.session.visualize(settings);
        self.last_vis = Some(settings.clone());
        self.apply_or_restore();
    }

    /// Call after the engine finished a reset: drop everything tied to the
    /// old scene graph and re-apply to the new one if currently enabled.
    pub fn on_scene_reset(&mut self) {
        self.geom_ids = None;
        self.saved_alpha.clear();
        self.last_generation = None;
        if self.enabled {
            self.apply_or_restore();
        }
    }

    /// Apply and clear any queued hotkey requests.
    ///
    /// Returns `true` if a request was consumed; interactive loops typically
    /// `continue` in that case. A queued force-opaque wins over a
    /// simultaneously queued toggle regardless of arrival order: the force
    /// keys double as camera hotkeys in the viewer and must reliably free
    /// the walls.
    pub fn consume_pending(&mut self, requests: &WallRequests, render: bool) -> bool {
        let force_opaque = requests.take_force_opaque();
        let toggle = requests.take_toggle();
        if !force_opaque && !toggle {
            return false;
        }

        if force_opaque {
            // The toggle flag was already cleared above; force-off wins.
            self.set_enabled(false);
        } else {
            self.toggle();
        }
        self.refresh_and_redraw(render);
        true
    }

    /// Best-effort redraw after changing wall alpha: re-push the last known
    /// visualization settings, re-assert the overlay, then poke the viewer
    /// without stepping the sim.
    pub fn refresh_and_redraw(&mut self, render: bool) {
        if let Some(vis) = self.last_vis.clone() {
            self.session.visualize(&vis);
        }
        self.apply_or_restore();
        self.session.request_redraw(render);
    }

    fn apply_or_restore(&mut self) {
        let generation = match self.session.scene() {
            Some(scene) => scene.generation(),
            None => return,
        };
        // A new generation means the engine hard-reset and replaced the
        // scene graph; cached indices and saved alphas are stale.
        if self.last_generation != Some(generation) {
            self.geom_ids = None;
            self.saved_alpha.clear();
            self.last_generation = Some(generation);
        }

        if self.geom_ids.is_none() {
            let names = match self.session.layout_id() {
                Some(id) => get_enclosing_wall_names(&self.layouts, id),
                None => Default::default(),
            };
            if let Some(scene) = self.session.scene() {
                self.geom_ids = Some(resolve_wall_geoms(scene, &names));
            }
        }

        let Some(geom_ids) = self.geom_ids.as_ref() else {
            return;
        };
        if geom_ids.is_empty() {
            return;
        }
        let Some(scene) = self.session.scene_mut() else {
            return;
        };

        if self.enabled {
            for &geom in geom_ids {
                // Save originals once so repeated applies don't overwrite
                // the pre-overlay value with the overlay alpha.
                if !self.saved_alpha.contains_key(&geom) {
                    self.saved_alpha.insert(geom, scene.geom_alpha(geom));
                }
                scene.set_geom_alpha(geom, self.alpha);
            }
        } else {
            // Disabled means fully opaque, not "previous value": walls must
            // be solid again even if the layout shipped them translucent.
            for &geom in geom_ids {
                scene.set_geom_alpha(geom, 1.0);
            }
            self.saved_alpha.clear();
        }
    }
}
