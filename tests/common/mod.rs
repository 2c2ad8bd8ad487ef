#![allow(dead_code)]

use std::collections::HashMap;
use wall_overlay::layout::{LayoutDesc, LayoutId, LayoutSource, RoomDesc, WallDesc};
use wall_overlay::scene::SceneModel;
use wall_overlay::session::{Session, VisSettings};

pub struct FakeBody {
    pub name: String,
    pub parent: Option<usize>,
}

pub struct FakeGeom {
    pub name: Option<String>,
    pub body: usize,
    pub alpha: f32,
}

#[derive(Default)]
pub struct FakeScene {
    pub generation: u64,
    pub bodies: Vec<FakeBody>,
    pub geoms: Vec<FakeGeom>,
}

impl FakeScene {
    pub fn add_body(&mut self, name: &str, parent: Option<usize>) -> usize {
        self.bodies.push(FakeBody {
            name: name.to_string(),
            parent,
        });
        self.bodies.len() - 1
    }

    pub fn add_geom(&mut self, name: Option<&str>, body: usize, alpha: f32) -> usize {
        self.geoms.push(FakeGeom {
            name: name.map(str::to_string),
            body,
            alpha,
        });
        self.geoms.len() - 1
    }
}

impl SceneModel for FakeScene {
    fn generation(&self) -> u64 {
        self.generation
    }

    fn nbody(&self) -> usize {
        self.bodies.len()
    }

    fn body_name(&self, body: usize) -> Option<&str> {
        Some(self.bodies[body].name.as_str())
    }

    fn body_parent(&self, body: usize) -> Option<usize> {
        self.bodies[body].parent
    }

    fn ngeom(&self) -> usize {
        self.geoms.len()
    }

    fn geom_body(&self, geom: usize) -> usize {
        self.geoms[geom].body
    }

    fn geom_name(&self, geom: usize) -> Option<&str> {
        self.geoms[geom].name.as_deref()
    }

    fn geom_alpha(&self, geom: usize) -> f32 {
        self.geoms[geom].alpha
    }

    fn set_geom_alpha(&mut self, geom: usize, alpha: f32) {
        self.geoms[geom].alpha = alpha;
    }
}

#[derive(Default)]
pub struct FakeSession {
    pub scene: Option<FakeScene>,
    pub layout_id: Option<LayoutId>,
    pub visualize_calls: Vec<VisSettings>,
    pub redraw_calls: Vec<bool>,
}

impl Session for FakeSession {
    type Scene = FakeScene;

    fn scene(&self) -> Option<&FakeScene> {
        self.scene.as_ref()
    }

    fn scene_mut(&mut self) -> Option<&mut FakeScene> {
        self.scene.as_mut()
    }

    fn layout_id(&self) -> Option<LayoutId> {
        self.layout_id
    }

    fn visualize(&mut self, settings: &VisSettings) {
        self.visualize_calls.push(settings.clone());
    }

    fn request_redraw(&mut self, render: bool) {
        self.redraw_calls.push(render);
    }
}

/// Layout source backed by an in-memory map. Unknown ids load as the empty
/// default layout.
#[derive(Default)]
pub struct MapLayouts {
    pub layouts: HashMap<LayoutId, LayoutDesc>,
}

impl MapLayouts {
    pub fn with_walls(id: LayoutId, walls: &[(&str, bool)]) -> Self {
        let mut layouts = HashMap::new();
        layouts.insert(id, layout_with_walls(walls));
        Self { layouts }
    }
}

impl LayoutSource for MapLayouts {
    fn load_layout(&self, id: LayoutId) -> anyhow::Result<LayoutDesc> {
        Ok(self.layouts.get(&id).cloned().unwrap_or_default())
    }
}

pub fn layout_with_walls(walls: &[(&str, bool)]) -> LayoutDesc {
    LayoutDesc {
        room: RoomDesc {
            walls: walls
                .iter()
                .map(|(name, enclosing)| WallDesc {
                    name: name.to_string(),
                    enclosing_wall: *enclosing,
                })
                .collect(),
        },
    }
}

/// A scene with one enclosing wall (body 1, child panel body 2) and an
/// unrelated counter body. Geoms 0 and 1 belong to the wall, geom 2 does not.
pub fn wall_scene(generation: u64, wall_alpha: f32) -> FakeScene {
    let mut scene = FakeScene {
        generation,
        ..Default::default()
    };
    let root = scene.add_body("root", None);
    let wall = scene.add_body("wall_left", Some(root));
    let panel = scene.add_body("panel_a", Some(wall));
    let counter = scene.add_body("counter", Some(root));
    scene.add_geom(None, wall, wall_alpha);
    scene.add_geom(None, panel, wall_alpha);
    scene.add_geom(Some("counter_top"), counter, 1.0);
    scene
}
