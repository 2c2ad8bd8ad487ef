use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Identifier of a scene layout as handed out by the host session.
pub type LayoutId = i64;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LayoutDesc {
    #[serde(default)]
    pub room: RoomDesc,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RoomDesc {
    #[serde(default)]
    pub walls: Vec<WallDesc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct WallDesc {
    #[serde(default)]
    pub name: String,
    /// Marks a wall that surrounds the playable room area. Only these walls
    /// are subject to the transparency override.
    #[serde(default)]
    pub enclosing_wall: bool,
}

/// Source of layout descriptions, keyed by layout id.
///
/// Layout data is owned elsewhere; implementations load it on demand and may
/// be called repeatedly for the same id.
pub trait LayoutSource {
    fn load_layout(&self, id: LayoutId) -> anyhow::Result<LayoutDesc>;
}

/// Layout descriptions stored as `layout_<id>.json` files under one directory.
pub struct FsLayoutSource {
    dir: PathBuf,
}

impl FsLayoutSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn layout_path(&self, id: LayoutId) -> PathBuf {
        self.dir.join(format!("layout_{id}.json"))
    }
}

impl LayoutSource for FsLayoutSource {
    fn load_layout(&self, id: LayoutId) -> anyhow::Result<LayoutDesc> {
        load_layout_file(self.layout_path(id))
    }
}

pub fn load_layout_file(path: impl AsRef<Path>) -> anyhow::Result<LayoutDesc> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.trim().is_empty() {
        return Ok(LayoutDesc::default());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Names of the walls flagged as enclosing in `layout`.
///
/// Wall records without a name are skipped; a layout without a `room` or
/// `walls` section yields the empty set.
pub fn enclosing_wall_names(layout: &LayoutDesc) -> HashSet<String> {
    layout
        .room
        .walls
        .iter()
        .filter(|wall| wall.enclosing_wall && !wall.name.is_empty())
        .map(|wall| wall.name.clone())
        .collect()
}

/// Load layout `id` from `source` and extract its enclosing wall names.
///
/// Load failures degrade to the empty set: the overlay is a best-effort
/// visual aid and must never disrupt the host loop over missing layout data.
pub fn get_enclosing_wall_names(source: &impl LayoutSource, id: LayoutId) -> HashSet<String> {
    match source.load_layout(id) {
        Ok(layout) => enclosing_wall_names(&layout),
        Err(err) => {
            tracing::debug!("failed to load layout {id}: {err}");
            HashSet::new()
        }
    }
}
