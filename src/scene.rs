/// Live scene graph surface needed by the wall overlay.
///
/// The engine owns the real scene graph; hosts adapt it to this trait. Body
/// and geometry indices are stable while one graph is loaded and meaningless
/// across hard resets, so `generation` must return a new value every time the
/// engine replaces the graph.
pub trait SceneModel {
    /// Version token bumped by the host on every hard reset. Compared by
    /// value to detect reloads and drop cached indices.
    fn generation(&self) -> u64;

    /// Number of bodies in the scene tree.
    fn nbody(&self) -> usize;

    fn body_name(&self, body: usize) -> Option<&str>;

    /// Parent of `body` in the scene tree, `None` for the root.
    fn body_parent(&self, body: usize) -> Option<usize>;

    /// Number of renderable geometry elements.
    fn ngeom(&self) -> usize;

    /// Index of the body owning `geom`.
    fn geom_body(&self, geom: usize) -> usize;

    fn geom_name(&self, geom: usize) -> Option<&str>;

    /// Alpha channel of the geometry's RGBA entry in the live render state.
    fn geom_alpha(&self, geom: usize) -> f32;

    fn set_geom_alpha(&mut self, geom: usize, alpha: f32);
}
