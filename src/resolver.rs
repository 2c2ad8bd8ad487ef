use crate::scene::SceneModel;
use std::collections::HashSet;

/// Check a body or geometry name against a wall name.
///
/// Scene builders decorate wall sub-parts with underscore-separated
/// prefixes and suffixes, so `wall_name` matches exactly, as `wall_name_*`,
/// or as `*_wall_name`.
pub fn name_matches(candidate: &str, wall_name: &str) -> bool {
    if candidate == wall_name {
        return true;
    }
    if let Some(rest) = candidate.strip_prefix(wall_name) {
        if rest.starts_with('_') {
            return true;
        }
    }
    match candidate.strip_suffix(wall_name) {
        Some(rest) => rest.ends_with('_'),
        None => false,
    }
}

fn matches_any(candidate: &str, wall_names: &HashSet<String>) -> bool {
    wall_names.iter().any(|name| name_matches(candidate, name))
}

/// Resolve every geometry index belonging to the named walls.
///
/// Two passes over the scene graph:
///
/// 1. Bodies whose name matches a wall name, widened to all their
///    descendants so child bodies carrying sub-meshes are included.
/// 2. Geometry owned by one of those bodies, or geometry whose own name
///    matches a wall name (covers geoms not parented under a matched body
///    but sharing the naming convention).
///
/// Wall names that match nothing are ignored; layouts vary in which walls
/// are physically represented as separate bodies. Result indices are unique;
/// ordering is not part of the contract.
pub fn resolve_wall_geoms<S: SceneModel + ?Sized>(
    model: &S,
    wall_names: &HashSet<String>,
) -> Vec<usize> {
    if wall_names.is_empty() {
        return Vec::new();
    }

    let mut bodies: HashSet<usize> = HashSet::new();
    for body in 0..model.nbody() {
        if let Some(name) = model.body_name(body) {
            if matches_any(name, wall_names) {
                bodies.insert(body);
            }
        }
    }

    // Fixed-point pass over the parent pointers: repeat until a full scan
    // adds nothing, which handles arbitrary nesting depth regardless of
    // index order.
    let mut added = true;
    while added {
        added = false;
        for body in 0..model.nbody() {
            if bodies.contains(&body) {
                continue;
            }
            if let Some(parent) = model.body_parent(body) {
                if bodies.contains(&parent) {
                    bodies.insert(body);
                    added = true;
                }
            }
        }
    }

    let mut geoms = Vec::new();
    for geom in 0..model.ngeom() {
        if bodies.contains(&model.geom_body(geom)) {
            geoms.push(geom);
            continue;
        }
        if let Some(name) = model.geom_name(geom) {
            if matches_any(name, wall_names) {
                geoms.push(geom);
            }
        }
    }
    tracing::debug!(
        "resolved {} wall geoms from {} wall names",
        geoms.len(),
        wall_names.len()
    );
    geoms
}
