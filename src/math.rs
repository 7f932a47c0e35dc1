use na::Vector3;

/// Three-component real vector used for positions, velocities, forces and accelerations.
pub type Vector3D = Vector3<f64>;

pub fn is_finite(v: &Vector3D) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Smallest separation over all unordered pairs, `None` for fewer than two points.
pub fn min_pair_distance(points: &[Vector3D]) -> Option<f64> {
    let mut min_distance: Option<f64> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let rij = (points[i] - points[j]).norm();
            min_distance = Some(match min_distance {
                Some(current) if current <= rij => current,
                _ => rij,
            });
        }
    }
    min_distance
}
