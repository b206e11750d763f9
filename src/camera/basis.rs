use glam::Vec3;

/// World up axis shared by every camera.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Orthonormal camera basis.
///
/// `u` points right, `v` is camera-up, `w` points backwards (away from the
/// view direction) and `h` is the forward direction flattened onto the
/// ground plane, used for ground-relative movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Right.
    pub u: Vec3,
    /// Camera-up.
    pub v: Vec3,
    /// Ground-plane forward.
    pub h: Vec3,
    /// Backwards (`-direction`).
    pub w: Vec3,
}

impl Basis {
    /// Build the basis for a unit `direction` with ground heading `h`.
    ///
    /// When `direction` is parallel to [`WORLD_UP`] the right vector is
    /// taken from the heading instead, so the basis never contains NaNs.
    #[must_use]
    pub fn new(direction: Vec3, h: Vec3) -> Self {
        let w = -direction;
        let u = if is_vertical(direction) {
            h.cross(WORLD_UP).normalize_or(Vec3::Z)
        } else {
            WORLD_UP.cross(w).normalize()
        };
        let v = w.cross(u).normalize_or(WORLD_UP);
        Self { u, v, h, w }
    }

    /// Ground heading of a direction vector, or `+X` when it is vertical.
    #[must_use]
    pub fn heading_of(direction: Vec3) -> Vec3 {
        Vec3::new(direction.x, 0.0, direction.z).normalize_or(Vec3::X)
    }
}

/// Whether `direction` is too close to [`WORLD_UP`] for a stable cross
/// product.
#[must_use]
pub fn is_vertical(direction: Vec3) -> bool {
    direction.cross(WORLD_UP).length_squared() < 1e-10
}
