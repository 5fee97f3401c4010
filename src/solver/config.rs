/// Tunable parameters of the placement search.
///
/// The step sizes and tolerances are explicit configuration rather than
/// incidental values so that solves are deterministic and reproducible.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Slide increment along a wall during wall-hugging search (input units).
    pub wall_step: f64,
    /// Grid resolution of the free-placement fallback.
    pub grid_step: f64,
    /// Overlap-area tolerance: intersections up to this area are treated as
    /// flush contact, not collision.
    pub area_epsilon: f64,
    /// Boundary-inclusive containment tolerance.
    pub containment_epsilon: f64,
}

impl SolverConfig {
    pub const DEFAULT_WALL_STEP: f64 = 25.0;
    pub const DEFAULT_GRID_STEP: f64 = 100.0;
    pub const DEFAULT_AREA_EPSILON: f64 = 1e-6;
    pub const DEFAULT_CONTAINMENT_EPSILON: f64 = 1e-6;
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            wall_step: Self::DEFAULT_WALL_STEP,
            grid_step: Self::DEFAULT_GRID_STEP,
            area_epsilon: Self::DEFAULT_AREA_EPSILON,
            containment_epsilon: Self::DEFAULT_CONTAINMENT_EPSILON,
        }
    }
}
