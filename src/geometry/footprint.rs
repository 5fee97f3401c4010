use crate::math::Point2;

/// The rotated, translated rectangle occupied by a placed item.
///
/// Corners are counter-clockwise. The local frame puts `length` along x and
/// `width` along y, so at rotation 0 the long side is horizontal and the
/// door-bearing edge of an appliance is the +y edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    corners: [Point2; 4],
    center: Point2,
    rotation: f64,
}

impl Footprint {
    /// Builds the footprint of an item centered at `center`, rotated by
    /// `rotation` degrees about its own center.
    #[must_use]
    pub fn new(center: Point2, length: f64, width: f64, rotation: f64) -> Self {
        let hl = length / 2.0;
        let hw = width / 2.0;
        let local = [
            Point2::new(-hl, -hw),
            Point2::new(hl, -hw),
            Point2::new(hl, hw),
            Point2::new(-hl, hw),
        ];
        Self {
            corners: place_local_quad(&local, &center, rotation),
            center,
            rotation,
        }
    }

    #[must_use]
    pub fn corners(&self) -> &[Point2] {
        &self.corners
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Rotation in degrees, normalized to `[0, 360)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation.rem_euclid(360.0)
    }
}

/// Rotates a local-frame quad about the origin by `rotation` degrees, then
/// translates it to `center`.
pub(crate) fn place_local_quad(
    local: &[Point2; 4],
    center: &Point2,
    rotation: f64,
) -> [Point2; 4] {
    let rad = rotation.to_radians();
    let (sin, cos) = rad.sin_cos();
    local.map(|p| {
        Point2::new(
            center.x + p.x * cos - p.y * sin,
            center.y + p.x * sin + p.y * cos,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area_2d;

    #[test]
    fn unrotated_footprint_extents() {
        let fp = Footprint::new(Point2::new(10.0, 20.0), 4.0, 2.0, 0.0);
        let xs: Vec<f64> = fp.corners().iter().map(|p| p.x).collect();
        let ys: Vec<f64> = fp.corners().iter().map(|p| p.y).collect();
        assert!((xs.iter().cloned().fold(f64::INFINITY, f64::min) - 8.0).abs() < 1e-12);
        assert!((xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max) - 12.0).abs() < 1e-12);
        assert!((ys.iter().cloned().fold(f64::INFINITY, f64::min) - 19.0).abs() < 1e-12);
        assert!((ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max) - 21.0).abs() < 1e-12);
    }

    #[test]
    fn ninety_degrees_swaps_extents() {
        let fp = Footprint::new(Point2::new(0.0, 0.0), 4.0, 2.0, 90.0);
        let xs: Vec<f64> = fp.corners().iter().map(|p| p.x).collect();
        let ys: Vec<f64> = fp.corners().iter().map(|p| p.y).collect();
        assert!((xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max) - 1.0).abs() < 1e-9);
        assert!((ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn corners_stay_counter_clockwise() {
        for rot in [0.0, 90.0, 180.0, 270.0, 37.5] {
            let fp = Footprint::new(Point2::new(1.0, 1.0), 3.0, 1.0, rot);
            assert!(
                signed_area_2d(fp.corners()) > 0.0,
                "rotation {rot} flipped orientation"
            );
        }
    }

    #[test]
    fn rotation_is_normalized() {
        let fp = Footprint::new(Point2::new(0.0, 0.0), 1.0, 1.0, 450.0);
        assert!((fp.rotation() - 90.0).abs() < 1e-12);
        let fp = Footprint::new(Point2::new(0.0, 0.0), 1.0, 1.0, -90.0);
        assert!((fp.rotation() - 270.0).abs() < 1e-12);
    }
}
