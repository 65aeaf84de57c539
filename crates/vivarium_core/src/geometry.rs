use vivarium_data::Vec2;

/// True iff two circles overlap. Touching circles (`dist == r1 + r2`) do not.
#[inline]
pub fn circle_circle(p1: Vec2, r1: f64, p2: Vec2, r2: f64) -> bool {
    (p1 - p2).len() < r1 + r2
}

/// True iff `point` lies strictly inside the circle.
#[inline]
pub fn circle_point(center: Vec2, r: f64, point: Vec2) -> bool {
    (center - point).len() < r
}

/// Unsigned angle between two vectors in `[0, PI]`.
#[inline]
pub fn angle_between(a: Vec2, b: Vec2) -> f64 {
    a.cross(&b).atan2(a.dot(&b)).abs()
}
