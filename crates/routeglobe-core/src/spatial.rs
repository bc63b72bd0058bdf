//! Spherical math for marker placement and route arcs.

/// A point in globe space.
pub type Vec3 = [f64; 3];

/// Project geographic coordinates onto a sphere of the given radius.
///
/// Uses the standard spherical mapping with colatitude `phi = 90 - lat` and
/// azimuth `theta = lon + 180`, so the globe texture seam sits on the
/// antimeridian. Pure and deterministic.
pub fn project(lat_deg: f64, lon_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();

    [
        phi.sin() * theta.cos() * radius,
        phi.cos() * radius,
        phi.sin() * theta.sin() * radius,
    ]
}

/// Spherical linear interpolation between two points at comparable radii.
///
/// Interpolates direction along the great circle and radius linearly. Falls
/// back to normalized linear interpolation when the angle between the inputs
/// is too small for the slerp weights to be stable.
pub fn slerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    let ra = norm(a);
    let rb = norm(b);
    if ra < f64::EPSILON || rb < f64::EPSILON {
        return lerp(a, b, t);
    }

    let ua = scale(a, 1.0 / ra);
    let ub = scale(b, 1.0 / rb);
    let radius = ra + (rb - ra) * t;

    let omega = dot(ua, ub).clamp(-1.0, 1.0).acos();
    let sin_omega = omega.sin();
    if sin_omega.abs() < 1e-6 {
        let mixed = lerp(ua, ub, t);
        let len = norm(mixed).max(1e-9);
        return scale(mixed, radius / len);
    }

    let wa = ((1.0 - t) * omega).sin() / sin_omega;
    let wb = (t * omega).sin() / sin_omega;
    scale(
        [
            ua[0] * wa + ub[0] * wb,
            ua[1] * wa + ub[1] * wb,
            ua[2] * wa + ub[2] * wb,
        ],
        radius,
    )
}

/// Sample `samples` points along the great-circle arc from `a` to `b`,
/// endpoints included. A straight chord would cut through the globe, so the
/// route path is drawn along the surface instead.
pub fn great_circle_arc(a: Vec3, b: Vec3, samples: usize) -> Vec<Vec3> {
    let samples = samples.max(2);
    (0..samples)
        .map(|i| slerp(a, b, i as f64 / (samples - 1) as f64))
        .collect()
}

pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn norm(a: Vec3) -> f64 {
    dot(a, a).sqrt()
}

fn scale(a: Vec3, s: f64) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

fn lerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
