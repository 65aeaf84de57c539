use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vivarium_data::Vec2;

/// Create a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// With probability `chance`, scales `val` by a random factor in
/// `1 ± factor / 2`. Otherwise returns `val` unchanged.
pub fn maybe_mutate<R: Rng>(val: f64, factor: f64, chance: f64, rng: &mut R) -> f64 {
    if rng.gen::<f64>() > chance {
        return val;
    }
    val * (1.0 + (rng.gen::<f64>() - 0.5) * factor)
}

/// Standard normal sample.
pub fn normal<R: Rng>(rng: &mut R) -> f64 {
    // Box-Muller on the caller's stream keeps seeded runs reproducible.
    let u1: f64 = rng.gen::<f64>().max(f64::EPSILON);
    let u2: f64 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Uniformly drawn unit heading.
pub fn random_dir<R: Rng>(rng: &mut R) -> Vec2 {
    loop {
        let d = Vec2::new(rng.gen::<f64>() * 2.0 - 1.0, rng.gen::<f64>() * 2.0 - 1.0);
        if d.len() > f64::EPSILON {
            return d.normalized();
        }
    }
}
