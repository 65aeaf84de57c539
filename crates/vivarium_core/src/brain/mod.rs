pub mod forward;
pub mod mutation;

pub use vivarium_data::{Brain, Layer};
use rand::Rng;

/// Width of the second hidden layer.
pub const BRAIN_HIDDEN: usize = 4;
/// Number of decision outputs: turn gate, turn magnitude, turn sign, reverse.
pub const BRAIN_OUTPUTS: usize = 4;
/// Each eye feeds two inputs: sighting count and relative size.
pub const INPUTS_PER_EYE: usize = 2;

/// Trait defining the core logic for creature brains.
pub trait BrainLogic {
    /// Fresh network for `inputs` inputs with normally distributed weights.
    fn new_random_with_rng<R: Rng>(inputs: usize, rng: &mut R) -> Self;

    /// Evaluates the network. Missing inputs read as 0, extra inputs are ignored.
    #[must_use]
    fn forward(&self, inputs: &[f64]) -> [f64; BRAIN_OUTPUTS];

    /// Child network for `inputs` inputs: overlapping weights are inherited and
    /// mutated, new slots start random.
    #[must_use]
    fn mutated_with_rng<R: Rng>(&self, inputs: usize, rng: &mut R) -> Self;
}

impl BrainLogic for Brain {
    fn new_random_with_rng<R: Rng>(inputs: usize, rng: &mut R) -> Self {
        let layout = [inputs, BRAIN_HIDDEN, BRAIN_OUTPUTS];
        let mut layers = Vec::with_capacity(layout.len());
        let mut fan_in = inputs;
        for &width in &layout {
            let neurons = (0..width)
                .map(|_| (0..=fan_in).map(|_| crate::rng::normal(rng)).collect())
                .collect();
            layers.push(Layer { neurons });
            fan_in = width;
        }
        Brain { inputs, layers }
    }

    fn forward(&self, inputs: &[f64]) -> [f64; BRAIN_OUTPUTS] {
        forward::forward(self, inputs)
    }

    fn mutated_with_rng<R: Rng>(&self, inputs: usize, rng: &mut R) -> Self {
        mutation::mutated_with_rng(self, inputs, rng)
    }
}
