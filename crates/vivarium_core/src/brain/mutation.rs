use super::*;
use crate::rng::maybe_mutate;

/// Small nudges are common, large jumps are rare.
const SMALL_FACTOR: f64 = 0.1;
const SMALL_CHANCE: f64 = 0.05;
const LARGE_FACTOR: f64 = 0.5;
const LARGE_CHANCE: f64 = 0.01;

pub fn mutate_weight<R: Rng>(weight: f64, rng: &mut R) -> f64 {
    let w = maybe_mutate(weight, SMALL_FACTOR, SMALL_CHANCE, rng);
    maybe_mutate(w, LARGE_FACTOR, LARGE_CHANCE, rng)
}

pub fn mutated_with_rng<R: Rng>(parent: &Brain, inputs: usize, rng: &mut R) -> Brain {
    let mut child = Brain::new_random_with_rng(inputs, rng);

    for (child_layer, parent_layer) in child.layers.iter_mut().zip(&parent.layers) {
        let shared_inputs = child_layer.input_width().min(parent_layer.input_width());
        for (cw, pw) in child_layer.neurons.iter_mut().zip(&parent_layer.neurons) {
            for k in 0..shared_inputs {
                cw[k] = mutate_weight(pw[k], rng);
            }
            // Bias stays the bias even when the input width changes.
            if let (Some(cb), Some(pb)) = (cw.last_mut(), pw.last()) {
                *cb = mutate_weight(*pb, rng);
            }
        }
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_same_width_stays_close_to_parent() {
        let mut rng = create_rng(11);
        let parent = Brain::new_random_with_rng(2, &mut rng);
        let child = parent.mutated_with_rng(2, &mut rng);
        assert_eq!(child.weight_count(), parent.weight_count());

        let changed = parent
            .layers
            .iter()
            .flat_map(|l| l.neurons.iter().flatten())
            .zip(child.layers.iter().flat_map(|l| l.neurons.iter().flatten()))
            .filter(|(a, b)| a != b)
            .count();
        // ~6% of weights mutate per generation; all of them never do.
        assert!(changed < parent.weight_count());
    }

    #[test]
    fn test_resize_on_new_eye() {
        let mut rng = create_rng(12);
        let parent = Brain::new_random_with_rng(2, &mut rng);
        let child = parent.mutated_with_rng(4, &mut rng);
        assert_eq!(child.inputs, 4);
        assert_eq!(child.layers[0].output_width(), 4);
        assert_eq!(child.layers[0].input_width(), 4);
        assert_eq!(child.layers[1].input_width(), 4);
        assert_eq!(child.forward(&[0.1, 0.2, 0.3, 0.4]).len(), BRAIN_OUTPUTS);
    }

    #[test]
    fn test_resize_on_lost_eye() {
        let mut rng = create_rng(13);
        let parent = Brain::new_random_with_rng(4, &mut rng);
        let child = parent.mutated_with_rng(2, &mut rng);
        assert_eq!(child.layers[0].output_width(), 2);
        assert_eq!(child.layers[2].output_width(), BRAIN_OUTPUTS);
    }

    #[test]
    fn test_mutate_weight_keeps_sign() {
        let mut rng = create_rng(14);
        for _ in 0..500 {
            assert!(mutate_weight(1.0, &mut rng) > 0.0);
        }
    }

    proptest! {
        #[test]
        fn prop_mutated_brain_fits_any_eye_count(
            seed in 0u64..1000,
            parent_inputs in 0usize..12,
            child_inputs in 0usize..12
        ) {
            let mut rng = create_rng(seed);
            let parent = Brain::new_random_with_rng(parent_inputs, &mut rng);
            let child = parent.mutated_with_rng(child_inputs, &mut rng);
            let fresh = Brain::new_random_with_rng(child_inputs, &mut rng);
            prop_assert_eq!(child.weight_count(), fresh.weight_count());
            let inputs = vec![0.5; child_inputs];
            prop_assert!(child.forward(&inputs).iter().all(|v| v.is_finite()));
        }
    }
}
