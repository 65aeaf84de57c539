use super::*;

pub fn forward(brain: &Brain, inputs: &[f64]) -> [f64; BRAIN_OUTPUTS] {
    let mut values: Vec<f64> = (0..brain.inputs)
        .map(|i| inputs.get(i).copied().unwrap_or(0.0))
        .collect();

    for layer in &brain.layers {
        values = layer
            .neurons
            .iter()
            .map(|weights| activate(weights, &values))
            .collect();
    }

    let mut outputs = [0.0; BRAIN_OUTPUTS];
    for (out, v) in outputs.iter_mut().zip(values) {
        *out = v;
    }
    outputs
}

/// Linear neuron: weighted sum of the inputs plus the trailing bias weight.
#[inline]
fn activate(weights: &[f64], inputs: &[f64]) -> f64 {
    match weights.split_last() {
        Some((bias, w)) => w.iter().zip(inputs).map(|(w, x)| w * x).sum::<f64>() + bias,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_brain() -> Brain {
        // 2 inputs -> 2 hidden (identity) -> 4 (sum, diff, bias only, -x0) -> 4 (identity)
        let eye4 = |i: usize| {
            let mut w = vec![0.0; 5];
            w[i] = 1.0;
            w
        };
        Brain {
            inputs: 2,
            layers: vec![
                Layer {
                    neurons: vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]],
                },
                Layer {
                    neurons: vec![
                        vec![1.0, 1.0, 0.0],
                        vec![1.0, -1.0, 0.0],
                        vec![0.0, 0.0, 0.5],
                        vec![-1.0, 0.0, 0.0],
                    ],
                },
                Layer {
                    neurons: vec![eye4(0), eye4(1), eye4(2), eye4(3)],
                },
            ],
        }
    }

    #[test]
    fn test_forward_linear() {
        let out = forward(&identity_brain(), &[0.9, -0.9]);
        assert!((out[0] - 0.0).abs() < 1e-12);
        assert!((out[1] - 1.8).abs() < 1e-12);
        assert!((out[2] - 0.5).abs() < 1e-12);
        assert!((out[3] + 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_forward_pads_missing_inputs() {
        let out = forward(&identity_brain(), &[1.0]);
        assert!((out[0] - 1.0).abs() < 1e-12);
        assert!((out[1] - 1.0).abs() < 1e-12);
    }
}
