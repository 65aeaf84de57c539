use serde::{Deserialize, Serialize};

/// One fully connected layer. `neurons[j]` holds the incoming weights of
/// neuron `j`; the last weight of every neuron is its bias.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub neurons: Vec<Vec<f64>>,
}

impl Layer {
    /// Number of inputs this layer consumes (bias excluded).
    pub fn input_width(&self) -> usize {
        self.neurons
            .first()
            .map(|w| w.len().saturating_sub(1))
            .unwrap_or(0)
    }

    pub fn output_width(&self) -> usize {
        self.neurons.len()
    }
}

/// Fixed-topology feed-forward network with linear activation.
///
/// Layout is `[inputs, 4, 4]`: a hidden layer as wide as the input, a second
/// hidden layer of four neurons and four outputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brain {
    pub inputs: usize,
    pub layers: Vec<Layer>,
}

impl Brain {
    pub fn weight_count(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|l| l.neurons.iter())
            .map(Vec::len)
            .sum()
    }
}
