use crate::math::sigmoid_derivative;
use crate::network::{BIAS_ACTIVATION, FeedForwardNetwork, Neuron};
use ndarray::{Array1, ArrayView1};

/// Calculates the error gradient of one output neuron.
///
/// This is the sigmoid-derivative-weighted residual
/// `output * (1 - output) * (target - output)`: the raw error scaled by how
/// steeply the neuron's activation responds at its current output.
///
/// # Parameters
///
/// - `target` - The expected output value
/// - `output` - The value the neuron actually produced
///
/// # Returns
///
/// * `Neuron` - The gradient used to scale weight corrections into this neuron
///
/// # Examples
/// ```rust
/// use fnnet::network::output_error_gradient;
///
/// // At output 0.5 the sigmoid derivative is maximal (0.25)
/// assert_eq!(output_error_gradient(1.0, 0.5), 0.125);
/// // A perfect prediction produces no gradient
/// assert_eq!(output_error_gradient(0.5, 0.5), 0.0);
/// ```
#[inline]
pub fn output_error_gradient(target: Neuron, output: Neuron) -> Neuron {
    sigmoid_derivative(output) * (target - output)
}

/// Backpropagated credit for one hidden neuron: its outgoing weights times the
/// output gradients, scaled by the neuron's own sigmoid derivative.
#[inline]
fn hidden_gradient(
    activation: Neuron,
    weight_row: &[Neuron],
    target: ArrayView1<Neuron>,
    output: ArrayView1<Neuron>,
) -> Neuron {
    let mut sum = 0.0;
    for (i, weight) in weight_row.iter().enumerate() {
        sum += weight * output_error_gradient(target[i], output[i]);
    }
    sigmoid_derivative(activation) * sum
}

impl FeedForwardNetwork {
    /// Calculates the backpropagated error gradient of one hidden neuron.
    ///
    /// Sums this neuron's outgoing hidden→output weights against the output
    /// error gradients of the given target/output pair, then scales by the
    /// sigmoid derivative of the neuron's stored activation. Reads the current
    /// weight and activation state; a preceding [`feedforward`](Self::feedforward)
    /// must have populated the hidden activations.
    ///
    /// # Parameters
    ///
    /// - `hidden` - Index of the hidden neuron, less than `num_hidden`
    /// - `target` - Expected output vector of length `num_output`
    /// - `output` - Actual output vector of length `num_output`
    ///
    /// # Returns
    ///
    /// * `Neuron` - The credit assigned to the hidden neuron
    ///
    /// # Panics
    ///
    /// - Panics if `hidden` is out of range or the vectors are shorter than `num_output`
    pub fn hidden_error_gradient(
        &self,
        hidden: usize,
        target: ArrayView1<Neuron>,
        output: ArrayView1<Neuron>,
    ) -> Neuron {
        let weights = &self.buffer[self.layout.hidden_weights.clone()];
        let row = &weights[hidden * self.num_output..(hidden + 1) * self.num_output];
        hidden_gradient(self.hidden_activations()[hidden], row, target, output)
    }

    /// Performs one backpropagation training step on a single example.
    ///
    /// Runs a forward pass, then corrects every weight in place, output layer
    /// first: each weight delta is the learning-rate-scaled gradient
    /// contribution plus `momentum` times the previous delta for the same
    /// connection, and is added into the weight. The delta regions carry the
    /// momentum state from one call to the next; there is no other state
    /// between steps.
    ///
    /// # Parameters
    ///
    /// - `input` - Input vector of length `num_input`
    /// - `target_output` - Expected output vector of length `num_output`
    /// - `rate` - Learning rate scaling each gradient contribution
    /// - `momentum` - Fraction of the previous delta carried into this step
    ///
    /// # Returns
    ///
    /// * `Array1<Neuron>` - The network's prediction for `input` before this
    ///   step's weight corrections, usable for logging or convergence checks
    ///
    /// # Panics
    ///
    /// - Panics if `input` or `target_output` length does not match the network dimensions
    ///
    /// # Examples
    /// ```rust
    /// use fnnet::prelude::*;
    /// use ndarray::array;
    ///
    /// let mut network = FeedForwardNetwork::new(2, 2, 1).unwrap();
    /// let input = array![1.0, 0.0];
    /// let target = array![1.0];
    ///
    /// // Zero weights predict 0.5; one step pulls the next prediction upward
    /// let before = network.train(input.view(), target.view(), 0.5, 0.0);
    /// assert_eq!(before[0], 0.5);
    /// assert!(network.feedforward(input.view())[0] > 0.5);
    /// ```
    pub fn train(
        &mut self,
        input: ArrayView1<Neuron>,
        target_output: ArrayView1<Neuron>,
        rate: Neuron,
        momentum: Neuron,
    ) -> Array1<Neuron> {
        if target_output.len() != self.num_output {
            panic!(
                "Target length {} does not match the network output size {}",
                target_output.len(),
                self.num_output
            );
        }

        let training_output = self.feedforward(input);
        self.backpropagate(input, training_output.view(), target_output, rate, momentum);
        training_output
    }

    /// Applies one round of weight corrections from a completed forward pass.
    fn backpropagate(
        &mut self,
        input: ArrayView1<Neuron>,
        training_output: ArrayView1<Neuron>,
        target_output: ArrayView1<Neuron>,
        rate: Neuron,
        momentum: Neuron,
    ) {
        let (num_input, num_hidden, num_output) = (self.num_input, self.num_hidden, self.num_output);
        let regions = self.regions_mut();

        for i in 0..num_output {
            let correction = output_error_gradient(target_output[i], training_output[i]);
            for j in 0..num_hidden {
                let idx = j * num_output + i;
                regions.delta_hidden_output[idx] = rate * regions.hidden_activations[j] * correction
                    + momentum * regions.delta_hidden_output[idx];
                regions.hidden_weights[idx] += regions.delta_hidden_output[idx];
            }
            let bias = num_hidden * num_output + i;
            regions.delta_hidden_output[bias] =
                rate * BIAS_ACTIVATION * correction + momentum * regions.delta_hidden_output[bias];
            regions.hidden_weights[bias] += regions.delta_hidden_output[bias];
        }

        // The output layer must be fully corrected, bias row included, before
        // the hidden gradients are taken: the backpropagated sum below reads
        // `hidden_weights`.
        for i in 0..num_hidden {
            let row = &regions.hidden_weights[i * num_output..(i + 1) * num_output];
            let correction = hidden_gradient(
                regions.hidden_activations[i],
                row,
                target_output,
                training_output,
            );
            for j in 0..num_input {
                let idx = j * num_hidden + i;
                regions.delta_input_hidden[idx] = rate * input[j] * correction
                    + momentum * regions.delta_input_hidden[idx];
                regions.input_weights[idx] += regions.delta_input_hidden[idx];
            }
            let bias = num_input * num_hidden + i;
            regions.delta_input_hidden[bias] =
                rate * BIAS_ACTIVATION * correction + momentum * regions.delta_input_hidden[bias];
            regions.input_weights[bias] += regions.delta_input_hidden[bias];
        }
    }
}
