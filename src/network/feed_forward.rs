use crate::ModelError;
use crate::math::sigmoid;
use crate::network::layout::RegionLayout;
use crate::network::{BIAS_ACTIVATION, Neuron};
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A fixed-topology feedforward neural network with one hidden layer.
///
/// All weights and working state live in a single contiguous buffer,
/// partitioned into five regions by a [`RegionLayout`]: the hidden
/// activations, the two momentum delta regions and the two weight regions.
/// The dimensions are fixed for the lifetime of the network; only the region
/// contents are mutated, in place, by initialization, forward propagation and
/// training.
///
/// Both layers use the logistic sigmoid activation. Each weight region carries
/// a trailing bias row driven by a constant activation of −1, so the firing
/// threshold of every neuron is learned like an ordinary weight.
///
/// A network is `Send` but provides no internal locking: the `&mut self`
/// receivers make "at most one in-flight operation" a compile-time property.
/// Dropping the network releases the single allocation; no region is freed
/// separately.
///
/// # Fields
///
/// - `num_input` - Number of input neurons
/// - `num_hidden` - Number of hidden neurons
/// - `num_output` - Number of output neurons
/// - `layout` - Region boundaries inside `buffer`, derived from the dimension triple
/// - `buffer` - The single contiguous allocation tiled by the five regions
///
/// # Example
/// ```rust
/// use fnnet::prelude::*;
/// use ndarray::array;
///
/// // Build and seed a 2-4-1 network
/// let mut network = FeedForwardNetwork::new(2, 4, 1).unwrap();
/// network.randomize(7);
///
/// let inputs = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
/// let targets = array![[0.1], [0.9], [0.9], [0.1]];
///
/// // One backpropagation step per example, repeated over the set
/// for _ in 0..500 {
///     for (input, target) in inputs.rows().into_iter().zip(targets.rows()) {
///         network.train(input, target, 0.5, 0.9);
///     }
/// }
///
/// let error = network.mean_squared_deviation(inputs.view(), targets.view());
/// println!("mean squared deviation: {error}");
/// ```
pub struct FeedForwardNetwork {
    /// Number of input neurons
    pub(crate) num_input: usize,
    /// Number of hidden neurons
    pub(crate) num_hidden: usize,
    /// Number of output neurons
    pub(crate) num_output: usize,
    /// Region boundaries inside `buffer`
    pub(crate) layout: RegionLayout,
    /// Single contiguous allocation holding all five regions
    pub(crate) buffer: Vec<Neuron>,
}

/// Mutable views of the five regions, split out of the single buffer.
///
/// Splitting once per operation lets the engine read one region while
/// writing another without aliasing the underlying allocation.
pub(crate) struct RegionsMut<'a> {
    pub(crate) hidden_activations: &'a mut [Neuron],
    pub(crate) delta_input_hidden: &'a mut [Neuron],
    pub(crate) delta_hidden_output: &'a mut [Neuron],
    pub(crate) input_weights: &'a mut [Neuron],
    pub(crate) hidden_weights: &'a mut [Neuron],
}

impl FeedForwardNetwork {
    /// Creates a new network with the given dimensions, zero-initialized.
    ///
    /// Allocates exactly the element count planned by [`RegionLayout`] and
    /// fills every region with zero. The dimensions are immutable afterwards.
    ///
    /// # Parameters
    ///
    /// - `num_input` - Number of input neurons, must be at least 1
    /// - `num_hidden` - Number of hidden neurons, must be at least 1
    /// - `num_output` - Number of output neurons, must be at least 1
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - The zero-initialized network
    /// - `Err(ModelError::InputValidationError)` - If any dimension is zero
    /// - `Err(ModelError::AllocationError)` - If the allocator cannot satisfy the request
    ///
    /// # Examples
    /// ```rust
    /// use fnnet::prelude::*;
    ///
    /// let network = FeedForwardNetwork::new(3, 5, 2).unwrap();
    /// assert_eq!(network.get_num_input(), 3);
    /// assert!(FeedForwardNetwork::new(3, 0, 2).is_err());
    /// ```
    pub fn new(num_input: usize, num_hidden: usize, num_output: usize) -> Result<Self, ModelError> {
        for (name, value) in [
            ("num_input", num_input),
            ("num_hidden", num_hidden),
            ("num_output", num_output),
        ] {
            if value == 0 {
                return Err(ModelError::InputValidationError(format!(
                    "{} must be at least 1, got 0",
                    name
                )));
            }
        }

        let layout = RegionLayout::new(num_input, num_hidden, num_output);
        let element_count = layout.element_count();

        // Surface allocator failure instead of aborting the process
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(element_count).map_err(|e| {
            ModelError::AllocationError(format!(
                "Could not allocate {} elements for the network buffer: {}",
                element_count, e
            ))
        })?;
        buffer.resize(element_count, 0.0);

        Ok(Self {
            num_input,
            num_hidden,
            num_output,
            layout,
            buffer,
        })
    }

    get_field!(get_num_input, num_input, usize);
    get_field!(get_num_hidden, num_hidden, usize);
    get_field!(get_num_output, num_output, usize);

    /// Returns the exact number of bytes a network of the given dimensions occupies.
    ///
    /// This is the fixed header (the `FeedForwardNetwork` struct itself) plus
    /// the element storage of all five regions, so callers can plan memory use
    /// before constructing.
    ///
    /// # Parameters
    ///
    /// - `num_input` - Number of input neurons
    /// - `num_hidden` - Number of hidden neurons
    /// - `num_output` - Number of output neurons
    ///
    /// # Returns
    ///
    /// * `usize` - The byte count for that dimension triple
    pub fn required_bytes(num_input: usize, num_hidden: usize, num_output: usize) -> usize {
        RegionLayout::new(num_input, num_hidden, num_output).required_bytes()
    }

    /// Rederives the region boundaries from the stored dimension triple.
    ///
    /// The boundaries are a pure function of the dimensions, so this is
    /// idempotent. It exists as the rebinding step for any future routine that
    /// reconstitutes a network around an existing buffer; on a live network it
    /// simply reasserts the current layout.
    pub fn recompute_layout(&mut self) {
        self.layout = RegionLayout::new(self.num_input, self.num_hidden, self.num_output);
    }

    /// Returns the number of trainable parameters, bias weights included.
    ///
    /// # Returns
    ///
    /// * `usize` - `(num_input + 1) * num_hidden + (num_hidden + 1) * num_output`
    pub fn param_count(&self) -> usize {
        (self.num_input + 1) * self.num_hidden + (self.num_hidden + 1) * self.num_output
    }

    /// Prints the network topology, parameter count and memory footprint.
    pub fn summary(&self) {
        println!(
            "FeedForwardNetwork: {} -> {} -> {}",
            self.num_input, self.num_hidden, self.num_output
        );
        println!("Trainable params: {}", self.param_count());
        println!("Memory footprint: {} bytes", self.layout.required_bytes());
    }

    /// Overwrites all five regions with zero.
    ///
    /// Resets activations, both momentum delta regions and both weight
    /// regions; the network behaves exactly as if freshly constructed.
    pub fn zero(&mut self) {
        self.buffer.fill(0.0);
    }

    /// Overwrites the two weight regions with uniform values in `[-0.5, 0.5)`.
    ///
    /// A locally owned generator is seeded from `seed`, so the same seed on a
    /// freshly created network of identical dimensions reproduces the weight
    /// regions bit for bit. Each weight is drawn as a uniform `[0, 1)` sample
    /// shifted down by 0.5.
    ///
    /// The delta regions and hidden activations are left untouched; call
    /// [`zero`](Self::zero) first when a clean slate is required.
    ///
    /// # Parameters
    ///
    /// * `seed` - Seed for the pseudo-random generator
    ///
    /// # Examples
    /// ```rust
    /// use fnnet::prelude::*;
    ///
    /// let mut a = FeedForwardNetwork::new(2, 3, 1).unwrap();
    /// let mut b = FeedForwardNetwork::new(2, 3, 1).unwrap();
    /// a.randomize(42);
    /// b.randomize(42);
    /// assert_eq!(a.input_weights(), b.input_weights());
    /// assert_eq!(a.hidden_weights(), b.hidden_weights());
    /// ```
    pub fn randomize(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        // The two weight regions sit at the tail of the buffer
        for weight in &mut self.buffer[self.layout.input_weights.start..] {
            *weight = rng.random::<Neuron>() - 0.5;
        }
    }

    /// Computes the network's output for one input vector.
    ///
    /// Runs the two-stage forward pass: every hidden neuron sums its weighted
    /// inputs plus the bias contribution and applies the sigmoid; the output
    /// layer repeats the same structure over the hidden activations. The
    /// hidden activations are retained in the network because the training
    /// pass reads them back.
    ///
    /// # Parameters
    ///
    /// * `input` - Input vector of length `num_input`
    ///
    /// # Returns
    ///
    /// * `Array1<Neuron>` - Output vector of length `num_output`
    ///
    /// # Panics
    ///
    /// - Panics if `input.len()` does not equal `num_input`
    ///
    /// # Examples
    /// ```rust
    /// use fnnet::prelude::*;
    /// use ndarray::array;
    ///
    /// let mut network = FeedForwardNetwork::new(2, 2, 1).unwrap();
    /// // All-zero weights drive every neuron to sigmoid(0) = 0.5
    /// let output = network.feedforward(array![1.0, 0.0].view());
    /// assert_eq!(output[0], 0.5);
    /// ```
    pub fn feedforward(&mut self, input: ArrayView1<Neuron>) -> Array1<Neuron> {
        if input.len() != self.num_input {
            panic!(
                "Input length {} does not match the network input size {}",
                input.len(),
                self.num_input
            );
        }

        let (num_input, num_hidden, num_output) = (self.num_input, self.num_hidden, self.num_output);
        let regions = self.regions_mut();

        for i in 0..num_hidden {
            let mut sum = 0.0;
            for j in 0..num_input {
                sum += input[j] * regions.input_weights[j * num_hidden + i];
            }
            sum += BIAS_ACTIVATION * regions.input_weights[num_input * num_hidden + i];
            regions.hidden_activations[i] = sigmoid(sum);
        }

        let mut output = Array1::zeros(num_output);
        for i in 0..num_output {
            let mut sum = 0.0;
            for j in 0..num_hidden {
                sum += regions.hidden_activations[j] * regions.hidden_weights[j * num_output + i];
            }
            sum += BIAS_ACTIVATION * regions.hidden_weights[num_hidden * num_output + i];
            output[i] = sigmoid(sum);
        }
        output
    }

    /// Calculates the mean squared deviation over a set of examples.
    ///
    /// Runs one forward pass per row of `input_set`, accumulates the squared
    /// error of every output neuron against the matching row of `output_set`,
    /// and averages over `num_output * rows`. Because each example reruns the
    /// forward pass, the stored hidden activations are overwritten; do not
    /// interleave this with an in-progress training step.
    ///
    /// # Parameters
    ///
    /// - `input_set` - One input vector per row, `num_input` columns
    /// - `output_set` - One expected output vector per row, `num_output` columns
    ///
    /// # Returns
    ///
    /// * `Neuron` - The mean squared deviation, 0.0 for an empty set
    ///
    /// # Panics
    ///
    /// - Panics if the two sets have different row counts, or if either column
    ///   count does not match the network dimensions
    ///
    /// # Examples
    /// ```rust
    /// use fnnet::prelude::*;
    /// use ndarray::array;
    ///
    /// let mut network = FeedForwardNetwork::new(1, 2, 1).unwrap();
    /// let inputs = array![[0.0], [1.0]];
    /// let targets = array![[1.0], [0.0]];
    /// // Zero weights predict 0.5 everywhere, so each example misses by 0.5
    /// let msd = network.mean_squared_deviation(inputs.view(), targets.view());
    /// assert_eq!(msd, 0.25);
    /// ```
    pub fn mean_squared_deviation(
        &mut self,
        input_set: ArrayView2<Neuron>,
        output_set: ArrayView2<Neuron>,
    ) -> Neuron {
        if input_set.nrows() != output_set.nrows() {
            panic!(
                "Input set has {} rows but output set has {}",
                input_set.nrows(),
                output_set.nrows()
            );
        }
        if input_set.ncols() != self.num_input || output_set.ncols() != self.num_output {
            panic!(
                "Set shapes ({}, {}) do not match the network dimensions ({}, {})",
                input_set.ncols(),
                output_set.ncols(),
                self.num_input,
                self.num_output
            );
        }

        let num = input_set.nrows();
        if num == 0 {
            return 0.0;
        }

        let mut sq_deviation = 0.0;
        for k in 0..num {
            let prediction = self.feedforward(input_set.row(k));
            for j in 0..self.num_output {
                let error = prediction[j] - output_set[[k, j]];
                sq_deviation += error * error;
            }
        }
        sq_deviation / (self.num_output * num) as Neuron
    }

    /// Returns the last computed hidden-neuron outputs.
    ///
    /// # Returns
    ///
    /// * `ArrayView1<Neuron>` - View of length `num_hidden`
    pub fn hidden_activations(&self) -> ArrayView1<'_, Neuron> {
        ArrayView1::from(&self.buffer[self.layout.hidden_activations.clone()])
    }

    /// Returns the current input→hidden weights.
    ///
    /// Row `j` holds the weights leaving input neuron `j`; the final row is
    /// the bias row, driven by a constant activation of −1.
    ///
    /// # Returns
    ///
    /// * `ArrayView2<Neuron>` - View of shape `(num_input + 1, num_hidden)`
    pub fn input_weights(&self) -> ArrayView2<'_, Neuron> {
        self.region_view_2d(self.layout.input_weights.clone(), self.num_input + 1, self.num_hidden)
    }

    /// Returns the current hidden→output weights.
    ///
    /// Row `j` holds the weights leaving hidden neuron `j`; the final row is
    /// the bias row, driven by a constant activation of −1.
    ///
    /// # Returns
    ///
    /// * `ArrayView2<Neuron>` - View of shape `(num_hidden + 1, num_output)`
    pub fn hidden_weights(&self) -> ArrayView2<'_, Neuron> {
        self.region_view_2d(self.layout.hidden_weights.clone(), self.num_hidden + 1, self.num_output)
    }

    /// Returns the previous-step input→hidden weight deltas consumed by the momentum term.
    ///
    /// # Returns
    ///
    /// * `ArrayView2<Neuron>` - View of shape `(num_input + 1, num_hidden)`
    pub fn delta_input_hidden(&self) -> ArrayView2<'_, Neuron> {
        self.region_view_2d(self.layout.delta_input_hidden.clone(), self.num_input + 1, self.num_hidden)
    }

    /// Returns the previous-step hidden→output weight deltas consumed by the momentum term.
    ///
    /// # Returns
    ///
    /// * `ArrayView2<Neuron>` - View of shape `(num_hidden + 1, num_output)`
    pub fn delta_hidden_output(&self) -> ArrayView2<'_, Neuron> {
        self.region_view_2d(self.layout.delta_hidden_output.clone(), self.num_hidden + 1, self.num_output)
    }

    fn region_view_2d(
        &self,
        range: std::ops::Range<usize>,
        rows: usize,
        cols: usize,
    ) -> ArrayView2<'_, Neuron> {
        // Region length equals rows * cols by layout construction
        ArrayView2::from_shape((rows, cols), &self.buffer[range]).unwrap()
    }

    /// Splits the buffer into disjoint mutable region slices.
    pub(crate) fn regions_mut(&mut self) -> RegionsMut<'_> {
        let layout = &self.layout;
        let (rest, hidden_weights) = self.buffer.split_at_mut(layout.hidden_weights.start);
        let (rest, input_weights) = rest.split_at_mut(layout.input_weights.start);
        let (rest, delta_hidden_output) = rest.split_at_mut(layout.delta_hidden_output.start);
        let (hidden_activations, delta_input_hidden) =
            rest.split_at_mut(layout.delta_input_hidden.start);
        RegionsMut {
            hidden_activations,
            delta_input_hidden,
            delta_hidden_output,
            input_weights,
            hidden_weights,
        }
    }
}
