use crate::network::{FeedForwardNetwork, Neuron};
use std::mem::size_of;
use std::ops::Range;

/// Partition of the network's single contiguous buffer into its five regions.
///
/// The regions are laid out consecutively, in this order:
///
/// 1. `hidden_activations` - `num_hidden` elements, the last computed hidden outputs
/// 2. `delta_input_hidden` - `(num_input + 1) * num_hidden` elements, previous-step
///    input→hidden weight deltas (the `+1` row holds the bias term)
/// 3. `delta_hidden_output` - `(num_hidden + 1) * num_output` elements, previous-step
///    hidden→output weight deltas, bias row included
/// 4. `input_weights` - `(num_input + 1) * num_hidden` elements, current input→hidden weights
/// 5. `hidden_weights` - `(num_hidden + 1) * num_output` elements, current hidden→output weights
///
/// Every boundary is a pure function of the dimension triple, so a layout can be
/// rederived at any time from the dimensions alone. Within a weight or delta
/// region, the element for source unit `j` and destination unit `i` in a layer
/// of `N` destinations sits at offset `j * N + i`; the bias row is the source
/// index equal to the source-layer size.
///
/// # Examples
/// ```rust
/// use fnnet::network::layout::RegionLayout;
///
/// let layout = RegionLayout::new(2, 3, 1);
/// // 3 + 2 * (2 + 1) * 3 + 2 * (3 + 1) * 1 = 29 elements
/// assert_eq!(layout.element_count(), 29);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLayout {
    /// Last computed hidden-neuron outputs
    pub(crate) hidden_activations: Range<usize>,
    /// Previous-step input→hidden weight deltas
    pub(crate) delta_input_hidden: Range<usize>,
    /// Previous-step hidden→output weight deltas
    pub(crate) delta_hidden_output: Range<usize>,
    /// Current input→hidden weights
    pub(crate) input_weights: Range<usize>,
    /// Current hidden→output weights
    pub(crate) hidden_weights: Range<usize>,
}

impl RegionLayout {
    /// Derives the region boundaries for a network of the given dimensions.
    ///
    /// # Parameters
    ///
    /// - `num_input` - Number of input neurons
    /// - `num_hidden` - Number of hidden neurons
    /// - `num_output` - Number of output neurons
    ///
    /// # Returns
    ///
    /// * `RegionLayout` - The five consecutive region ranges
    pub fn new(num_input: usize, num_hidden: usize, num_output: usize) -> Self {
        let mut cursor = 0;
        let mut next = |len: usize| {
            let range = cursor..cursor + len;
            cursor = range.end;
            range
        };
        Self {
            hidden_activations: next(num_hidden),
            delta_input_hidden: next((num_input + 1) * num_hidden),
            delta_hidden_output: next((num_hidden + 1) * num_output),
            input_weights: next((num_input + 1) * num_hidden),
            hidden_weights: next((num_hidden + 1) * num_output),
        }
    }

    /// Returns the total number of numeric elements across all five regions.
    ///
    /// # Returns
    ///
    /// * `usize` - The element count of the buffer the layout partitions
    pub fn element_count(&self) -> usize {
        // Regions tile the buffer, the last one ends where it ends
        self.hidden_weights.end
    }

    /// Returns the exact number of bytes a network with this layout occupies.
    ///
    /// This is the element storage plus the fixed per-network header
    /// (the `FeedForwardNetwork` struct itself, which carries the dimension
    /// triple and the region boundaries).
    ///
    /// # Returns
    ///
    /// * `usize` - Header size plus `element_count()` times the element size
    pub fn required_bytes(&self) -> usize {
        size_of::<FeedForwardNetwork>() + self.element_count() * size_of::<Neuron>()
    }
}
