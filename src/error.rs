use derive_more::{Display, Error};

/// The reason why a network operation failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum NetworkError {
    /// A vector handed to the network does not have the length it expects.
    #[display(fmt = "expected a vector of length {}, found {}", expected, found)]
    DimensionMismatch { expected: usize, found: usize },

    /// `backward` was handed a trace that the current weights did not produce.
    #[display(fmt = "no forward pass matches the current weights")]
    NoPriorForward,

    /// Training or evaluation was asked to run over zero examples.
    #[display(fmt = "the dataset is empty")]
    EmptyDataset,

    /// A layer, the input or the output was declared with zero units,
    /// or two adjacent layers disagree on their arity.
    #[display(fmt = "invalid network shape")]
    InvalidShape,
}

impl NetworkError {
    /// Fails with [`NetworkError::DimensionMismatch`] unless `found == expected`.
    pub(crate) fn check_len(expected: usize, found: usize) -> Result<(), NetworkError> {
        if expected == found {
            Ok(())
        } else {
            Err(NetworkError::DimensionMismatch { expected, found })
        }
    }
}
