/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`     — number of full passes (epochs) over the training data
/// - `progress_steps` — how many evenly spaced progress events to log at `info`
///                      level over the whole run; `0` disables them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrainConfig {
    pub iterations: usize,
    pub progress_steps: usize,
}

impl TrainConfig {
    pub const DEFAULT_ITERATIONS: usize = 10_000;

    pub fn new(iterations: usize) -> Self {
        TrainConfig {
            iterations,
            ..TrainConfig::default()
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: TrainConfig::DEFAULT_ITERATIONS,
            progress_steps: 10,
        }
    }
}
