//! Hill Climbing configuration.

/// Configuration for the Hill Climbing runner.
///
/// # Examples
///
/// ```
/// use u_facility::climb::ClimbConfig;
///
/// let config = ClimbConfig::default().with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClimbConfig {
    /// Random seed for initialization and tie-breaking. `None` draws a
    /// fresh seed from process entropy.
    pub seed: Option<u64>,
}

impl ClimbConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
