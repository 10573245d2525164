//! Engine configuration.

/// Options controlling how a [`ValidationEngine`](crate::ValidationEngine)
/// treats deep input and schema defects.
///
/// The defaults match the plain recursive-descent contract: no depth limit,
/// and configuration errors reported as warnings only.
///
/// # Example
///
/// ```rust
/// use vetting::EngineOptions;
///
/// let options = EngineOptions::new()
///     .with_max_depth(32)
///     .deny_configuration_errors(true);
///
/// assert_eq!(options.max_depth(), Some(32));
/// assert!(options.denies_configuration_errors());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    max_depth: Option<usize>,
    deny_configuration_errors: bool,
}

impl EngineOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits how many nested messages deep validation may go.
    ///
    /// The root message is at depth 0. Exceeding the limit fails the call
    /// with [`EngineError::DepthExceeded`](crate::EngineError::DepthExceeded).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Turns configuration errors into hard failures.
    ///
    /// When enabled, a call that met any configuration error fails with
    /// [`EngineError::Configuration`](crate::EngineError::Configuration)
    /// instead of returning a report with warnings.
    pub fn deny_configuration_errors(mut self, deny: bool) -> Self {
        self.deny_configuration_errors = deny;
        self
    }

    /// Returns the depth limit, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns true if configuration errors fail the call.
    pub fn denies_configuration_errors(&self) -> bool {
        self.deny_configuration_errors
    }
}
