// ============================================================================
// Diagnostic Configuration
// Loop size, sampling, worker count and operands for the timing diagnostic
// ============================================================================

use super::errors::DiagnosticError;

/// Iterations per kernel in the classic diagnostic run.
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// Configuration for a diagnostic run.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticConfig {
    /// Number of multiply+divide pairs per kernel
    pub iterations: u64,

    /// Iteration whose result is captured as the sample
    /// (ignored if it is past the end of the loop)
    pub sample_iteration: u64,

    /// Worker threads used by `run_parallel`
    pub threads: usize,

    /// Multiplicand/dividend and multiplier/divisor, as float literals
    pub operands: (f32, f32),
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            sample_iteration: 1,
            threads: 1,
            operands: (75.75, 100.1),
        }
    }
}

impl DiagnosticConfig {
    /// Create the classic configuration (1,000,000 iterations of 75.75 and 100.1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Small run for smoke tests
    pub fn quick() -> Self {
        Self::default().with_iterations(10_000)
    }

    /// Builder method: Set iteration count
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Builder method: Set sampled iteration
    pub fn with_sample_iteration(mut self, sample_iteration: u64) -> Self {
        self.sample_iteration = sample_iteration;
        self
    }

    /// Builder method: Set worker thread count
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Builder method: Set operands
    pub fn with_operands(mut self, x: f32, y: f32) -> Self {
        self.operands = (x, y);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DiagnosticError> {
        if self.iterations == 0 {
            return Err(DiagnosticError::ZeroIterations);
        }

        if self.threads == 0 {
            return Err(DiagnosticError::ZeroThreads);
        }

        let (x, y) = self.operands;
        for value in [x, y] {
            if !value.is_finite() {
                return Err(DiagnosticError::NonFiniteOperand(value));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DiagnosticConfig::new();
        assert_eq!(config.iterations, 1_000_000);
        assert_eq!(config.sample_iteration, 1);
        assert_eq!(config.threads, 1);
        assert_eq!(config.operands, (75.75, 100.1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DiagnosticConfig::quick()
            .with_threads(4)
            .with_sample_iteration(0)
            .with_operands(2.0, -0.5);

        assert_eq!(config.iterations, 10_000);
        assert_eq!(config.threads, 4);
        assert_eq!(config.sample_iteration, 0);
        assert_eq!(config.operands, (2.0, -0.5));
    }

    #[test]
    fn test_validation() {
        let config = DiagnosticConfig::new().with_iterations(0);
        assert_eq!(config.validate(), Err(DiagnosticError::ZeroIterations));

        let config = DiagnosticConfig::new().with_threads(0);
        assert_eq!(config.validate(), Err(DiagnosticError::ZeroThreads));

        let config = DiagnosticConfig::new().with_operands(1.0, f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(DiagnosticError::NonFiniteOperand(v)) if v.is_nan()
        ));
    }
}
