// ============================================================================
// Diagnostic Runner
// Times a kernel over a fixed number of iterations, serially or in parallel
// ============================================================================

use super::config::DiagnosticConfig;
use super::errors::DiagnosticError;
use super::kernel::{ArithmeticKernel, Fixed16Kernel, FloatKernel, NativeFixedKernel, Sample};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Result of timing one kernel on one thread.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelTiming {
    pub kernel: &'static str,
    pub iterations: u64,
    pub elapsed: Duration,
    /// Result captured at the configured sample iteration
    pub sample: Option<Sample>,
}

impl KernelTiming {
    /// Mean wall time per multiply+divide pair, in nanoseconds.
    pub fn nanos_per_iteration(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }
}

impl fmt::Display for KernelTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sample) = self.sample {
            writeln!(f, "{} multiplication: {}", self.kernel, sample.product)?;
            writeln!(f, "{} division: {}", self.kernel, sample.quotient)?;
        }
        write!(
            f,
            "Total time for {} {} operations: {:?}",
            self.iterations, self.kernel, self.elapsed
        )
    }
}

/// Result of timing one kernel on several threads at once.
#[derive(Debug, Clone)]
pub struct ParallelTiming {
    pub kernel: &'static str,
    pub workers: Vec<KernelTiming>,
    /// Wall time from first spawn to last join
    pub wall_time: Duration,
}

impl ParallelTiming {
    pub fn total_iterations(&self) -> u64 {
        self.workers.iter().map(|w| w.iterations).sum()
    }

    /// Aggregate multiply+divide pairs per second across all workers.
    pub fn throughput(&self) -> f64 {
        let secs = self.wall_time.as_secs_f64();
        if secs == 0.0 {
            return f64::INFINITY;
        }
        self.total_iterations() as f64 / secs
    }
}

/// Timings for every kernel of a full diagnostic run.
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    pub timings: Vec<KernelTiming>,
}

impl DiagnosticReport {
    pub fn get(&self, kernel: &str) -> Option<&KernelTiming> {
        self.timings.iter().find(|t| t.kernel == kernel)
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for timing in &self.timings {
            writeln!(f, "{}", timing)?;
        }
        Ok(())
    }
}

/// Runs arithmetic kernels according to a validated [`DiagnosticConfig`].
#[derive(Debug, Clone)]
pub struct DiagnosticRunner {
    config: DiagnosticConfig,
}

impl DiagnosticRunner {
    /// # Errors
    /// Returns the validation error if the configuration is invalid.
    pub fn new(config: DiagnosticConfig) -> Result<Self, DiagnosticError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Time `iterations` evaluations of `kernel` on the calling thread.
    pub fn run<K: ArithmeticKernel>(&self, kernel: &K) -> Result<KernelTiming, DiagnosticError> {
        tracing::info!(
            kernel = kernel.name(),
            iterations = self.config.iterations,
            "starting diagnostic"
        );

        let timing = time_loop(kernel, self.config.iterations, self.config.sample_iteration)
            .inspect_err(|e| {
                tracing::warn!(kernel = kernel.name(), error = %e, "diagnostic failed")
            })?;

        tracing::info!(
            kernel = timing.kernel,
            elapsed = ?timing.elapsed,
            ns_per_iter = timing.nanos_per_iteration(),
            "diagnostic finished"
        );
        Ok(timing)
    }

    /// Time `iterations` evaluations of `kernel` on each of `threads` scoped
    /// worker threads.
    ///
    /// # Errors
    /// The first worker error, or `WorkerPanicked` if a worker panicked.
    pub fn run_parallel<K: ArithmeticKernel>(
        &self,
        kernel: &K,
    ) -> Result<ParallelTiming, DiagnosticError> {
        let DiagnosticConfig {
            iterations,
            sample_iteration,
            threads,
            ..
        } = self.config;

        tracing::info!(
            kernel = kernel.name(),
            iterations,
            threads,
            "starting parallel diagnostic"
        );

        let start = Instant::now();
        let workers = crossbeam::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|worker| {
                    s.spawn(move |_| {
                        let timing = time_loop(kernel, iterations, sample_iteration);
                        tracing::debug!(worker, ok = timing.is_ok(), "worker finished");
                        timing
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or(Err(DiagnosticError::WorkerPanicked)))
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(|_| DiagnosticError::WorkerPanicked)?
        .inspect_err(|e| {
            tracing::warn!(kernel = kernel.name(), error = %e, "parallel diagnostic failed")
        })?;
        let wall_time = start.elapsed();

        let timing = ParallelTiming {
            kernel: kernel.name(),
            workers,
            wall_time,
        };
        tracing::info!(
            kernel = timing.kernel,
            wall_time = ?timing.wall_time,
            throughput = timing.throughput(),
            "parallel diagnostic finished"
        );
        Ok(timing)
    }

    /// Run the float, native fixed and `Fixed16` kernels in turn on the
    /// configured operands.
    pub fn run_all(&self) -> Result<DiagnosticReport, DiagnosticError> {
        let (x, y) = self.config.operands;

        let timings = vec![
            self.run(&FloatKernel::new(x, y))?,
            self.run(&NativeFixedKernel::new(x, y))?,
            self.run(&Fixed16Kernel::new(x, y))?,
        ];

        Ok(DiagnosticReport { timings })
    }
}

fn time_loop<K: ArithmeticKernel>(
    kernel: &K,
    iterations: u64,
    sample_iteration: u64,
) -> Result<KernelTiming, DiagnosticError> {
    let mut sampled = None;

    let start = Instant::now();
    for i in 0..iterations {
        let output = black_box(black_box(kernel).evaluate()?);
        if i == sample_iteration {
            sampled = Some(output);
        }
    }
    let elapsed = start.elapsed();

    Ok(KernelTiming {
        kernel: kernel.name(),
        iterations,
        elapsed,
        sample: sampled.map(|output| kernel.sample(output)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Fixed16;

    fn make_runner(config: DiagnosticConfig) -> DiagnosticRunner {
        DiagnosticRunner::new(config).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = DiagnosticRunner::new(DiagnosticConfig::new().with_iterations(0));
        assert!(matches!(result, Err(DiagnosticError::ZeroIterations)));
    }

    #[test]
    fn test_run_captures_sample() {
        let runner = make_runner(DiagnosticConfig::quick());
        let timing = runner.run(&Fixed16Kernel::new(75.75, 100.1)).unwrap();

        assert_eq!(timing.kernel, "fixed-point (Fixed16)");
        assert_eq!(timing.iterations, 10_000);
        let sample = timing.sample.unwrap();
        assert!((sample.product - 7582.575).abs() < 0.01);
        assert!((sample.quotient - 0.7567).abs() < 0.001);
    }

    #[test]
    fn test_sample_past_end_is_none() {
        let runner = make_runner(DiagnosticConfig::new().with_iterations(1));
        let timing = runner.run(&FloatKernel::new(1.0, 2.0)).unwrap();
        assert!(timing.sample.is_none());

        let runner = make_runner(
            DiagnosticConfig::new()
                .with_iterations(1)
                .with_sample_iteration(0),
        );
        let timing = runner.run(&FloatKernel::new(1.0, 2.0)).unwrap();
        assert_eq!(
            timing.sample,
            Some(Sample {
                product: 2.0,
                quotient: 0.5
            })
        );
    }

    #[test]
    fn test_run_propagates_kernel_error() {
        let runner = make_runner(DiagnosticConfig::quick());
        let result = runner.run(&NativeFixedKernel::new(1.0, 0.0));
        assert_eq!(result, Err(DiagnosticError::DivisionByZero));
    }

    #[test]
    fn test_run_all() {
        let runner = make_runner(DiagnosticConfig::quick());
        let report = runner.run_all().unwrap();

        assert_eq!(report.timings.len(), 3);
        let native = report.get("fixed-point (native)").unwrap().sample.unwrap();
        let core = report.get("fixed-point (Fixed16)").unwrap().sample.unwrap();
        assert_eq!(native, core);

        let float = report.get("floating-point").unwrap().sample.unwrap();
        assert!((float.product - core.product).abs() < 0.01);
        assert!(report.get("unknown").is_none());
    }

    #[test]
    fn test_run_all_zero_divisor_fails_on_native_kernel() {
        let runner = make_runner(DiagnosticConfig::quick().with_operands(1.0, 0.0));
        assert_eq!(runner.run_all().unwrap_err(), DiagnosticError::DivisionByZero);
    }

    #[test]
    fn test_report_display() {
        let runner = make_runner(DiagnosticConfig::new().with_iterations(2));
        let report = runner.run_all().unwrap();
        let text = report.to_string();

        assert!(text.contains("floating-point multiplication: "));
        assert!(text.contains("fixed-point (Fixed16) division: 0.7567291259765625"));
        assert!(text.contains("Total time for 2 fixed-point (native) operations: "));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn test_run_parallel() {
        let runner = make_runner(DiagnosticConfig::quick().with_threads(4));
        let timing = runner.run_parallel(&Fixed16Kernel::new(75.75, 100.1)).unwrap();

        assert_eq!(timing.workers.len(), 4);
        assert_eq!(timing.total_iterations(), 40_000);
        assert!(timing.throughput() > 0.0);

        // Every worker sees the same deterministic result
        let first = timing.workers[0].sample;
        assert!(timing.workers.iter().all(|w| w.sample == first));
    }

    #[test]
    fn test_run_parallel_propagates_kernel_error() {
        let runner = make_runner(DiagnosticConfig::quick().with_threads(2));
        let result = runner.run_parallel(&NativeFixedKernel::new(1.0, 0.0));
        assert!(matches!(result, Err(DiagnosticError::DivisionByZero)));
    }

    #[test]
    fn test_saturating_kernel_runs_to_completion() {
        let runner = make_runner(DiagnosticConfig::quick());
        let kernel = Fixed16Kernel::from_fixed(Fixed16::from_int(-1), Fixed16::ZERO);
        let sample = runner.run(&kernel).unwrap().sample.unwrap();
        assert_eq!(sample.quotient, Fixed16::MIN.to_f64());
    }
}
