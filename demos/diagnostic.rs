// ============================================================================
// Arithmetic Diagnostic Example
// ============================================================================
//
// Times one million multiply+divide pairs with native floats, inline 16.16
// integer math and Fixed16, then repeats the Fixed16 run on every core.
//
// Run with: cargo run --release --example diagnostic --features logging

use fixed_diagnostic::prelude::*;
use std::process::ExitCode;
use std::thread;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "diagnostic aborted");
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<(), DiagnosticError> {
    println!("=== Fixed-Point Arithmetic Diagnostic ===\n");

    let threads = thread::available_parallelism().map_or(1, |n| n.get());
    let config = DiagnosticConfig::new().with_threads(threads);
    let (x, y) = config.operands;
    println!("Operands: {} and {}", x, y);
    println!("As Fixed16: {:?} and {:?}\n", Fixed16::from_f32(x), Fixed16::from_f32(y));

    let runner = DiagnosticRunner::new(config)?;
    let report = runner.run_all()?;
    println!("{}", report);

    println!("=== Parallel Fixed16 ({} threads) ===", threads);
    let parallel = runner.run_parallel(&Fixed16Kernel::new(x, y))?;
    println!(
        "{} operations in {:?} ({:.0} ops/s)",
        parallel.total_iterations(),
        parallel.wall_time,
        parallel.throughput()
    );

    println!("\n=== Edge Cases ===");
    let one = Fixed16::ONE;
    println!("1 / 0  = {}", one / Fixed16::ZERO);
    println!("-1 / 0 = {}", -one / Fixed16::ZERO);
    let big = Fixed16::from_int(256);
    println!("256 * 256 = {} (wrapped)", big * big);

    Ok(())
}
