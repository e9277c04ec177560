//! Centralized constants for the squaremat library
//!
//! All numeric tolerances and display limits live here rather than being
//! scattered through the operator implementations.

// ============================================================================
// FLOATING POINT TOLERANCES
// ============================================================================

/// Tolerance used wherever exact floating point equality would be unsound:
/// zero-divisor checks, sum-based comparison, singular pivots and
/// determinant rounding.
pub const EPS: f64 = 1e-9;

// ============================================================================
// DISPLAY AND DEBUG CONSTANTS
// ============================================================================

/// Maximum rows printed by the `Debug` view
pub const MAX_DEBUG_ROWS: usize = 5;

/// Maximum elements per row printed by the `Debug` view
pub const MAX_DEBUG_ELEMENTS_PER_ROW: usize = 5;

// ============================================================================
// BENCHMARKING CONSTANTS
// ============================================================================

/// Matrix orders exercised by the criterion benchmarks
pub const BENCH_ORDERS: [usize; 3] = [8, 32, 128];

/// Exponent used by the power benchmark
pub const BENCH_POWER_EXPONENT: u32 = 64;

/// Benchmark sample size
pub const BENCH_SAMPLES: usize = 20;
