//! Common test utilities for infixcalc integration tests

pub use infixcalc::{CalcError, Engine};

/// Helper to evaluate an expression with a fresh engine
pub fn eval(input: &str) -> Result<f64, CalcError> {
    Engine::new().evaluate(input)
}

/// Helper for results that are not exactly representable
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
