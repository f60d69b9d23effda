//! # Python Bindings
//!
//! PyO3 bindings for the arithmetic engine.
//!
//! ## Python API
//!
//! ```python
//! from reckon import Calculator
//!
//! calc = Calculator()                 # overflow="reject"
//! calc.add(10, 20)                    # 30.0
//! calc.divide(1, 0)                   # raises ZeroDivisionError
//! calc.sqrt(-1)                       # raises ValueError
//!
//! Calculator(overflow="widen").power(10, 400)   # inf
//! ```
//!
//! Operands cross the boundary as `float`.

use pyo3::exceptions::{PyOverflowError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

use crate::core::{ArithmeticError, EngineConfig, Number, OverflowPolicy};
use crate::engine::Calculator;
use crate::ports::Arithmetic;

/// Python wrapper for the calculator
#[pyclass(name = "Calculator")]
#[derive(Clone)]
pub struct PyCalculator {
    inner: Calculator,
}

#[pymethods]
impl PyCalculator {
    /// Create a calculator; `overflow` is "reject" (default) or "widen"
    #[new]
    #[pyo3(signature = (overflow = "reject"))]
    fn new(overflow: &str) -> PyResult<Self> {
        let policy: OverflowPolicy = overflow.parse().map_err(PyValueError::new_err)?;

        Ok(Self {
            inner: Calculator::with_config(EngineConfig::new().with_overflow(policy)),
        })
    }

    fn add(&self, a: f64, b: f64) -> PyResult<f64> {
        lift(self.inner.add(a.into(), b.into()))
    }

    fn subtract(&self, a: f64, b: f64) -> PyResult<f64> {
        lift(self.inner.subtract(a.into(), b.into()))
    }

    fn multiply(&self, a: f64, b: f64) -> PyResult<f64> {
        lift(self.inner.multiply(a.into(), b.into()))
    }

    fn divide(&self, a: f64, b: f64) -> PyResult<f64> {
        lift(self.inner.divide(a.into(), b.into()))
    }

    fn power(&self, a: f64, b: f64) -> PyResult<f64> {
        lift(self.inner.power(a.into(), b.into()))
    }

    fn sqrt(&self, a: f64) -> PyResult<f64> {
        lift(self.inner.sqrt(a.into()))
    }

    /// The configured overflow policy name
    #[getter]
    fn overflow(&self) -> &'static str {
        self.inner.config().overflow.as_str()
    }

    fn __repr__(&self) -> String {
        format!("Calculator(overflow='{}')", self.inner.config().overflow)
    }
}

fn lift(result: Result<Number, ArithmeticError>) -> PyResult<f64> {
    result.map(|n| n.as_f64()).map_err(|e| match e {
        ArithmeticError::DivisionByZero => PyZeroDivisionError::new_err(e.to_string()),
        ArithmeticError::Overflow { .. } => PyOverflowError::new_err(e.to_string()),
        ArithmeticError::Domain { .. } | ArithmeticError::Arity { .. } => {
            PyValueError::new_err(e.to_string())
        }
    })
}

/// reckon Python module
#[pymodule]
fn reckon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCalculator>()?;

    m.add("__doc__", "reckon: checked arithmetic engine")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
