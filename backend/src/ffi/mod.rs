//! Python bindings (feature `pyo3`)
//!
//! Exposes the engine as a `Game` class. Errors cross the boundary as
//! Python exceptions:
//!
//! | SimulationError      | Python       |
//! |----------------------|--------------|
//! | `IndexOutOfRange`    | `IndexError` |
//! | `UnreadableSource`, `Export` | `OSError` |
//! | everything else      | `ValueError` |

pub mod game;

use pyo3::exceptions::{PyIndexError, PyOSError, PyValueError};
use pyo3::PyErr;

use crate::core::SimulationError;

pub(crate) fn to_py_err(err: SimulationError) -> PyErr {
    match err {
        SimulationError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        SimulationError::UnreadableSource(_) | SimulationError::Export(_) => {
            PyOSError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}
