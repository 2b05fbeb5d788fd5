//! The complexity result bundle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::report::prefix::to_metric_string;

/// Complexity estimates for one block design.
///
/// All three values are closed-form counts, not measurements: `memory` is
/// the activation working set in bytes at 4 bytes per element, `parameters`
/// the learnable element count, and `computation` the multiply-accumulate
/// count of one forward pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplexityBundle {
    /// Activation memory in bytes.
    ///
    /// Fractional when the attention-weight term is split across heads.
    pub memory: f64,

    /// Learnable parameter count.
    pub parameters: u64,

    /// Multiply-accumulate count.
    pub computation: u64,
}

impl ComplexityBundle {
    pub fn new(memory: f64, parameters: u64, computation: u64) -> Self {
        Self {
            memory,
            parameters,
            computation,
        }
    }
}

impl fmt::Display for ComplexityBundle {
    /// Three unit-suffixed lines: `M=…B`, `P=…`, `C=…MACC`.
    ///
    /// Memory is truncated toward zero before formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "M={}B", to_metric_string(self.memory as u128))?;
        writeln!(f, "P={}", to_metric_string(u128::from(self.parameters)))?;
        writeln!(f, "C={}MACC", to_metric_string(u128::from(self.computation)))
    }
}
