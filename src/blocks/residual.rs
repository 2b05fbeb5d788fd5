//! Residual block baselines.
//!
//! Both blocks hold two 3×3 convolutions; the bottleneck variant squeezes
//! through `m` channels with 1×1 projections on either side.

use crate::blocks::geometry::Geometry;
use crate::config::BYTES_PER_ELEMENT;
use crate::report::bundle::ComplexityBundle;

/// Complexities for a plain residual block.
pub fn res_block(g: &Geometry) -> ComplexityBundle {
    let (c, s) = (g.channels, g.spatial);
    let memory = (5 * c * s) * BYTES_PER_ELEMENT;
    let parameters = 18 * c * c;
    let computation = 36 * c * c * s;
    ComplexityBundle::new(memory as f64, parameters, computation)
}

/// Complexities for a bottleneck residual block.
pub fn res_block_bot(g: &Geometry) -> ComplexityBundle {
    let (c, s) = (g.channels, g.spatial);
    let m = g.resolved_value_channels();
    let memory = ((4 * m + 3 * c) * s) * BYTES_PER_ELEMENT;
    let parameters = 2 * m * c + 9 * m * m;
    let computation = (18 * m * m + 4 * m * c) * s;
    ComplexityBundle::new(memory as f64, parameters, computation)
}
