//! Full transformer layers built on the FA / CA attention blocks.
//!
//! A layer adds the input/output projections and feed-forward arithmetic
//! (the `6c·s` and `5c²·s` terms) on top of its attention block. Unlike the
//! block-level formulas, an unset value width follows the basis width here,
//! not half the channel count.

use crate::blocks::geometry::Geometry;
use crate::config::BYTES_PER_ELEMENT;
use crate::report::bundle::ComplexityBundle;

/// Complexities for a factorized transformer layer stack.
pub fn fa_tfm(g: &Geometry) -> ComplexityBundle {
    let (c, s, l) = (g.channels, g.spatial, g.layers);
    let b = g.resolved_basis();
    let m = g.value_channels.unwrap_or(b);
    let h = g.resolved_heads(b);
    let elements = ((2 * b + 2 * m + 6 * c) * s) as f64 + (b * m) as f64 / h as f64;
    let memory = l as f64 * (elements * BYTES_PER_ELEMENT as f64);
    let parameters = l * (2 * b * c + 2 * m * c + 2 * c * c);
    let computation = l * ((4 * b * c + 4 * m * c + 4 * b * m + 5 * c * c) * s);
    ComplexityBundle::new(memory, parameters, computation)
}

/// Complexities for a conventional transformer layer stack.
pub fn ca_tfm(g: &Geometry) -> ComplexityBundle {
    let (c, s, l) = (g.channels, g.spatial, g.layers);
    let k = g.resolved_basis();
    let m = g.value_channels.unwrap_or(k);
    let h = g.resolved_heads(k);
    let memory = l * (((2 * k + 2 * m + 6 * c) * s + h * s * s) * BYTES_PER_ELEMENT);
    let parameters = l * (2 * k * c + 2 * m * c + 2 * c * c);
    let computation = l * ((4 * k * c + 4 * m * c + 5 * c * c) * s + (2 * k + 2 * m) * s * s);
    ComplexityBundle::new(memory as f64, parameters, computation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fa_tfm_defaults() {
        // c=4096, s=512, b=1024, m follows b, h=16, l=1
        let out = fa_tfm(&Geometry::transformer());
        // ((2048 + 2048 + 24576)·512 + 1024²/16) * 4
        assert_eq!(out.memory, 58_982_400.0);
        // 2·1024·4096 + 2·1024·4096 + 2·4096²
        assert_eq!(out.parameters, 50_331_648);
        // (4·1024·4096·2 + 4·1024² + 5·4096²) * 512
        assert_eq!(out.computation, 62_277_025_792);
    }

    #[test]
    fn test_ca_tfm_defaults() {
        let out = ca_tfm(&Geometry::transformer());
        // ((2048 + 2048 + 24576)·512 + 16·512²) * 4
        assert_eq!(out.memory, 75_497_472.0);
        assert_eq!(out.parameters, 50_331_648);
        // (4·1024·4096·2 + 5·4096²)·512 + (2·1024 + 2·1024)·512²
        assert_eq!(out.computation, 61_203_283_968);
    }

    #[test]
    fn test_value_width_follows_basis() {
        let followed = fa_tfm(&Geometry::transformer().with_basis(512));
        let pinned = fa_tfm(&Geometry::transformer().with_basis(512).with_value_channels(512));
        assert_eq!(followed, pinned);

        let overridden = fa_tfm(&Geometry::transformer().with_basis(512).with_value_channels(256));
        assert_ne!(followed, overridden);
    }

    #[test]
    fn test_layers_multiply_all_metrics() {
        let one = ca_tfm(&Geometry::transformer());
        let stack = ca_tfm(&Geometry::transformer().with_layers(24));
        assert_eq!(stack.memory, 24.0 * one.memory);
        assert_eq!(stack.parameters, 24 * one.parameters);
        assert_eq!(stack.computation, 24 * one.computation);
    }

    #[test]
    fn test_factorized_saves_memory_at_long_sequences() {
        let g = Geometry::transformer().with_spatial(8192);
        assert!(fa_tfm(&g).memory < ca_tfm(&g).memory);
    }
}
