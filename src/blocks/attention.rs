//! FA / CA attention blocks.
//!
//! Factorized (FA) blocks route attention through `b` basis channels, so
//! their working set grows linearly with the input size. Conventional (CA)
//! blocks materialise an explicit `s × s` attention matrix, paying a
//! quadratic memory and computation term instead.

use crate::blocks::geometry::Geometry;
use crate::config::BYTES_PER_ELEMENT;
use crate::report::bundle::ComplexityBundle;

/// Complexities for factorized dot-product attention.
pub fn fa_dot(g: &Geometry) -> ComplexityBundle {
    let (c, s) = (g.channels, g.spatial);
    let b = g.resolved_basis();
    let memory = ((2 * b + 3 * c) * s + b * c) * BYTES_PER_ELEMENT;
    let parameters = 2 * b * c + c * c;
    let computation = (8 * b * c + 2 * c * c) * s;
    ComplexityBundle::new(memory as f64, parameters, computation)
}

/// Complexities for conventional dot-product attention.
pub fn ca_dot(g: &Geometry) -> ComplexityBundle {
    let (c, s) = (g.channels, g.spatial);
    let k = g.resolved_basis();
    let memory = ((2 * k + 3 * c) * s + s * s) * BYTES_PER_ELEMENT;
    let parameters = 2 * k * c + c * c;
    let computation = (2 * k * c + c * c) * s + (2 * k + 2 * c) * s * s;
    ComplexityBundle::new(memory as f64, parameters, computation)
}

/// Complexities for factorized bottleneck attention.
pub fn fa_bot(g: &Geometry) -> ComplexityBundle {
    let (c, s) = (g.channels, g.spatial);
    let b = g.resolved_basis();
    let m = g.resolved_value_channels();
    let memory = ((2 * b + 2 * m + 2 * c) * s + b * m) * BYTES_PER_ELEMENT;
    let parameters = 2 * b * c + c * c;
    let computation = (4 * b * c + 4 * m * c + 4 * b * m) * s;
    ComplexityBundle::new(memory as f64, parameters, computation)
}

/// Complexities for conventional bottleneck attention.
pub fn ca_bot(g: &Geometry) -> ComplexityBundle {
    let (c, s) = (g.channels, g.spatial);
    let k = g.resolved_basis();
    let m = g.resolved_value_channels();
    let memory = ((2 * k + 2 * m + 2 * c) * s + s * s) * BYTES_PER_ELEMENT;
    let parameters = 2 * k * c + c * c;
    let computation = (4 * k * c + 4 * m * c) * s + (2 * k + 2 * m) * s * s;
    ComplexityBundle::new(memory as f64, parameters, computation)
}

/// Complexities for multi-head factorized attention.
///
/// Splitting the basis across `h` heads shrinks only the attention-weight
/// buffer (`b·m / h`); projections and arithmetic are unchanged.
pub fn fa_multi(g: &Geometry) -> ComplexityBundle {
    let (c, s) = (g.channels, g.spatial);
    let b = g.resolved_basis();
    let m = g.resolved_value_channels();
    let h = g.resolved_heads(b);
    let elements = ((2 * b + 2 * m + 2 * c) * s) as f64 + (b * m) as f64 / h as f64;
    let memory = elements * BYTES_PER_ELEMENT as f64;
    let parameters = 2 * b * c + 2 * m * c;
    let computation = (4 * b * c + 4 * m * c + 4 * b * m) * s;
    ComplexityBundle::new(memory, parameters, computation)
}

/// Complexities for multi-head conventional attention.
///
/// Every head materialises its own `s × s` attention matrix.
pub fn ca_multi(g: &Geometry) -> ComplexityBundle {
    let (c, s) = (g.channels, g.spatial);
    let k = g.resolved_basis();
    let m = g.resolved_value_channels();
    let h = g.resolved_heads(k);
    let memory = ((2 * k + 2 * m + 2 * c) * s + h * s * s) * BYTES_PER_ELEMENT;
    let parameters = 2 * k * c + 2 * m * c;
    let computation = (4 * k * c + 4 * m * c) * s + (2 * k + 2 * m) * s * s;
    ComplexityBundle::new(memory as f64, parameters, computation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fa_dot_defaults() {
        // b defaults to 32
        let out = fa_dot(&Geometry::default());
        // ((2·32 + 3·64)·4096 + 32·64) * 4
        assert_eq!(out.memory, 4_202_496.0);
        // 2·32·64 + 64²
        assert_eq!(out.parameters, 8_192);
        // (8·32·64 + 2·64²) * 4096
        assert_eq!(out.computation, 100_663_296);
    }

    #[test]
    fn test_ca_dot_defaults() {
        let out = ca_dot(&Geometry::default());
        // ((2·32 + 3·64)·4096 + 4096²) * 4
        assert_eq!(out.memory, 71_303_168.0);
        assert_eq!(out.parameters, 8_192);
        // (2·32·64 + 64²)·4096 + (2·32 + 2·64)·4096²
        assert_eq!(out.computation, 3_254_779_904);
    }

    #[test]
    fn test_fa_bot_defaults() {
        let out = fa_bot(&Geometry::default());
        // ((64 + 64 + 128)·4096 + 32·32) * 4
        assert_eq!(out.memory, 4_198_400.0);
        assert_eq!(out.parameters, 8_192);
        // (4·32·64 + 4·32·64 + 4·32²) * 4096
        assert_eq!(out.computation, 83_886_080);
    }

    #[test]
    fn test_ca_bot_defaults() {
        let out = ca_bot(&Geometry::default());
        assert_eq!(out.memory, 71_303_168.0);
        assert_eq!(out.parameters, 8_192);
        // (4·32·64 + 4·32·64)·4096 + (2·32 + 2·32)·4096²
        assert_eq!(out.computation, 2_214_592_512);
    }

    #[test]
    fn test_fa_multi_defaults() {
        // b = m = 32, derived h = max(32/64, 1) = 1
        let out = fa_multi(&Geometry::default());
        assert_eq!(out.memory, 4_198_400.0);
        // projections double: 2·32·64 + 2·32·64
        assert_eq!(out.parameters, 8_192);
        assert_eq!(out.computation, 83_886_080);
    }

    #[test]
    fn test_fa_multi_heads_touch_only_memory() {
        let one_head = fa_multi(&Geometry::default().with_heads(1));
        let four_heads = fa_multi(&Geometry::default().with_heads(4));
        // (2·32 + 2·32 + 2·64)·4096 + 32·32/4, times 4 bytes
        assert_eq!(four_heads.memory, 4_195_328.0);
        assert!(four_heads.memory < one_head.memory);
        assert_eq!(four_heads.parameters, one_head.parameters);
        assert_eq!(four_heads.computation, one_head.computation);
    }

    #[test]
    fn test_fa_multi_fractional_weight_buffer() {
        // 32·32 weights over 3 heads do not divide evenly
        let out = fa_multi(&Geometry::default().with_heads(3));
        let expected = (256.0 * 4096.0 + 1024.0 / 3.0) * 4.0;
        assert!((out.memory - expected).abs() < 1e-6);
    }

    #[test]
    fn test_ca_multi_defaults() {
        let out = ca_multi(&Geometry::default());
        // derived h = 1: one full s×s attention matrix
        assert_eq!(out.memory, 71_303_168.0);
        assert_eq!(out.parameters, 8_192);
        assert_eq!(out.computation, 2_214_592_512);
    }

    #[test]
    fn test_ca_multi_heads_grow_memory() {
        let one_head = ca_multi(&Geometry::default().with_heads(1));
        let four_heads = ca_multi(&Geometry::default().with_heads(4));
        assert!(four_heads.memory > one_head.memory);
        assert_eq!(four_heads.parameters, one_head.parameters);
        assert_eq!(four_heads.computation, one_head.computation);
    }

    #[test]
    fn test_factorized_beats_conventional_on_large_inputs() {
        let g = Geometry::default().with_spatial(256 * 256);
        assert!(fa_dot(&g).memory < ca_dot(&g).memory);
        assert!(fa_dot(&g).computation < ca_dot(&g).computation);
    }
}
