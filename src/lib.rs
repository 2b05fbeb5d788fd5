//! # HEADCOUNT
//!
//! Closed-form complexity estimates for attention-style network blocks.
//!
//! Every design is summarised by three scalars — activation memory in
//! bytes, learnable parameter count, and multiply-accumulate cost —
//! computed from its hyperparameters alone. Two families are compared:
//!
//! 1. **FA** — factorized attention: attention routed through a small set
//!    of basis channels, linear in the input size
//! 2. **CA** — conventional attention: an explicit s×s attention matrix,
//!    quadratic in the input size
//!
//! plus plain and bottleneck residual baselines, multi-head variants, and
//! full transformer layers.
//!
//! The [`chart`] module sweeps input sizes and renders Factorized vs
//! Conventional comparisons to a PNG.

pub mod blocks;
pub mod chart;
pub mod report;

/// Default hyperparameters shared by the formula catalogue.
pub mod config {
    /// Default input channel count for block-level estimates.
    pub const CHANNELS: u64 = 64;

    /// Default spatiotemporal input size for block-level estimates (64×64).
    pub const SPATIAL: u64 = 64 * 64;

    /// Default channel count for transformer-level estimates.
    pub const TFM_CHANNELS: u64 = 4096;

    /// Default sequence length for transformer-level estimates.
    pub const TFM_SPATIAL: u64 = 512;

    /// Default basis / key dimensionality for transformer-level estimates.
    pub const TFM_BASIS: u64 = 1024;

    /// Default head count for transformer-level estimates.
    pub const TFM_HEADS: u64 = 16;

    /// Default transformer layer count.
    pub const TFM_LAYERS: u64 = 1;

    /// Basis channels per head when the head count is derived.
    pub const HEAD_CHANNELS: u64 = 64;

    /// Bytes per stored element (float32 activations).
    pub const BYTES_PER_ELEMENT: u64 = 4;
}

/// Argument glossary and formula catalogue, printed by the CLI's `--list`.
pub fn usage() -> &'static str {
    USAGE
}

const USAGE: &str = "\
Closed-form complexity estimates for attention-style blocks.

Geometry arguments:
    basis (b):          basis dimensionality (FA) or key channel count (CA)
    value_channels (m): channel count of the value projection
    channels (c):       channel count of the input
    spatial (s):        spatiotemporal size of the input
    heads (h):          number of heads
    layers (l):         layer count (transformer formulas)

Unset basis and value_channels default to channels / 2 (transformer value
widths follow the basis instead); an unset head count gives each head 64
basis channels, with at least one head.

Formula catalogue:
    res_block       plain residual block
    res_block_bot   bottleneck residual block
    fa_dot          factorized dot-product attention
    ca_dot          conventional dot-product attention
    fa_bot          factorized bottleneck attention
    ca_bot          conventional bottleneck attention
    fa_multi        multi-head factorized attention
    ca_multi        multi-head conventional attention
    fa_tfm          factorized transformer layer
    ca_tfm          conventional transformer layer
";
