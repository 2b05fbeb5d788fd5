//! Block geometry — the hyperparameter record every formula consumes.
//!
//! Optional fields resolve to derived defaults before a formula body runs:
//! an unset basis or value width is half the input channels, an unset head
//! count gives each head `HEAD_CHANNELS` basis channels.

use serde::{Deserialize, Serialize};

use crate::config::{
    CHANNELS, HEAD_CHANNELS, SPATIAL, TFM_BASIS, TFM_CHANNELS, TFM_HEADS, TFM_LAYERS, TFM_SPATIAL,
};

/// Architecture hyperparameters for one complexity estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    /// Input channel count (`c`).
    pub channels: u64,

    /// Spatiotemporal input size (`s`) — pixels for vision blocks, tokens
    /// for transformer layers.
    pub spatial: u64,

    /// Basis dimensionality (`b`) for factorized blocks, key channel count
    /// (`k`) for conventional ones.
    pub basis: Option<u64>,

    /// Value channel count (`m`).
    pub value_channels: Option<u64>,

    /// Head count (`h`).
    pub heads: Option<u64>,

    /// Layer count (`l`), consumed by the transformer formulas.
    pub layers: u64,
}

impl Default for Geometry {
    /// Block-level defaults: 64 channels over a 64×64 input.
    fn default() -> Self {
        Self {
            channels: CHANNELS,
            spatial: SPATIAL,
            basis: None,
            value_channels: None,
            heads: None,
            layers: 1,
        }
    }
}

impl Geometry {
    /// Transformer-level defaults: 4096 channels, 512 tokens, 1024 basis
    /// channels, 16 heads, a single layer.
    pub fn transformer() -> Self {
        Self {
            channels: TFM_CHANNELS,
            spatial: TFM_SPATIAL,
            basis: Some(TFM_BASIS),
            value_channels: None,
            heads: Some(TFM_HEADS),
            layers: TFM_LAYERS,
        }
    }

    pub fn with_channels(mut self, channels: u64) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_spatial(mut self, spatial: u64) -> Self {
        self.spatial = spatial;
        self
    }

    pub fn with_basis(mut self, basis: u64) -> Self {
        self.basis = Some(basis);
        self
    }

    pub fn with_value_channels(mut self, value_channels: u64) -> Self {
        self.value_channels = Some(value_channels);
        self
    }

    pub fn with_heads(mut self, heads: u64) -> Self {
        self.heads = Some(heads);
        self
    }

    pub fn with_layers(mut self, layers: u64) -> Self {
        self.layers = layers;
        self
    }

    /// Resolved basis / key dimensionality: `b` (or `k`), else `c / 2`.
    pub fn resolved_basis(&self) -> u64 {
        self.basis.unwrap_or(self.channels / 2)
    }

    /// Resolved value channel count: `m`, else `c / 2`.
    pub fn resolved_value_channels(&self) -> u64 {
        self.value_channels.unwrap_or(self.channels / 2)
    }

    /// Resolved head count for the given basis width: `h`, else one head
    /// per `HEAD_CHANNELS` basis channels (at least one).
    pub fn resolved_heads(&self, basis: u64) -> u64 {
        self.heads.unwrap_or_else(|| (basis / HEAD_CHANNELS).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_defaults() {
        let g = Geometry::default();
        assert_eq!(g.channels, 64);
        assert_eq!(g.spatial, 64 * 64);
        assert_eq!(g.layers, 1);
        assert_eq!(g.resolved_basis(), 32);
        assert_eq!(g.resolved_value_channels(), 32);
    }

    #[test]
    fn test_transformer_defaults() {
        let g = Geometry::transformer();
        assert_eq!(g.channels, 4096);
        assert_eq!(g.spatial, 512);
        assert_eq!(g.resolved_basis(), 1024);
        assert_eq!(g.resolved_heads(g.resolved_basis()), 16);
        assert_eq!(g.layers, 1);
    }

    #[test]
    fn test_derived_heads() {
        let g = Geometry::default();
        // 32 basis channels / 64 per head rounds down to zero — clamp to 1.
        assert_eq!(g.resolved_heads(32), 1);
        assert_eq!(g.resolved_heads(64), 1);
        assert_eq!(g.resolved_heads(1024), 16);
    }

    #[test]
    fn test_builders_override_derivation() {
        let g = Geometry::default()
            .with_channels(128)
            .with_basis(100)
            .with_value_channels(50)
            .with_heads(7);
        assert_eq!(g.resolved_basis(), 100);
        assert_eq!(g.resolved_value_channels(), 50);
        assert_eq!(g.resolved_heads(g.resolved_basis()), 7);
    }
}
