//! Sweeps and series extraction for comparison charts.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::report::bundle::ComplexityBundle;

/// Which complexity metric a chart displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Memory,
    Computation,
}

impl Metric {
    /// Extract this metric from a bundle.
    pub fn extract(&self, bundle: &ComplexityBundle) -> f64 {
        match self {
            Metric::Memory => bundle.memory,
            Metric::Computation => bundle.computation as f64,
        }
    }

    /// Axis label name.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Memory => "Memory",
            Metric::Computation => "Computation",
        }
    }

    /// Unit suffix for axis labels.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Memory => "B",
            Metric::Computation => "MACC",
        }
    }
}

/// SI scale applied to a series before display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    Unit,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

impl Scale {
    pub fn divisor(&self) -> f64 {
        match self {
            Scale::Unit => 1e0,
            Scale::Kilo => 1e3,
            Scale::Mega => 1e6,
            Scale::Giga => 1e9,
            Scale::Tera => 1e12,
            Scale::Peta => 1e15,
        }
    }

    /// Prefix for axis labels.
    pub fn prefix(&self) -> &'static str {
        match self {
            Scale::Unit => "",
            Scale::Kilo => "K",
            Scale::Mega => "M",
            Scale::Giga => "G",
            Scale::Tera => "T",
            Scale::Peta => "P",
        }
    }
}

/// Geometric sweep of input side lengths: `2^min_pow ..= 2^max_pow`.
pub fn side_lengths(min_pow: u32, max_pow: u32) -> Vec<u64> {
    (min_pow..=max_pow).map(|p| 1u64 << p).collect()
}

/// One metric evaluated for a factorized and a conventional design across
/// a sweep of input sides.
#[derive(Clone, Debug, Serialize)]
pub struct ComparisonSeries {
    /// Swept input side lengths; the spatial size fed to each formula is
    /// the square of a side.
    pub sides: Vec<u64>,

    /// Metric values for the factorized design.
    pub factorized: Array1<f64>,

    /// Metric values for the conventional design.
    pub conventional: Array1<f64>,

    /// The extracted metric.
    pub metric: Metric,
}

impl ComparisonSeries {
    /// Evaluate both designs at every side, extracting `metric`.
    pub fn sweep<F, C>(sides: &[u64], metric: Metric, factorized: F, conventional: C) -> Self
    where
        F: Fn(u64) -> ComplexityBundle,
        C: Fn(u64) -> ComplexityBundle,
    {
        let fs: Array1<f64> = sides
            .iter()
            .map(|&side| metric.extract(&factorized(side * side)))
            .collect();
        let cs: Array1<f64> = sides
            .iter()
            .map(|&side| metric.extract(&conventional(side * side)))
            .collect();
        Self {
            sides: sides.to_vec(),
            factorized: fs,
            conventional: cs,
            metric,
        }
    }

    /// Both series divided by an SI scale.
    pub fn scaled(&self, scale: Scale) -> Self {
        Self {
            sides: self.sides.clone(),
            factorized: &self.factorized / scale.divisor(),
            conventional: &self.conventional / scale.divisor(),
            metric: self.metric,
        }
    }

    /// Number of swept sizes.
    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    /// Smallest value across both series.
    pub fn min_value(&self) -> f64 {
        self.factorized
            .iter()
            .chain(self.conventional.iter())
            .fold(f64::INFINITY, |acc, &v| acc.min(v))
    }

    /// Largest value across both series.
    pub fn max_value(&self) -> f64 {
        self.factorized
            .iter()
            .chain(self.conventional.iter())
            .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v))
    }
}
