//! A Mamdani-style fuzzy inference core.
//!
//! Linguistic variables partition a numeric axis into overlapping triangular
//! fuzzy sets; rules combine set memberships with min (fuzzy AND), aggregate
//! per-consequent with max, and a discretized centroid turns the aggregated
//! shape back into a crisp number.
//!
//! 一个 Mamdani 风格的模糊推理核心。
//!
//! 语言变量将数值轴划分为相互重叠的三角模糊集；规则以 min（模糊与）组合集合隶属度，
//! 按结论集以 max 聚合，最后用离散化质心把聚合形状还原为清晰数值。

pub mod engine;
pub mod output;
pub mod set;
pub mod variable;


pub use engine::{InferenceEngine, Rule};
pub use output::OutputVariable;
pub use set::FuzzySet;
pub use variable::LinguisticVariable;

/// Fuzzy AND: the minimum of two membership degrees.
/// 模糊与：两个隶属度中的较小者。
#[inline]
pub(crate) fn op_and(a: f64, b: f64) -> f64 {
    a.min(b)
}

/// Aggregation across rules sharing a consequent: the maximum.
/// 共享同一结论的规则之间的聚合：取较大者。
#[inline]
pub(crate) fn op_agg(a: f64, b: f64) -> f64 {
    a.max(b)
}
