//! An output variable: a linguistic variable plus per-set activation levels.
//! 输出变量：语言变量加逐集合的激活水平。

use crate::error::Result;
use crate::fuzzy::variable::LinguisticVariable;
use crate::fuzzy::{op_agg, op_and};

/// A linguistic variable that additionally accumulates, for every set, the
/// clipped firing level of the current inference pass.
///
/// Composition rather than a subclass: the variable handles shapes, the
/// accumulator handles one pass. Activations are reset at the start of every
/// evaluation and never persist across calls.
///
/// 在语言变量之上为每个集合累积当前推理过程的截断触发水平。
///
/// 采用组合而非子类：变量负责形状，累加器负责单次推理。
/// 激活值在每次求值开始时重置，绝不跨调用保留。
#[derive(Debug, Clone)]
pub struct OutputVariable {
    inner: LinguisticVariable,
    /// Activation levels, index-aligned with the inner variable's sets.
    /// 激活水平，与内部变量的集合按下标对齐。
    activations: Vec<f64>,
}

impl OutputVariable {
    /// Creates a new output variable over the universe `[min, max]`.
    /// 在论域 `[min, max]` 上创建一个新的输出变量。
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Result<Self> {
        Ok(Self {
            inner: LinguisticVariable::new(name, min, max)?,
            activations: Vec::new(),
        })
    }

    /// Registers a triangular set and initializes its activation to zero.
    /// 注册一个三角集合并将其激活值初始化为零。
    pub fn add_set(
        &mut self,
        name: impl Into<String>,
        left: f64,
        peak: f64,
        right: f64,
    ) -> Result<()> {
        self.inner.add_set(name, left, peak, right)?;
        self.activations.push(0.0);
        Ok(())
    }

    /// Access to the underlying linguistic variable.
    pub fn variable(&self) -> &LinguisticVariable {
        &self.inner
    }

    /// Resets the activation of one set to zero.
    /// 将单个集合的激活值重置为零。
    pub fn reset_set(&mut self, set_name: &str) -> Result<()> {
        self.set_activation(set_name, 0.0)
    }

    /// Resets every activation to zero.
    /// 将所有激活值重置为零。
    pub fn reset(&mut self) {
        for a in &mut self.activations {
            *a = 0.0;
        }
    }

    /// The Mamdani min-implication: the set's membership at `value`,
    /// truncated at the set's current activation level.
    ///
    /// Mamdani 最小蕴含：集合在 `value` 处的隶属度，按该集合当前激活水平截断。
    pub fn clipped_membership(&self, set_name: &str, value: f64) -> Result<f64> {
        let idx = self.inner.index_of(set_name)?;
        let membership = self.inner.membership(set_name, value)?;
        Ok(op_and(self.activations[idx], membership))
    }

    /// Returns the current activation level of the named set.
    /// 返回指定集合当前的激活水平。
    pub fn activation(&self, set_name: &str) -> Result<f64> {
        let idx = self.inner.index_of(set_name)?;
        Ok(self.activations[idx])
    }

    /// Overwrites the activation level of the named set.
    /// 覆盖指定集合的激活水平。
    pub fn set_activation(&mut self, set_name: &str, value: f64) -> Result<()> {
        let idx = self.inner.index_of(set_name)?;
        self.activations[idx] = value;
        Ok(())
    }

    /// The largest clipped membership at `value` across all sets: one sample
    /// point of the aggregated output shape. Zero outside the universe.
    ///
    /// `value` 处所有集合截断隶属度的最大值，即聚合输出形状的一个采样点。
    /// 论域之外为零。
    pub(crate) fn aggregated_membership(&self, value: f64) -> f64 {
        if value < self.inner.min() || value > self.inner.max() {
            return 0.0;
        }
        self.inner
            .sets()
            .iter()
            .zip(&self.activations)
            .map(|(set, activation)| op_and(*activation, set.membership(value)))
            .fold(0.0, op_agg)
    }

    /// Raises the activation of the named set to `strength` if that is higher
    /// (max-aggregation across rules sharing a consequent).
    ///
    /// 若 `strength` 更高，则将指定集合的激活水平提升到该值
    /// （共享结论的规则之间的 max 聚合）。
    pub(crate) fn aggregate(&mut self, set_name: &str, strength: f64) -> Result<()> {
        let idx = self.inner.index_of(set_name)?;
        self.activations[idx] = op_agg(self.activations[idx], strength);
        Ok(())
    }
}
