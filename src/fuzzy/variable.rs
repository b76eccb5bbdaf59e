//! A linguistic variable: a named numeric axis partitioned into fuzzy sets.
//! 语言变量：被划分为若干模糊集的命名数值轴。

use crate::error::{Error, Result};
use crate::fuzzy::set::FuzzySet;

/// A named variable with a numeric universe `[min, max]` and a collection of
/// named triangular fuzzy sets.
///
/// Sets are stored in insertion order so that iteration, and therefore
/// rule-firing logs and defuzzification scans, are reproducible run to run.
///
/// 带有数值论域 `[min, max]` 和一组命名三角模糊集的命名变量。
///
/// 集合按插入顺序存储，使得迭代（以及规则触发日志和去模糊化扫描）每次运行均可复现。
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    name: String,
    min: f64,
    max: f64,
    sets: Vec<FuzzySet>,
}

impl LinguisticVariable {
    /// Creates a new variable over the universe `[min, max]`.
    ///
    /// 在论域 `[min, max]` 上创建一个新变量。
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Result<Self> {
        let name = name.into();
        if !(min < max) {
            return Err(Error::InvalidRange { name });
        }
        Ok(Self {
            name,
            min,
            max,
            sets: Vec::new(),
        })
    }

    /// Returns the name of this variable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lower bound of the universe.
    /// 论域下界。
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The upper bound of the universe.
    /// 论域上界。
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Registers a triangular set on this variable.
    ///
    /// The breakpoints may extend outside the universe; membership is clamped
    /// to zero there by [`membership`](Self::membership).
    ///
    /// 在此变量上注册一个三角集合。
    ///
    /// 断点可以超出论域；[`membership`](Self::membership) 会在论域外将隶属度钳制为零。
    pub fn add_set(
        &mut self,
        name: impl Into<String>,
        left: f64,
        peak: f64,
        right: f64,
    ) -> Result<()> {
        let name = name.into();
        if left > peak || peak > right {
            return Err(Error::InvalidSetBounds { name });
        }
        if self.sets.iter().any(|s| s.name() == name) {
            return Err(Error::DuplicateSet {
                name,
                variable: self.name.clone(),
            });
        }
        self.sets.push(FuzzySet::new(name, left, peak, right));
        Ok(())
    }

    /// Computes the membership degree of `value` in the named set.
    ///
    /// Returns 0 when `value` lies outside the variable's universe, even if
    /// the set's own support extends past it.
    ///
    /// 计算 `value` 在指定集合中的隶属度。
    ///
    /// 当 `value` 超出变量论域时返回 0，即使集合自身的支撑超出了论域。
    pub fn membership(&self, set_name: &str, value: f64) -> Result<f64> {
        let set = self.get(set_name)?;
        if value < self.min || value > self.max {
            // Out of scale
            return Ok(0.0);
        }
        Ok(set.membership(value))
    }

    /// Returns `Ok(())` if the named set exists on this variable.
    /// 若指定集合存在于此变量上则返回 `Ok(())`。
    pub fn contains_set(&self, set_name: &str) -> Result<()> {
        self.get(set_name).map(|_| ())
    }

    /// Iterates over the set names in insertion order.
    /// 按插入顺序迭代集合名。
    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|s| s.name())
    }

    /// The number of sets registered on this variable.
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    pub(crate) fn sets(&self) -> &[FuzzySet] {
        &self.sets
    }

    pub(crate) fn get(&self, set_name: &str) -> Result<&FuzzySet> {
        self.sets
            .iter()
            .find(|s| s.name() == set_name)
            .ok_or_else(|| Error::UnknownSet {
                name: set_name.to_string(),
                variable: self.name.clone(),
            })
    }

    pub(crate) fn index_of(&self, set_name: &str) -> Result<usize> {
        self.sets
            .iter()
            .position(|s| s.name() == set_name)
            .ok_or_else(|| Error::UnknownSet {
                name: set_name.to_string(),
                variable: self.name.clone(),
            })
    }
}
