//! A named triangular fuzzy set over the real line.
//! 实数轴上的命名三角模糊集。

/// A triangular fuzzy set defined by three breakpoints, `left <= peak <= right`.
///
/// Membership is zero outside `[left, right]`, one exactly at `peak`, and
/// linear on either slope.
///
/// 由三个断点定义的三角模糊集，`left <= peak <= right`。
/// 隶属度在 `[left, right]` 之外为零，恰在 `peak` 处为一，两侧斜坡上线性变化。
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzySet {
    /// Name of the set, unique within its variable.
    /// 集合名，在其变量内唯一。
    pub(crate) name: String,
    pub(crate) left: f64,
    pub(crate) peak: f64,
    pub(crate) right: f64,
}

impl FuzzySet {
    pub(crate) fn new(name: String, left: f64, peak: f64, right: f64) -> Self {
        Self {
            name,
            left,
            peak,
            right,
        }
    }

    /// Returns the name of this set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Computes the triangular membership degree of `value` in this set.
    ///
    /// A zero-width slope (`left == peak` or `peak == right`) behaves as a
    /// step: membership is 1 at `peak` itself and 0 past the boundary, with
    /// no division by zero.
    ///
    /// 计算 `value` 在本集合中的三角隶属度。
    ///
    /// 零宽斜坡（`left == peak` 或 `peak == right`）表现为阶跃：
    /// 在 `peak` 处隶属度为 1，越过边界为 0，不会发生除零。
    pub fn membership(&self, value: f64) -> f64 {
        if value < self.left || value > self.right {
            // Out of the set
            return 0.0;
        }

        if value < self.peak {
            // Rising slope. `value < peak` together with `value >= left`
            // guarantees a non-degenerate slope here, but guard anyway.
            if self.peak == self.left {
                1.0
            } else {
                (value - self.left) / (self.peak - self.left)
            }
        } else if self.right == self.peak {
            // Degenerate falling side: value can only be peak itself.
            1.0
        } else {
            // Falling slope.
            (self.right - value) / (self.right - self.peak)
        }
    }
}
