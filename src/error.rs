//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use thiserror::Error;

/// The primary error type for the fuzzy pacing library.
///
/// Everything except [`Error::UndefinedResult`] is a configuration fault:
/// fatal at setup time and never recoverable by retry.
///
/// 模糊调速库的主要错误类型。
///
/// 除 [`Error::UndefinedResult`] 外，其余均为配置错误：在设置阶段即为致命错误，重试无法恢复。
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A fuzzy set was declared with breakpoints that do not satisfy
    /// `left <= peak <= right`.
    /// 模糊集的断点不满足 `left <= peak <= right`。
    #[error("invalid fuzzy set '{name}': breakpoints must satisfy left <= peak <= right")]
    InvalidSetBounds {
        /// Name of the offending set.
        name: String,
    },

    /// A fuzzy set with the same name is already registered on the variable.
    /// 同名模糊集已在该变量上注册。
    #[error("fuzzy set '{name}' is already defined on variable '{variable}'")]
    DuplicateSet {
        /// Name of the offending set.
        name: String,
        /// Name of the variable it was added to.
        variable: String,
    },

    /// A set name was referenced that is not registered on the variable.
    /// 引用了未在该变量上注册的集合名。
    #[error("unknown fuzzy set '{name}' on variable '{variable}'")]
    UnknownSet {
        /// The unresolved set name.
        name: String,
        /// Name of the variable it was looked up on.
        variable: String,
    },

    /// A linguistic variable was declared with an empty or inverted range.
    /// 语言变量的取值范围为空或反向。
    #[error("invalid range for variable '{name}': min must be strictly below max")]
    InvalidRange {
        /// Name of the offending variable.
        name: String,
    },

    /// The defuzzification step must be a finite, strictly positive number.
    /// 去模糊化步长必须是有限且严格为正的数。
    #[error("defuzzification step {step} is not finite and strictly positive")]
    InvalidStep {
        /// The rejected step value.
        step: f64,
    },

    /// `evaluate` was called before at least one rule was configured.
    /// 在配置至少一条规则之前调用了 `evaluate`。
    #[error("inference engine has no rules configured")]
    EngineNotConfigured,

    /// No rule fired for the given inputs, so the centroid has zero mass and
    /// the crisp output is undefined. The caller decides the fallback policy.
    ///
    /// 给定输入下没有任何规则被触发，质心质量为零，清晰输出未定义。
    /// 回退策略由调用方决定。
    #[error("no rule fired: defuzzification mass is zero")]
    UndefinedResult,

    /// A feedback sample carried a malformed delay (negative or non-finite).
    /// 反馈样本携带了畸形的延迟值（负数或非有限数）。
    #[error("invalid feedback sample: delay {delay_secs} is negative or not finite")]
    InvalidSample {
        /// The rejected delay, in seconds.
        delay_secs: f64,
    },
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;
