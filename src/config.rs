//! 定义了推理引擎和调速器的可配置参数。
//! Defines configurable parameters for the inference engine and the pacer.

use std::time::Duration;

/// A structure containing all configurable parameters for a pacing controller.
///
/// 包含调速控制器所有可配置参数的结构体。
#[derive(Debug, Clone)]
pub struct Config {
    /// Inference engine-related parameters.
    /// 推理引擎相关参数。
    pub engine: EngineConfig,

    /// Rate controller-related parameters.
    /// 速率控制器相关参数。
    pub pacing: PacingConfig,
}

/// Inference engine-related parameters.
///
/// 推理引擎相关参数。
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The increment used when scanning the output universe during centroid
    /// defuzzification. A smaller step gives a finer centroid at a cost that
    /// grows linearly with the width of the output range.
    ///
    /// 质心去模糊化扫描输出论域时使用的增量。步长越小质心越精细，
    /// 代价随输出范围宽度线性增长。
    pub defuzz_step: f64,
}

/// Rate controller-related parameters.
///
/// 速率控制器相关参数。
#[derive(Debug, Clone)]
pub struct PacingConfig {
    /// Whether the fuzzy inference engine drives the send interval. When
    /// disabled the controller falls back to the multiplicative policy below.
    /// 是否由模糊推理引擎驱动发送间隔。禁用时控制器回退到下面的乘性策略。
    pub enable_fuzzy: bool,

    /// The send interval used before any feedback has arrived.
    /// 收到任何反馈之前使用的发送间隔。
    pub initial_interval: Duration,

    /// Multiplier applied to the interval on a loss-free feedback sample when
    /// fuzzy control is disabled.
    /// 模糊控制禁用时，无丢包反馈样本对间隔应用的乘数。
    pub aimd_decrease_factor: f64,

    /// Multiplier applied to the interval on a lossy feedback sample when
    /// fuzzy control is disabled.
    /// 模糊控制禁用时，有丢包反馈样本对间隔应用的乘数。
    pub aimd_increase_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Must not exceed 1.0, or narrow sets near the low end of the
            // output range would be skipped over entirely.
            defuzz_step: 1.0,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enable_fuzzy: true,
            initial_interval: Duration::from_millis(10),
            aimd_decrease_factor: 0.75,
            aimd_increase_factor: 2.0,
        }
    }
}
