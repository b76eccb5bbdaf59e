//! A fuzzy-inference rate controller for a paced traffic source.
//! 用于配速流量源的模糊推理速率控制器。

use crate::config::Config;
use crate::controller::TrafficSource;
use crate::error::{Error, Result};
use crate::feedback::{FeedbackReceiver, FeedbackSample};
use crate::fuzzy::InferenceEngine;
use crate::tuning;
use std::time::Duration;
use tracing::{debug, trace};

/// Microseconds per second. Feedback delays arrive in seconds while the
/// reference tuning tables are denominated in microseconds; the conversion
/// happens here, at the controller boundary, never inside the engine.
///
/// 每秒的微秒数。反馈延迟以秒为单位到达，而参考调优表以微秒计；
/// 换算在控制器边界完成，绝不发生在引擎内部。
const MICROS_PER_SEC: f64 = 1_000_000.0;

/// The state of the rate controller.
/// 速率控制器的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// No feedback has arrived yet.
    /// 尚未收到任何反馈。
    Idle,
    /// At least one sample has been processed.
    /// 已处理至少一个样本。
    Active,
}

/// A rate controller that turns `(drops, delay)` feedback into a new
/// inter-packet send interval.
///
/// Each feedback sample triggers at most one inference pass, processed
/// synchronously and to completion before the next sample. Instances share
/// no state; independent flows may each run their own controller in parallel
/// without locking.
///
/// 将 `(丢包, 延迟)` 反馈转化为新的包间发送间隔的速率控制器。
///
/// 每个反馈样本至多触发一次推理，同步处理并在下一个样本之前完成。
/// 实例之间不共享状态；相互独立的流可以各自并行运行控制器而无需加锁。
#[derive(Debug)]
pub struct RateController {
    engine: InferenceEngine,

    pub(crate) state: State,

    /// Drops reported by the previous sample.
    pub(crate) previous_drops: u64,

    /// Delay reported by the previous sample.
    pub(crate) previous_delay: Duration,

    /// The smallest delay seen in any completed sample, once one exists.
    pub(crate) minimum_delay: Option<Duration>,

    pub(crate) current_interval: Duration,

    config: Config,
}

impl RateController {
    /// Creates a controller driven by the reference tuning tables.
    /// 创建由参考调优表驱动的控制器。
    pub fn new(config: Config) -> Result<Self> {
        let engine = tuning::reference_engine(&config.engine)?;
        Self::with_engine(engine, config)
    }

    /// Creates a controller around a custom engine, for tunings other than
    /// the reference tables.
    ///
    /// The engine must carry at least one rule; an empty rule base is a
    /// setup fault and is rejected here so it can never surface mid-flight.
    ///
    /// 基于自定义引擎创建控制器，用于参考表以外的调优。
    ///
    /// 引擎必须携带至少一条规则；空规则库属于设置错误，在此处拒绝，
    /// 以免在运行途中才暴露。
    pub fn with_engine(engine: InferenceEngine, config: Config) -> Result<Self> {
        if engine.rules().is_empty() {
            return Err(Error::EngineNotConfigured);
        }
        Ok(Self {
            engine,
            state: State::Idle,
            previous_drops: 0,
            previous_delay: Duration::ZERO,
            minimum_delay: None,
            current_interval: config.pacing.initial_interval,
            config,
        })
    }

    /// The interval currently in force.
    /// 当前生效的间隔。
    pub fn current_interval(&self) -> Duration {
        self.current_interval
    }

    /// The smallest delay observed so far, if any sample has completed.
    /// 迄今观测到的最小延迟（若已有样本完成）。
    pub fn minimum_delay(&self) -> Option<Duration> {
        self.minimum_delay
    }

    /// Processes one feedback sample and returns the interval to apply to
    /// the next scheduled send.
    ///
    /// 处理一个反馈样本，并返回应用于下一次计划发送的间隔。
    pub fn on_sample(&mut self, sample: FeedbackSample) -> Duration {
        if self.state == State::Active {
            // The running minimum trails the feedback by one sample: it is
            // fed from the previous delay, not the one just received.
            match self.minimum_delay {
                Some(min) if self.previous_delay >= min => {}
                _ => self.minimum_delay = Some(self.previous_delay),
            }
        }

        let new_interval = if self.config.pacing.enable_fuzzy {
            self.fuzzy_interval(sample)
        } else {
            self.aimd_interval(sample)
        };

        debug!(
            drops = sample.drops,
            delay = ?sample.delay,
            minimum_delay = ?self.minimum_delay,
            old_interval = ?self.current_interval,
            ?new_interval,
            "feedback sample processed"
        );

        self.previous_drops = sample.drops;
        self.previous_delay = sample.delay;
        self.state = State::Active;
        self.current_interval = new_interval;

        new_interval
    }

    /// Runs one inference pass. Inputs cross the seconds/microseconds
    /// boundary here in both directions.
    ///
    /// 执行一趟推理。输入在此处双向跨越秒/微秒边界。
    fn fuzzy_interval(&mut self, sample: FeedbackSample) -> Duration {
        let delay_us = sample.delay.as_secs_f64() * MICROS_PER_SEC;

        match self.engine.evaluate(sample.drops as f64, delay_us) {
            Ok(interval_us) => Duration::from_secs_f64(interval_us / MICROS_PER_SEC),
            Err(Error::UndefinedResult) => {
                // No rule fired for this sample; hold the previous interval
                // rather than emit an undefined value.
                debug!(
                    drops = sample.drops,
                    delay = ?sample.delay,
                    interval = ?self.current_interval,
                    "no rule fired, holding previous interval"
                );
                self.current_interval
            }
            Err(err) => {
                // Configuration faults are caught at construction; a rule
                // validated by add_rule cannot reference an unknown set.
                unreachable!("engine evaluation failed after setup: {err}")
            }
        }
    }

    /// The multiplicative fallback used when fuzzy control is disabled:
    /// speed up on a loss-free sample, slow down otherwise.
    ///
    /// 模糊控制禁用时使用的乘性回退策略：无丢包则提速，否则降速。
    fn aimd_interval(&mut self, sample: FeedbackSample) -> Duration {
        let factor = if sample.drops == 0 {
            trace!(interval = ?self.current_interval, "no drops, speeding up");
            self.config.pacing.aimd_decrease_factor
        } else {
            trace!(
                drops = sample.drops,
                interval = ?self.current_interval,
                "drops observed, slowing down"
            );
            self.config.pacing.aimd_increase_factor
        };
        self.current_interval.mul_f64(factor)
    }

    /// Drives this controller from a feedback channel, publishing every new
    /// interval to the traffic source.
    ///
    /// Samples are consumed strictly in order, one inference pass at a time.
    /// Returns when the feedback channel closes.
    ///
    /// 由反馈通道驱动本控制器，将每个新间隔发布给流量源。
    ///
    /// 样本严格按序消费，一次一趟推理。反馈通道关闭时返回。
    pub async fn run<S: TrafficSource>(mut self, mut feedback: FeedbackReceiver, source: &mut S) {
        while let Some(sample) = feedback.recv().await {
            let interval = self.on_sample(sample);
            source.set_interval(interval).await;
        }
        debug!("feedback channel closed, controller stopping");
    }
}
