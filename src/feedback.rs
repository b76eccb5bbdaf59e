//! The feedback boundary: validated samples and the channel carrying them.
//! 反馈边界：经过校验的样本及承载它们的通道。

use crate::error::{Error, Result};
use std::time::Duration;
use tokio::sync::mpsc;

/// One periodic feedback sample extracted from received packet headers.
///
/// Validation happens here, at the boundary: a sample that exists is always
/// well-formed, so the controller downstream never has to reject input.
///
/// 从收到的包头中提取的一个周期性反馈样本。
///
/// 校验在此边界完成：存在即合法，下游控制器永远不需要拒绝输入。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSample {
    /// Packets dropped since the previous sample.
    /// 自上一个样本以来丢弃的包数。
    pub drops: u64,
    /// One-way delay observed for the last received packet.
    /// 最近收到的包观测到的单向延迟。
    pub delay: Duration,
}

impl FeedbackSample {
    /// Creates a sample from an already-validated delay.
    /// 由已校验的延迟创建样本。
    pub fn new(drops: u64, delay: Duration) -> Self {
        Self { drops, delay }
    }

    /// Creates a sample from a delay measured in floating-point seconds,
    /// rejecting negative or non-finite values.
    ///
    /// 由以浮点秒计的延迟创建样本，拒绝负值或非有限值。
    pub fn from_secs(drops: u64, delay_secs: f64) -> Result<Self> {
        if !delay_secs.is_finite() || delay_secs < 0.0 {
            return Err(Error::InvalidSample { delay_secs });
        }
        Ok(Self {
            drops,
            delay: Duration::from_secs_f64(delay_secs),
        })
    }
}

/// The sending half of a feedback channel.
/// 反馈通道的发送端。
pub type FeedbackSender = mpsc::Sender<FeedbackSample>;

/// The receiving half of a feedback channel.
/// 反馈通道的接收端。
pub type FeedbackReceiver = mpsc::Receiver<FeedbackSample>;

/// Creates a bounded channel for delivering feedback samples to a controller.
///
/// Samples are processed strictly in order, one at a time; the bound applies
/// backpressure to a feedback source that outpaces the controller.
///
/// 创建用于向控制器投递反馈样本的有界通道。
///
/// 样本严格按序逐个处理；当反馈源快于控制器时，容量上限提供背压。
pub fn feedback_channel(capacity: usize) -> (FeedbackSender, FeedbackReceiver) {
    mpsc::channel(capacity)
}
