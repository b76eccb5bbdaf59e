//! Defines the rate controller and the traffic source interface it drives.
//! 定义了速率控制器及其驱动的流量源接口。

use async_trait::async_trait;
use std::time::Duration;

pub mod rate;

#[cfg(test)]
mod tests;

pub use rate::RateController;

/// The traffic source owning the actual send timer.
///
/// The controller only publishes intervals; the source applies each one to
/// its next scheduled transmission and never interrupts an in-flight timer.
///
/// 拥有实际发送定时器的流量源。
///
/// 控制器只发布间隔；源将每个间隔应用于下一次计划发送，绝不打断进行中的定时器。
#[async_trait]
pub trait TrafficSource: Send {
    /// Applies a new inter-packet send interval, effective for the next
    /// scheduled send.
    ///
    /// 应用新的包间发送间隔，于下一次计划发送时生效。
    async fn set_interval(&mut self, interval: Duration);
}
