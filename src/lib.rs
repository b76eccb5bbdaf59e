#![deny(clippy::expect_used, clippy::unwrap_used)]

//! A Mamdani fuzzy inference engine driving a transport-layer rate controller.
//!
//! Feedback samples of recent packet loss and one-way delay are fuzzified
//! against reference tuning tables, combined by a 12-rule base, and
//! defuzzified into a new inter-packet send interval that the controller
//! publishes to a paced traffic source.
//!
//! 由 Mamdani 模糊推理引擎驱动的传输层速率控制器。
//!
//! 近期丢包和单向延迟的反馈样本依据参考调优表模糊化，经 12 条规则库组合后去模糊化，
//! 得到新的包间发送间隔，由控制器发布给配速的流量源。

pub mod config;
pub mod error;
pub mod feedback;

pub mod controller;
pub mod fuzzy;
pub mod tuning;
