//! The reference congestion-control tuning tables, as plain data.
//!
//! The variable ranges, set breakpoints, and the 12-rule table live here as
//! `const` tables rather than branches inside the controller, so they can be
//! unit-tested independently of any engine or controller instance.
//!
//! 参考拥塞控制调优表，以纯数据形式存在。
//!
//! 变量范围、集合断点和 12 条规则表以 `const` 表的形式保存在这里，
//! 而不是作为控制器内部的分支，因此可以独立于引擎或控制器实例进行单元测试。

use crate::config::EngineConfig;
use crate::error::Result;
use crate::fuzzy::{InferenceEngine, LinguisticVariable, OutputVariable};

/// Breakpoints of one triangular set.
/// 单个三角集合的断点。
#[derive(Debug, Clone, Copy)]
pub struct SetSpec {
    /// Set name, unique within its variable.
    pub name: &'static str,
    pub left: f64,
    pub peak: f64,
    pub right: f64,
}

/// One variable of the reference tuning: its universe and its sets.
/// 参考调优中的一个变量：其论域及其集合。
#[derive(Debug, Clone, Copy)]
pub struct VariableSpec {
    /// Variable name.
    pub name: &'static str,
    /// Lower bound of the universe.
    pub min: f64,
    /// Upper bound of the universe.
    pub max: f64,
    /// The sets partitioning the universe.
    pub sets: &'static [SetSpec],
}

/// One row of the rule table: `(loss set, delay set) -> interval set`.
/// 规则表中的一行：`(丢包集合, 延迟集合) -> 间隔集合`。
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    /// Antecedent on the loss variable.
    pub loss: &'static str,
    /// Antecedent on the delay variable.
    pub delay: &'static str,
    /// Consequent on the interval variable.
    pub interval: &'static str,
}

/// Packet drops observed since the previous feedback sample.
/// 自上一个反馈样本以来观测到的丢包数。
pub const LOSS: VariableSpec = VariableSpec {
    name: "drops",
    min: 0.0,
    max: 100_000.0,
    sets: &[
        SetSpec {
            name: "small loss",
            left: -1000.0,
            peak: 0.0,
            right: 1000.0,
        },
        SetSpec {
            name: "medium loss",
            left: 1000.0,
            peak: 2000.0,
            right: 3000.0,
        },
        SetSpec {
            name: "high loss",
            left: 3000.0,
            peak: 100_000.0,
            right: 150_000.0,
        },
    ],
};

/// One-way delay of the last feedback sample, in microseconds.
/// 最近一个反馈样本的单向延迟，单位为微秒。
pub const DELAY: VariableSpec = VariableSpec {
    name: "delay",
    min: 0.0,
    max: 5_000_000.0,
    sets: &[
        SetSpec {
            name: "small delay",
            left: -1000.0,
            peak: 35.0,
            right: 1000.0,
        },
        SetSpec {
            name: "medium delay",
            left: 1000.0,
            peak: 50_000.0,
            right: 100_000.0,
        },
        SetSpec {
            name: "medium high delay",
            left: 80_000.0,
            peak: 200_000.0,
            right: 350_000.0,
        },
        SetSpec {
            name: "high delay",
            left: 300_000.0,
            peak: 5_000_000.0,
            right: 6_000_000.0,
        },
    ],
};

/// The inter-packet send interval, in microseconds. A small interval is a
/// high send rate, so the set names are rate levels.
/// 包间发送间隔，单位为微秒。间隔小即发送速率高，因此集合以速率档位命名。
pub const INTERVAL: VariableSpec = VariableSpec {
    name: "interval",
    min: 10.0,
    max: 1_000_000.0,
    sets: &[
        SetSpec {
            name: "very high rate",
            left: -100.0,
            peak: 50.0,
            right: 500.0,
        },
        SetSpec {
            name: "high rate",
            left: 250.0,
            peak: 5000.0,
            right: 10_000.0,
        },
        SetSpec {
            name: "medium rate",
            left: 5000.0,
            peak: 100_000.0,
            right: 250_000.0,
        },
        SetSpec {
            name: "low rate",
            left: 200_000.0,
            peak: 500_000.0,
            right: 700_000.0,
        },
        SetSpec {
            name: "very low rate",
            left: 600_000.0,
            peak: 800_000.0,
            right: 1_100_000.0,
        },
    ],
};

/// The rule table: 3 loss levels crossed with 4 delay levels.
/// 规则表：3 个丢包档位与 4 个延迟档位的组合。
pub const RULES: &[RuleSpec] = &[
    RuleSpec { loss: "small loss", delay: "small delay", interval: "very high rate" },
    RuleSpec { loss: "small loss", delay: "medium delay", interval: "high rate" },
    RuleSpec { loss: "small loss", delay: "medium high delay", interval: "medium rate" },
    RuleSpec { loss: "small loss", delay: "high delay", interval: "low rate" },
    RuleSpec { loss: "medium loss", delay: "small delay", interval: "high rate" },
    RuleSpec { loss: "medium loss", delay: "medium delay", interval: "medium rate" },
    RuleSpec { loss: "medium loss", delay: "medium high delay", interval: "low rate" },
    RuleSpec { loss: "medium loss", delay: "high delay", interval: "very low rate" },
    RuleSpec { loss: "high loss", delay: "small delay", interval: "medium rate" },
    RuleSpec { loss: "high loss", delay: "medium delay", interval: "low rate" },
    RuleSpec { loss: "high loss", delay: "medium high delay", interval: "very low rate" },
    RuleSpec { loss: "high loss", delay: "high delay", interval: "very low rate" },
];

/// Builds a linguistic variable from a table entry.
/// 根据表项构建语言变量。
pub fn build_input(spec: &VariableSpec) -> Result<LinguisticVariable> {
    let mut var = LinguisticVariable::new(spec.name, spec.min, spec.max)?;
    for set in spec.sets {
        var.add_set(set.name, set.left, set.peak, set.right)?;
    }
    Ok(var)
}

/// Builds an output variable from a table entry.
/// 根据表项构建输出变量。
pub fn build_output(spec: &VariableSpec) -> Result<OutputVariable> {
    let mut var = OutputVariable::new(spec.name, spec.min, spec.max)?;
    for set in spec.sets {
        var.add_set(set.name, set.left, set.peak, set.right)?;
    }
    Ok(var)
}

/// Builds the reference inference engine: loss and delay in, interval out,
/// with the full 12-rule table loaded.
///
/// 构建参考推理引擎：输入为丢包和延迟，输出为间隔，并加载完整的 12 条规则表。
pub fn reference_engine(config: &EngineConfig) -> Result<InferenceEngine> {
    let loss = build_input(&LOSS)?;
    let delay = build_input(&DELAY)?;
    let interval = build_output(&INTERVAL)?;

    let mut engine = InferenceEngine::new(loss, delay, interval, config)?;
    for rule in RULES {
        engine.add_rule(rule.loss, rule.delay, rule.interval)?;
    }
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_three_loss_by_four_delay_levels() {
        assert_eq!(LOSS.sets.len(), 3);
        assert_eq!(DELAY.sets.len(), 4);
        assert_eq!(INTERVAL.sets.len(), 5);
        assert_eq!(RULES.len(), 12);

        // Every (loss, delay) pair appears exactly once.
        for loss in LOSS.sets {
            for delay in DELAY.sets {
                let hits = RULES
                    .iter()
                    .filter(|r| r.loss == loss.name && r.delay == delay.name)
                    .count();
                assert_eq!(hits, 1, "pair ({}, {})", loss.name, delay.name);
            }
        }
    }

    #[test]
    fn test_every_rule_name_resolves_against_the_variables() {
        // add_rule validates all three names; building must succeed.
        let engine = reference_engine(&EngineConfig::default()).unwrap();
        assert_eq!(engine.rules().len(), 12);
        assert_eq!(engine.input1().set_count(), 3);
        assert_eq!(engine.input2().set_count(), 4);
        assert_eq!(engine.output().variable().set_count(), 5);
    }

    #[test]
    fn test_set_breakpoints_are_ordered() {
        for var in [&LOSS, &DELAY, &INTERVAL] {
            assert!(var.min < var.max);
            for set in var.sets {
                assert!(set.left <= set.peak && set.peak <= set.right, "{}", set.name);
            }
        }
    }

    #[test]
    fn test_clean_network_lands_in_the_high_rate_region() {
        let mut engine = reference_engine(&EngineConfig::default()).unwrap();
        // Zero drops, 100 us delay: the engine must ask for a small interval.
        let interval_us = engine.evaluate(0.0, 100.0).unwrap();
        assert!(interval_us < 1000.0, "got {interval_us}");
    }

    #[test]
    fn test_congested_network_lands_in_the_low_rate_region() {
        let mut engine = reference_engine(&EngineConfig::default()).unwrap();
        // 50k drops, 4 s delay: the engine must back far off.
        let interval_us = engine.evaluate(50_000.0, 4_000_000.0).unwrap();
        assert!(interval_us > 500_000.0, "got {interval_us}");
    }

    #[test]
    fn test_centroid_is_not_sensitive_to_tiny_input_changes() {
        let mut engine = reference_engine(&EngineConfig::default()).unwrap();
        let at_zero = engine.evaluate(0.0, 0.0).unwrap();
        let near_zero = engine.evaluate(0.0, 1.0).unwrap();
        assert!(
            (at_zero - near_zero).abs() < 50.0,
            "{at_zero} vs {near_zero}"
        );
    }

    #[test]
    fn test_reference_engine_is_deterministic() {
        let mut a = reference_engine(&EngineConfig::default()).unwrap();
        let mut b = reference_engine(&EngineConfig::default()).unwrap();
        for (drops, delay_us) in [(0.0, 100.0), (1500.0, 60_000.0), (80_000.0, 250_000.0)] {
            let first = a.evaluate(drops, delay_us).unwrap();
            let again = a.evaluate(drops, delay_us).unwrap();
            assert_eq!(first, again);
            assert_eq!(first, b.evaluate(drops, delay_us).unwrap());
        }
    }

    #[test]
    fn test_delay_gap_between_sets_has_zero_mass() {
        let mut engine = reference_engine(&EngineConfig::default()).unwrap();
        // Exactly 1000 us sits on the shared boundary where "small delay"
        // and "medium delay" both evaluate to zero, so no rule fires.
        assert_eq!(
            engine.evaluate(0.0, 1000.0),
            Err(crate::error::Error::UndefinedResult)
        );
    }

    #[test]
    fn test_finer_step_stays_close_to_the_unit_step_centroid() {
        let mut coarse = reference_engine(&EngineConfig { defuzz_step: 1.0 }).unwrap();
        let mut fine = reference_engine(&EngineConfig { defuzz_step: 0.5 }).unwrap();
        let a = coarse.evaluate(1500.0, 60_000.0).unwrap();
        let b = fine.evaluate(1500.0, 60_000.0).unwrap();
        assert!((a - b).abs() < 100.0, "{a} vs {b}");
    }
}

