//! Rule base and the Mamdani inference engine.
//! 规则库与 Mamdani 推理引擎。

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::fuzzy::op_and;
use crate::fuzzy::output::OutputVariable;
use crate::fuzzy::variable::LinguisticVariable;
use tracing::trace;

/// A single inference rule: (input-1 set AND input-2 set) implies output set.
///
/// 单条推理规则：（输入一集合 与 输入二集合）蕴含输出集合。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Set name on the first input variable.
    pub antecedent1: String,
    /// Set name on the second input variable.
    pub antecedent2: String,
    /// Set name on the output variable.
    pub consequent: String,
}

/// A Mamdani inference engine over two input variables and one output variable.
///
/// The engine owns its variables and rule base; the fuzzy-set definitions are
/// configured once at construction time and treated as immutable thereafter.
/// One call to [`evaluate`](Self::evaluate) is a single, bounded, CPU-only
/// pass: fire every rule, aggregate activations, defuzzify.
///
/// 作用于两个输入变量和一个输出变量的 Mamdani 推理引擎。
///
/// 引擎拥有其变量和规则库；模糊集定义在构造时一次性配置，此后视为不可变。
/// 一次 [`evaluate`](Self::evaluate) 调用是一趟有界的纯 CPU 计算：
/// 触发所有规则、聚合激活值、去模糊化。
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    input1: LinguisticVariable,
    input2: LinguisticVariable,
    output: OutputVariable,
    /// Rules fire in insertion order. Order does not change the result
    /// (min/max are commutative and associative) but keeps firing logs
    /// reproducible.
    rules: Vec<Rule>,
    defuzz_step: f64,
}

impl InferenceEngine {
    /// Creates an engine over the given variables.
    ///
    /// 基于给定变量创建引擎。
    pub fn new(
        input1: LinguisticVariable,
        input2: LinguisticVariable,
        output: OutputVariable,
        config: &EngineConfig,
    ) -> Result<Self> {
        let step = config.defuzz_step;
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidStep { step });
        }
        Ok(Self {
            input1,
            input2,
            output,
            rules: Vec::new(),
            defuzz_step: step,
        })
    }

    /// Appends a rule to the rule base.
    ///
    /// All three set names are resolved against the variables immediately;
    /// a dangling name is a setup fault, not a runtime one.
    ///
    /// 向规则库追加一条规则。
    ///
    /// 三个集合名会立即在各变量上解析；悬空名称属于设置错误而非运行时错误。
    pub fn add_rule(
        &mut self,
        antecedent1: impl Into<String>,
        antecedent2: impl Into<String>,
        consequent: impl Into<String>,
    ) -> Result<()> {
        let rule = Rule {
            antecedent1: antecedent1.into(),
            antecedent2: antecedent2.into(),
            consequent: consequent.into(),
        };
        self.input1.contains_set(&rule.antecedent1)?;
        self.input2.contains_set(&rule.antecedent2)?;
        self.output.variable().contains_set(&rule.consequent)?;
        self.rules.push(rule);
        Ok(())
    }

    /// The first input variable.
    pub fn input1(&self) -> &LinguisticVariable {
        &self.input1
    }

    /// The second input variable.
    pub fn input2(&self) -> &LinguisticVariable {
        &self.input2
    }

    /// The output variable.
    pub fn output(&self) -> &OutputVariable {
        &self.output
    }

    /// The configured rules, in firing order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs one full inference pass for the crisp inputs `(x1, x2)`.
    ///
    /// Returns [`Error::EngineNotConfigured`] if no rule has been added, and
    /// [`Error::UndefinedResult`] if no rule fires for these inputs (the
    /// aggregated output shape has zero mass, so no centroid exists). The
    /// result is otherwise clamped to the output universe; it is never NaN.
    ///
    /// 对清晰输入 `(x1, x2)` 执行一趟完整推理。
    ///
    /// 若尚未添加任何规则则返回 [`Error::EngineNotConfigured`]；
    /// 若这些输入未触发任何规则（聚合输出形状质量为零，不存在质心），
    /// 则返回 [`Error::UndefinedResult`]。否则结果被钳制在输出论域内，绝不为 NaN。
    pub fn evaluate(&mut self, x1: f64, x2: f64) -> Result<f64> {
        if self.rules.is_empty() {
            return Err(Error::EngineNotConfigured);
        }

        self.output.reset();

        for rule in &self.rules {
            let m1 = self.input1.membership(&rule.antecedent1, x1)?;
            let m2 = self.input2.membership(&rule.antecedent2, x2)?;
            let strength = op_and(m1, m2);
            trace!(
                antecedent1 = %rule.antecedent1,
                antecedent2 = %rule.antecedent2,
                consequent = %rule.consequent,
                strength,
                "rule fired"
            );
            self.output.aggregate(&rule.consequent, strength)?;
        }

        self.defuzzify()
    }

    /// Discretized centroid over the output universe `[min, max)`.
    /// 输出论域 `[min, max)` 上的离散化质心。
    fn defuzzify(&self) -> Result<f64> {
        let out = self.output.variable();
        let min = out.min();
        let max = out.max();

        let mut weighted_sum = 0.0;
        let mut mass = 0.0;

        let mut i = min;
        while i < max {
            let u = self.output.aggregated_membership(i);
            weighted_sum += u * i;
            mass += u;
            i += self.defuzz_step;
        }

        if mass == 0.0 {
            return Err(Error::UndefinedResult);
        }

        Ok((weighted_sum / mass).clamp(min, max))
    }
}
