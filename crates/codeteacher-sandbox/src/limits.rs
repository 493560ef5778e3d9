//! Runtime limits for snippet execution.

use boa_engine::Context;
use codeteacher_core::config::TerminalConfig;
use serde::{Deserialize, Serialize};

/// Engine limits applied to every run of an executor.
///
/// With no limits set a snippet that never terminates blocks the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionLimits {
    /// Maximum iterations of any single loop.
    #[serde(default)]
    pub loop_iteration_limit: Option<u64>,

    /// Maximum call depth.
    #[serde(default)]
    pub recursion_limit: Option<usize>,
}

impl ExecutionLimits {
    /// Create limits with nothing bounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to set the loop iteration limit.
    pub fn with_loop_iterations(mut self, limit: u64) -> Self {
        self.loop_iteration_limit = Some(limit);
        self
    }

    /// Builder-style method to set the recursion limit.
    pub fn with_recursion(mut self, limit: usize) -> Self {
        self.recursion_limit = Some(limit);
        self
    }

    /// Whether either limit is set.
    pub fn is_bounded(&self) -> bool {
        self.loop_iteration_limit.is_some() || self.recursion_limit.is_some()
    }

    pub(crate) fn apply(&self, context: &mut Context) {
        let runtime = context.runtime_limits_mut();
        if let Some(limit) = self.loop_iteration_limit {
            runtime.set_loop_iteration_limit(limit);
        }
        if let Some(limit) = self.recursion_limit {
            runtime.set_recursion_limit(limit);
        }
    }
}

impl From<&TerminalConfig> for ExecutionLimits {
    fn from(config: &TerminalConfig) -> Self {
        Self {
            loop_iteration_limit: config.loop_iteration_limit,
            recursion_limit: config.recursion_limit,
        }
    }
}
