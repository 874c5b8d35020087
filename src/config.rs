use serde::{Deserialize, Serialize};

use crate::substitute::{SubstituteRule, TieBreak};

/// Which spanning trees an enumeration produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Every spanning tree, in non-decreasing weight.
    #[default]
    All,
    /// Only the minimum spanning trees.
    Minimum,
}

impl Scope {
    pub(crate) fn rule(self) -> SubstituteRule {
        match self {
            Scope::All => SubstituteRule::Cheapest,
            Scope::Minimum => SubstituteRule::EqualWeight,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumeratorConfig {
    /// Stop after this many trees; unbounded if absent.
    pub limit: Option<usize>,
    pub scope: Scope,
    pub tie_break: TieBreak,
}

impl EnumeratorConfig {
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
