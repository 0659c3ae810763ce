/// Configuration for the exhaustive search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop generating candidates once this many nodes were built.
    /// `None` searches the whole space.
    pub node_budget: Option<u64>,
}

impl SolverConfig {
    pub fn with_node_budget(node_budget: u64) -> Self {
        Self {
            node_budget: Some(node_budget),
        }
    }
}
