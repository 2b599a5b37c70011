/// Sizing knobs for a [`Graph`](crate::graph::Graph).
///
/// None of these change results, they only pre-size allocations.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Expected number of nodes reachable from a backward root.
    pub visited_capacity_hint: usize,
    /// Initial capacity of the per-pass arena.
    pub pass_capacity: usize,
    /// Initial capacity of the parameter arena.
    pub parameter_capacity: usize,
}

/// Bucket count the reference engine sized its visited table with.
pub const DEFAULT_VISITED_CAPACITY: usize = 150;

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            visited_capacity_hint: DEFAULT_VISITED_CAPACITY,
            pass_capacity: 0,
            parameter_capacity: 0,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visited_capacity(mut self, hint: usize) -> Self {
        self.visited_capacity_hint = hint;
        self
    }

    pub fn with_pass_capacity(mut self, capacity: usize) -> Self {
        self.pass_capacity = capacity;
        self
    }

    pub fn with_parameter_capacity(mut self, capacity: usize) -> Self {
        self.parameter_capacity = capacity;
        self
    }
}
