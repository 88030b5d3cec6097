use std::fmt;

use thiserror::Error;

/// Caller-visible configuration problems reported through [`SearchStats`].
///
/// These are recoverable conditions, not failures of the search itself: the
/// engine returns an absent path and records which precondition was missing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("start cell is not defined")]
    MissingStart,
    #[error("goal cell is not defined")]
    MissingGoal,
}

/// Parameters the invoked engine ran with, kept with the counters so a
/// result row is self-describing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlgorithmParams {
    Beam { width: usize },
    DynamicWeighted { epsilon: f64, max_depth: f64 },
}

/// Counters and metrics produced as a side channel of one search invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    pub nodes_expanded: usize,
    pub nodes_generated: usize,
    /// Number of cells in the returned path, 0 when no path was found.
    pub path_length: usize,
    /// Accumulated traversal cost of the returned path, 0 when absent.
    pub path_cost: f64,
    pub params: AlgorithmParams,
    pub error: Option<SearchError>,
}

impl SearchStats {
    pub fn new(params: AlgorithmParams) -> Self {
        SearchStats {
            nodes_expanded: 0,
            nodes_generated: 0,
            path_length: 0,
            path_cost: 0.0,
            params,
            error: None,
        }
    }

    pub fn failed(params: AlgorithmParams, error: SearchError) -> Self {
        let mut stats = Self::new(params);
        stats.error = Some(error);
        stats
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.params {
            AlgorithmParams::Beam { width } => {
                writeln!(f, "Beam Search Statistics:")?;
                writeln!(f, "Beam width: {}", width)?;
            }
            AlgorithmParams::DynamicWeighted { epsilon, max_depth } => {
                writeln!(f, "Dynamic Weighted A* Statistics:")?;
                writeln!(f, "Epsilon: {}", epsilon)?;
                writeln!(f, "Estimated max depth: {}", max_depth)?;
            }
        }
        writeln!(f, "Nodes expanded: {}", self.nodes_expanded)?;
        writeln!(f, "Nodes generated: {}", self.nodes_generated)?;
        writeln!(f, "Path length: {}", self.path_length)?;
        writeln!(f, "Path cost: {}", self.path_cost)?;
        if let Some(error) = self.error {
            writeln!(f, "Error: {}", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_stats_carry_the_error_and_zero_counters() {
        let stats = SearchStats::failed(
            AlgorithmParams::Beam { width: 3 },
            SearchError::MissingGoal,
        );
        assert_eq!(stats.error, Some(SearchError::MissingGoal));
        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(stats.nodes_generated, 0);
        assert_eq!(stats.path_length, 0);
    }

    #[test]
    fn display_includes_parameters() {
        let stats = SearchStats::new(AlgorithmParams::DynamicWeighted {
            epsilon: 1.5,
            max_depth: 12.0,
        });
        let text = stats.to_string();
        assert!(text.contains("Epsilon: 1.5"));
        assert!(text.contains("Nodes expanded: 0"));
    }
}
