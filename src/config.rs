/// Tunable limits for a single [`crate::board::Board`]'s solve run.
///
/// Mirrors the teacher's `new`/`new_defaults` constructor pair rather than reaching for an
/// env/file configuration crate: these are in-memory solver parameters, not deployment
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// The default enumeration pruner refuses to brute-force a group of cells whose combined
    /// candidate-count product exceeds this bound.
    pub max_assignment_product: u64,
    /// Bifurcation gives up with [`crate::error::SolveError::NoBifurcationsLeft`] past this
    /// recursion depth.
    pub max_bifurcation_level: u32
}

impl SolverConfig {
    pub fn new(max_assignment_product: u64, max_bifurcation_level: u32) -> SolverConfig {
        SolverConfig {
            max_assignment_product,
            max_bifurcation_level
        }
    }

    pub fn new_defaults() -> SolverConfig {
        SolverConfig {
            max_assignment_product: 10_000,
            max_bifurcation_level: 8
        }
    }
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig::new_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = SolverConfig::default();
        assert!(config.max_assignment_product > 0);
        assert!(config.max_bifurcation_level > 0);
    }
}
