use std::time::Duration;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of every generation of a run, the initial population included.
    pub total_generations: usize,

    /// A count of every evaluation of the fitness of a member of a population.
    pub total_evaluations: usize,

    /// A count of every recombination of a pair of parents.
    pub total_recombinations: usize,

    /// A count of every value flipped during mutation.
    pub total_flips: usize,

    /// A count of every candidate rejected during selection.
    pub total_rejections: usize,

    /// The time taken during evolution.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_generations: 0,
            total_evaluations: 0,
            total_recombinations: 0,
            total_flips: 0,
            total_rejections: 0,

            time: Duration::from_secs(0),
        }
    }
}
