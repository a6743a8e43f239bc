/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding evolution.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The best fitness of a generation met the configured fitness threshold.
    ThresholdMet,

    /// The iteration limit was met before the fitness threshold, and the best valuation seen is reported.
    ///
    /// Not an error --- as the fitness threshold may be unreachable, the limit is the guarantee evolution concludes.
    IterationsExhausted,

    /// The time limit was passed before the fitness threshold.
    TimeUp,

    /// The context has no conclusion to report, for some reason.
    ///
    /// Evolution may not have taken place, or may have been terminated by a callback.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration
            | ContextState::Input
            | ContextState::Populated
            | ContextState::Evolving => Self::Unknown,

            ContextState::Concluded(report) => report,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThresholdMet => write!(f, "ThresholdMet"),
            Self::IterationsExhausted => write!(f, "IterationsExhausted"),
            Self::TimeUp => write!(f, "TimeUp"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
