use serde::Serialize;

/// How agents search for revisions. Only uniform random matching
/// exists today, so the value is carried through configuration and
/// reports without changing behavior.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    #[default]
    Random,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
        }
    }
}
