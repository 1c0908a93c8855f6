use std::fmt;

/// Host lifecycle phase of the native context.
///
/// `Resumed <-> Paused` may cycle any number of times; `Destroyed` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LifecyclePhase {
    Created,
    Resumed,
    Paused,
    Destroyed,
}

impl LifecyclePhase {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Resumed => "resumed",
            Self::Paused => "paused",
            Self::Destroyed => "destroyed",
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
