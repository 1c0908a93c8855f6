use std::fmt;

/// Identity of a host drawable surface. Opaque to the bridge; only compared for equality.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SurfaceId(pub u64);

impl From<u64> for SurfaceId {
    #[inline]
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Most recent surface transition, tracked independently of the lifecycle phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SurfaceState {
    #[default]
    Absent,
    Created(SurfaceId),
    Changed(SurfaceId, SurfaceSize),
}

impl SurfaceState {
    #[inline]
    pub fn is_live(self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Identity of the live surface, if any.
    #[inline]
    pub fn identity(self) -> Option<SurfaceId> {
        match self {
            Self::Absent => None,
            Self::Created(id) | Self::Changed(id, _) => Some(id),
        }
    }
}
