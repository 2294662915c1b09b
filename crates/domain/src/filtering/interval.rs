// crates/domain/src/filtering/interval.rs
use leadlens_shared_kernel::{DomainError, DomainResult, Timestamp};

/// Closed range of instants, inclusive on both ends.
///
/// `contains` is the only membership comparison in the codebase; every date
/// filter goes through it so the boundary behaviour cannot drift between
/// call sites. Once built an interval is immutable and may be shared across
/// concurrent filter invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: Timestamp,
    end: Timestamp,
}

impl Interval {
    /// # Errors
    /// Fails with [`DomainError::InvalidInterval`] when the bounds are inverted.
    pub fn new(start: Timestamp, end: Timestamp) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::InvalidInterval {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Membership test for the closed range; both bounds are members.
    #[inline]
    #[must_use]
    pub fn contains(&self, t: Timestamp) -> bool {
        self.start <= t && t <= self.end
    }
}
