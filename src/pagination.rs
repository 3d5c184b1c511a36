//! Scroll-driven loading of older feed pages.
//!
//! A zero-height sentinel is painted at the oldest edge of a feed. Each frame
//! the feed view mounts it, reports how much of it is inside the scroll
//! viewport, and the controller turns threshold crossings into visibility
//! entries. An entry requests one more page, but only while the feed reports
//! `CanLoadMore`; the feed status is the only guard against duplicate
//! requests.
//!
//! Observations are released as soon as the sentinel stops being painted
//! (see [`PaginationController::end_frame`]) or is replaced by a sentinel
//! with a different key, so a detached feed never asks for more pages.
//!
//! A scroll viewport only reports the sentinel's true position once its
//! offset has settled. [`ScrollAnchor`] tracks that: it holds sampling back
//! on the first painted frame (before the view has snapped to the newest
//! message) and on frames where older rows were inserted above the visible
//! ones, and hands the view the offset correction that keeps those rows
//! still.

use tracing::debug;

use crate::model::{FeedStatus, MessageId};

/// Fraction of the sentinel that must be inside the viewport.
pub const VISIBILITY_THRESHOLD: f32 = 1.0;

/// Identity of a painted sentinel.
///
/// The key changes whenever the oldest loaded message changes, which makes
/// a freshly prepended page count as a replaced sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SentinelKey {
    scope: String,
    oldest: Option<MessageId>,
}

impl SentinelKey {
    pub fn new(scope: impl Into<String>, oldest: Option<&MessageId>) -> Self {
        Self {
            scope: scope.into(),
            oldest: oldest.cloned(),
        }
    }
}

/// Handle for one mounted sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObservationId(u64);

/// Delivered when the sentinel crosses the visibility threshold, and once
/// when an observation starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityEntry {
    pub fully_visible: bool,
}

#[derive(Debug)]
struct Observation {
    id: ObservationId,
    key: SentinelKey,
    fully_visible: Option<bool>,
    mounted_this_frame: bool,
}

/// Owns at most one observation for a single feed.
#[derive(Debug, Default)]
pub struct PaginationController {
    active: Option<Observation>,
    next_id: u64,
    loads_requested: u64,
}

impl PaginationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a frame. Sentinels not mounted again before
    /// [`end_frame`](Self::end_frame) are considered unmounted.
    pub fn begin_frame(&mut self) {
        if let Some(observation) = self.active.as_mut() {
            observation.mounted_this_frame = false;
        }
    }

    /// Mount the sentinel for this frame.
    ///
    /// Mounting the same key again keeps the existing observation; a new key
    /// releases it and starts a fresh one.
    pub fn mount(&mut self, key: SentinelKey) -> ObservationId {
        if let Some(observation) = self.active.as_mut() {
            if observation.key == key {
                observation.mounted_this_frame = true;
                return observation.id;
            }
        }

        self.release();
        let id = ObservationId(self.next_id);
        self.next_id += 1;
        debug!(?key, id = id.0, "observing pagination sentinel");
        self.active = Some(Observation {
            id,
            key,
            fully_visible: None,
            mounted_this_frame: true,
        });
        id
    }

    /// Release the observation if `id` is still the active one.
    #[cfg(test)]
    pub fn unmount(&mut self, id: ObservationId) -> bool {
        if self.active.as_ref().is_some_and(|o| o.id == id) {
            self.release();
            true
        } else {
            false
        }
    }

    /// Release whatever is being observed.
    pub fn release(&mut self) {
        if let Some(observation) = self.active.take() {
            debug!(id = observation.id.0, "released pagination sentinel");
        }
    }

    /// Finish a frame, releasing the observation if its sentinel was not
    /// painted.
    pub fn end_frame(&mut self) {
        if self.active.as_ref().is_some_and(|o| !o.mounted_this_frame) {
            self.release();
        }
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.active.is_some()
    }

    /// Number of `load_more` calls issued over the controller's lifetime.
    #[cfg(test)]
    pub fn loads_requested(&self) -> u64 {
        self.loads_requested
    }

    /// Feed the sentinel's visible fraction for this frame.
    ///
    /// Returns an entry on the first sample of an observation and on every
    /// threshold crossing. Stale handles yield nothing.
    pub fn observe(&mut self, id: ObservationId, visible_ratio: f32) -> Option<VisibilityEntry> {
        let observation = self.active.as_mut().filter(|o| o.id == id)?;
        let fully_visible = visible_ratio >= VISIBILITY_THRESHOLD;
        if observation.fully_visible == Some(fully_visible) {
            return None;
        }
        observation.fully_visible = Some(fully_visible);
        Some(VisibilityEntry { fully_visible })
    }

    /// Decide whether an entry should load another page.
    pub fn should_load(entry: VisibilityEntry, status: FeedStatus) -> bool {
        entry.fully_visible && status.can_load_more()
    }

    /// Observe and, when warranted, call `load_more` once.
    ///
    /// Returns whether `load_more` was called.
    pub fn sample(
        &mut self,
        id: ObservationId,
        visible_ratio: f32,
        status: FeedStatus,
        load_more: impl FnOnce(),
    ) -> bool {
        let Some(entry) = self.observe(id, visible_ratio) else {
            return false;
        };
        if !Self::should_load(entry, status) {
            return false;
        }
        self.loads_requested += 1;
        debug!(
            id = id.0,
            total = self.loads_requested,
            "sentinel fully visible, loading older messages"
        );
        load_more();
        true
    }
}

/// Moves below this many points are layout noise, not inserted rows.
const ANCHOR_TOLERANCE: f32 = 0.5;

/// Scroll bookkeeping for one painted feed.
///
/// Positions are in content coordinates: distance from the top of the
/// scrollable content, independent of the current offset.
#[derive(Debug, Default)]
pub struct ScrollAnchor {
    painted_frames: u64,
    /// Topmost message row of the last frame and where it was painted
    top_row: Option<(MessageId, f32)>,
    /// Offset to force on the next frame
    correction: Option<f32>,
}

impl ScrollAnchor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The row whose position is compared against the last frame.
    pub fn tracked(&self) -> Option<&MessageId> {
        self.top_row.as_ref().map(|(id, _)| id)
    }

    /// Offset the viewport must be moved to before painting, if rows were
    /// inserted above the visible ones last frame.
    pub fn take_correction(&mut self) -> Option<f32> {
        self.correction.take()
    }

    /// Finish a painted frame.
    ///
    /// `tracked_top` is where the [`tracked`](Self::tracked) row was painted
    /// this frame and `top_row` is this frame's topmost row. `offset` is the
    /// offset the viewport carries into the next frame and `max_offset` the
    /// largest one the current content allows. Returns whether this frame
    /// was painted at a settled position, so that its sentinel sample
    /// describes what the user actually sees.
    pub fn end_frame(
        &mut self,
        tracked_top: Option<f32>,
        top_row: Option<(MessageId, f32)>,
        offset: f32,
        max_offset: f32,
    ) -> bool {
        let first = self.painted_frames == 0;
        self.painted_frames += 1;

        let moved = match (&self.top_row, tracked_top) {
            (Some((_, before)), Some(now)) => now - before,
            _ => 0.0,
        };
        self.top_row = top_row;

        if moved.abs() > ANCHOR_TOLERANCE {
            debug!(moved, "rows inserted above the viewport, holding position");
            self.correction = Some((offset + moved).clamp(0.0, max_offset.max(0.0)));
            return false;
        }
        !first
    }
}
