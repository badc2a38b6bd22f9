//! Filters for the `/v1/checkpoints` endpoint.

use url::Url;

use crate::types::Point;

/// A checkpoint query directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointsFilter {
    /// A recent sampling of checkpoints. Same as passing no filter.
    Recent,
    /// Only the most recent checkpoint.
    Latest,
    /// The checkpoint at, or closest before, a slot.
    BySlot(u64),
}

impl CheckpointsFilter {
    /// Apply this directive to an accumulator.
    pub fn apply(self, options: &mut CheckpointsOptions) {
        match self {
            CheckpointsFilter::Recent => {}
            CheckpointsFilter::Latest => options.latest = true,
            CheckpointsFilter::BySlot(slot) => {
                options.singular = true;
                options.slot = Some(slot);
            }
        }
    }
}

/// Accumulated state for one checkpoints query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckpointsOptions {
    /// The response is a single object instead of a list.
    pub singular: bool,
    /// Slot appended to the path.
    pub slot: Option<u64>,
    /// Keep only the first point of the response.
    pub latest: bool,
}

impl CheckpointsOptions {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(mut self) -> Self {
        CheckpointsFilter::Latest.apply(&mut self);
        self
    }

    pub fn by_slot(mut self, slot: u64) -> Self {
        CheckpointsFilter::BySlot(slot).apply(&mut self);
        self
    }

    /// Append the slot segment, if any, to `url`.
    pub fn apply_to(&self, url: &mut Url) {
        if let Some(slot) = self.slot {
            let path = format!("{}/{}", url.path().trim_end_matches('/'), slot);
            url.set_path(&path);
        }
    }

    /// Post-process decoded points.
    pub fn finish(&self, mut points: Vec<Point>) -> Vec<Point> {
        if self.latest {
            points.truncate(1);
        }
        points
    }
}

impl FromIterator<CheckpointsFilter> for CheckpointsOptions {
    fn from_iter<I: IntoIterator<Item = CheckpointsFilter>>(iter: I) -> Self {
        let mut options = CheckpointsOptions::new();
        for filter in iter {
            filter.apply(&mut options);
        }
        options
    }
}
