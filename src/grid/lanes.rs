//! Greedy lane assignment for overlapping appointments (interval
//! partitioning): overlapping intervals get distinct horizontal lanes,
//! a freed lane is reused by the next interval that fits.

/// Lane placement for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneSlot {
    /// Zero-based lane within the day column.
    pub lane_index: usize,
    /// Width divisor for the card: lanes concurrently active during this
    /// interval, so a lone appointment after a crowded morning still gets
    /// the full column width.
    pub lane_count: usize,
}

/// Assign lanes to half-open `[start, end)` minute intervals.
///
/// Input must be sorted ascending by start (the bucketizer guarantees it);
/// intervals are expected pre-clamped so `end > start` always holds.
/// The greedy sweep reuses the lowest-indexed lane whose previous interval
/// has ended, which yields the minimum possible lane count for interval
/// graphs.
pub fn assign_lanes(intervals: &[(i32, i32)]) -> Vec<LaneSlot> {
    debug_assert!(intervals.windows(2).all(|w| w[0].0 <= w[1].0));

    // Lane end times, indexed by lane.
    let mut lane_ends: Vec<i32> = Vec::new();
    let mut lane_of: Vec<usize> = Vec::with_capacity(intervals.len());

    for &(start, end) in intervals {
        let lane = match lane_ends.iter().position(|&lane_end| lane_end <= start) {
            Some(free) => {
                lane_ends[free] = end;
                free
            }
            None => {
                lane_ends.push(end);
                lane_ends.len() - 1
            }
        };
        lane_of.push(lane);
    }

    // lane_count per interval: 1 + the highest lane among intervals that
    // intersect it (itself included), so cards in an overlap cluster share
    // the column while isolated cards keep full width.
    intervals
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            let max_lane = intervals
                .iter()
                .enumerate()
                .filter(|&(j, &(other_start, other_end))| {
                    j == i || (other_start < end && start < other_end)
                })
                .map(|(j, _)| lane_of[j])
                .max()
                .unwrap_or(0);
            LaneSlot {
                lane_index: lane_of[i],
                lane_count: max_lane + 1,
            }
        })
        .collect()
}

/// The largest number of intervals simultaneously active at any instant.
/// This is the lower bound the greedy assignment provably meets.
pub fn max_concurrency(intervals: &[(i32, i32)]) -> usize {
    intervals
        .iter()
        .map(|&(start, _)| {
            intervals
                .iter()
                .filter(|&&(s, e)| s <= start && start < e)
                .count()
        })
        .max()
        .unwrap_or(0)
}
