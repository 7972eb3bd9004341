//! Candidate spot search.

use pk_agent::SpotRegistry;
use pk_core::{GridPos, SpotId};

/// Up to `k` free spots nearest to `pos` by Manhattan distance, nearest
/// first.  Distance ties go to the lower spot id.
pub fn nearest_free(registry: &SpotRegistry, pos: GridPos, k: usize) -> Vec<SpotId> {
    let mut free: Vec<(u32, SpotId)> = registry
        .free_spots()
        .map(|s| (pos.manhattan(s.pos), s.id))
        .collect();
    if free.len() > k {
        free.select_nth_unstable(k);
        free.truncate(k);
    }
    free.sort_unstable();
    free.into_iter().map(|(_, id)| id).collect()
}
