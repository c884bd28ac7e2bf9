use std::collections::HashMap;
use std::time::{Duration, Instant};

use argus_common::types::ArgumentGraph;
use argus_common::AnalysisId;

/// In-memory completed-analysis cache with TTL-based expiration.
///
/// Write-once, read-many: analysis ids are freshly generated UUIDs, so an
/// insert never overwrites an existing entry.
pub struct AnalysisCache {
    entries: HashMap<AnalysisId, CacheEntry>,
    ttl: Duration,
}

struct CacheEntry {
    graph: ArgumentGraph,
    inserted_at: Instant,
}

impl AnalysisCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Get a cached graph if it exists and hasn't expired.
    pub fn get(&self, id: AnalysisId) -> Option<ArgumentGraph> {
        if let Some(entry) = self.entries.get(&id) {
            if entry.inserted_at.elapsed() < self.ttl {
                metrics::counter!("analysis.cache.hit").increment(1);
                return Some(entry.graph.clone());
            }
        }
        metrics::counter!("analysis.cache.miss").increment(1);
        None
    }

    /// Insert a completed analysis, evicting expired entries. Existing
    /// entries are never overwritten.
    pub fn insert(&mut self, id: AnalysisId, graph: ArgumentGraph) {
        // Evict expired entries on insert.
        self.entries
            .retain(|_, entry| entry.inserted_at.elapsed() < self.ttl);

        self.entries.entry(id).or_insert(CacheEntry {
            graph,
            inserted_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(input: &str) -> ArgumentGraph {
        ArgumentGraph::new(input, Vec::new()).unwrap()
    }

    #[test]
    fn test_cache_hit_miss() {
        let mut cache = AnalysisCache::new(Duration::from_secs(3600));
        let id = AnalysisId::new();
        assert!(cache.get(id).is_none());

        cache.insert(id, graph("cached argument"));

        let hit = cache.get(id);
        assert!(hit.is_some());
        assert_eq!(hit.unwrap().original_input, "cached argument");
    }

    #[test]
    fn test_cache_expiry() {
        let mut cache = AnalysisCache::new(Duration::from_millis(1));
        let id = AnalysisId::new();
        cache.insert(id, graph("old"));

        std::thread::sleep(Duration::from_millis(10));
        assert!(cache.get(id).is_none());
    }

    #[test]
    fn test_cache_is_write_once() {
        let mut cache = AnalysisCache::new(Duration::from_secs(3600));
        let id = AnalysisId::new();
        cache.insert(id, graph("first"));
        cache.insert(id, graph("second"));

        assert_eq!(cache.get(id).unwrap().original_input, "first");
    }
}
