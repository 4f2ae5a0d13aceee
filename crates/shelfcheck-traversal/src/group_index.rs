//! Per-source partition of detection records.

use shelfcheck_core::{BoundaryKey, DetectionRecord, FxHashMap, SourceId};
use tracing::info;

/// Records skipped between the same pair of neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedGroup {
    pub boundary: BoundaryKey,
    /// Record indices in input order. Never empty when built by [`GroupIndex::build`].
    pub records: Vec<usize>,
}

impl SkippedGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// All records from one source, split by review mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceBucket {
    pub unresolved: Vec<usize>,
    /// Groups in first-seen order of their boundary key.
    pub skipped: Vec<SkippedGroup>,
}

impl SourceBucket {
    /// Number of records in this bucket across both modes.
    pub fn total(&self) -> usize {
        self.unresolved.len() + self.skipped.iter().map(SkippedGroup::len).sum::<usize>()
    }
}

/// Source → bucket mapping, built once per session.
///
/// Every record index appears exactly once across all buckets. Rebuild rather
/// than mutate if the record sequence changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupIndex {
    sources: Vec<SourceId>,
    buckets: Vec<SourceBucket>,
    positions: FxHashMap<SourceId, usize>,
    record_count: usize,
}

impl GroupIndex {
    /// Partition `records` in a single pass.
    pub fn build(records: &[DetectionRecord]) -> Self {
        let mut index = Self::default();
        // (bucket position, boundary) → group position within that bucket.
        let mut group_slots: FxHashMap<(usize, BoundaryKey), usize> = FxHashMap::default();

        for (record_index, record) in records.iter().enumerate() {
            let bucket_pos = index.bucket_position_or_insert(&record.source_id);
            let bucket = &mut index.buckets[bucket_pos];

            match record.boundary_key {
                None => bucket.unresolved.push(record_index),
                Some(boundary) => match group_slots.get(&(bucket_pos, boundary)) {
                    Some(&group_pos) => bucket.skipped[group_pos].records.push(record_index),
                    None => {
                        group_slots.insert((bucket_pos, boundary), bucket.skipped.len());
                        bucket.skipped.push(SkippedGroup {
                            boundary,
                            records: vec![record_index],
                        });
                    }
                },
            }
        }
        index.record_count = records.len();

        info!(
            records = index.record_count,
            sources = index.sources.len(),
            skipped_groups = group_slots.len(),
            "built group index"
        );
        index
    }

    fn bucket_position_or_insert(&mut self, source: &SourceId) -> usize {
        if let Some(&pos) = self.positions.get(source) {
            return pos;
        }
        let pos = self.buckets.len();
        self.sources.push(source.clone());
        self.buckets.push(SourceBucket::default());
        self.positions.insert(source.clone(), pos);
        pos
    }

    /// Sources in first-seen order.
    pub fn sources(&self) -> &[SourceId] {
        &self.sources
    }

    pub fn bucket(&self, source: &SourceId) -> Option<&SourceBucket> {
        self.positions.get(source).map(|&pos| &self.buckets[pos])
    }

    /// Buckets paired with their source, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&SourceId, &SourceBucket)> {
        self.sources.iter().zip(self.buckets.iter())
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
