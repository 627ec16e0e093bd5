//! Partitioning of the input line sequence into worker chunks
//!
//! Divides N lines into K contiguous, non-overlapping index ranges that
//! cover the input exactly once. Chunk boundaries are computed up front,
//! before any worker starts.

/// A contiguous sub-range of the input line sequence assigned to one worker.
///
/// `start..end` is a half-open range over the original sequence. The chunk
/// with the highest index absorbs the division remainder, so ranges of all
/// chunks together cover `[0, total)` with no gaps or overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `total` lines into exactly `workers` chunks.
///
/// Every chunk except the last has size `total / workers`; the last chunk
/// takes the remainder. A non-positive worker count is coerced to 1 rather
/// than rejected, so callers never have to special-case it. `total == 0`
/// yields `workers` empty chunks.
pub fn partition(total: usize, workers: usize) -> Vec<Chunk> {
    let workers = workers.max(1);
    let base = total / workers;

    let mut chunks = Vec::with_capacity(workers);
    for index in 0..workers {
        let start = index * base;
        let end = if index == workers - 1 {
            total
        } else {
            start + base
        };
        chunks.push(Chunk { index, start, end });
    }

    debug_assert_eq!(chunks.len(), workers);
    debug_assert!(chunks.first().is_some_and(|c| c.start == 0));
    debug_assert!(chunks.last().is_some_and(|c| c.end == total));
    debug_assert!(chunks.windows(2).all(|w| w[0].end == w[1].start));

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_exact_cover(chunks: &[Chunk], total: usize) {
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks.last().unwrap().end, total);
        for pair in chunks.windows(2) {
            assert_eq!(
                pair[0].end, pair[1].start,
                "chunks must be contiguous with no gaps or overlaps"
            );
            assert_eq!(pair[0].index + 1, pair[1].index);
        }
        let covered: usize = chunks.iter().map(|c| c.len()).sum();
        assert_eq!(covered, total);
    }

    #[test]
    fn test_even_split() {
        let chunks = partition(8, 4);
        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(|c| c.len() == 2));
        assert_exact_cover(&chunks, 8);
    }

    #[test]
    fn test_remainder_goes_to_last_chunk() {
        let chunks = partition(10, 3);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 3);
        assert_eq!(chunks[1].len(), 3);
        assert_eq!(chunks[2].len(), 4);
        assert_exact_cover(&chunks, 10);
    }

    #[test]
    fn test_five_lines_two_workers() {
        // Five lines over two workers: the last chunk takes the odd line
        let chunks = partition(5, 2);
        assert_eq!(chunks[0], Chunk { index: 0, start: 0, end: 2 });
        assert_eq!(chunks[1], Chunk { index: 1, start: 2, end: 5 });
    }

    #[test]
    fn test_empty_input() {
        let chunks = partition(0, 4);
        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(|c| c.is_empty()));
        assert_exact_cover(&chunks, 0);
    }

    #[test]
    fn test_single_line_many_workers() {
        let chunks = partition(1, 8);
        assert_eq!(chunks.len(), 8);
        assert_eq!(chunks.iter().filter(|c| !c.is_empty()).count(), 1);
        assert_eq!(chunks[7].len(), 1);
        assert_exact_cover(&chunks, 1);
    }

    #[test]
    fn test_zero_workers_coerced_to_one() {
        let chunks = partition(5, 0);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], Chunk { index: 0, start: 0, end: 5 });
    }

    #[test]
    fn test_more_workers_than_lines() {
        let chunks = partition(3, 16);
        assert_eq!(chunks.len(), 16);
        assert_exact_cover(&chunks, 3);
    }

    proptest! {
        #[test]
        fn prop_partition_covers_exactly(total in 0usize..100_000, workers in 0usize..64) {
            let chunks = partition(total, workers);
            prop_assert_eq!(chunks.len(), workers.max(1));
            assert_exact_cover(&chunks, total);
        }

        #[test]
        fn prop_all_but_last_have_floor_size(total in 0usize..100_000, workers in 1usize..64) {
            let chunks = partition(total, workers);
            let base = total / workers;
            for chunk in &chunks[..chunks.len() - 1] {
                prop_assert_eq!(chunk.len(), base);
            }
            prop_assert_eq!(chunks.last().unwrap().len(), total - (workers - 1) * base);
        }
    }
}
