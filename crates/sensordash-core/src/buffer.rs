//! Bounded buffers backing the live charts and the readings table.

use std::collections::VecDeque;

use crate::reading::{ReadingRow, TimestampedPoint};

/// Number of points kept per live chart series.
pub const LIVE_SERIES_CAPACITY: usize = 60;

/// Number of rows kept in the readings table.
pub const READINGS_TABLE_CAPACITY: usize = 10;

// ── RingBuffer<T> ────────────────────────────────────────────────────────────

/// A fixed-capacity FIFO that evicts the oldest entry once full.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Create a new ring buffer with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a value onto the tail, evicting exactly one item from the head
    /// when the push takes the buffer over capacity.
    pub fn push(&mut self, value: T) {
        self.buf.push_back(value);
        if self.buf.len() > self.capacity {
            self.buf.pop_front();
        }
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Maximum capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over items from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Get the most recently pushed item.
    pub fn latest(&self) -> Option<&T> {
        self.buf.back()
    }

    /// Get the oldest item.
    pub fn oldest(&self) -> Option<&T> {
        self.buf.front()
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copy the contents out in chronological order.
    pub fn to_vec(&self) -> Vec<T> {
        self.buf.iter().cloned().collect()
    }
}

// ── SeriesBuffer ─────────────────────────────────────────────────────────────

/// Rolling window of one live metric.
pub type SeriesBuffer = RingBuffer<TimestampedPoint>;

impl SeriesBuffer {
    /// A series buffer with the live-chart capacity.
    pub fn live() -> Self {
        Self::new(LIVE_SERIES_CAPACITY)
    }
}

// ── ReadingsTable ────────────────────────────────────────────────────────────

/// Newest-first table of recent readings.
///
/// New rows go in at the top; once the table holds more than its capacity the
/// bottom (oldest) row is dropped.
#[derive(Debug, Clone)]
pub struct ReadingsTable {
    rows: VecDeque<ReadingRow>,
    capacity: usize,
}

impl Default for ReadingsTable {
    fn default() -> Self {
        Self::new(READINGS_TABLE_CAPACITY)
    }
}

impl ReadingsTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert a row at the top, trimming the tail back to capacity.
    pub fn push(&mut self, row: ReadingRow) {
        self.rows.push_front(row);
        while self.rows.len() > self.capacity {
            self.rows.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rows from newest to oldest.
    pub fn rows(&self) -> impl Iterator<Item = &ReadingRow> {
        self.rows.iter()
    }

    /// Most recent row.
    pub fn newest(&self) -> Option<&ReadingRow> {
        self.rows.front()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn point(secs: i64, value: f64) -> TimestampedPoint {
        TimestampedPoint {
            timestamp: Local.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
            value,
        }
    }

    fn row(time: &str) -> ReadingRow {
        ReadingRow {
            time: time.to_string(),
            temperature: "20.0°C".to_string(),
            humidity: "50.0%".to_string(),
            motion: "No".to_string(),
            smoke: "No".to_string(),
        }
    }

    // ── RingBuffer ──────────────────────────────────
    #[test]
    fn test_ring_buffer_basic() {
        let mut buf = RingBuffer::new(3);
        buf.push(1);
        buf.push(2);
        buf.push(3);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.latest(), Some(&3));
        assert_eq!(buf.oldest(), Some(&1));
    }

    #[test]
    fn test_ring_buffer_overflow() {
        let mut buf = RingBuffer::new(3);
        buf.push(1);
        buf.push(2);
        buf.push(3);
        buf.push(4);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.oldest(), Some(&2)); // 1 was evicted
        assert_eq!(buf.latest(), Some(&4));
        let items: Vec<_> = buf.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
    }

    #[test]
    fn test_ring_buffer_empty() {
        let buf: RingBuffer<i32> = RingBuffer::new(5);
        assert!(buf.is_empty());
        assert_eq!(buf.latest(), None);
        assert!(buf.to_vec().is_empty());
    }

    #[test]
    fn test_ring_buffer_clear() {
        let mut buf = RingBuffer::new(3);
        buf.push(1);
        buf.push(2);
        buf.clear();
        assert!(buf.is_empty());
    }

    // ── SeriesBuffer ────────────────────────────────
    #[test]
    fn test_series_buffer_sliding_window() {
        for n in [0usize, 1, 59, 60, 61, 150] {
            let mut series = SeriesBuffer::live();
            for i in 0..n {
                series.push(point(i as i64, i as f64));
            }

            let expected_len = n.min(LIVE_SERIES_CAPACITY);
            assert_eq!(series.len(), expected_len, "after {n} appends");

            let values: Vec<f64> = series.iter().map(|p| p.value).collect();
            let expected: Vec<f64> = (n - expected_len..n).map(|i| i as f64).collect();
            assert_eq!(values, expected, "window contents after {n} appends");
        }
    }

    #[test]
    fn test_series_buffer_keeps_chronological_order() {
        let mut series = SeriesBuffer::live();
        for i in 0..75 {
            series.push(point(i, 20.0));
        }
        let stamps: Vec<_> = series.iter().map(|p| p.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(series.oldest().map(|p| p.timestamp), Some(point(15, 0.0).timestamp));
    }

    // ── ReadingsTable ───────────────────────────────
    #[test]
    fn test_readings_table_newest_first() {
        let mut table = ReadingsTable::default();
        table.push(row("10:00:00"));
        table.push(row("10:00:01"));

        let times: Vec<_> = table.rows().map(|r| r.time.as_str()).collect();
        assert_eq!(times, vec!["10:00:01", "10:00:00"]);
        assert_eq!(table.newest().map(|r| r.time.as_str()), Some("10:00:01"));
    }

    #[test]
    fn test_readings_table_bounded_length() {
        for m in [0usize, 3, 10, 11, 25] {
            let mut table = ReadingsTable::default();
            for i in 0..m {
                table.push(row(&format!("row-{i}")));
            }
            assert_eq!(table.len(), m.min(READINGS_TABLE_CAPACITY));
            if m > 0 {
                assert_eq!(
                    table.newest().map(|r| r.time.clone()),
                    Some(format!("row-{}", m - 1))
                );
            }
        }
    }

    #[test]
    fn test_readings_table_evicts_oldest_from_tail() {
        let mut table = ReadingsTable::default();
        for i in 0..12 {
            table.push(row(&format!("row-{i}")));
        }
        let last = table.rows().last().map(|r| r.time.clone());
        assert_eq!(last, Some("row-2".to_string()));
    }
}
