//! Byte-to-character offset translation for regex matches.

/// Precomputed character boundary index for one text.
///
/// Regex matches report byte offsets, while chunk windows, proximity
/// thresholds, and context radii are all defined in characters. Building
/// the boundary table once lets every match be translated in O(log n).
pub struct CharIndex {
    byte_starts: Vec<usize>,
}

impl CharIndex {
    pub fn new(text: &str) -> Self {
        let mut byte_starts: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        byte_starts.push(text.len());
        Self { byte_starts }
    }

    /// Character offset of the char beginning at `byte`.
    /// `byte` must lie on a char boundary, which regex match bounds always do.
    pub fn char_at(&self, byte: usize) -> usize {
        self.byte_starts.partition_point(|&b| b < byte)
    }

    /// Byte offset where character `idx` begins. `idx` may equal `char_len()`.
    pub fn byte_of(&self, idx: usize) -> usize {
        self.byte_starts[idx]
    }

    /// Total characters in the indexed text.
    pub fn char_len(&self) -> usize {
        self.byte_starts.len() - 1
    }
}
