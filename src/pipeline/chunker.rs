//! Fixed-window text chunking.

/// One window of document text with its position in the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct TextChunk {
    pub content: String,
    pub chunk_index: usize,
    /// Character offset of this window's first char in the full text.
    pub char_offset: usize,
}

/// Strategy seam for splitting document text into recognizer-sized windows.
pub trait Chunker {
    fn chunk(&self, text: &str) -> Vec<TextChunk>;
}

/// Non-overlapping fixed-size character windows.
///
/// Window boundaries are character counts, not bytes, so multi-byte
/// scripts never split inside a code point. A date and its event can
/// still land in different windows; that precision loss is accepted.
pub struct FixedWindowChunker {
    window_chars: usize,
}

impl FixedWindowChunker {
    pub fn new(window_chars: usize) -> Self {
        Self {
            window_chars: window_chars.max(1),
        }
    }
}

impl Default for FixedWindowChunker {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Chunker for FixedWindowChunker {
    fn chunk(&self, text: &str) -> Vec<TextChunk> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut chars_in_window = 0;
        let mut window_start = 0;
        let mut total_chars = 0;

        for ch in text.chars() {
            if chars_in_window == self.window_chars {
                chunks.push(TextChunk {
                    content: std::mem::take(&mut current),
                    chunk_index: chunks.len(),
                    char_offset: window_start,
                });
                chars_in_window = 0;
                window_start = total_chars;
            }
            current.push(ch);
            chars_in_window += 1;
            total_chars += 1;
        }

        if !current.is_empty() {
            chunks.push(TextChunk {
                content: current,
                chunk_index: chunks.len(),
                char_offset: window_start,
            });
        }

        chunks
    }
}
