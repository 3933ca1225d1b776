//! Text chunking for engine character limits
//!
//! Engines cap the number of characters per request. Longer queries are cut
//! into several chunks, preferring sentence and word boundaries so that no
//! word is severed mid-request.

/// Byte index at which to cut `text` for one request of at most `limit`
/// characters.
///
/// The returned index is always a valid UTF-8 boundary and is never 0 for a
/// non-empty input. `text[..index]` is sent as one chunk; `text[index..]` is
/// queued for the next iteration.
///
/// Boundary priority, tried only when the text holds at least `limit`
/// characters: the last `". "` sentence end (the period stays with the first
/// chunk), then the last space, newline or non-breaking space (kept with the
/// first chunk). A slice with no boundary at all is hard-cut exactly at
/// `limit` characters; such slices are still sent, never dropped.
pub fn split_index(text: &str, limit: usize) -> usize {
    debug_assert!(limit > 0, "chunk limit must be positive");

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    if chars.len() < limit {
        return text.len();
    }

    // Byte offset just past character `i`
    let after = |i: usize| -> usize {
        chars.get(i + 1).map_or(text.len(), |(offset, _)| *offset)
    };

    // Sentence end: cut after the period, the space opens the next chunk
    for i in (0..limit).rev() {
        if chars[i].1 == '.' && i + 1 < chars.len() && chars[i + 1].1 == ' ' {
            return chars[i + 1].0;
        }
    }

    for i in (0..limit).rev() {
        if chars[i].1 == ' ' {
            return after(i);
        }
    }

    for i in (0..limit).rev() {
        if chars[i].1 == '\n' {
            return after(i);
        }
    }

    // Non-breaking space
    for i in (0..limit).rev() {
        if chars[i].1 == '\u{00a0}' {
            return after(i);
        }
    }

    // No boundary found, most likely unsplittable garbage
    after(limit - 1)
}
