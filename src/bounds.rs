use core::ops::Range;

/// Index range of one of `count` equal contiguous segments of a strip
///
/// Segments tile the strip exactly: the first starts at 0, the last ends
/// at `len`, and neighbours share their boundary.
pub const fn segment(len: usize, index: usize, count: usize) -> Range<usize> {
    if count == 0 || index >= count {
        return len..len;
    }
    let start = len * index / count;
    let end = len * (index + 1) / count;
    start..end
}
