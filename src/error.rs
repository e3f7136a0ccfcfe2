/// Decode failures.
///
/// The format is schema-less once the block size and identifier width are
/// fixed, so corruption is only detectable at reserved escape values and
/// range checks. Every variant carries the byte offset at which decoding
/// stopped; no partial output is meaningful after an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The sequence seed starts with a reserved prefix byte (`>= 224`).
    #[error("reserved baseval prefix at byte {offset}")]
    ReservedBaseval {
        /// Offset of the offending prefix byte.
        offset: usize,
    },
    /// An exception value starts with a reserved prefix byte (`>= 251`).
    #[error("reserved varbyte prefix at byte {offset}")]
    ReservedVarbyte {
        /// Offset of the offending prefix byte.
        offset: usize,
    },
    /// An exception index points outside the block it patches.
    #[error("exception index {index} out of range for a block of {num} at byte {offset}")]
    ExceptionIndex {
        /// Offset of the offending index byte.
        offset: usize,
        /// The out-of-range index.
        index: usize,
        /// Number of positions in the block.
        num: usize,
    },
    /// A block declares more exceptions than it has positions.
    #[error("{count} exceptions declared for a block of {num} at byte {offset}")]
    ExceptionCount {
        /// Offset of the exception-count byte.
        offset: usize,
        /// The declared exception count.
        count: usize,
        /// Number of positions in the block.
        num: usize,
    },
    /// The input ended before the sequence was complete.
    #[error("input truncated at byte {offset}")]
    Truncated {
        /// Offset of the first byte the decoder needed but could not read.
        offset: usize,
    },
    /// A block declares a bit width the packed-word readers cannot produce,
    /// or an exception shift that cannot fit the identifier width.
    #[error("bit width {width} out of range at byte {offset}")]
    WidthOverflow {
        /// Offset of the header or value that declared the width.
        offset: usize,
        /// The offending width.
        width: u32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
