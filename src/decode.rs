//! Sequence driver: seed, block loop, type dispatch.

use crate::block;
use crate::docid::Docid;
use crate::error::{Error, Result};
use crate::varint;

/// Block type from the top 2 bits of the header byte. Two bits cannot
/// encode an unknown type, so dispatch is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockType {
    For,
    PforVb,
    PforBitmap,
    Constant,
}

impl BlockType {
    #[inline]
    fn from_header(header: u8) -> BlockType {
        match header >> 6 {
            0 => BlockType::For,
            1 => BlockType::PforVb,
            2 => BlockType::PforBitmap,
            _ => BlockType::Constant,
        }
    }
}

/// Decodes one compressed sequence of `out.len()` identifiers into `out`,
/// returning the number of input bytes consumed.
///
/// The first identifier is stored as a baseval seed, every subsequent
/// block covers up to `BLOCK_SIZE` identifiers and only the final block
/// may be short. `BLOCK_SIZE` and `interleaved` are properties of the
/// encoder that produced `input`; they are not recorded in the bytes and
/// must match it exactly. With `interleaved` set, full blocks use the
/// 4-lane layout while a short final block always falls back to the
/// contiguous one; CONSTANT blocks have a single layout.
///
/// An empty `out` consumes nothing and returns 0.
///
/// # Panics
///
/// If `BLOCK_SIZE` is zero or not a multiple of 4 (the lane count).
pub fn decode<D: Docid, const BLOCK_SIZE: usize>(
    input: &[u8],
    interleaved: bool,
    out: &mut [D],
) -> Result<usize> {
    assert!(
        BLOCK_SIZE > 0 && BLOCK_SIZE % 4 == 0,
        "BLOCK_SIZE must be a positive multiple of 4"
    );
    if out.is_empty() {
        return Ok(0);
    }

    let (mut pos, seed) = varint::read_baseval(input, 0)?;
    let mut prev = D::from_u64_lossy(u64::from(seed));
    out[0] = prev;

    let mut written = 1;
    while written < out.len() {
        let n = (out.len() - written).min(BLOCK_SIZE);
        let header = *input.get(pos).ok_or(Error::Truncated { offset: pos })?;
        let full = interleaved && n == BLOCK_SIZE;
        let chunk = &mut out[written..written + n];
        let (next, last) = match BlockType::from_header(header) {
            BlockType::For if full => block::decode_for_interleaved(input, pos, chunk, prev)?,
            BlockType::For => block::decode_for(input, pos, chunk, prev)?,
            BlockType::PforVb if full => {
                block::decode_pfor_vb_interleaved::<D, BLOCK_SIZE>(input, pos, chunk, prev)?
            }
            BlockType::PforVb => block::decode_pfor_vb::<D, BLOCK_SIZE>(input, pos, chunk, prev)?,
            BlockType::PforBitmap if full => {
                block::decode_pfor_bitmap_interleaved(input, pos, chunk, prev)?
            }
            BlockType::PforBitmap => block::decode_pfor_bitmap(input, pos, chunk, prev)?,
            BlockType::Constant => block::decode_constant(input, pos, chunk, prev)?,
        };
        pos = next;
        prev = last;
        written += n;
    }
    Ok(pos)
}
