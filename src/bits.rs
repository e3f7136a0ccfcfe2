//! Fixed-width field readers over packed byte streams.
//!
//! Both readers load whole 32-bit little-endian words and shift-and-mask
//! the requested field out, so widths of 1 to 32 bits are supported and a
//! width of 0 always yields 0. Loads near the end of the input are padded
//! with zeros (see [`crate::docid::load_u32_le`]); callers size-check the
//! packed region itself, not the word overshoot.

use crate::docid::load_u32_le;

/// Bytes occupied by `num` packed fields of `width` bits, rounded up to a
/// whole byte.
#[inline]
pub(crate) fn bytes_for_packed_bits(num: usize, width: u32) -> usize {
    (num * width as usize).div_ceil(8)
}

#[inline]
const fn field_mask(width: u32) -> u32 {
    ((1u64 << width) - 1) as u32
}

/// Reads fields packed back to back, least significant bits first.
///
/// The cursor advances byte-granular: after each read the intra-byte
/// position stays in `[0, 8)`. A field therefore always sits within one
/// 32-bit word as long as `width <= 25`, and at any width when fields stay
/// byte-aligned; the compatible encoders only emit such layouts.
pub(crate) struct BitReader<'a> {
    buf: &'a [u8],
    pos: usize,
    width: u32,
    mask: u32,
    bits_used: u32,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(buf: &'a [u8], pos: usize, width: u32) -> Self {
        debug_assert!(width <= 32);
        BitReader {
            buf,
            pos,
            width,
            mask: field_mask(width),
            bits_used: 0,
        }
    }

    #[inline]
    pub(crate) fn read(&mut self) -> u32 {
        let val = (load_u32_le(self.buf, self.pos) >> self.bits_used) & self.mask;
        self.bits_used += self.width;
        self.pos += (self.bits_used / 8) as usize;
        self.bits_used %= 8;
        val
    }
}

/// Byte distance between consecutive 32-bit words of the same lane.
const STRIDE: usize = 4 * std::mem::size_of::<u32>();

/// Reads fields from one lane of a 4-way interleaved stream.
///
/// Words of a single lane are 16 bytes apart; four readers at lane offsets
/// 0, 4, 8 and 12 together cover the block, with logical position
/// `4k + lane` coming from lane `lane`. Unlike [`BitReader`] the cursor is
/// word-granular, so a field can straddle two words of the lane and is
/// spliced from a double load when it does.
pub(crate) struct InterleavedBitReader<'a> {
    buf: &'a [u8],
    pos: usize,
    width: u32,
    mask: u32,
    bits_used: u32,
}

impl<'a> InterleavedBitReader<'a> {
    pub(crate) fn new(buf: &'a [u8], pos: usize, width: u32) -> Self {
        debug_assert!(width <= 32);
        InterleavedBitReader {
            buf,
            pos,
            width,
            mask: field_mask(width),
            bits_used: 0,
        }
    }

    #[inline]
    pub(crate) fn read(&mut self) -> u32 {
        let val = if self.bits_used + self.width > 32 {
            let lo = load_u32_le(self.buf, self.pos) >> self.bits_used;
            let hi = load_u32_le(self.buf, self.pos + STRIDE) << (32 - self.bits_used);
            lo | hi
        } else {
            load_u32_le(self.buf, self.pos) >> self.bits_used
        };
        self.bits_used += self.width;
        self.pos += STRIDE * (self.bits_used / 32) as usize;
        self.bits_used %= 32;
        val & self.mask
    }
}
