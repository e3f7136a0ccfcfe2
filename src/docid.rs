use num_traits::{ops::wrapping::WrappingAdd, PrimInt, Unsigned};
use std::fmt::Debug;

/// An unsigned document identifier the decoder can reconstruct.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. The identifier width is a
/// compile-time property of the stream: reader and writer must agree on it
/// out-of-band, the bytes do not describe it. `u32` is the reference width.
pub trait Docid: PrimInt + Unsigned + WrappingAdd + Debug + 'static {
    /// Identifier width in bits.
    const BITS: u32;
    /// Identifier width in bytes.
    const BYTES: usize;

    /// Loads an identifier stored little-endian at the start of `buf`.
    ///
    /// `buf` must hold at least [`Self::BYTES`] bytes.
    fn read_le(buf: &[u8]) -> Self;

    /// Truncates a 64-bit intermediate to the identifier width.
    fn from_u64_lossy(v: u64) -> Self;

    /// Widens to 64 bits.
    fn as_u64(self) -> u64;
}

macro_rules! impl_docid {
    ($ty:ty) => {
        impl Docid for $ty {
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn read_le(buf: &[u8]) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                bytes.copy_from_slice(&buf[..std::mem::size_of::<$ty>()]);
                <$ty>::from_le_bytes(bytes)
            }

            #[inline]
            fn from_u64_lossy(v: u64) -> Self {
                v as $ty
            }

            #[inline]
            fn as_u64(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_docid!(u8);
impl_docid!(u16);
impl_docid!(u32);
impl_docid!(u64);

/// 32-bit little-endian load with zero fill past the end of `buf`.
///
/// Packed streams are read a whole word at a time, which near the buffer
/// tail reaches up to 3 bytes past the last meaningful byte; the caller
/// masks off everything it did not ask for, so the fill value never leaks
/// into results.
#[inline]
pub(crate) fn load_u32_le(buf: &[u8], pos: usize) -> u32 {
    match buf.get(pos..pos + 4) {
        Some(w) => u32::from_le_bytes([w[0], w[1], w[2], w[3]]),
        None => {
            let mut w = [0u8; 4];
            if pos < buf.len() {
                let tail = &buf[pos..];
                w[..tail.len()].copy_from_slice(tail);
            }
            u32::from_le_bytes(w)
        }
    }
}

/// 64-bit little-endian load with zero fill past the end of `buf`.
#[inline]
pub(crate) fn load_u64_le(buf: &[u8], pos: usize) -> u64 {
    match buf.get(pos..pos + 8) {
        Some(w) => u64::from_le_bytes([w[0], w[1], w[2], w[3], w[4], w[5], w[6], w[7]]),
        None => {
            let mut w = [0u8; 8];
            if pos < buf.len() {
                let tail = &buf[pos..];
                w[..tail.len()].copy_from_slice(tail);
            }
            u64::from_le_bytes(w)
        }
    }
}
