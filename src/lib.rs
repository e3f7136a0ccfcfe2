/*! # TurboPFor delta-plus-one decoding
This crate is a Rust port of the decoder side of the delta-plus-one codecs
from [the TurboPFor library](https://github.com/powturbo/TurboPFor-Integer-Compression),
as used for docid posting lists in inverted indexes. It consumes the same
byte format the reference encoders emit and reconstructs the original
strictly increasing identifier sequence.

A sequence opens with a varbyte seed holding the first identifier and
continues in fixed-size blocks, each a frame-of-reference packing of the
gaps between identifiers minus one. Blocks come in four flavors chosen per
block by the encoder: a constant gap, plain FOR, and two patched (PFor)
forms whose outliers are stored separately as bitmap-addressed or
varbyte-coded exceptions. Base values may be packed contiguously or
striped across four interleaved lanes; the lane layout exists so SIMD
encoders can unpack it cheaply, but it decodes fine scalarly, which is
what this crate does.

The block size and the choice of interleaved layout are fixed when an
index is written and are not recorded in the stream; callers pass both,
along with the identifier width (`u32` for the usual docid case).

## Example

```
use pfordelta1::decode;

// Seed 10, then one FOR block of three 4-bit gaps-minus-one: 9, 10, 11.
let bytes = [0x0a, 0x04, 0xa9, 0x0b];
let mut ids = [0u32; 4];
let consumed = decode::<u32, 128>(&bytes, false, &mut ids)?;
assert_eq!(ids, [10, 20, 31, 43]);
assert_eq!(consumed, bytes.len());
# Ok::<(), pfordelta1::Error>(())
```

Decoding is pure and allocation free: the input is read-only, the output
slice is the only thing written, and independent calls over disjoint
buffers can run on as many threads as the caller likes. Malformed input is
reported through [`Error`] with the byte offset of the damage; the decoder
never panics on untrusted bytes.
*/

mod bits;
mod block;
mod decode;
mod docid;
mod error;
mod varint;

pub use num_traits::{ops::wrapping::WrappingAdd, PrimInt, Unsigned};

pub use decode::decode;
pub use docid::Docid;
pub use error::{Error, Result};
