//! XOR distance and Hamming-weight closeness.

use crate::domain::{Distance, NodeKey, KEY_BITS, KEY_LEN, NUM_BUCKETS};

/// Width of the rank band covered by one bucket.
const RANK_BAND: u32 = (KEY_BITS / NUM_BUCKETS) as u32;

/// Bitwise XOR of two keys.
///
/// # Properties
/// - Symmetric: `xor_distance(a, b) == xor_distance(b, a)`
/// - Self is zero: `xor_distance(a, a).is_zero()`
pub fn xor_distance(a: &NodeKey, b: &NodeKey) -> Distance {
    let mut out = [0u8; KEY_LEN];
    for (o, (x, y)) in out.iter_mut().zip(a.as_bytes().iter().zip(b.as_bytes())) {
        *o = x ^ y;
    }
    Distance(out)
}

/// Hamming weight of the XOR distance. Lower is closer.
///
/// Note this is the total number of differing bits, not the index of the
/// most significant one, so it does not give textbook Kademlia locality.
#[inline]
pub fn closeness_rank(a: &NodeKey, b: &NodeKey) -> u32 {
    a.as_bytes()
        .iter()
        .zip(b.as_bytes())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum()
}

/// Bucket holding `remote` in the table owned by `local`.
///
/// The rank range is split linearly into [`NUM_BUCKETS`] equal bands. A rank
/// of exactly [`KEY_BITS`] (every bit differs) lands in the last bucket.
#[inline]
pub fn bucket_index(local: &NodeKey, remote: &NodeKey) -> usize {
    let band = (closeness_rank(local, remote) / RANK_BAND) as usize;
    band.min(NUM_BUCKETS - 1)
}
