//! The chunk-partitioning hash: a stable interface the sharder and every
//! loader must agree on byte-for-byte.

/// Computes the chunk index (`0..256`) a HOSE key belongs to.
///
/// Walks the key's UTF-16 code units (not decoded Unicode scalars — this
/// matters for any key containing characters outside the Basic Multilingual
/// Plane, though no HOSE key ever does) through a rolling hash, then reduces
/// to 256 buckets by absolute value.
///
/// # Examples
///
/// ```
/// use nmrhose::store::chunk_index_of;
///
/// let idx = chunk_index_of("HHHC(HHC/HHH/)");
/// assert_eq!(idx, chunk_index_of("HHHC(HHC/HHH/)"));
/// assert!(idx < 256);
/// ```
pub fn chunk_index_of(key: &str) -> u16 {
    let mut h: i32 = 0;
    for unit in key.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    (h.wrapping_abs() as u32 % 256) as u16
}
