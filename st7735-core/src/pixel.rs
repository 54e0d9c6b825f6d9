//! Pixel byte order and transfer chunking
//!
//! The graphics library renders RGB565 words in native (little-endian)
//! order; the controller reads them big-endian off the wire.

use core::slice::Chunks;

/// Swap the two bytes of every RGB565 pixel in place
///
/// A trailing odd byte is left untouched.
pub fn swap_bytes(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(2) {
        px.swap(0, 1);
    }
}

/// Split a buffer into transfers of at most `max_bytes`
///
/// `max_bytes` must be at least 1; callers take it from
/// `DisplayConfig::chunk_bytes`, which floors it at one pixel. Every chunk
/// except possibly the last is exactly `max_bytes` long and no chunk is
/// empty. An empty buffer yields nothing.
///
/// # Panics
///
/// Panics if `max_bytes` is zero.
pub fn transfer_chunks(pixels: &[u8], max_bytes: usize) -> Chunks<'_, u8> {
    debug_assert!(max_bytes >= 1, "transfer chunk bound must be non-zero");
    pixels.chunks(max_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_swap_two_pixels() {
        let mut buf = [0x34, 0x12, 0x78, 0x56];
        swap_bytes(&mut buf);
        assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_swap_leaves_odd_tail() {
        let mut buf = [0x01, 0x02, 0x03];
        swap_bytes(&mut buf);
        assert_eq!(buf, [0x02, 0x01, 0x03]);
    }

    #[test]
    fn test_small_buffer_is_one_partial_chunk() {
        let buf = [0u8; 6];
        let lens: Vec<usize> = transfer_chunks(&buf, 256).map(<[u8]>::len).collect();
        assert_eq!(lens, vec![6]);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_tail() {
        let buf = [0u8; 512];
        let lens: Vec<usize> = transfer_chunks(&buf, 256).map(<[u8]>::len).collect();
        assert_eq!(lens, vec![256, 256]);
    }

    #[test]
    fn test_single_byte_bound() {
        let buf = [0u8; 3];
        assert_eq!(transfer_chunks(&buf, 1).count(), 3);
    }

    #[test]
    #[should_panic]
    fn test_zero_bound_is_rejected() {
        let buf = [0u8; 3];
        let _ = transfer_chunks(&buf, 0);
    }

    proptest! {
        #[test]
        fn prop_swap_is_involution(original in prop::collection::vec(any::<u8>(), 0..512)) {
            let mut buf = original.clone();
            swap_bytes(&mut buf);
            swap_bytes(&mut buf);
            prop_assert_eq!(buf, original);
        }

        #[test]
        fn prop_chunks_cover_buffer(len in 0usize..4096, bound in 1usize..700) {
            let buf = vec![0u8; len];
            let lens: Vec<usize> = transfer_chunks(&buf, bound).map(<[u8]>::len).collect();

            prop_assert_eq!(lens.iter().sum::<usize>(), len);
            prop_assert!(lens.iter().all(|&l| l > 0));
            if let Some((_, full)) = lens.split_last() {
                prop_assert!(full.iter().all(|&l| l == bound));
            }
        }
    }
}
