//! Tests for address field decoding.

use cache_simulator::common::SimError;
use cache_simulator::core::units::cache::AddressDecoder;

/// Tests field widths derived from the geometry.
#[test]
fn test_decoder_field_widths() {
    let dec = AddressDecoder::new(4, 8).unwrap();
    assert_eq!(dec.block_bits(), 2);
    assert_eq!(dec.set_bits(), 3);
    assert_eq!(dec.block_size(), 4);
    assert_eq!(dec.num_sets(), 8);
}

/// Tests splitting an address into offset, set, and tag.
#[test]
fn test_decoder_fields() {
    let dec = AddressDecoder::new(4, 8).unwrap();
    // 46 = 0b1_011_10
    assert_eq!(dec.block_offset(46), 2);
    assert_eq!(dec.set_index(46), 3);
    assert_eq!(dec.tag(46), 1);
    assert_eq!(dec.block_start(46), 44);
}

/// Tests the degenerate geometry with one word per block and one set.
#[test]
fn test_decoder_single_word_single_set() {
    let dec = AddressDecoder::new(1, 1).unwrap();
    for addr in [0usize, 1, 7, 65535] {
        assert_eq!(dec.block_offset(addr), 0);
        assert_eq!(dec.set_index(addr), 0);
        assert_eq!(dec.tag(addr), addr);
        assert_eq!(dec.block_start(addr), addr);
    }
}

/// Tests rebuilding a block address from tag and set index.
#[test]
fn test_decoder_base_address() {
    let dec = AddressDecoder::new(4, 8).unwrap();
    assert_eq!(dec.base_address(1, 3), 44);
    assert_eq!(dec.base_address(0, 0), 0);
}

/// Tests that every address survives decomposition and reconstruction.
#[test]
fn test_decoder_round_trip() {
    for &(block, sets) in &[(1, 1), (1, 4), (2, 2), (4, 1), (8, 16), (16, 4)] {
        let dec = AddressDecoder::new(block, sets).unwrap();
        for addr in 0..2048usize {
            let rebuilt = dec.base_address(dec.tag(addr), dec.set_index(addr)) | dec.block_offset(addr);
            assert_eq!(rebuilt, addr, "block={} sets={}", block, sets);
        }
    }
}

/// Tests rejection of a non-power-of-two block size.
#[test]
fn test_decoder_rejects_bad_block_size() {
    let err = AddressDecoder::new(3, 4).unwrap_err();
    assert!(matches!(err, SimError::Configuration(_)));
}

/// Tests rejection of a non-power-of-two or zero set count.
#[test]
fn test_decoder_rejects_bad_set_count() {
    assert!(matches!(
        AddressDecoder::new(4, 6),
        Err(SimError::Configuration(_))
    ));
    assert!(matches!(
        AddressDecoder::new(4, 0),
        Err(SimError::Configuration(_))
    ));
}
