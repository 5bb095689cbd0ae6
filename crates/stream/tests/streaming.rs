//! End-to-end tests for the streaming encoder and decoder.

use radix64_stream::{Base64Decoder, Base64Encoder, ByteSink, ByteSource, Reader, Writer};
use rand::Rng;

fn generate_blob(length: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

fn encode_all(data: &[u8]) -> Vec<u8> {
    let mut encoder = Base64Encoder::new(Writer::new());
    encoder.write(data).unwrap();
    encoder.close().unwrap();
    encoder.into_inner().flush()
}

fn read_all<S: ByteSource>(source: &mut S) -> Vec<u8> {
    let mut out = Vec::new();
    while let Some(byte) = source.read_byte().unwrap() {
        out.push(byte);
    }
    out
}

#[test]
fn encoder_then_decoder_reproduces_the_input() {
    for k in [0, 1, 2, 3, 10, 100] {
        for extra in [0, 1, 2] {
            let blob = generate_blob(3 * k + extra);
            let encoded = encode_all(&blob);
            let mut decoder = Base64Decoder::new(Reader::new(&encoded));
            assert_eq!(
                read_all(&mut decoder),
                blob,
                "length {} did not round-trip",
                3 * k + extra
            );
        }
    }
}

#[test]
fn streaming_output_matches_the_bulk_codec() {
    for length in 0..32 {
        let blob = generate_blob(length);
        let bulk = radix64_codec::encode(&blob, 0, blob.len()).unwrap();
        assert_eq!(encode_all(&blob), bulk.as_bytes());
    }
}

#[test]
fn skip_grid_matches_read_then_slice() {
    // 24 bytes: the grid crosses every buffered/fast-path/fractional split
    let data = generate_blob(24);
    let encoded = encode_all(&data);
    let total = data.len() as u64;

    for n in 0..=total + 2 {
        let mut decoder = Base64Decoder::new(Reader::new(&encoded));
        let skipped = decoder.skip(n).unwrap();
        assert_eq!(skipped, n.min(total), "skip({n}) returned {skipped}");
        let rest = read_all(&mut decoder);
        assert_eq!(rest, &data[skipped as usize..], "tail after skip({n})");
    }
}

#[test]
fn skip_grid_over_a_padded_tail() {
    // 25 bytes end in a two-pad group; any request whose remainder forces
    // the final group through the decode path stays exact
    let data = generate_blob(25);
    let encoded = encode_all(&data);
    let total = data.len() as u64;

    for n in 0..=total + 1 {
        let mut decoder = Base64Decoder::new(Reader::new(&encoded));
        let skipped = decoder.skip(n).unwrap();
        assert_eq!(skipped, n.min(total), "skip({n}) returned {skipped}");
        let rest = read_all(&mut decoder);
        assert_eq!(rest, &data[skipped as usize..], "tail after skip({n})");
    }
}

#[test]
fn skip_interleaves_with_reads() {
    let data = generate_blob(30);
    let encoded = encode_all(&data);
    let mut decoder = Base64Decoder::new(Reader::new(&encoded));

    assert_eq!(decoder.read_byte().unwrap(), Some(data[0]));
    assert_eq!(decoder.skip(7).unwrap(), 7);
    assert_eq!(decoder.read_byte().unwrap(), Some(data[8]));
    assert_eq!(decoder.skip(4).unwrap(), 4);
    assert_eq!(read_all(&mut decoder), &data[13..]);
}

#[test]
fn skip_zero_consumes_nothing() {
    let mut decoder = Base64Decoder::new(Reader::new(b"Zm9v"));
    assert_eq!(decoder.skip(0).unwrap(), 0);
    assert_eq!(decoder.available(), 3);
    assert_eq!(read_all(&mut decoder), b"foo");
}

#[test]
fn skip_does_not_validate_discarded_groups() {
    // The middle group is garbage a read would reject, but the whole-group
    // fast path discards it without decoding. This relaxation is part of
    // the contract: skip must not pay for bytes it throws away.
    let text = b"qszh!!!!6BMN";
    let mut decoder = Base64Decoder::new(Reader::new(text));
    assert_eq!(decoder.skip(6).unwrap(), 6);
    assert_eq!(read_all(&mut decoder), [0xE8, 0x13, 0x0D]);
}

#[test]
fn the_fractional_skip_path_still_validates() {
    // Same garbage, but a skip whose remainder has to decode the bad
    // group fails that skip call with the malformed character.
    let text = b"qszh!!!!6BMN";
    let mut decoder = Base64Decoder::new(Reader::new(text));
    let err = decoder.skip(4).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn skip_past_the_end_reports_the_shortfall() {
    let data = generate_blob(9);
    let encoded = encode_all(&data);
    let mut decoder = Base64Decoder::new(Reader::new(&encoded));
    assert_eq!(decoder.skip(100).unwrap(), 9);
    assert_eq!(decoder.read_byte().unwrap(), None);
}

#[test]
fn a_source_that_dies_mid_group_fails_the_skip() {
    // "Zm9vYg" holds one whole group and then two stray characters; the
    // fractional pull that follows the fast path hits them and errors.
    let mut decoder = Base64Decoder::new(Reader::new(b"Zm9vYg"));
    let err = decoder.skip(4).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn available_never_runs_ahead_of_whole_groups() {
    let mut decoder = Base64Decoder::new(Reader::new(b"Zm9vYmFyYQ=="));
    assert_eq!(decoder.available(), 9);
    let mut buf = [0u8; 4];
    decoder.read(&mut buf).unwrap();
    // 2 buffered + one whole group's worth on the source
    assert_eq!(decoder.available(), 5);
}

#[test]
fn adapters_compose_with_std_io() {
    use radix64_stream::{IoSink, IoSource};
    use std::io::Cursor;

    let mut encoder = Base64Encoder::new(IoSink::new(Vec::new()));
    encoder.write(b"composed with files and sockets").unwrap();
    encoder.close().unwrap();
    let encoded = encoder.into_inner().into_inner();

    let mut decoder = Base64Decoder::new(IoSource::new(Cursor::new(encoded)));
    assert_eq!(read_all(&mut decoder), b"composed with files and sockets");
}

#[test]
fn decoders_chain_as_sources() {
    // A decoder is itself a ByteSource, so two of them unwrap a
    // doubly-encoded stream.
    let inner = encode_all(b"nested");
    let outer = encode_all(&inner);
    let mut decoder = Base64Decoder::new(Base64Decoder::new(Reader::new(&outer)));
    assert_eq!(read_all(&mut decoder), b"nested");
}
