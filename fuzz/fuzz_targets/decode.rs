//! Decode fuzzer: arbitrary bytes through every decode path.
//!
//! The first byte of the input selects which decode operations run; the
//! rest is the wire data. Whatever the input, decoding must return an
//! error rather than panic, read out of bounds, or move the cursor on
//! failure.

use honggfuzz::fuzz;
use tinywire::Decoder;

fn exercise(data: &[u8]) {
    let Some((&selector, wire)) = data.split_first() else {
        return;
    };

    let mut dec = Decoder::new(wire);
    loop {
        let before = dec.position();
        let result = match selector % 12 {
            0 => dec.decode_bool().map(|_| ()),
            1 => dec.decode_u8().map(|_| ()),
            2 => dec.decode_i8().map(|_| ()),
            3 => dec.decode_u16().map(|_| ()),
            4 => dec.decode_i16().map(|_| ()),
            5 => dec.decode_u32().map(|_| ()),
            6 => dec.decode_i32().map(|_| ()),
            7 => dec.decode_u64().map(|_| ()),
            8 => dec.decode_i64().map(|_| ()),
            9 => dec.decode_f32().map(|_| ()),
            10 => dec.decode_f64().map(|_| ()),
            _ => dec.decode_byte_array_len().and_then(|len| {
                let mut dest = [0u8; 64];
                dec.decode_byte_array(&mut dest, len)
            }),
        };
        match result {
            Ok(()) => {
                assert!(dec.position() > before);
                assert!(dec.position() <= wire.len());
            }
            Err(_) => break,
        }
        if dec.is_empty() {
            break;
        }
    }
}

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            exercise(data);
        });
    }
}
