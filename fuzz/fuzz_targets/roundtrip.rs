//! Round-trip fuzzer: arbitrary field sequences encoded then decoded.
//!
//! For every generated field list, encoding into a buffer sized by the
//! size calculators must succeed exactly, and decoding must reproduce the
//! original values with the cursor landing on the same final offset.

use arbitrary::Arbitrary;
use honggfuzz::fuzz;
use tinywire::{Decoder, Encoder, size};

#[derive(Debug, Arbitrary)]
enum Field {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
    Bytes(Vec<u8>),
    Text(String),
    OptionNone,
    OptionSome,
    Variant(u32),
    SeqLen(u16),
    MapLen(u16),
}

impl Field {
    fn size(&self) -> usize {
        match self {
            Field::Bool(_) => size::size_bool(),
            Field::U8(_) => size::size_u8(),
            Field::I8(_) => size::size_i8(),
            Field::U16(v) => size::size_u16(*v),
            Field::I16(v) => size::size_i16(*v),
            Field::U32(v) => size::size_u32(*v),
            Field::I32(v) => size::size_i32(*v),
            Field::U64(v) => size::size_u64(*v),
            Field::I64(v) => size::size_i64(*v),
            Field::F32(_) => size::size_f32(),
            Field::F64(_) => size::size_f64(),
            Field::Bytes(b) => size::size_byte_array(b.len()),
            Field::Text(s) => size::size_string(s.len()),
            Field::OptionNone => size::size_option_none(),
            Field::OptionSome => 1,
            Field::Variant(d) => size::size_variant(*d),
            Field::SeqLen(n) => size::size_seq_len(*n as usize),
            Field::MapLen(n) => size::size_map_len(*n as usize),
        }
    }

    fn encode(&self, enc: &mut Encoder<'_>) {
        match self {
            Field::Bool(v) => enc.encode_bool(*v).unwrap(),
            Field::U8(v) => enc.encode_u8(*v).unwrap(),
            Field::I8(v) => enc.encode_i8(*v).unwrap(),
            Field::U16(v) => enc.encode_u16(*v).unwrap(),
            Field::I16(v) => enc.encode_i16(*v).unwrap(),
            Field::U32(v) => enc.encode_u32(*v).unwrap(),
            Field::I32(v) => enc.encode_i32(*v).unwrap(),
            Field::U64(v) => enc.encode_u64(*v).unwrap(),
            Field::I64(v) => enc.encode_i64(*v).unwrap(),
            Field::F32(v) => enc.encode_f32(*v).unwrap(),
            Field::F64(v) => enc.encode_f64(*v).unwrap(),
            Field::Bytes(b) => enc.encode_byte_array(b).unwrap(),
            Field::Text(s) => enc.encode_string(s).unwrap(),
            Field::OptionNone => enc.encode_option_none().unwrap(),
            Field::OptionSome => enc.encode_option_some().unwrap(),
            Field::Variant(d) => enc.encode_variant(*d).unwrap(),
            Field::SeqLen(n) => enc.encode_seq_len(*n as usize).unwrap(),
            Field::MapLen(n) => enc.encode_map_len(*n as usize).unwrap(),
        }
    }

    fn check_decode(&self, dec: &mut Decoder<'_>) {
        match self {
            Field::Bool(v) => assert_eq!(dec.decode_bool().unwrap(), *v),
            Field::U8(v) => assert_eq!(dec.decode_u8().unwrap(), *v),
            Field::I8(v) => assert_eq!(dec.decode_i8().unwrap(), *v),
            Field::U16(v) => assert_eq!(dec.decode_u16().unwrap(), *v),
            Field::I16(v) => assert_eq!(dec.decode_i16().unwrap(), *v),
            Field::U32(v) => assert_eq!(dec.decode_u32().unwrap(), *v),
            Field::I32(v) => assert_eq!(dec.decode_i32().unwrap(), *v),
            Field::U64(v) => assert_eq!(dec.decode_u64().unwrap(), *v),
            Field::I64(v) => assert_eq!(dec.decode_i64().unwrap(), *v),
            Field::F32(v) => {
                assert_eq!(dec.decode_f32().unwrap().to_bits(), v.to_bits());
            }
            Field::F64(v) => {
                assert_eq!(dec.decode_f64().unwrap().to_bits(), v.to_bits());
            }
            Field::Bytes(b) => {
                let len = dec.decode_byte_array_len().unwrap();
                assert_eq!(len, b.len());
                let mut dest = vec![0u8; len];
                dec.decode_byte_array(&mut dest, len).unwrap();
                assert_eq!(dest, *b);
            }
            Field::Text(s) => {
                let len = dec.decode_string_len().unwrap();
                assert_eq!(len, s.len());
                let mut dest = vec![0u8; len];
                dec.decode_string(&mut dest, len).unwrap();
                assert_eq!(dest, s.as_bytes());
            }
            Field::OptionNone => assert!(!dec.decode_option_tag().unwrap()),
            Field::OptionSome => assert!(dec.decode_option_tag().unwrap()),
            Field::Variant(d) => assert_eq!(dec.decode_variant().unwrap(), *d),
            Field::SeqLen(n) => assert_eq!(dec.decode_seq_len().unwrap(), *n as usize),
            Field::MapLen(n) => assert_eq!(dec.decode_map_len().unwrap(), *n as usize),
        }
    }
}

fn exercise(fields: &[Field]) {
    let total: usize = fields.iter().map(Field::size).sum();
    let mut buf = vec![0u8; total];

    let mut enc = Encoder::new(&mut buf);
    for field in fields {
        field.encode(&mut enc);
    }
    // The size calculators promised exactly this many bytes.
    assert_eq!(enc.position(), total);

    let mut dec = Decoder::new(enc.as_slice());
    for field in fields {
        field.check_decode(&mut dec);
    }
    assert_eq!(dec.position(), total);
    assert!(dec.is_empty());
}

fn main() {
    loop {
        fuzz!(|fields: Vec<Field>| {
            exercise(&fields);
        });
    }
}
