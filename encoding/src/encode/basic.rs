//! This module provides implementations for basic encoders: little endian and big endian.

use super::BasicEncode;
use byteordered::{ByteOrdered, Endianness};
use std::io::Write;

type Result<T> = std::io::Result<T>;

/// A basic encoder of primitive elements in little endian.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LittleEndianBasicEncoder;

/// A basic encoder of primitive elements in big endian.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BigEndianBasicEncoder;

macro_rules! impl_basic_encode {
    ($typ: ty, $endianness: expr, $ctor: ident) => {
        impl BasicEncode for $typ {
            fn endianness(&self) -> Endianness {
                $endianness
            }

            fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_u16(value)
            }

            fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_u32(value)
            }

            fn encode_uv<S>(&self, to: S, value: u64) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_u64(value)
            }

            fn encode_ss<S>(&self, to: S, value: i16) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_i16(value)
            }

            fn encode_sl<S>(&self, to: S, value: i32) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_i32(value)
            }

            fn encode_sv<S>(&self, to: S, value: i64) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_i64(value)
            }

            fn encode_fl<S>(&self, to: S, value: f32) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_f32(value)
            }

            fn encode_fd<S>(&self, to: S, value: f64) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_f64(value)
            }
        }
    };
}

impl_basic_encode!(LittleEndianBasicEncoder, Endianness::Little, le);
impl_basic_encode!(BigEndianBasicEncoder, Endianness::Big, be);

/// A basic encoder with support for both Little Endian an Big Endian
/// encoding, decided at run-time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BasicEncoder {
    /// Encode in Little Endian
    LE(LittleEndianBasicEncoder),
    /// Encode in Big Endian
    BE(BigEndianBasicEncoder),
}

impl BasicEncoder {
    /// Creates a basic encoder with the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        match endianness {
            Endianness::Little => LittleEndianBasicEncoder.into(),
            Endianness::Big => BigEndianBasicEncoder.into(),
        }
    }
}

impl From<Endianness> for BasicEncoder {
    fn from(endianness: Endianness) -> Self {
        BasicEncoder::new(endianness)
    }
}

impl From<LittleEndianBasicEncoder> for BasicEncoder {
    fn from(e: LittleEndianBasicEncoder) -> BasicEncoder {
        BasicEncoder::LE(e)
    }
}

impl From<BigEndianBasicEncoder> for BasicEncoder {
    fn from(e: BigEndianBasicEncoder) -> BasicEncoder {
        BasicEncoder::BE(e)
    }
}

macro_rules! for_both {
    ($s: expr, |$e: ident| $f: expr) => {
        match *$s {
            BasicEncoder::LE(ref $e) => $f,
            BasicEncoder::BE(ref $e) => $f,
        }
    };
}

impl BasicEncode for BasicEncoder {
    fn endianness(&self) -> Endianness {
        for_both!(self, |e| e.endianness())
    }

    fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_us(to, value))
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_ul(to, value))
    }

    fn encode_uv<S>(&self, to: S, value: u64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_uv(to, value))
    }

    fn encode_ss<S>(&self, to: S, value: i16) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_ss(to, value))
    }

    fn encode_sl<S>(&self, to: S, value: i32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_sl(to, value))
    }

    fn encode_sv<S>(&self, to: S, value: i64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_sv(to, value))
    }

    fn encode_fl<S>(&self, to: S, value: f32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_fl(to, value))
    }

    fn encode_fd<S>(&self, to: S, value: f64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_fd(to, value))
    }
}
