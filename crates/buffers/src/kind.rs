//! Element kinds and scalar element values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Reader, Writer};

/// The fixed-width numeric interpretation applied to every element of a view.
///
/// All kinds are stored little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
}

impl ElementKind {
    /// Every supported kind, narrowest first.
    pub const ALL: [ElementKind; 10] = [
        ElementKind::Int8,
        ElementKind::Uint8,
        ElementKind::Int16,
        ElementKind::Uint16,
        ElementKind::Int32,
        ElementKind::Uint32,
        ElementKind::Int64,
        ElementKind::Uint64,
        ElementKind::Float32,
        ElementKind::Float64,
    ];

    /// Width of one element in bytes.
    pub const fn width(self) -> usize {
        match self {
            ElementKind::Int8 | ElementKind::Uint8 => 1,
            ElementKind::Int16 | ElementKind::Uint16 => 2,
            ElementKind::Int32 | ElementKind::Uint32 | ElementKind::Float32 => 4,
            ElementKind::Int64 | ElementKind::Uint64 | ElementKind::Float64 => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Int8 => "Int8",
            ElementKind::Uint8 => "Uint8",
            ElementKind::Int16 => "Int16",
            ElementKind::Uint16 => "Uint16",
            ElementKind::Int32 => "Int32",
            ElementKind::Uint32 => "Uint32",
            ElementKind::Int64 => "Int64",
            ElementKind::Uint64 => "Uint64",
            ElementKind::Float32 => "Float32",
            ElementKind::Float64 => "Float64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single element value tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::I8(_) => ElementKind::Int8,
            Element::U8(_) => ElementKind::Uint8,
            Element::I16(_) => ElementKind::Int16,
            Element::U16(_) => ElementKind::Uint16,
            Element::I32(_) => ElementKind::Int32,
            Element::U32(_) => ElementKind::Uint32,
            Element::I64(_) => ElementKind::Int64,
            Element::U64(_) => ElementKind::Uint64,
            Element::F32(_) => ElementKind::Float32,
            Element::F64(_) => ElementKind::Float64,
        }
    }
}

/// Rust scalar types that map one-to-one onto an [`ElementKind`].
pub trait ElementType: Copy + Sized {
    const KIND: ElementKind;

    fn write(self, writer: &mut Writer);

    fn read(reader: &mut Reader<'_>) -> Self;
}

macro_rules! element_type {
    ($ty:ty, $kind:ident, $method:ident) => {
        impl ElementType for $ty {
            const KIND: ElementKind = ElementKind::$kind;

            #[inline]
            fn write(self, writer: &mut Writer) {
                writer.$method(self);
            }

            #[inline]
            fn read(reader: &mut Reader<'_>) -> Self {
                reader.$method()
            }
        }
    };
}

element_type!(i8, Int8, i8);
element_type!(u8, Uint8, u8);
element_type!(i16, Int16, i16);
element_type!(u16, Uint16, u16);
element_type!(i32, Int32, i32);
element_type!(u32, Uint32, u32);
element_type!(i64, Int64, i64);
element_type!(u64, Uint64, u64);
element_type!(f32, Float32, f32);
element_type!(f64, Float64, f64);
