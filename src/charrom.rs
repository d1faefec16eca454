/// # charrom
///
/// Character ROM of the HP85662A video processor, as best it can be
/// reconstructed; zero-filled where nothing is known.
///
/// Each character owns 8 bytes at `code * 8`. A byte is one pen movement
/// inside the character cell:
///
///   bit 7     pen up (clear: draw)
///   bits 6-4  x, in units of 2
///   bits 3-0  y, in units of 2
///
/// A zero byte ends the glyph. The last byte of a slot is a continuation
/// instead: the walk carries on at `byte * 8`, which is how glyphs longer
/// than seven strokes (or sharing strokes) are built.
use crate::Error;

/// width of a character cell, in screen units
pub const GLYPH_WIDTH: u16 = 16;

/// height of a text line, in screen units
pub const GLYPH_HEIGHT: u16 = 32;

const GLYPH_BYTES: usize = 8;

/// 256 characters, 8 bytes each
#[rustfmt::skip]
pub const CHARACTER_ROM: [u8; 2048] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2e, 0x17, 0xc7, 0x5e, 0x47, 0x00, 0x00, 0x00, // 00 01
    0x1d, 0x4d, 0x6c, 0xb6, 0x3e, 0x36, 0x00, 0x00, 0x26, 0x47, 0x6a, 0x89, 0x4d, 0x00, 0x00, 0x00, // 02 03
    0x0c, 0x1e, 0x4e, 0x5c, 0x00, 0x00, 0x00, 0x00, 0x2e, 0x0d, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 04 05
    0x5c, 0x4e, 0x2e, 0x0d, 0x00, 0x00, 0x00, 0x00, 0x46, 0x26, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, // 06 07
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1e, 0x3e, 0x5d, 0x00, 0x00, 0x00, 0x00, 0x00, // 08 09
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0a 0b
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0c 0d
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0e 0f
    0x0c, 0x1e, 0x4e, 0x5c, 0x4a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 10 11
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 12 13
    0x3b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xba, 0x2b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 14 15
    0x0d, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x69, 0x57, 0x4c, 0x2b, 0x28, 0x48, 0x00, 0x00, // 16 17
    0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x4a, 0x68, 0x46, 0x06, 0x0e, 0x4e, 0x00, 0x00, // 18 19
    0x06, 0x66, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8d, 0x3e, 0x6d, 0x00, 0x00, 0x00, 0x00, 0x00, // 1a 1b
    0x06, 0x0e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0d, 0xe7, 0x6d, 0xb9, 0x65, 0x00, 0x00, 0x00, // 1c 1d
    0x0a, 0x4a, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x36, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 1e 1f
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xb6, 0x36, 0xb8, 0x3e, 0x38, 0x00, 0x00, 0x00, // 20 21
    0xad, 0x2f, 0xcf, 0x4d, 0x00, 0x00, 0x00, 0x00, 0x89, 0x69, 0x09, 0x8c, 0x6c, 0x0c, 0x97, 0x01, // 22 23
    0x88, 0x27, 0x57, 0x69, 0x4a, 0x2a, 0x0b, 0x02, 0x96, 0x5e, 0x16, 0x9d, 0x1d, 0xd7, 0x57, 0x00, // 24 25
    0x8d, 0x66, 0x0d, 0x2e, 0x4d, 0x09, 0x07, 0x03, 0xad, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 26 27
    0xc5, 0x28, 0x2c, 0x4f, 0x00, 0x00, 0x00, 0x00, 0xa5, 0x48, 0x4c, 0x2f, 0x00, 0x00, 0x00, 0x00, // 28 29
    0x88, 0x6c, 0x8c, 0x68, 0xb6, 0x3e, 0x00, 0x00, 0x8a, 0x6a, 0x0a, 0xb7, 0x3d, 0x37, 0x00, 0x00, // 2a 2b
    0xa7, 0x36, 0x13, 0xa6, 0x37, 0x00, 0x00, 0x00, 0x8a, 0x6a, 0x0a, 0x00, 0x00, 0x00, 0x00, 0x00, // 2c 2d
    0xa7, 0x36, 0xb7, 0x26, 0x00, 0x00, 0x00, 0x00, 0x86, 0x5e, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, // 2e 2f
    0x97, 0x4d, 0xdc, 0x58, 0x46, 0x16, 0x08, 0x04, 0x9d, 0x3e, 0x36, 0x3e, 0x96, 0x56, 0x00, 0x00, // 30 31
    0x86, 0x56, 0x06, 0x19, 0x4a, 0x5c, 0x4e, 0x05, 0x87, 0x26, 0x46, 0x58, 0x4a, 0x2a, 0xca, 0x06, // 32 33
    0xc6, 0x4e, 0x08, 0x68, 0x08, 0x4e, 0x46, 0x00, 0x8e, 0x5e, 0x0e, 0x0b, 0x3b, 0x5a, 0x58, 0x07, // 34 35
    0x8a, 0x4a, 0x58, 0x46, 0x16, 0x08, 0x0c, 0x09, 0x96, 0x5e, 0x0e, 0x5e, 0x16, 0x00, 0x00, 0x00, // 36 37
    0x9a, 0x4a, 0x58, 0x46, 0x16, 0x08, 0x1a, 0x10, 0xda, 0x1a, 0x0c, 0x1e, 0x4e, 0x5c, 0x58, 0x07, // 38 39
    0xa6, 0x37, 0xb6, 0x27, 0xba, 0x2b, 0xaa, 0x14, 0xa7, 0x36, 0x13, 0xa6, 0x37, 0xbb, 0x2a, 0x15, // 3a 3b
    0xe6, 0x0a, 0x6e, 0x0a, 0x66, 0x00, 0x00, 0x00, 0x88, 0x68, 0x08, 0x8b, 0x6b, 0x0b, 0x00, 0x00, // 3c 3d
    0x86, 0x6a, 0x0e, 0x6a, 0x06, 0x00, 0x00, 0x00, 0xb6, 0x36, 0xb8, 0x3a, 0x6b, 0x6d, 0x3e, 0x16, // 3e 3f
    0xc6, 0x26, 0x08, 0x0c, 0x2e, 0x4e, 0x6c, 0x17, 0x98, 0x58, 0x18, 0x86, 0x3e, 0x66, 0x3e, 0x18, // 40 41
    0xc6, 0x06, 0x0e, 0x4e, 0x6c, 0x4a, 0x0a, 0x19, 0x87, 0x0d, 0x07, 0x36, 0x67, 0xed, 0x3e, 0x16, // 42 43
    0x8e, 0x06, 0x46, 0x68, 0x6c, 0x4e, 0x0e, 0x18, 0x8a, 0x5a, 0x0a, 0x86, 0x0e, 0x6e, 0x0e, 0x1a, // 44 45
    0x8a, 0x5a, 0x0a, 0x86, 0x0e, 0x6e, 0x0e, 0x18, 0xca, 0x6a, 0x67, 0x36, 0x07, 0x0d, 0x07, 0x1b, // 46 47
    0xe6, 0x6e, 0x66, 0xea, 0x0a, 0x6a, 0x8e, 0x1c, 0x96, 0x56, 0xb6, 0x3e, 0x36, 0x9e, 0x5e, 0x00, // 48 49
    0x88, 0x16, 0x46, 0x58, 0x5e, 0x58, 0x00, 0x00, 0xe6, 0x2a, 0x66, 0xde, 0x09, 0x5e, 0x8e, 0x1c, // 4a 4b
    0x86, 0x0e, 0x06, 0x56, 0x06, 0x00, 0x00, 0x00, 0x8e, 0x38, 0x6e, 0x66, 0x6e, 0x38, 0x0e, 0x1c, // 4c 4d
    0x86, 0x0e, 0x66, 0x6e, 0x66, 0x0e, 0x06, 0x00, 0xe7, 0x6d, 0x67, 0x36, 0x07, 0x0d, 0x07, 0x1b, // 4e 4f
    0x8e, 0x06, 0x0e, 0x5e, 0x6c, 0x5a, 0x0a, 0x00, 0x87, 0x0d, 0x07, 0x36, 0x67, 0x6d, 0x3e, 0x1d, // 50 51
    0xde, 0x0e, 0x06, 0x0e, 0x5e, 0x6c, 0x5a, 0x1e, 0xed, 0x3e, 0x0d, 0x0b, 0x4a, 0x69, 0x67, 0x1f, // 52 53
    0x8e, 0x6e, 0x0e, 0xbe, 0x36, 0x3e, 0x00, 0x00, 0x87, 0x0e, 0x07, 0x36, 0x67, 0x6e, 0x67, 0x00, // 54 55
    0xb6, 0x0e, 0x36, 0x6e, 0x36, 0x00, 0x00, 0x00, 0x8e, 0x16, 0x3c, 0x56, 0x6e, 0x56, 0x3c, 0x7f, // 56 57
    0x86, 0x6e, 0x06, 0x8e, 0x66, 0x0e, 0x00, 0x00, 0x8e, 0x3a, 0x6e, 0x3a, 0x36, 0x3a, 0x0e, 0x00, // 58 59
    0x8e, 0x6e, 0x06, 0x66, 0x06, 0x6e, 0x0e, 0x00, 0xc5, 0x25, 0x2f, 0x25, 0xaf, 0x4f, 0x00, 0x00, // 5a 5b
    0x9e, 0x56, 0x1e, 0x00, 0x00, 0x00, 0x00, 0x00, 0xa5, 0x45, 0x4f, 0x45, 0xcf, 0x2f, 0x00, 0x00, // 5c 5d
    0x8b, 0x2e, 0x26, 0x2e, 0x4b, 0x00, 0x00, 0x00, 0x82, 0x62, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, // 5e 5f
    0xbf, 0x4d, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xd7, 0x36, 0x16, 0x18, 0x59, 0xd6, 0x5a, 0x80, // 60 61
    0x96, 0x1e, 0x16, 0x97, 0x36, 0x57, 0x5a, 0x80, 0xda, 0x3b, 0x1a, 0x17, 0x36, 0x57, 0x00, 0x00, // 62 63
    0xd6, 0x5e, 0x56, 0xd7, 0x36, 0x17, 0x1a, 0x81, 0x99, 0x59, 0x4b, 0x2b, 0x19, 0x17, 0x36, 0x82, // 64 65
    0xac, 0x26, 0x2c, 0x3e, 0x5e, 0x9b, 0x4b, 0x00, 0xd4, 0x5b, 0x54, 0x33, 0x14, 0xda, 0x3b, 0x83, // 66 67
    0x96, 0x1e, 0x16, 0x9a, 0x3b, 0x5a, 0x56, 0x00, 0xbb, 0x36, 0x3b, 0xbe, 0x3e, 0x00, 0x00, 0x00, // 68 69
    0x94, 0x34, 0x46, 0x4b, 0x46, 0xce, 0x4e, 0x00, 0x96, 0x1e, 0x16, 0x98, 0x4b, 0xb9, 0x56, 0x00, // 6a 6b
    0xb6, 0x3e, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x86, 0x0b, 0x8a, 0x2b, 0x39, 0xb6, 0x3a, 0x84, // 6c 6d
    0x96, 0x1b, 0x9a, 0x3b, 0x5a, 0x56, 0x00, 0x00, 0x97, 0x1a, 0x3b, 0x5a, 0x57, 0x36, 0x17, 0x00, // 6e 6f
    0x93, 0x1b, 0x13, 0x97, 0x36, 0x57, 0x5a, 0x80, 0xd3, 0x5b, 0x53, 0xd7, 0x36, 0x17, 0x1a, 0x81, // 70 71
    0x96, 0x1b, 0x9a, 0x3b, 0x5a, 0x00, 0x00, 0x00, 0xda, 0x3b, 0x1a, 0x57, 0x1a, 0xd7, 0x36, 0x85, // 72 73
    0xb6, 0x3e, 0x36, 0x56, 0x9b, 0x5b, 0x00, 0x00, 0x9b, 0x17, 0x36, 0x57, 0xd6, 0x5b, 0x00, 0x00, // 74 75
    0x9b, 0x36, 0x5b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x16, 0x3b, 0x56, 0x6b, 0x00, 0x00, 0x00, // 76 77
    0x96, 0x5b, 0x16, 0x9b, 0x56, 0x1b, 0x00, 0x00, 0x9b, 0x36, 0x1b, 0xb6, 0x5b, 0x36, 0x23, 0x00, // 78 79
    0x9b, 0x5b, 0x16, 0x56, 0x16, 0x5b, 0x1b, 0x00, 0xd5, 0x35, 0x39, 0x1a, 0x3b, 0x3f, 0x5f, 0x00, // 7a 7b
    0xb3, 0x3f, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x95, 0x35, 0x39, 0x5a, 0x3b, 0x3f, 0x1f, 0x00, // 7c 7d
    0x9e, 0x2f, 0x4e, 0x5f, 0x00, 0x00, 0x00, 0x00, 0x16, 0x0e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 7e 7f
    0x3b, 0x1a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3b, 0x5a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 80 81
    0x57, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1a, 0x17, 0x36, 0x57, 0x00, 0x00, 0x00, 0x00, // 82 83
    0x5b, 0x69, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x17, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 84 85
    0x68, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x4e, 0x5c, 0x8a, 0x3a, 0x00, 0x00, 0x00, 0x00, // 86 87
    0x4b, 0x6c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x58, 0x37, 0x3d, 0x37, 0x18, 0x0a, 0x00, 0x00, // 88 89
    0xc6, 0x58, 0x4a, 0x1d, 0x2f, 0x4f, 0x5d, 0x00, 0x6a, 0x0a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 8a 8b
    0x35, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x15, 0x34, 0x55, 0x00, 0x00, 0x00, 0x00, 0x00, // 8c 8d
    0x5a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x49, 0x3b, 0x1c, 0x0a, 0x00, 0x00, 0x00, 0x00, // 8e 8f
    0x4d, 0x1e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 90 91
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 92 93
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x56, 0x5e, 0xc6, 0x66, 0x86, 0x26, 0x00, 0x00, // 94 95
    0xb6, 0x3e, 0x36, 0xae, 0x4e, 0x00, 0x00, 0x00, 0x6b, 0x69, 0x37, 0x09, 0x0b, 0x3d, 0x00, 0x00, // 96 97
    0xc3, 0x4d, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x47, 0x6b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 98 99
    0x1a, 0xca, 0x58, 0x46, 0x16, 0x08, 0x00, 0x00, 0x1c, 0x2e, 0x4d, 0x00, 0x00, 0x00, 0x00, 0x00, // 9a 9b
    0x2e, 0xbc, 0x5c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x5b, 0xd8, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, // 9c 9d
    0x26, 0x18, 0x99, 0x59, 0x00, 0x00, 0x00, 0x00, 0x4c, 0xac, 0x1e, 0x99, 0x49, 0x00, 0x00, 0x00, // 9e 9f
    0x86, 0x3e, 0x66, 0x3e, 0x06, 0x00, 0x00, 0x00, 0x9f, 0x3d, 0x5f, 0x00, 0x00, 0x00, 0x00, 0x00, // a0 a1
    0x9f, 0x1f, 0xdf, 0x5f, 0x00, 0x00, 0x00, 0x00, 0x95, 0x5e, 0x15, 0x8b, 0x6b, 0x0b, 0x88, 0x86, // a2 a3
    0xe7, 0x46, 0x27, 0x06, 0x18, 0x1c, 0x2e, 0x87, 0xe8, 0x49, 0x3b, 0x1c, 0x0a, 0x18, 0x39, 0x88, // a4 a5
    0x8a, 0x1c, 0x3d, 0x5c, 0x6a, 0x0a, 0x6a, 0x89, 0xbf, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // a6 a7
    0x8a, 0x6a, 0x0a, 0x3c, 0x0a, 0x38, 0x00, 0x00, 0xea, 0x0a, 0x6a, 0x38, 0x6a, 0x3c, 0x00, 0x00, // a8 a9
    0x95, 0x23, 0x43, 0x55, 0x28, 0x1a, 0x2c, 0x8a, 0x86, 0x66, 0x06, 0xb7, 0x3d, 0x37, 0x8a, 0x8b, // aa ab
    0x99, 0x36, 0x3e, 0x36, 0x59, 0x00, 0x00, 0x00, 0x8f, 0x6f, 0x0f, 0x00, 0x00, 0x00, 0x00, 0x00, // ac ad
    0xaa, 0x3b, 0xab, 0x3a, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6a, 0x0a, 0xb7, 0x37, 0xbd, 0x3d, 0x00, // ae af
    0x86, 0x04, 0x23, 0x44, 0x46, 0x27, 0x06, 0x00, 0xa3, 0x27, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // b0 b1
    0x86, 0x27, 0x46, 0x03, 0x43, 0x00, 0x00, 0x00, 0x87, 0x47, 0x43, 0x03, 0xa5, 0x45, 0x00, 0x00, // b2 b3
    0x8d, 0x2d, 0xcb, 0x4f, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x2f, 0x4e, 0x0b, 0x4b, 0x00, 0x00, 0x00, // b4 b5
    0x8b, 0x4b, 0x4f, 0x0f, 0xad, 0x4d, 0x00, 0x00, 0x8a, 0x2a, 0x35, 0x6f, 0x00, 0x00, 0x00, 0x00, // b6 b7
    0x89, 0x2b, 0x49, 0x6b, 0x00, 0x00, 0x00, 0x00, 0x88, 0x68, 0x08, 0x8a, 0x2c, 0x4a, 0x6c, 0x00, // b8 b9
    0xa6, 0x2e, 0x26, 0xc6, 0x4e, 0x46, 0x00, 0x00, 0x96, 0x16, 0xbb, 0x3b, 0xd6, 0x56, 0x00, 0x00, // ba bb
    0x8b, 0x6e, 0x0b, 0x68, 0x0b, 0x86, 0x66, 0x18, 0x8c, 0x6c, 0x0c, 0x8a, 0x6a, 0x0a, 0x88, 0x86, // bc bd
    0xeb, 0x08, 0x6b, 0x0e, 0x6b, 0x86, 0x66, 0x18, 0x9d, 0x3f, 0x5d, 0x00, 0x00, 0x00, 0x00, 0x00, // be bf
    0x86, 0x66, 0x06, 0x6e, 0x06, 0x00, 0x00, 0x00, 0x83, 0x27, 0x43, 0xb4, 0x14, 0x00, 0x00, 0x00, // c0 c1
    0xee, 0x5f, 0x4e, 0x95, 0x24, 0x35, 0x4e, 0x8c, 0xd8, 0x37, 0x18, 0x1b, 0x3c, 0x5b, 0xbe, 0x8c, // c2 c3
    0x8e, 0x6e, 0x36, 0x0e, 0x36, 0x6e, 0x0e, 0x00, 0xb9, 0x37, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // c4 c5
    0xa6, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x92, 0x31, 0x52, 0x58, 0xd7, 0x38, 0x17, 0x8d, // c6 c7
    0xb5, 0x5e, 0x35, 0xca, 0x7a, 0x65, 0x7a, 0x00, 0xa3, 0x26, 0xa7, 0x27, 0x00, 0x00, 0x00, 0x00, // c8 c9
    0x6a, 0x46, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0xee, 0x0e, 0x4a, 0x06, 0x66, 0x00, 0x00, 0x00, // ca cb
    0x87, 0x03, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x0b, 0x8e, 0x2f, 0x4e, 0x4b, 0x00, 0x00, // cc cd
    0x83, 0x07, 0x86, 0x27, 0x46, 0x43, 0x00, 0x00, 0xab, 0x0c, 0x0e, 0x2f, 0x4e, 0x4c, 0x2b, 0x00, // ce cf
    0xaa, 0x01, 0x2a, 0x5a, 0x45, 0x15, 0xc5, 0x8e, 0x8a, 0x18, 0x39, 0x4b, 0x6c, 0x7a, 0x68, 0x8f, // d0 d1
    0x87, 0x03, 0x86, 0x27, 0x46, 0x00, 0x00, 0x00, 0x84, 0x23, 0x44, 0x06, 0x27, 0x46, 0x00, 0x00, // d2 d3
    0xa3, 0x27, 0x87, 0x47, 0x00, 0x00, 0x00, 0x00, 0xcb, 0x2a, 0x18, 0x26, 0x46, 0x58, 0x5a, 0x90, // d4 d5
    0x87, 0x23, 0x47, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc6, 0x26, 0xb6, 0x3b, 0x00, 0x00, 0x00, 0x00, // d6 d7
    0x85, 0x45, 0x05, 0x8f, 0x4f, 0x0f, 0x00, 0x00, 0x81, 0x05, 0x01, 0xc1, 0x45, 0x41, 0x00, 0x00, // d8 d9
    0x1a, 0xd9, 0x5b, 0xee, 0x0e, 0x6e, 0x00, 0x00, 0x96, 0x1e, 0x16, 0x8e, 0x6e, 0x0e, 0xde, 0x95, // da db
    0x8a, 0x5a, 0xdc, 0x58, 0x46, 0x16, 0x08, 0x04, 0x8d, 0x0a, 0x39, 0x6a, 0x6d, 0xa6, 0x46, 0x96, // dc dd
    0xa6, 0x46, 0xb6, 0x3e, 0xae, 0x4e, 0xbd, 0x97, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // de df
    0x8a, 0x2b, 0x28, 0x36, 0x56, 0x68, 0x6b, 0x98, 0xe6, 0x48, 0x4a, 0x2b, 0x0a, 0x07, 0x26, 0x99, // e0 e1
    0x8c, 0x03, 0x0c, 0x1e, 0x4e, 0x5c, 0x4a, 0x9a, 0x8b, 0x2b, 0x45, 0x64, 0x94, 0x5b, 0x00, 0x00, // e2 e3
    0xbb, 0x1a, 0x17, 0x36, 0x57, 0x5a, 0x3b, 0x9b, 0x99, 0x49, 0xdb, 0x3c, 0x1b, 0x17, 0x36, 0x82, // e4 e5
    0xb3, 0x3d, 0xda, 0x57, 0x36, 0x17, 0x1a, 0x81, 0x8a, 0x2b, 0x46, 0x43, 0xc6, 0x6b, 0x00, 0x00, // e6 e7
    0x96, 0x1b, 0x9a, 0x3b, 0x5a, 0x53, 0x00, 0x00, 0xc7, 0x26, 0x2b, 0x26, 0x00, 0x00, 0x00, 0x00, // e8 e9
    0x94, 0x33, 0x54, 0x36, 0x28, 0x2a, 0x3c, 0x9c, 0x96, 0x1b, 0x99, 0x4b, 0xa9, 0x56, 0x00, 0x00, // ea eb
    0x96, 0x3b, 0x9e, 0x3c, 0x56, 0x3c, 0x00, 0x00, 0x93, 0x1b, 0x13, 0x98, 0x26, 0x46, 0x58, 0x9d, // ec ed
    0x8a, 0x2b, 0x36, 0x59, 0x5b, 0x00, 0x00, 0x00, 0x97, 0x1a, 0x3b, 0x5a, 0x57, 0x36, 0x17, 0x00, // ee ef
    0xa6, 0x2b, 0x8a, 0x2b, 0x6b, 0xcb, 0x46, 0x00, 0x98, 0x1a, 0x2c, 0x4c, 0x5a, 0x58, 0x46, 0x9e, // f0 f1
    0xa3, 0x15, 0x1a, 0x3b, 0x5a, 0x57, 0x36, 0x85, 0xec, 0x3b, 0x1a, 0x17, 0x36, 0x57, 0x5a, 0x14, // f2 f3
    0x8a, 0x2b, 0x6b, 0xbb, 0x36, 0x3b, 0x00, 0x00, 0x8a, 0x2b, 0x28, 0x36, 0x56, 0x68, 0x6b, 0x00, // f4 f5
    0xa4, 0x44, 0x46, 0x26, 0x18, 0x1a, 0x2c, 0x9f, 0x9b, 0x08, 0x16, 0x37, 0x56, 0x68, 0x5b, 0xc5, // f6 f7
    0xee, 0x0e, 0x6e, 0x6c, 0x9e, 0x16, 0x1e, 0xc6, 0x86, 0x3e, 0x66, 0x06, 0x66, 0x3e, 0x06, 0x00, // f8 f9
    0x86, 0x26, 0x0a, 0x0c, 0x2e, 0x4e, 0x6c, 0xca, 0xe8, 0x66, 0x06, 0x4a, 0x0e, 0x6e, 0x6c, 0xcb, // fa fb
    0xc6, 0x66, 0xd6, 0x3e, 0x16, 0x3e, 0x56, 0xc6, 0x8b, 0x0d, 0x2e, 0x3b, 0x4e, 0x6d, 0x6b, 0xd7, // fc fd
    0x86, 0x66, 0x06, 0x99, 0x1b, 0x9a, 0x5a, 0xda, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // fe ff
];

/// Walk the glyph for `code`, calling `move_fn(x, y, draw)` for every
/// point, relative to the cell origin `(origin_x, origin_y)`.
pub fn draw_glyph<F>(origin_x: u16, origin_y: u16, code: u8, move_fn: F) -> Result<(), Error>
where
    F: FnMut(u16, u16, bool) -> Result<(), Error>,
{
    walk(&CHARACTER_ROM, origin_x, origin_y, code, move_fn)
}

/// Same walk over any table laid out like `CHARACTER_ROM`.
///
/// A chain that keeps going after every byte of the table has been visited
/// can only be a cycle; that, or a continuation pointing past the end of the
/// table, is reported as `Error::RunawayGlyph`.
pub(crate) fn walk<F>(
    rom: &[u8],
    origin_x: u16,
    origin_y: u16,
    code: u8,
    mut move_fn: F,
) -> Result<(), Error>
where
    F: FnMut(u16, u16, bool) -> Result<(), Error>,
{
    let mut p = code as usize * GLYPH_BYTES;
    for _ in 0..rom.len() {
        let v = match rom.get(p) {
            Some(v) => *v,
            None => break,
        };
        if v == 0 {
            return Ok(());
        }
        if p % GLYPH_BYTES == GLYPH_BYTES - 1 {
            p = v as usize * GLYPH_BYTES;
            continue;
        }
        let x = origin_x.wrapping_add(2 * ((v as u16 >> 4) & 0x7));
        let y = origin_y.wrapping_add(2 * (v as u16 & 0xf));
        move_fn(x, y, v & 0x80 == 0)?;
        p += 1;
    }
    Err(Error::RunawayGlyph { code })
}

/// every character must terminate
pub fn self_check() -> Result<(), Error> {
    for code in 0..=u8::MAX {
        draw_glyph(0, 0, code, |_, _, _| Ok(()))?;
    }
    Ok(())
}
