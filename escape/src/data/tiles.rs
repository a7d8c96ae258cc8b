/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Tile bitmaps: 8x8 pixel glyphs, one bank for interiors and three for
//! the exterior map's supertile ranges.

/// Interior room tiles.
pub static INTERIOR_TILES: [[u8; 8]; 160] = [
    [0x93, 0xA3, 0x14, 0x30, 0x4A, 0x52, 0x14, 0xC3],
    [0x36, 0x76, 0x4C, 0x75, 0x1C, 0x76, 0x20, 0x66],
    [0xC4, 0x94, 0x31, 0x10, 0x56, 0x44, 0x24, 0xB1],
    [0xE4, 0xF0, 0x68, 0xB0, 0xF1, 0x84, 0x74, 0x74],
    [0xB0, 0xD4, 0x32, 0x44, 0x53, 0x12, 0x4D, 0xC5],
    [0x76, 0x33, 0x64, 0x72, 0x3C, 0x27, 0x5E, 0x63],
    [0x3A, 0x5D, 0xCE, 0x5C, 0xED, 0x7E, 0x5A, 0x6C],
    [0x1C, 0x0C, 0x08, 0x6C, 0x22, 0x8D, 0xFC, 0xEE],
    [0x0A, 0xED, 0x8D, 0x0E, 0x5A, 0x1E, 0x76, 0x6C],
    [0x1C, 0x48, 0x18, 0xCC, 0x66, 0x4C, 0x62, 0x7E],
    [0x10, 0x90, 0x2B, 0x04, 0x03, 0xC5, 0x9E, 0x00],
    [0x7E, 0xDA, 0x58, 0x7E, 0x28, 0x9A, 0x56, 0x9E],
    [0x32, 0x66, 0x7E, 0x66, 0x9B, 0x44, 0x2C, 0xB3],
    [0x68, 0x3A, 0x20, 0x3C, 0xC1, 0x2C, 0x04, 0x2A],
    [0x22, 0x30, 0x23, 0x22, 0x90, 0x34, 0x4C, 0x10],
    [0x5E, 0x5E, 0x8F, 0x0A, 0x6C, 0x6E, 0x5B, 0x6C],
    [0x5C, 0xDD, 0x2E, 0x4E, 0x7F, 0xCB, 0xED, 0x8B],
    [0x72, 0xA5, 0xF1, 0x62, 0x12, 0xE5, 0x02, 0xC3],
    [0xC7, 0xF2, 0x06, 0x50, 0x5A, 0x42, 0x52, 0xD6],
    [0x24, 0x24, 0x5E, 0x33, 0x48, 0x14, 0x30, 0x17],
    [0x64, 0x35, 0x4A, 0x04, 0xD4, 0x16, 0x74, 0x35],
    [0x7C, 0x5C, 0xF8, 0xFE, 0x62, 0x38, 0x36, 0xCD],
    [0x06, 0x02, 0x1E, 0x54, 0x38, 0x54, 0x10, 0x53],
    [0xA8, 0xAB, 0x36, 0x98, 0x2F, 0x4E, 0x04, 0x9A],
    [0xFB, 0xEB, 0xC5, 0xBE, 0x7A, 0x2A, 0xF4, 0x5A],
    [0x72, 0x87, 0x7C, 0x34, 0x4A, 0x04, 0x9D, 0x66],
    [0x22, 0xF3, 0x22, 0xF6, 0xFE, 0xB7, 0x0E, 0xA3],
    [0x5A, 0x4A, 0xD4, 0x5B, 0x2A, 0x58, 0x42, 0x1B],
    [0x12, 0x04, 0x30, 0x00, 0x51, 0x10, 0x30, 0x13],
    [0xF0, 0xB3, 0x61, 0x91, 0xC2, 0xE4, 0xC4, 0xB4],
    [0x94, 0xA7, 0x4A, 0x26, 0x1C, 0xB7, 0x3C, 0x62],
    [0x3E, 0x3F, 0x59, 0x7E, 0x2C, 0x3B, 0x74, 0x7F],
    [0x16, 0x26, 0x5C, 0xB7, 0xAA, 0xB6, 0x35, 0xB6],
    [0xC5, 0x36, 0x2A, 0x95, 0x16, 0x54, 0x68, 0x14],
    [0x3F, 0x7E, 0x7C, 0x3C, 0xCA, 0x0E, 0x52, 0x1C],
    [0x42, 0x20, 0x66, 0x46, 0x7C, 0x56, 0x8D, 0x02],
    [0xF3, 0xC1, 0x00, 0x14, 0x02, 0xE0, 0x1C, 0x70],
    [0x34, 0x00, 0x09, 0x04, 0x44, 0x17, 0x68, 0x04],
    [0x15, 0x37, 0x29, 0x54, 0x76, 0x45, 0xFC, 0x04],
    [0x91, 0x00, 0x0A, 0x10, 0x42, 0x95, 0x78, 0x14],
    [0x6C, 0x3E, 0x7C, 0x5E, 0xAE, 0xFD, 0xF6, 0xED],
    [0x25, 0x31, 0xD3, 0x62, 0xB4, 0x52, 0x4F, 0x74],
    [0x2A, 0x18, 0x46, 0x28, 0x3C, 0x2A, 0xCC, 0x18],
    [0x9C, 0xAC, 0x2C, 0x99, 0x73, 0x9C, 0x44, 0x8E],
    [0x6A, 0x6E, 0xD4, 0x58, 0xBF, 0x7A, 0x56, 0xBF],
    [0x58, 0x5D, 0x2B, 0x1C, 0x02, 0x1C, 0x70, 0x5D],
    [0x71, 0x43, 0xC7, 0x43, 0xED, 0x62, 0x18, 0x32],
    [0x0C, 0x1D, 0x5A, 0x1C, 0x30, 0x48, 0x7A, 0x4D],
    [0x74, 0x16, 0xAD, 0x17, 0x3B, 0x06, 0x22, 0x16],
    [0xCC, 0x8F, 0x2C, 0xED, 0x2E, 0x4A, 0x74, 0x8B],
    [0x06, 0x66, 0x2C, 0x62, 0xD8, 0x35, 0x22, 0x14],
    [0xC2, 0x02, 0x36, 0xE3, 0x0A, 0x46, 0x2E, 0x12],
    [0x20, 0x60, 0x6A, 0xE6, 0xD6, 0xC5, 0xBE, 0x74],
    [0x2A, 0xEF, 0x7C, 0x3A, 0x4A, 0x2E, 0x76, 0x3E],
    [0x12, 0x06, 0x34, 0xE1, 0x2E, 0xE2, 0x5E, 0xF2],
    [0x2A, 0x4E, 0x5E, 0x6E, 0x88, 0x5C, 0x56, 0x7A],
    [0x46, 0x54, 0x18, 0x06, 0x48, 0x47, 0x02, 0x77],
    [0x0C, 0x5D, 0x08, 0x0E, 0x30, 0x1D, 0x2C, 0x1C],
    [0x4E, 0x7D, 0xFA, 0x4D, 0x32, 0x38, 0x63, 0x5C],
    [0x38, 0x1A, 0x47, 0xEB, 0xAD, 0x9B, 0x4C, 0x3E],
    [0x10, 0x02, 0x34, 0x13, 0x5A, 0x02, 0x32, 0x06],
    [0x30, 0xB4, 0xD8, 0x34, 0x06, 0xF4, 0x36, 0x20],
    [0x78, 0xBD, 0x42, 0xDB, 0xE7, 0x6A, 0x6D, 0xDA],
    [0xB7, 0xE4, 0x5E, 0xD5, 0x1A, 0xC4, 0x22, 0xA2],
    [0x60, 0x40, 0x64, 0x40, 0xE1, 0x52, 0x10, 0x64],
    [0x32, 0x32, 0xDE, 0x72, 0xDC, 0x56, 0xB6, 0x76],
    [0x5F, 0x4E, 0xBF, 0x4C, 0x2D, 0x5E, 0x6E, 0x1B],
    [0x3D, 0x2F, 0x58, 0x2C, 0x34, 0x59, 0x50, 0x1C],
    [0xB3, 0x30, 0x12, 0xC6, 0x2C, 0x30, 0x3E, 0x56],
    [0x8D, 0xDD, 0x28, 0xDF, 0x32, 0x6C, 0x23, 0x4E],
    [0x48, 0xFA, 0x50, 0x58, 0xE7, 0xDB, 0x4A, 0xCB],
    [0x4E, 0xCE, 0x1C, 0x5C, 0x6F, 0x8E, 0x75, 0x4E],
    [0x7C, 0x6C, 0x40, 0x7D, 0x24, 0x2C, 0x54, 0x39],
    [0x76, 0xF6, 0x9F, 0xC4, 0x3C, 0x16, 0x0E, 0xD4],
    [0x04, 0x40, 0x30, 0x72, 0x43, 0xC3, 0x92, 0x70],
    [0x7C, 0x5C, 0x38, 0xFE, 0xF0, 0xDD, 0xE6, 0x68],
    [0x04, 0x74, 0x48, 0x51, 0x21, 0x54, 0x32, 0x50],
    [0x38, 0xF9, 0xC2, 0x28, 0xA6, 0x6C, 0x5A, 0xA9],
    [0x4E, 0x6A, 0xB7, 0x5A, 0x7E, 0xE8, 0x06, 0xCE],
    [0x62, 0x76, 0x74, 0x22, 0x08, 0x26, 0x93, 0x52],
    [0x6E, 0x7F, 0xEF, 0x2F, 0xA8, 0x6F, 0x72, 0x3A],
    [0x08, 0x2A, 0x05, 0x0C, 0x22, 0x58, 0x75, 0xA8],
    [0x02, 0x42, 0x6A, 0x52, 0x5C, 0x34, 0x28, 0x24],
    [0x18, 0x2C, 0x19, 0x0E, 0x22, 0x48, 0x70, 0x3E],
    [0x12, 0xA2, 0x37, 0xA0, 0x83, 0xB5, 0x9D, 0x32],
    [0x16, 0x16, 0x6C, 0x14, 0x41, 0x44, 0xF4, 0x05],
    [0x18, 0x18, 0xB3, 0x18, 0x72, 0xCD, 0x0E, 0xCA],
    [0x6A, 0x4A, 0xA6, 0x7B, 0x7C, 0x59, 0x0A, 0x5B],
    [0xD3, 0x06, 0x04, 0x52, 0x3A, 0xD3, 0x34, 0xD0],
    [0x78, 0x3C, 0x4A, 0x29, 0xB0, 0x7C, 0xA4, 0x28],
    [0x24, 0xB6, 0x6D, 0x26, 0x72, 0xA4, 0x24, 0x50],
    [0x42, 0x12, 0x53, 0x12, 0x58, 0x02, 0x1A, 0x02],
    [0xCB, 0x3E, 0x90, 0xD8, 0x9B, 0x58, 0x56, 0xFF],
    [0x42, 0x10, 0x24, 0x47, 0x4A, 0x17, 0xB2, 0x17],
    [0x70, 0x14, 0x04, 0x40, 0x30, 0xC5, 0x06, 0x62],
    [0x6E, 0x7A, 0x5E, 0xBF, 0xDD, 0x2C, 0xEE, 0x9C],
    [0x16, 0xD1, 0x6B, 0x26, 0x16, 0x90, 0xE9, 0xA7],
    [0x65, 0x14, 0x68, 0x40, 0x41, 0x00, 0xB1, 0x54],
    [0xA7, 0xA7, 0x3E, 0xF7, 0x5C, 0x62, 0xED, 0xB7],
    [0x33, 0x14, 0x20, 0x44, 0x11, 0x32, 0x3A, 0x10],
    [0x58, 0x48, 0x26, 0xEB, 0x44, 0x4C, 0x9A, 0xD8],
    [0x1C, 0x2C, 0x08, 0x49, 0x20, 0x1C, 0xB5, 0x58],
    [0x62, 0x26, 0x6E, 0x72, 0x1C, 0x36, 0xBA, 0x25],
    [0xC1, 0xC0, 0xB1, 0x40, 0x43, 0xD3, 0x12, 0xD1],
    [0x08, 0x08, 0x65, 0x2A, 0xEA, 0x7A, 0xC1, 0x38],
    [0x2A, 0xFA, 0x78, 0xEB, 0xD8, 0x3E, 0x44, 0xEA],
    [0x31, 0x22, 0x40, 0x22, 0xD1, 0x22, 0x30, 0x60],
    [0x22, 0x77, 0x47, 0x22, 0xDD, 0x23, 0x91, 0x32],
    [0x02, 0x34, 0x2E, 0x05, 0x1C, 0x37, 0xB3, 0x07],
    [0x9A, 0xAA, 0x77, 0x2A, 0xFC, 0x7A, 0x0C, 0x8B],
    [0x03, 0x30, 0x14, 0x02, 0x3E, 0x03, 0x29, 0x30],
    [0xF1, 0x56, 0x0C, 0x46, 0x22, 0xA1, 0x36, 0x46],
    [0xE3, 0x76, 0x59, 0x16, 0x08, 0xB6, 0x26, 0xA6],
    [0x3A, 0x9F, 0x7D, 0x2E, 0xBF, 0xAB, 0x74, 0xAD],
    [0x5E, 0x1A, 0xE0, 0x4B, 0x7C, 0x4E, 0x06, 0x58],
    [0x16, 0x36, 0x6A, 0x36, 0xD1, 0x36, 0x3A, 0x07],
    [0x10, 0x11, 0x66, 0x00, 0x66, 0x33, 0x4C, 0x13],
    [0x68, 0xB8, 0x7A, 0x5E, 0x32, 0x5E, 0x76, 0xE9],
    [0xA1, 0x91, 0x73, 0x74, 0x74, 0x32, 0x18, 0xB1],
    [0x6C, 0x5E, 0x2E, 0x7E, 0x54, 0x58, 0x6E, 0x4C],
    [0x5F, 0x5E, 0x6C, 0x5E, 0x69, 0x1E, 0x62, 0x0E],
    [0x40, 0x91, 0x23, 0x85, 0x47, 0x12, 0x1C, 0x30],
    [0xA9, 0x8F, 0x4B, 0x2C, 0xB6, 0x8F, 0x2D, 0x8E],
    [0x0D, 0x4C, 0xEC, 0x0C, 0x74, 0x6E, 0xF6, 0x7C],
    [0x0C, 0x2C, 0x38, 0x1D, 0x3C, 0x2D, 0xF2, 0x6B],
    [0x06, 0x46, 0xA5, 0x02, 0x08, 0xC6, 0x07, 0x42],
    [0x1E, 0x48, 0x18, 0xAE, 0x77, 0x2E, 0x6C, 0xD9],
    [0x7F, 0x4C, 0xBF, 0x5C, 0x28, 0x7E, 0x42, 0x5F],
    [0xE7, 0x40, 0x30, 0xD1, 0x7A, 0x50, 0xB7, 0xA3],
    [0x03, 0x17, 0x44, 0x13, 0x0B, 0x46, 0x32, 0x52],
    [0xDF, 0xCE, 0xE8, 0x8E, 0x6A, 0x0A, 0x22, 0x1E],
    [0x16, 0xA6, 0x1F, 0xC6, 0x78, 0x04, 0x36, 0xA4],
    [0x96, 0xD7, 0x86, 0x56, 0x1F, 0x16, 0x0F, 0xE2],
    [0x3C, 0x2C, 0x0B, 0x0E, 0x3E, 0x8C, 0x5C, 0x5A],
    [0xB3, 0x60, 0x64, 0x42, 0x78, 0x42, 0x06, 0x62],
    [0x28, 0xBB, 0x44, 0x08, 0xEF, 0x2A, 0xE5, 0x3A],
    [0x1A, 0x0B, 0x04, 0x29, 0x1A, 0x0A, 0x40, 0x0E],
    [0xE1, 0x06, 0x24, 0x52, 0x3E, 0xE0, 0x0A, 0xC0],
    [0x18, 0x7A, 0x12, 0x18, 0x6A, 0xAE, 0x5C, 0x6E],
    [0x7C, 0x9A, 0x40, 0x6C, 0x66, 0x78, 0x40, 0xAB],
    [0x6A, 0xCA, 0x74, 0x2E, 0x6A, 0xBA, 0x02, 0x6A],
    [0x46, 0x07, 0x39, 0x17, 0x48, 0x16, 0x20, 0x16],
    [0x2A, 0xEF, 0xF4, 0x5A, 0x6A, 0x6E, 0xC6, 0x6E],
    [0x22, 0x67, 0xE0, 0x37, 0xC8, 0x72, 0x00, 0x42],
    [0x56, 0x45, 0x68, 0x64, 0xC4, 0x25, 0xB3, 0x57],
    [0x4B, 0x0A, 0x9C, 0x6C, 0x69, 0x5A, 0x72, 0x6C],
    [0x5A, 0x1A, 0x04, 0x4A, 0x0C, 0x1A, 0x58, 0x39],
    [0x3C, 0x28, 0x6C, 0x2F, 0xA5, 0x6C, 0xF1, 0x3C],
    [0x62, 0x60, 0xA2, 0x15, 0x00, 0x54, 0x1A, 0x14],
    [0x45, 0x54, 0x58, 0x60, 0x64, 0x64, 0x3E, 0x56],
    [0x32, 0x03, 0x62, 0x16, 0x6E, 0x43, 0x2A, 0x02],
    [0x04, 0x14, 0xAD, 0x54, 0x72, 0x44, 0x80, 0x44],
    [0x36, 0x36, 0x7E, 0x32, 0x08, 0x24, 0x2C, 0x17],
    [0x5C, 0x5E, 0xA8, 0xFD, 0x68, 0x7C, 0xF2, 0x7C],
    [0x14, 0x84, 0x7E, 0x36, 0xD9, 0xB6, 0x06, 0xE3],
    [0x06, 0x02, 0x24, 0x57, 0x58, 0x03, 0x22, 0x52],
    [0x54, 0xB5, 0x2A, 0xD1, 0x66, 0x14, 0xB9, 0x36],
    [0x60, 0x22, 0x82, 0x32, 0x48, 0x70, 0x2A, 0x40],
    [0x86, 0xA3, 0x5A, 0x32, 0xDE, 0xA5, 0x3E, 0x34],
    [0xAC, 0xEC, 0x4A, 0x1C, 0xF2, 0x2C, 0x74, 0x78],
];

/// Exterior tiles for supertiles 0..=201.
pub static EXTERIOR_TILES_1: [[u8; 8]; 220] = [
    [0xCD, 0x5E, 0xB8, 0x48, 0x26, 0x89, 0x5E, 0x18],
    [0x3A, 0x68, 0x76, 0x6E, 0xFE, 0x7E, 0x8A, 0x2A],
    [0xDD, 0x88, 0x31, 0x18, 0x76, 0x08, 0x04, 0x9D],
    [0x6C, 0x2E, 0x6E, 0x3C, 0x76, 0xAC, 0x5C, 0x68],
    [0x16, 0xB5, 0x5F, 0x70, 0xA6, 0x94, 0x0C, 0x20],
    [0x34, 0x22, 0x6A, 0x26, 0xEC, 0xB2, 0x38, 0x26],
    [0x64, 0x40, 0x3A, 0x11, 0x53, 0x44, 0x62, 0x40],
    [0x18, 0x58, 0xA2, 0x1C, 0x65, 0x08, 0x06, 0x1C],
    [0xF1, 0x72, 0x00, 0xE1, 0x00, 0xE3, 0x37, 0xB1],
    [0x89, 0x28, 0x40, 0xEC, 0x26, 0xBA, 0x64, 0xA8],
    [0x38, 0x0A, 0x14, 0x3A, 0x69, 0x2A, 0x70, 0x3A],
    [0x16, 0x52, 0x3E, 0x16, 0x0A, 0xA7, 0xB7, 0x24],
    [0x78, 0x58, 0x30, 0xCD, 0x62, 0x78, 0x46, 0xDD],
    [0x6E, 0x7C, 0x6A, 0x28, 0xB1, 0x7E, 0x2A, 0x79],
    [0x36, 0xA3, 0x04, 0xE6, 0x18, 0x72, 0x00, 0x20],
    [0x38, 0x0A, 0x63, 0x6E, 0xAC, 0x7A, 0xD9, 0x2E],
    [0x00, 0x50, 0x11, 0x05, 0x01, 0x50, 0x04, 0x14],
    [0x78, 0x2A, 0x26, 0x3A, 0xAC, 0x68, 0x4E, 0x5B],
    [0x49, 0x6A, 0xD0, 0x79, 0x7D, 0x78, 0x12, 0x0B],
    [0xA1, 0x91, 0x30, 0xA1, 0x76, 0x02, 0x3E, 0x81],
    [0x40, 0x26, 0x7A, 0x36, 0x64, 0x06, 0xBC, 0xB7],
    [0xE1, 0x30, 0xD1, 0x60, 0x66, 0xC2, 0xDE, 0x70],
    [0x89, 0x28, 0x07, 0x5E, 0x2A, 0x0A, 0x5D, 0xBB],
    [0x2F, 0x7A, 0x7F, 0x3C, 0x78, 0x1E, 0x62, 0x7A],
    [0x28, 0x6A, 0x40, 0x78, 0x46, 0x58, 0xCB, 0xAC],
    [0x7E, 0x6E, 0xAA, 0x2E, 0xFC, 0x6A, 0xBF, 0x6E],
    [0x28, 0xA8, 0x4B, 0xE8, 0x76, 0xBC, 0x3C, 0xFC],
    [0x26, 0x24, 0x7C, 0x66, 0xC9, 0x76, 0x2C, 0x66],
    [0x2B, 0x0B, 0x42, 0x18, 0x0C, 0x4B, 0x5B, 0x38],
    [0xE4, 0xF1, 0xA3, 0xD2, 0x56, 0xF3, 0x4A, 0x20],
    [0x59, 0x5A, 0x54, 0x78, 0x80, 0x79, 0x50, 0x79],
    [0x18, 0xAD, 0x2A, 0xBD, 0x72, 0x3C, 0xB5, 0xAF],
    [0xC0, 0x04, 0x60, 0xD1, 0x42, 0x40, 0x34, 0x52],
    [0x58, 0x1D, 0x80, 0x7A, 0x40, 0x58, 0x02, 0x6A],
    [0xF7, 0x34, 0xDA, 0xA0, 0xB5, 0xE4, 0x2A, 0xF0],
    [0x60, 0x02, 0x60, 0x64, 0xC4, 0x60, 0x1A, 0x10],
    [0x21, 0x64, 0x68, 0x44, 0xD5, 0x20, 0x99, 0x35],
    [0x90, 0x00, 0x32, 0x12, 0x4C, 0x52, 0xC8, 0x06],
    [0xD8, 0x9C, 0x0B, 0x8D, 0x26, 0x0C, 0x46, 0x2C],
    [0x8E, 0xFB, 0x7C, 0x3A, 0x6A, 0x3A, 0x64, 0x9F],
    [0x40, 0x42, 0x26, 0x62, 0x6C, 0x86, 0xDE, 0xF3],
    [0x12, 0x60, 0xF1, 0x46, 0x5C, 0x02, 0x86, 0x70],
    [0xD8, 0x4A, 0x46, 0x7A, 0xBE, 0x6A, 0x5E, 0xEF],
    [0x72, 0x76, 0xF7, 0x60, 0x78, 0x27, 0x56, 0x72],
    [0x4A, 0x9F, 0xB5, 0x58, 0x3A, 0xEB, 0x42, 0xDA],
    [0x36, 0x12, 0x2C, 0x16, 0x6E, 0x02, 0x38, 0x07],
    [0x0F, 0x1E, 0x20, 0x58, 0x69, 0x1A, 0xF1, 0x4E],
    [0x2E, 0x5F, 0x78, 0x2E, 0x4A, 0x4A, 0x74, 0x1F],
    [0xEC, 0x78, 0xB3, 0x7C, 0xC4, 0x78, 0xCD, 0x3C],
    [0x22, 0x26, 0x0A, 0x76, 0x2E, 0x26, 0x18, 0x14],
    [0xE6, 0xC4, 0x4C, 0x44, 0x32, 0x54, 0x76, 0xC0],
    [0x1A, 0x0F, 0x0E, 0x0E, 0x2C, 0x1C, 0x69, 0x1A],
    [0x28, 0x3B, 0x74, 0x7D, 0xE0, 0x7C, 0x10, 0x3C],
    [0x4D, 0x0E, 0xAD, 0x1B, 0x6C, 0x6E, 0x42, 0x0E],
    [0x18, 0x6D, 0x0A, 0x09, 0x72, 0x1D, 0x62, 0x7E],
    [0xD0, 0x42, 0x83, 0xE0, 0x5E, 0x76, 0x1E, 0xE2],
    [0x6A, 0x3E, 0x5C, 0x7E, 0xAB, 0x2F, 0x52, 0x1D],
    [0xD9, 0x9C, 0x19, 0x0C, 0x72, 0xDC, 0x65, 0xBD],
    [0xFE, 0x6E, 0x6C, 0x2E, 0xEC, 0x6E, 0xFE, 0x6A],
    [0x0B, 0x7A, 0x32, 0x48, 0x6E, 0x0E, 0x4E, 0x4B],
    [0x2F, 0x0F, 0x3C, 0x5A, 0x29, 0x4A, 0xFB, 0x1A],
    [0x86, 0x32, 0x02, 0x20, 0x0E, 0xD3, 0x1C, 0x20],
    [0x2C, 0x0E, 0x6E, 0x1E, 0xC4, 0x1E, 0xBC, 0xF8],
    [0x42, 0x44, 0xF5, 0x00, 0x47, 0xC4, 0x34, 0xE3],
    [0x2F, 0x38, 0x56, 0x0B, 0xA8, 0x1A, 0x6A, 0x28],
    [0x81, 0xE2, 0x02, 0xE3, 0x16, 0x60, 0x07, 0x91],
    [0xC0, 0xD0, 0xF8, 0x44, 0x46, 0x74, 0x32, 0xE6],
    [0xFD, 0x7C, 0x4E, 0xFF, 0xAE, 0x5E, 0xAF, 0xDC],
    [0x7E, 0x2C, 0x48, 0x78, 0xE5, 0x7C, 0x4A, 0x5E],
    [0x6C, 0xDB, 0x81, 0xAC, 0x10, 0xEB, 0x74, 0xDB],
    [0x8B, 0x08, 0x47, 0x0A, 0x36, 0x5C, 0x5C, 0x8D],
    [0xF3, 0xB6, 0xCF, 0xC7, 0x1C, 0xF4, 0x7F, 0x44],
    [0x1A, 0x8F, 0x7D, 0x3E, 0x3A, 0xDB, 0xF5, 0xAD],
    [0x44, 0x16, 0xBF, 0xC2, 0x5E, 0x54, 0x2C, 0x76],
    [0x3C, 0x5E, 0x6A, 0xFD, 0x62, 0xF9, 0x2E, 0x6C],
    [0x46, 0x83, 0x46, 0x81, 0x4E, 0xD3, 0x08, 0x32],
    [0xB2, 0x96, 0x6A, 0xA6, 0xCC, 0xA4, 0xBF, 0x95],
    [0x06, 0x52, 0xBD, 0x76, 0x1F, 0x17, 0x2B, 0x12],
    [0x70, 0xB2, 0x30, 0xE3, 0x8B, 0x36, 0x26, 0xB2],
    [0x5E, 0x4B, 0x2C, 0x2E, 0x38, 0x1E, 0x35, 0x0E],
    [0x12, 0x02, 0x16, 0x11, 0x6A, 0x16, 0xB2, 0x02],
    [0xE2, 0xF2, 0x7E, 0xF7, 0x0E, 0x32, 0x2E, 0xE4],
    [0xD9, 0xE8, 0x06, 0x6A, 0xEE, 0xF9, 0x4F, 0x6E],
    [0x9F, 0x5E, 0x85, 0x5E, 0x3C, 0x1E, 0x1E, 0xEA],
    [0x58, 0x2E, 0x74, 0x6A, 0x4C, 0x7A, 0x8A, 0x5B],
    [0xCA, 0x1E, 0x36, 0x7A, 0x7A, 0xD9, 0x4A, 0xEA],
    [0xC5, 0xA0, 0x02, 0x12, 0x52, 0x80, 0xBC, 0x83],
    [0x78, 0x78, 0x22, 0x0E, 0x3D, 0x0A, 0x4E, 0x5F],
    [0x20, 0x30, 0x70, 0x73, 0xE4, 0x72, 0xDF, 0x72],
    [0xCC, 0x6E, 0x08, 0x08, 0x22, 0x48, 0xAB, 0x6E],
    [0x26, 0x16, 0x5E, 0x17, 0x1E, 0x66, 0x09, 0x36],
    [0x06, 0x24, 0x6F, 0xA6, 0x0A, 0x96, 0xB8, 0x62],
    [0x02, 0x46, 0x9F, 0x46, 0x4C, 0x64, 0xB6, 0x52],
    [0x24, 0x24, 0x08, 0x32, 0x08, 0x05, 0x21, 0x67],
    [0x44, 0xB1, 0x13, 0xB0, 0x36, 0x40, 0x1C, 0x00],
    [0x9C, 0xAF, 0x0B, 0x0C, 0x32, 0x8D, 0x4C, 0x1C],
    [0x5E, 0x5C, 0x8E, 0x1A, 0x1C, 0x5A, 0x6A, 0x5A],
    [0x1B, 0x3E, 0x2E, 0x1C, 0x2C, 0x5E, 0x3C, 0x1D],
    [0x38, 0xC8, 0x10, 0x8B, 0x42, 0x18, 0x91, 0xC9],
    [0xA1, 0xB6, 0x72, 0xF3, 0xEC, 0x00, 0x2C, 0xB6],
    [0x32, 0x24, 0x62, 0xB1, 0xD2, 0xE4, 0x3C, 0xE0],
    [0x0E, 0x5A, 0x1C, 0x9F, 0x3A, 0x8E, 0x64, 0xAF],
    [0x38, 0x0E, 0x0A, 0x3E, 0xF5, 0x0E, 0x68, 0x3E],
    [0x3D, 0x2E, 0x3E, 0x38, 0x74, 0x3C, 0x28, 0x78],
    [0x6C, 0x6C, 0x89, 0x2C, 0x70, 0x4E, 0x22, 0x29],
    [0x66, 0x84, 0x5C, 0xA7, 0xCA, 0xA6, 0x06, 0x72],
    [0x1E, 0x2D, 0x7C, 0x0D, 0x6E, 0x7E, 0xEB, 0x7E],
    [0x18, 0x38, 0x20, 0x08, 0x76, 0x9B, 0x4C, 0x5C],
    [0x28, 0x6C, 0x79, 0x38, 0x70, 0x0D, 0x70, 0x2D],
    [0xFF, 0xC8, 0xE7, 0xEB, 0x7E, 0xFE, 0x5E, 0x3A],
    [0x0D, 0x4C, 0x8A, 0x4C, 0x24, 0x1C, 0x69, 0x4C],
    [0x54, 0x46, 0x0C, 0x64, 0x2D, 0x46, 0x0C, 0x16],
    [0x32, 0x33, 0xDC, 0x66, 0x4E, 0x64, 0x2A, 0x72],
    [0x52, 0x30, 0xF6, 0x74, 0x06, 0x72, 0x0E, 0xB1],
    [0x36, 0x06, 0x38, 0x00, 0x12, 0x50, 0x00, 0x04],
    [0x46, 0x54, 0xAD, 0x74, 0x8D, 0x22, 0x22, 0x32],
    [0xF0, 0x70, 0x26, 0x24, 0xE5, 0xF4, 0xD8, 0x12],
    [0x3E, 0x8F, 0x1C, 0x0C, 0x32, 0xC8, 0x64, 0x0E],
    [0x24, 0xF7, 0x58, 0x64, 0x46, 0xA4, 0xAC, 0xE4],
    [0x88, 0x18, 0x02, 0x48, 0x72, 0xA9, 0x74, 0x99],
    [0x46, 0x54, 0x6E, 0x47, 0x0C, 0x03, 0x6E, 0x44],
    [0x4A, 0xE8, 0x52, 0x6C, 0x62, 0xF8, 0x0B, 0xBD],
    [0x44, 0x56, 0x0E, 0x12, 0x08, 0x54, 0x22, 0x13],
    [0x68, 0x1A, 0x50, 0x49, 0x39, 0x5B, 0x40, 0x68],
    [0xDE, 0xDB, 0x05, 0x1A, 0x4A, 0x88, 0xF7, 0x5A],
    [0x1E, 0x2E, 0x6A, 0x1F, 0xDF, 0x3E, 0x68, 0x6A],
    [0x0A, 0xCF, 0x14, 0x2A, 0x6B, 0xCF, 0x81, 0x5E],
    [0x50, 0xF4, 0x38, 0xC1, 0x12, 0x85, 0x66, 0xF5],
    [0x06, 0x83, 0x60, 0x81, 0x1E, 0x02, 0x26, 0x91],
    [0xC9, 0xFA, 0x66, 0x1A, 0x7D, 0x6A, 0x5E, 0x0A],
    [0x22, 0xB1, 0x50, 0x93, 0x5A, 0x81, 0x26, 0x52],
    [0x5E, 0x48, 0x08, 0x5E, 0x72, 0x5E, 0x32, 0x4E],
    [0x24, 0x62, 0xA4, 0x60, 0xC2, 0x65, 0x52, 0x61],
    [0x16, 0x36, 0x4E, 0xB4, 0x5E, 0x86, 0x3C, 0xA6],
    [0xB7, 0x26, 0xCF, 0x22, 0x9F, 0x76, 0x04, 0xF7],
    [0x50, 0x24, 0x70, 0xA5, 0x12, 0x50, 0x97, 0x42],
    [0x12, 0x25, 0x0E, 0x16, 0x0C, 0x16, 0x2C, 0x02],
    [0x14, 0x74, 0x3A, 0x10, 0x16, 0x80, 0x3E, 0xF7],
    [0x7F, 0x5E, 0xDD, 0x6F, 0x68, 0x3A, 0xF2, 0x3E],
    [0x5A, 0x7A, 0xE0, 0x2A, 0xE8, 0xD8, 0x83, 0xFF],
    [0xBC, 0xBD, 0x1E, 0xAE, 0x6E, 0x8C, 0x38, 0xBD],
    [0x4C, 0xAF, 0x7C, 0xAB, 0xEF, 0xBB, 0x62, 0xFD],
    [0xA7, 0xD4, 0x29, 0x36, 0x07, 0x16, 0xA0, 0x86],
    [0x54, 0x35, 0xE8, 0x70, 0x04, 0x34, 0x72, 0x45],
    [0x2E, 0xCA, 0x0D, 0x0E, 0x2C, 0x5A, 0x3D, 0x8C],
    [0x9D, 0xAE, 0x18, 0xBD, 0x33, 0x2C, 0x56, 0x2E],
    [0x8E, 0xDA, 0x04, 0x28, 0x2E, 0xDB, 0xCC, 0x88],
    [0xDE, 0x8F, 0x3D, 0x2E, 0x6E, 0x9E, 0xB5, 0x4A],
    [0x76, 0x64, 0xFD, 0x27, 0x8C, 0x72, 0xF3, 0x32],
    [0x1A, 0x1A, 0x3E, 0x3C, 0x3F, 0x1A, 0x39, 0x9E],
    [0x72, 0x62, 0x36, 0x66, 0x58, 0x63, 0x1A, 0x62],
    [0x48, 0x1C, 0x03, 0x58, 0x24, 0x0C, 0x04, 0x18],
    [0x06, 0x30, 0x68, 0x61, 0x04, 0x34, 0x28, 0x05],
    [0x58, 0x6D, 0x22, 0x6A, 0x60, 0x5A, 0x78, 0x7C],
    [0x0F, 0x4E, 0x6E, 0x1B, 0x68, 0x2E, 0xFC, 0x0C],
    [0x47, 0x54, 0xBF, 0x50, 0x10, 0x76, 0x6A, 0x04],
    [0xED, 0x7C, 0x9B, 0xCD, 0xA6, 0x6C, 0x2A, 0x38],
    [0x00, 0x32, 0x01, 0x33, 0x14, 0x00, 0x32, 0x51],
    [0x7A, 0x4C, 0xC6, 0x0C, 0x30, 0x4D, 0x1A, 0x5C],
    [0x62, 0x77, 0x7A, 0x37, 0x6E, 0x17, 0x1A, 0x36],
    [0x1A, 0x7E, 0xB9, 0x7C, 0x6A, 0xFC, 0x62, 0x4E],
    [0x26, 0x50, 0x08, 0x54, 0x00, 0x50, 0x60, 0x00],
    [0x40, 0x67, 0xF4, 0x36, 0xDC, 0x22, 0x5A, 0x72],
    [0x2C, 0x4C, 0x5A, 0x6C, 0x30, 0x6C, 0xF9, 0x39],
    [0x2E, 0x6A, 0xE7, 0x6A, 0xAC, 0x6A, 0x68, 0x69],
    [0x70, 0x72, 0xD0, 0xA1, 0x06, 0xE0, 0x5A, 0x24],
    [0xDC, 0x9C, 0x08, 0xBE, 0x76, 0x5C, 0x4E, 0x58],
    [0x42, 0x72, 0xD7, 0x50, 0x8C, 0x52, 0x09, 0x72],
    [0x55, 0x54, 0x18, 0x24, 0x00, 0x54, 0x30, 0x45],
    [0x52, 0x77, 0xE5, 0x42, 0x08, 0x26, 0x32, 0x33],
    [0x2E, 0x1B, 0x3E, 0x5E, 0x48, 0x2F, 0x70, 0x3C],
    [0x9F, 0x1A, 0xAE, 0x9E, 0x5E, 0x6E, 0xEE, 0x9B],
    [0xBF, 0xDA, 0xE7, 0x7A, 0x2A, 0xAB, 0x76, 0x7A],
    [0x03, 0x04, 0x2C, 0x26, 0x18, 0x46, 0xB1, 0x36],
    [0xA6, 0x04, 0x0A, 0xA5, 0x8B, 0xB6, 0x3E, 0xE3],
    [0xCE, 0x18, 0x9B, 0x8C, 0x36, 0x4C, 0x7E, 0x18],
    [0x33, 0x30, 0x74, 0x23, 0xCC, 0x66, 0x5C, 0x00],
    [0xF3, 0x60, 0x85, 0xF1, 0x00, 0xE3, 0x43, 0x42],
    [0xCD, 0xDC, 0xAD, 0x5E, 0x26, 0x3C, 0x36, 0x78],
    [0x3E, 0xC8, 0x08, 0x0C, 0x32, 0x3E, 0xED, 0x58],
    [0x66, 0x52, 0xA0, 0x52, 0x0C, 0x51, 0x82, 0x76],
    [0x04, 0x97, 0x6F, 0xC0, 0x46, 0x44, 0xE9, 0x81],
    [0xF3, 0xD6, 0x12, 0x70, 0x2E, 0x56, 0x0A, 0xE1],
    [0x34, 0x14, 0x3A, 0x04, 0x25, 0x14, 0x19, 0x16],
    [0xAA, 0x5C, 0x24, 0x88, 0x40, 0x8C, 0xE5, 0xCC],
    [0x5F, 0x5A, 0xDE, 0x1A, 0x3C, 0x1A, 0x3A, 0x0A],
    [0x5C, 0x6E, 0x5E, 0x5E, 0x26, 0x5D, 0x78, 0x6C],
    [0x5C, 0xEF, 0x7C, 0x7A, 0xDE, 0xEF, 0x4C, 0x6C],
    [0x06, 0x06, 0x9D, 0x13, 0x59, 0x12, 0x76, 0x12],
    [0x1B, 0x39, 0x73, 0x0A, 0xCC, 0x1B, 0x4C, 0x2A],
    [0x32, 0x30, 0x62, 0x20, 0x90, 0x20, 0x10, 0x02],
    [0x5E, 0x6C, 0x4A, 0x6E, 0x38, 0x5E, 0x6E, 0x6C],
    [0x68, 0x0E, 0x3A, 0x7C, 0xF4, 0x2C, 0x6C, 0x6C],
    [0x6A, 0x4A, 0x95, 0xD9, 0x7B, 0x78, 0x74, 0x5E],
    [0x7A, 0x18, 0xC7, 0x5A, 0x33, 0xDC, 0x7E, 0xD8],
    [0x7D, 0x5C, 0x0A, 0x6C, 0x60, 0x7E, 0x6A, 0x5E],
    [0x70, 0x46, 0xA5, 0x70, 0x4D, 0x61, 0xB3, 0x16],
    [0x52, 0xA1, 0xC1, 0x50, 0x02, 0xD1, 0x42, 0x70],
    [0x12, 0x34, 0x45, 0x12, 0x91, 0x64, 0x30, 0x22],
    [0xF9, 0xE9, 0xCB, 0x7C, 0xA6, 0xDC, 0x3E, 0x5E],
    [0xE5, 0xF0, 0xD3, 0x24, 0xD3, 0x24, 0x2E, 0xF5],
    [0x6E, 0x28, 0xE9, 0x6C, 0x44, 0x4E, 0xFB, 0x29],
    [0x4A, 0x4A, 0xB3, 0x5C, 0x20, 0x7A, 0x1E, 0x78],
    [0x7D, 0x28, 0x4A, 0x7C, 0xB5, 0x2C, 0x70, 0x0E],
    [0x3A, 0x3A, 0x72, 0x6A, 0x4C, 0x89, 0xC9, 0x88],
    [0x71, 0x52, 0xC4, 0x52, 0x2A, 0x43, 0x56, 0x62],
    [0xF1, 0x30, 0x36, 0x20, 0x42, 0xA0, 0xDD, 0x24],
    [0x2C, 0xBC, 0x19, 0x2E, 0x66, 0xD8, 0x68, 0x8E],
    [0x87, 0xA5, 0x78, 0x36, 0xE3, 0x94, 0x34, 0x64],
    [0x70, 0x06, 0x6A, 0x20, 0x00, 0x34, 0xB8, 0x06],
    [0x1B, 0x3A, 0x11, 0x3C, 0xE0, 0x7C, 0x44, 0x2A],
    [0x0C, 0x1C, 0x08, 0x5C, 0x66, 0x5D, 0x7A, 0x7E],
    [0x3C, 0x3E, 0x6D, 0x0C, 0x6E, 0x3A, 0x28, 0x3A],
    [0x12, 0x00, 0x76, 0x42, 0x18, 0x22, 0x4C, 0x02],
    [0x0C, 0x28, 0x6A, 0x1E, 0xF6, 0x0E, 0x7A, 0x2C],
    [0x95, 0xC4, 0x22, 0x70, 0x20, 0xC5, 0x06, 0x52],
    [0x56, 0xB4, 0x6E, 0x14, 0x5C, 0x06, 0x28, 0x96],
    [0x7E, 0x7E, 0x5A, 0x28, 0x60, 0x2C, 0x7B, 0x2C],
    [0x46, 0x02, 0x78, 0x07, 0x5A, 0x76, 0x02, 0x74],
    [0x5A, 0x4E, 0x00, 0x4E, 0x2B, 0x5E, 0x14, 0x0B],
];

/// Exterior tiles for supertiles 202..=213.
pub static EXTERIOR_TILES_2: [[u8; 8]; 120] = [
    [0x5E, 0xDB, 0x26, 0xCE, 0x38, 0x4E, 0x46, 0x7A],
    [0x1A, 0x8A, 0x50, 0x88, 0x70, 0xBA, 0x91, 0xF8],
    [0x78, 0x29, 0x40, 0x68, 0x64, 0x4A, 0x41, 0x7C],
    [0x32, 0x32, 0x20, 0x12, 0x5A, 0x52, 0x82, 0x33],
    [0x86, 0xD4, 0x8F, 0x42, 0x4E, 0x46, 0x1E, 0x44],
    [0x32, 0x26, 0x7F, 0x36, 0x88, 0x66, 0x20, 0x37],
    [0x30, 0x23, 0x02, 0x02, 0x1C, 0x22, 0x4C, 0x02],
    [0x5C, 0x5C, 0x23, 0x08, 0x05, 0x3B, 0x4C, 0x5C],
    [0x14, 0x14, 0x7E, 0x04, 0x8B, 0x06, 0x30, 0x67],
    [0xA9, 0x6C, 0x42, 0xFD, 0xE6, 0xF9, 0x4C, 0xAD],
    [0xFE, 0xDE, 0x4C, 0xDD, 0x5E, 0x6C, 0xAF, 0xDE],
    [0x64, 0x00, 0x0A, 0x00, 0x46, 0x66, 0x38, 0x44],
    [0xC9, 0xFA, 0xF5, 0x58, 0x78, 0xBB, 0xD5, 0x3A],
    [0x56, 0x03, 0xEE, 0x12, 0x08, 0x43, 0x1A, 0x55],
    [0x2C, 0x28, 0x4A, 0x68, 0xD5, 0x78, 0xAC, 0x8D],
    [0x08, 0x3E, 0x65, 0x6A, 0xB8, 0x1A, 0x4C, 0x7A],
    [0xAB, 0xBF, 0x46, 0xAB, 0x8D, 0xBA, 0x5C, 0x3A],
    [0x18, 0x1C, 0x22, 0x1B, 0x61, 0x08, 0x44, 0x1A],
    [0x2A, 0x48, 0xF4, 0x2B, 0x7C, 0x68, 0x4A, 0x6A],
    [0x78, 0x39, 0x37, 0x2A, 0xE5, 0x18, 0x48, 0x3C],
    [0x7E, 0x1A, 0x2A, 0x4A, 0x5C, 0x7E, 0xBB, 0x7C],
    [0x08, 0x58, 0x52, 0x18, 0x75, 0x1C, 0x1C, 0x1A],
    [0xDF, 0x4C, 0x6E, 0x18, 0x44, 0xFD, 0xAF, 0x4E],
    [0x12, 0x00, 0x73, 0x93, 0x7D, 0x97, 0x5C, 0x32],
    [0xA0, 0x70, 0x50, 0xE0, 0x32, 0xF4, 0x14, 0x74],
    [0x08, 0x0A, 0x42, 0x08, 0x71, 0x0C, 0x5D, 0x19],
    [0x28, 0xCD, 0x63, 0x38, 0x74, 0xC8, 0x4C, 0x0A],
    [0xAC, 0xB8, 0x42, 0x9A, 0x82, 0x38, 0x56, 0xBB],
    [0x04, 0x52, 0x30, 0x70, 0x54, 0x40, 0x10, 0x00],
    [0x88, 0x6A, 0x46, 0x88, 0xAC, 0x28, 0x5C, 0x8A],
    [0x62, 0x77, 0xA4, 0x70, 0xCC, 0x22, 0x87, 0x51],
    [0x2E, 0x5A, 0x85, 0x2E, 0xA8, 0x6E, 0x52, 0x2E],
    [0x14, 0x51, 0x00, 0x00, 0x00, 0x02, 0x31, 0x02],
    [0x43, 0x43, 0xA6, 0x52, 0x5C, 0x63, 0x4A, 0x70],
    [0x46, 0x56, 0xCA, 0x54, 0x14, 0x41, 0x1A, 0x40],
    [0xB5, 0x83, 0x34, 0xB5, 0xD2, 0x00, 0x90, 0xB1],
    [0xA2, 0xF0, 0xC4, 0x26, 0x38, 0x26, 0x16, 0x22],
    [0x57, 0x74, 0x8E, 0x16, 0x2E, 0x56, 0x08, 0x67],
    [0x70, 0x31, 0x40, 0x74, 0x92, 0x64, 0x20, 0x24],
    [0xC4, 0xB5, 0x1C, 0xE7, 0x42, 0xC5, 0x76, 0x66],
    [0xB5, 0x34, 0x74, 0x91, 0x42, 0x90, 0x95, 0x34],
    [0x3E, 0x38, 0x6B, 0xED, 0xA0, 0x1C, 0x30, 0x9C],
    [0x78, 0x59, 0xD7, 0x48, 0x9C, 0x4A, 0x68, 0x5B],
    [0xE9, 0x28, 0xC4, 0x38, 0x81, 0x7C, 0x52, 0x38],
    [0x9D, 0x9C, 0x5A, 0x2C, 0x26, 0x08, 0x78, 0xCD],
    [0x56, 0x34, 0x0A, 0x36, 0x2D, 0x16, 0x3C, 0x42],
    [0xDE, 0xDC, 0x6E, 0xCE, 0x2E, 0x2A, 0xAF, 0xEC],
    [0x4A, 0x78, 0xF5, 0x7A, 0x5A, 0x5E, 0x46, 0x78],
    [0x89, 0xDA, 0xC4, 0xF8, 0x11, 0x7A, 0x16, 0xC9],
    [0x95, 0x14, 0x11, 0x91, 0x36, 0xA3, 0x18, 0x10],
    [0x22, 0x32, 0x57, 0x62, 0x5C, 0x72, 0x48, 0x26],
    [0x08, 0x5D, 0x08, 0x3E, 0x20, 0x3C, 0x52, 0x0C],
    [0x34, 0x36, 0x09, 0x73, 0xA9, 0x32, 0x20, 0x16],
    [0x16, 0x06, 0x4C, 0x05, 0x9F, 0x36, 0x68, 0x37],
    [0x50, 0xD1, 0x20, 0x60, 0x70, 0xD1, 0x95, 0x00],
    [0x3F, 0x2E, 0x6C, 0x7A, 0x6C, 0x7E, 0xC9, 0x7B],
    [0x6F, 0x78, 0x78, 0x6C, 0xE7, 0x7C, 0x5A, 0x7E],
    [0xB3, 0xA3, 0x46, 0x42, 0x3A, 0x22, 0x17, 0xC1],
    [0x56, 0x02, 0x04, 0x43, 0x5E, 0x42, 0x08, 0x61],
    [0x14, 0xB5, 0x4A, 0x36, 0x42, 0x36, 0xA5, 0x60],
    [0xAC, 0x3C, 0x20, 0x08, 0xA2, 0x1A, 0x40, 0x28],
    [0xB8, 0x58, 0x52, 0x68, 0xF7, 0xB9, 0xC2, 0xCA],
    [0xD3, 0xA1, 0x52, 0xA0, 0x0E, 0x00, 0x08, 0x20],
    [0x2C, 0x6C, 0xB4, 0x38, 0x42, 0x6B, 0xC2, 0x2C],
    [0xF9, 0x2C, 0x18, 0x28, 0xB3, 0x8E, 0x21, 0x78],
    [0x03, 0x42, 0x24, 0x12, 0x1A, 0x46, 0x54, 0x10],
    [0x5C, 0x1E, 0x9F, 0x5E, 0x68, 0x0E, 0x60, 0x6E],
    [0x56, 0x32, 0xEC, 0x46, 0xBC, 0x55, 0x6A, 0x63],
    [0x39, 0x58, 0x02, 0x2C, 0x70, 0x48, 0x5E, 0x78],
    [0x50, 0x05, 0x38, 0x04, 0x10, 0x14, 0x30, 0x00],
    [0x56, 0x02, 0x04, 0x60, 0x6D, 0x97, 0x0E, 0x52],
    [0x78, 0x3C, 0x6E, 0x1F, 0xE7, 0x3C, 0xB8, 0x7C],
    [0x7A, 0xEA, 0x96, 0x1E, 0x1E, 0x48, 0x0E, 0xE9],
    [0x02, 0x43, 0xAE, 0x52, 0x4D, 0x12, 0xAF, 0x77],
    [0x6C, 0x39, 0x58, 0x38, 0x24, 0x7C, 0x7B, 0x68],
    [0x78, 0x4B, 0xD2, 0x58, 0x7C, 0x0F, 0x79, 0x78],
    [0x4A, 0xEE, 0x54, 0x78, 0xEB, 0xF9, 0x02, 0xD8],
    [0x4C, 0x08, 0x28, 0x4C, 0x30, 0x1E, 0x34, 0x3C],
    [0x3E, 0x6F, 0xDC, 0x7D, 0xAD, 0x5C, 0x7A, 0x4C],
    [0xF5, 0x70, 0x5D, 0x24, 0x22, 0x14, 0x30, 0xA5],
    [0x68, 0xEA, 0xC7, 0x2E, 0x7E, 0x68, 0x4E, 0xF8],
    [0x44, 0x50, 0x1A, 0x97, 0x72, 0xD0, 0xE4, 0xA7],
    [0x4E, 0x0E, 0x4C, 0x0E, 0x19, 0x1A, 0x53, 0x1B],
    [0x6A, 0xCD, 0xCF, 0x3E, 0x9B, 0xDC, 0x37, 0xAB],
    [0x80, 0x44, 0xAB, 0x54, 0x03, 0x76, 0x1F, 0x00],
    [0xD2, 0xC3, 0xE2, 0xF3, 0x7C, 0xC1, 0x1A, 0x60],
    [0x42, 0x26, 0x2C, 0xC3, 0x4E, 0xB5, 0x7C, 0x95],
    [0xE7, 0x62, 0x52, 0xF6, 0xCF, 0xE2, 0x1E, 0x66],
    [0x1E, 0xBD, 0x7E, 0xFE, 0xEC, 0x7E, 0x7E, 0xAF],
    [0x7F, 0x6A, 0x34, 0x58, 0xAD, 0x6E, 0x02, 0x6A],
    [0x36, 0x10, 0x44, 0x73, 0x7E, 0x10, 0x38, 0x21],
    [0xC2, 0xA2, 0x64, 0xE0, 0x8E, 0x76, 0x0E, 0x36],
    [0x00, 0x06, 0x28, 0x26, 0x76, 0x24, 0xB9, 0x04],
    [0x5D, 0x7C, 0xED, 0x5C, 0x24, 0x09, 0xA7, 0x4C],
    [0x78, 0x5C, 0x02, 0x99, 0x56, 0xCB, 0xDF, 0xC9],
    [0xC4, 0xF3, 0xCC, 0xD7, 0x8E, 0xB7, 0x76, 0xF6],
    [0x37, 0x10, 0x3A, 0x10, 0x00, 0x00, 0xAD, 0x40],
    [0x7A, 0x6B, 0x52, 0x2D, 0x97, 0x7C, 0x78, 0x78],
    [0x82, 0x16, 0x6B, 0x86, 0x7C, 0xC2, 0xBF, 0xC3],
    [0x78, 0x29, 0x53, 0x28, 0x30, 0x7C, 0x7A, 0x3C],
    [0x3C, 0x7C, 0x4A, 0x7C, 0x86, 0x7C, 0x7B, 0x5C],
    [0x42, 0x74, 0x48, 0x57, 0x18, 0x55, 0x30, 0x64],
    [0x14, 0x56, 0x1E, 0x15, 0x4A, 0x46, 0x60, 0x14],
    [0x5A, 0x58, 0x74, 0x3E, 0xA9, 0x2E, 0x4F, 0x48],
    [0x3E, 0x58, 0x76, 0x2A, 0x8D, 0x68, 0x79, 0x68],
    [0x54, 0x44, 0xED, 0x66, 0x0C, 0x56, 0x22, 0x76],
    [0x0B, 0x1F, 0xA0, 0x1A, 0x6C, 0x4E, 0x52, 0x69],
    [0x60, 0x56, 0x7A, 0x74, 0x44, 0x46, 0x02, 0x30],
    [0x36, 0xA5, 0x59, 0x14, 0xC3, 0xA5, 0xFC, 0xA0],
    [0x56, 0x72, 0xA7, 0x52, 0x0E, 0x46, 0x5A, 0xE0],
    [0x00, 0x50, 0x3E, 0x14, 0x40, 0x34, 0x9A, 0x15],
    [0x46, 0x46, 0x27, 0x46, 0x6E, 0x91, 0x88, 0x20],
    [0xF4, 0xC3, 0x9D, 0x74, 0x5B, 0x86, 0x16, 0x12],
    [0x1C, 0xBF, 0x0D, 0x0E, 0x08, 0x2E, 0x64, 0xFA],
    [0x00, 0x22, 0x01, 0xC5, 0x40, 0x12, 0xC1, 0x84],
    [0x42, 0xD0, 0x06, 0x96, 0x0F, 0xD2, 0x4A, 0x16],
    [0x04, 0x34, 0x1B, 0x40, 0x62, 0xB4, 0xB4, 0x87],
    [0x06, 0x02, 0x56, 0x02, 0x4D, 0x42, 0x1A, 0x21],
    [0xCB, 0xCA, 0x70, 0x6A, 0xF3, 0xBC, 0x06, 0xF8],
    [0x18, 0x4C, 0x8B, 0x6E, 0x70, 0x7C, 0x22, 0x1C],
];

/// Exterior tiles for supertiles 214 and up.
pub static EXTERIOR_TILES_3: [[u8; 8]; 128] = [
    [0x78, 0x0C, 0xB3, 0x5C, 0x24, 0x6A, 0x5A, 0x59],
    [0x9E, 0x5A, 0x6C, 0x4A, 0x4A, 0x4E, 0x34, 0x1A],
    [0x86, 0x06, 0x3E, 0x42, 0x4D, 0xD3, 0x78, 0x82],
    [0xEF, 0xAF, 0x7E, 0xFB, 0x7E, 0x7A, 0x7E, 0x7C],
    [0x44, 0x14, 0x6C, 0x26, 0x63, 0x14, 0x26, 0x91],
    [0x28, 0x5E, 0x64, 0x1A, 0x7A, 0x1B, 0x14, 0x4A],
    [0x04, 0xB5, 0x08, 0xA7, 0x53, 0x40, 0x30, 0x54],
    [0x64, 0xD7, 0x3E, 0x32, 0xFE, 0xA2, 0xBE, 0x56],
    [0x44, 0xD3, 0x4A, 0x86, 0x3C, 0x02, 0x2B, 0xC7],
    [0x9F, 0x28, 0x26, 0x4A, 0x3E, 0xCB, 0x5F, 0x4A],
    [0x0A, 0xDE, 0x3E, 0x1E, 0x6E, 0x0C, 0x7C, 0x5A],
    [0x88, 0x7A, 0x16, 0x58, 0x77, 0xF8, 0x0A, 0x8D],
    [0xD8, 0x4C, 0x7A, 0xC8, 0x76, 0xFD, 0x7C, 0x6E],
    [0x20, 0x20, 0x7C, 0x64, 0xF1, 0x20, 0xE0, 0x16],
    [0xF6, 0xE3, 0x3A, 0x76, 0x1A, 0x22, 0xF8, 0x66],
    [0xDD, 0x5C, 0x7A, 0xCC, 0x5E, 0xCA, 0x4C, 0xDB],
    [0x45, 0x67, 0x7E, 0x46, 0xFF, 0x55, 0x3A, 0x44],
    [0x6C, 0x3A, 0xED, 0xDE, 0xAA, 0xEF, 0xE4, 0x6C],
    [0xB5, 0x24, 0x1C, 0x87, 0x7D, 0x86, 0xED, 0xC2],
    [0x62, 0x22, 0x50, 0x53, 0x48, 0x22, 0x07, 0x60],
    [0x24, 0x04, 0x78, 0x14, 0x42, 0x06, 0x24, 0x70],
    [0x64, 0x46, 0x9D, 0x36, 0x1A, 0xC6, 0x62, 0xB3],
    [0x5F, 0x38, 0x34, 0x0A, 0x18, 0x4A, 0x61, 0x1B],
    [0x21, 0x74, 0x4A, 0x65, 0x54, 0x64, 0x08, 0x46],
    [0x07, 0x26, 0x4E, 0x24, 0xDC, 0x22, 0x30, 0x34],
    [0x04, 0x87, 0x08, 0x94, 0x06, 0x40, 0x27, 0x00],
    [0x74, 0x44, 0x7E, 0x46, 0x46, 0x81, 0xAC, 0x14],
    [0x2E, 0x2C, 0x3E, 0x2F, 0xB4, 0x3D, 0xCB, 0x68],
    [0x68, 0xFB, 0x06, 0x5A, 0x0A, 0xC8, 0x45, 0x4A],
    [0x6A, 0x98, 0xB0, 0x58, 0x44, 0xD8, 0x9E, 0x58],
    [0x7C, 0xDF, 0x9D, 0x1A, 0x1A, 0x0E, 0x32, 0x6E],
    [0x7D, 0x0E, 0x4E, 0x3E, 0x34, 0x0E, 0x48, 0x1C],
    [0x38, 0x99, 0x01, 0xC8, 0x20, 0x8B, 0x10, 0xAB],
    [0x06, 0x16, 0x78, 0x16, 0x78, 0x26, 0x64, 0x82],
    [0x89, 0x8B, 0x02, 0x8B, 0x72, 0xB9, 0x08, 0x88],
    [0x32, 0x22, 0x24, 0x32, 0x98, 0x30, 0xB2, 0x76],
    [0x04, 0x16, 0x08, 0xB6, 0x02, 0x87, 0x04, 0xB6],
    [0x4C, 0x2C, 0x0A, 0x0C, 0x21, 0x4D, 0x7C, 0x0E],
    [0x02, 0x02, 0x14, 0x62, 0x38, 0x61, 0x02, 0x42],
    [0x78, 0x1E, 0x84, 0x0E, 0x19, 0x4A, 0x42, 0x68],
    [0x65, 0x34, 0xEB, 0x76, 0x44, 0x60, 0xB7, 0x74],
    [0x93, 0x81, 0x02, 0x44, 0x06, 0x50, 0x3E, 0xB3],
    [0x22, 0x60, 0x74, 0x42, 0x0A, 0x40, 0x32, 0x62],
    [0xE2, 0xE3, 0x97, 0x36, 0x8C, 0xE1, 0x3E, 0xD1],
    [0xCE, 0x38, 0x3C, 0x6E, 0xE7, 0xED, 0x44, 0x7E],
    [0x38, 0x3C, 0x6A, 0x9E, 0xB3, 0xB8, 0x56, 0x8E],
    [0x24, 0xF3, 0x6E, 0x26, 0x4A, 0x14, 0x28, 0xA7],
    [0x50, 0x54, 0x20, 0x60, 0x00, 0x00, 0x08, 0x55],
    [0x40, 0x64, 0x6C, 0x51, 0x50, 0x66, 0xE3, 0x46],
    [0xB3, 0xF3, 0x2E, 0xB2, 0x4E, 0xA7, 0xEB, 0xE6],
    [0x30, 0x30, 0x5A, 0x16, 0xD2, 0x20, 0x00, 0x75],
    [0xC1, 0x85, 0x4F, 0x44, 0x04, 0x85, 0x0D, 0x04],
    [0x12, 0x20, 0x25, 0x40, 0x52, 0x21, 0x82, 0x00],
    [0xB5, 0xB5, 0x6A, 0xB7, 0x54, 0xF0, 0xF8, 0xB0],
    [0x42, 0x56, 0x5D, 0x16, 0x3A, 0x06, 0x23, 0x57],
    [0x72, 0x47, 0xC7, 0x12, 0x2C, 0x16, 0x4E, 0x42],
    [0xEB, 0x3E, 0x5D, 0xAF, 0x3A, 0xEE, 0xA8, 0x6A],
    [0xA3, 0x92, 0x34, 0xD3, 0x0E, 0xB1, 0x0C, 0xA0],
    [0x94, 0xD4, 0x40, 0x32, 0x10, 0x30, 0x15, 0x14],
    [0x4A, 0xCF, 0x9C, 0x4E, 0x39, 0x4E, 0x73, 0xCD],
    [0x54, 0x10, 0x88, 0x64, 0x60, 0x51, 0x66, 0x40],
    [0x28, 0x4B, 0x12, 0x3B, 0x7C, 0x2B, 0x58, 0x0F],
    [0x06, 0x36, 0x28, 0x35, 0x58, 0x46, 0x34, 0x02],
    [0x4B, 0x0E, 0x34, 0x38, 0x6F, 0x38, 0xC9, 0x0B],
    [0x8A, 0x5E, 0x8B, 0x9B, 0x2E, 0x9A, 0x7B, 0xDC],
    [0xF7, 0x62, 0x70, 0x26, 0x8E, 0x60, 0x26, 0x70],
    [0x22, 0x76, 0x4C, 0x46, 0x6C, 0xE2, 0xEA, 0x22],
    [0xA6, 0x46, 0x5E, 0x04, 0x2F, 0x56, 0x79, 0x16],
    [0x66, 0x10, 0x44, 0x32, 0x18, 0x77, 0x10, 0x67],
    [0x2C, 0x3E, 0x7D, 0x0F, 0xE9, 0x3E, 0x41, 0x0C],
    [0x62, 0x76, 0x44, 0x52, 0x9C, 0x62, 0x33, 0x50],
    [0xE7, 0x46, 0x0C, 0x42, 0x4C, 0x92, 0xAC, 0x64],
    [0x7C, 0x68, 0x5C, 0xA9, 0xB1, 0xDF, 0x32, 0xBC],
    [0x9D, 0x68, 0x74, 0x68, 0x61, 0x48, 0x12, 0xE9],
    [0x58, 0xCD, 0x00, 0x58, 0x46, 0x7A, 0xCB, 0x5A],
    [0x3E, 0x3E, 0x76, 0x0B, 0x68, 0x1A, 0xDD, 0x08],
    [0x18, 0x0A, 0x74, 0x28, 0x6A, 0x3A, 0x52, 0x1A],
    [0xBF, 0xDE, 0x6B, 0x1E, 0x7C, 0x8A, 0xF9, 0x9B],
    [0x28, 0xAD, 0x74, 0x38, 0xF0, 0x0A, 0x56, 0x9A],
    [0x3B, 0x2A, 0x62, 0x5B, 0x3C, 0x5B, 0x9D, 0x0A],
    [0x83, 0x52, 0x02, 0x06, 0x5A, 0x56, 0x0F, 0xD0],
    [0xB5, 0x64, 0xF3, 0x60, 0xD7, 0x40, 0x4A, 0xF2],
    [0x71, 0x72, 0xF1, 0x64, 0x70, 0x53, 0x82, 0x75],
    [0xDE, 0xFE, 0x6A, 0x7E, 0xF4, 0x6C, 0xEC, 0xCE],
    [0x1C, 0x2C, 0x4A, 0x28, 0x12, 0x3C, 0x20, 0x3C],
    [0xD4, 0x46, 0x5A, 0xC7, 0x3F, 0xD2, 0x3E, 0x42],
    [0x5A, 0x39, 0x25, 0x08, 0x7C, 0x1A, 0xDC, 0x1F],
    [0x90, 0x74, 0x72, 0x74, 0x60, 0x00, 0x14, 0xB0],
    [0x38, 0xCE, 0x58, 0x78, 0xF6, 0xFC, 0x27, 0x6E],
    [0x61, 0x52, 0x30, 0x14, 0x50, 0x42, 0x87, 0x61],
    [0x95, 0x34, 0x0B, 0x00, 0x10, 0xC0, 0x24, 0x86],
    [0xB4, 0x24, 0x59, 0xA7, 0x32, 0x96, 0x70, 0x60],
    [0x56, 0x44, 0xDB, 0xE4, 0x20, 0xF5, 0x76, 0xD4],
    [0xBE, 0xAE, 0x66, 0x6E, 0x8C, 0xEF, 0x6E, 0xEB],
    [0x22, 0x31, 0x47, 0x06, 0x0E, 0x22, 0x08, 0x03],
    [0x5E, 0x9D, 0x3E, 0x1A, 0x3A, 0xAE, 0x6F, 0x9B],
    [0x42, 0x16, 0x84, 0xD0, 0x4F, 0xF1, 0x06, 0x12],
    [0x04, 0x04, 0x6D, 0x06, 0x5B, 0xB6, 0xA0, 0x87],
    [0xC9, 0xAD, 0x1B, 0xAD, 0x36, 0xAC, 0x38, 0xBF],
    [0x24, 0x36, 0x7A, 0x16, 0x7C, 0x16, 0xFD, 0x32],
    [0x2C, 0xFF, 0x68, 0x68, 0x70, 0x4C, 0x72, 0x2C],
    [0xA2, 0x12, 0x36, 0x00, 0x78, 0x02, 0xD4, 0xD7],
    [0x60, 0x70, 0x5A, 0x47, 0xC1, 0x54, 0x1B, 0x65],
    [0xE0, 0xE1, 0x02, 0x54, 0x16, 0x40, 0x8E, 0xD5],
    [0x46, 0x12, 0x12, 0x00, 0x2F, 0x52, 0x18, 0x13],
    [0x30, 0x76, 0x66, 0x36, 0xEB, 0x31, 0x12, 0x01],
    [0x49, 0x5D, 0x5E, 0x4C, 0x60, 0x5F, 0x5A, 0x5E],
    [0x08, 0xD8, 0xEF, 0x98, 0x36, 0x4C, 0x7A, 0xDC],
    [0x6F, 0x2E, 0x18, 0x3E, 0x8B, 0x3F, 0x70, 0x0F],
    [0x0C, 0x0D, 0x12, 0x28, 0x30, 0x18, 0x58, 0x5D],
    [0x6B, 0x7C, 0x10, 0x38, 0xB1, 0x48, 0x57, 0x3C],
    [0xEE, 0xDD, 0xBC, 0xCF, 0x69, 0x6E, 0x26, 0x4A],
    [0x71, 0x33, 0x44, 0x66, 0x48, 0x52, 0x06, 0x62],
    [0x51, 0x53, 0xF0, 0x74, 0x54, 0x60, 0x98, 0x35],
    [0x01, 0x30, 0x50, 0x22, 0x86, 0x20, 0x18, 0x20],
    [0x7B, 0x5C, 0xC3, 0x48, 0x64, 0x68, 0x78, 0x58],
    [0x36, 0x32, 0x6C, 0x36, 0x9F, 0xE6, 0x2C, 0xB7],
    [0x61, 0x22, 0x00, 0x72, 0xC9, 0x36, 0x02, 0x40],
    [0x5C, 0x7C, 0x4C, 0x1A, 0x2C, 0x4E, 0x72, 0x5E],
    [0x14, 0xB7, 0x2F, 0x04, 0x54, 0xD1, 0x2E, 0xD5],
    [0x44, 0x04, 0x38, 0x76, 0x14, 0x44, 0x03, 0x54],
    [0x18, 0xCD, 0x0A, 0x0C, 0x24, 0x8D, 0x7F, 0xCF],
    [0x23, 0x25, 0x1E, 0x06, 0x3C, 0x76, 0x38, 0x72],
    [0x3A, 0x8A, 0x16, 0x88, 0x7A, 0xDE, 0xFC, 0x4A],
    [0x6E, 0x2E, 0x5E, 0x7B, 0xFC, 0x2F, 0x7C, 0x2F],
    [0x48, 0x4A, 0x14, 0x5B, 0x39, 0x5B, 0x0A, 0x1A],
    [0x5B, 0x3A, 0x54, 0x1A, 0x29, 0x2B, 0x14, 0x4E],
    [0xA9, 0x38, 0x74, 0x2A, 0x76, 0xF9, 0xC5, 0x7C],
];

