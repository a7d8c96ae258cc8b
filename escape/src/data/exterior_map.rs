/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! The exterior map: a 54x34 array of supertile references.

use crate::constants::{MAPX, MAPY};

pub static MAP: [u8; MAPX * MAPY] = [
    0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB,
    0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF,
    0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3,
    0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC,
    0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0,
    0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4,
    0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD,
    0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1,
    0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5,
    0xCB, 0xCC, 0xCD, 0xCE, 0x02, 0x03, 0x02, 0x00, 0x00, 0x01, 0x00, 0x03, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00,
    0x00, 0x03, 0x02, 0x00, 0x03, 0x00, 0x00, 0x01, 0x02, 0x00, 0x01, 0x00, 0x01, 0x03, 0x00, 0x03, 0x00, 0x01,
    0x00, 0x00, 0x02, 0x01, 0x00, 0x03, 0x02, 0x00, 0x03, 0x00, 0x00, 0x02, 0x00, 0x03, 0xD3, 0xD4, 0xD5, 0xC8,
    0xCC, 0xCD, 0xCE, 0xCF, 0x02, 0x00, 0x02, 0x02, 0x02, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
    0x01, 0x02, 0x01, 0x03, 0x00, 0x02, 0x00, 0x02, 0x01, 0x01, 0x03, 0x03, 0x00, 0x02, 0x02, 0x03, 0x00, 0x00,
    0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x02, 0x01, 0x00, 0x02, 0x00, 0x00, 0x02, 0x03, 0xD4, 0xD5, 0xC8, 0xC9,
    0xCD, 0xCE, 0xCF, 0xD0, 0x01, 0x01, 0x02, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x01, 0x01, 0x00, 0x00, 0x02,
    0x00, 0x01, 0x00, 0x03, 0x02, 0x01, 0x02, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x03, 0x02,
    0x03, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x00, 0x03, 0x00, 0x01, 0x00, 0x00, 0x02, 0xD5, 0xC8, 0xC9, 0xCA,
    0xCE, 0xCF, 0xD0, 0xD1, 0x00, 0x00, 0x01, 0x03, 0x00, 0x02, 0x03, 0x02, 0x01, 0x02, 0x01, 0x00, 0x02, 0x02,
    0x01, 0x00, 0x03, 0x00, 0x02, 0x03, 0x00, 0x01, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x02, 0x01, 0x01, 0x00, 0x00, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00, 0x03, 0x00, 0x02, 0xC8, 0xC9, 0xCA, 0xCB,
    0xCF, 0xD0, 0xD1, 0xD2, 0x00, 0x00, 0x02, 0x02, 0x00, 0x03, 0x01, 0x03, 0x00, 0x00, 0x01, 0x03, 0x00, 0x00,
    0x01, 0x00, 0x03, 0x02, 0x00, 0x01, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x02, 0x03, 0x03, 0x01, 0x00, 0x00,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x03, 0x00, 0x00, 0x02, 0x00, 0x03, 0x02, 0xC9, 0xCA, 0xCB, 0xCC,
    0xD0, 0xD1, 0xD2, 0xD3, 0x03, 0x00, 0x01, 0x02, 0x02, 0x03, 0x03, 0x00, 0x00, 0x00, 0x44, 0x3F, 0x3C, 0x3D,
    0x3E, 0x3F, 0x3C, 0x3D, 0x3E, 0x3F, 0x3C, 0x3D, 0x3E, 0x3F, 0x3C, 0x3D, 0x3E, 0x3F, 0x3C, 0x3D, 0x3E, 0x3F,
    0x3C, 0x3D, 0x3E, 0x3F, 0x3C, 0x3D, 0x3E, 0x48, 0x03, 0x02, 0x00, 0x01, 0x00, 0x00, 0xCA, 0xCB, 0xCC, 0xCD,
    0xD1, 0xD2, 0xD3, 0xD4, 0x00, 0x02, 0x00, 0x03, 0x00, 0x00, 0x00, 0x03, 0x02, 0x02, 0x45, 0x12, 0x15, 0x18,
    0x1B, 0x1E, 0x21, 0x24, 0x27, 0x2A, 0x2D, 0x08, 0x0B, 0x0E, 0x11, 0x14, 0x17, 0x1A, 0x1D, 0x20, 0x23, 0x26,
    0x29, 0x2C, 0x2F, 0x0A, 0x0D, 0x10, 0x13, 0x49, 0x03, 0x01, 0x00, 0x03, 0x03, 0x01, 0xCB, 0xCC, 0xCD, 0xCE,
    0xD2, 0xD3, 0xD4, 0xD5, 0x02, 0x03, 0x03, 0x02, 0x01, 0x00, 0x00, 0x00, 0x02, 0x02, 0x46, 0x17, 0x1A, 0x1D,
    0x20, 0x23, 0x26, 0x29, 0x2C, 0x2F, 0x0A, 0x0D, 0x10, 0x13, 0x16, 0x19, 0x1C, 0x1F, 0x22, 0x25, 0x28, 0x2B,
    0x2E, 0x09, 0x0C, 0x0F, 0x12, 0x15, 0x18, 0x4A, 0x01, 0x03, 0x00, 0x00, 0x00, 0x03, 0xCC, 0xCD, 0xCE, 0xCF,
    0xD3, 0xD4, 0xD5, 0xC8, 0x03, 0x02, 0x00, 0x02, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x47, 0x1C, 0x1F, 0x22,
    0x64, 0x65, 0x66, 0x67, 0x68, 0x0C, 0x0F, 0x12, 0x64, 0x65, 0x66, 0x67, 0x68, 0x24, 0x27, 0x2A, 0x64, 0x65,
    0x66, 0x67, 0x68, 0x14, 0x17, 0x1A, 0x1D, 0x4B, 0x00, 0x03, 0x02, 0x00, 0x00, 0x03, 0xCD, 0xCE, 0xCF, 0xD0,
    0xD4, 0xD5, 0xC8, 0xC9, 0x01, 0x00, 0x00, 0x02, 0x02, 0x03, 0x02, 0x02, 0x02, 0x00, 0x44, 0x21, 0x24, 0x27,
    0x69, 0x6A, 0x6B, 0x6C, 0x6D, 0x11, 0x14, 0x17, 0x69, 0x6A, 0x6B, 0x6C, 0x6D, 0x29, 0x2C, 0x2F, 0x69, 0x6A,
    0x6B, 0x6C, 0x6D, 0x19, 0x1C, 0x1F, 0x22, 0x48, 0x03, 0x01, 0x03, 0x00, 0x00, 0x00, 0xCE, 0xCF, 0xD0, 0xD1,
    0xD5, 0xC8, 0xC9, 0xCA, 0x00, 0x02, 0x01, 0x01, 0x03, 0x00, 0x02, 0x01, 0x02, 0x00, 0x45, 0x26, 0x29, 0x2C,
    0x6E, 0x6F, 0x70, 0x71, 0x72, 0x16, 0x19, 0x1C, 0x6E, 0x6F, 0x70, 0x71, 0x72, 0x2E, 0x09, 0x0C, 0x6E, 0x6F,
    0x70, 0x71, 0x72, 0x1E, 0x21, 0x24, 0x27, 0x49, 0x02, 0x00, 0x00, 0x03, 0x00, 0x00, 0xCF, 0xD0, 0xD1, 0xD2,
    0xC8, 0xC9, 0xCA, 0xCB, 0x02, 0x00, 0x00, 0x03, 0x03, 0x02, 0x00, 0x00, 0x02, 0x00, 0x46, 0x2B, 0x2E, 0x09,
    0x0C, 0x0F, 0x12, 0x15, 0x18, 0x1B, 0x1E, 0x21, 0x24, 0x27, 0x2A, 0x2D, 0x08, 0x0B, 0x0E, 0x11, 0x14, 0x17,
    0x1A, 0x1D, 0x20, 0x23, 0x26, 0x29, 0x2C, 0x4A, 0x03, 0x00, 0x02, 0x00, 0x03, 0x00, 0xD0, 0xD1, 0xD2, 0xD3,
    0xC9, 0xCA, 0xCB, 0xCC, 0x03, 0x02, 0x01, 0x00, 0x02, 0x00, 0x02, 0x00, 0x01, 0x00, 0x47, 0x08, 0x0B, 0x0E,
    0x11, 0x14, 0x17, 0x1A, 0x1D, 0x20, 0x23, 0x26, 0x29, 0x2C, 0x2F, 0x0A, 0x0D, 0x10, 0x13, 0x16, 0x19, 0x1C,
    0x1F, 0x22, 0x25, 0x28, 0x2B, 0x2E, 0x09, 0x4B, 0x00, 0x01, 0x00, 0x03, 0x02, 0x00, 0xD1, 0xD2, 0xD3, 0xD4,
    0xCA, 0xCB, 0xCC, 0xCD, 0x00, 0x01, 0x00, 0x03, 0x01, 0x00, 0x02, 0x03, 0x00, 0x00, 0x44, 0x0D, 0x10, 0x13,
    0x16, 0x19, 0x1C, 0x1F, 0x22, 0x25, 0x28, 0x2B, 0x2E, 0x09, 0x0C, 0x0F, 0x12, 0x15, 0x18, 0x1B, 0x1E, 0x21,
    0x24, 0x27, 0x2A, 0x2D, 0x08, 0x0B, 0x0E, 0x48, 0x00, 0x00, 0x03, 0x00, 0x01, 0x00, 0xD2, 0xD3, 0xD4, 0xD5,
    0xCB, 0xCC, 0xCD, 0xCE, 0x01, 0x00, 0x02, 0x00, 0x03, 0x03, 0x00, 0x00, 0x02, 0x00, 0x45, 0x12, 0x15, 0x18,
    0x1B, 0x1E, 0x21, 0x24, 0x27, 0x2A, 0x2D, 0x08, 0x0B, 0x0E, 0x11, 0x14, 0x17, 0x1A, 0x1D, 0x20, 0x23, 0x26,
    0x29, 0x2C, 0x2F, 0x0A, 0x0D, 0x10, 0x13, 0x49, 0x03, 0x00, 0x00, 0x03, 0x00, 0x00, 0xD3, 0xD4, 0xD5, 0xC8,
    0xCC, 0xCD, 0xCE, 0xCF, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x46, 0x17, 0x1A, 0x1D,
    0x20, 0x23, 0x26, 0x29, 0x2C, 0x2F, 0x0A, 0x0D, 0x10, 0x13, 0x16, 0x19, 0x1C, 0x1F, 0x22, 0x25, 0x28, 0x2B,
    0x2E, 0x09, 0x0C, 0x0F, 0x12, 0x15, 0x18, 0x4A, 0x00, 0x01, 0x02, 0x00, 0x01, 0x03, 0xD4, 0xD5, 0xC8, 0xC9,
    0xCD, 0xCE, 0xCF, 0xD0, 0x03, 0x00, 0x03, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x02, 0x47, 0x1C, 0x1F, 0x22,
    0x25, 0x28, 0x2B, 0x2E, 0x09, 0x0C, 0x0F, 0x12, 0x15, 0x18, 0x1B, 0x1E, 0x21, 0x24, 0x27, 0x2A, 0x2D, 0x08,
    0x0B, 0x0E, 0x11, 0x14, 0x17, 0x1A, 0x1D, 0x4B, 0x00, 0x02, 0x00, 0x02, 0x00, 0x00, 0xD5, 0xC8, 0xC9, 0xCA,
    0xCE, 0xCF, 0xD0, 0xD1, 0x00, 0x00, 0x02, 0x02, 0x00, 0x02, 0x00, 0x01, 0x00, 0x01, 0x44, 0x21, 0x24, 0x27,
    0x2A, 0x2D, 0x08, 0x0B, 0x0E, 0x11, 0x14, 0x17, 0x1A, 0x1D, 0x20, 0x23, 0x26, 0x29, 0x2C, 0x2F, 0x0A, 0x0D,
    0x10, 0x13, 0x16, 0x19, 0x1C, 0x1F, 0x22, 0x48, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC8, 0xC9, 0xCA, 0xCB,
    0xCF, 0xD0, 0xD1, 0xD2, 0x01, 0x03, 0x03, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0x45, 0x26, 0x29, 0x2C,
    0x2F, 0x0A, 0x0D, 0x10, 0x13, 0x16, 0x19, 0x1C, 0x1F, 0x22, 0x25, 0x28, 0x2B, 0x2E, 0x09, 0x0C, 0x0F, 0x12,
    0x15, 0x18, 0x1B, 0x1E, 0x21, 0x24, 0x27, 0x49, 0x00, 0x00, 0x01, 0x00, 0x00, 0x02, 0xC9, 0xCA, 0xCB, 0xCC,
    0xD0, 0xD1, 0xD2, 0xD3, 0x03, 0x01, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x46, 0x2B, 0x2E, 0x09,
    0x0C, 0x0F, 0x12, 0x15, 0x18, 0x1B, 0x1E, 0x21, 0x24, 0x27, 0x2A, 0x2D, 0x08, 0x0B, 0x0E, 0x11, 0x14, 0x17,
    0x1A, 0x1D, 0x20, 0x23, 0x26, 0x29, 0x2C, 0x4A, 0x00, 0x00, 0x01, 0x02, 0x01, 0x01, 0xCA, 0xCB, 0xCC, 0xCD,
    0xD1, 0xD2, 0xD3, 0xD4, 0x02, 0x01, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x47, 0x08, 0x0B, 0x0E,
    0x11, 0x14, 0x17, 0x1A, 0x1D, 0x20, 0x23, 0x26, 0x29, 0x2C, 0x2F, 0x0A, 0x0D, 0x10, 0x13, 0x16, 0x19, 0x1C,
    0x1F, 0x22, 0x25, 0x28, 0x2B, 0x2E, 0x09, 0x4B, 0x01, 0x01, 0x01, 0x03, 0x03, 0x01, 0xCB, 0xCC, 0xCD, 0xCE,
    0xD2, 0xD3, 0xD4, 0xD5, 0x01, 0x00, 0x01, 0x03, 0x00, 0x00, 0x02, 0x03, 0x00, 0x00, 0x44, 0x0D, 0x10, 0x13,
    0x16, 0x19, 0x1C, 0x1F, 0x22, 0x25, 0x28, 0x2B, 0x2E, 0x09, 0x0C, 0x0F, 0x12, 0x15, 0x18, 0x1B, 0x1E, 0x21,
    0x24, 0x27, 0x2A, 0x2D, 0x08, 0x0B, 0x0E, 0x48, 0x00, 0x02, 0x01, 0x00, 0x00, 0x00, 0xCC, 0xCD, 0xCE, 0xCF,
    0xD3, 0xD4, 0xD5, 0xC8, 0x00, 0x02, 0x00, 0x02, 0x02, 0x01, 0x00, 0x02, 0x01, 0x03, 0x45, 0x43, 0x40, 0x41,
    0x42, 0x43, 0x40, 0x41, 0x42, 0x43, 0x40, 0x41, 0x42, 0x43, 0x4C, 0x4D, 0x42, 0x43, 0x40, 0x41, 0x42, 0x43,
    0x40, 0x41, 0x42, 0x43, 0x40, 0x41, 0x42, 0x49, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xCD, 0xCE, 0xCF, 0xD0,
    0xD4, 0xD5, 0xC8, 0xC9, 0x00, 0x01, 0x00, 0x03, 0x02, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x02, 0x01, 0x02,
    0x01, 0x00, 0x03, 0x00, 0x02, 0x01, 0x01, 0x03, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x01, 0x00, 0x00,
    0x03, 0x00, 0x02, 0x02, 0x00, 0x00, 0x01, 0x00, 0x02, 0x03, 0x03, 0x00, 0x01, 0x00, 0xCE, 0xCF, 0xD0, 0xD1,
    0xD5, 0xC8, 0xC9, 0xCA, 0x03, 0x03, 0x03, 0x00, 0x02, 0x03, 0x02, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x02,
    0x00, 0x00, 0x00, 0x03, 0x02, 0x01, 0x02, 0x03, 0x00, 0x00, 0x00, 0x01, 0x03, 0x03, 0x00, 0x03, 0x03, 0x02,
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x02, 0x03, 0x00, 0x02, 0x00, 0x03, 0x00, 0x00, 0xCF, 0xD0, 0xD1, 0xD2,
    0xC8, 0xC9, 0xCA, 0xCB, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x01, 0x03, 0x00, 0x00, 0x03, 0x00, 0x00, 0x01,
    0x03, 0x01, 0x00, 0x00, 0x00, 0x03, 0x00, 0x03, 0x01, 0x01, 0x00, 0x02, 0x02, 0x00, 0x00, 0x00, 0x01, 0x00,
    0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x03, 0x02, 0x00, 0x00, 0x00, 0x01, 0x02, 0x01, 0xD0, 0xD1, 0xD2, 0xD3,
    0xC9, 0xCA, 0xCB, 0xCC, 0x03, 0x03, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00,
    0x01, 0x01, 0x00, 0x00, 0x00, 0x03, 0x00, 0x01, 0x01, 0x01, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x03,
    0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x03, 0x01, 0x00, 0x00, 0x03, 0xD1, 0xD2, 0xD3, 0xD4,
    0xCA, 0xCB, 0xCC, 0xCD, 0x00, 0x01, 0x02, 0x02, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0x03, 0x03, 0x02, 0x03, 0x02, 0x01, 0x03, 0x00, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x02, 0x01, 0x03, 0x01,
    0x02, 0x00, 0x00, 0x01, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xD2, 0xD3, 0xD4, 0xD5,
    0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE,
    0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2,
    0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8,
    0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF,
    0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3,
    0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9,
    0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0,
    0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4,
    0xD5, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xC8, 0xC9, 0xCA,
];
