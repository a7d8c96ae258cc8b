//! I/O port map.
//!
//! Keyboard half-rows are read through port 0xFE with one address line
//! pulled low per row; keys are active low. The Kempston joystick is read
//! through port 0x1F and is active high.

/// Border colour, EAR and MIC output port.
pub const PORT_BORDER: u16 = 0x00FE;

/// Kempston joystick port, yields 000FUDLR active high.
pub const PORT_KEMPSTON_JOYSTICK: u16 = 0x001F;

pub const PORT_KEYBOARD_SHIFTZXCV: u16 = 0xFEFE; // 11111110
pub const PORT_KEYBOARD_ASDFG: u16 = 0xFDFE; // 11111101
pub const PORT_KEYBOARD_QWERT: u16 = 0xFBFE; // 11111011
pub const PORT_KEYBOARD_12345: u16 = 0xF7FE; // 11110111
pub const PORT_KEYBOARD_09876: u16 = 0xEFFE; // 11101111
pub const PORT_KEYBOARD_POIUY: u16 = 0xDFFE; // 11011111
pub const PORT_KEYBOARD_ENTERLKJH: u16 = 0xBFFE; // 10111111
pub const PORT_KEYBOARD_SPACESYMSHFTMNB: u16 = 0x7FFE; // 01111111

/// Bit 4 of an OUT to [`PORT_BORDER`] drives the speaker.
pub const BORDER_SPEAKER_BIT: u8 = 1 << 4;

/// Bits 0..2 of an OUT to [`PORT_BORDER`] set the border colour.
pub const BORDER_COLOUR_MASK: u8 = 0x07;

/// Index of the keyboard half-row selected by a port address, or `None`
/// for a non-keyboard address.
#[inline]
pub fn halfrow_index(port: u16) -> Option<usize> {
    if port & 0x00FF != 0xFE {
        return None;
    }
    // One low address line selects one row; the game only ever pulls a
    // single line low at a time.
    let high = !(port >> 8) as u8;
    if high == 0 {
        return None;
    }
    Some(high.trailing_zeros() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halfrow_index() {
        assert_eq!(halfrow_index(PORT_KEYBOARD_SHIFTZXCV), Some(0));
        assert_eq!(halfrow_index(PORT_KEYBOARD_ASDFG), Some(1));
        assert_eq!(halfrow_index(PORT_KEYBOARD_QWERT), Some(2));
        assert_eq!(halfrow_index(PORT_KEYBOARD_12345), Some(3));
        assert_eq!(halfrow_index(PORT_KEYBOARD_09876), Some(4));
        assert_eq!(halfrow_index(PORT_KEYBOARD_POIUY), Some(5));
        assert_eq!(halfrow_index(PORT_KEYBOARD_ENTERLKJH), Some(6));
        assert_eq!(halfrow_index(PORT_KEYBOARD_SPACESYMSHFTMNB), Some(7));

        // Not a ULA port.
        assert_eq!(halfrow_index(PORT_KEMPSTON_JOYSTICK), None);
    }
}
