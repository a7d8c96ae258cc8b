/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Speaker output and the alarm bell.

use spectrum::ports::{BORDER_SPEAKER_BIT, PORT_BORDER};
use spectrum::Machine;

use crate::constants::*;
use crate::state::State;

/// One speaker click.
pub fn click(machine: &mut dyn Machine) {
    machine.out_port(PORT_BORDER, BORDER_SPEAKER_BIT);
    machine.out_port(PORT_BORDER, 0);
}

/// Pulse the speaker: the high byte of `sound` is the iteration count,
/// the low byte the delay between edges.
pub fn play_speaker(machine: &mut dyn Machine, sound: u16) {
    let iterations = (sound >> 8) as u8;
    let delay = (sound & 0xFF) as u8;
    for _ in 0..iterations {
        machine.out_port(PORT_BORDER, BORDER_SPEAKER_BIT);
        spin(delay);
        machine.out_port(PORT_BORDER, 0);
        spin(delay);
    }
}

/// The original burned cycles between speaker edges; the host supplies
/// real timing, so the delay only shapes the pulse count here.
#[inline]
fn spin(_delay: u8) {}

/// One tick of the bell ringer.
///
/// bell == 0 is stopped; 255 rings perpetually; anything else counts
/// down to zero.
pub fn ring_bell(state: &mut State, machine: &mut dyn Machine) {
    if state.bell == BELL_STOP {
        return;
    }
    if state.bell != BELL_RING_PERPETUAL {
        state.bell -= 1;
        if state.bell == BELL_STOP {
            // Finished ringing: leave the ringer in its rest frame.
            state.bell_ringer_frame = false;
            plot_ringer(state, machine);
            return;
        }
    }
    state.bell_ringer_frame = !state.bell_ringer_frame;
    plot_ringer(state, machine);
    play_speaker(machine, SOUND_BELL_RINGER);
}

// Screen position of the bell ringer bitmap.
const RINGER_X: usize = 8;
const RINGER_Y: usize = 72;

/// The two 12-byte ringer frames: bell hanging and bell swung.
static BELL_RINGER_REST: [u8; 12] = [
    0x18, 0x3C, 0x3C, 0x3C, 0x3C, 0x7E, 0x7E, 0x7E, 0xFF, 0xFF, 0x18, 0x18,
];
static BELL_RINGER_SWUNG: [u8; 12] = [
    0x0C, 0x1E, 0x1E, 0x3C, 0x3C, 0x7C, 0x7E, 0xFE, 0xFF, 0x7F, 0x0C, 0x30,
];

fn plot_ringer(state: &State, machine: &mut dyn Machine) {
    let bitmap = if state.bell_ringer_frame {
        &BELL_RINGER_SWUNG
    } else {
        &BELL_RINGER_REST
    };
    let screen = machine.screen();
    for (row, byte) in bitmap.iter().enumerate() {
        screen.pixels[spectrum::Screen::pixel_offset(RINGER_X, RINGER_Y + row)] = *byte;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum::BufferMachine;

    #[test]
    fn test_bell_stopped_is_noop() {
        let mut state = State::new().unwrap();
        let mut machine = BufferMachine::new();
        state.bell = BELL_STOP;
        ring_bell(&mut state, &mut machine);
        assert_eq!(machine.speaker_pulses, 0);
        assert_eq!(state.bell, BELL_STOP);
    }

    #[test]
    fn test_bell_counts_down_to_stop() {
        let mut state = State::new().unwrap();
        let mut machine = BufferMachine::new();
        state.bell = 254;
        for _ in 0..254 {
            ring_bell(&mut state, &mut machine);
        }
        assert_eq!(state.bell, BELL_STOP);
        // A further tick does nothing.
        let pulses = machine.speaker_pulses;
        ring_bell(&mut state, &mut machine);
        assert_eq!(machine.speaker_pulses, pulses);
    }

    #[test]
    fn test_bell_perpetual() {
        let mut state = State::new().unwrap();
        let mut machine = BufferMachine::new();
        state.bell = BELL_RING_PERPETUAL;
        for _ in 0..1000 {
            ring_bell(&mut state, &mut machine);
        }
        assert_eq!(state.bell, BELL_RING_PERPETUAL);
        assert!(machine.speaker_pulses > 0);
    }
}
