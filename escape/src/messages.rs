/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! On-screen banner messages.
//!
//! Messages queue as two-byte entries and are typed onto the screen one
//! character per display call, with a speaker click per character.

use spectrum::Machine;

use crate::constants::*;
use crate::data::font;
use crate::sound;
use crate::state::State;

pub const MESSAGE_MISSED_ROLL_CALL: u8 = 0;
pub const MESSAGE_TIME_TO_WAKE_UP: u8 = 1;
pub const MESSAGE_BREAKFAST_TIME: u8 = 2;
pub const MESSAGE_EXERCISE_TIME: u8 = 3;
pub const MESSAGE_TIME_FOR_BED: u8 = 4;
pub const MESSAGE_THE_DOOR_IS_LOCKED: u8 = 5;
pub const MESSAGE_IT_IS_OPEN: u8 = 6;
pub const MESSAGE_INCORRECT_KEY: u8 = 7;
pub const MESSAGE_ROLL_CALL: u8 = 8;
pub const MESSAGE_RED_CROSS_PARCEL: u8 = 9;
pub const MESSAGE_PICKING_THE_LOCK: u8 = 10;
pub const MESSAGE_CUTTING_THE_WIRE: u8 = 11;
pub const MESSAGE_YOU_OPEN_THE_BOX: u8 = 12;
pub const MESSAGE_YOU_ARE_IN_SOLITARY: u8 = 13;
pub const MESSAGE_WAIT_FOR_RELEASE: u8 = 14;
pub const MESSAGE_MORALE_IS_ZERO: u8 = 15;
pub const MESSAGE_ITEM_DISCOVERED: u8 = 16;
pub const MESSAGE_HE_TAKES_THE_BRIBE: u8 = 17;
pub const MESSAGE_AND_ACTS_AS_DECOY: u8 = 18;
pub const MESSAGE_ANOTHER_DAY_DAWNS: u8 = 19;

pub static MESSAGES: [&str; 20] = [
    "MISSED ROLL CALL",
    "TIME TO WAKE UP",
    "BREAKFAST TIME",
    "EXERCISE TIME",
    "TIME FOR BED",
    "THE DOOR IS LOCKED",
    "IT IS OPEN",
    "INCORRECT KEY",
    "ROLL CALL",
    "RED CROSS PARCEL",
    "PICKING THE LOCK",
    "CUTTING THE WIRE",
    "YOU OPEN THE BOX",
    "YOU ARE IN SOLITARY",
    "WAIT FOR RELEASE",
    "MORALE IS ZERO",
    "ITEM DISCOVERED",
    "HE TAKES THE BRIBE",
    "AND ACTS AS DECOY",
    "ANOTHER DAY DAWNS",
];

/// Display state: no message being typed.
const DISPLAY_IDLE: u8 = 0xFF;

/// Calls to hold a finished message on screen before wiping it.
const DISPLAY_HOLD: u8 = 31;

/// The message queue and typing state machine.
#[derive(Clone, Copy, Debug)]
pub struct Messages {
    /// Two bytes per entry: message index and a spare qualifier.
    pub queue: [u8; MESSAGE_QUEUE_LENGTH],
    /// Next free byte in the queue.
    pub queue_pointer: usize,
    /// Message currently being typed, or DISPLAY_IDLE.
    pub current_message: u8,
    /// Characters typed so far.
    pub current_character: u8,
    /// Hold countdown once fully typed; 0 when still typing.
    pub hold_counter: u8,
}

impl Messages {
    pub fn new() -> Self {
        Self {
            queue: [0; MESSAGE_QUEUE_LENGTH],
            queue_pointer: 0,
            current_message: DISPLAY_IDLE,
            current_character: 0,
            hold_counter: 0,
        }
    }

    /// True if a message is queued or being typed.
    pub fn pending(&self) -> bool {
        self.queue_pointer != 0 || self.current_message != DISPLAY_IDLE
    }

    pub fn is_idle(&self) -> bool {
        !self.pending()
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a message to the queue. Full queue drops the message, as the
/// original did.
pub fn queue_message(state: &mut State, message_index: u8) {
    debug_assert!((message_index as usize) < MESSAGES.len());
    let messages = &mut state.messages;
    if messages.queue_pointer + 2 > MESSAGE_QUEUE_LENGTH - 1 {
        return;
    }
    messages.queue[messages.queue_pointer] = message_index;
    messages.queue[messages.queue_pointer + 1] = 0;
    messages.queue_pointer += 2;
}

/// Screen byte offset of the text row character column `col`.
fn text_offset(col: u8) -> usize {
    SCREEN_TEXT_START_ADDRESS + col as usize
}

/// Draw one font glyph into the pixel bank at a text-row column.
pub fn plot_glyph(machine: &mut dyn Machine, offset: usize, ch: char) {
    let glyph = &font::FONT[font::glyph_index(ch)];
    let screen = machine.screen();
    for (row, byte) in glyph.iter().enumerate() {
        screen.pixels[offset + (row << 8)] = *byte;
    }
}

/// Draw a whole string at a screen offset. Returns the offset just past
/// the final character.
pub fn plot_text(machine: &mut dyn Machine, offset: usize, text: &str) -> usize {
    let mut offset = offset;
    for ch in text.chars() {
        plot_glyph(machine, offset, ch);
        offset += 1;
    }
    offset
}

/// Advance the typing state machine by one character. Called twice per
/// main-loop tick.
pub fn message_display(state: &mut State, machine: &mut dyn Machine) {
    // Holding a finished message on screen.
    if state.messages.hold_counter > 0 {
        state.messages.hold_counter -= 1;
        if state.messages.hold_counter == 0 {
            wipe_message(state, machine);
        }
        return;
    }

    if state.messages.current_message == DISPLAY_IDLE {
        // Nothing being typed; pull the next queued message.
        if state.messages.queue_pointer == 0 {
            return;
        }
        state.messages.current_message = state.messages.queue[0];
        state.messages.current_character = 0;
        // Shift the queue down.
        state.messages.queue.copy_within(2.., 0);
        state.messages.queue_pointer -= 2;
        return;
    }

    let text = MESSAGES[state.messages.current_message as usize];
    let index = state.messages.current_character as usize;
    if index >= text.len() {
        state.messages.hold_counter = DISPLAY_HOLD;
        state.messages.current_message = DISPLAY_IDLE;
        return;
    }

    let ch = text.as_bytes()[index] as char;
    plot_glyph(machine, text_offset(state.messages.current_character), ch);
    state.messages.current_character += 1;
    sound::click(machine);
}

/// Clear the message row.
fn wipe_message(state: &mut State, machine: &mut dyn Machine) {
    let _ = state;
    let screen = machine.screen();
    for col in 0..32 {
        for row in 0..8 {
            screen.pixels[text_offset(col) + (row << 8)] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum::BufferMachine;

    #[test]
    fn test_queue_and_type_message() {
        let mut state = State::new().unwrap();
        let mut machine = BufferMachine::new();

        queue_message(&mut state, MESSAGE_TIME_TO_WAKE_UP);
        assert!(state.messages.pending());

        // First call dequeues, later calls type one character each.
        message_display(&mut state, &mut machine);
        assert_eq!(state.messages.current_message, MESSAGE_TIME_TO_WAKE_UP);

        let len = MESSAGES[MESSAGE_TIME_TO_WAKE_UP as usize].len();
        for _ in 0..len {
            message_display(&mut state, &mut machine);
        }
        assert_eq!(state.messages.current_character as usize, len);
        // One more call finishes typing and starts the hold.
        message_display(&mut state, &mut machine);
        assert!(state.messages.hold_counter > 0);
        // One click per character.
        assert_eq!(machine.speaker_pulses, len as u64);
    }

    #[test]
    fn test_queue_bounds() {
        let mut state = State::new().unwrap();
        // The queue holds nine entries; further messages drop.
        for _ in 0..12 {
            queue_message(&mut state, MESSAGE_ROLL_CALL);
        }
        assert!(state.messages.queue_pointer <= MESSAGE_QUEUE_LENGTH - 1);
    }
}
