/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Input reading: keyboard and the three joystick protocols, and the
//! player-input half of the hero's control.

use spectrum::ports::*;
use spectrum::Machine;

use crate::constants::*;
use crate::data::roomdefs::*;
use crate::items;
use crate::rooms::set_roomdef;
use crate::state::State;
use crate::types::*;

/// Keyboard input via the five configurable key definitions. Left wins
/// over right, up over down, as the original scanned them.
fn inputroutine_keyboard(state: &State, machine: &mut dyn Machine) -> u8 {
    let defs = &state.keydefs.defs;
    let pressed = |machine: &mut dyn Machine, def: &KeyDef| -> bool {
        let port = (u16::from(def.port) << 8) | 0xFE;
        !machine.in_port(port) & def.mask != 0
    };

    let mut inputs = INPUT_NONE;
    if pressed(machine, &defs[0]) {
        inputs = INPUT_LEFT;
    } else if pressed(machine, &defs[1]) {
        inputs = INPUT_RIGHT;
    }
    if pressed(machine, &defs[2]) {
        inputs += INPUT_UP;
    } else if pressed(machine, &defs[3]) {
        inputs += INPUT_DOWN;
    }
    if pressed(machine, &defs[4]) {
        inputs += INPUT_FIRE;
    }
    inputs
}

/// Protek (cursor) joystick: up/down/left/right/fire on keys 7/6/5/8/0.
fn inputroutine_protek(machine: &mut dyn Machine) -> u8 {
    let keybits_left = !machine.in_port(PORT_KEYBOARD_12345);
    let keybits_others = !machine.in_port(PORT_KEYBOARD_09876);

    let left_right = if keybits_left & (1 << 4) != 0 {
        INPUT_LEFT
    } else if keybits_others & (1 << 2) != 0 {
        INPUT_RIGHT
    } else {
        INPUT_NONE
    };

    let up_down = if keybits_others & (1 << 3) != 0 {
        INPUT_UP
    } else if keybits_others & (1 << 4) != 0 {
        INPUT_DOWN
    } else {
        INPUT_NONE
    };

    let fire = if keybits_others & (1 << 0) != 0 {
        INPUT_FIRE
    } else {
        INPUT_NONE
    };

    fire + left_right + up_down
}

/// Kempston joystick: reading port 0x1F yields 000FUDLR, active high.
fn inputroutine_kempston(machine: &mut dyn Machine) -> u8 {
    let bits = machine.in_port(PORT_KEMPSTON_JOYSTICK);

    let mut inputs = INPUT_NONE;
    if bits & (1 << 1) != 0 {
        inputs = INPUT_LEFT;
    } else if bits & (1 << 0) != 0 {
        inputs = INPUT_RIGHT;
    }
    if bits & (1 << 3) != 0 {
        inputs += INPUT_UP;
    } else if bits & (1 << 2) != 0 {
        inputs += INPUT_DOWN;
    }
    if bits & (1 << 4) != 0 {
        inputs += INPUT_FIRE;
    }
    inputs
}

/// Sinclair joystick: left/right/down/up/fire on keys 6/7/8/9/0.
fn inputroutine_sinclair(machine: &mut dyn Machine) -> u8 {
    let bits = !machine.in_port(PORT_KEYBOARD_09876);

    let mut inputs = INPUT_NONE;
    if bits & (1 << 4) != 0 {
        inputs = INPUT_LEFT;
    } else if bits & (1 << 3) != 0 {
        inputs = INPUT_RIGHT;
    }
    if bits & (1 << 1) != 0 {
        inputs += INPUT_UP;
    } else if bits & (1 << 2) != 0 {
        inputs += INPUT_DOWN;
    }
    if bits & (1 << 0) != 0 {
        inputs += INPUT_FIRE;
    }
    inputs
}

/// Read the chosen input device.
pub fn input_routine(state: &State, machine: &mut dyn Machine) -> u8 {
    match state.chosen_input_device {
        InputDevice::Keyboard => inputroutine_keyboard(state, machine),
        InputDevice::Kempston => inputroutine_kempston(machine),
        InputDevice::Sinclair => inputroutine_sinclair(machine),
        InputDevice::Protek => inputroutine_protek(machine),
    }
}

/// True when the break chord (CAPS SHIFT + SPACE) is held.
pub fn break_key_pressed(machine: &mut dyn Machine) -> bool {
    let caps = !machine.in_port(PORT_KEYBOARD_SHIFTZXCV) & 0x01 != 0;
    let space = !machine.in_port(PORT_KEYBOARD_SPACESYMSHFTMNB) & 0x01 != 0;
    caps && space
}

/// Feed the player's input to the hero.
pub fn process_player_input(state: &mut State, machine: &mut dyn Machine) -> Flow {
    // Lock picking and wire cutting hold the hero still.
    if state.vischars[HERO_VISCHAR].flags.picking_lock
        || state.vischars[HERO_VISCHAR].flags.cutting_wire
    {
        items::tick_action(state);
        return Ok(());
    }

    let input = input_routine(state, machine);
    if input == INPUT_NONE {
        if state.automatic_player_counter > 0 {
            state.automatic_player_counter -= 1;
        }
        return Ok(());
    }

    // The player has the stick; automatic control resumes half a minute
    // after the last touch.
    state.automatic_player_counter = 31;

    if state.hero_in_bed || state.hero_in_breakfast {
        if state.hero_in_bed {
            // Up and out of the bunk.
            state.hero_in_bed = false;
            set_roomdef(state, ROOM_2_HUT2LEFT, ROOMDEF_2_BED, OBJ_EMPTY_BED_FACING_SE);
            state.vischars[HERO_VISCHAR].route =
                Route::new(ROUTEINDEX_44_HUT2_RIGHT_TO_LEFT | ROUTEINDEX_REVERSED, 1);
        } else {
            // Up from the table.
            state.hero_in_breakfast = false;
            set_roomdef(state, ROOM_25_MESS_HALL, ROOMDEF_25_BENCH_G, OBJ_EMPTY_BENCH);
            state.vischars[HERO_VISCHAR].route =
                Route::new(ROUTEINDEX_43_BREAKFAST_REVERSE, 0);
        }
        crate::route::set_route(state, HERO_VISCHAR);
        state.vischars[HERO_VISCHAR].input |= INPUT_KICK;
        return Ok(());
    }

    let movement = input % INPUT_FIRE;
    let fire = input >= INPUT_FIRE;

    if fire {
        if state.items_held[0] == ITEM_NONE {
            items::pick_up_item(state, machine);
        } else if movement == INPUT_DOWN {
            // Fire plus down drops instead of using.
            items::drop_item(state, machine);
        } else {
            items::use_item(state, machine)?;
        }
        return Ok(());
    }

    let hero = &mut state.vischars[HERO_VISCHAR];
    if hero.input & !INPUT_KICK != movement {
        hero.input = movement | INPUT_KICK;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum::BufferMachine;

    #[test]
    fn test_keyboard_routine_priorities() {
        let state = State::new().unwrap();
        let mut machine = BufferMachine::new();

        // QAOP+Space layout: press O (row 5, bit 1) for left.
        machine.set_key(5, 1, true);
        assert_eq!(inputroutine_keyboard(&state, &mut machine), INPUT_LEFT);

        // Left and right together: left wins.
        machine.set_key(5, 0, true);
        assert_eq!(inputroutine_keyboard(&state, &mut machine), INPUT_LEFT);

        // Add Q (row 2, bit 0) for up-left, and Space to fire.
        machine.set_key(2, 0, true);
        assert_eq!(inputroutine_keyboard(&state, &mut machine), INPUT_UP_LEFT);
        machine.set_key(7, 0, true);
        assert_eq!(
            inputroutine_keyboard(&state, &mut machine),
            INPUT_UP_LEFT + INPUT_FIRE
        );
    }

    #[test]
    fn test_kempston_routine() {
        let mut machine = BufferMachine::new();
        machine.kempston = 0b0001_1001; // fire + up + right
        assert_eq!(
            inputroutine_kempston(&mut machine),
            INPUT_UP_RIGHT + INPUT_FIRE
        );
    }

    #[test]
    fn test_sinclair_routine() {
        let mut machine = BufferMachine::new();
        // 6 = left (bit 4 of the 09876 row), 9 = up (bit 1).
        machine.set_key(4, 4, true);
        machine.set_key(4, 1, true);
        assert_eq!(inputroutine_sinclair(&mut machine), INPUT_UP_LEFT);
    }

    #[test]
    fn test_break_key_chord() {
        let mut machine = BufferMachine::new();
        assert!(!break_key_pressed(&mut machine));
        machine.set_key(0, 0, true);
        assert!(!break_key_pressed(&mut machine));
        machine.set_key(7, 0, true);
        assert!(break_key_pressed(&mut machine));
    }

    #[test]
    fn test_player_input_wakes_hero_from_bed() {
        let mut state = State::new().unwrap();
        crate::game_loop::reset_game_state(&mut state);
        let mut machine = BufferMachine::new();
        assert!(state.hero_in_bed);

        machine.kempston = 0b0000_0001; // right
        state.chosen_input_device = InputDevice::Kempston;
        process_player_input(&mut state, &mut machine).unwrap();

        assert!(!state.hero_in_bed);
        assert_eq!(state.automatic_player_counter, 31);
        assert_eq!(
            crate::rooms::get_roomdef(&state, ROOM_2_HUT2LEFT, ROOMDEF_2_BED),
            OBJ_EMPTY_BED_FACING_SE
        );
    }
}
