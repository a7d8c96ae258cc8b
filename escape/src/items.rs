/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Items: the sixteen item records, the two-slot inventory, and the
//! fire-button actions.

use spectrum::Machine;

use crate::constants::*;
use crate::data::item_sprites::ITEM_SPRITES;
use crate::data::items::ITEM_DEFAULTS;
use crate::data::roomdefs::*;
use crate::doors;
use crate::driver;
use crate::messages::{self, queue_message};
use crate::render::{INTERIOR_ORIGIN_X, INTERIOR_ORIGIN_Y};
use crate::rooms::set_roomdef;
use crate::sound;
use crate::state::State;
use crate::types::*;

// Escape evaluation bits.
pub const ESCAPEITEM_COMPASS: u8 = 1 << 0;
pub const ESCAPEITEM_PAPERS: u8 = 1 << 1;
pub const ESCAPEITEM_PURSE: u8 = 1 << 2;
pub const ESCAPEITEM_UNIFORM: u8 = 1 << 3;

/// Escape-evaluation bit for an item, if it has one.
pub fn escapeitem_for(item: u8) -> u8 {
    match item {
        ITEM_COMPASS => ESCAPEITEM_COMPASS,
        ITEM_PAPERS => ESCAPEITEM_PAPERS,
        ITEM_PURSE => ESCAPEITEM_PURSE,
        ITEM_UNIFORM => ESCAPEITEM_UNIFORM,
        _ => 0,
    }
}

/// Scaled iso position for an item at `pos` in `room`.
pub fn item_iso(room: u8, pos: &MapPos8) -> Pos8 {
    if room == ROOM_0_OUTDOORS {
        project8(pos)
    } else {
        let projected = project(&pos.widen());
        Pos8 {
            x: (projected.x.wrapping_sub(INTERIOR_ORIGIN_X) / 8) as u8,
            y: (projected.y.wrapping_sub(INTERIOR_ORIGIN_Y) / 8) as u8,
        }
    }
}

/// Reset one item record to its default row.
pub fn reset_item(state: &mut State, item: u8) {
    let (room, pos) = ITEM_DEFAULTS[item as usize];
    let record = &mut state.item_structs[item as usize];
    record.item_and_flags = item;
    record.room_and_flags = room & ITEMSTRUCT_ROOM_MASK;
    record.pos = pos;
    record.iso_pos = item_iso(room, &pos);
}

/// Reset the whole item table.
pub fn reset_items(state: &mut State) {
    for item in 0..ITEM_LIMIT {
        reset_item(state, item);
    }
}

/// An item has been found where it shouldn't be: back to its default
/// spot, out of the hero's hands, and the alarm goes up.
pub fn item_discovered(state: &mut State, item: u8) {
    debug_assert!(item < ITEM_LIMIT);
    for slot in state.items_held.iter_mut() {
        if *slot == item {
            *slot = ITEM_NONE;
        }
    }
    reset_item(state, item);
    state.bell = BELL_RING_40_TIMES;
    state.decrease_morale(5);
    queue_message(state, messages::MESSAGE_ITEM_DISCOVERED);
    log::debug!("item {item} discovered");
}

/// Sweep the item table, marking those close enough to the viewport to
/// matter to rendering and behaviour.
pub fn mark_nearby_items(state: &mut State) {
    for index in 0..ITEM_STRUCTS_LENGTH {
        let item = &state.item_structs[index];
        let room = item.room();
        let nearby = if room != state.room_index || room == ITEMSTRUCT_ROOM_NONE {
            false
        } else if room == ROOM_0_OUTDOORS {
            let x = i16::from(item.iso_pos.x);
            let y = i16::from(item.iso_pos.y);
            let left = i16::from(state.map_position.x) - 1;
            let top = i16::from(state.map_position.y) - 1;
            x >= left
                && x < left + COLUMNS as i16 + 2
                && y >= top
                && y < top + ROWS as i16 + 2
        } else {
            true
        };

        let flags = if nearby {
            ItemRoomFlags::NEARBY_6 | ItemRoomFlags::NEARBY_7
        } else {
            ItemRoomFlags::empty()
        };
        let room = state.item_structs[index].room();
        state.item_structs[index].set_room_and_flags(room, flags);
    }
}

/// Item within grabbing range of the hero, if any. Pick-up range is one
/// unit outdoors and six indoors.
fn find_nearby_item(state: &State) -> Option<usize> {
    let outdoors = state.room_index == ROOM_0_OUTDOORS;
    let hero_pos = if outdoors {
        state.hero().mi.pos.scale_down()
    } else {
        state.hero().mi.pos.narrow()
    };
    let range = if outdoors { 1 } else { 6 };

    (0..ITEM_STRUCTS_LENGTH).find(|&index| {
        let item = &state.item_structs[index];
        item.room_flags().contains(ItemRoomFlags::NEARBY_7)
            && item.room() == state.room_index
            && (i16::from(item.pos.u) - i16::from(hero_pos.u)).abs() < range
            && (i16::from(item.pos.v) - i16::from(hero_pos.v)).abs() < range
    })
}

/// Fire pressed with an empty hand: try to pick something up.
pub fn pick_up_item(state: &mut State, machine: &mut dyn Machine) {
    let Some(slot) = state.items_held.iter().position(|&i| i == ITEM_NONE) else {
        return;
    };
    let Some(index) = find_nearby_item(state) else {
        return;
    };

    let item = state.item_structs[index].item() & ITEMSTRUCT_ITEM_MASK;
    let first_pickup = !state.item_structs[index]
        .item_flags()
        .contains(ItemFlags::HELD);

    state.items_held[slot] = item;
    {
        let record = &mut state.item_structs[index];
        let flags = record.item_flags() | ItemFlags::HELD;
        record.set_item_flags(flags);
        record.set_room_and_flags(ITEMSTRUCT_ROOM_NONE, ItemRoomFlags::empty());
    }

    if first_pickup {
        state.increase_morale(5);
        state.add_score(5);
    }
    sound::play_speaker(machine, SOUND_PICK_UP_ITEM);
    draw_inventory(state, machine);
}

/// Drop the first held item where the hero stands.
pub fn drop_item(state: &mut State, machine: &mut dyn Machine) {
    let item = state.items_held[0];
    if item == ITEM_NONE {
        return;
    }

    // Shuffle the second slot forward.
    state.items_held[0] = state.items_held[1];
    state.items_held[1] = ITEM_NONE;

    let room = state.room_index;
    let pos = if room == ROOM_0_OUTDOORS {
        state.hero().mi.pos.scale_down()
    } else {
        state.hero().mi.pos.narrow()
    };

    let record = &mut state.item_structs[item as usize];
    record.pos = pos;
    record.set_room_and_flags(room, ItemRoomFlags::empty());
    record.iso_pos = item_iso(room, &pos);

    sound::play_speaker(machine, SOUND_DROP_ITEM);
    draw_inventory(state, machine);
}

/// Paint the inventory slots below the game window.
pub fn draw_inventory(state: &State, machine: &mut dyn Machine) {
    let screen = machine.screen();
    for (slot, &item) in state.items_held.iter().enumerate() {
        let base_col = 2 + slot * 3;
        let base = spectrum::Screen::pixel_offset(base_col * 8, 168);
        for row in 0..16usize {
            for col in 0..2usize {
                let byte = if item == ITEM_NONE {
                    0
                } else {
                    ITEM_SPRITES[item as usize].bitmap[row * 2 + col]
                };
                let offset = base + ((row & 7) << 8) + ((row >> 3) << 5) + col;
                screen.pixels[offset] = byte;
            }
        }
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Fire pressed while holding an item: use it.
pub fn use_item(state: &mut State, machine: &mut dyn Machine) -> Flow {
    let item = state.items_held[0];
    match item {
        ITEM_WIRESNIPS => action_wiresnips(state),
        ITEM_LOCKPICK => action_lockpick(state),
        ITEM_RED_KEY => action_key(state, ITEM_RED_KEY),
        ITEM_YELLOW_KEY => action_key(state, ITEM_YELLOW_KEY),
        ITEM_GREEN_KEY => action_key(state, ITEM_GREEN_KEY),
        ITEM_BRIBE => action_bribe(state),
        ITEM_POISON => action_poison(state),
        ITEM_PAPERS => return action_papers(state),
        ITEM_SHOVEL => action_shovel(state),
        ITEM_RED_CROSS_PARCEL => action_red_cross_parcel(state, machine),
        ITEM_NONE => pick_up_item(state, machine),
        _ => {}
    }
    Ok(())
}

/// Ticks a lock takes to pick.
const LOCK_PICKING_TICKS: u8 = 48;

/// Ticks the wire takes to cut.
const WIRE_CUTTING_TICKS: u8 = 96;

fn action_lockpick(state: &mut State) {
    let Some(slot) = doors::get_nearest_door(state) else {
        return;
    };
    if state.locked_doors[slot] & DOOR_LOCKED == 0 {
        queue_message(state, messages::MESSAGE_IT_IS_OPEN);
        return;
    }
    state.vischars[HERO_VISCHAR].flags.picking_lock = true;
    state.action_counter = LOCK_PICKING_TICKS;
    state.action_door_slot = slot as u8;
    queue_message(state, messages::MESSAGE_PICKING_THE_LOCK);
}

fn action_wiresnips(state: &mut State) {
    // Only useful pressed up against a fence.
    if state.room_index != ROOM_0_OUTDOORS {
        return;
    }
    let pos = state.hero().mi.pos.scale_down();
    let near_fence = crate::data::walls::WALLS[crate::data::walls::FIRST_FENCE..]
        .iter()
        .any(|fence| {
            pos.u + 1 >= fence.minx
                && pos.u <= fence.maxx + 1
                && pos.v + 1 >= fence.miny
                && pos.v <= fence.maxy + 1
        });
    if !near_fence {
        return;
    }
    state.vischars[HERO_VISCHAR].flags.cutting_wire = true;
    state.vischars[HERO_VISCHAR].crawl = true;
    state.action_counter = WIRE_CUTTING_TICKS;
    queue_message(state, messages::MESSAGE_CUTTING_THE_WIRE);
}

/// The locked-door slots that a key opens, and which key.
static KEYED_DOOR_SLOTS: [(usize, u8); 3] = [
    (5, ITEM_RED_KEY),
    (6, ITEM_YELLOW_KEY),
    (7, ITEM_GREEN_KEY),
];

fn action_key(state: &mut State, key: u8) {
    let Some(slot) = doors::get_nearest_door(state) else {
        return;
    };
    if state.locked_doors[slot] & DOOR_LOCKED == 0 {
        queue_message(state, messages::MESSAGE_IT_IS_OPEN);
        return;
    }
    let fits = KEYED_DOOR_SLOTS
        .iter()
        .any(|&(keyed_slot, keyed_key)| keyed_slot == slot && keyed_key == key);
    if !fits {
        queue_message(state, messages::MESSAGE_INCORRECT_KEY);
        return;
    }
    state.locked_doors[slot] &= !DOOR_LOCKED;
    queue_message(state, messages::MESSAGE_IT_IS_OPEN);
}

fn action_bribe(state: &mut State) {
    // The bribe goes to the first visible prisoner; every hostile who
    // can see it will head for him.
    let Some(slot) = (1..VISCHARS_LENGTH).find(|&i| {
        !state.vischars[i].is_empty()
            && (CHARACTER_20_PRISONER_1..=CHARACTER_25_PRISONER_6)
                .contains(&state.vischars[i].character)
    }) else {
        return;
    };
    state.bribed_character = state.vischars[slot].character;
    driver::hostiles_saw_bribe(state);
}

fn action_poison(state: &mut State) {
    if !state.items_held.contains(&ITEM_FOOD) {
        return;
    }
    let record = &mut state.item_structs[ITEM_FOOD as usize];
    let flags = record.item_flags() | ItemFlags::POISONED;
    record.set_item_flags(flags);
}

/// Show the guards forged papers at the main gate. In uniform they pass
/// muster and the hero is escorted through.
fn action_papers(state: &mut State) -> Flow {
    if state.room_index != ROOM_0_OUTDOORS {
        return Ok(());
    }
    let pos = state.hero().mi.pos.scale_down();
    let at_gate = (MAP_MAIN_GATE_U.0..=MAP_MAIN_GATE_U.1).contains(&pos.u)
        && (MAP_MAIN_GATE_V.0..=MAP_MAIN_GATE_V.1).contains(&pos.v);
    if !at_gate || !state.items_held.contains(&ITEM_UNIFORM) {
        return Ok(());
    }

    // Through the gate and outside the camp.
    state.increase_morale(10);
    state.add_score(50);
    let hero = state.hero_mut();
    hero.room = ROOM_0_OUTDOORS;
    hero.mi.pos = MapPos8::new(107, 56, 6).scale_up();
    Err(Interrupt::Outdoors)
}

fn action_shovel(state: &mut State) {
    // Dig out the collapsed tunnel.
    if state.room_index != ROOM_50_BLOCKED_TUNNEL {
        return;
    }
    set_roomdef(
        state,
        ROOM_50_BLOCKED_TUNNEL,
        ROOMDEF_50_BLOCKAGE,
        OBJ_STRAIGHT_TUNNEL_SW_NE,
    );
    // The boundary byte collapses with it, opening the passage.
    set_roomdef(state, ROOM_50_BLOCKED_TUNNEL, ROOMDEF_50_BOUNDARY, 0);
}

fn action_red_cross_parcel(state: &mut State, machine: &mut dyn Machine) {
    // The parcel opens to reveal its contents.
    queue_message(state, messages::MESSAGE_YOU_OPEN_THE_BOX);
    for slot in state.items_held.iter_mut() {
        if *slot == ITEM_RED_CROSS_PARCEL {
            *slot = ITEM_FOOD;
        }
    }
    let record = &mut state.item_structs[ITEM_FOOD as usize];
    let flags = record.item_flags() | ItemFlags::HELD;
    record.set_item_flags(flags);
    record.set_room_and_flags(ITEMSTRUCT_ROOM_NONE, ItemRoomFlags::empty());
    let parcel = &mut state.item_structs[ITEM_RED_CROSS_PARCEL as usize];
    parcel.set_room_and_flags(ITEMSTRUCT_ROOM_NONE, ItemRoomFlags::empty());
    draw_inventory(state, machine);
}

/// Count down an in-progress lock pick or wire cut.
pub fn tick_action(state: &mut State) {
    if state.action_counter == 0 {
        return;
    }
    state.action_counter -= 1;
    if state.action_counter != 0 {
        return;
    }
    let hero = &mut state.vischars[HERO_VISCHAR];
    if hero.flags.picking_lock {
        hero.flags.picking_lock = false;
        let slot = state.action_door_slot as usize;
        state.locked_doors[slot] &= !DOOR_LOCKED;
        queue_message(state, messages::MESSAGE_IT_IS_OPEN);
    } else if hero.flags.cutting_wire {
        hero.flags.cutting_wire = false;
        // Stay crawling until clear of the wire.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum::BufferMachine;

    fn item_state() -> (Box<State>, BufferMachine) {
        let mut state = State::new().unwrap();
        crate::game_loop::reset_game_state(&mut state);
        (state, BufferMachine::new())
    }

    #[test]
    fn test_pick_up_and_drop_round_trip() {
        let (mut state, mut machine) = item_state();
        state.room_index = ROOM_19_FOOD;
        state.vischars[HERO_VISCHAR].room = ROOM_19_FOOD;
        state.vischars[HERO_VISCHAR].mi.pos =
            state.item_structs[ITEM_FOOD as usize].pos.widen();
        mark_nearby_items(&mut state);

        pick_up_item(&mut state, &mut machine);
        assert_eq!(state.items_held[0], ITEM_FOOD);
        assert_eq!(state.item_structs[ITEM_FOOD as usize].room(), ITEMSTRUCT_ROOM_NONE);
        assert!(state.item_structs[ITEM_FOOD as usize]
            .item_flags()
            .contains(ItemFlags::HELD));

        drop_item(&mut state, &mut machine);
        assert_eq!(state.items_held[0], ITEM_NONE);
        assert_eq!(state.item_structs[ITEM_FOOD as usize].room(), ROOM_19_FOOD);
    }

    #[test]
    fn test_first_pickup_scores() {
        let (mut state, mut machine) = item_state();
        state.room_index = ROOM_19_FOOD;
        state.vischars[HERO_VISCHAR].room = ROOM_19_FOOD;
        state.vischars[HERO_VISCHAR].mi.pos =
            state.item_structs[ITEM_FOOD as usize].pos.widen();
        mark_nearby_items(&mut state);

        let morale = state.morale;
        pick_up_item(&mut state, &mut machine);
        assert_eq!(state.morale, morale.min(MORALE_MAX));
        assert_eq!(state.score, [0, 0, 0, 0, 5]);

        // Re-dropping and re-taking scores nothing further.
        drop_item(&mut state, &mut machine);
        mark_nearby_items(&mut state);
        pick_up_item(&mut state, &mut machine);
        assert_eq!(state.score, [0, 0, 0, 0, 5]);
    }

    #[test]
    fn test_item_discovered_restores_defaults() {
        let (mut state, mut machine) = item_state();
        state.room_index = ROOM_19_FOOD;
        state.vischars[HERO_VISCHAR].room = ROOM_19_FOOD;
        state.vischars[HERO_VISCHAR].mi.pos =
            state.item_structs[ITEM_FOOD as usize].pos.widen();
        mark_nearby_items(&mut state);
        pick_up_item(&mut state, &mut machine);

        item_discovered(&mut state, ITEM_FOOD);

        let mut expected = State::new().unwrap();
        reset_item(&mut expected, ITEM_FOOD);
        assert_eq!(
            state.item_structs[ITEM_FOOD as usize],
            expected.item_structs[ITEM_FOOD as usize]
        );
        assert!(!state.items_held.contains(&ITEM_FOOD));
        assert_eq!(state.bell, BELL_RING_40_TIMES);
    }

    #[test]
    fn test_incorrect_key() {
        let (mut state, _machine) = item_state();
        // Stand by the red key room's door, inside the corridor.
        let door = doors::get_door(30);
        state.room_index = door.room();
        state.vischars[HERO_VISCHAR].room = door.room();
        state.vischars[HERO_VISCHAR].mi.pos = door.pos.widen();

        action_key(&mut state, ITEM_YELLOW_KEY);
        assert!(state.locked_doors[5] & DOOR_LOCKED != 0);

        action_key(&mut state, ITEM_RED_KEY);
        assert!(state.locked_doors[5] & DOOR_LOCKED == 0);
    }

    #[test]
    fn test_action_papers_at_gate() {
        let (mut state, _machine) = item_state();
        state.room_index = ROOM_0_OUTDOORS;
        state.vischars[HERO_VISCHAR].room = ROOM_0_OUTDOORS;
        state.vischars[HERO_VISCHAR].mi.pos = MapPos16::new(214 * 4, 138 * 4, 24);
        state.items_held = [ITEM_PAPERS, ITEM_UNIFORM];

        let morale = state.morale;
        let result = action_papers(&mut state);
        assert_eq!(result, Err(Interrupt::Outdoors));
        assert_eq!(state.vischars[HERO_VISCHAR].room, ROOM_0_OUTDOORS);
        assert_eq!(state.morale, (morale + 10).min(MORALE_MAX));
        assert_eq!(state.score, [0, 0, 0, 5, 0]);
        // Teleported to the far side of the gate.
        assert_eq!(
            state.vischars[HERO_VISCHAR].mi.pos,
            MapPos8::new(107, 56, 6).scale_up()
        );
    }

    #[test]
    fn test_poisoning_the_food() {
        let (mut state, _machine) = item_state();
        state.items_held = [ITEM_POISON, ITEM_FOOD];
        action_poison(&mut state);
        assert!(state.item_structs[ITEM_FOOD as usize]
            .item_flags()
            .contains(ItemFlags::POISONED));
    }
}
