/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Data types module - the game's records and their packed-byte accessors.
//!
//! The original kept characters, animations and sprites linked by pointer;
//! here every cross-reference is an index into a fixed table so that the
//! whole game state is a plain value.

use bitflags::bitflags;

use crate::constants::*;

// =============================================================================
// Positions
// =============================================================================

/// A map position held to sub-unit precision (live actors).
///
/// The map space is left handed: u grows north-east, v grows south-east,
/// w is height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPos16 {
    pub u: i16,
    pub v: i16,
    pub w: i16,
}

/// A map position in 8 bits (static and serialised positions).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPos8 {
    pub u: u8,
    pub v: u8,
    pub w: u8,
}

/// An X,Y pair in 8 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos8 {
    pub x: u8,
    pub y: u8,
}

/// An X,Y pair in 16 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos16 {
    pub x: u16,
    pub y: u16,
}

impl MapPos8 {
    pub const fn new(u: u8, v: u8, w: u8) -> Self {
        Self { u, v, w }
    }

    /// Widen to 16 bits, scaling up for the outdoor coordinate space.
    pub fn scale_up(&self) -> MapPos16 {
        MapPos16 {
            u: i16::from(self.u) * 8,
            v: i16::from(self.v) * 8,
            w: i16::from(self.w) * 8,
        }
    }

    /// Widen to 16 bits without scaling (interiors).
    pub fn widen(&self) -> MapPos16 {
        MapPos16 {
            u: i16::from(self.u),
            v: i16::from(self.v),
            w: i16::from(self.w),
        }
    }
}

impl MapPos16 {
    pub const fn new(u: i16, v: i16, w: i16) -> Self {
        Self { u, v, w }
    }

    /// Narrow to 8 bits, scaling down from the outdoor coordinate space.
    pub fn scale_down(&self) -> MapPos8 {
        MapPos8 {
            u: (self.u / 8) as u8,
            v: (self.v / 8) as u8,
            w: (self.w / 8) as u8,
        }
    }

    /// Narrow to 8 bits without scaling (interiors).
    pub fn narrow(&self) -> MapPos8 {
        MapPos8 {
            u: self.u as u8,
            v: self.v as u8,
            w: self.w as u8,
        }
    }
}

/// Isometric projection of a full-scale map position.
pub fn project(pos: &MapPos16) -> Pos16 {
    let u = i32::from(pos.u);
    let v = i32::from(pos.v);
    let w = i32::from(pos.w);
    Pos16 {
        x: ((0x200 - u + v) * 2) as u16,
        y: (0x800 - u - v - w) as u16,
    }
}

/// Isometric projection of a scaled-down (divided by 8) map position.
/// The constants shrink in proportion.
pub fn project8(pos: &MapPos8) -> Pos8 {
    let u = i16::from(pos.u);
    let v = i16::from(pos.v);
    let w = i16::from(pos.w);
    Pos8 {
        x: ((0x40 - u + v) * 2) as u8,
        y: (0x100 - u - v - w) as u8,
    }
}

// =============================================================================
// Directions and input
// =============================================================================

/// Character facing direction. Indexes the animation selection table
/// together with the crawl flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    #[default]
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Direction {
    pub fn from_u8(value: u8) -> Self {
        match value & 0x03 {
            0 => Direction::TopLeft,
            1 => Direction::TopRight,
            2 => Direction::BottomRight,
            _ => Direction::BottomLeft,
        }
    }

    /// One step anticlockwise, used when two actors meet head on.
    pub fn anticlockwise(self) -> Self {
        Direction::from_u8((self as u8).wrapping_sub(1))
    }

    pub fn opposite(self) -> Self {
        Direction::from_u8(self as u8 ^ 2)
    }
}

// Input values are additive codes, not a bitmask: left/right combine with
// up/down and fire by addition, exactly as the original's input routines
// produced them.
pub const INPUT_NONE: u8 = 0;
pub const INPUT_UP: u8 = 1;
pub const INPUT_DOWN: u8 = 2;
pub const INPUT_LEFT: u8 = 3;
pub const INPUT_RIGHT: u8 = 6;
pub const INPUT_FIRE: u8 = 9;

pub const INPUT_UP_LEFT: u8 = INPUT_UP + INPUT_LEFT;
pub const INPUT_DOWN_RIGHT: u8 = INPUT_DOWN + INPUT_RIGHT;
pub const INPUT_DOWN_LEFT: u8 = INPUT_DOWN + INPUT_LEFT;
pub const INPUT_UP_RIGHT: u8 = INPUT_UP + INPUT_RIGHT;

/// Bit 7 of vischar.input forces an animation reselect.
pub const INPUT_KICK: u8 = 1 << 7;

/// Selectable input devices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputDevice {
    #[default]
    Keyboard,
    Kempston,
    Sinclair,
    Protek,
}

/// One keyboard key: port high byte and key mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyDef {
    pub port: u8,
    pub mask: u8,
}

/// The five configurable keys: left, right, up, down, fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyDefs {
    pub defs: [KeyDef; 5],
}

// =============================================================================
// Routes
// =============================================================================

/// Route index meaning "wander within the current location window".
pub const ROUTEINDEX_WANDER: u8 = 255;

/// Route index meaning "stand still".
pub const ROUTEINDEX_HALT: u8 = 0;

/// Bit 7 of a route index reverses the route.
pub const ROUTEINDEX_REVERSED: u8 = 1 << 7;

// Named routes referenced by game logic.
pub const ROUTEINDEX_3_COMMANDANT: u8 = 3;
pub const ROUTEINDEX_5_EXIT_HUT2: u8 = 5;
pub const ROUTEINDEX_6_EXIT_HUT3: u8 = 6;
pub const ROUTEINDEX_14_GO_TO_YARD: u8 = 14;
pub const ROUTEINDEX_16_BREAKFAST_25: u8 = 16;
pub const ROUTEINDEX_28_PRISONER_1_ROLL_CALL: u8 = 28;
pub const ROUTEINDEX_36_GO_TO_SOLITARY: u8 = 36;
pub const ROUTEINDEX_37_HERO_LEAVE_SOLITARY: u8 = 37;
pub const ROUTEINDEX_38_GUARD_12_BED: u8 = 38;
pub const ROUTEINDEX_42_HUT2_LEFT_TO_RIGHT: u8 = 42;
pub const ROUTEINDEX_43_BREAKFAST_REVERSE: u8 = 43;
pub const ROUTEINDEX_44_HUT2_RIGHT_TO_LEFT: u8 = 44;
pub const ROUTEINDEX_45_HERO_ROLL_CALL: u8 = 45;

/// A route assignment: which route and how far along it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Route {
    /// Route index, or [`ROUTEINDEX_WANDER`]. Bit 7 reverses the route.
    pub index: u8,
    /// Step within the route.
    pub step: u8,
}

impl Route {
    pub const fn new(index: u8, step: u8) -> Self {
        Self { index, step }
    }

    pub fn is_reversed(&self) -> bool {
        self.index != ROUTEINDEX_WANDER && self.index & ROUTEINDEX_REVERSED != 0
    }

    pub fn base_index(&self) -> u8 {
        if self.index == ROUTEINDEX_WANDER {
            self.index
        } else {
            self.index & !ROUTEINDEX_REVERSED
        }
    }
}

// =============================================================================
// Characters
// =============================================================================

/// The four sprite/animation classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterClass {
    Commandant,
    Guard,
    Dog,
    Prisoner,
}

/// Class of a character id. Movable items (26..28) are not classed.
pub fn character_class(character: u8) -> CharacterClass {
    debug_assert!(character < CHARACTER_26_STOVE_1);
    match character {
        CHARACTER_0_COMMANDANT => CharacterClass::Commandant,
        1..=15 => CharacterClass::Guard,
        16..=19 => CharacterClass::Dog,
        _ => CharacterClass::Prisoner,
    }
}

/// True for characters who will chase and arrest the hero.
pub fn is_hostile(character: u8) -> bool {
    character < CHARACTER_20_PRISONER_1
}

/// True for the guard dogs.
pub fn is_dog(character: u8) -> bool {
    (CHARACTER_16_GUARD_DOG_1..=CHARACTER_19_GUARD_DOG_4).contains(&character)
}

bitflags! {
    /// Flags packed alongside the character id in a character record.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct CharacterStructFlags: u8 {
        /// The character has spawned on screen as a vischar; the record
        /// is disabled while this is set.
        const ON_SCREEN = 1 << 6;
    }
}

/// A persistent character record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharacterStruct {
    pub character: u8,
    pub flags: CharacterStructFlags,
    pub room: u8,
    pub pos: MapPos8,
    pub route: Route,
}

impl CharacterStruct {
    pub const fn new(character: u8, room: u8, pos: MapPos8, route: Route) -> Self {
        Self {
            character,
            flags: CharacterStructFlags::empty(),
            room,
            pos,
            route,
        }
    }

    pub fn on_screen(&self) -> bool {
        self.flags.contains(CharacterStructFlags::ON_SCREEN)
    }
}

// =============================================================================
// Vischars
// =============================================================================

/// NPC pursuit mode. The original multiplexed these through the low
/// nibble of the vischar flags byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pursuit {
    /// Normal route following.
    #[default]
    None,
    /// Chase the hero with intent to capture (or collect a bribe).
    Pursue,
    /// Follow the hero and get in his way, without arresting him.
    Hassle,
    /// A dog heading for dropped food.
    DogFood,
    /// Chase the character who accepted a bribe.
    SawBribe,
}

/// Vischar flag bits. Pursuit lives beside these, not inside them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VischarFlags {
    pub pursuit: Pursuit,
    /// Hero only: mid lock-pick.
    pub picking_lock: bool,
    /// Hero only: mid wire-cut.
    pub cutting_wire: bool,
    /// The current route target is a door.
    pub target_is_door: bool,
    /// Set during animation to stop collision() for this vischar.
    pub no_collide: bool,
}

/// Behaviour delay counter and movement-control bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterAndFlags {
    /// Counts down to zero before behaviour runs. Only ever set to five.
    pub counter: u8,
    /// Try the v axis before the u axis.
    pub y_dominant: bool,
    /// Inhibit map movement this frame (hero only).
    pub dont_move_map: bool,
    /// Position and sprite fields are valid for plotting.
    pub drawable: bool,
}

/// Bit 7 of animindex plays the animation in reverse.
pub const ANIMINDEX_REVERSE: u8 = 1 << 7;

/// Bit 7 of a sprite index mirrors the sprite.
pub const SPRITE_FLAG_FLIP: u8 = 1 << 7;

/// Position, sprite set and sprite of one movable thing. A sub-struct of
/// vischar, and the whole of a pushable stove or crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovableItem {
    pub pos: MapPos16,
    /// First sprite definition of this actor's set.
    pub sprite: u8,
    /// Index into the set, plus [`SPRITE_FLAG_FLIP`].
    pub sprite_index: u8,
}

/// A visible (on-screen) character slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vischar {
    /// Character id, or [`CHARACTER_NONE`] for an empty slot.
    pub character: u8,
    pub flags: VischarFlags,
    pub route: Route,
    /// Current movement target. The w member is never used.
    pub target: MapPos8,
    pub counter_and_flags: CounterAndFlags,
    /// First animation of this character's set.
    pub animbase: u8,
    /// Current animation, an offset from animbase.
    pub anim: u8,
    /// Frame within the animation, plus [`ANIMINDEX_REVERSE`].
    pub animindex: u8,
    /// Last movement input fed to the animation chooser.
    pub input: u8,
    pub direction: Direction,
    pub crawl: bool,
    /// Movement state: live position, sprite set, sprite index.
    pub mi: MovableItem,
    /// Map-relative projected position of the top left, in 13.3 fixed
    /// point (same space as the map position multiplied by 8).
    pub iso_pos: Pos16,
    pub room: u8,
    /// Copies of the sprite definition's width in bytes and height.
    pub width_bytes: u8,
    pub height: u8,
}

impl Default for Vischar {
    fn default() -> Self {
        Self {
            character: CHARACTER_NONE,
            flags: VischarFlags::default(),
            route: Route::default(),
            target: MapPos8::default(),
            counter_and_flags: CounterAndFlags::default(),
            animbase: 0,
            anim: 0,
            animindex: 0,
            input: 0,
            direction: Direction::TopLeft,
            crawl: false,
            mi: MovableItem::default(),
            iso_pos: Pos16::default(),
            room: ROOM_NONE,
            width_bytes: 0,
            height: 0,
        }
    }
}

impl Vischar {
    pub fn is_empty(&self) -> bool {
        self.character == CHARACTER_NONE
    }

    /// Row into the animation selection table.
    pub fn animindices_row(&self) -> usize {
        (self.direction as usize) | ((self.crawl as usize) << 2)
    }
}

// =============================================================================
// Items
// =============================================================================

pub const ITEMSTRUCT_ITEM_MASK: u8 = 0x0F;

bitflags! {
    /// High-nibble flags of an item record's item byte.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ItemFlags: u8 {
        /// Masked into reads but never set anywhere.
        const UNKNOWN = 1 << 4;
        /// Food only: poisoned, stalling a dog for longer.
        const POISONED = 1 << 5;
        /// Picked up at least once (scoring).
        const HELD = 1 << 7;
    }
}

pub const ITEMSTRUCT_ROOM_MASK: u8 = 0x3F;

/// Room value meaning "nowhere" (held, or out of play).
pub const ITEMSTRUCT_ROOM_NONE: u8 = 0x3F;

bitflags! {
    /// High-bit flags of an item record's room byte.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ItemRoomFlags: u8 {
        /// Near the viewport; cleared when the item is picked to draw.
        const NEARBY_6 = 1 << 6;
        /// Near the viewport; drives behaviour (dog food, bribes).
        const NEARBY_7 = 1 << 7;
    }
}

/// An item record. Packed bytes are preserved from the original layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemStruct {
    /// Bits 0..3 item id, bits 4..7 [`ItemFlags`].
    pub item_and_flags: u8,
    /// Bits 0..5 room, bits 6..7 [`ItemRoomFlags`].
    pub room_and_flags: u8,
    pub pos: MapPos8,
    pub iso_pos: Pos8,
}

impl ItemStruct {
    pub fn item(&self) -> u8 {
        self.item_and_flags & (ITEMSTRUCT_ITEM_MASK | ItemFlags::UNKNOWN.bits())
    }

    pub fn item_flags(&self) -> ItemFlags {
        ItemFlags::from_bits_truncate(self.item_and_flags)
    }

    pub fn set_item_flags(&mut self, flags: ItemFlags) {
        self.item_and_flags = (self.item_and_flags & ITEMSTRUCT_ITEM_MASK) | flags.bits();
    }

    pub fn room(&self) -> u8 {
        self.room_and_flags & ITEMSTRUCT_ROOM_MASK
    }

    pub fn room_flags(&self) -> ItemRoomFlags {
        ItemRoomFlags::from_bits_truncate(self.room_and_flags)
    }

    pub fn set_room_and_flags(&mut self, room: u8, flags: ItemRoomFlags) {
        self.room_and_flags = (room & ITEMSTRUCT_ROOM_MASK) | flags.bits();
    }
}

// =============================================================================
// Doors
// =============================================================================

/// Bit 7 of a door index reverses the transition.
pub const DOOR_REVERSE: u8 = 1 << 7;

/// Bit 7 of a locked-door entry marks it locked.
pub const DOOR_LOCKED: u8 = 1 << 7;

/// An empty interior door slot.
pub const INTERIORDOOR_NONE: u8 = 0xFF;

/// One side of a doorway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Door {
    /// Top six bits are the destination room, bottom two the direction
    /// a character passes through in.
    pub room_and_direction: u8,
    pub pos: MapPos8,
}

impl Door {
    pub const fn new(room: u8, direction: Direction, pos: MapPos8) -> Self {
        Self {
            room_and_direction: (room << 2) | direction as u8,
            pos,
        }
    }

    pub fn room(&self) -> u8 {
        self.room_and_direction >> 2
    }

    pub fn direction(&self) -> Direction {
        Direction::from_u8(self.room_and_direction)
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// A wall or fence the bounds check tests against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wall {
    pub minx: u8,
    pub maxx: u8,
    pub miny: u8,
    pub maxy: u8,
    pub minheight: u8,
    pub maxheight: u8,
}

/// A projected-space rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x0: u8,
    pub x1: u8,
    pub y0: u8,
    pub y1: u8,
}

impl Bounds {
    pub const fn new(x0: u8, x1: u8, y0: u8, y1: u8) -> Self {
        Self { x0, x1, y0, y1 }
    }
}

/// A scenery occlusion mask reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mask {
    /// Index into the mask shape table.
    pub index: u8,
    /// Isometric projected bounds, for culling.
    pub bounds: Bounds,
    /// A character behind this point is hidden by the mask ("behind"
    /// means u greater and v greater-or-equal).
    pub pos: MapPos8,
}

// =============================================================================
// Animation
// =============================================================================

/// One animation frame: a movement delta and a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimFrame {
    pub du: i8,
    pub dv: i8,
    pub dw: i8,
    /// Sprite index relative to the vischar's sprite set, plus
    /// [`SPRITE_FLAG_FLIP`].
    pub sprite: u8,
}

/// Value of [`Anim::map_direction`] meaning "don't scroll the map".
pub const ANIM_NO_MAP_DIRECTION: u8 = 255;

/// An animation. `from`/`to` only differ while turning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anim {
    pub nframes: u8,
    /// Direction faced when playing reversed.
    pub from: Direction,
    /// Direction faced when playing forwards.
    pub to: Direction,
    /// Direction to scroll the map, or [`ANIM_NO_MAP_DIRECTION`].
    pub map_direction: u8,
    pub frames: &'static [AnimFrame],
}

// =============================================================================
// Sprites
// =============================================================================

/// A sprite definition: geometry plus bitmap and mask data.
#[derive(Clone, Copy, Debug)]
pub struct SpriteDef {
    /// Width in destination bytes: source bytes per row + 1 for shift
    /// spill.
    pub width_bytes: u8,
    /// Height in rows.
    pub height: u8,
    pub bitmap: &'static [u8],
    pub mask: &'static [u8],
}

// =============================================================================
// Searchlight
// =============================================================================

/// One searchlight, walking a script of (counter, direction) pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchlightMovement {
    pub xy: Pos8,
    pub counter: u8,
    pub direction: Direction,
    /// Script step, plus direction-of-travel in the top bit.
    pub index: u8,
    /// Which movement script this light walks.
    pub script: u8,
}

// =============================================================================
// Control flow
// =============================================================================

/// The three control transfers that abandon the current tick and restart
/// the main loop, plus host-requested quit. The original longjmp'd; here
/// the value is returned up the call chain instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    /// A transition into a different interior room.
    NewRoom,
    /// A transition from indoors to the exterior map.
    Outdoors,
    /// A new game was requested.
    Reset,
    /// The host wants the core to stop as soon as possible.
    Quit,
}

/// Result of any operation that can abandon the tick.
pub type Flow = Result<(), Interrupt>;

// =============================================================================
// Room definition patches
// =============================================================================

/// A runtime override of one room definition byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoomDefPatch {
    pub room: u8,
    pub offset: u8,
    pub value: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_round_trip() {
        // Any position in the outdoor playable range survives the trip.
        for u in [0u8, 1, 47, 104, 217, 255] {
            for v in [0u8, 3, 96, 255] {
                let pos = MapPos8::new(u, v, 2);
                assert_eq!(pos.scale_up().scale_down(), pos);
            }
        }
    }

    #[test]
    fn test_direction_turns() {
        assert_eq!(Direction::TopLeft.anticlockwise(), Direction::BottomLeft);
        assert_eq!(Direction::BottomLeft.anticlockwise(), Direction::BottomRight);
        assert_eq!(Direction::TopLeft.opposite(), Direction::BottomRight);
        assert_eq!(Direction::TopRight.opposite(), Direction::BottomLeft);
    }

    #[test]
    fn test_route_reverse_bit() {
        let route = Route::new(3 | ROUTEINDEX_REVERSED, 7);
        assert!(route.is_reversed());
        assert_eq!(route.base_index(), 3);

        // Wander has no reverse bit: the whole byte is the sentinel.
        let wander = Route::new(ROUTEINDEX_WANDER, 8);
        assert!(!wander.is_reversed());
        assert_eq!(wander.base_index(), ROUTEINDEX_WANDER);
    }

    #[test]
    fn test_item_packed_fields() {
        let mut item = ItemStruct {
            item_and_flags: ITEM_FOOD,
            room_and_flags: ROOM_0_OUTDOORS,
            pos: MapPos8::default(),
            iso_pos: Pos8::default(),
        };

        item.set_item_flags(ItemFlags::POISONED | ItemFlags::HELD);
        assert_eq!(item.item() & ITEMSTRUCT_ITEM_MASK, ITEM_FOOD);
        assert!(item.item_flags().contains(ItemFlags::POISONED));

        item.set_room_and_flags(ROOM_2_HUT2LEFT, ItemRoomFlags::NEARBY_7);
        assert_eq!(item.room(), ROOM_2_HUT2LEFT);
        assert!(item.room_flags().contains(ItemRoomFlags::NEARBY_7));
        assert!(!item.room_flags().contains(ItemRoomFlags::NEARBY_6));
    }

    #[test]
    fn test_door_packing() {
        let door = Door::new(ROOM_2_HUT2LEFT, Direction::TopRight, MapPos8::new(1, 2, 3));
        assert_eq!(door.room(), ROOM_2_HUT2LEFT);
        assert_eq!(door.direction(), Direction::TopRight);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(character_class(0), CharacterClass::Commandant);
        assert_eq!(character_class(9), CharacterClass::Guard);
        assert_eq!(character_class(17), CharacterClass::Dog);
        assert_eq!(character_class(25), CharacterClass::Prisoner);
        assert!(is_hostile(12));
        assert!(!is_hostile(20));
        assert!(is_dog(16));
        assert!(!is_dog(20));
    }
}
