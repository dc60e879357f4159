use serde::{Deserialize, Serialize};
use std::fmt;

/// Visitable rooms of the house.
///
/// The two pseudo-locations (`Nowhere`, `Inventory`) are not rooms; see [`LocationRef`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomId {
    Entrance,
    Lobby,
    Reception,
    RoundRoom,
    DiningRoom,
    NorthWingEntrance,
    NorthWing,
    YourRoom,
    NorthWingBathroom,
    SouthWingEntrance,
    SouthWing,
    BasementLobby,
    LoudOffice,
    Scullery,
    HomiesKitchen,
}

impl RoomId {
    pub const ALL: [RoomId; 15] = [
        RoomId::Entrance,
        RoomId::Lobby,
        RoomId::Reception,
        RoomId::RoundRoom,
        RoomId::DiningRoom,
        RoomId::NorthWingEntrance,
        RoomId::NorthWing,
        RoomId::YourRoom,
        RoomId::NorthWingBathroom,
        RoomId::SouthWingEntrance,
        RoomId::SouthWing,
        RoomId::BasementLobby,
        RoomId::LoudOffice,
        RoomId::Scullery,
        RoomId::HomiesKitchen,
    ];

    /// Position of this id within [`RoomId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Every interactive noun in the house: items, fixtures and people.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThingId {
    Suitcase,
    James,
    CleanPlate,
    DirtyPlate,
    RinsedPlate,
    Computer,
    Checklist,
    EmptyDesk,
    YourDesk,
    BathroomSign,
    Mop,
    Hair,
    Puddle,
    Shower,
    TrashBin,
    Meatballs,
}

impl ThingId {
    pub const ALL: [ThingId; 16] = [
        ThingId::Suitcase,
        ThingId::James,
        ThingId::CleanPlate,
        ThingId::DirtyPlate,
        ThingId::RinsedPlate,
        ThingId::Computer,
        ThingId::Checklist,
        ThingId::EmptyDesk,
        ThingId::YourDesk,
        ThingId::BathroomSign,
        ThingId::Mop,
        ThingId::Hair,
        ThingId::Puddle,
        ThingId::Shower,
        ThingId::TrashBin,
        ThingId::Meatballs,
    ];

    /// Position of this id within [`ThingId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Checklist entries the player has to finish before going to sleep.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GoalId {
    SuitcaseInRoom,
    ComputerInOffice,
    DinnerEaten,
    ShowerTaken,
}

impl GoalId {
    pub const ALL: [GoalId; 4] = [
        GoalId::SuitcaseInRoom,
        GoalId::ComputerInOffice,
        GoalId::DinnerEaten,
        GoalId::ShowerTaken,
    ];
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Compass and vertical directions an exit can point in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Down,
    Up,
}

impl Direction {
    /// Lowercase name as shown in exit listings.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::NorthEast => "northeast",
            Direction::East => "east",
            Direction::SouthEast => "southeast",
            Direction::South => "south",
            Direction::SouthWest => "southwest",
            Direction::West => "west",
            Direction::NorthWest => "northwest",
            Direction::Down => "down",
            Direction::Up => "up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub things: Vec<ThingDef>,
    #[serde(default)]
    pub goals: Vec<GoalDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub start_room: RoomId,
}

impl Default for GameDef {
    fn default() -> Self {
        Self {
            title: String::new(),
            intro: String::new(),
            start_room: RoomId::Entrance,
        }
    }
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: RoomId,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
}

/// A one-way passage out of a room. Reverse passages are declared separately, if at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: Direction,
    pub to: RoomId,
}

/// Thing definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThingDef {
    pub id: ThingId,
    /// Display name; each whitespace-separated word also becomes a vocabulary entry.
    pub name: String,
    pub desc: String,
    pub location: LocationRef,
}

/// Authoring-time reference to a thing's starting location.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationRef {
    Nowhere,
    Inventory,
    Room(RoomId),
}

/// Checklist goal definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDef {
    pub id: GoalId,
    pub description: String,
    pub finished_when: GoalConditionDef,
}

/// How a goal's completion flag is determined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GoalConditionDef {
    /// Derived every turn: complete while `thing` is at `location`.
    ThingAt { thing: ThingId, location: LocationRef },
    /// Latched by a narrative event; the rule engine never clears it.
    Scripted,
}
