//! Fixtures shared by unit tests.

use homie_data::WorldDef;

use crate::session::Session;
use crate::world::HomieWorld;

pub fn test_world_def() -> WorldDef {
    ron::from_str(include_str!("../data/world.ron")).expect("bundled world.ron should parse")
}

pub fn test_world() -> HomieWorld {
    HomieWorld::from_def(&test_world_def()).expect("bundled world should build")
}

pub fn test_session() -> Session {
    Session::new(test_world())
}
