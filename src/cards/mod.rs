//! Card system: definitions, the registry, the AI deck and live units.
//!
//! - `CardDefinition`: printed card data (name, attack, base health)
//! - `CardRegistry`: lookup of definitions by `CardId`
//! - `AiDeck`: ordered cards the AI spawns from
//! - `Unit`: a definition brought to life on the board

pub mod definition;
pub mod registry;
pub mod deck;
pub mod instance;

pub use definition::{CardDefinition, CardId};
pub use registry::CardRegistry;
pub use deck::AiDeck;
pub use instance::{Unit, UnitId};
