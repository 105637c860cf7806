//! Game mechanics for Darkwood.
//!
//! Provides dice and the [`Roller`] seam every roll goes through, threshold
//! checks, the item catalog, player and enemy combatants, and a turn-based
//! combat state machine for a single player-versus-enemy encounter.

pub mod check;
pub mod combat;
pub mod combatant;
pub mod dice;
pub mod error;
pub mod item;
pub mod track;

pub use check::{CheckOutcome, roll_check};
pub use combat::{Combat, CombatAction, CombatEvent, CombatRules, CombatState, Round};
pub use combatant::{Combatant, Enemy, Hit, Player, Recovery};
pub use dice::{Die, RngRoller, Roller, ScriptedRoller};
pub use error::{MechError, MechResult};
pub use item::{Armor, ItemKind, Potion, Weapon};
pub use track::Health;
