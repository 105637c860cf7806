//! Round-consuming actions and the events they produce.

use crate::check::CheckOutcome;
use crate::combatant::Hit;

/// An action that consumes the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    /// Strike the enemy.
    Attack,
    /// Try to escape the encounter.
    Flee,
}

impl std::fmt::Display for CombatAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "Attack"),
            Self::Flee => write!(f, "Try to flee"),
        }
    }
}

/// A recorded step of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// The player attacked; `hit` is `None` on a miss.
    PlayerAttack {
        /// The to-hit check.
        check: CheckOutcome,
        /// Damage dealt, if the attack landed.
        hit: Option<Hit>,
    },
    /// The player tried to flee.
    FleeAttempt {
        /// The escape check.
        check: CheckOutcome,
    },
    /// The enemy attacked; `hit` is `None` on a miss.
    EnemyAttack {
        /// Name of the attacking enemy.
        attacker: String,
        /// The to-hit check.
        check: CheckOutcome,
        /// Damage dealt, if the attack landed.
        hit: Option<Hit>,
    },
}

impl CombatEvent {
    /// The check rolled for this event.
    pub fn check(&self) -> &CheckOutcome {
        match self {
            Self::PlayerAttack { check, .. }
            | Self::FleeAttempt { check }
            | Self::EnemyAttack { check, .. } => check,
        }
    }
}

impl std::fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerAttack { check, hit } => match hit {
                Some(hit) => write!(f, "player attack ({check}): {hit}"),
                None => write!(f, "player attack ({check}): miss"),
            },
            Self::FleeAttempt { check } => {
                let verdict = if check.succeeded() {
                    "escaped"
                } else {
                    "caught"
                };
                write!(f, "flee attempt ({check}): {verdict}")
            }
            Self::EnemyAttack {
                attacker,
                check,
                hit,
            } => match hit {
                Some(hit) => write!(f, "{attacker} attack ({check}): {hit}"),
                None => write!(f, "{attacker} attack ({check}): miss"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Die;
    use crate::track::Health;

    #[test]
    fn action_display() {
        assert_eq!(CombatAction::Attack.to_string(), "Attack");
        assert_eq!(CombatAction::Flee.to_string(), "Try to flee");
    }

    #[test]
    fn event_display() {
        let miss = CombatEvent::PlayerAttack {
            check: CheckOutcome::new(Die::D20, 4, 5),
            hit: None,
        };
        assert_eq!(
            miss.to_string(),
            "player attack (D20 rolled 4 vs 5 (failure)): miss"
        );

        let bite = CombatEvent::EnemyAttack {
            attacker: "Kraan".to_string(),
            check: CheckOutcome::new(Die::D20, 9, 8),
            hit: Some(Hit {
                target: "Hero".to_string(),
                damage: 5,
                health: Health::with_current(25, 30),
            }),
        };
        assert_eq!(
            bite.to_string(),
            "Kraan attack (D20 rolled 9 vs 8 (success)): Hero takes 5 damage! HP: 25/30"
        );

        let flee = CombatEvent::FleeAttempt {
            check: CheckOutcome::new(Die::D20, 12, 12),
        };
        assert!(flee.to_string().ends_with("escaped"));
        assert_eq!(flee.check().roll, 12);
    }
}
