//! Core card model: identity types, game state, capabilities and variants

pub mod abilities;
pub mod artifact;
pub mod card;
pub mod creature;
pub mod elite;
pub mod spell;
pub mod state;
pub mod tournament_card;
pub mod types;

pub use abilities::{
    AttackResult, Caster, CombatProfile, CombatStats, Combatant, DefenseResult, MagicStats,
    ManaChannel, RankInfo, Ranked, SpellCast, LOSS_PENALTY, WIN_BONUS,
};
pub use artifact::ArtifactCard;
pub use card::{Card, CardIdentity, CardInfo, CardKind, Playable, PlayResult, NOT_ENOUGH_MANA};
pub use creature::CreatureCard;
pub use elite::EliteCard;
pub use spell::{EffectType, SpellCard, SpellResolution, DEFAULT_SPELL_TARGETS};
pub use state::GameState;
pub use tournament_card::{TournamentCard, TournamentStats, INITIAL_RATING_RANGE};
pub use types::{CardId, CardName, Rarity};
