mod attack;
mod claim;
mod defense;
mod fallacy;
mod graph;
mod stance;

pub use attack::{AttackVector, CounterArgument};
pub use claim::{AtomicClaim, ClaimType};
pub use defense::DefenseArgument;
pub use fallacy::{FallacySeverity, LogicalFallacy, CANONICAL_FALLACIES};
pub use graph::{ArgumentGraph, ClaimEdge, ClaimNode, ClaimRelation, DirectedClaimView};
pub use stance::{Persona, Stance};
