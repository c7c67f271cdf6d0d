//! Domain models shared across the workspace.

mod chunk;
mod classification;
mod conversation;
mod duty;
mod facts;
mod market;
mod proposal;
mod similarity;
mod tariff;
mod template;

pub use chunk::RegulatoryChunk;
pub use classification::{ClassifierFacts, QueryAnalysis};
pub use conversation::{recent_window, ConversationTurn};
pub use duty::DutyCalculationResult;
pub use facts::ExtractedDutyFacts;
pub use market::{Commodity, CurrencyRate};
pub use proposal::{ProposalFacts, ProposalSlotState};
pub use similarity::Similarity;
pub use tariff::{Currency, TariffRule};
pub use template::{parse_stored_keywords, InstructionTemplate};
