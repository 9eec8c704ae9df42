//! Domain entities - Core business objects with identity

pub mod cat;
mod creature;
pub mod llama;
pub mod unicorn;

pub use cat::{CatAccessories, CatFeatures, CatPalette};
pub use creature::{
    CreatureFeatures, CreatureKind, CreatureRecord, FeatureError, NewCreature,
    MAX_SIZE, MIN_SIZE, NONE,
};
pub use llama::{LlamaAccessories, LlamaFeatures, LlamaPalette};
pub use unicorn::{UnicornAccessories, UnicornFeatures, UnicornPalette};
