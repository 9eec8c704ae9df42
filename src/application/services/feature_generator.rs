//! Feature Generator - Random feature bundles for each creature kind
//!
//! Every palette slot, accessory slot and style discriminator is drawn
//! uniformly from its pool. An accessory draw of [`NONE`] leaves the slot
//! empty. Size is uniform over [`MIN_SIZE`, `MAX_SIZE`].

use crate::application::ports::outbound::RandomPort;
use crate::domain::entities::{
    cat, llama, unicorn, CatAccessories, CatFeatures, CatPalette, CreatureFeatures, CreatureKind,
    LlamaAccessories, LlamaFeatures, LlamaPalette, UnicornAccessories, UnicornFeatures,
    UnicornPalette, MAX_SIZE, MIN_SIZE, NONE,
};

fn pick(rng: &dyn RandomPort, pool: &[&str]) -> String {
    pool[rng.random_index(pool.len())].to_string()
}

fn pick_accessory(rng: &dyn RandomPort, pool: &[&str]) -> Option<String> {
    let item = pool[rng.random_index(pool.len())];
    (item != NONE).then(|| item.to_string())
}

fn random_size(rng: &dyn RandomPort) -> f64 {
    (MIN_SIZE + rng.random_f64() * (MAX_SIZE - MIN_SIZE)).min(MAX_SIZE)
}

pub fn generate_unicorn(rng: &dyn RandomPort) -> UnicornFeatures {
    UnicornFeatures {
        color_palette: UnicornPalette {
            body: pick(rng, unicorn::BODY_COLORS),
            mane: pick(rng, unicorn::MANE_COLORS),
            tail: pick(rng, unicorn::TAIL_COLORS),
            horn: pick(rng, unicorn::HORN_COLORS),
        },
        accessories: UnicornAccessories {
            hat: pick_accessory(rng, unicorn::HATS),
            glasses: pick_accessory(rng, unicorn::GLASSES),
            jewelry: pick_accessory(rng, unicorn::JEWELRY),
        },
        hair_style: pick(rng, unicorn::HAIR_STYLES),
        size: random_size(rng),
    }
}

pub fn generate_llama(rng: &dyn RandomPort) -> LlamaFeatures {
    LlamaFeatures {
        color_palette: LlamaPalette {
            body: pick(rng, llama::BODY_COLORS),
            neck: pick(rng, llama::NECK_COLORS),
            head: pick(rng, llama::HEAD_COLORS),
            feet: pick(rng, llama::FEET_COLORS),
        },
        accessories: LlamaAccessories {
            hat: pick_accessory(rng, llama::HATS),
            scarf: pick_accessory(rng, llama::SCARVES),
            saddle: pick_accessory(rng, llama::SADDLES),
        },
        fur_pattern: pick(rng, llama::FUR_PATTERNS),
        size: random_size(rng),
    }
}

pub fn generate_cat(rng: &dyn RandomPort) -> CatFeatures {
    CatFeatures {
        color_palette: CatPalette {
            body: pick(rng, cat::BODY_COLORS),
            ears: pick(rng, cat::EAR_COLORS),
            paws: pick(rng, cat::PAW_COLORS),
            eyes: pick(rng, cat::EYE_COLORS),
        },
        accessories: CatAccessories {
            collar: pick_accessory(rng, cat::COLLARS),
            bow: pick_accessory(rng, cat::BOWS),
            bell: pick_accessory(rng, cat::BELLS),
        },
        fur_pattern: pick(rng, cat::FUR_PATTERNS),
        size: random_size(rng),
    }
}

/// Generate a feature bundle for `kind`
pub fn generate(kind: CreatureKind, rng: &dyn RandomPort) -> CreatureFeatures {
    match kind {
        CreatureKind::Unicorn => CreatureFeatures::Unicorn(generate_unicorn(rng)),
        CreatureKind::Llama => CreatureFeatures::Llama(generate_llama(rng)),
        CreatureKind::Cat => CreatureFeatures::Cat(generate_cat(rng)),
    }
}
