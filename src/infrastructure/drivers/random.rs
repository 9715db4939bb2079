use esp_hal::rng::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn get_seed() -> u64 {
    let rng = Rng::new();
    u64::from(rng.random()) << 32 | u64::from(rng.random())
}

/// Pseudo-random source for the automaton, seeded from the hardware RNG
pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(get_seed())
}
