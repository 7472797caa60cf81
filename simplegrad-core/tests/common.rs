use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Once;

static INIT: Once = Once::new();

// Each test binary only uses part of this module.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[allow(dead_code)]
pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
