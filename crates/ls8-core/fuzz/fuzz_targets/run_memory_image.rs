#![no_main]

use libfuzzer_sys::fuzz_target;
use ls8_core::{run_for, AluCompat, CoreConfig, CoreState, Decoder, ADDRESS_SPACE_BYTES};

const STEP_BUDGET: u64 = 4_096;

fuzz_target!(|data: &[u8]| {
    let Some((&mode, image)) = data.split_first() else {
        return;
    };
    let image = &image[..image.len().min(ADDRESS_SPACE_BYTES)];

    let Ok(mut state) = CoreState::from_image(image) else {
        return;
    };
    let _ = Decoder::decode(&state.memory, 0).to_string();

    let config = CoreConfig {
        alu_compat: if mode & 1 == 0 {
            AluCompat::Named
        } else {
            AluCompat::AliasToAnd
        },
    };
    let _ = run_for(&mut state, &mut std::io::sink(), &config, STEP_BUDGET);
});
