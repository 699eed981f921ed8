#![no_main]

use libfuzzer_sys::fuzz_target;
use region_fit::{parse::parse_input, region_fits};

fuzz_target!(|input: &str| {
    let Ok((shapes, regions)) = parse_input(input) else {
        return;
    };

    for region in &regions {
        // Keep the search space small enough that every case terminates
        // quickly; correctness is what matters here.
        if region.cell_count() <= 12 && region.required_instances() <= 6 {
            let _fits = region_fits(&shapes, region);
        }
    }
});
