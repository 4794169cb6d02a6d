#![no_main]

use apisurface_model::load_program_str;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only well-formed UTF-8 can be a package document
    if let Ok(s) = std::str::from_utf8(data) {
        // Any document the loader accepts must render or fail with a RenderError, never panic
        if let Ok(program) = load_program_str(s, "fuzz") {
            let _ = apisurface::format_packages(&program.packages);
        }
    }
});
