#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use ppmfx_ppm::ppmfx_core::options::DecoderOptions;

    // no limits by default, keep allocations small
    let options = DecoderOptions::default()
        .set_max_width(1024)
        .set_max_height(1024);

    let mut decoder = ppmfx_ppm::PPMDecoder::new_with_options(options, data);

    if let Ok(raster) = decoder.decode() {
        let mut sink = Vec::new();
        let _ = ppmfx_ppm::PPMEncoder::new(&mut sink).encode(&raster);
    }
});
