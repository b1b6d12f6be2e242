//! Fuzz target for mirror table loading.
//!
//! Tests that arbitrary JSON either fails to load cleanly or yields a table
//! that can be validated and used for flipping without panicking.

#![no_main]

use flip_text_art::{FlipOptions, Flipper, MirrorTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(table) = MirrorTable::from_json(data) else {
        return;
    };

    let _ = table.validate();

    let flipper = Flipper::new().with_table(&table);
    let keys: Vec<&str> = table.keys().take(64).collect();
    let _ = flipper.flip(&keys.concat(), &FlipOptions::default());
});
