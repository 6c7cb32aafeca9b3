#![no_main]

use libfuzzer_sys::fuzz_target;
use zillion_fuzz::{run_entry_session, EntrySession};

fuzz_target!(|session: EntrySession| {
    run_entry_session(&session);
});
