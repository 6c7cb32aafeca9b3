#![no_main]

use libfuzzer_sys::fuzz_target;
use zillion_fuzz::{check_grouping, check_naming, NamingInput};

fuzz_target!(|input: NamingInput| {
    check_naming(input);
    check_grouping(input.zeros);
});
