#![no_main]

use libfuzzer_sys::fuzz_target;
use webroot_sync::domain::policies::WipeGuard;

fuzz_target!(|data: &[u8]| {
    if let Ok(root) = std::str::from_utf8(data) {
        // An accepted root is absolute and never normalizes to `/`
        if let Ok(checked) = WipeGuard::default().check_root(root) {
            assert!(checked.is_absolute());
            assert!(!checked.lexically_normalized().is_root());
        }
    }
});
