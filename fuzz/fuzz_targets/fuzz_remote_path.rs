#![no_main]

use libfuzzer_sys::fuzz_target;
use webroot_sync::RemotePath;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Normalization must never panic and must be idempotent
        let path = RemotePath::new(raw);
        let normalized = path.lexically_normalized();
        assert_eq!(normalized.lexically_normalized(), normalized);
        let _ = path.ancestors_inclusive();
        let _ = RemotePath::new("/run/webroots").join(raw);
    }
});
