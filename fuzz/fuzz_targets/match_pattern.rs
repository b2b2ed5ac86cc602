#![no_main]
use crumbtrail::{ancestors, matches, Registry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<String>, String)| {
    let (patterns, path) = data;

    let registry: Registry<usize> = patterns
        .iter()
        .enumerate()
        .map(|(i, pattern)| (pattern.as_str(), i))
        .collect();

    if let Some(&i) = registry.get(&path) {
        assert!(patterns[i] == path || matches(&patterns[i], &path));
    }

    assert_eq!(ancestors(&path)[0], "/");
});
