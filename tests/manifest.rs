//! The library is `no_std`: only the numeric crates may be unconditional
//! dependencies, everything the `sma-bench` binary needs sits behind `bench`.

const MANIFEST: &str = include_str!("../Cargo.toml");

/// `[dependencies.<name>]` tables as (name, body) pairs.
fn dependency_tables() -> Vec<(&'static str, &'static str)> {
    MANIFEST
        .split("\n[")
        .filter_map(|table| {
            let (header, body) = table.split_once(']')?;
            let name = header.strip_prefix("dependencies.")?;
            Some((name, body))
        })
        .collect()
}

#[test]
fn library_pulls_in_only_numeric_crates() {
    let required: Vec<_> = dependency_tables()
        .into_iter()
        .filter(|(_, body)| !body.contains("optional = true"))
        .map(|(name, _)| name)
        .collect();
    assert_eq!(required, ["num-traits", "ordered-float"]);
}

#[test]
fn harness_crates_are_behind_the_bench_feature() {
    let optional: Vec<_> = dependency_tables()
        .into_iter()
        .filter(|(_, body)| body.contains("optional = true"))
        .map(|(name, _)| name)
        .collect();
    assert!(!optional.is_empty());

    let (_, features) = MANIFEST
        .split_once("[features]")
        .expect("manifest declares features");
    for name in optional {
        assert!(features.contains(&format!("\"dep:{name}\"")), "{name}");
    }
    assert!(MANIFEST.contains("required-features = [\"bench\"]"));
}
