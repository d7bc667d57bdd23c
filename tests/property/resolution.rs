//! Property-based tests for merge and resolution guarantees

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use zkconf::config::{
    CompilerSource, CompilerSpec, NetworkSpec, OptimizerDetails, PartialConfig, PartialMocha,
    PartialPaths, PartialSolidity, PartialZksolc,
};
use zkconf::resolve;

/// Semantic version strings, sometimes with pre-release and build metadata
fn version_strategy() -> impl Strategy<Value = String> {
    (
        0u64..2,
        0u64..30,
        0u64..40,
        prop::option::of(("(alpha|beta|rc)", 0u8..20)),
        prop::option::of("[0-9a-f]{8}"),
    )
        .prop_map(|(major, minor, patch, pre, build)| {
            let mut version = format!("{}.{}.{}", major, minor, patch);
            if let Some((tag, n)) = pre {
                version.push_str(&format!("-{}.{}", tag, n));
            }
            if let Some(commit) = build {
                version.push_str(&format!("+commit.{}", commit));
            }
            version
        })
}

fn compiler_strategy() -> impl Strategy<Value = CompilerSpec> {
    (
        version_strategy(),
        any::<bool>(),
        0i64..=i64::from(u32::MAX),
        prop::option::of(prop::option::of(any::<bool>())),
    )
        .prop_map(|(version, enabled, runs, details)| {
            let mut spec = CompilerSpec::new(version, enabled, runs);
            spec.optimizer_details = details.map(|yul| OptimizerDetails { yul });
            spec
        })
}

fn zksolc_strategy() -> impl Strategy<Value = PartialZksolc> {
    (
        prop_oneof![Just("latest".to_string()), version_strategy()],
        prop_oneof![Just(CompilerSource::Binary), Just(CompilerSource::Docker)],
    )
        .prop_map(|(version, source)| PartialZksolc {
            version: Some(version),
            compiler_source: Some(source),
        })
}

fn path_strategy() -> impl Strategy<Value = PathBuf> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(|dir| PathBuf::from(format!("./{}", dir))),
        "[a-z]{1,8}".prop_map(|dir| PathBuf::from(format!("/opt/{}", dir))),
    ]
}

fn paths_strategy() -> impl Strategy<Value = PartialPaths> {
    (
        prop::option::of(path_strategy()),
        prop::option::of(path_strategy()),
        prop::option::of(path_strategy()),
        prop::option::of(path_strategy()),
    )
        .prop_map(|(sources, tests, cache, artifacts)| PartialPaths {
            sources,
            tests,
            cache,
            artifacts,
        })
}

/// Opaque pass-through values a plugin might attach to a network
fn extra_strategy() -> impl Strategy<Value = BTreeMap<String, serde_json::Value>> {
    let value = prop_oneof![
        any::<i64>().prop_map(serde_json::Value::from),
        any::<bool>().prop_map(serde_json::Value::from),
        "[a-z0-9]{0,10}".prop_map(serde_json::Value::from),
        prop::collection::vec(any::<u32>(), 0..4).prop_map(serde_json::Value::from),
    ];
    prop::collection::btree_map("x[A-Z][a-z]{1,6}", value, 0..3)
}

fn networks_strategy(prefix: &'static str) -> impl Strategy<Value = BTreeMap<String, NetworkSpec>> {
    prop::collection::btree_map("[a-z]{1,8}", "[a-z]{1,12}", 0..5).prop_map(move |entries| {
        entries
            .into_iter()
            .map(|(name, host)| {
                (
                    format!("{}{}", prefix, name),
                    NetworkSpec::remote(format!("https://{}.example.org", host)),
                )
            })
            .collect()
    })
}

/// L1 networks with pass-through fields plus zkSync networks settling on one of them or on
/// an RPC URL
fn mixed_networks_strategy() -> impl Strategy<Value = BTreeMap<String, NetworkSpec>> {
    (
        prop::collection::btree_map("[a-z]{1,8}", ("[a-z]{1,12}", extra_strategy()), 0..4),
        prop::collection::btree_map(
            "[a-z]{1,8}",
            ("[a-z]{1,12}", any::<bool>(), prop::option::of("[a-z]{1,12}")),
            0..4,
        ),
    )
        .prop_map(|(l1, l2)| {
            let mut networks: BTreeMap<String, NetworkSpec> = l1
                .into_iter()
                .map(|(name, (host, extra))| {
                    let mut network = NetworkSpec::remote(format!("https://{}.example.org", host));
                    network.extra = extra;
                    (format!("l1-{}", name), network)
                })
                .collect();
            let first_l1 = networks.keys().next().cloned();

            for (name, (host, by_name, explorer)) in l2 {
                let eth_network = match (&first_l1, by_name) {
                    (Some(l1_name), true) => l1_name.clone(),
                    _ => "https://l1.example.org".to_string(),
                };
                let mut network =
                    NetworkSpec::zksync(format!("https://{}.era.example.org", host), eth_network);
                network.verify_url =
                    explorer.map(|e| format!("https://{}.example.org/contract_verification", e));
                networks.insert(format!("zk-{}", name), network);
            }
            networks
        })
}

fn partial_strategy() -> impl Strategy<Value = PartialConfig> {
    (
        prop::option::of(zksolc_strategy()),
        prop::option::of(prop::collection::vec(compiler_strategy(), 1..4)),
        prop::option::of(paths_strategy()),
        mixed_networks_strategy(),
        any::<bool>(),
        prop::option::of(1i64..10_000_000),
    )
        .prop_map(
            |(zksolc, compilers, paths, networks, pick_default, timeout)| {
                let default_network = networks.keys().next().filter(|_| pick_default).cloned();
                PartialConfig {
                    zksolc,
                    solidity: compilers.map(|compilers| PartialSolidity {
                        compilers: Some(compilers),
                    }),
                    paths,
                    default_network,
                    networks,
                    mocha: timeout.map(|ms| PartialMocha { timeout: Some(ms) }),
                }
            },
        )
}

/// Resolving a resolved configuration's partial form changes nothing
#[test]
fn test_resolve_idempotent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&partial_strategy(), |partial| {
            let first = resolve(partial).expect("generated configs are valid");
            let second = resolve(first.to_partial()).expect("resolved configs stay valid");
            prop_assert_eq!(first, second);
            Ok(())
        })
        .unwrap();
}

/// Supplied compiler lists come through in order and unchanged
#[test]
fn test_compiler_list_preserved_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(compiler_strategy(), 1..6), |compilers| {
            let partial = PartialConfig {
                solidity: Some(PartialSolidity {
                    compilers: Some(compilers.clone()),
                }),
                ..PartialConfig::default()
            };
            let resolved = resolve(partial).unwrap();
            let round_tripped = resolved
                .to_partial()
                .solidity
                .and_then(|s| s.compilers)
                .unwrap();
            prop_assert_eq!(round_tripped, compilers);
            Ok(())
        })
        .unwrap();
}

/// Disjoint network maps cover the same keys in either merge order
#[test]
fn test_disjoint_network_merge_commutes_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(networks_strategy("a-"), networks_strategy("b-")),
            |(a, b)| {
                let left = PartialConfig {
                    networks: a,
                    ..PartialConfig::default()
                };
                let right = PartialConfig {
                    networks: b,
                    ..PartialConfig::default()
                };

                let ab = resolve(left.clone().overlay(right.clone())).unwrap();
                let ba = resolve(right.overlay(left)).unwrap();
                prop_assert_eq!(
                    ab.networks().keys().collect::<Vec<_>>(),
                    ba.networks().keys().collect::<Vec<_>>()
                );
                prop_assert!(ab.network("hardhat").is_some());
                Ok(())
            },
        )
        .unwrap();
}

/// Any negative optimizer run count is rejected on that field
#[test]
fn test_negative_runs_always_rejected_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(i64::MIN..0, 0usize..3), |(runs, position)| {
            let mut compilers = vec![CompilerSpec::new("0.8.15", true, 200); 3];
            compilers[position].optimizer_runs = runs;
            let partial = PartialConfig {
                solidity: Some(PartialSolidity {
                    compilers: Some(compilers),
                }),
                ..PartialConfig::default()
            };

            let errors = resolve(partial).unwrap_err();
            let field = format!("solidity.compilers[{}].optimizerRuns", position);
            prop_assert!(errors.has_field(&field));
            prop_assert_eq!(errors.len(), 1);
            Ok(())
        })
        .unwrap();
}
