//! Fuzz target for registry configuration.
//!
//! Applies an arbitrary sequence of register/unregister options and checks
//! that ids stay unique and construction fails exactly on a duplicate.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use cc_schemes::{options, Network, RegistryError, SchemeRegistry};

#[derive(Debug, Arbitrary)]
enum Step {
    Register(u8),
    Unregister(u8),
}

fn network(index: u8) -> Network {
    Network::ALL[index as usize % Network::ALL.len()]
}

fuzz_target!(|steps: Vec<Step>| {
    let mut builder = SchemeRegistry::builder();
    let mut expected: Vec<Network> = Network::DEFAULTS.to_vec();
    let mut duplicate = None;

    for step in &steps {
        match *step {
            Step::Register(i) => {
                let n = network(i);
                builder = builder.with(options::register_network(n));
                if duplicate.is_none() {
                    if expected.contains(&n) {
                        duplicate = Some(n);
                    } else {
                        expected.push(n);
                    }
                }
            }
            Step::Unregister(i) => {
                let n = network(i);
                builder = builder.with(options::unregister_scheme(n.id()));
                if duplicate.is_none() {
                    expected.retain(|&e| e != n);
                }
            }
        }
    }

    match (builder.build(), duplicate) {
        (Ok(registry), None) => {
            let ids: Vec<_> = registry.ids().cloned().collect();
            let want: Vec<_> = expected.iter().map(Network::id).collect();
            assert_eq!(ids, want);
        }
        (Err(RegistryError::DuplicateScheme { id }), Some(n)) => assert_eq!(id, n.id()),
        (result, duplicate) => panic!("unexpected {:?} for duplicate {:?}", result, duplicate),
    }
});
