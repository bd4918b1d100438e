//! # Governance Resolver Benchmarks
//!
//! | Case                 | Storage                                   |
//! |----------------------|-------------------------------------------|
//! | `resolve_empty`      | no VM state contracts                     |
//! | `resolve_governed`   | every family with N checkpoints           |
//! | `genesis_build`      | main genesis block construction and hash  |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use primitive_types::{H160, U256};
use rand::{rngs::StdRng, Rng, SeedableRng};

use rv_01_network_params::{create, NetworkId, OverrideArgs};
use rv_02_genesis::GenesisBuilder;
use rv_03_governance_params::domain::FAMILIES;
use rv_03_governance_params::{DgpResolver, FeeSchedule, InMemoryStorage};

fn governed_storage(checkpoints: u64, rng: &mut StdRng) -> InMemoryStorage {
    let mut storage = InMemoryStorage::new();
    let entries = FeeSchedule::eip158().to_entries();
    for (f, family) in FAMILIES.iter().enumerate() {
        for i in 0..checkpoints {
            let mut bytes = [0u8; 20];
            rng.fill(&mut bytes);
            bytes[0] = f as u8;
            let instance = H160(bytes);
            storage.push_checkpoint(family, i * 1000, instance);
            storage.set_u64_param(instance, U256::from(rng.gen_range(500_000u64..32_000_000)));
            storage.set_schedule_entries(instance, &entries);
        }
    }
    storage
}

fn bench_resolver(c: &mut Criterion) {
    let profile = create(NetworkId::Main, &OverrideArgs::default()).expect("main profile");
    let mut group = c.benchmark_group("rv-03-governance");

    let empty = InMemoryStorage::new();
    let resolver = DgpResolver::new(profile.consensus(), &empty);
    group.bench_function("resolve_empty", |b| {
        b.iter(|| black_box(resolver.resolve(black_box(100_000))))
    });

    let mut rng = StdRng::seed_from_u64(7);
    for checkpoints in [1u64, 16, 256] {
        let storage = governed_storage(checkpoints, &mut rng);
        let resolver = DgpResolver::new(profile.consensus(), &storage);
        group.bench_with_input(
            BenchmarkId::new("resolve_governed", checkpoints),
            &checkpoints,
            |b, n| b.iter(|| black_box(resolver.resolve(black_box((*n as u32) * 500)))),
        );
    }
    group.finish();
}

fn bench_genesis(c: &mut Criterion) {
    let profile = create(NetworkId::Main, &OverrideArgs::default()).expect("main profile");
    let builder = GenesisBuilder::for_profile(&profile);
    c.bench_function("genesis_build", |b| b.iter(|| black_box(builder.build().hash())));
}

criterion_group!(benches, bench_resolver, bench_genesis);
criterion_main!(benches);
