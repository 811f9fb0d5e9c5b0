//! Stress test: sustained random operation streams
//!
//! The quick variant runs in every test pass; the long variant is opt-in.

use simulation::config::SimConfig;
use simulation::driver::SimDriver;
use std::time::Instant;

#[test]
fn test_10k_operations_soak() {
    let config = SimConfig {
        operations: 10_000,
        ..Default::default()
    };
    let mut driver = SimDriver::new(&config).unwrap();

    let start = Instant::now();
    let invariant_held = driver.run(config.operations);
    let elapsed = start.elapsed();

    assert!(invariant_held, "supply invariant broke during the soak");
    assert!(driver.supply_invariant_holds());
    assert_eq!(driver.accepted + driver.rejected, 10_000);
    assert!(driver.accepted > 0, "soak should accept some operations");
    assert!(driver.rejected > 0, "soak should reject some operations");

    let ops_per_sec = 10_000.0 / elapsed.as_secs_f64();
    println!("=== 10k Operation Soak ===");
    println!("Elapsed: {:?} | Throughput: {:.0} ops/sec", elapsed, ops_per_sec);
    println!("{}", driver.summary());
    println!("Final digest: {}", driver.ledger.snapshot().digest_hex());
}

#[test]
#[ignore] // Run with: cargo test --test stress -- --ignored
fn test_100k_operations_soak() {
    let config = SimConfig {
        seed: 7,
        operations: 100_000,
        ..Default::default()
    };
    let mut driver = SimDriver::new(&config).unwrap();

    let start = Instant::now();
    let invariant_held = driver.run(config.operations);
    let elapsed = start.elapsed();

    assert!(invariant_held, "supply invariant broke during the soak");
    assert_eq!(driver.accepted + driver.rejected, 100_000);

    let ops_per_sec = 100_000.0 / elapsed.as_secs_f64();
    println!("=== 100k Operation Soak ===");
    println!("Elapsed: {:?} | Throughput: {:.0} ops/sec", elapsed, ops_per_sec);
    println!("{}", driver.summary());
}

#[test]
fn test_two_soaks_share_no_state() {
    // Fresh drivers must not observe each other
    let config = SimConfig {
        operations: 1_000,
        ..Default::default()
    };
    let mut first = SimDriver::new(&config).unwrap();
    first.run(config.operations);
    let digest = first.ledger.state_digest();

    let mut second = SimDriver::new(&config).unwrap();
    second.run(config.operations);

    assert_eq!(second.ledger.state_digest(), digest);
}
