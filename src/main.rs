use stress_test::{
    bench_add, bench_delete, bench_message, bench_messages, stress_shared_observe, LARGE, MEDIUM,
    SMALL,
};
pub mod stress_test;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║            TRACKER BENCHMARKS                              ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    // Add: every queue size, twice the capacity so the second half evicts
    for capacity in [SMALL, MEDIUM, LARGE] {
        bench_add(capacity, capacity * 2)?.print();
    }

    // Delete: a fixed pool of 1000 tracked IDs
    for capacity in [SMALL, MEDIUM] {
        bench_delete(capacity, 1000, 1_000_000).await?.print();
    }

    // Message: half hits, half misses
    for capacity in [SMALL, MEDIUM] {
        bench_message(capacity, 1_000_000).await?.print();
    }

    // Messages: full snapshots
    bench_messages(SMALL, 10_000)?.print();
    bench_messages(MEDIUM, 100)?.print();

    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║            SHARED TRACKER STRESS TEST                      ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    stress_shared_observe(8, 50_000, MEDIUM).await?.print();

    println!("\n✓ All benchmarks completed successfully!");
    Ok(())
}
