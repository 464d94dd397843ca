use async_stream::stream;
use futures::stream::Stream;
use futures::stream::StreamExt;
use msgtrack_core::{Message, MessageTracker, Result, Tracker};
use msgtrack_sdk::{SharedTracker, TrackerConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::{Duration, Instant};

pub const SMALL: usize = 1_000;
pub const MEDIUM: usize = 100_000;
pub const LARGE: usize = 1_000_000;

/// Statistics collected for one benchmarked operation
#[derive(Clone, Debug)]
pub struct BenchStats {
    pub operation: &'static str,
    pub capacity: usize,
    pub iterations: usize,
    pub total_time: Duration,
    pub avg_op_time: Duration,
    pub ops_per_second: f64,
    /// Operations that returned an error or tasks that failed to join
    pub failures: usize,
}

impl BenchStats {
    fn new(operation: &'static str, capacity: usize, iterations: usize, total_time: Duration) -> Self {
        let avg_op_time = if iterations > 0 {
            total_time.div_f64(iterations as f64)
        } else {
            Duration::ZERO
        };

        Self {
            operation,
            capacity,
            iterations,
            total_time,
            avg_op_time,
            ops_per_second: iterations as f64 / total_time.as_secs_f64().max(f64::EPSILON),
            failures: 0,
        }
    }

    fn with_failures(mut self, failures: usize) -> Self {
        self.failures = failures;
        self
    }

    pub fn print(&self) {
        println!("\n╔════════════════════════════════════════════════════════════╗");
        println!("║  {:<58}║", format!("{} (capacity {})", self.operation, self.capacity));
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║  Iterations:                {:>30} ║", self.iterations);
        println!("║  Total Time:                {:>29}s ║", format!("{:.3}", self.total_time.as_secs_f64()));
        println!("║  Average Op Time:           {:>28}ns ║", self.avg_op_time.as_nanos());
        println!("║  Operations/Second:         {:>30.0} ║", self.ops_per_second);
        println!("║  Misses/Failures:           {:>30} ║", self.failures);
        println!("╚════════════════════════════════════════════════════════════╝");
    }
}

pub fn generate_message(n: usize) -> Message {
    Message::new(format!("someID{}", n), format!("somePeerID{}", n), vec![0, 1, 1])
}

fn filled_tracker(capacity: usize) -> Result<Tracker> {
    let mut tracker = Tracker::new(capacity)?;
    for i in 0..capacity {
        tracker.add(generate_message(i))?;
    }
    Ok(tracker)
}

/// Generator that yields lookup keys: tracked IDs, plus misses when `miss_ratio > 0`
fn key_generator(pool: Vec<String>, count: usize, miss_ratio: f64) -> impl Stream<Item = String> {
    stream! {
        let mut rng = StdRng::from_entropy();
        for i in 0..count {
            if rng.gen_bool(miss_ratio) {
                yield format!("notInQueue{}", i);
            } else {
                yield pool[rng.gen_range(0..pool.len())].clone();
            }
        }
    }
}

async fn collect_keys(tracker: &Tracker, count: usize, miss_ratio: f64) -> Vec<String> {
    let pool: Vec<String> = tracker.iter().map(|m| m.id.clone()).collect();
    key_generator(pool, count, miss_ratio).collect().await
}

/// Add sequentially generated messages; past capacity every add evicts
pub fn bench_add(capacity: usize, iterations: usize) -> Result<BenchStats> {
    let mut tracker = Tracker::new(capacity)?;
    let messages: Vec<Message> = (0..iterations).map(generate_message).collect();

    let start = Instant::now();
    for msg in messages {
        tracker.add(msg)?;
    }

    Ok(BenchStats::new("Add", capacity, iterations, start.elapsed()))
}

/// Delete random tracked IDs; repeats after the first hit are misses
pub async fn bench_delete(capacity: usize, id_count: usize, iterations: usize) -> Result<BenchStats> {
    let mut tracker = filled_tracker(capacity)?;
    let ids = collect_keys(&tracker, id_count, 0.0).await;

    let mut misses = 0;
    let start = Instant::now();
    for i in 0..iterations {
        if tracker.delete(&ids[i % ids.len()]).is_err() {
            misses += 1;
        }
    }

    Ok(BenchStats::new("Delete", capacity, iterations, start.elapsed()).with_failures(misses))
}

/// Point lookups, half hits and half misses
pub async fn bench_message(capacity: usize, iterations: usize) -> Result<BenchStats> {
    let tracker = filled_tracker(capacity)?;
    let ids = collect_keys(&tracker, capacity * 2, 0.5).await;

    let mut misses = 0;
    let start = Instant::now();
    for i in 0..iterations {
        if black_box(tracker.message(&ids[i % ids.len()])).is_err() {
            misses += 1;
        }
    }

    Ok(BenchStats::new("Message", capacity, iterations, start.elapsed()).with_failures(misses))
}

/// Full FIFO snapshots
pub fn bench_messages(capacity: usize, iterations: usize) -> Result<BenchStats> {
    let tracker = filled_tracker(capacity)?;

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(tracker.messages());
    }

    Ok(BenchStats::new("Messages", capacity, iterations, start.elapsed()))
}

/// Several tasks observing overlapping message streams through one shared tracker
pub async fn stress_shared_observe(
    num_tasks: usize,
    msgs_per_task: usize,
    capacity: usize,
) -> msgtrack_sdk::Result<BenchStats> {
    let config = TrackerConfig::builder().name("stress").capacity(capacity).build();
    let tracker = SharedTracker::new(&config)?;

    let start = Instant::now();
    let mut handles = vec![];
    for task in 0..num_tasks {
        let tracker = tracker.clone();
        let handle = tokio::spawn(async move {
            let mut fresh = 0usize;
            for i in 0..msgs_per_task {
                // Neighbouring tasks share half their IDs.
                let n = task * msgs_per_task / 2 + i;
                if let Ok(true) = tracker.observe(generate_message(n)) {
                    fresh += 1;
                }
                if i % 100 == 0 {
                    tokio::task::yield_now().await;
                }
            }
            fresh
        });
        handles.push(handle);
    }

    let mut fresh = 0;
    let mut failed_tasks = 0;
    for handle in handles {
        match handle.await {
            Ok(count) => fresh += count,
            Err(e) => {
                println!("  Task failed: {}", e);
                failed_tasks += 1;
            }
        }
    }
    println!("  First sightings: {} | Retained: {}", fresh, tracker.len());

    let stats = BenchStats::new("Shared observe", capacity, num_tasks * msgs_per_task, start.elapsed());
    Ok(stats.with_failures(failed_tasks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_add_reports_iterations() {
        let stats = bench_add(10, 100).unwrap();
        assert_eq!(stats.iterations, 100);
        assert_eq!(stats.operation, "Add");
        assert_eq!(stats.failures, 0);
    }

    #[test]
    fn test_average_handles_large_iteration_counts() {
        // 2^32 iterations used to truncate to a zero divisor.
        let stats = BenchStats::new("Add", 1, 1 << 32, Duration::from_secs(4));
        assert!(stats.avg_op_time < Duration::from_nanos(2));
    }

    #[tokio::test]
    async fn test_delete_counts_misses() {
        // One id deleted ten times: the first hit, then nine misses.
        let stats = bench_delete(5, 1, 10).await.unwrap();
        assert_eq!(stats.failures, 9);
    }

    #[tokio::test]
    async fn test_collect_keys_draws_from_tracker() {
        let tracker = filled_tracker(20).unwrap();
        let keys = collect_keys(&tracker, 50, 0.0).await;

        assert_eq!(keys.len(), 50);
        assert!(keys.iter().all(|k| tracker.contains(k)));
    }

    #[tokio::test]
    async fn test_shared_observe_bounded() {
        let stats = stress_shared_observe(4, 200, 100).await.unwrap();
        assert_eq!(stats.iterations, 800);
        assert_eq!(stats.failures, 0);
    }
}
