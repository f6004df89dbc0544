//! Async property examples
//!
//! Run with `QUICKPROP_TRACE=1` to see every sampled value.

use quickprop::{
    AsyncProperty, PropertyError, Runner, StringConfig, TestConfig, TraceConfig, TraceSink,
    integers, quickcheck_async, quickcheck_async_with_iterations, strings,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::time::sleep;

// Example 1: closure returning a future
async fn example_1_closure() {
    println!("=== Example 1: Async Closure ===");

    let result = quickcheck_async(
        |ms: u64| async move {
            let start = Instant::now();
            sleep(Duration::from_millis(ms)).await;
            start.elapsed() >= Duration::from_millis(ms)
        },
        integers(0u64, 5).unwrap(),
    )
    .await;

    match result {
        Ok(()) => println!("✓ Sleep never returns early"),
        Err(failure) => println!("✗ {}", failure),
    }
}

// Example 2: a property type with shared state
struct CacheRoundTrip {
    cache: Arc<Mutex<HashMap<String, usize>>>,
}

impl AsyncProperty<String> for CacheRoundTrip {
    async fn test(&self, key: String) -> Result<(), PropertyError> {
        let length = key.len();
        self.cache
            .lock()
            .map_err(|e| PropertyError::raised(e.to_string()))?
            .insert(key.clone(), length);
        sleep(Duration::from_millis(1)).await;

        let stored = self
            .cache
            .lock()
            .map_err(|e| PropertyError::raised(e.to_string()))?
            .get(&key)
            .copied();
        match stored {
            Some(value) if value == length => Ok(()),
            other => Err(PropertyError::raised(format!(
                "expected {}, cache held {:?}",
                length, other
            ))),
        }
    }
}

async fn example_2_shared_state() {
    println!("\n=== Example 2: Shared State ===");

    let property = CacheRoundTrip {
        cache: Arc::new(Mutex::new(HashMap::new())),
    };
    let keys = strings(StringConfig::with_lengths(1, 12).prefix("key:")).unwrap();

    match quickcheck_async_with_iterations(property, keys, 50).await {
        Ok(()) => println!("✓ Cache returns what was stored"),
        Err(failure) => println!("✗ {}", failure.detailed_report()),
    }
}

// Example 3: a counter-example, with trace captured in memory
async fn example_3_counter_example() {
    println!("\n=== Example 3: Counter-example ===");

    let (sink, buffer) = TraceSink::memory();
    let runner = Runner::new(TestConfig::with_iterations(20), TraceConfig::enabled(sink));

    let result = runner
        .run_async(
            |n: i32| async move { n.checked_mul(1_000_000).is_some() },
            integers(i32::MIN, i32::MAX).unwrap(),
        )
        .await;

    if let Err(failure) = result {
        println!("✗ {}", failure);
    }
    if let Ok(lines) = buffer.lock() {
        for line in lines.iter() {
            println!("  {}", line);
        }
    }
}

#[tokio::main]
async fn main() {
    println!("quickprop - Async Examples");
    println!("==========================");

    example_1_closure().await;
    example_2_shared_state().await;
    example_3_counter_example().await;
}
