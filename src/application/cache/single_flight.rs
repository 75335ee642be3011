use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use super::lock::mutex_lock;

type Slot<T> = Arc<AsyncMutex<Option<T>>>;
type Gates<T> = Arc<Mutex<HashMap<String, Slot<T>>>>;

/// Serializes work per key inside this process. The winner may publish its
/// result on the guard; callers queued behind it read that value instead of
/// repeating the work, even when the cache store is unreachable.
///
/// A published value lives only as long as someone holds or waits on the
/// key. Once the last guard drops, the slot is discarded.
pub struct SingleFlight<T> {
    gates: Gates<T>,
}

impl<T> SingleFlight<T> {
    pub fn new() -> Self {
        Self {
            gates: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn acquire(&self, key: &str) -> FlightGuard<T> {
        let slot = {
            let mut gates = mutex_lock(&self.gates, "application::cache::single_flight", "acquire");
            Arc::clone(
                gates
                    .entry(key.to_string())
                    .or_insert_with(|| Arc::new(AsyncMutex::new(None))),
            )
        };
        let permit = Arc::clone(&slot).lock_owned().await;
        FlightGuard {
            gates: Arc::clone(&self.gates),
            key: key.to_string(),
            slot,
            permit: Some(permit),
        }
    }

    pub fn in_flight(&self) -> usize {
        mutex_lock(&self.gates, "application::cache::single_flight", "in_flight").len()
    }
}

impl<T> Default for SingleFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SingleFlight<T> {
    fn clone(&self) -> Self {
        Self {
            gates: Arc::clone(&self.gates),
        }
    }
}

/// Held while the keyed work runs; dropping it lets the next waiter in.
pub struct FlightGuard<T> {
    gates: Gates<T>,
    key: String,
    slot: Slot<T>,
    permit: Option<OwnedMutexGuard<Option<T>>>,
}

impl<T> FlightGuard<T> {
    /// Value published by an earlier holder of this key.
    pub fn shared(&self) -> Option<&T> {
        self.permit.as_ref().and_then(|permit| permit.as_ref())
    }

    /// Hands `value` to every caller still queued on this key.
    pub fn publish(&mut self, value: T) {
        if let Some(permit) = self.permit.as_mut() {
            **permit = Some(value);
        }
    }
}

impl<T> Drop for FlightGuard<T> {
    fn drop(&mut self) {
        drop(self.permit.take());
        let mut gates = mutex_lock(&self.gates, "application::cache::single_flight", "release");
        // only the map and this guard still reference the slot
        if Arc::strong_count(&self.slot) == 2 {
            gates.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_key_waits_for_holder() {
        let flights = SingleFlight::<u32>::new();
        let held = flights.acquire("content:docs:1").await;

        let blocked = tokio::time::timeout(
            Duration::from_millis(20),
            flights.acquire("content:docs:1"),
        )
        .await;
        assert!(blocked.is_err());

        let other = tokio::time::timeout(
            Duration::from_millis(20),
            flights.acquire("content:docs:2"),
        )
        .await;
        assert!(other.is_ok());
        drop(other);

        drop(held);
        let next = tokio::time::timeout(
            Duration::from_millis(20),
            flights.acquire("content:docs:1"),
        )
        .await;
        assert!(next.is_ok());
    }

    #[tokio::test]
    async fn gates_are_released_after_use() {
        let flights = SingleFlight::<u32>::new();
        {
            let _a = flights.acquire("a").await;
            let _b = flights.acquire("b").await;
            assert_eq!(flights.in_flight(), 2);
        }
        assert_eq!(flights.in_flight(), 0);
    }

    #[tokio::test]
    async fn waiter_keeps_gate_alive() {
        let flights = SingleFlight::<u32>::new();
        let held = flights.acquire("k").await;

        let contender = flights.clone();
        let waiter = tokio::spawn(async move {
            let _guard = contender.acquire("k").await;
        });
        tokio::task::yield_now().await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        drop(held);
        waiter.await.unwrap();
        assert_eq!(flights.in_flight(), 0);
    }

    #[tokio::test]
    async fn waiter_reads_value_published_by_holder() {
        let flights = SingleFlight::<String>::new();
        let mut held = flights.acquire("k").await;
        assert!(held.shared().is_none());

        let contender = flights.clone();
        let waiter = tokio::spawn(async move {
            let guard = contender.acquire("k").await;
            guard.shared().cloned()
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        held.publish("fetched".to_string());
        drop(held);
        assert_eq!(waiter.await.unwrap().as_deref(), Some("fetched"));
    }

    #[tokio::test]
    async fn published_value_is_dropped_with_last_guard() {
        let flights = SingleFlight::<String>::new();
        {
            let mut guard = flights.acquire("k").await;
            guard.publish("stale".to_string());
        }
        assert_eq!(flights.in_flight(), 0);

        let guard = flights.acquire("k").await;
        assert!(guard.shared().is_none());
    }
}
