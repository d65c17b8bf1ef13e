use crate::domain::account::AccountId;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Table of per-account locks used to serialize transfers touching the same
/// account.
///
/// Locks for a pair are always taken in ascending `AccountId` order, so two
/// transfers over overlapping pairs cannot deadlock and transfers over disjoint
/// pairs never wait on each other.
#[derive(Default)]
pub struct AccountLocks {
    slots: DashMap<AccountId, Arc<Mutex<()>>>,
}

/// Holds the locks of one transfer pair until dropped.
pub struct PairGuard {
    _first: OwnedMutexGuard<()>,
    _second: Option<OwnedMutexGuard<()>>,
}

impl AccountLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, id: &AccountId) -> Arc<Mutex<()>> {
        self.slots.entry(id.clone()).or_default().value().clone()
    }

    /// Locks both accounts. When `a == b` only one lock is taken.
    pub async fn lock_pair(&self, a: &AccountId, b: &AccountId) -> PairGuard {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };

        let first_guard = self.slot(first).lock_owned().await;
        let second_guard = if first == second {
            None
        } else {
            Some(self.slot(second).lock_owned().await)
        };

        PairGuard {
            _first: first_guard,
            _second: second_guard,
        }
    }

    /// Removes the slot of `id` unless a transfer holds or awaits it.
    pub fn release(&self, id: &AccountId) {
        self.slots.remove_if(id, |_, slot| Arc::strong_count(slot) == 1);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    fn id(value: &str) -> AccountId {
        AccountId::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_disjoint_pairs_do_not_block() {
        let locks = AccountLocks::new();
        let _held = locks.lock_pair(&id("A"), &id("B")).await;

        let other = timeout(Duration::from_millis(100), locks.lock_pair(&id("C"), &id("D"))).await;
        assert!(other.is_ok());
    }

    #[tokio::test]
    async fn test_overlapping_pair_waits() {
        let locks = AccountLocks::new();
        let held = locks.lock_pair(&id("A"), &id("B")).await;

        let blocked = timeout(Duration::from_millis(50), locks.lock_pair(&id("B"), &id("E"))).await;
        assert!(blocked.is_err());

        drop(held);
        let acquired = timeout(Duration::from_millis(100), locks.lock_pair(&id("E"), &id("B"))).await;
        assert!(acquired.is_ok());
    }

    #[tokio::test]
    async fn test_same_account_pair_takes_one_lock() {
        let locks = AccountLocks::new();
        let guard = timeout(Duration::from_millis(100), locks.lock_pair(&id("A"), &id("A"))).await;
        assert!(guard.is_ok());
        assert_eq!(locks.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_opposite_orders_do_not_deadlock() {
        let locks = Arc::new(AccountLocks::new());

        let mut handles = Vec::new();
        for i in 0..200 {
            let locks = locks.clone();
            handles.push(tokio::spawn(async move {
                let (a, b) = if i % 2 == 0 { ("X", "Y") } else { ("Y", "X") };
                let _guard = locks.lock_pair(&id(a), &id(b)).await;
                tokio::task::yield_now().await;
            }));
        }

        let all = timeout(Duration::from_secs(5), async {
            for handle in handles {
                handle.await.unwrap();
            }
        })
        .await;
        assert!(all.is_ok());
    }

    #[tokio::test]
    async fn test_release_keeps_held_slots() {
        let locks = AccountLocks::new();
        let held = locks.lock_pair(&id("A"), &id("B")).await;
        drop(locks.lock_pair(&id("C"), &id("D")).await);

        locks.release(&id("A"));
        locks.release(&id("C"));
        assert_eq!(locks.len(), 3);

        drop(held);
        locks.release(&id("A"));
        locks.release(&id("B"));
        locks.release(&id("D"));
        assert!(locks.is_empty());
    }
}
