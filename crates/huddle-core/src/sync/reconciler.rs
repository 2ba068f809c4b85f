use crate::{CoreError, CorrelationId, Result};

use std::collections::HashMap;
use std::hash::Hash;
use std::panic::Location;

use error_location::ErrorLocation;

/// Client-side store reconciling tentative mutations with confirmed state.
///
/// At most one tentative mutation may be in flight per key. `begin` (or
/// `begin_removal`) snapshots the confirmed value and installs the
/// tentative view; the matching `commit`, `commit_removed`, or `revert`
/// resolves it in a single call, so readers never observe a half-applied
/// transition and a correlation id can resolve at most once.
#[derive(Debug)]
pub struct Reconciler<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    confirmed: HashMap<K, V>,
    pending: HashMap<K, Pending<V>>,
    keys_by_correlation: HashMap<CorrelationId, K>,
}

#[derive(Debug)]
struct Pending<V> {
    tentative: Tentative<V>,
    /// Confirmed value at begin time; `None` when the mutation created
    /// the entity.
    prior: Option<V>,
}

#[derive(Debug)]
enum Tentative<V> {
    Value(V),
    Removed,
}

impl<K, V> Reconciler<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            confirmed: HashMap::new(),
            pending: HashMap::new(),
            keys_by_correlation: HashMap::new(),
        }
    }

    /// Replace the confirmed state wholesale (a server refresh).
    ///
    /// In-flight mutations keep their tentative view until resolved.
    pub fn load<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.confirmed = items.into_iter().collect();
    }

    /// Upsert a server-confirmed value outside any tentative mutation.
    pub fn insert_confirmed(&mut self, key: K, value: V) {
        self.confirmed.insert(key, value);
    }

    /// Visible value for `key`: the tentative view when one is in flight,
    /// else the confirmed value.
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.pending.get(key) {
            Some(pending) => match &pending.tentative {
                Tentative::Value(value) => Some(value),
                Tentative::Removed => None,
            },
            None => self.confirmed.get(key),
        }
    }

    /// Iterate the visible state (tentative views win over confirmed).
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        let overlaid = self
            .confirmed
            .iter()
            .filter_map(|(key, value)| match self.pending.get(key) {
                Some(pending) => match &pending.tentative {
                    Tentative::Value(tentative) => Some((key, tentative)),
                    Tentative::Removed => None,
                },
                None => Some((key, value)),
            });

        let created = self
            .pending
            .iter()
            .filter(|(key, _)| !self.confirmed.contains_key(key))
            .filter_map(|(key, pending)| match &pending.tentative {
                Tentative::Value(tentative) => Some((key, tentative)),
                Tentative::Removed => None,
            });

        overlaid.chain(created)
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    /// Apply a tentative update (or creation, when `key` is unknown).
    ///
    /// Fails with `MutationInFlight` while another tentative mutation for
    /// the same key is unresolved.
    #[track_caller]
    pub fn begin(&mut self, key: K, tentative: V) -> Result<CorrelationId> {
        self.begin_with(key, Tentative::Value(tentative))
    }

    /// Apply a tentative removal; readers stop seeing the entity at once.
    #[track_caller]
    pub fn begin_removal(&mut self, key: K) -> Result<CorrelationId> {
        self.begin_with(key, Tentative::Removed)
    }

    /// Resolve a mutation with the server-confirmed value.
    pub fn commit(&mut self, correlation_id: CorrelationId, confirmed: V) -> Result<()> {
        let key = self.take_key(correlation_id)?;
        self.pending.remove(&key);
        self.confirmed.insert(key, confirmed);
        Ok(())
    }

    /// Resolve a mutation whose outcome is that the entity no longer
    /// exists (a confirmed removal).
    pub fn commit_removed(&mut self, correlation_id: CorrelationId) -> Result<()> {
        let key = self.take_key(correlation_id)?;
        self.pending.remove(&key);
        self.confirmed.remove(&key);
        Ok(())
    }

    /// Resolve a failed mutation by restoring the begin-time snapshot.
    /// A tentatively created entity disappears again.
    pub fn revert(&mut self, correlation_id: CorrelationId) -> Result<()> {
        let key = self.take_key(correlation_id)?;
        match self.pending.remove(&key).and_then(|pending| pending.prior) {
            Some(prior) => {
                self.confirmed.insert(key, prior);
            }
            None => {
                self.confirmed.remove(&key);
            }
        }
        Ok(())
    }

    #[track_caller]
    fn begin_with(&mut self, key: K, tentative: Tentative<V>) -> Result<CorrelationId> {
        if self.pending.contains_key(&key) {
            return Err(CoreError::MutationInFlight {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let correlation_id = CorrelationId::new();
        let prior = self.confirmed.get(&key).cloned();
        self.pending.insert(key.clone(), Pending { tentative, prior });
        self.keys_by_correlation.insert(correlation_id, key);
        Ok(correlation_id)
    }

    #[track_caller]
    fn take_key(&mut self, correlation_id: CorrelationId) -> Result<K> {
        match self.keys_by_correlation.remove(&correlation_id) {
            Some(key) => Ok(key),
            None => Err(CoreError::UnknownCorrelation {
                correlation_id: correlation_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl<K, V> Default for Reconciler<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
