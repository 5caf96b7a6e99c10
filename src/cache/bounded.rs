//! Cache limitado com remoção por ordem de inserção.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use super::{CacheStrategy, Handle};

/// Entrada armazenada num slot do anel.
#[derive(Debug, Clone)]
struct Slot<K, V> {
    key: K,
    value: V,
    stamp: u64,
}

/// Cache de capacidade fixa.
///
/// Os slots formam um anel de até `capacity` posições que também é a fila
/// de remoção: `front` aponta para a entrada mais antiga ainda presente.
/// Um acerto não altera essa ordem, então a remoção é FIFO pela primeira
/// inserção e não LRU por acesso.
///
/// Invariantes: `index.len() == slots.len() <= capacity`.
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    index: BTreeMap<K, usize>,
    slots: Vec<Slot<K, V>>,
    front: usize,
    capacity: NonZeroUsize,
    next_stamp: u64,
    evictions: u64,
}

impl<K, V> BoundedCache<K, V> {
    /// Cria um cache vazio com a capacidade indicada.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            index: BTreeMap::new(),
            slots: Vec::with_capacity(capacity.get()),
            front: 0,
            capacity,
            next_stamp: 0,
            evictions: 0,
        }
    }

    /// Cria um cache vazio, rejeitando capacidade zero.
    pub fn with_capacity(capacity: usize) -> crate::MemoResult<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(crate::MemoError::InvalidCacheCapacity(capacity))
    }

    /// Capacidade máxima.
    pub fn max_entries(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Número de entradas.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Indica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Indica se a próxima inserção de chave nova vai remover uma entrada.
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity.get()
    }

    /// Número de entradas removidas por capacidade.
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Chaves da mais antiga para a mais nova, ou seja, na ordem de remoção.
    pub fn keys_by_age(&self) -> impl Iterator<Item = &K> + '_ {
        let (newer, older) = self.slots.split_at(self.front);
        older.iter().chain(newer.iter()).map(|slot| &slot.key)
    }
}

impl<K: Ord, V> BoundedCache<K, V> {
    /// Lê o valor de uma chave sem copiá-lo.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.slots[slot].value)
    }
}

impl<K: Ord + Clone, V: Clone> CacheStrategy<K, V> for BoundedCache<K, V> {
    type Output<'a>
        = V
    where
        Self: 'a;

    fn lookup(&self, key: &K) -> Option<Handle> {
        self.index
            .get(key)
            .map(|&slot| Handle::new(slot, self.slots[slot].stamp))
    }

    /// Insere uma chave nova, removendo antes a mais antiga se o cache
    /// estiver cheio.
    ///
    /// A presença da chave é verificada antes da capacidade: repetir uma
    /// chave já armazenada nunca remove outra entrada.
    fn insert_if_absent(&mut self, key: K, value: V) -> Handle {
        if let Some(handle) = self.lookup(&key) {
            return handle;
        }

        let stamp = self.next_stamp;
        self.next_stamp += 1;
        let fresh = Slot {
            key: key.clone(),
            value,
            stamp,
        };

        let slot = if self.is_full() {
            let slot = self.front;
            let evicted = std::mem::replace(&mut self.slots[slot], fresh);
            self.index.remove(&evicted.key);
            self.front = (self.front + 1) % self.capacity.get();
            self.evictions += 1;
            tracing::debug!(
                slot,
                evicted_stamp = evicted.stamp,
                capacity = self.capacity.get(),
                "Evicting oldest cache entry"
            );
            slot
        } else {
            self.slots.push(fresh);
            self.slots.len() - 1
        };

        self.index.insert(key, slot);
        Handle::new(slot, stamp)
    }

    fn resolve(&self, handle: Handle) -> V {
        let slot = &self.slots[handle.slot()];
        debug_assert_eq!(slot.stamp, handle.stamp(), "stale cache handle");
        slot.value.clone()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn capacity(&self) -> Option<NonZeroUsize> {
        Some(self.capacity)
    }

    fn evictions(&self) -> u64 {
        self.evictions
    }
}
