//! Cache ilimitado sobre mapa ordenado.

use std::collections::btree_map::{BTreeMap, Entry};
use std::num::NonZeroUsize;

use super::{CacheStrategy, Handle};

/// Cache que nunca remove entradas.
///
/// Os valores ficam num vetor só de inserção e o mapa guarda a posição de
/// cada chave, então um handle continua válido enquanto o cache existir.
/// A iteração segue a ordem das chaves.
#[derive(Debug, Clone)]
pub struct UnboundedCache<K, V> {
    index: BTreeMap<K, usize>,
    values: Vec<V>,
}

impl<K, V> UnboundedCache<K, V> {
    /// Cria um cache vazio.
    pub fn new() -> Self {
        Self {
            index: BTreeMap::new(),
            values: Vec::new(),
        }
    }

    /// Número de entradas.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Indica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Itera sobre as entradas na ordem das chaves.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.index
            .iter()
            .map(move |(key, &slot)| (key, &self.values[slot]))
    }
}

impl<K: Ord, V> UnboundedCache<K, V> {
    /// Lê o valor de uma chave, se presente.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.values[slot])
    }
}

impl<K, V> Default for UnboundedCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> CacheStrategy<K, V> for UnboundedCache<K, V> {
    type Output<'a>
        = &'a V
    where
        Self: 'a;

    fn lookup(&self, key: &K) -> Option<Handle> {
        // O slot também serve de carimbo: slots nunca são reutilizados.
        self.index
            .get(key)
            .map(|&slot| Handle::new(slot, slot as u64))
    }

    fn insert_if_absent(&mut self, key: K, value: V) -> Handle {
        let slot = match self.index.entry(key) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let slot = self.values.len();
                self.values.push(value);
                entry.insert(slot);
                slot
            }
        };
        Handle::new(slot, slot as u64)
    }

    fn resolve(&self, handle: Handle) -> &V {
        &self.values[handle.slot()]
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn capacity(&self) -> Option<NonZeroUsize> {
        None
    }
}
