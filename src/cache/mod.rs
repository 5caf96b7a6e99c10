//! Estratégias de cache do memoizador.
//!
//! Todas as estratégias implementam [`CacheStrategy`] e guardam pares
//! `chave -> valor` num mapa ordenado:
//!
//! - [`UnboundedCache`]: nunca remove entradas; devolve `&V`
//! - [`BoundedCache`]: capacidade fixa, remove a entrada mais antiga
//!   (ordem de inserção); devolve `V` por cópia
//! - [`ConfiguredCache`]: uma das duas, escolhida em tempo de execução a
//!   partir de um [`CacheKind`]; devolve sempre `V`

mod bounded;
mod unbounded;

pub use bounded::BoundedCache;
pub use unbounded::UnboundedCache;

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Handle
// ═══════════════════════════════════════════════════════════════════════════

/// Referência estável para uma entrada armazenada.
///
/// Em [`UnboundedCache`] o handle vale pela vida do cache. Em
/// [`BoundedCache`] ele deixa de valer quando a entrada é removida, o que só
/// acontece numa inserção posterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    slot: usize,
    stamp: u64,
}

impl Handle {
    pub(crate) fn new(slot: usize, stamp: u64) -> Self {
        Self { slot, stamp }
    }

    pub(crate) fn slot(self) -> usize {
        self.slot
    }

    pub(crate) fn stamp(self) -> u64 {
        self.stamp
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait CacheStrategy
// ═══════════════════════════════════════════════════════════════════════════

/// Política de armazenamento e remoção usada por um memoizador.
pub trait CacheStrategy<K, V> {
    /// O que o memoizador devolve ao chamador: `&V` quando o armazenamento
    /// nunca é invalidado, `V` quando pode haver remoção.
    type Output<'a>
    where
        Self: 'a;

    /// Busca uma entrada sem alterar a ordem de remoção.
    fn lookup(&self, key: &K) -> Option<Handle>;

    /// Insere `value` se `key` ainda não existe.
    ///
    /// Se a chave já existe devolve o handle da entrada atual, sem
    /// sobrescrever o valor.
    fn insert_if_absent(&mut self, key: K, value: V) -> Handle;

    /// Lê o valor apontado por um handle válido.
    fn resolve(&self, handle: Handle) -> Self::Output<'_>;

    /// Número de entradas armazenadas.
    fn len(&self) -> usize;

    /// Indica se o cache está vazio.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacidade máxima, `None` se ilimitado.
    fn capacity(&self) -> Option<NonZeroUsize>;

    /// Número de entradas removidas por capacidade.
    fn evictions(&self) -> u64 {
        0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Seleção em tempo de execução
// ═══════════════════════════════════════════════════════════════════════════

/// Estratégia escolhida em tempo de execução, com seus parâmetros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum CacheKind {
    /// Mapa ordenado sem remoção.
    Unbounded,
    /// Capacidade fixa com remoção da inserção mais antiga.
    Bounded {
        /// Número máximo de entradas.
        capacity: NonZeroUsize,
    },
}

impl CacheKind {
    /// Cria um `Bounded`, rejeitando capacidade zero.
    pub fn bounded(capacity: usize) -> crate::MemoResult<Self> {
        NonZeroUsize::new(capacity)
            .map(|capacity| CacheKind::Bounded { capacity })
            .ok_or(crate::MemoError::InvalidCacheCapacity(capacity))
    }
}

impl std::fmt::Display for CacheKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKind::Unbounded => write!(f, "unbounded"),
            CacheKind::Bounded { capacity } => write!(f, "bounded({})", capacity),
        }
    }
}

/// Cache cuja estratégia foi escolhida a partir de um [`CacheKind`].
///
/// Como a variante pode remover entradas, o valor é sempre devolvido por
/// cópia.
#[derive(Debug, Clone)]
pub enum ConfiguredCache<K, V> {
    Unbounded(UnboundedCache<K, V>),
    Bounded(BoundedCache<K, V>),
}

impl<K: Ord + Clone, V> ConfiguredCache<K, V> {
    /// Cria o cache descrito por `kind`.
    pub fn new(kind: CacheKind) -> Self {
        match kind {
            CacheKind::Unbounded => ConfiguredCache::Unbounded(UnboundedCache::new()),
            CacheKind::Bounded { capacity } => ConfiguredCache::Bounded(BoundedCache::new(capacity)),
        }
    }

    /// Estratégia em uso.
    pub fn kind(&self) -> CacheKind {
        match self {
            ConfiguredCache::Unbounded(_) => CacheKind::Unbounded,
            ConfiguredCache::Bounded(cache) => CacheKind::Bounded {
                capacity: cache.max_entries(),
            },
        }
    }
}

impl<K: Ord + Clone, V: Clone> CacheStrategy<K, V> for ConfiguredCache<K, V> {
    type Output<'a>
        = V
    where
        Self: 'a;

    fn lookup(&self, key: &K) -> Option<Handle> {
        match self {
            ConfiguredCache::Unbounded(cache) => cache.lookup(key),
            ConfiguredCache::Bounded(cache) => cache.lookup(key),
        }
    }

    fn insert_if_absent(&mut self, key: K, value: V) -> Handle {
        match self {
            ConfiguredCache::Unbounded(cache) => cache.insert_if_absent(key, value),
            ConfiguredCache::Bounded(cache) => cache.insert_if_absent(key, value),
        }
    }

    fn resolve(&self, handle: Handle) -> V {
        match self {
            ConfiguredCache::Unbounded(cache) => cache.resolve(handle).clone(),
            ConfiguredCache::Bounded(cache) => cache.resolve(handle),
        }
    }

    fn len(&self) -> usize {
        match self {
            ConfiguredCache::Unbounded(cache) => cache.len(),
            ConfiguredCache::Bounded(cache) => cache.len(),
        }
    }

    fn capacity(&self) -> Option<NonZeroUsize> {
        match self {
            ConfiguredCache::Unbounded(_) => None,
            ConfiguredCache::Bounded(cache) => Some(cache.max_entries()),
        }
    }

    fn evictions(&self) -> u64 {
        match self {
            ConfiguredCache::Unbounded(_) => 0,
            ConfiguredCache::Bounded(cache) => cache.evictions(),
        }
    }
}
