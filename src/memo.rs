//! Memoizador: envolve um callable e uma estratégia de cache.
//!
//! ```
//! use memora::memoize;
//!
//! let mut add = memoize(|x: i8, y: i32| i32::from(x) + y);
//! assert_eq!(*add.call((5, 1)), 6);  // miss: invoca o callable
//! assert_eq!(*add.call((5, 1)), 6);  // hit: devolve o valor armazenado
//! assert_eq!(add.stats().misses, 1);
//! ```

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;
use std::num::NonZeroUsize;

use crate::cache::{BoundedCache, CacheKind, CacheStrategy, ConfiguredCache, UnboundedCache};
use crate::signature::{check_signature, Signature};
use crate::types::stats::CacheStats;
use crate::MemoResult;

/// Callable memoizado.
///
/// Cada argumento distinto invoca `F` no máximo uma vez enquanto a entrada
/// estiver no cache. O tipo devolvido por [`Memoizer::call`] depende da
/// estratégia `S`: `&R` para [`UnboundedCache`], `R` para as demais.
pub struct Memoizer<F, Args, S> {
    callable: F,
    cache: S,
    hits: u64,
    misses: u64,
    _signature: PhantomData<fn(Args)>,
}

impl<F, Args, S> Memoizer<F, Args, S>
where
    F: Signature<Args>,
    Args: Ord + Clone,
    F::Output: Clone,
    S: CacheStrategy<Args, F::Output>,
{
    /// Envolve `callable` com a estratégia `cache`.
    ///
    /// Valida o contrato do callable antes de devolver o memoizador.
    pub fn new(callable: F, cache: S) -> MemoResult<Self> {
        check_signature::<F, Args>()?;
        tracing::debug!(
            callable = type_name::<F>(),
            arity = F::ARITY,
            capacity = ?cache.capacity(),
            "Creating memoizer"
        );
        Ok(Self::assemble(callable, cache))
    }

    fn assemble(callable: F, cache: S) -> Self {
        Self {
            callable,
            cache,
            hits: 0,
            misses: 0,
            _signature: PhantomData,
        }
    }

    /// Chama o callable memoizado.
    ///
    /// Num acerto devolve o valor armazenado sem invocar o callable. Num
    /// erro invoca o callable, armazena o resultado e devolve o valor
    /// armazenado. Se o callable entrar em pânico nada é armazenado.
    pub fn call(&mut self, args: Args) -> S::Output<'_> {
        let handle = match self.cache.lookup(&args) {
            Some(handle) => {
                self.hits += 1;
                tracing::trace!(hits = self.hits, "Memo cache hit");
                handle
            }
            None => {
                self.misses += 1;
                tracing::debug!(
                    misses = self.misses,
                    size = self.cache.len(),
                    "Memo cache miss, invoking callable"
                );
                let value = self.callable.invoke(args.clone());
                self.cache.insert_if_absent(args, value)
            }
        };
        self.cache.resolve(handle)
    }

    /// Devolve o valor armazenado para `args` sem nunca invocar o callable.
    ///
    /// Não conta como acerto nem como erro.
    pub fn peek(&self, args: &Args) -> Option<S::Output<'_>> {
        self.cache
            .lookup(args)
            .map(|handle| self.cache.resolve(handle))
    }

    /// Indica se `args` está no cache.
    pub fn contains(&self, args: &Args) -> bool {
        self.cache.lookup(args).is_some()
    }

    /// Número de entradas no cache.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Indica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            capacity: self.cache.capacity().map(|c| c.get()),
            hits: self.hits,
            misses: self.misses,
            evictions: self.cache.evictions(),
        }
    }
}

impl<F, Args, S> fmt::Debug for Memoizer<F, Args, S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoizer")
            .field("callable", &type_name::<F>())
            .field("cache", &self.cache)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Fábricas
// ═══════════════════════════════════════════════════════════════════════════

/// Memoiza `callable` com cache ilimitado.
///
/// `call` devolve `&R`: o armazenamento nunca é invalidado, então o
/// empréstimo vale até a próxima chamada.
///
/// Callables sem argumentos ou com retorno de tamanho zero são rejeitados
/// em tempo de compilação:
///
/// ```compile_fail
/// let mut constant = memora::memoize(|| 1u8);
/// constant.call(());
/// ```
///
/// ```compile_fail
/// let mut discard = memora::memoize(|_: u8| ());
/// discard.call((1,));
/// ```
///
/// ```
/// let mut identity = memora::memoize(|x: u8| x);
/// assert_eq!(*identity.call((1,)), 1);
/// ```
pub fn memoize<F, Args>(callable: F) -> Memoizer<F, Args, UnboundedCache<Args, F::Output>>
where
    F: Signature<Args>,
    Args: Ord + Clone,
    F::Output: Clone,
{
    const {
        assert!(F::ARITY > 0, "Callable with no arguments cannot be memoized");
        assert!(
            size_of::<F::Output>() > 0,
            "Callable with zero-sized return type cannot be memoized"
        );
    };
    tracing::debug!(
        callable = type_name::<F>(),
        arity = F::ARITY,
        "Creating unbounded memoizer"
    );
    Memoizer::assemble(callable, UnboundedCache::new())
}

/// Memoiza `callable` com cache limitado a `CAPACITY` entradas.
///
/// `call` devolve `R` por cópia, porque uma inserção posterior pode remover
/// a entrada que acabou de ser lida. `CAPACITY == 0` é rejeitado em tempo
/// de compilação, assim como em [`memoize`] callables sem argumentos ou com
/// retorno de tamanho zero:
///
/// ```compile_fail
/// let mut identity = memora::memoize_with_lru::<0, _, _>(|x: u8| x);
/// identity.call((1,));
/// ```
///
/// ```compile_fail
/// let mut constant = memora::memoize_with_lru::<2, _, _>(|| 1u8);
/// constant.call(());
/// ```
///
/// ```compile_fail
/// let mut discard = memora::memoize_with_lru::<2, _, _>(|_: u8| ());
/// discard.call((1,));
/// ```
///
/// ```
/// let mut identity = memora::memoize_with_lru::<1, _, _>(|x: u8| x);
/// assert_eq!(identity.call((1,)), 1);
/// ```
pub fn memoize_with_lru<const CAPACITY: usize, F, Args>(
    callable: F,
) -> Memoizer<F, Args, BoundedCache<Args, F::Output>>
where
    F: Signature<Args>,
    Args: Ord + Clone,
    F::Output: Clone,
{
    let capacity = const {
        assert!(F::ARITY > 0, "Callable with no arguments cannot be memoized");
        assert!(
            size_of::<F::Output>() > 0,
            "Callable with zero-sized return type cannot be memoized"
        );
        match NonZeroUsize::new(CAPACITY) {
            Some(capacity) => capacity,
            None => panic!("LRU cache capacity must be greater than 0"),
        }
    };
    tracing::debug!(
        callable = type_name::<F>(),
        arity = F::ARITY,
        capacity = CAPACITY,
        "Creating bounded memoizer"
    );
    Memoizer::assemble(callable, BoundedCache::new(capacity))
}

/// Memoiza `callable` com a estratégia escolhida em tempo de execução.
///
/// As mesmas violações de contrato de [`memoize`] e [`memoize_with_lru`]
/// são devolvidas como erro. `call` devolve `R` por cópia.
pub fn memoize_with<F, Args>(
    callable: F,
    kind: CacheKind,
) -> MemoResult<Memoizer<F, Args, ConfiguredCache<Args, F::Output>>>
where
    F: Signature<Args>,
    Args: Ord + Clone,
    F::Output: Clone,
{
    Memoizer::new(callable, ConfiguredCache::new(kind))
}
