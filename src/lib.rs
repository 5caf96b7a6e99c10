//! # Memora
//!
//! Motor de memoização para callables puros.
//!
//! Dado um callable, o Memora devolve um [`Memoizer`] que guarda os
//! resultados por tupla de argumentos e só invoca o callable para
//! argumentos ainda não vistos.
//!
//! ## Estratégias
//!
//! - [`memoize`] - cache ilimitado sobre mapa ordenado; `call` devolve `&R`
//! - [`memoize_with_lru`] - capacidade fixa com remoção da inserção mais
//!   antiga; `call` devolve `R` por cópia
//! - [`memoize_with`] - estratégia escolhida em tempo de execução
//!   (p.ex. via [`Config`]); `call` devolve `R` por cópia
//!
//! ```
//! use memora::memoize_with_lru;
//!
//! let mut add = memoize_with_lru::<1, _, _>(|x: i8, y: i32| i32::from(x) + y);
//! assert_eq!(add.call((5, 1)), 6);
//! assert_eq!(add.call((42, 1)), 43); // remove (5, 1)
//! assert!(!add.contains(&(5, 1)));
//! ```
//!
//! ## Módulos
//!
//! - [`cache`] - Estratégias de cache
//! - [`memo`] - Memoizador e fábricas
//! - [`signature`] - Resolução de assinatura de callables
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Tipos compartilhados

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod memo;
pub mod signature;
pub mod types;

pub use cache::{BoundedCache, CacheKind, CacheStrategy, ConfiguredCache, Handle, UnboundedCache};
pub use memo::{memoize, memoize_with, memoize_with_lru, Memoizer};
pub use signature::Signature;
pub use types::config::Config;
pub use types::errors::{MemoError, MemoResult};
pub use types::stats::CacheStats;
