//! Estatísticas de uso de um memoizador.

use serde::{Deserialize, Serialize};

/// Estatísticas do cache de um memoizador.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Capacidade máxima (`None` para cache ilimitado).
    pub capacity: Option<usize>,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses), igual ao número de invocações.
    pub misses: u64,

    /// Número de entradas removidas por capacidade.
    pub evictions: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total de chamadas observadas.
    pub fn calls(&self) -> u64 {
        self.hits + self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_empty() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStats {
            size: 1,
            capacity: Some(10),
            hits: 2,
            misses: 1,
            evictions: 0,
        };
        assert_eq!(stats.calls(), 3);
        assert!((stats.hit_rate() - 0.666).abs() < 0.01);
    }
}
