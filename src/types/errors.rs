//! Tipos de erro do Memora.

use thiserror::Error;

/// Tipo de resultado padrão do Memora.
pub type MemoResult<T> = Result<T, MemoError>;

/// Erros possíveis no Memora.
///
/// Os três primeiros são violações de contrato detectadas na construção de
/// um memoizador. Um memoizador já construído nunca falha em tempo de chamada.
#[derive(Error, Debug)]
pub enum MemoError {
    #[error("Tipo de retorno '{type_name}' não pode ser memoizado: {reason}")]
    UnmemoizableReturnType {
        type_name: &'static str,
        reason: &'static str,
    },

    #[error("Callable '{type_name}' não recebe argumentos e não pode ser memoizado")]
    UnmemoizableArity { type_name: &'static str },

    #[error("Capacidade de cache inválida: {0} (deve ser maior que 0)")]
    InvalidCacheCapacity(usize),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl MemoError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Indica se o erro é uma violação de contrato de construção.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::UnmemoizableReturnType { .. }
                | Self::UnmemoizableArity { .. }
                | Self::InvalidCacheCapacity(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MemoError::InvalidCacheCapacity(0);
        assert!(err.to_string().contains("0"));

        let err = MemoError::UnmemoizableArity { type_name: "fn()" };
        assert!(err.to_string().contains("fn()"));
    }

    #[test]
    fn test_contract_violation_classification() {
        assert!(MemoError::InvalidCacheCapacity(0).is_contract_violation());
        assert!(MemoError::UnmemoizableReturnType {
            type_name: "()",
            reason: "sem valor",
        }
        .is_contract_violation());
        assert!(!MemoError::config("x").is_contract_violation());
        assert!(!MemoError::other("x").is_contract_violation());
    }
}
