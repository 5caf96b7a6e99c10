//! Tipos compartilhados do Memora.

pub mod config;
pub mod errors;
pub mod stats;
