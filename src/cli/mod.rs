//! Interface de linha de comando do Memora.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::config::StrategyName;

/// Memora - motor de memoização com caches ilimitado e limitado.
#[derive(Parser, Debug)]
#[command(name = "memora")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "memora.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cria memora.toml com a configuração padrão.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Reproduz chamadas `x,y` contra `x + y` memoizado.
    Simulate {
        /// Chamadas no formato `x,y`, na ordem de execução.
        #[arg(required = true)]
        calls: Vec<String>,

        /// Estratégia de cache (sobrescreve a configuração).
        #[arg(short, long)]
        strategy: Option<StrategyName>,

        /// Capacidade do cache limitado (sobrescreve a configuração).
        #[arg(long)]
        capacity: Option<usize>,

        /// Saída em JSON.
        #[arg(long)]
        json: bool,
    },

    /// Mostra a configuração efetiva.
    Config,

    /// Mostra versão.
    Version,
}
