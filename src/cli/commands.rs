//! Implementação dos comandos CLI do Memora.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use serde::Serialize;

use crate::cache::CacheKind;
use crate::memo::memoize_with;
use crate::types::config::{Config, StrategyName};
use crate::types::stats::CacheStats;
use crate::{MemoError, MemoResult};

/// Writes a default memora.toml into the specified directory.
pub fn init(path: Option<PathBuf>) -> MemoResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("memora.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        println!("Use 'memora config' to inspect it.");
        return Ok(());
    }

    Config::default_config().save(&config_path)?;

    println!("Memora initialized successfully!");
    println!("Configuration created at: {}", config_path.display());

    Ok(())
}

/// Uma chamada reproduzida pelo comando `simulate`.
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedCall {
    pub x: i64,
    pub y: i64,
    pub value: i64,
    pub hit: bool,
    /// Invocações acumuladas do callable após esta chamada.
    pub invocations: u64,
}

/// Resultado do comando `simulate`.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub cache: CacheKind,
    pub calls: Vec<SimulatedCall>,
    pub stats: CacheStats,
}

/// Parseia uma chamada no formato `x,y`.
pub fn parse_call(raw: &str) -> MemoResult<(i64, i64)> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| MemoError::other(format!("Chamada inválida '{}': use x,y", raw)))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<i64>()
            .map_err(|e| MemoError::other(format!("Chamada inválida '{}': {}", raw, e)))
    };

    Ok((parse(x)?, parse(y)?))
}

/// Resolve a estratégia: flags da CLI têm precedência sobre a configuração.
pub fn resolve_kind(
    config: &Config,
    strategy: Option<StrategyName>,
    capacity: Option<usize>,
) -> MemoResult<CacheKind> {
    let mut cache = config.cache.clone();
    if let Some(strategy) = strategy {
        cache.strategy = strategy;
    }
    if let Some(capacity) = capacity {
        cache.capacity = capacity;
    }
    cache.kind()
}

/// Reproduz as chamadas contra `x + y` memoizado.
pub fn run_simulation(calls: &[(i64, i64)], kind: CacheKind) -> MemoResult<SimulationReport> {
    let invocations = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&invocations);

    let mut add = memoize_with(
        move |x: i64, y: i64| {
            counter.set(counter.get() + 1);
            x.wrapping_add(y)
        },
        kind,
    )?;

    let mut records = Vec::with_capacity(calls.len());
    for &(x, y) in calls {
        let before = invocations.get();
        let value = add.call((x, y));
        records.push(SimulatedCall {
            x,
            y,
            value,
            hit: invocations.get() == before,
            invocations: invocations.get(),
        });
    }

    Ok(SimulationReport {
        cache: kind,
        calls: records,
        stats: add.stats(),
    })
}

/// Executa o comando `simulate`.
pub fn simulate(
    raw_calls: &[String],
    strategy: Option<StrategyName>,
    capacity: Option<usize>,
    json: bool,
    config: &Config,
) -> MemoResult<()> {
    let kind = resolve_kind(config, strategy, capacity)?;
    let calls = raw_calls
        .iter()
        .map(|raw| parse_call(raw))
        .collect::<MemoResult<Vec<_>>>()?;

    tracing::debug!("Simulando {} chamadas com cache {}", calls.len(), kind);

    let report = run_simulation(&calls, kind)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Cache: {}\n", report.cache);
    for call in &report.calls {
        let marker = if call.hit { "hit " } else { "miss" };
        println!(
            "  [{}] f({}, {}) = {}  (invocações: {})",
            marker, call.x, call.y, call.value, call.invocations
        );
    }

    let stats = &report.stats;
    println!();
    println!("Entradas:   {}", stats.size);
    println!("Hits:       {}", stats.hits);
    println!("Misses:     {}", stats.misses);
    println!("Remoções:   {}", stats.evictions);
    println!("Taxa de acerto: {:.1}%", stats.hit_rate() * 100.0);

    Ok(())
}

/// Mostra a configuração efetiva.
pub fn config_cmd(config: &Config) -> MemoResult<()> {
    let content = toml::to_string_pretty(config)?;
    print!("{}", content);
    Ok(())
}

/// Mostra versão.
pub fn version() {
    println!("memora {}", env!("CARGO_PKG_VERSION"));
}
