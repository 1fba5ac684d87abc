//! Engine configuration.
//!
//! Values can come from code, from JSON (serde) or from `BF_*` environment
//! variables:
//!  - `BF_MODE`        `sequential` | `parallel`
//!  - `BF_WORKERS`     `auto` | positive integer
//!  - `BF_SYNC`        `atomic` | `locked`
//!  - `BF_EARLY_EXIT`  `1`/`true` | `0`/`false`

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Sequential,
    #[default]
    Parallel,
}

/// Size of the parallel worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Workers {
    /// One worker per logical CPU.
    #[default]
    Auto,
    Fixed(usize),
}

impl Workers {
    /// Always at least one.
    pub fn resolve(self) -> usize {
        match self { Workers::Auto => num_cpus::get(), Workers::Fixed(n) => n }.max(1)
    }
}

/// How concurrent writers lower entries of the shared next-round buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStrategy {
    /// Atomic fetch-min per slot.
    #[default]
    Atomic,
    /// One mutex around the whole buffer, held for a single read-compare-write.
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: Mode,
    pub workers: Workers,
    pub sync: SyncStrategy,
    /// Stop as soon as a round changes nothing. When false, exactly `n-1` rounds run.
    pub early_exit: bool,
}

impl Default for Config {
    fn default() -> Self { Self { mode: Mode::default(), workers: Workers::default(), sync: SyncStrategy::default(), early_exit: true } }
}

impl Config {
    pub fn sequential() -> Self { Self { mode: Mode::Sequential, ..Self::default() } }
    pub fn parallel(workers: Workers) -> Self { Self { mode: Mode::Parallel, workers, ..Self::default() } }

    pub fn with_sync(mut self, sync: SyncStrategy) -> Self { self.sync = sync; self }
    pub fn with_early_exit(mut self, early_exit: bool) -> Self { self.early_exit = early_exit; self }

    /// Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::InvalidConfig { key: "json", value: e.to_string() })
    }

    /// Defaults overridden by whichever `BF_*` variables are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(v) = lookup("BF_MODE") {
            cfg.mode = match v.trim().to_ascii_lowercase().as_str() {
                "sequential" | "seq" => Mode::Sequential,
                "parallel" | "par" => Mode::Parallel,
                _ => return Err(Error::InvalidConfig { key: "BF_MODE", value: v }),
            };
        }
        if let Some(v) = lookup("BF_WORKERS") {
            let t = v.trim();
            cfg.workers = if t.eq_ignore_ascii_case("auto") {
                Workers::Auto
            } else {
                match t.parse::<usize>() {
                    Ok(n) if n > 0 => Workers::Fixed(n),
                    _ => return Err(Error::InvalidConfig { key: "BF_WORKERS", value: v }),
                }
            };
        }
        if let Some(v) = lookup("BF_SYNC") {
            cfg.sync = match v.trim().to_ascii_lowercase().as_str() {
                "atomic" => SyncStrategy::Atomic,
                "locked" | "lock" | "mutex" => SyncStrategy::Locked,
                _ => return Err(Error::InvalidConfig { key: "BF_SYNC", value: v }),
            };
        }
        if let Some(v) = lookup("BF_EARLY_EXIT") {
            cfg.early_exit = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(Error::InvalidConfig { key: "BF_EARLY_EXIT", value: v }),
            };
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let m: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| m.get(k).cloned()
    }

    #[test]
    fn env_overrides() {
        let cfg = Config::from_lookup(lookup(&[("BF_MODE", "seq"), ("BF_WORKERS", "3"), ("BF_SYNC", "locked"), ("BF_EARLY_EXIT", "0")])).unwrap();
        assert_eq!(cfg, Config { mode: Mode::Sequential, workers: Workers::Fixed(3), sync: SyncStrategy::Locked, early_exit: false });
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn env_rejects_garbage() {
        assert!(matches!(Config::from_lookup(lookup(&[("BF_WORKERS", "0")])), Err(Error::InvalidConfig { key: "BF_WORKERS", .. })));
        assert!(matches!(Config::from_lookup(lookup(&[("BF_MODE", "gpu")])), Err(Error::InvalidConfig { key: "BF_MODE", .. })));
    }

    #[test]
    fn workers_never_zero() {
        assert_eq!(Workers::Fixed(0).resolve(), 1);
        assert!(Workers::Auto.resolve() >= 1);
    }

    #[test]
    fn json_config() {
        let cfg = Config::from_json(r#"{"mode":"sequential","workers":{"fixed":2}}"#).unwrap();
        assert_eq!(cfg.mode, Mode::Sequential);
        assert_eq!(cfg.workers, Workers::Fixed(2));
        assert!(cfg.early_exit);
        assert!(matches!(Config::from_json(r#"{"sync":"spin"}"#), Err(Error::InvalidConfig { key: "json", .. })));
    }
}
