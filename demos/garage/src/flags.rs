//! Command-line flags and the JSON config overlay.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;

use pk_core::{AllocationMode, SimConfig};

#[derive(StructOpt, Debug)]
#[structopt(name = "garage", about = "Discrete-time parking facility simulation")]
pub struct Flags {
    /// JSON file with a `SimConfig`; flags given on the command line win
    #[structopt(long = "config", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Grid width in cells
    #[structopt(long = "width")]
    pub width: Option<u32>,

    /// Grid height in cells
    #[structopt(long = "height")]
    pub height: Option<u32>,

    /// Probability of a spawn attempt per tick
    #[structopt(long = "spawn-rate")]
    pub spawn_rate: Option<f64>,

    /// FCFS, AUCTION or PRIORITY
    #[structopt(long = "mode")]
    pub mode: Option<AllocationMode>,

    #[structopt(long = "seed")]
    pub seed: Option<u64>,

    /// Ticks to simulate
    #[structopt(long = "ticks")]
    pub ticks: Option<u64>,

    /// Vehicle snapshot every N ticks, 0 for none
    #[structopt(long = "snapshot-every")]
    pub snapshot_every: Option<u64>,

    #[structopt(long = "output-dir", default_value = "output/garage", parse(from_os_str))]
    pub output_dir: PathBuf,
}

impl Flags {
    /// Defaults, then the JSON file, then explicit flags.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some(r) = self.spawn_rate {
            config.spawn_rate = r;
        }
        if let Some(m) = self.mode {
            config.mode = m;
        }
        if let Some(s) = self.seed {
            config.seed = s;
        }
        if let Some(t) = self.ticks {
            config.total_ticks = t;
        }
        if let Some(n) = self.snapshot_every {
            config.output_interval_ticks = n;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Flags {
        Flags::from_iter(std::iter::once("garage").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(parse(&[]).sim_config().unwrap(), SimConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = parse(&["--width", "12", "--mode", "auction", "--ticks", "50"]).sim_config().unwrap();
        assert_eq!(cfg.width, 12);
        assert_eq!(cfg.mode, AllocationMode::Auction);
        assert_eq!(cfg.total_ticks, 50);
        assert_eq!(cfg.height, SimConfig::default().height);
    }

    #[test]
    fn invalid_grid_is_rejected() {
        assert!(parse(&["--width", "2"]).sim_config().is_err());
    }

    #[test]
    fn json_config_then_flags() {
        let dir = std::env::temp_dir().join(format!("garage-flags-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cfg.json");
        fs::write(&path, r#"{ "width": 9, "mode": "PRIORITY", "seed": 3 }"#).unwrap();

        let cfg = parse(&["--config", path.to_str().unwrap(), "--seed", "11"]).sim_config().unwrap();
        assert_eq!(cfg.width, 9);
        assert_eq!(cfg.mode, AllocationMode::Priority);
        assert_eq!(cfg.seed, 11);
        assert_eq!(cfg.total_ticks, SimConfig::default().total_ticks);
        fs::remove_dir_all(&dir).unwrap();
    }
}
