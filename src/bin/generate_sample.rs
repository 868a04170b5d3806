use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use interface_jc::config::DEFAULT_DATA_DIR;

/// Write synthetic interface I-V sweeps for trying out `interface-jc`.
#[derive(Debug, Parser)]
#[command(name = "generate-sample", version, about)]
struct Args {
    /// Output directory, created if missing.
    #[arg(default_value = DEFAULT_DATA_DIR)]
    out_dir: PathBuf,

    /// Number of interface files to write.
    #[arg(long, default_value_t = 4)]
    interfaces: usize,

    /// PRNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Power-law E-J characteristic, V = Vc * (I / Ic)^n.
fn power_law_voltage(current: f64, ic: f64, n: f64, vc: f64) -> f64 {
    vc * (current / ic).powf(n)
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn write_interface(path: &Path, rng: &mut SimpleRng) -> Result<usize> {
    const POSITIONS: usize = 5;
    const STEPS: usize = 40;
    const VC: f64 = 1e-6;
    const NOISE: f64 = 5e-8;

    let base_ic = rng.uniform(5e9, 2e10);
    let n = rng.uniform(15.0, 40.0);

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["position", "current", "voltage"])?;

    let mut rows = 0;
    for p in 0..POSITIONS {
        let position = p as f64 * 0.5;
        let ic = base_ic * rng.uniform(0.85, 1.15);
        for step in 0..=STEPS {
            let current = 1.3 * ic * step as f64 / STEPS as f64;
            let voltage = power_law_voltage(current, ic, n, VC) + rng.gauss(0.0, NOISE);
            writer.write_record(&[
                format!("{position}"),
                format!("{current:e}"),
                format!("{voltage:e}"),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;
    Ok(rows)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut rng = SimpleRng::new(args.seed);
    for i in 0..args.interfaces {
        let path = args.out_dir.join(format!("interface_{:02}.csv", i + 1));
        let rows = write_interface(&path, &mut rng)?;
        log::info!("Wrote {rows} rows to {}", path.display());
    }

    println!(
        "Wrote {} interface file(s) to {}",
        args.interfaces,
        args.out_dir.display()
    );
    Ok(())
}
