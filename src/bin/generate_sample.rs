//! Writes a synthetic export in the raw layout the analyser expects: the
//! three long source columns appear twice and some cells are left empty.
//!
//! Usage: `generate_sample [OUTPUT]` (default `uso_energia_no_brasil.csv`).

use anyhow::{Context, Result};

const SOURCES: [&str; 3] = [
    "renewable_generation__twh_chart_elec_fossil_nuclear_renewables",
    "nuclear_generation__twh_chart_elec_fossil_nuclear_renewables",
    "fossil_generation__twh_chart_elec_fossil_nuclear_renewables",
];

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Exponential trend with multiplicative noise, kept strictly positive.
fn generation(base: f64, yearly_rate: f64, t: i64, noise: f64, rng: &mut SimpleRng) -> f64 {
    let trend = base * (1.0 + yearly_rate).powi(t as i32);
    (trend * (1.0 + rng.gauss(0.0, noise))).max(trend * 0.05)
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.3}")).unwrap_or_default()
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "uso_energia_no_brasil.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut header = vec!["Entity".to_string(), "Year".to_string()];
    // primary block, then the redundant alternate block
    for _ in 0..2 {
        header.extend(SOURCES.iter().map(|s| s.to_string()));
    }
    writer.write_record(&header)?;

    let mut rows = 0;
    for year in 1985..=2022_i64 {
        let t = year - 1985;
        let renewable = generation(180.0, 0.035, t, 0.04, &mut rng);
        let fossil = generation(20.0, 0.045, t, 0.15, &mut rng);
        // a second reactor comes online in 2000
        let nuclear = if year < 2000 {
            generation(1.5, 0.02, t, 0.4, &mut rng)
        } else {
            generation(6.0, 0.015, year - 2000, 0.1, &mut rng) + 6.0
        };

        let mut values = [Some(renewable), Some(nuclear), Some(fossil)];
        // roughly one cell in twelve is left empty
        for v in &mut values {
            if rng.next_f64() < 1.0 / 12.0 {
                *v = None;
            }
        }

        let mut record = vec!["Brazil".to_string(), year.to_string()];
        record.extend(values.iter().map(|v| cell(*v)));
        // alternate block: same figures rounded to one decimal
        record.extend(values.iter().map(|v| v.map(|x| format!("{x:.1}")).unwrap_or_default()));
        writer.write_record(&record)?;
        rows += 1;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} yearly rows to {output_path}");
    Ok(())
}
