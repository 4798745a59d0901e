use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};

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
}

/// (code, centre lat, centre lng, permanent, stations)
const NETWORKS: [(&str, f64, f64, bool, usize); 6] = [
    ("AU", -25.0, 134.0, true, 12),
    ("IU", 10.0, -60.0, true, 8),
    ("GE", 48.0, 12.0, true, 10),
    ("XR", -20.0, 30.0, false, 9),
    ("ZA", 64.0, -18.0, false, 7),
    ("YW", 35.0, 138.0, false, 6),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let base = NaiveDate::from_ymd_opt(1995, 1, 1).context("invalid base date")?;
    let today = chrono::Local::now().date_naive();

    let output_path = "stations.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating stations.csv")?;
    writer.write_record([
        "network", "station", "start", "end", "lat", "lng", "elevation", "frequency", "type",
        "comment", "url1", "url2", "url3",
    ])?;

    let mut rows = 0usize;
    for &(code, lat0, lng0, permanent, count) in &NETWORKS {
        for i in 0..count {
            let name = format!("{code}{:02}", i + 1);

            let start = base + Days::new(rng.uniform(0.0, 9000.0) as u64);
            let end = if permanent {
                today
            } else {
                start + Days::new(rng.uniform(180.0, 1500.0) as u64)
            };

            let lat = (lat0 + rng.uniform(-8.0, 8.0)).clamp(-90.0, 90.0);
            let lng = (lng0 + rng.uniform(-12.0, 12.0)).clamp(-180.0, 180.0);
            let elevation = rng.uniform(-50.0, 2500.0).round();
            let frequency = if rng.next_f64() < 0.5 { 40 } else { 100 };

            let base_url = format!("https://example.org/rf/{code}/{name}");
            writer.write_record([
                code.to_string(),
                name.clone(),
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string(),
                format!("{lat:.4}"),
                format!("{lng:.4}"),
                format!("{elevation}"),
                frequency.to_string(),
                if permanent { "perm" } else { "temp" }.to_string(),
                String::new(),
                format!("{base_url}/stack.png"),
                format!("{base_url}/radial.html"),
                format!("{base_url}/transverse.html"),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {rows} stations in {} networks to {output_path}", NETWORKS.len());
    Ok(())
}
