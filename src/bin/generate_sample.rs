use anyhow::{Context, Result};
use serde::Serialize;

/// Row as written to disk. Year and budget are text so they can carry the
/// formatting noise the dashboard has to clean up.
#[derive(Serialize)]
struct SampleRow {
    name: String,
    genre: &'static str,
    year: String,
    rating: String,
    budget: String,
    box_office: String,
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

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Render a year the way scraped exports tend to: plain, with a thousands
/// separator, quoted, or not at all.
fn messy_year(year: u32, rng: &mut SimpleRng) -> String {
    match rng.next_u64() % 10 {
        0 => "N/A".to_string(),
        1 | 2 => format!("{},{:03}", year / 1000, year % 1000),
        3 => format!("\"{year}\""),
        _ => year.to_string(),
    }
}

fn messy_budget(budget: u64, rng: &mut SimpleRng) -> String {
    match rng.next_u64() % 8 {
        0 => String::new(),
        1 => "Unknown".to_string(),
        // Budgets are at least a million, so three groups always fit.
        2 | 3 => format!(
            "${},{:03},{:03}",
            budget / 1_000_000,
            (budget / 1_000) % 1_000,
            budget % 1_000
        ),
        4 => format!("{}.{} M", budget / 1_000_000, (budget % 1_000_000) / 100_000),
        _ => budget.to_string(),
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "IMDB Top.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let genres = ["Drama", "Crime", "Action", "Adventure", "Comedy", "Animation", "Biography"];
    let adjectives = ["Silent", "Last", "Golden", "Broken", "Hidden", "Endless", "Crimson"];
    let nouns = ["River", "Empire", "Witness", "Harbor", "Frontier", "Garden", "Signal"];

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut n_rows = 0;
    for adjective in &adjectives {
        for noun in &nouns {
            let year = 1930 + (rng.next_u64() % 94) as u32;
            let budget = (rng.range(1.0, 250.0) * 1_000_000.0) as u64;
            let box_office = budget as f64 * rng.range(0.3, 8.0);

            let row = SampleRow {
                name: format!("The {adjective} {noun}"),
                genre: *rng.pick(&genres),
                year: messy_year(year, &mut rng),
                rating: format!("{:.1}", rng.range(3.0, 9.5)),
                budget: messy_budget(budget, &mut rng),
                box_office: format!("{box_office:.0}"),
            };
            writer
                .serialize(&row)
                .with_context(|| format!("writing row {n_rows}"))?;
            n_rows += 1;
        }
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {n_rows} movies to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollar_budgets_are_grouped_by_thousands() {
        let mut rng = SimpleRng::new(7);
        let mut seen = 0;
        for budget in [1_000_000u64, 12_045_007, 249_999_999] {
            for _ in 0..64 {
                let text = messy_budget(budget, &mut rng);
                if let Some(digits) = text.strip_prefix('$') {
                    let groups: Vec<&str> = digits.split(',').collect();
                    assert!(groups[1..].iter().all(|g| g.len() == 3), "{text}");
                    assert_eq!(groups.concat().parse::<u64>().unwrap(), budget);
                    seen += 1;
                }
            }
        }
        assert!(seen > 0);
    }
}
