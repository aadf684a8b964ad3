//! `inspect` command handler: seed and cursor diagnostics for a key.

use chrono::Local;
use clap::Args;
use techload_generator::{Cursor, Draw, TechLoad};

/// Arguments for `techload inspect`.
#[derive(Args, Clone, Debug)]
pub struct InspectArgs {
    /// Key to inspect
    #[arg(long, short = 'k')]
    pub key: String,

    /// Number of leading cursor draws to show
    #[arg(long, default_value = "4")]
    pub draws: usize,
}

/// What the generator derives from a key before producing any job.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub seed: i64,
    pub generated_count: usize,
    pub draws: Vec<f64>,
}

/// Derive the seed, the drawn job count and the first `draws` cursor values.
pub fn inspect(key: &str, draws: usize) -> Inspection {
    let generator = TechLoad::new(key, None, Local::now().date_naive());
    let mut cursor = Cursor::new(generator.seed());
    Inspection {
        seed: generator.seed(),
        generated_count: generator.generated_count(),
        draws: (0..draws).map(|_| cursor.draw()).collect(),
    }
}

/// Run the inspect command.
pub fn run_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let inspection = inspect(&args.key, args.draws);

    println!("key:       {:?}", args.key);
    println!("seed:      {}", inspection.seed);
    println!("job count: {}", inspection.generated_count);
    for (i, draw) in inspection.draws.iter().enumerate() {
        println!("draw {:>3}:  {draw}", i + 1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_ab123c() {
        let inspection = inspect("ab123c", 4);
        assert_eq!(inspection.seed, 1_425_925_102);
        assert_eq!(inspection.generated_count, 5);
        assert_eq!(
            inspection.draws,
            [
                0.3424981156346139,
                0.9785550293726396,
                0.5574327643782591,
                0.19348967811628487
            ]
        );
    }
}
