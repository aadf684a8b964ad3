//! Invariants that hold for every key.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use techload_generator::{derive_seed, generate, TechLoad};
use techload_types::Job;

const KEY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn random_keys(seed: u64, n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(0..12);
            (0..len)
                .map(|_| KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

fn digit_count(n: u64) -> usize {
    n.to_string().len()
}

fn assert_job_invariants(key: &str, job: &Job) {
    assert_eq!(digit_count(job.account_number), 7, "account for {key:?}");
    assert_eq!(digit_count(job.phone), 10, "phone for {key:?}");
    let zip = job.location.zip.expect("zip is always drawn");
    assert_eq!(digit_count(zip), 5);

    let house = job
        .location
        .street_address
        .split(' ')
        .next()
        .expect("street address has a house number");
    assert!((3..=5).contains(&house.len()), "house number {house}");

    let (local, domain) = job.email.split_once('@').expect("email has a domain");
    assert!(local.contains(&job.last_name));
    assert!(domain.contains('.'));

    let (premises, rest) = job.facilities.split_last().expect("at least one facility");
    assert_eq!(premises.heading, "Prem");
    assert_eq!(premises.address, job.location.street_address);
    assert!(premises.wiring.is_none());
    assert!(rest.iter().all(|f| f.wiring.is_some()));

    if job.transport_type.is_fiber() {
        let headings: Vec<_> = job.facilities.iter().map(|f| f.heading.as_str()).collect();
        assert_eq!(headings, ["PFP", "CFST", "Prem"]);
        assert!(job.services.equipment[1].contains("ONT: -"));
    } else {
        assert!((1..=6).contains(&job.facilities.len()));
        assert_eq!(job.services.equipment[0], "AB Jack");
    }

    assert!((3..=9).contains(&job.history.len()));
    assert!(job.history[0].date < reference_date());
    for pair in job.history.windows(2) {
        assert!(pair[0].date >= pair[1].date, "history out of order for {key:?}");
    }

    assert!(!(job.services.pots_number.is_some() && job.services.voip_numbers.is_some()));
    if let Some(numbers) = &job.services.voip_numbers {
        assert!((1..=2).contains(&numbers.len()));
    }
}

#[test]
fn test_deterministic() {
    for key in random_keys(1, 50) {
        let a = generate(&key, None, reference_date());
        let b = generate(&key, None, reference_date());
        assert_eq!(a, b, "key {key:?}");
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn test_larger_count_extends_default_list() {
    for key in random_keys(2, 30) {
        let base = generate(&key, None, reference_date());
        let extended = generate(&key, Some(base.len() as i64 + 3), reference_date());
        assert_eq!(extended.len(), base.len() + 3);
        assert_eq!(&extended[..base.len()], &base[..]);
    }
}

#[test]
fn test_non_positive_count_falls_back() {
    for key in ["ab123c", "zz999z", "xy000q"] {
        let expected = TechLoad::new(key, None, reference_date()).generated_count();
        for requested in [None, Some(0), Some(-1), Some(i64::MIN)] {
            let jobs = generate(key, requested, reference_date());
            assert_eq!(jobs.len(), expected, "{key:?} with {requested:?}");
        }
    }
}

#[test]
fn test_generated_count_bounded() {
    for key in random_keys(3, 500) {
        let generator = TechLoad::new(&key, None, reference_date());
        assert!(generator.generated_count() <= 7);
        assert_eq!(generator.seed(), derive_seed(&key));
    }
}

#[test]
fn test_record_invariants_across_keys() {
    for key in random_keys(4, 100) {
        for job in generate(&key, Some(6), reference_date()) {
            assert_job_invariants(&key, &job);
        }
    }
}

#[test]
fn test_reference_date_only_moves_history() {
    let earlier = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
    let a = generate("ab123c", None, reference_date());
    let b = generate("ab123c", None, earlier);

    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.first_name, y.first_name);
        assert_eq!(x.facilities, y.facilities);
        assert_eq!(x.services, y.services);
        for (hx, hy) in x.history.iter().zip(&y.history) {
            assert_eq!(hx.info, hy.info);
            assert_eq!(reference_date() - hx.date, earlier - hy.date);
        }
    }
}
