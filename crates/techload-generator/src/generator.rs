//! Job generator driving the field generators in record order.

use crate::cursor::{Cursor, Draw};
use crate::generators::{
    generate_appointment, generate_creature, generate_email, generate_facilities,
    generate_first_name, generate_history, generate_job_type, generate_last_name,
    generate_location, generate_services, generate_street_address, generate_transport_type,
};
use crate::sampling::Sampling;
use crate::seed::derive_seed;
use chrono::NaiveDate;
use techload_types::Job;
use tracing::debug;

/// Generator for one key's job list.
///
/// Construction consumes the two count draws, so the first job always starts
/// at cursor position 3. Jobs are produced in order and each one continues
/// the same cursor; job `n` therefore depends on every job before it.
#[derive(Debug, Clone)]
pub struct TechLoad {
    key: String,
    cursor: Cursor,
    reference_date: NaiveDate,
    generated_count: usize,
    job_count: usize,
    produced: usize,
}

impl TechLoad {
    /// Create a generator for `key`.
    ///
    /// `requested` overrides the drawn count only when it is positive; zero,
    /// negative and absent all fall back to the drawn count (0 to 7).
    /// Requested counts are not capped; use [`jobs`](Self::jobs) rather than
    /// [`into_jobs`](Self::into_jobs) to avoid holding them all at once.
    pub fn new(key: &str, requested: Option<i64>, reference_date: NaiveDate) -> Self {
        let seed = derive_seed(key);
        let mut cursor = Cursor::new(seed);
        let mean = (cursor.draw() * 7.0 + cursor.draw() * 7.0) / 2.0;
        let generated_count = (mean + 0.5).floor() as usize;

        let job_count = match requested {
            Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => generated_count,
        };

        debug!(
            key,
            seed,
            generated_count,
            job_count,
            %reference_date,
            "Initialized job generator"
        );

        Self {
            key: key.to_string(),
            cursor,
            reference_date,
            generated_count,
            job_count,
            produced: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn seed(&self) -> i64 {
        self.cursor.seed()
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Count drawn from the key, whether or not it is used.
    pub fn generated_count(&self) -> usize {
        self.generated_count
    }

    /// Number of jobs this generator will produce in total.
    pub fn job_count(&self) -> usize {
        self.job_count
    }

    /// Number of draws consumed so far.
    pub fn cursor_position(&self) -> u64 {
        self.cursor.position()
    }

    /// Number of jobs still to be produced.
    pub fn remaining(&self) -> usize {
        self.job_count - self.produced
    }

    /// Produce the next job, or `None` once `job_count` jobs have been made.
    pub fn next_job(&mut self) -> Option<Job> {
        if self.produced >= self.job_count {
            return None;
        }

        let job = build_job(&mut self.cursor, &self.key, self.reference_date);
        self.produced += 1;
        debug!(
            index = self.produced - 1,
            position = self.cursor.position(),
            transport = %job.transport_type,
            "Generated job"
        );
        Some(job)
    }

    /// Lazily produce the remaining jobs.
    pub fn jobs(&mut self) -> JobIterator<'_> {
        JobIterator { generator: self }
    }

    /// Produce all remaining jobs.
    pub fn into_jobs(mut self) -> Vec<Job> {
        let mut jobs = Vec::new();
        while let Some(job) = self.next_job() {
            jobs.push(job);
        }
        jobs
    }
}

/// Generate the full job list for `key`.
///
/// Pure: the same key, count and reference date always give the same list.
pub fn generate(key: &str, requested: Option<i64>, reference_date: NaiveDate) -> Vec<Job> {
    TechLoad::new(key, requested, reference_date).into_jobs()
}

/// Iterator that lazily generates jobs.
pub struct JobIterator<'a> {
    generator: &'a mut TechLoad,
}

impl Iterator for JobIterator<'_> {
    type Item = Job;

    fn next(&mut self) -> Option<Self::Item> {
        self.generator.next_job()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.generator.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for JobIterator<'_> {}

fn build_job<D: Draw + ?Sized>(draws: &mut D, key: &str, reference_date: NaiveDate) -> Job {
    let first_name = generate_first_name(draws);
    let last_name = generate_last_name(draws);
    let street_address = generate_street_address(draws);
    let job_type = generate_job_type(draws);
    let transport_type = generate_transport_type(draws, job_type);
    let account_number = draws.digits(7, None);
    let location = generate_location(draws, &street_address);
    let appointment = generate_appointment(draws);
    let email = generate_email(draws, &first_name, &last_name);
    let phone = draws.digits(10, None);
    let history = generate_history(draws, key, reference_date);
    let facilities = generate_facilities(draws, transport_type, &street_address);
    let services = generate_services(draws, transport_type);
    let creature = generate_creature(draws);

    Job {
        first_name,
        last_name,
        account_number,
        location,
        appointment,
        email,
        phone,
        history,
        job_type,
        transport_type,
        facilities,
        services,
        creature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_generated_counts() {
        for (key, seed, count) in [
            ("ab123c", 1_425_925_102, 5),
            ("", 0, 3),
            ("a", 97, 2),
            ("zz999z", 687_786_559, 3),
            ("tr99aa", 866_948_418, 4),
            ("hello world", 1_794_106_052, 6),
            ("AB123C", 1_923_356_658, 4),
        ] {
            let generator = TechLoad::new(key, None, reference_date());
            assert_eq!(generator.seed(), seed, "seed for {key:?}");
            assert_eq!(generator.generated_count(), count, "count for {key:?}");
            assert_eq!(generator.job_count(), count);
            assert_eq!(generator.cursor_position(), 2);
        }
    }

    #[test]
    fn test_requested_count_overrides_only_when_positive() {
        let date = reference_date();
        assert_eq!(TechLoad::new("ab123c", Some(12), date).job_count(), 12);
        assert_eq!(TechLoad::new("ab123c", Some(0), date).job_count(), 5);
        assert_eq!(TechLoad::new("ab123c", Some(-3), date).job_count(), 5);
        assert_eq!(TechLoad::new("ab123c", Some(12), date).generated_count(), 5);
    }

    #[test]
    fn test_cursor_ends_after_all_jobs() {
        let mut generator = TechLoad::new("ab123c", None, reference_date());
        let jobs: Vec<_> = generator.jobs().collect();
        assert_eq!(jobs.len(), 5);
        assert_eq!(generator.cursor_position(), 385);
        assert_eq!(generator.next_job(), None);
    }

    #[test]
    fn test_iterator_is_exact_size() {
        let mut generator = TechLoad::new("tr99aa", Some(7), reference_date());
        generator.next_job();
        let iter = generator.jobs();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.count(), 6);
    }

    #[test]
    fn test_first_job_fields() {
        let jobs = generate("ab123c", None, reference_date());
        let job = &jobs[0];
        assert_eq!(job.first_name, "Yvette");
        assert_eq!(job.last_name, "Payne");
        assert_eq!(job.account_number, 8_746_047);
        assert_eq!(job.location.zip, Some(51066));
        assert_eq!(job.location.street_address, "637 Washington St");
        assert_eq!(job.location.state, "IN");
        assert_eq!(job.location.city, "Indianapolis");
        assert_eq!(job.appointment, "4-8");
        assert_eq!(job.email, "Y_Payne463@gmail.co.uk");
        assert_eq!(job.phone, 4_292_405_614);
        assert_eq!(job.facilities.len(), 3);
        assert_eq!(job.facilities[2].heading, "Prem");
        assert_eq!(job.services.equipment, ["AB Jack", "210"]);
        assert_eq!(job.services.internet_speed, Some(10));
        assert_eq!(
            job.creature.as_ref().map(|c| c.name.as_str()),
            Some("bulbasaur")
        );
    }
}
