//! Customer name and email generators.

use crate::cursor::Draw;
use crate::sampling::Sampling;
use crate::tables::{
    EMAIL_DOMAINS, EMAIL_PREFIXES, EMAIL_SUFFIXES, EMAIL_TOP_LEVEL, FIRST_NAMES, LAST_NAMES,
};

pub fn generate_first_name<D: Draw + ?Sized>(draws: &mut D) -> String {
    draws.pick(&FIRST_NAMES).to_string()
}

pub fn generate_last_name<D: Draw + ?Sized>(draws: &mut D) -> String {
    draws.pick(&LAST_NAMES).to_string()
}

/// Generate an email address from the customer's name.
///
/// Shape: `[prefix.]first|initial(.|_)last[.suffix][digits]@domain.tld`.
/// Optional parts only draw their value when their chance succeeds.
pub fn generate_email<D: Draw + ?Sized>(draws: &mut D, first: &str, last: &str) -> String {
    let mut email = String::new();

    if draws.chance(0.1) {
        email.push_str(*draws.pick(&EMAIL_PREFIXES));
        email.push('.');
    }

    if draws.chance(0.5) {
        email.extend(first.chars().take(1));
    } else {
        email.push_str(first);
    }

    email.push(if draws.chance(0.5) { '.' } else { '_' });
    email.push_str(last);

    if draws.chance(0.2) {
        email.push('.');
        email.push_str(*draws.pick(&EMAIL_SUFFIXES));
    }

    if draws.chance(0.5) {
        email.push_str(&draws.digits(2, Some(4)).to_string());
    }

    let domain = draws.pick(&EMAIL_DOMAINS);
    let top_level = draws.pick(&EMAIL_TOP_LEVEL);
    email.push_str(&format!("@{domain}.{top_level}"));

    email
}
