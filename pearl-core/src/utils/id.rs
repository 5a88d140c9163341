//! Record ID generation
//!
//! IDs compose the current date with a random block, so they sort roughly
//! by creation time and stay readable at the till. Generators take the RNG
//! as a parameter; the `new_*` wrappers use the thread RNG.

use rand::Rng;

/// Generate an employee ID: last two digits of the year + a 5-digit random
/// block, e.g. `2641359`.
pub fn generate_employee_id<R: Rng>(rng: &mut R) -> String {
    let year = chrono::Local::now().format("%y");
    format!("{year}{}", rng.gen_range(10_000..=99_999))
}

pub fn new_employee_id() -> String {
    generate_employee_id(&mut rand::thread_rng())
}

/// Generate a user ID from the holder's name: uppercase initials + a
/// 4-digit random block, e.g. `BZ4413`.
///
/// Uniqueness is not checked against the store; the random block makes
/// collisions unlikely at back-office scale.
pub fn generate_user_id<R: Rng>(first_name: &str, last_name: &str, rng: &mut R) -> String {
    let initials: String = [first_name, last_name]
        .iter()
        .map(|name| {
            name.chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('X')
        })
        .collect();
    format!("{initials}{}", rng.gen_range(1_000..=9_999))
}

pub fn new_user_id(first_name: &str, last_name: &str) -> String {
    generate_user_id(first_name, last_name, &mut rand::thread_rng())
}
