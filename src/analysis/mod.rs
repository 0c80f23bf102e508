//! The three access log analyzers.
//!
//! Each analyzer consumes the same line sequence independently and owns
//! its own accumulator:
//!
//! - [`requests`] - Requests per IP address, sorted by volume
//! - [`endpoints`] - The single most frequently accessed path
//! - [`suspicious`] - IPs exceeding the failed-login threshold
//!
//! Lines that do not match an analyzer's pattern are silently skipped;
//! a line can contribute to any subset of the three tallies.

pub mod endpoints;
pub mod requests;
pub mod suspicious;

/// An IP address paired with an occurrence count.
///
/// Used both for the per-IP request tally and for the suspicious
/// activity set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpCount {
    pub ip: String,
    pub count: usize,
}
