//! Experience constraints and the post-ranking experience filter.
//!
//! A query yields an [`ExperienceConstraint`]; each candidate yields an
//! [`ExperienceSpan`] parsed from its structured profile field or, failing
//! that, its transcript. [`ExperienceFilter`] keeps the candidates whose span
//! satisfies the constraint:
//!
//! | Constraint     | Keep when                                    |
//! |----------------|----------------------------------------------|
//! | `Minimum(m)`   | `span.min >= m`                              |
//! | `Exact(n)`     | `span.min <= n <= span.max`, or a bound is n |
//! | `Range(lo,hi)` | `span.min <= hi && span.max >= lo` (overlap) |
//!
//! `Range` matching is overlap, not containment: a "4-6 years" candidate
//! satisfies "2-5 years". That is a product-policy choice.

pub mod constraint;
pub mod filter;
pub mod span;

#[cfg(test)]
mod tests;

pub use constraint::ExperienceConstraint;
pub use filter::{ExperienceFilter, ExperienceVerdict};
pub use span::ExperienceSpan;
