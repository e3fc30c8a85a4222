//! Aggregation engine over the combined dataset
//!
//! Pure, read-only operations over [`CombinedDataset`]: every function
//! allocates its output and never mutates or aliases the dataset.
//!
//! The module is organized into logical components:
//! - [`monthly`] - monthly means and locality roll-ups
//! - [`exceedance`] - daily means and threshold-exceedance counting
//! - [`ranking`] - top/bottom station selection by exceedance count
//! - [`regional`] - regional (voivodeship) OR-reduced exceedance roll-up
//!
//! Missing-value semantics throughout: means ignore missing values, and a
//! group with no present value yields missing, never zero.
//!
//! [`CombinedDataset`]: crate::app::models::CombinedDataset

pub mod exceedance;
pub mod monthly;
pub mod ranking;
pub mod regional;

#[cfg(test)]
pub mod tests;

pub use exceedance::{daily_means, exceedance_days};
pub use monthly::{locality_mean, locality_means, monthly_means};
pub use ranking::top_bottom_stations;
pub use regional::regional_exceedance;

/// Arithmetic mean of the present values, `None` when none are present
pub(crate) fn mean_of(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;

    for value in values.flatten() {
        sum += value;
        count += 1;
    }

    if count == 0 { None } else { Some(sum / count as f64) }
}
