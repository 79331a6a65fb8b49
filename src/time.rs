use hifitime::{Epoch, TimeScale};

use crate::constants::DecimalYear;

fn start_of_year(year: i32) -> Epoch {
    Epoch::from_gregorian(year, 1, 1, 0, 0, 0, 0, TimeScale::UTC)
}

/// Transformation from an epoch to a decimal year
///
/// Argument
/// --------
/// * `epoch`: any [`Epoch`]; the calendar year is taken in UTC
///
/// Return
/// ------
/// * the year plus the elapsed fraction of it, using the actual length of that year
///   (365 or 366 days), e.g. `2021-07-02T12:00:00 UTC` → `2021.5`
pub fn decimal_year(epoch: &Epoch) -> DecimalYear {
    let (year, ..) = epoch.to_gregorian_utc();
    let start = start_of_year(year);
    let length = start_of_year(year + 1) - start;

    let fraction = (*epoch - start).to_seconds() / length.to_seconds();
    (f64::from(year) + fraction) as DecimalYear
}

/// Transformation from a decimal year to an epoch (UTC)
///
/// Argument
/// --------
/// * `dyear`: a decimal year, e.g. `2020.5`
///
/// Return
/// ------
/// * the corresponding [`Epoch`], inverse of [`decimal_year`] up to `f32` resolution
pub fn epoch_from_decimal_year(dyear: DecimalYear) -> Epoch {
    let dyear = f64::from(dyear);
    let year = dyear.floor();
    let start = start_of_year(year as i32);
    let length = start_of_year(year as i32 + 1) - start;

    start + length * (dyear - year)
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::str::FromStr;

    #[test]
    fn test_decimal_year_start_of_year() {
        let epoch = Epoch::from_str("2020-01-01T00:00:00 UTC").unwrap();
        assert_eq!(decimal_year(&epoch), 2020.0);
    }

    #[test]
    fn test_decimal_year_mid_year() {
        // 2021 has 365 days: day 182.5 is the middle
        let epoch = Epoch::from_str("2021-07-02T12:00:00 UTC").unwrap();
        assert_relative_eq!(decimal_year(&epoch), 2021.5, epsilon = 1e-4);

        // 2020 is a leap year: 366 days, the middle is July 2nd 00:00
        let epoch = Epoch::from_str("2020-07-02T00:00:00 UTC").unwrap();
        assert_relative_eq!(decimal_year(&epoch), 2020.5, epsilon = 1e-4);
    }

    #[test]
    fn test_epoch_from_decimal_year() {
        let epoch = epoch_from_decimal_year(2015.0);
        assert_eq!(epoch, Epoch::from_str("2015-01-01T00:00:00 UTC").unwrap());

        let epoch = epoch_from_decimal_year(2022.25);
        assert_relative_eq!(decimal_year(&epoch), 2022.25, epsilon = 1e-4);
    }
}
