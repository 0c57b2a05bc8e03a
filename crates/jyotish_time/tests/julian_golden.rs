//! Golden values for Julian Day conversion against published tables.

use approx::assert_abs_diff_eq;
use jyotish_time::{CivilDateTime, J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries};

#[test]
fn j2000_epoch_exact() {
    let t = CivilDateTime::parse("2000-01-01", "12:00").unwrap();
    assert_eq!(t.to_jd(), J2000_JD);
}

#[test]
fn reference_dates() {
    // Meeus, Astronomical Algorithms, Chapter 7 examples and table.
    let cases = [
        (1999, 1, 1.0, 2_451_179.5),
        (1987, 1, 27.0, 2_446_822.5),
        (1987, 6, 19.5, 2_446_966.0),
        (1988, 1, 27.0, 2_447_187.5),
        (1988, 6, 19.5, 2_447_332.0),
        (1900, 1, 1.0, 2_415_020.5),
        (1600, 1, 1.0, 2_305_447.5),
        (1600, 12, 31.0, 2_305_812.5),
    ];
    for (y, m, d, expected) in cases {
        let jd = calendar_to_jd(y, m, d);
        assert_abs_diff_eq!(jd, expected, epsilon = 1e-9);
    }
}

#[test]
fn birth_scenario_jd() {
    let t = CivilDateTime::parse("1990-01-15", "06:30").unwrap();
    assert_abs_diff_eq!(t.to_jd(), 2_447_906.770_833_333, epsilon = 1e-6);
    let midnight = CivilDateTime::parse_date("1990-01-15").unwrap();
    assert_eq!(midnight.to_jd(), 2_447_906.5);
}

#[test]
fn time_of_day_within_hundredth_of_day() {
    let t = CivilDateTime::parse("2000-01-01", "18:00").unwrap();
    assert_abs_diff_eq!(t.to_jd(), J2000_JD + 0.25, epsilon = 0.01);
}

#[test]
fn monotonic_across_year_boundaries() {
    let mut prev = f64::MIN;
    for year in [1899, 1900, 1999, 2000, 2023, 2024, 2100] {
        for month in 1..=12 {
            let jd = calendar_to_jd(year, month, 1.0);
            assert!(jd > prev, "{year}-{month}: {jd} <= {prev}");
            prev = jd;
        }
    }
}

#[test]
fn calendar_roundtrip() {
    let jd = 2_460_000.25;
    let (y, m, d) = jd_to_calendar(jd);
    assert_abs_diff_eq!(calendar_to_jd(y, m, d), jd, epsilon = 1e-8);
}

#[test]
fn centuries_scale() {
    let t = jd_to_centuries(calendar_to_jd(2100, 1, 1.5));
    assert_abs_diff_eq!(t, 1.0, epsilon = 1e-3);
}
