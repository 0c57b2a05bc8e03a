//! End-to-end regression for the 1990-01-15 06:30 UT chart at Ujjain.

use approx::assert_abs_diff_eq;
use jyotish_ephem::normalize_deg;
use jyotish_rs::{
    BirthInput, ChartCache, ChartConfig, DoshaSource, Graha, Nakshatra, NatalChart, Precision,
    Rashi, compute_natal_chart, natal_chart,
};
use jyotish_vedic::ALL_GRAHAS;

const LAT: f64 = 23.1765;
const LON: f64 = 75.7885;

/// (graha, sidereal longitude, rashi, nakshatra, pada)
const EXPECTED: [(Graha, f64, Rashi, Nakshatra, u8); 9] = [
    (Graha::Surya, 271.1407, Rashi::Makara, Nakshatra::UttaraAshadha, 2),
    (Graha::Chandra, 140.9082, Rashi::Simha, Nakshatra::PurvaPhalguni, 3),
    (Graha::Buddh, 257.7998, Rashi::Dhanu, Nakshatra::PurvaAshadha, 2),
    (Graha::Shukra, 277.1238, Rashi::Makara, Nakshatra::UttaraAshadha, 4),
    (Graha::Mangal, 236.0461, Rashi::Vrischika, Nakshatra::Jyeshtha, 3),
    (Graha::Guru, 69.7478, Rashi::Mithuna, Nakshatra::Ardra, 1),
    (Graha::Shani, 263.529, Rashi::Dhanu, Nakshatra::PurvaAshadha, 4),
    (Graha::Rahu, 293.9916, Rashi::Makara, Nakshatra::Dhanishtha, 1),
    (Graha::Ketu, 113.9916, Rashi::Karka, Nakshatra::Ashlesha, 3),
];

fn scenario() -> NatalChart {
    compute_natal_chart("1990-01-15", "06:30", LAT, LON).unwrap()
}

#[test]
fn julian_day_and_ayanamsha() {
    let chart = scenario();
    assert_abs_diff_eq!(chart.julian_day, 2_447_906.770_833, epsilon = 1e-5);
    assert_abs_diff_eq!(chart.ayanamsa_deg, 23.710_858, epsilon = 1e-5);
}

#[test]
fn planet_positions() {
    let chart = scenario();
    for (graha, lon, rashi, nakshatra, pada) in EXPECTED {
        let p = chart.planet(graha).unwrap();
        assert_abs_diff_eq!(p.sidereal_deg(), lon, epsilon = 0.01);
        assert_eq!(p.rashi(), rashi, "{graha} rashi");
        assert_eq!(p.nakshatra(), nakshatra, "{graha} nakshatra");
        assert_eq!(p.point.pada, pada, "{graha} pada");
    }
}

#[test]
fn tropical_sun() {
    let chart = scenario();
    let sun = chart.planet(Graha::Surya).unwrap();
    assert_abs_diff_eq!(sun.point.tropical_deg, 294.8516, epsilon = 0.01);
}

#[test]
fn ascendant_and_mc() {
    let chart = scenario();
    assert_abs_diff_eq!(chart.ascendant.tropical_deg, 23.4146, epsilon = 0.01);
    assert_abs_diff_eq!(chart.ascendant.sidereal_deg, 359.7037, epsilon = 0.01);
    assert_abs_diff_eq!(chart.mc.tropical_deg, 286.3557, epsilon = 0.01);
    assert_eq!(chart.ascendant.rashi, Rashi::Meena);
}

#[test]
fn local_time_ascendant() {
    let birth = BirthInput::parse("1990-01-15", "06:30", LAT, LON)
        .unwrap()
        .with_utc_offset(330);
    let chart = natal_chart(&birth, &ChartConfig::default()).unwrap();
    assert_abs_diff_eq!(chart.ascendant.tropical_deg, 283.5031, epsilon = 0.01);
    assert_eq!(chart.ascendant.rashi, Rashi::Dhanu);
}

#[test]
fn ketu_opposes_rahu_exactly() {
    let chart = scenario();
    let rahu = chart.planet(Graha::Rahu).unwrap().point;
    let ketu = chart.planet(Graha::Ketu).unwrap().point;
    assert_eq!(ketu.sidereal_deg, normalize_deg(rahu.sidereal_deg + 180.0));
    assert_eq!(ketu.tropical_deg, normalize_deg(rahu.tropical_deg + 180.0));
}

#[test]
fn houses_follow_ascendant() {
    let chart = scenario();
    for (i, house) in chart.houses.iter().enumerate() {
        assert_eq!(house.number as usize, i + 1);
        let expected = normalize_deg(chart.ascendant.sidereal_deg + 30.0 * i as f64);
        assert_abs_diff_eq!(house.longitude_deg, expected, epsilon = 1e-9);
        assert_eq!(house.rashi.index(), (chart.ascendant.rashi.index() + i as u8) % 12);
    }
}

#[test]
fn all_indices_in_range() {
    let chart = scenario();
    for graha in ALL_GRAHAS {
        let p = chart.planet(graha).unwrap().point;
        assert!((0.0..360.0).contains(&p.sidereal_deg));
        assert!((0.0..360.0).contains(&p.tropical_deg));
        assert!(p.rashi_index < 12);
        assert!(p.nakshatra_index < 27);
        assert!((1..=4).contains(&p.pada));
        assert!((0.0..30.0).contains(&p.degrees_in_rashi));
    }
}

#[test]
fn dosha_balance() {
    let doshas = scenario().doshas.unwrap();
    assert_eq!(doshas.source, DoshaSource::Computed);
    assert_eq!(
        doshas.vata as u32 + doshas.pitta as u32 + doshas.kapha as u32,
        100
    );
    assert_eq!((doshas.vata, doshas.pitta, doshas.kapha), (11, 33, 56));
}

#[test]
fn recomputation_is_identical() {
    assert_eq!(scenario(), scenario());
}

#[test]
fn cache_returns_identical_chart() {
    let cache = ChartCache::default();
    let birth = BirthInput::parse("1990-01-15", "06:30", LAT, LON).unwrap();
    let config = ChartConfig::default();
    let a = cache.natal_chart(&birth, &config).unwrap();
    let b = cache.natal_chart(&birth, &config).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, scenario());
}

#[test]
fn fast_precision_keeps_luminaries_close() {
    let birth = BirthInput::parse("1990-01-15", "06:30", LAT, LON).unwrap();
    let fast = ChartConfig {
        precision: Precision::Fast,
        ..ChartConfig::default()
    };
    let fast = natal_chart(&birth, &fast).unwrap();
    let standard = scenario();
    assert_eq!(
        fast.planet(Graha::Surya).unwrap().sidereal_deg(),
        standard.planet(Graha::Surya).unwrap().sidereal_deg()
    );
    assert_abs_diff_eq!(
        fast.planet(Graha::Chandra).unwrap().sidereal_deg(),
        standard.planet(Graha::Chandra).unwrap().sidereal_deg(),
        epsilon = 0.1
    );
    assert_eq!(fast.ascendant, standard.ascendant);
}

#[test]
fn json_uses_english_planet_keys() {
    let json = serde_json::to_value(scenario()).unwrap();
    let planets = json["planets"].as_object().unwrap();
    for key in ["Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn"] {
        assert!(planets.contains_key(key), "missing {key}");
    }
    assert_eq!(planets.len(), 9);
    assert_eq!(json["ascendant"]["rashi"], "Meena");
}

#[test]
fn json_round_trip() {
    let chart = scenario();
    let text = serde_json::to_string(&chart).unwrap();
    let back: NatalChart = serde_json::from_str(&text).unwrap();
    assert_eq!(back.ascendant.rashi, chart.ascendant.rashi);
    assert_eq!(back.config, chart.config);
    for graha in ALL_GRAHAS {
        let (a, b) = (chart.planet(graha).unwrap(), back.planet(graha).unwrap());
        assert_eq!(a.rashi(), b.rashi());
        assert_abs_diff_eq!(a.sidereal_deg(), b.sidereal_deg(), epsilon = 1e-12);
    }
}
