use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use jyotish_rs::{
    BirthInput, ChartConfig, ChartError, NatalChart, VedicDailyContext, natal_chart,
    vedic_daily_context,
};
use jyotish_time::{CivilDateTime, jd_to_calendar, jd_to_centuries};
use jyotish_vedic::{deg_to_dms, nakshatra_from_longitude, rashi_from_longitude};
use log::LevelFilter;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "jyotish", about = "Vedic natal chart and panchang CLI")]
struct Cli {
    /// Log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// TOML chart config (precision, ayanamsha, node_mode, dosha, dosha_basis)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart for a birth date, time and place
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// UTC offset of the birth time in minutes, east positive
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        utc_offset: i32,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Sun, Moon and panchang for a date
    Daily {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (HH:MM or HH:MM:SS), default 00:00
        #[arg(long)]
        time: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Julian Day of a civil date and time
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (HH:MM or HH:MM:SS)
        #[arg(long, default_value = "00:00")]
        time: String,
    },
    /// Civil date and time of a Julian Day
    Calendar {
        /// Julian Day
        jd: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), ChartError> {
    let config = match &cli.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    log::debug!("chart config: {config:?}");

    match cli.command {
        Commands::Chart {
            date,
            time,
            lat,
            lon,
            utc_offset,
            json,
        } => {
            let birth = BirthInput::parse(&date, &time, lat, lon)?.with_utc_offset(utc_offset);
            let chart = natal_chart(&birth, &config)?;
            if json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Daily { date, time, json } => {
            let civil = match time {
                Some(t) => CivilDateTime::parse(&date, &t)?,
                None => CivilDateTime::parse_date(&date)?,
            };
            let ctx = vedic_daily_context(&civil, &config)?;
            if json {
                print_json(&ctx);
            } else {
                print_daily(&ctx);
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(require_finite("lon", lon));
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(require_finite("lon", lon));
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
            println!("Lord: {}", info.nakshatra.lord().english_name());
        }

        Commands::Dms { deg } => {
            println!("{}", deg_to_dms(require_finite("deg", deg)));
        }

        Commands::Jd { date, time } => {
            let civil = CivilDateTime::parse(&date, &time)?;
            let jd = civil.to_jd();
            println!("{civil}");
            println!("JD: {jd:.6}");
            println!("T (centuries since J2000): {:.9}", jd_to_centuries(jd));
        }

        Commands::Calendar { jd } => {
            let jd = require_finite("jd", jd);
            println!("{}", format_calendar(jd));
        }
    }
    Ok(())
}

fn check_finite(name: &str, value: f64) -> Result<f64, String> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{name} must be a finite number, got {value}"))
    }
}

/// Exit with an error for NaN or infinite numeric input.
fn require_finite(name: &str, value: f64) -> f64 {
    check_finite(name, value).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// `YYYY-MM-DD hh:mm:ss.s` for a Julian Day.
fn format_calendar(jd: f64) -> String {
    let (year, month, day_frac) = jd_to_calendar(jd);
    let day = day_frac.floor();
    let total_seconds = (day_frac - day) * 86_400.0;
    let hour = (total_seconds / 3600.0).floor();
    let minute = ((total_seconds - hour * 3600.0) / 60.0).floor();
    let second = total_seconds - hour * 3600.0 - minute * 60.0;
    format!("{year:04}-{month:02}-{day:02.0} {hour:02.0}:{minute:02.0}:{second:04.1}")
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: cannot serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_chart(chart: &NatalChart) {
    let birth = &chart.birth;
    println!(
        "Birth: {} (UTC offset {} min) at {:.4}, {:.4}",
        birth.datetime, birth.utc_offset_minutes, birth.latitude_deg, birth.longitude_deg
    );
    println!("JD: {:.6}", chart.julian_day);
    println!(
        "Ayanamsha ({:?}): {:.6} deg",
        chart.config.ayanamsha, chart.ayanamsa_deg
    );
    println!();

    let asc = &chart.ascendant;
    println!(
        "Ascendant: {:.4} deg  {}  {}  {} pada {}",
        asc.sidereal_deg,
        asc.rashi,
        asc.dms,
        asc.nakshatra.name(),
        asc.pada
    );
    println!(
        "MC:        {:.4} deg  {}  {}",
        chart.mc.sidereal_deg, chart.mc.rashi, chart.mc.dms
    );
    println!();

    println!("Planets:");
    for position in chart.planets.values() {
        let house = chart.house_of(position.graha).unwrap_or(0);
        println!("  {position}  house {house}");
    }
    println!();

    println!("Houses:");
    for house in &chart.houses {
        println!(
            "  {:>2}  {:>9.4} deg  {:<22} lord {}",
            house.number,
            house.longitude_deg,
            house.rashi.to_string(),
            house.lord.english_name()
        );
    }

    if let Some(d) = &chart.doshas {
        println!();
        println!(
            "Doshas: Vata {}%  Pitta {}%  Kapha {}%  (dominant {:?}, {:?})",
            d.vata,
            d.pitta,
            d.kapha,
            d.dominant(),
            d.source
        );
    }
}

fn print_daily(ctx: &VedicDailyContext) {
    println!("Date: {}  ({})", ctx.date, ctx.vaar);
    println!("JD: {:.6}", ctx.julian_day);
    println!("Ayanamsha: {:.6} deg", ctx.ayanamsa_deg);
    println!("Sun:    {}", ctx.sun);
    println!("Moon:   {}", ctx.moon);
    println!(
        "Tithi:  {} ({} {} of 15, {:.2} deg elapsed)",
        ctx.tithi.tithi,
        ctx.tithi.paksha.name(),
        ctx.tithi.tithi_in_paksha,
        ctx.tithi.degrees_in_tithi
    );
    println!("Yoga:   {} (index {})", ctx.yoga.yoga, ctx.yoga.yoga_index);
    println!(
        "Karana: {} (slot {})",
        ctx.karana.karana, ctx.karana.karana_index
    );
    println!(
        "Phase:  {} ({:.1}% illuminated, angle {:.2} deg)",
        ctx.lunar_phase.phase,
        ctx.lunar_phase.illumination * 100.0,
        ctx.lunar_phase.phase_angle_deg
    );
}
