use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use meridian_angle::{decimal_degrees_to_dms, decimal_degrees_to_dms_rounded, join_sexagesimal};
use meridian_body::{
    ALL_EVENTS, BodyError, ElementTable, GeoLocation, OrbitalElements, Planet, RiseSetConfig,
    RiseSetEvent, RiseSetResult, TwilightKind, compute_rise_set, equation_of_time,
    planet_position_by_name, sun_distance_and_angular_size, sun_position,
};
use meridian_frames::{
    EclipticCoord, EquatorialCoord, HorizonCoord, HourAngleCoord, angular_separation,
    ecliptic_to_equatorial, equatorial_to_ecliptic, horizon_to_equatorial,
    hour_angle_to_horizon, hour_angle_to_right_ascension, local_sidereal_time_at,
    mean_obliquity_deg, right_ascension_to_hour_angle,
};
use meridian_time::{
    CalendarDate, CivilDateTime, ClockFormat, TimeZone, UniversalTime, day_number_in_year,
    day_of_week, easter_date, greenwich_sidereal_to_universal, gregorian_date_to_julian_day,
    hms_to_decimal_hours, julian_day_to_gregorian_date, local_sidereal_time, local_to_universal,
    to_clock_time, to_elapsed_time, universal_to_greenwich_sidereal, universal_to_local,
};
use serde::Serialize;
use serde_json::json;

#[derive(Parser)]
#[command(name = "meridian", about = "Positional astronomy calculator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// JSON file of orbital elements keyed by planet name, replacing the
    /// built-in epoch 2010.0 table
    #[arg(long, global = true)]
    elements: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ZoneArgs {
    /// Zone offset from UT in hours, east positive
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    zone: f64,
    /// Daylight-saving shift in whole hours
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    dst: i32,
    /// Additional daylight-saving minutes
    #[arg(long, default_value_t = 0)]
    dst_minutes: u32,
}

impl ZoneArgs {
    fn time_zone(&self) -> TimeZone {
        or_exit(TimeZone::new(self.zone, self.dst, self.dst_minutes))
    }
}

#[derive(Args)]
struct LocationArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// Altitude above sea level in meters
    #[arg(long, default_value_t = 0.0)]
    alt: f64,
}

impl LocationArgs {
    fn location(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lon, self.alt)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Meridiem {
    Am,
    Pm,
}

#[derive(Clone, Copy, ValueEnum)]
enum TwilightArg {
    Civil,
    Nautical,
    Astronomical,
}

impl From<TwilightArg> for TwilightKind {
    fn from(arg: TwilightArg) -> Self {
        match arg {
            TwilightArg::Civil => Self::Civil,
            TwilightArg::Nautical => Self::Nautical,
            TwilightArg::Astronomical => Self::Astronomical,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day of a date (and optional time of day)
    JulianDay {
        /// YYYY-MM-DD or YYYY-MM-DDThh:mm:ss; a leading '-' marks a BC year
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// Calendar date of a Julian Day
    Calendar {
        /// Julian Day number
        jd: f64,
    },
    /// Day of the week
    Weekday {
        /// YYYY-MM-DD
        date: String,
    },
    /// 0-based day number within the year
    DayNumber {
        /// YYYY-MM-DD
        date: String,
    },
    /// Date of Easter Sunday
    Easter {
        /// Gregorian year
        year: i32,
    },
    /// Convert between decimal hours and h:m:s
    Hms {
        /// Decimal hours (e.g. 18.52) or hh:mm:ss
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Wrap decimal hours onto a 24-hour clock face
        #[arg(long)]
        clock: bool,
        /// Read an hh:mm:ss value as a 12-hour clock reading
        #[arg(long, value_enum)]
        meridiem: Option<Meridiem>,
    },
    /// Convert between decimal degrees and d:m:s
    Dms {
        /// Decimal degrees (e.g. -8.225) or dd:mm:ss
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Local civil time to Universal Time
    LocalToUt {
        /// YYYY-MM-DDThh:mm:ss
        datetime: String,
        #[command(flatten)]
        zone: ZoneArgs,
        /// Convert Universal Time back to local civil time instead
        #[arg(long)]
        reverse: bool,
    },
    /// Greenwich sidereal time of a UT instant
    Gst {
        /// YYYY-MM-DDThh:mm:ss (UT)
        datetime: String,
        /// Read the time of day as GST and print UT instead
        #[arg(long)]
        inverse: bool,
    },
    /// Local sidereal time of a UT instant
    Lst {
        /// YYYY-MM-DDThh:mm:ss (UT)
        datetime: String,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Equatorial to horizon coordinates
    Horizon {
        /// Declination, decimal degrees or dd:mm:ss
        #[arg(long, allow_hyphen_values = true)]
        dec: String,
        /// Observer latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Hour angle, decimal hours or hh:mm:ss
        #[arg(long, conflicts_with_all = ["ra", "datetime"])]
        ha: Option<String>,
        /// Right ascension, decimal hours or hh:mm:ss (needs --datetime and --lon)
        #[arg(long, requires_all = ["datetime", "lon"])]
        ra: Option<String>,
        /// Local civil YYYY-MM-DDThh:mm:ss
        #[arg(long)]
        datetime: Option<String>,
        /// Observer longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
        #[command(flatten)]
        zone: ZoneArgs,
    },
    /// Horizon to equatorial coordinates
    Equatorial {
        /// Altitude, decimal degrees or dd:mm:ss
        #[arg(long, allow_hyphen_values = true)]
        alt: String,
        /// Azimuth, decimal degrees or dd:mm:ss
        #[arg(long)]
        az: String,
        /// Observer latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Local civil YYYY-MM-DDThh:mm:ss, to also report right ascension
        #[arg(long, requires = "lon")]
        datetime: Option<String>,
        /// Observer longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
        #[command(flatten)]
        zone: ZoneArgs,
    },
    /// Ecliptic to equatorial coordinates (mean obliquity of date)
    Ecliptic {
        /// Ecliptic longitude (or right ascension with --inverse)
        #[arg(allow_hyphen_values = true)]
        first: String,
        /// Ecliptic latitude (or declination with --inverse)
        #[arg(allow_hyphen_values = true)]
        second: String,
        /// YYYY-MM-DD fixing the obliquity
        #[arg(long)]
        date: String,
        /// Convert right ascension/declination to ecliptic instead
        #[arg(long)]
        inverse: bool,
    },
    /// Position of the Sun
    Sun {
        /// Local civil YYYY-MM-DDThh:mm:ss
        datetime: String,
        #[command(flatten)]
        zone: ZoneArgs,
    },
    /// Sun–Earth distance and angular diameter
    SunDistance {
        /// Local civil YYYY-MM-DDThh:mm:ss
        datetime: String,
        #[command(flatten)]
        zone: ZoneArgs,
    },
    /// Sunrise and sunset
    Sunrise {
        /// YYYY-MM-DD (local civil date)
        date: String,
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        zone: ZoneArgs,
        /// Include every twilight event
        #[arg(long)]
        all: bool,
    },
    /// Morning and evening twilight
    Twilight {
        /// YYYY-MM-DD (local civil date)
        date: String,
        #[arg(long, value_enum, default_value = "astronomical")]
        kind: TwilightArg,
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        zone: ZoneArgs,
    },
    /// Equation of time (apparent minus mean solar time)
    EquationOfTime {
        /// YYYY-MM-DD
        date: String,
    },
    /// Geocentric position of a planet
    Planet {
        /// Planet name: Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune
        name: String,
        /// Local civil YYYY-MM-DDThh:mm:ss
        datetime: String,
        #[command(flatten)]
        zone: ZoneArgs,
    },
    /// Angle between two equatorial directions
    Separation {
        /// First right ascension, decimal hours or hh:mm:ss
        #[arg(long)]
        ra1: String,
        /// First declination, decimal degrees or dd:mm:ss
        #[arg(long, allow_hyphen_values = true)]
        dec1: String,
        /// Second right ascension
        #[arg(long)]
        ra2: String,
        /// Second declination
        #[arg(long, allow_hyphen_values = true)]
        dec2: String,
    },
}

fn exit_with(msg: impl Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| exit_with(e))
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value)));
}

fn parse_date(s: &str) -> Result<CalendarDate, String> {
    // "YYYY-MM-DD", a leading '-' marks a negative year
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let parts: Vec<&str> = rest.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("year {:?}: {e}", parts[0]))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("month {:?}: {e}", parts[1]))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("day {:?}: {e}", parts[2]))?;
    CalendarDate::new(sign * year, month, day).map_err(|e| e.to_string())
}

fn parse_datetime(s: &str) -> Result<CivilDateTime, String> {
    // "YYYY-MM-DDThh:mm:ss", "YYYY-MM-DDThh:mm" or "YYYY-MM-DD" (midnight)
    let s = s.trim_end_matches('Z');
    let (date_part, time_part) = s.split_once('T').unwrap_or((s, "00:00:00"));
    let date = parse_date(date_part)?;
    let fields: Vec<&str> = time_part.split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(format!("expected hh:mm[:ss], got {time_part}"));
    }
    let hour: u32 = fields[0].parse().map_err(|e| format!("hour {:?}: {e}", fields[0]))?;
    let minute: u32 = fields[1].parse().map_err(|e| format!("minute {:?}: {e}", fields[1]))?;
    let second: f64 = match fields.get(2) {
        Some(f) => f.parse().map_err(|e| format!("second {f:?}: {e}"))?,
        None => 0.0,
    };
    CivilDateTime::new(date.year, date.month, date.day, hour, minute, second)
        .map_err(|e| e.to_string())
}

/// Decimal value or `[-]whole:mm[:ss]`; the sign applies to the whole value.
fn parse_sexagesimal(s: &str) -> Result<f64, String> {
    let s = s.trim();
    if !s.contains(':') {
        return s.parse::<f64>().map_err(|e| format!("{s:?}: {e}"));
    }
    let fields: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(format!("expected whole:mm[:ss], got {s}"));
    }
    let whole: f64 = fields[0].parse().map_err(|e| format!("{:?}: {e}", fields[0]))?;
    let whole = if s.starts_with('-') { -whole.abs() } else { whole };
    let minutes: u32 = fields[1].parse().map_err(|e| format!("{:?}: {e}", fields[1]))?;
    let seconds: f64 = match fields.get(2) {
        Some(f) => f.parse().map_err(|e| format!("{f:?}: {e}"))?,
        None => 0.0,
    };
    join_sexagesimal(whole, minutes, seconds).map_err(|e| e.to_string())
}

fn load_elements(path: &Path) -> ElementTable {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with(format!("failed to read {}: {e}", path.display())));
    let by_name: BTreeMap<String, OrbitalElements> = or_exit(serde_json::from_str(&text));
    let entries: Result<Vec<(Planet, OrbitalElements)>, BodyError> = by_name
        .into_iter()
        .map(|(name, el)| Ok((Planet::from_name(&name)?, el)))
        .collect();
    let table = or_exit(ElementTable::from_entries(or_exit(entries)));
    log::info!("loaded orbital elements from {}", path.display());
    table
}

fn hms_text(hours: f64) -> String {
    or_exit(to_elapsed_time(hours)).to_string()
}

fn clock_text(hours: f64) -> String {
    or_exit(to_clock_time(hours)).to_string()
}

fn dms_text(deg: f64) -> String {
    or_exit(decimal_degrees_to_dms_rounded(deg)).to_string()
}

fn print_rise_set(events: &[RiseSetEvent], results: &[RiseSetResult], json: bool) {
    if json {
        print_json(&results);
        return;
    }
    for (event, result) in events.iter().zip(results) {
        match result {
            RiseSetResult::Event {
                local_date,
                local_hours,
                universal_date,
                universal_hours,
                azimuth_deg,
                ..
            } => println!(
                "  {:18} {local_date} {} local  {universal_date} {} UT  azimuth {:.2}°",
                event.name(),
                clock_text(*local_hours),
                clock_text(*universal_hours),
                azimuth_deg
            ),
            RiseSetResult::NeverRises => {
                println!("  {:18} does not occur (Sun stays below)", event.name())
            }
            RiseSetResult::NeverSets => {
                println!("  {:18} does not occur (Sun stays above)", event.name())
            }
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json = cli.json;
    let table = match &cli.elements {
        Some(path) => load_elements(path),
        None => ElementTable::builtin().clone(),
    };

    match cli.command {
        Commands::JulianDay { date } => {
            let t = or_exit(parse_datetime(&date));
            let day = f64::from(t.day) + t.decimal_hours() / 24.0;
            let jd = or_exit(gregorian_date_to_julian_day(t.year, t.month, day));
            if json {
                print_json(&json!({ "julian_day": jd }));
            } else {
                println!("JD {jd:.6}");
            }
        }

        Commands::Calendar { jd } => {
            let date = or_exit(julian_day_to_gregorian_date(jd));
            if json {
                print_json(&date);
            } else {
                println!("{:04}-{:02}-{:09.6}", date.year, date.month, date.day);
            }
        }

        Commands::Weekday { date } => {
            let d = or_exit(parse_date(&date));
            let weekday = or_exit(day_of_week(d.year, d.month, d.day));
            if json {
                print_json(&json!({ "date": d.to_string(), "weekday": weekday.name() }));
            } else {
                println!("{d} is a {weekday}");
            }
        }

        Commands::DayNumber { date } => {
            let d = or_exit(parse_date(&date));
            let n = or_exit(day_number_in_year(d.year, d.month, d.day));
            if json {
                print_json(&json!({ "date": d.to_string(), "day_number": n }));
            } else {
                println!("{d}: day {n} of {}", d.year);
            }
        }

        Commands::Easter { year } => {
            let e = easter_date(year);
            if json {
                print_json(&e);
            } else {
                println!("Easter Sunday {year}: {year:04}-{:02}-{:02}", e.month, e.day);
            }
        }

        Commands::Hms {
            value,
            clock,
            meridiem,
        } => {
            if value.contains(':') {
                let fields: Vec<&str> = value.split(':').collect();
                if !(2..=3).contains(&fields.len()) {
                    exit_with(format!("expected hh:mm[:ss], got {value}"));
                }
                let hours: u32 = or_exit(fields[0].parse());
                let minutes: u32 = or_exit(fields[1].parse());
                let seconds: f64 = match fields.get(2) {
                    Some(f) => or_exit(f.parse()),
                    None => 0.0,
                };
                let format = match meridiem {
                    None => ClockFormat::TwentyFourHour,
                    Some(Meridiem::Am) => ClockFormat::TwelveHour { pm: false },
                    Some(Meridiem::Pm) => ClockFormat::TwelveHour { pm: true },
                };
                let decimal = or_exit(hms_to_decimal_hours(hours, minutes, seconds, format));
                if json {
                    print_json(&json!({ "decimal_hours": decimal }));
                } else {
                    println!("{decimal:.6} h");
                }
            } else {
                let hours: f64 = or_exit(value.parse());
                let hms = if clock {
                    or_exit(to_clock_time(hours))
                } else {
                    or_exit(to_elapsed_time(hours))
                };
                if json {
                    print_json(&hms);
                } else {
                    println!("{hms}");
                }
            }
        }

        Commands::Dms { value } => {
            if value.contains(':') {
                let deg = or_exit(parse_sexagesimal(&value));
                if json {
                    print_json(&json!({ "decimal_degrees": deg }));
                } else {
                    println!("{deg:.6}°");
                }
            } else {
                let deg: f64 = or_exit(value.parse());
                let exact = or_exit(decimal_degrees_to_dms(deg));
                if json {
                    print_json(&exact);
                } else {
                    println!("{}", dms_text(deg));
                }
            }
        }

        Commands::LocalToUt {
            datetime,
            zone,
            reverse,
        } => {
            let t = or_exit(parse_datetime(&datetime));
            let tz = zone.time_zone();
            if reverse {
                let ut = or_exit(UniversalTime::new(
                    t.year, t.month, t.day, t.hour, t.minute, t.second,
                ));
                let local = or_exit(universal_to_local(&ut, &tz));
                if json {
                    print_json(&local);
                } else {
                    println!("{ut} → {local} local");
                }
            } else {
                let ut = or_exit(local_to_universal(&t, &tz));
                if json {
                    print_json(&ut);
                } else {
                    println!("{t} local → {ut}");
                }
            }
        }

        Commands::Gst { datetime, inverse } => {
            let t = or_exit(parse_datetime(&datetime));
            if inverse {
                let ut = or_exit(greenwich_sidereal_to_universal(t.decimal_hours(), &t.date()));
                if json {
                    print_json(&json!({ "universal_hours": ut }));
                } else {
                    println!("GST {} on {} → UT {}", hms_text(t.decimal_hours()), t.date(), hms_text(ut));
                }
            } else {
                let ut = or_exit(UniversalTime::new(
                    t.year, t.month, t.day, t.hour, t.minute, t.second,
                ));
                let gst = or_exit(universal_to_greenwich_sidereal(&ut));
                if json {
                    print_json(&json!({ "gst_hours": gst }));
                } else {
                    println!("{ut} → GST {}", hms_text(gst));
                }
            }
        }

        Commands::Lst { datetime, lon } => {
            let t = or_exit(parse_datetime(&datetime));
            let ut = or_exit(UniversalTime::new(
                t.year, t.month, t.day, t.hour, t.minute, t.second,
            ));
            let gst = or_exit(universal_to_greenwich_sidereal(&ut));
            let lst = or_exit(local_sidereal_time(gst, lon));
            if json {
                print_json(&json!({ "gst_hours": gst, "lst_hours": lst }));
            } else {
                println!("GST {}  LST {}", hms_text(gst), hms_text(lst));
            }
        }

        Commands::Horizon {
            dec,
            lat,
            ha,
            ra,
            datetime,
            lon,
            zone,
        } => {
            let dec = or_exit(parse_sexagesimal(&dec));
            let hour_angle = match (ha, ra, datetime, lon) {
                (Some(ha), _, _, _) => or_exit(parse_sexagesimal(&ha)),
                (None, Some(ra), Some(datetime), Some(lon)) => {
                    let local = or_exit(parse_datetime(&datetime));
                    let ra = or_exit(parse_sexagesimal(&ra));
                    or_exit(right_ascension_to_hour_angle(ra, &local, &zone.time_zone(), lon))
                }
                _ => exit_with("give --ha, or --ra with --datetime and --lon"),
            };
            let hor = or_exit(hour_angle_to_horizon(&HourAngleCoord::new(hour_angle, dec), lat));
            if json {
                print_json(&hor);
            } else {
                println!(
                    "HA {}  →  altitude {}  azimuth {}",
                    hms_text(hour_angle),
                    dms_text(hor.altitude_deg),
                    dms_text(hor.azimuth_deg)
                );
            }
        }

        Commands::Equatorial {
            alt,
            az,
            lat,
            datetime,
            lon,
            zone,
        } => {
            let hor = HorizonCoord::new(
                or_exit(parse_sexagesimal(&alt)),
                or_exit(parse_sexagesimal(&az)),
            );
            let ha = or_exit(horizon_to_equatorial(&hor, lat));
            let ra = match (datetime, lon) {
                (Some(datetime), Some(lon)) => {
                    let local = or_exit(parse_datetime(&datetime));
                    let tz = zone.time_zone();
                    let lst = or_exit(local_sidereal_time_at(&local, &tz, lon));
                    log::debug!("local sidereal time {lst:.6}h");
                    Some(or_exit(hour_angle_to_right_ascension(
                        ha.hour_angle_hours,
                        &local,
                        &tz,
                        lon,
                    )))
                }
                _ => None,
            };
            if json {
                print_json(&json!({ "hour_angle": ha, "right_ascension_hours": ra }));
            } else {
                print!(
                    "HA {}  Dec {}",
                    hms_text(ha.hour_angle_hours),
                    dms_text(ha.declination_deg)
                );
                match ra {
                    Some(ra) => println!("  RA {}", hms_text(ra)),
                    None => println!(),
                }
            }
        }

        Commands::Ecliptic {
            first,
            second,
            date,
            inverse,
        } => {
            let d = or_exit(parse_date(&date));
            let obliquity = mean_obliquity_deg(or_exit(d.julian_day()));
            let a = or_exit(parse_sexagesimal(&first));
            let b = or_exit(parse_sexagesimal(&second));
            if inverse {
                let ecl = or_exit(equatorial_to_ecliptic(&EquatorialCoord::new(a, b), obliquity));
                if json {
                    print_json(&ecl);
                } else {
                    println!(
                        "λ {}  β {}  (ε {obliquity:.6}°)",
                        dms_text(ecl.longitude_deg),
                        dms_text(ecl.latitude_deg)
                    );
                }
            } else {
                let eq = or_exit(ecliptic_to_equatorial(&EclipticCoord::new(a, b), obliquity));
                if json {
                    print_json(&eq);
                } else {
                    println!(
                        "RA {}  Dec {}  (ε {obliquity:.6}°)",
                        hms_text(eq.right_ascension_hours),
                        dms_text(eq.declination_deg)
                    );
                }
            }
        }

        Commands::Sun { datetime, zone } => {
            let t = or_exit(parse_datetime(&datetime));
            let pos = or_exit(sun_position(&t, &zone.time_zone()));
            if json {
                print_json(&pos);
            } else {
                println!(
                    "Sun: λ {}  RA {}  Dec {}",
                    dms_text(pos.ecliptic_longitude_deg),
                    hms_text(pos.equatorial.right_ascension_hours),
                    dms_text(pos.equatorial.declination_deg)
                );
            }
        }

        Commands::SunDistance { datetime, zone } => {
            let t = or_exit(parse_datetime(&datetime));
            let d = or_exit(sun_distance_and_angular_size(&t, &zone.time_zone()));
            if json {
                print_json(&d);
            } else {
                println!(
                    "distance {:.4e} km  angular diameter {}",
                    d.distance_km,
                    dms_text(d.angular_diameter_deg)
                );
            }
        }

        Commands::Sunrise {
            date,
            location,
            zone,
            all,
        } => {
            let d = or_exit(parse_date(&date));
            let loc = location.location();
            let tz = zone.time_zone();
            let config = RiseSetConfig::default();
            let events: Vec<RiseSetEvent> = if all {
                ALL_EVENTS.to_vec()
            } else {
                vec![RiseSetEvent::Sunrise, RiseSetEvent::Sunset]
            };
            let results: Vec<RiseSetResult> = events
                .iter()
                .map(|&e| or_exit(compute_rise_set(&d, &loc, &tz, e, &config)))
                .collect();
            if !json {
                println!("Rise/set on {d} at {:.4}°N, {:.4}°E:", loc.latitude_deg, loc.longitude_deg);
            }
            print_rise_set(&events, &results, json);
        }

        Commands::Twilight {
            date,
            kind,
            location,
            zone,
        } => {
            let d = or_exit(parse_date(&date));
            let loc = location.location();
            let tz = zone.time_zone();
            let (dawn, dusk) = TwilightKind::from(kind).events();
            let config = RiseSetConfig::default();
            let results = [
                or_exit(compute_rise_set(&d, &loc, &tz, dawn, &config)),
                or_exit(compute_rise_set(&d, &loc, &tz, dusk, &config)),
            ];
            print_rise_set(&[dawn, dusk], &results, json);
        }

        Commands::EquationOfTime { date } => {
            let d = or_exit(parse_date(&date));
            let eot = or_exit(equation_of_time(&d));
            if json {
                print_json(&json!({ "date": d.to_string(), "equation_of_time_hours": eot }));
            } else {
                println!("{d}: equation of time {} ({:+.2} min)", hms_text(eot), eot * 60.0);
            }
        }

        Commands::Planet {
            name,
            datetime,
            zone,
        } => {
            let t = or_exit(parse_datetime(&datetime));
            let pos = or_exit(planet_position_by_name(&name, &t, &zone.time_zone(), &table));
            if json {
                print_json(&pos);
            } else {
                println!(
                    "{}: RA {}  Dec {}  λ {}  β {}  distance {:.4} AU",
                    pos.planet,
                    hms_text(pos.equatorial.right_ascension_hours),
                    dms_text(pos.equatorial.declination_deg),
                    dms_text(pos.ecliptic.longitude_deg),
                    dms_text(pos.ecliptic.latitude_deg),
                    pos.distance_au
                );
            }
        }

        Commands::Separation {
            ra1,
            dec1,
            ra2,
            dec2,
        } => {
            let a = EquatorialCoord::new(
                or_exit(parse_sexagesimal(&ra1)),
                or_exit(parse_sexagesimal(&dec1)),
            );
            let b = EquatorialCoord::new(
                or_exit(parse_sexagesimal(&ra2)),
                or_exit(parse_sexagesimal(&dec2)),
            );
            let sep = or_exit(angular_separation(&a, &b));
            if json {
                print_json(&json!({ "separation_deg": sep }));
            } else {
                println!("separation {}", dms_text(sep));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_year() {
        let d = parse_date("-100-02-17").unwrap();
        assert_eq!((d.year, d.month, d.day), (-100, 2, 17));
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(parse_date("2024/02/18").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn parses_datetime_forms() {
        let t = parse_datetime("1980-04-22T14:36:51.67Z").unwrap();
        assert_eq!((t.hour, t.minute), (14, 36));
        assert!((t.second - 51.67).abs() < 1e-12);
        let t = parse_datetime("2003-07-27").unwrap();
        assert_eq!((t.hour, t.minute, t.second), (0, 0, 0.0));
        let t = parse_datetime("2003-07-27T06:30").unwrap();
        assert_eq!((t.hour, t.minute), (6, 30));
    }

    #[test]
    fn parses_sexagesimal() {
        assert!((parse_sexagesimal("23:13:10").unwrap() - 23.219_444).abs() < 1e-6);
        assert!((parse_sexagesimal("-8:13:30").unwrap() + 8.225).abs() < 1e-12);
        assert!((parse_sexagesimal("-0:30").unwrap() + 0.5).abs() < 1e-12);
        assert_eq!(parse_sexagesimal("12.5").unwrap(), 12.5);
        assert!(parse_sexagesimal("10:75:00").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
