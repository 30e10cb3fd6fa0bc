//! tide-table: print a tide and current table for the Abra theater.
//!
//! Usage:
//!   tide-table                          table for the next 24h from now
//!   tide-table --start 475012.5         start at an epoch-hours instant
//!   tide-table --hours 12 --step 30     span and step control

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use abra_core::enums::{CurrentRegime, TideTrend};
use abra_tide::TideModel;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let start = match parse_f64(&args, "--start") {
        Some(s) => s,
        None => match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64() / 3600.0,
            Err(_) => {
                eprintln!("Error: system clock before the Unix epoch");
                process::exit(1);
            }
        },
    };
    let span_hours = parse_f64(&args, "--hours").unwrap_or(24.0);
    let step_minutes = parse_f64(&args, "--step").unwrap_or(60.0);

    if span_hours <= 0.0 || step_minutes <= 0.0 {
        eprintln!("Error: --hours and --step must be positive");
        process::exit(1);
    }

    let model = TideModel::abra();
    let c = *model.constants();
    eprintln!(
        "Tide table, Abra de Bilbao (M2 period {:.2}h, mean {:.2}m, amplitude {:.2}m)",
        c.period_hours, c.mean_level_m, c.amplitude_m
    );

    println!("{:>12}  {:>6}  {:>7}  {:>6}  {:>8}  {:>9}", "epoch-hours", "clock", "height", "range", "current", "intensity");

    let step_hours = step_minutes / 60.0;
    let mut t = start;
    while t <= start + span_hours {
        let state = model.state(t);
        let trend = match state.trend {
            TideTrend::Rising => "▲",
            TideTrend::Falling => "▼",
        };
        let currents = model.currents(t);
        let regime = if model.is_slack(t) {
            "slack"
        } else {
            match currents[0].regime {
                CurrentRegime::Flooding => "flood",
                CurrentRegime::Ebbing => "ebb",
            }
        };
        println!(
            "{:>12.2}  {:>6}  {:>5.2}m{}  {:>5.0}%  {:>8}  {:>9.2}",
            t,
            clock_of(t),
            state.height_m,
            trend,
            state.percent_of_range * 100.0,
            regime,
            currents[0].intensity,
        );
        t += step_hours;
    }
}

fn print_usage() {
    eprintln!(
        "tide-table: tide and current table for the ABRA kernel\n\
         \n\
         Options:\n\
         \n\
           --start <epoch-hours>  Start instant, hours since the Unix epoch\n\
                                  (default: now)\n\
           --hours <n>            Table span in hours (default: 24)\n\
           --step <minutes>       Row interval in minutes (default: 60)\n\
         \n\
         Example:\n\
         \n\
           tide-table --start 475012.5 --hours 13 --step 30\n"
    );
}

fn parse_f64(args: &[String], flag: &str) -> Option<f64> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<f64>() {
                return Some(v);
            }
        }
    }
    None
}

/// UTC wall-clock HH:MM of an epoch-hours instant.
fn clock_of(t_hours: f64) -> String {
    let day_hours = t_hours.rem_euclid(24.0);
    let h = day_hours.floor() as u32;
    let m = ((day_hours - h as f64) * 60.0).round() as u32;
    let (h, m) = if m == 60 { ((h + 1) % 24, 0) } else { (h, m) };
    format!("{h:02}:{m:02}")
}
