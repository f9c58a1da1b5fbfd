//! checkout — multi-counter checkout queue demo.
//!
//! Runs the simulation from a JSON scenario file (`checkout scenario.json`)
//! or, with no argument, from a seeded randomly generated workload.  Event
//! lines go to stderr through `env_logger`; the final report is printed and
//! exported as CSV.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use ck_core::{CustomerClass, CustomerSpec, Pacing, SimConfig, SimSeconds};
use ck_output::{CsvReportWriter, LogObserver, ReportWriter, render_report};
use ck_sim::SimBuilder;

// ── Defaults for the generated workload ───────────────────────────────────────

const SEED:               u64   = 42;
const COUNTER_COUNT:      u32   = 4;
const CUSTOMER_COUNT:     usize = 12;
const ARRIVAL_RATE_SECS:  u64   = 1;
const MAX_ITEMS:          u32   = 8;
/// Carts at or under this size go through the express lane.
const EXPRESS_ITEM_LIMIT: u32   = 2;
/// Compressed wall clock: a full demo run takes well under a second per
/// simulated minute.
const MILLIS_PER_SIM_SEC: u64   = 10;

const OUTPUT_DIR: &str = "output/checkout";

// ── Scenario ──────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Scenario {
    counters:          u32,
    arrival_rate_secs: u64,
    customers:         Vec<CustomerSpec>,
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn generated_scenario() -> Scenario {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let customers = (0..CUSTOMER_COUNT)
        .map(|_| {
            let items = rng.gen_range(1..=MAX_ITEMS);
            let class = if items <= EXPRESS_ITEM_LIMIT {
                CustomerClass::Express
            } else {
                CustomerClass::Regular
            };
            CustomerSpec { class, items }
        })
        .collect();

    Scenario {
        counters:          COUNTER_COUNT,
        arrival_rate_secs: ARRIVAL_RATE_SECS,
        customers,
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Workload: scenario file if given, seeded random workload otherwise.
    let scenario = match std::env::args().nth(1) {
        Some(path) => load_scenario(Path::new(&path))?,
        None => generated_scenario(),
    };

    let express_count = scenario.customers.iter().filter(|c| c.class.is_express()).count();
    let regular_count = scenario.customers.len() - express_count;
    println!("=== checkout — multi-counter queue simulation ===");
    println!(
        "Counters: {}  |  Customers: {} ({} express, {} regular)  |  Arrival rate: {} s",
        scenario.counters,
        scenario.customers.len(),
        express_count,
        regular_count,
        scenario.arrival_rate_secs,
    );
    println!();

    // 2. Build the simulation.
    let config = SimConfig {
        counters:     scenario.counters,
        arrival_rate: SimSeconds(scenario.arrival_rate_secs),
        pacing:       Pacing::Scaled { millis_per_sim_sec: MILLIS_PER_SIM_SEC },
    };
    let simulation = SimBuilder::new(config).customers(&scenario.customers).build()?;

    // 3. Run with live event lines.
    let t0 = Instant::now();
    let report = simulation.run(&LogObserver);
    let elapsed = t0.elapsed();

    // 4. Report.
    println!();
    print!("{}", render_report(&report));
    println!();
    println!(
        "{} customer(s) served across {} counter(s) in {:.3} s",
        report.total_processed(),
        report.counters.len(),
        elapsed.as_secs_f64(),
    );

    // 5. CSV export.
    fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvReportWriter::new(Path::new(OUTPUT_DIR))?;
    writer.write_report(&report)?;
    writer.finish()?;
    println!("wrote {OUTPUT_DIR}/counter_report.csv");

    Ok(())
}
