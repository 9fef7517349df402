//! ChurnSight: Customer churn prediction over pre-fitted artifacts
//!
//! This is the main entrypoint: it parses the submitted form, loads the
//! fitted artifacts once, runs the prediction pipeline, and prints the
//! verdict.

use anyhow::Result;
use churnsight::{predict_churn, Args, Artifacts, Verdict};
use clap::Parser;
use log::info;
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse the submitted form; clap rejects incomplete or out-of-domain input
    let args = Args::parse();

    if args.verbose {
        println!("ChurnSight - Customer Churn Prediction");
        println!("======================================\n");
    }

    let start_time = Instant::now();

    // Load the three fitted artifacts; any missing or corrupt file is fatal
    // before the record is processed
    let artifacts = Artifacts::load(Path::new(&args.artifacts))?;
    info!(
        "artifacts loaded from {}: {} feature dimensions",
        args.artifacts,
        artifacts.feature_dim()
    );

    let record = args.to_record();

    if args.verbose {
        println!("Input record:");
        println!(
            "  Demographic: age={}, job={}, marital={}, education={}, default={}",
            record.age_range.as_str(),
            record.job.as_str(),
            record.marital.as_str(),
            record.education.as_str(),
            record.default.as_str()
        );
        println!(
            "  Contact: channel={}, month={}",
            record.contact.as_str(),
            record.month.as_str()
        );
        println!(
            "  Interaction: campaign={}, previous={}, poutcome={}",
            record.campaign,
            record.previous,
            record.poutcome.as_str()
        );
        println!(
            "  Economic context: emp_var_rate={}, cons_price_idx={}, cons_conf_idx={}, euribor3m={}, nr_employed={}",
            record.emp_var_rate,
            record.cons_price_idx,
            record.cons_conf_idx,
            record.euribor3m,
            record.nr_employed
        );
        println!();
    }

    let verdict = predict_churn(&artifacts, &record)?;
    let elapsed = start_time.elapsed();

    match verdict {
        Verdict::Churn => println!("✗ {verdict}"),
        Verdict::Remain => println!("✓ {verdict}"),
    }

    if args.verbose {
        println!("\n  Feature vector width: {}", artifacts.feature_dim());
        println!("  Processing time: {:.3}s", elapsed.as_secs_f64());
    }

    Ok(())
}
