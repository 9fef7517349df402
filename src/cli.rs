//! Command-line form definitions and argument parsing
//!
//! One flag per customer field, grouped into the four form sections. Each
//! categorical flag is constrained to its fixed enumerated domain by clap,
//! and the count fields are non-negative by type, so an out-of-domain or
//! incomplete submission is rejected before the pipeline runs.

use crate::record::{
    AgeRange, Contact, CustomerRecord, DefaultHistory, Education, Job, Marital, Month, Poutcome,
};
use clap::Parser;

/// Customer churn prediction from pre-fitted encoder, scaler, and model artifacts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the fitted artifact files
    #[arg(short, long, default_value = "artifacts")]
    pub artifacts: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Age group
    #[arg(long, value_enum, help_heading = "Demographic Information")]
    pub age_range: AgeRange,

    /// Job
    #[arg(long, value_enum, help_heading = "Demographic Information")]
    pub job: Job,

    /// Marital status
    #[arg(long, value_enum, help_heading = "Demographic Information")]
    pub marital: Marital,

    /// Level of education
    #[arg(long, value_enum, help_heading = "Demographic Information")]
    pub education: Education,

    /// Credit default history
    #[arg(long, value_enum, help_heading = "Demographic Information")]
    pub default: DefaultHistory,

    /// Preferred means of contact
    #[arg(long, value_enum, help_heading = "Contact Details")]
    pub contact: Contact,

    /// Last contact month of the year
    #[arg(long, value_enum, help_heading = "Contact Details")]
    pub month: Month,

    /// Number of contacts in the current campaign
    #[arg(long, help_heading = "Interaction History")]
    pub campaign: u32,

    /// Number of contacts before the current campaign
    #[arg(long, help_heading = "Interaction History")]
    pub previous: u32,

    /// Outcome of the previous marketing campaign
    #[arg(long, value_enum, help_heading = "Interaction History")]
    pub poutcome: Poutcome,

    /// Employment variation rate (quarterly indicator)
    #[arg(long, allow_negative_numbers = true, help_heading = "Social and Economic Context")]
    pub emp_var_rate: f64,

    /// Consumer price index (monthly indicator)
    #[arg(long, allow_negative_numbers = true, help_heading = "Social and Economic Context")]
    pub cons_price_idx: f64,

    /// Consumer confidence index (daily indicator)
    #[arg(long, allow_negative_numbers = true, help_heading = "Social and Economic Context")]
    pub cons_conf_idx: f64,

    /// Euribor 3 month rate (daily indicator)
    #[arg(long, allow_negative_numbers = true, help_heading = "Social and Economic Context")]
    pub euribor3m: f64,

    /// Number of employees (quarterly indicator)
    #[arg(long, allow_negative_numbers = true, help_heading = "Social and Economic Context")]
    pub nr_employed: f64,
}

impl Args {
    /// Assemble the submitted fields into one customer record
    pub fn to_record(&self) -> CustomerRecord {
        CustomerRecord {
            age_range: self.age_range,
            job: self.job,
            marital: self.marital,
            education: self.education,
            default: self.default,
            contact: self.contact,
            month: self.month,
            campaign: self.campaign,
            previous: self.previous,
            poutcome: self.poutcome,
            emp_var_rate: self.emp_var_rate,
            cons_price_idx: self.cons_price_idx,
            cons_conf_idx: self.cons_conf_idx,
            euribor3m: self.euribor3m,
            nr_employed: self.nr_employed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const FULL_SUBMISSION: [&str; 31] = [
        "churnsight",
        "--age-range", "30-39",
        "--job", "admin",
        "--marital", "single",
        "--education", "university-degree",
        "--default", "no",
        "--contact", "cellular",
        "--month", "may",
        "--campaign", "2",
        "--previous", "0",
        "--poutcome", "nonexistent",
        "--emp-var-rate", "1.1",
        "--cons-price-idx", "93.2",
        "--cons-conf-idx", "-36.4",
        "--euribor3m", "4.857",
        "--nr-employed", "5191",
    ];

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_full_submission_parses_into_record() {
        let args = Args::try_parse_from(FULL_SUBMISSION).unwrap();
        let record = args.to_record();

        assert_eq!(record, crate::record::sample_record());
    }

    #[test]
    fn test_incomplete_submission_is_rejected() {
        // Dropping the last field leaves the form incomplete
        let partial = &FULL_SUBMISSION[..FULL_SUBMISSION.len() - 2];
        assert!(Args::try_parse_from(partial.iter().copied()).is_err());
    }

    #[test]
    fn test_out_of_domain_category_is_rejected() {
        let mut submission = FULL_SUBMISSION;
        submission[4] = "astronaut"; // not a fitted job category
        assert!(Args::try_parse_from(submission).is_err());
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let mut submission = FULL_SUBMISSION;
        submission[16] = "-1"; // campaign count cannot be negative
        assert!(Args::try_parse_from(submission).is_err());
    }

    #[test]
    fn test_negative_indicator_is_accepted() {
        let args = Args::try_parse_from(FULL_SUBMISSION).unwrap();
        assert_eq!(args.cons_conf_idx, -36.4);
    }
}
