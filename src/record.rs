//! Customer record definition and the fitted column schema

use clap::ValueEnum;

/// Categorical columns in the exact order the encoder was fitted on.
/// Artifact files are validated against this order at load time.
pub const CATEGORICAL_COLUMNS: [&str; 9] = [
    "age_ranges",
    "job",
    "marital",
    "education",
    "default",
    "contact",
    "month",
    "previous",
    "poutcome",
];

/// Numerical columns in the exact order the scaler was fitted on.
pub const NUMERICAL_COLUMNS: [&str; 6] = [
    "campaign",
    "emp_var_rate",
    "cons_price_idx",
    "cons_conf_idx",
    "euribor3m",
    "nr_employed",
];

/// Customer age bracket
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRange {
    #[value(name = "10-19")]
    Age10To19,
    #[value(name = "20-29")]
    Age20To29,
    #[value(name = "30-39")]
    Age30To39,
    #[value(name = "40-49")]
    Age40To49,
    #[value(name = "50-59")]
    Age50To59,
    #[value(name = "60-69")]
    Age60To69,
    #[value(name = "70-79")]
    Age70To79,
    #[value(name = "80-89")]
    Age80To89,
    #[value(name = "90-99")]
    Age90To99,
}

impl AgeRange {
    /// Category label as the encoder was fitted
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRange::Age10To19 => "10-19",
            AgeRange::Age20To29 => "20-29",
            AgeRange::Age30To39 => "30-39",
            AgeRange::Age40To49 => "40-49",
            AgeRange::Age50To59 => "50-59",
            AgeRange::Age60To69 => "60-69",
            AgeRange::Age70To79 => "70-79",
            AgeRange::Age80To89 => "80-89",
            AgeRange::Age90To99 => "90-99",
        }
    }
}

/// Job category
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Housemaid,
    Services,
    Admin,
    BlueCollar,
    Technician,
    Retired,
    Management,
    Unemployed,
    SelfEmployed,
    Unknown,
    Entrepreneur,
    Student,
}

impl Job {
    pub fn as_str(&self) -> &'static str {
        match self {
            Job::Housemaid => "housemaid",
            Job::Services => "services",
            Job::Admin => "admin",
            Job::BlueCollar => "blue-collar",
            Job::Technician => "technician",
            Job::Retired => "retired",
            Job::Management => "management",
            Job::Unemployed => "unemployed",
            Job::SelfEmployed => "self-employed",
            Job::Unknown => "unknown",
            Job::Entrepreneur => "entrepreneur",
            Job::Student => "student",
        }
    }
}

/// Marital status
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marital {
    Married,
    Single,
    Divorced,
    Unknown,
}

impl Marital {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marital::Married => "married",
            Marital::Single => "single",
            Marital::Divorced => "divorced",
            Marital::Unknown => "unknown",
        }
    }
}

/// Level of education
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Education {
    #[value(name = "basic-4y")]
    Basic4y,
    HighSchool,
    #[value(name = "basic-6y")]
    Basic6y,
    #[value(name = "basic-9y")]
    Basic9y,
    ProfessionalCourse,
    Unknown,
    UniversityDegree,
    Illiterate,
}

impl Education {
    pub fn as_str(&self) -> &'static str {
        match self {
            Education::Basic4y => "basic 4y",
            Education::HighSchool => "high school",
            Education::Basic6y => "basic 6y",
            Education::Basic9y => "basic 9y",
            Education::ProfessionalCourse => "professional course",
            Education::Unknown => "unknown",
            Education::UniversityDegree => "university degree",
            Education::Illiterate => "illiterate",
        }
    }
}

/// Credit default history
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultHistory {
    No,
    Unknown,
    Yes,
}

impl DefaultHistory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultHistory::No => "no",
            DefaultHistory::Unknown => "unknown",
            DefaultHistory::Yes => "yes",
        }
    }
}

/// Preferred means of contact
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Cellular,
    Telephone,
}

impl Contact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Contact::Cellular => "cellular",
            Contact::Telephone => "telephone",
        }
    }
}

/// Last contact month of the year (the training data covers March to December)
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub fn as_str(&self) -> &'static str {
        match self {
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }
}

/// Outcome of the previous marketing campaign
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poutcome {
    Nonexistent,
    Failure,
    Success,
}

impl Poutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Poutcome::Nonexistent => "nonexistent",
            Poutcome::Failure => "failure",
            Poutcome::Success => "success",
        }
    }
}

/// Binned group for the prior-contact count, as the encoder was fitted.
/// Derived from the raw count, never entered directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviousGroup {
    Never,
    Once,
    MultipleTimes,
}

impl PreviousGroup {
    /// Bin a raw prior-contact count into its fitted group
    pub fn from_count(previous: u32) -> Self {
        match previous {
            0 => PreviousGroup::Never,
            1 => PreviousGroup::Once,
            _ => PreviousGroup::MultipleTimes,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PreviousGroup::Never => "never",
            PreviousGroup::Once => "once",
            PreviousGroup::MultipleTimes => "multiple times",
        }
    }
}

/// One customer as submitted through the form. Built fresh per invocation
/// and discarded after the verdict is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub age_range: AgeRange,
    pub job: Job,
    pub marital: Marital,
    pub education: Education,
    pub default: DefaultHistory,
    pub contact: Contact,
    pub month: Month,
    /// Number of contacts in the current campaign
    pub campaign: u32,
    /// Number of contacts before the current campaign
    pub previous: u32,
    pub poutcome: Poutcome,
    pub emp_var_rate: f64,
    pub cons_price_idx: f64,
    pub cons_conf_idx: f64,
    pub euribor3m: f64,
    pub nr_employed: f64,
}

impl CustomerRecord {
    /// Categorical values in `CATEGORICAL_COLUMNS` order. The prior-contact
    /// count is surfaced as its binned group here.
    pub fn categorical_values(&self) -> [&'static str; 9] {
        [
            self.age_range.as_str(),
            self.job.as_str(),
            self.marital.as_str(),
            self.education.as_str(),
            self.default.as_str(),
            self.contact.as_str(),
            self.month.as_str(),
            PreviousGroup::from_count(self.previous).as_str(),
            self.poutcome.as_str(),
        ]
    }

    /// Numerical values in `NUMERICAL_COLUMNS` order
    pub fn numerical_values(&self) -> [f64; 6] {
        [
            self.campaign as f64,
            self.emp_var_rate,
            self.cons_price_idx,
            self.cons_conf_idx,
            self.euribor3m,
            self.nr_employed,
        ]
    }
}

/// Scenario record shared across test modules
#[cfg(test)]
pub(crate) fn sample_record() -> CustomerRecord {
    CustomerRecord {
        age_range: AgeRange::Age30To39,
        job: Job::Admin,
        marital: Marital::Single,
        education: Education::UniversityDegree,
        default: DefaultHistory::No,
        contact: Contact::Cellular,
        month: Month::May,
        campaign: 2,
        previous: 0,
        poutcome: Poutcome::Nonexistent,
        emp_var_rate: 1.1,
        cons_price_idx: 93.2,
        cons_conf_idx: -36.4,
        euribor3m: 4.857,
        nr_employed: 5191.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_binning() {
        assert_eq!(PreviousGroup::from_count(0), PreviousGroup::Never);
        assert_eq!(PreviousGroup::from_count(1), PreviousGroup::Once);
        assert_eq!(PreviousGroup::from_count(2), PreviousGroup::MultipleTimes);
        assert_eq!(PreviousGroup::from_count(17), PreviousGroup::MultipleTimes);
    }

    #[test]
    fn test_categorical_values_follow_schema_order() {
        let record = sample_record();
        let values = record.categorical_values();

        assert_eq!(values.len(), CATEGORICAL_COLUMNS.len());
        assert_eq!(values[0], "30-39"); // age_ranges
        assert_eq!(values[1], "admin"); // job
        assert_eq!(values[7], "never"); // previous, binned from count 0
        assert_eq!(values[8], "nonexistent"); // poutcome
    }

    #[test]
    fn test_numerical_values_follow_schema_order() {
        let record = sample_record();
        let values = record.numerical_values();

        assert_eq!(values.len(), NUMERICAL_COLUMNS.len());
        assert_eq!(values[0], 2.0); // campaign
        assert_eq!(values[3], -36.4); // cons_conf_idx may be negative
    }

    #[test]
    fn test_labels_use_fitted_spelling() {
        assert_eq!(Education::Basic4y.as_str(), "basic 4y");
        assert_eq!(Education::UniversityDegree.as_str(), "university degree");
        assert_eq!(Job::BlueCollar.as_str(), "blue-collar");
        assert_eq!(PreviousGroup::MultipleTimes.as_str(), "multiple times");
    }
}
