//! Cascading form constraints
//!
//! Resolves which job titles, degrees and numeric ranges are plausible for the
//! current (company, job title) selection. Every lookup is total: pairs with no
//! reference data degrade to the least restrictive answer instead of failing,
//! so an unusual combination can still be submitted for prediction.

mod data;

pub use data::{ALL_COMPANIES, ALL_DEGREES, ALL_JOB_TITLES};

use data::{ReferenceRow, FALLBACK_MAX_EXPERIENCE, FALLBACK_MAX_SKILLS, REFERENCE_ROWS};
use std::sync::OnceLock;

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        debug_assert!(min <= max, "bounds must satisfy min <= max");
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the range
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Plausible inputs for one (company, job title) pair
#[derive(Debug, Clone, PartialEq)]
pub struct JobConstraint {
    pub allowed_degrees: Vec<String>,
    pub experience_range: Bounds<f64>,
    pub skills_range: Bounds<u32>,
}

#[derive(Debug, Clone)]
struct CompanyConstraints {
    name: String,
    jobs: Vec<(String, JobConstraint)>,
}

/// Immutable company → job title → constraint mapping
#[derive(Debug, Clone, Default)]
pub struct ConstraintTable {
    companies: Vec<CompanyConstraints>,
}

static BUILTIN: OnceLock<ConstraintTable> = OnceLock::new();

impl ConstraintTable {
    /// The table embedded at build time
    pub fn builtin() -> &'static ConstraintTable {
        BUILTIN.get_or_init(|| Self::from_rows(REFERENCE_ROWS))
    }

    /// Build a table from reference rows, keeping first-seen order.
    /// A repeated (company, job title) pair keeps its first row.
    pub fn from_rows(rows: &[ReferenceRow]) -> Self {
        let mut companies: Vec<CompanyConstraints> = Vec::new();

        for row in rows {
            let constraint = JobConstraint {
                allowed_degrees: row.degrees.iter().map(|d| d.to_string()).collect(),
                experience_range: Bounds::new(row.experience.0, row.experience.1),
                skills_range: Bounds::new(row.skills.0, row.skills.1),
            };

            let entry = match companies.iter().position(|c| c.name == row.company) {
                Some(idx) => &mut companies[idx],
                None => {
                    companies.push(CompanyConstraints {
                        name: row.company.to_string(),
                        jobs: Vec::new(),
                    });
                    let last = companies.len() - 1;
                    &mut companies[last]
                }
            };

            if !entry.jobs.iter().any(|(title, _)| title == row.job_title) {
                entry.jobs.push((row.job_title.to_string(), constraint));
            }
        }

        Self { companies }
    }

    fn company(&self, company: &str) -> Option<&CompanyConstraints> {
        let company = company.trim();
        if company.is_empty() {
            return None;
        }
        self.companies.iter().find(|c| c.name == company)
    }

    /// Raw constraint for a pair, if the pair has reference data
    pub fn lookup(&self, company: &str, job_title: &str) -> Option<&JobConstraint> {
        let job_title = job_title.trim();
        if job_title.is_empty() {
            return None;
        }
        self.company(company)?
            .jobs
            .iter()
            .find(|(title, _)| title == job_title)
            .map(|(_, constraint)| constraint)
    }

    /// Whether the pair narrows the form at all
    pub fn is_constrained(&self, company: &str, job_title: &str) -> bool {
        self.lookup(company, job_title).is_some()
    }

    /// Companies with reference data, followed by the remaining known companies
    pub fn available_companies(&self) -> Vec<&str> {
        let mut companies: Vec<&str> = self.companies.iter().map(|c| c.name.as_str()).collect();
        for name in ALL_COMPANIES {
            if !companies.contains(name) {
                companies.push(name);
            }
        }
        companies
    }

    /// Job titles for a company; every known title when the company is empty or unknown
    pub fn available_job_titles(&self, company: &str) -> Vec<&str> {
        match self.company(company) {
            Some(entry) => entry.jobs.iter().map(|(title, _)| title.as_str()).collect(),
            None => ALL_JOB_TITLES.to_vec(),
        }
    }

    /// Degrees for a pair; every known degree when the pair has no reference data
    pub fn available_degrees(&self, company: &str, job_title: &str) -> Vec<&str> {
        match self.lookup(company, job_title) {
            Some(constraint) => constraint
                .allowed_degrees
                .iter()
                .map(String::as_str)
                .collect(),
            None => ALL_DEGREES.to_vec(),
        }
    }

    /// Years-of-experience range for a pair
    pub fn experience_range(&self, company: &str, job_title: &str) -> Bounds<f64> {
        self.lookup(company, job_title)
            .map(|c| c.experience_range)
            .unwrap_or(Bounds {
                min: 0.0,
                max: FALLBACK_MAX_EXPERIENCE,
            })
    }

    /// Skill-count range for a pair
    pub fn skills_range(&self, company: &str, job_title: &str) -> Bounds<u32> {
        self.lookup(company, job_title)
            .map(|c| c.skills_range)
            .unwrap_or(Bounds {
                min: 0,
                max: FALLBACK_MAX_SKILLS,
            })
    }
}
