//! Reference data for the cascading form.
//!
//! The global lists match the options of the web form. The rows are sample
//! data: each one gives plausible degrees and numeric ranges for one
//! (company, job title) pair and should be regenerated from the training set
//! when it is available. Pairs that never appear here fall back to the global
//! lists below.

/// Every company the model was trained on, in display order
pub const ALL_COMPANIES: &[&str] = &[
    "Google",
    "Microsoft",
    "Amazon",
    "Adobe",
    "Accenture",
    "Capgemini",
    "Cognizant",
    "Deloitte",
    "Flipkart",
    "HCL",
    "Infosys",
    "Ola",
    "Paytm",
    "Reliance Jio",
    "Swiggy",
    "TCS",
    "Tech Mahindra",
    "Wipro",
    "Zomato",
    "Byju's",
    "HealthTechY",
    "StartUpX",
];

/// Every job title the model was trained on
pub const ALL_JOB_TITLES: &[&str] = &[
    "Software Developer",
    "Backend Engineer",
    "Frontend Developer",
    "Data Scientist",
    "Data Analyst",
    "ML Engineer",
    "Web Developer",
    "Business Analyst",
    "Financial Analyst",
    "Sales Executive",
    "Chartered Accountant",
];

/// Every degree the model was trained on
pub const ALL_DEGREES: &[&str] = &[
    "B.Tech",
    "M.Tech",
    "BCA",
    "MCA",
    "MBA",
    "B.Com",
    "M.Com",
    "PhD",
    "Chartered Accountant",
];

/// Experience ceiling used when a pair has no reference data
pub const FALLBACK_MAX_EXPERIENCE: f64 = 40.0;

/// Skill-count ceiling used when a pair has no reference data
pub const FALLBACK_MAX_SKILLS: u32 = 20;

const ENGINEERING: &[&str] = &["B.Tech", "M.Tech", "BCA", "MCA"];
const ENGINEERING_RESEARCH: &[&str] = &["B.Tech", "M.Tech", "MCA", "PhD"];
const RESEARCH: &[&str] = &["M.Tech", "PhD"];
const ANALYTICS: &[&str] = &["B.Tech", "M.Tech", "MBA", "MCA"];
const WEB: &[&str] = &["B.Tech", "BCA", "MCA"];
const BUSINESS: &[&str] = &["MBA", "B.Com", "M.Com"];
const FINANCE: &[&str] = &["MBA", "B.Com", "M.Com", "Chartered Accountant"];
const ACCOUNTING: &[&str] = &["Chartered Accountant", "M.Com"];
const SALES: &[&str] = &["MBA", "B.Com"];

/// One row of reference data
pub struct ReferenceRow {
    pub company: &'static str,
    pub job_title: &'static str,
    pub degrees: &'static [&'static str],
    /// Years of experience, inclusive
    pub experience: (f64, f64),
    /// Number of skills, inclusive
    pub skills: (u32, u32),
}

const fn row(
    company: &'static str,
    job_title: &'static str,
    degrees: &'static [&'static str],
    experience: (f64, f64),
    skills: (u32, u32),
) -> ReferenceRow {
    ReferenceRow {
        company,
        job_title,
        degrees,
        experience,
        skills,
    }
}

/// Rows are grouped by company; row order is display order.
pub const REFERENCE_ROWS: &[ReferenceRow] = &[
    // Google
    row("Google", "Software Developer", ENGINEERING, (2.0, 10.0), (3, 8)),
    row("Google", "Backend Engineer", ENGINEERING, (2.0, 12.0), (3, 8)),
    row("Google", "Data Scientist", ENGINEERING_RESEARCH, (1.0, 10.0), (4, 9)),
    row("Google", "ML Engineer", RESEARCH, (3.0, 12.0), (5, 10)),
    // Microsoft
    row("Microsoft", "Software Developer", ENGINEERING, (1.0, 10.0), (3, 8)),
    row("Microsoft", "Frontend Developer", WEB, (1.0, 8.0), (3, 7)),
    row("Microsoft", "Data Scientist", ENGINEERING_RESEARCH, (1.0, 9.0), (4, 9)),
    row("Microsoft", "Business Analyst", ANALYTICS, (1.0, 8.0), (2, 6)),
    // Amazon
    row("Amazon", "Software Developer", ENGINEERING, (1.0, 10.0), (3, 8)),
    row("Amazon", "Backend Engineer", ENGINEERING, (2.0, 12.0), (3, 8)),
    row("Amazon", "ML Engineer", RESEARCH, (3.0, 12.0), (5, 10)),
    row("Amazon", "Data Analyst", ANALYTICS, (0.0, 6.0), (2, 6)),
    row("Amazon", "Sales Executive", SALES, (0.0, 8.0), (1, 5)),
    // Adobe
    row("Adobe", "Frontend Developer", WEB, (1.0, 9.0), (3, 7)),
    row("Adobe", "Software Developer", ENGINEERING, (1.0, 10.0), (3, 8)),
    row("Adobe", "Data Scientist", ENGINEERING_RESEARCH, (2.0, 10.0), (4, 9)),
    // Accenture
    row("Accenture", "Business Analyst", ANALYTICS, (0.0, 8.0), (2, 6)),
    row("Accenture", "Software Developer", ENGINEERING, (0.0, 8.0), (2, 7)),
    row("Accenture", "Data Analyst", ANALYTICS, (0.0, 6.0), (2, 6)),
    // Capgemini
    row("Capgemini", "Software Developer", ENGINEERING, (0.0, 7.0), (2, 6)),
    row("Capgemini", "Web Developer", WEB, (0.0, 6.0), (2, 6)),
    // Cognizant
    row("Cognizant", "Software Developer", ENGINEERING, (0.0, 7.0), (2, 6)),
    row("Cognizant", "Data Analyst", ANALYTICS, (0.0, 5.0), (2, 5)),
    // Deloitte
    row("Deloitte", "Financial Analyst", FINANCE, (0.0, 8.0), (2, 6)),
    row("Deloitte", "Chartered Accountant", ACCOUNTING, (1.0, 12.0), (2, 6)),
    row("Deloitte", "Business Analyst", ANALYTICS, (0.0, 8.0), (2, 6)),
    // Flipkart
    row("Flipkart", "Backend Engineer", ENGINEERING, (1.0, 10.0), (3, 8)),
    row("Flipkart", "Data Scientist", ENGINEERING_RESEARCH, (1.0, 8.0), (4, 8)),
    row("Flipkart", "Sales Executive", SALES, (0.0, 6.0), (1, 5)),
    // HCL
    row("HCL", "Software Developer", ENGINEERING, (0.0, 8.0), (2, 6)),
    row("HCL", "Web Developer", WEB, (0.0, 6.0), (2, 6)),
    // Infosys
    row("Infosys", "Software Developer", ENGINEERING, (0.0, 8.0), (2, 6)),
    row("Infosys", "Business Analyst", ANALYTICS, (0.0, 7.0), (2, 6)),
    row("Infosys", "Data Analyst", ANALYTICS, (0.0, 5.0), (2, 5)),
    // Ola
    row("Ola", "Backend Engineer", ENGINEERING, (1.0, 8.0), (3, 7)),
    row("Ola", "Data Analyst", ANALYTICS, (0.0, 5.0), (2, 5)),
    // Paytm
    row("Paytm", "Backend Engineer", ENGINEERING, (1.0, 8.0), (3, 7)),
    row("Paytm", "Financial Analyst", FINANCE, (0.0, 7.0), (2, 6)),
    // Reliance Jio
    row("Reliance Jio", "Software Developer", ENGINEERING, (0.0, 8.0), (2, 7)),
    row("Reliance Jio", "Sales Executive", SALES, (0.0, 8.0), (1, 5)),
    // Swiggy
    row("Swiggy", "Frontend Developer", WEB, (0.0, 6.0), (2, 6)),
    row("Swiggy", "Data Scientist", ENGINEERING_RESEARCH, (1.0, 7.0), (4, 8)),
    // TCS
    row("TCS", "Software Developer", ENGINEERING, (0.0, 8.0), (2, 6)),
    row("TCS", "Business Analyst", ANALYTICS, (0.0, 7.0), (2, 6)),
    // Tech Mahindra
    row("Tech Mahindra", "Software Developer", ENGINEERING, (0.0, 7.0), (2, 6)),
    row("Tech Mahindra", "Web Developer", WEB, (0.0, 6.0), (2, 5)),
    // Wipro
    row("Wipro", "Software Developer", ENGINEERING, (0.0, 7.0), (2, 6)),
    row("Wipro", "Data Analyst", ANALYTICS, (0.0, 5.0), (2, 5)),
    // Zomato
    row("Zomato", "Frontend Developer", WEB, (0.0, 6.0), (2, 6)),
    row("Zomato", "Sales Executive", SALES, (0.0, 6.0), (1, 4)),
    // Byju's
    row("Byju's", "Sales Executive", SALES, (0.0, 5.0), (1, 4)),
    row("Byju's", "Business Analyst", BUSINESS, (0.0, 6.0), (2, 5)),
    // HealthTechY
    row("HealthTechY", "ML Engineer", RESEARCH, (1.0, 8.0), (4, 8)),
    row("HealthTechY", "Data Scientist", ENGINEERING_RESEARCH, (1.0, 7.0), (4, 8)),
    // StartUpX
    row("StartUpX", "Web Developer", WEB, (0.0, 5.0), (2, 6)),
    row("StartUpX", "Backend Engineer", ENGINEERING, (0.0, 6.0), (2, 7)),
];
