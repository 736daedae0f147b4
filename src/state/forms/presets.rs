//! Quick-test inputs for trying the model without typing

/// A complete set of applicant attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub company: &'static str,
    pub job_title: &'static str,
    pub degree: &'static str,
    pub experience_years: f64,
    pub skill_count: u32,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Software Developer at Google",
        company: "Google",
        job_title: "Software Developer",
        degree: "B.Tech",
        experience_years: 5.0,
        skill_count: 4,
    },
    Preset {
        name: "Data Scientist at Microsoft",
        company: "Microsoft",
        job_title: "Data Scientist",
        degree: "M.Tech",
        experience_years: 3.0,
        skill_count: 5,
    },
    Preset {
        name: "ML Engineer at Amazon",
        company: "Amazon",
        job_title: "ML Engineer",
        degree: "PhD",
        experience_years: 7.0,
        skill_count: 6,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ConstraintTable;

    #[test]
    fn test_presets_resolve_in_reference_data() {
        let table = ConstraintTable::builtin();
        for preset in PRESETS {
            let degrees = table.available_degrees(preset.company, preset.job_title);
            assert!(degrees.contains(&preset.degree), "{}", preset.name);
        }
    }
}
