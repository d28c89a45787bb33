use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatchEngineError;

pub const LANGUAGE_OPTIONS: [&str; 5] = ["English", "Spanish", "Mandarin", "Hindi", "Arabic"];

pub const LOCATION_OPTIONS: [&str; 5] = [
    "North America",
    "Europe",
    "Asia",
    "South America",
    "Africa",
];

/// Focus areas offered by the project-needs form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Frontend Development")]
    Frontend,
    #[serde(rename = "Backend Development")]
    Backend,
    #[serde(rename = "Mobile Development")]
    Mobile,
    #[serde(rename = "UI/UX Design")]
    Design,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "DevOps")]
    DevOps,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Mobile,
        SkillCategory::Design,
        SkillCategory::DataScience,
        SkillCategory::DevOps,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend Development",
            SkillCategory::Backend => "Backend Development",
            SkillCategory::Mobile => "Mobile Development",
            SkillCategory::Design => "UI/UX Design",
            SkillCategory::DataScience => "Data Science",
            SkillCategory::DevOps => "DevOps",
        }
    }

    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::Frontend => &[
                "React",
                "Vue.js",
                "Angular",
                "Next.js",
                "TypeScript",
                "HTML/CSS",
                "Tailwind CSS",
                "Material UI",
                "JavaScript",
                "Responsive Design",
                "Web Animation",
                "Frontend Testing",
            ],
            SkillCategory::Backend => &[
                "Node.js",
                "Python",
                "Java",
                "C#",
                "PHP",
                "Ruby",
                "Go",
                "REST APIs",
                "GraphQL",
                "Database Design",
                "Microservices",
                "DevOps",
            ],
            SkillCategory::Mobile => &[
                "React Native",
                "Flutter",
                "iOS/Swift",
                "Android/Kotlin",
                "Mobile UI/UX",
                "App Testing",
                "Cross-Platform Development",
                "Mobile Security",
            ],
            SkillCategory::Design => &[
                "Figma",
                "Adobe XD",
                "Sketch",
                "User Research",
                "Wireframing",
                "Prototyping",
                "Design Systems",
                "Visual Design",
                "Interaction Design",
            ],
            SkillCategory::DataScience => &[
                "Python",
                "R",
                "Machine Learning",
                "Data Analysis",
                "Data Visualization",
                "Deep Learning",
                "NLP",
                "Statistical Analysis",
                "Big Data",
            ],
            SkillCategory::DevOps => &[
                "Docker",
                "Kubernetes",
                "AWS",
                "CI/CD",
                "Jenkins",
                "Git",
                "Linux",
                "Cloud Architecture",
                "Infrastructure as Code",
            ],
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillCategory {
    type Err = MatchEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MatchEngineError::unknown("skill category", s))
    }
}
