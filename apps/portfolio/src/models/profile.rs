use serde::Serialize;

/// Static resume content rendered on the page and served at `/api/v1/profile`.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub full_name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github_url: &'static str,
    pub pills: &'static [&'static str],
    pub summary: &'static str,
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub skills: &'static [SkillGroup],
    pub coursework: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub location: &'static str,
    pub title: &'static str,
    pub dates: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub school: &'static str,
    pub location: &'static str,
    pub degree: &'static str,
    pub dates: &'static str,
    pub extra: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub group: &'static str,
    pub items: &'static [Skill],
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub label: &'static str,
    pub level: i32,
}

impl Skill {
    /// Level as drawn on the bar, clamped into 0..=100.
    pub fn percent(&self) -> u8 {
        self.level.clamp(0, 100) as u8
    }
}

const fn skill(label: &'static str, level: i32) -> Skill {
    Skill { label, level }
}

pub static PROFILE: Profile = Profile {
    full_name: "MAHESH BABU BALISETTI",
    role: "Actimize / Java Developer",
    email: "babu.mahi3916@gmail.com",
    phone: "+1 (469) 347 5994",
    github_url: "https://github.com/mbalisetti",
    pills: &[
        "Fraud",
        "Actimize (IFM / ActOne)",
        "Java • Spring Boot",
        "OpenShift • Docker",
        "Kafka",
    ],
    summary: "Actimize/Java Developer with 2+ years of experience working on fraud detection systems. \
Hands-on experience with IFM solution, ActOne customization, developing custom RCM Java plugins, \
REST API integration, and application migration. Strong team player focused on building reliable \
and secure systems.",
    experience: &[
        Experience {
            company: "USAA",
            location: "Plano, Texas",
            title: "Actimize/Java Developer",
            dates: "July 2024 – Current",
            bullets: &[
                "Worked on IFM solution, transforming business requirements into scalable technical solutions.",
                "Implemented plugins: GUI, conditional status change, post-step change, post-action event plugins.",
                "Built custom Java plugin to link accounts for a member + Work Item GUI button + controller logic.",
                "Created GUI plugin to call external API to retrieve check images and attach them to alerts.",
                "Migrated ActOne apps from legacy JBoss to OpenShift containers for scalability and compliance.",
                "Designed/configured NFS storage for secure SAR filing.",
                "Configured SAML-based SSO for ActOne.",
                "Migrated Java 8 RCM plugins to Java 11.",
                "Built Spring Boot app to consume Kafka events and update platform list via RCM Extend APIs.",
                "Managed OpenShift Roles/RoleBindings for secure access control.",
                "Migrated SOAP services to REST, improving performance and integrations.",
                "Developed alert types, views, layouts, workflow steps, and XML for alert display.",
                "Built/configured Dart Views, Dart Queries, workflows, dashboards for investigations.",
                "Authored internal wiki docs for developer setup/debugging to reduce onboarding time.",
            ],
        },
        Experience {
            company: "Wipro Limited",
            location: "Hyderabad, Telangana",
            title: "Project Engineer",
            dates: "Sep 2021 – Oct 2022",
            bullets: &[
                "Worked on Strala Energy (BP) energy monitoring application for real-time insights.",
                "Developed RESTful services using Java 8, Spring MVC/Spring Boot.",
                "Built reusable Java components following OOP and modular design.",
                "Used Docker to containerize apps and support CI/CD pipelines.",
                "Collaborated with dev/QA/BA to resolve defects and ensure reliability/security.",
                "Wrote unit tests using JUnit and Mockito.",
                "Developed/optimized SQL queries and stored procedures.",
                "Managed code with GitLab.",
            ],
        },
    ],
    education: &[
        Education {
            school: "Kennesaw State University",
            location: "Marietta, GA",
            degree: "Master of Science in Computer Science",
            dates: "Jan 2023 – May 2024",
            extra: "GPA: 3.27/4.00",
        },
        Education {
            school: "Vignan’s Foundation for Science, Technology and Research",
            location: "Guntur, India",
            degree: "Bachelor of Computer Science and Engineering",
            dates: "Aug 2017 – May 2021",
            extra: "GPA: 7.88/10",
        },
    ],
    skills: &[
        SkillGroup {
            group: "Core",
            items: &[
                skill("Java", 92),
                skill("Spring Boot", 84),
                skill("Actimize (IFM/ActOne)", 88),
                skill("REST APIs", 85),
            ],
        },
        SkillGroup {
            group: "Platform",
            items: &[
                skill("OpenShift", 78),
                skill("Docker", 80),
                skill("Kubernetes", 70),
                skill("Kafka", 76),
            ],
        },
        SkillGroup {
            group: "Data",
            items: &[
                skill("SQL Server", 78),
                skill("Oracle", 72),
                skill("SQL Optimization", 74),
                skill("JUnit/Mockito", 72),
            ],
        },
    ],
    coursework: &[
        "Operating Systems",
        "Theory of Computation",
        "Database Systems",
        "Advanced Algorithms",
        "Machine Vision",
        "Cloud Computing",
        "Information Retrieval",
        "Machine Learning",
        "Advanced Cryptography",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_percent_clamps() {
        assert_eq!(skill("x", 140).percent(), 100);
        assert_eq!(skill("x", -5).percent(), 0);
        assert_eq!(skill("x", 72).percent(), 72);
    }

    #[test]
    fn test_profile_has_three_skill_groups() {
        let groups: Vec<_> = PROFILE.skills.iter().map(|g| g.group).collect();
        assert_eq!(groups, vec!["Core", "Platform", "Data"]);
    }

    #[test]
    fn test_profile_serializes_experience_in_order() {
        let json = serde_json::to_value(&PROFILE).unwrap();
        assert_eq!(json["experience"][0]["company"], "USAA");
        assert_eq!(json["experience"][1]["company"], "Wipro Limited");
        assert_eq!(json["skills"][0]["items"][0]["level"], 92);
    }
}
