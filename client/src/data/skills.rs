//! Skills listing data.
//!
//! Programming skills carry a proficiency level rendered as a bar; the first
//! [`RATED_SKILL_COUNT`] get bars, the remainder are listed as additional
//! skills alongside the soft skills.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Number of programming skills rendered with a proficiency bar.
pub const RATED_SKILL_COUNT: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Bar fill in percent.
    #[must_use]
    pub fn fill_percent(self) -> u8 {
        match self {
            Self::Beginner => 33,
            Self::Intermediate => 66,
            Self::Advanced => 100,
        }
    }

    /// Modifier class selecting the bar shade.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Beginner => "skill-bar__fill--beginner",
            Self::Intermediate => "skill-bar__fill--intermediate",
            Self::Advanced => "skill-bar__fill--advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatedSkill {
    pub name: &'static str,
    pub level: Level,
    pub icon: &'static str,
}

pub const TECHNICAL_SKILLS: &[Skill] = &[
    Skill { name: "Web Dev", icon: "🌐" },
    Skill { name: "Software Dev", icon: "⌨" },
    Skill { name: "Database", icon: "🗄" },
    Skill { name: "OOP", icon: "▣" },
    Skill { name: "API Design", icon: "🖧" },
    Skill { name: "UI/UX", icon: "🖥" },
    Skill { name: "Design Patterns", icon: "⑂" },
    Skill { name: "Microservices", icon: "⚙" },
];

pub const PROGRAMMING_SKILLS: &[RatedSkill] = &[
    RatedSkill { name: "Dart", level: Level::Intermediate, icon: "📄" },
    RatedSkill { name: "Java", level: Level::Intermediate, icon: "☕" },
    RatedSkill { name: "C#", level: Level::Intermediate, icon: "📄" },
    RatedSkill { name: "Firebase", level: Level::Intermediate, icon: "☁" },
    RatedSkill { name: "PHP", level: Level::Intermediate, icon: "📄" },
    RatedSkill { name: "JavaScript", level: Level::Intermediate, icon: "⌨" },
    RatedSkill { name: "React", level: Level::Intermediate, icon: "⚛" },
    RatedSkill { name: "HTML/CSS", level: Level::Advanced, icon: "📄" },
    RatedSkill { name: "Bootstrap", level: Level::Advanced, icon: "▦" },
    RatedSkill { name: "MS SQL", level: Level::Intermediate, icon: "🗄" },
    RatedSkill { name: "Git", level: Level::Intermediate, icon: "⑂" },
    RatedSkill { name: "Flutter", level: Level::Intermediate, icon: "⌨" },
    RatedSkill { name: "Docker", level: Level::Beginner, icon: "⚙" },
    RatedSkill { name: "Security", level: Level::Beginner, icon: "🛡" },
];

pub const SOFT_SKILLS: &[Skill] = &[
    Skill { name: "Adaptability", icon: "▦" },
    Skill { name: "Time Management", icon: "⏱" },
    Skill { name: "Communication", icon: "💬" },
    Skill { name: "Critical Thinking", icon: "🧠" },
    Skill { name: "Problem Solving", icon: "⚡" },
    Skill { name: "Teamwork", icon: "👥" },
];

/// Programming skills shown with a proficiency bar.
#[must_use]
pub fn rated_skills() -> &'static [RatedSkill] {
    &PROGRAMMING_SKILLS[..RATED_SKILL_COUNT.min(PROGRAMMING_SKILLS.len())]
}

/// Programming skills listed without a bar.
#[must_use]
pub fn additional_skills() -> &'static [RatedSkill] {
    &PROGRAMMING_SKILLS[RATED_SKILL_COUNT.min(PROGRAMMING_SKILLS.len())..]
}
