//! Owner details, hero copy, and navigation anchors.

pub const OWNER_NAME: &str = "S.H. Buddima Chamath Kumara";
pub const BRAND: &str = "S.H.B.C. Kumara";
pub const DEGREE: &str = "BSc (Hons) Computer Science - Software Engineering";
pub const UNIVERSITY: &str = "Kingston University, London | Graduation will be in August 2025";

/// Roles cycled by the hero typewriter.
pub const HERO_ROLES: &[&str] = &[
    "Software Engineering Undergraduate",
    "Flutter Developer",
    "Java Enthusiast",
    "Mobile App Developer",
];

pub const EMAIL: &str = "buddimachamathlive@gmail.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/buddima-chamath";
pub const LINKEDIN_LABEL: &str = "linkedin.com/in/buddima-chamath";
pub const GITHUB_URL: &str = "https://github.com/BuddimaChamath";
pub const CV_PATH: &str = "/assets/cv.pdf";
pub const PROFILE_PICTURE: &str = "/assets/profilePic.jpeg";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I am a passionate software engineering student with a strong desire to create efficient, user-friendly applications that solve real-world problems. My academic journey at Kingston University via ESOFT Metro Campus has equipped me with both theoretical knowledge and practical skills in various programming languages and technologies.",
    "I'm particularly interested in mobile development, web applications, and database design. I'm always eager to learn new technologies and methodologies to expand my skill set and stay current with industry trends. I believe in writing clean, maintainable code and following best practices in software development.",
    "When I'm not coding, I enjoy exploring new technologies, contributing to open-source projects, and continuously improving my problem-solving skills through coding challenges.",
];

/// Page section reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavSection {
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { label: "Home", anchor: "home" },
    NavSection { label: "Projects", anchor: "projects" },
    NavSection { label: "Skills", anchor: "skills" },
    NavSection { label: "About", anchor: "about" },
    NavSection { label: "Contact", anchor: "contact" },
];
