//! Static project catalog shown in the gallery and detail modal.
//!
//! DESIGN
//! ======
//! The catalog is compile-time data: records borrow `'static` strings and
//! slices so the gallery, the modal, and the server's JSON API all share the
//! same immutable table without cloning. Display order is slice order.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::Serialize;

/// Platform a project targets. Drives gallery filtering and card icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mobile,
    Desktop,
    Web,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Desktop, Self::Web];

    /// Lowercase identifier used in URLs and query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Web => "web",
        }
    }

    /// Capitalized label used in headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
            Self::Web => "Web",
        }
    }

    /// Glyph rendered next to the category on cards and in the modal header.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Mobile => "📱",
            Self::Desktop => "💻",
            Self::Web => "🌐",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// One portfolio entry. Optional sections are omitted from the UI when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<&'static str>,
    pub technologies: &'static [&'static str],
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solutions: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_contribution: Option<&'static [&'static str]>,
}

impl Project {
    /// Long description when available, otherwise the card blurb.
    #[must_use]
    pub fn overview(&self) -> &'static str {
        self.full_description.unwrap_or(self.description)
    }

    /// Screenshot paths, empty when the project has none.
    #[must_use]
    pub fn screenshot_list(&self) -> &'static [&'static str] {
        self.screenshots.unwrap_or(&[])
    }
}

/// Look up a project by identifier.
#[must_use]
pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Every project, in gallery display order.
pub static PROJECTS: &[Project] = &[
    Project {
        id: "pizza-ordering",
        title: "Pizza Ordering System",
        description: "Desktop app with advanced pizza customization and design pattern implementation.",
        full_description: Some(
            "Developed a user-focused pizza ordering system with advanced customization features and seven design pattern implementations including Builder, State, Observer, Strategy, Command, Chain of Responsibility, and Decorator.",
        ),
        technologies: &["Java", "JavaFX", "SQLite", "Maven"],
        category: Category::Desktop,
        github: Some("https://github.com/BuddimaChamath/PizzaOrderingSystem.git"),
        demo: None,
        image: Some(
            "https://images.unsplash.com/photo-1513104890138-7c749659a591?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        ),
        screenshots: Some(&["/assets/pizza/pizza1.jpg", "/assets/pizza/pizza2.jpg", "/assets/pizza/pizza3.jpg"]),
        features: Some(&[
            "Custom pizza builder with crust, sauce, and toppings selection",
            "Order lifecycle management with real-time status tracking (Placed → Delivered)",
            "Favorites system for quick reorders",
            "Promo code system with discounts (e.g., SUMMER20)",
            "Loyalty points and feedback integration",
            "Applied 7 design patterns: Builder, State, Observer, Strategy, Command, Chain of Responsibility, Decorator",
        ]),
        team: Some("Academic solo project"),
        duration: Some("2 months"),
        challenges: Some(&[
            "Implementing multiple design patterns cohesively",
            "Creating an intuitive user interface for order customization",
            "Managing order state transitions effectively",
        ]),
        solutions: Some(&[
            "Applied 7 design patterns to solve specific architectural challenges",
            "Used JavaFX for creating a responsive and user-friendly UI",
            "Implemented state pattern for order lifecycle management",
        ]),
        my_contribution: None,
    },
    Project {
        id: "the-ruin-ui",
        title: "The Ruin – Tropical Event Venue Homepage - Glassmorphism UI",
        description: "Glassmorphism-themed UI/UX homepage for a tropical beachfront venue in Sri Lanka.",
        full_description: Some(
            "Designed and developed a responsive homepage for The Ruin, a premium beachfront venue in Hiriketiya, Sri Lanka. The design uses a modern glassmorphism style to highlight elegance, brand identity, and functionality with key features like quote requests, services, and bookings. The project focused on creating a smooth user experience across all devices.",
        ),
        technologies: &["React", "Vite", "TypeScript", "Glassmorphism", "Responsive Design"],
        category: Category::Web,
        github: Some(
            "https://github.com/BuddimaChamath/The-Ruin-Tropical-Event-Venue-Homepage-Glassmorphism-UI-Project.git",
        ),
        demo: Some("https://the-ruin-tropical-event-venue-homep.vercel.app/"),
        image: Some("/assets/theRuin/Main.jpg"),
        screenshots: None,
        features: Some(&[
            "Glassmorphism-based hero, about, and service sections",
            "Responsive layout for desktop, tablet, and mobile",
            "Call-to-action buttons: Request a Quote, Book Now",
            "Structured, clear visual hierarchy for user engagement",
            "About and Story sections reflecting venue’s identity",
        ]),
        team: Some("Solo design & development project"),
        duration: Some("1–2 weeks"),
        challenges: Some(&[
            "Implementing modern UI effects (blur, transparency) without hurting performance",
            "Ensuring responsive behavior across breakpoints",
        ]),
        solutions: Some(&[
            "Used `backdrop-filter`, semi-transparent layers and gradients for smooth glass UI",
            "Applied responsive layout techniques with CSS modules/flexbox/grid as needed",
        ]),
        my_contribution: None,
    },
    Project {
        id: "transportation-app",
        title: "Public Transportation Bus App",
        description: "Mobile app for public bus transportation services in Sri Lanka. this system includes three apps: User, Admin, and Driver.",
        full_description: Some(
            "Developed a comprehensive mobile application for public bus transportation services in Sri Lanka, featuring three distinct apps: User, Admin, and Driver. The User app allows passengers to search for buses, calculate fares, and track bus locations in real-time. The Admin app manages reported posts and oversees operations, while the Driver app updates driver locations to enhance user experience.",
        ),
        technologies: &["Flutter", "Firebase", "Dart", "OpenRouteService API"],
        category: Category::Mobile,
        github: Some("https://github.com/BuddimaChamath/publicTranspotationSystemforBuses.git"),
        demo: Some("https://appetize.io/embed/b_rma43anq33jfj3kwobfwqzp56y"),
        image: Some(
            "https://images.unsplash.com/photo-1570125909232-eb263c188f7e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        ),
        screenshots: Some(&[
            "/assets/busApp/image1.jpg",
            "/assets/busApp/image2.jpg",
            "/assets/busApp/image3.jpg",
            "/assets/busApp/image4.jpg",
            "/assets/busApp/image5.jpg",
            "/assets/busApp/image6.jpg",
            "/assets/busApp/image7.jpg",
            "/assets/busApp/image8.jpg",
            "/assets/busApp/image9.jpg",
            "/assets/busApp/image10.jpg",
            "/assets/busApp/image11.jpg",
            "/assets/busApp/image12.jpg",
            "/assets/busApp/image13.jpg",
            "/assets/busApp/image14.jpg",
            "/assets/busApp/image15.jpg",
            "/assets/busApp/image16.jpg",
            "/assets/busApp/image17.jpg",
            "/assets/busApp/image18.jpg",
            "/assets/busApp/image19.jpg",
            "/assets/busApp/image20.jpg",
        ]),
        features: Some(&[
            "User App: Community News, Bus Search (via map and halt names), Fare Calculation, Bus Tracking, Bus Schedules",
            "Premium and Free Tier Plans for users",
            "Admin App: Manages reported posts and admin operations",
            "Driver App: Updates driver location in real-time to show in User App Map",
            "Integrated real-time bus route and distance tracking using OpenRouteService API",
            "Implemented reporting mechanism and content moderation for community safety",
        ]),
        team: Some("Academic solo project - Final Year Project"),
        duration: Some("4 months"),
        challenges: Some(&[
            "Integrating real-time location tracking across multiple app instances",
            "Designing an intuitive UI for three different user roles",
            "Implementing efficient data synchronization with Firebase",
        ]),
        solutions: Some(&[
            "Used OpenRouteService API for accurate route tracking and mapping",
            "Created role-specific interfaces with shared core functionality",
            "Implemented reporting mechanism and content moderation for community safety",
        ]),
        my_contribution: None,
    },
    Project {
        id: "gaming-community",
        title: "Game Lounge - A PC Game Details and Gamer Community App",
        description: "Mobile app for gamers to access PC game details and communicate with each other.",
        full_description: Some(
            "Contributed to a Flutter-based mobile application developed as a group project to help gamers stay updated on PC game details and communicate with each other using real-time chat functionality.",
        ),
        technologies: &["Flutter", "Firebase", "Dart", "RAWG API"],
        category: Category::Mobile,
        github: Some("https://github.com/BuddimaChamath/GameDetailApp---Mobile-CW2.git"),
        demo: None,
        image: Some(
            "https://images.unsplash.com/photo-1542751371-adc38448a05e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        ),
        screenshots: Some(&[
            "/assets/gameApp/game1.jpg",
            "/assets/gameApp/game2.jpg",
            "/assets/gameApp/game3.jpg",
            "/assets/gameApp/game4.jpg",
            "/assets/gameApp/game5.jpg",
        ]),
        features: Some(&[
            "Game detail screen showing release info, platform, and description using RAWG API to fetch data",
            "User registration and profile creation",
            "Real-time chat room for game discussions",
            "Firebase Firestore used for storing game data and messages",
            "Responsive mobile UI optimized for different devices",
            "Collaborated using Git and participated in agile-style task distribution",
        ]),
        team: Some("Academic team project - 4 members"),
        duration: Some("3 months"),
        challenges: Some(&[
            "Coordinating development tasks across a team of 4",
            "Integrating third-party API data with local database",
            "Implementing real-time chat functionality",
        ]),
        solutions: Some(&[
            "Used Git for version control and collaboration",
            "Created API service layer for data normalization",
            "Implemented Firebase real-time database for chat functionality",
        ]),
        my_contribution: None,
    },
    Project {
        id: "car-rental",
        title: "Car Rental System",
        description: "Windows app with login, reservation, billing, and UI forms.",
        full_description: Some(
            "A desktop application for car rental businesses to manage their fleet, customer bookings, and billing processes with a user-friendly interface.",
        ),
        technologies: &["C#", ".NET", "MS SQL"],
        category: Category::Desktop,
        github: Some("https://github.com/BuddimaChamath/CarRentalService"),
        demo: None,
        image: Some(
            "https://images.unsplash.com/photo-1568605117036-5fe5e7bab0b7?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        ),
        screenshots: None,
        features: Some(&[
            "User authentication and role-based access",
            "Vehicle inventory management",
            "Reservation and booking system",
            "Automated billing and invoicing",
            "Customer database management",
        ]),
        team: Some("Academic solo project"),
        duration: Some("1 and 1/2 months"),
        challenges: None,
        solutions: None,
        my_contribution: None,
    },
    Project {
        id: "hospital-management",
        title: "Hospital Management Website",
        description: "Role-based CRUD system for hospital operations.",
        full_description: Some(
            "A web-based hospital management system with features for patient management, appointments, billing, and staff scheduling tailored for healthcare institutions.",
        ),
        technologies: &["PHP", "HTML", "CSS", "JavaScript", "MySQL"],
        category: Category::Web,
        github: Some("https://github.com/BuddimaChamath/Simple-HMS"),
        demo: None,
        image: Some("https://images.unsplash.com/photo-1519494026892-80bbd2d6fd0d"),
        screenshots: None,
        features: Some(&[
            "Patient registration and medical history",
            "Doctor appointment scheduling",
            "Pharmacy inventory management",
            "Billing and insurance processing",
            "Staff management and scheduling",
        ]),
        team: Some("Academic solo project"),
        duration: Some("2 months"),
        challenges: None,
        solutions: None,
        my_contribution: None,
    },
    Project {
        id: "news-headlines",
        title: "News Articles Web App",
        description: "Responsive app fetching news via News API with Material UI.",
        full_description: Some(
            "A responsive web application that fetches and displays the latest news articles from various sources using the News API, with filtering and search capabilities.",
        ),
        technologies: &["React", "Vite", "Material UI", "News API"],
        category: Category::Web,
        github: Some("https://github.com/BuddimaChamath/NewsHeadlinesApp"),
        demo: None,
        image: Some(
            "https://images.unsplash.com/photo-1588681664899-f142ff2dc9b1?ixlib=rb-4.0.3&auto=format&fit=crop&w=1074&q=80",
        ),
        screenshots: None,
        features: Some(&[
            "News categorization and filtering",
            "Search functionality",
            "Responsive design for all devices",
            "Bookmarking favorite articles",
            "Dark/light theme toggle",
        ]),
        team: Some("Personal project"),
        duration: Some("1 month"),
        challenges: None,
        solutions: None,
        my_contribution: None,
    },
    Project {
        id: "flutter-news-app",
        title: "News Articles App",
        description: "Cross-platform mobile app for delivering categorized news articles with bookmarking and theme switching.",
        full_description: Some(
            "The News App is an Android mobile application designed to deliver up-to-date news articles to users, categorized by topic (e.g., business, sports, technology) using Flutter. It utilizes a public news API to fetch articles and presents them in a clean, user-friendly UI. The app also features offline bookmarking, allowing users to save their favorite articles for later reading.",
        ),
        technologies: &[
            "Flutter",
            "Dart",
            "HTTP package",
            "Provider",
            "Shared Preferences",
            "SQLite",
            "WebView Flutter",
        ],
        category: Category::Mobile,
        github: Some("https://github.com/BuddimaChamath/NewsApp---CW1-Part-B"),
        demo: Some("https://appetize.io/embed/b_xtci5jjvbme7mhpy5sf67gydv4"),
        image: Some(
            "https://images.unsplash.com/photo-1504711434969-e33886168f5c?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        ),
        screenshots: Some(&[
            "/assets/newsApp/news1.jpg",
            "/assets/newsApp/news2.jpg",
            "/assets/newsApp/news3.jpg",
            "/assets/newsApp/news4.jpg",
        ]),
        features: Some(&[
            "Fetch and display top headlines using a news API",
            "Categorized news filtering (e.g., Health, Tech, Sports)",
            "Article detail view with WebView integration for full articles",
            "Local bookmark system (CRUD operations)",
            "Theme switching between light and dark modes",
            "Responsive and smooth user interface",
        ]),
        team: Some("Academic solo project"),
        duration: Some("2 months"),
        challenges: Some(&[
            "Implementing efficient state management across multiple screens",
            "Creating a seamless bookmarking experience with local storage",
            "Building a responsive UI that works well across different device sizes",
        ]),
        solutions: Some(&[
            "Used Provider package for state management",
            "Implemented SQLite/Shared Preferences for bookmark storage",
            "Created adaptive layouts with Flutter's responsive design capabilities",
        ]),
        my_contribution: None,
    },
    Project {
        id: "smart-campus-system",
        title: "Smart Campus Management System",
        description: "Web-based platform for university administration, resource management, and communication.",
        full_description: Some(
            "The Smart Campus Management System is a web-based platform built to streamline university administration, resource allocation, scheduling, and communication between students, lecturers, and administrators. The system integrates learning and resource management into a single role-based platform with distinct dashboards for each user type. It enables real-time messaging, resource reservations, class/event scheduling, report generation, and file sharing.",
        ),
        technologies: &[
            "WAMP Stack",
            "PHP",
            "MySQL",
            "HTML",
            "CSS",
            "JavaScript",
            "Bootstrap",
            "TCPDF",
            "FullCalendar",
            "AJAX",
            "Figma",
        ],
        category: Category::Web,
        github: Some("https://github.com/BuddimaChamath/Smart_Campus-SDP-"),
        demo: None,
        image: Some(
            "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        ),
        screenshots: None,
        features: Some(&[
            "Role-based dashboards for Admins, Lecturers, and Students",
            "User management with secure authentication (registration, login, profile)",
            "Class and event scheduling, calendar management, and notifications",
            "Online resource reservation with conflict avoidance logic",
            "File upload (lecturers) and download (students) functionality",
            "Real-time messaging and email/SMS notifications",
            "Reporting system for event participation (PDF export using TCPDF)",
            "Fully responsive web design, accessible and scalable",
            "Security features include RBAC, HTTPS, MD5 password hashing, input sanitization",
        ]),
        team: Some("Academic team project - 4 members"),
        duration: Some("4 months"),
        challenges: Some(&[
            "Implementing secure role-based access control across multiple user types",
            "Creating PDF generation system for dynamic reports",
            "Building responsive interfaces for different devices and screen sizes",
            "Ensuring secure file upload/download system with role-based permissions",
        ]),
        solutions: Some(&[
            "Utilized TCPDF library for dynamic PDF report generation",
            "Implemented responsive design using Bootstrap and custom CSS",
            "Created role-based security system with proper authentication and authorization",
            "Built modular components for file handling with secure permissions",
        ]),
        my_contribution: Some(&[
            "Developed event participation reporting system with PDF exports using TCPDF",
            "Implemented email communication system for Admins to notify users",
            "Created lecturer and student mail viewing components with role-based filtering",
            "Built lecturer file upload and student file download interfaces",
            "Styled application using custom CSS and ensured frontend responsiveness",
            "Collaborated in agile sprints, participated in UI/UX prototyping using Figma",
        ]),
    },
];
