//! The fixed copy the portfolio renders.
//!
//! Everything here is a static, non-configurable string: the masthead,
//! the about text, the project gallery, the skills list, and the
//! social links. There is deliberately no loading or templating layer.

pub const NAME: &str = "Sulayman Rabiu";
pub const TAGLINE: &str = "Est. 2023 - Your Source for Web Development Excellence";

pub const ABOUT: &str = "Welcome to my Portfolio! I'm Sulayman, a dedicated frontend \
developer with a knack for creating engaging digital experiences. With over two years \
of hands-on experience, I combine aesthetics and functionality to build intuitive \
interfaces. My passion for clean code and user-centered design drives me to transform \
innovative ideas into seamless, interactive realities.";

pub const QUICK_FACTS: &[&str] = &[
    "2+ years of frontend experience",
    "First class BSc Software Engineering",
    "Always happy to learn something new",
    "Interested in Astronomy",
];

/// One entry in the project gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub github: &'static str,
    pub live: &'static str,
    pub technologies: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "CV-builder",
        description: "A responsive CV Builder that allows users to easily input, edit, \
            and submit personal, educational, and professional information.",
        github: "https://github.com/Sulaymancodes/cv-builder",
        live: "https://cv-builder-sulaymancodes.vercel.app/",
        technologies: &["React", "Tailwind css", "Vite", "Javascript"],
    },
    Project {
        title: "Insight (Todo List App)",
        description: "A Javascript Todo list app where users can create, manage, set \
            due dates, prioritize tasks, and save their data using localStorage.",
        github: "https://github.com/Sulaymancodes/Insight-todo-app-",
        live: "https://sulaymancodes.github.io/Insight-todo-app-/",
        technologies: &["JavaScript", "Webpack", "date-fns", "localStorage"],
    },
    Project {
        title: "Weather Forecast Site",
        description: "A responsive weather forecast app that allows users to search \
            for specific locations and provide weather details for that location.",
        github: "https://github.com/Sulaymancodes/weather-app",
        live: "https://sulaymancodes.github.io/weather-app/",
        technologies: &["JavaScript", "Visual Crossing API", "CSS"],
    },
];

/// A titled group of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        items: &[
            "React.js",
            "Tailwind Css",
            "HTML5 & CSS3",
            "JavaScript (ES6+)",
        ],
    },
    SkillGroup {
        title: "Backend",
        items: &["Node.js", "Express.js", "PostgreSQL", "RESTful APIs"],
    },
    SkillGroup {
        title: "Tools & Others",
        items: &[
            "Git & GitHub",
            "Webpack",
            "Jest & Testing Library",
            "Agile & Waterfall Methodologies",
        ],
    },
];

/// An outbound social profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/Sulaymancodes",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/sulaimanrsb/",
    },
    SocialLink {
        label: "X platform",
        url: "https://x.com/RsbSulayman",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/sulaymancodes/",
    },
];
