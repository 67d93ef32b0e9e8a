//! Static catalog: languages grouped by category, starter and advanced projects.
//!
//! Read-only data shipped with the binary.

use crate::domain::{Difficulty, Language, Project};

/// The terminal offers the first `TERMINAL_LANGUAGE_COUNT` entries of `LANGUAGES`.
pub const TERMINAL_LANGUAGE_COUNT: usize = 12;

/// Category key and its display title, in sidebar order.
pub const LANGUAGE_CATEGORIES: &[(&str, &str)] = &[
    ("general", "🧠 General-Purpose Programming Languages"),
    ("scripting", "🖥️ Scripting Languages"),
    ("functional", "🧮 Functional Programming Languages"),
    ("system", "🔧 Low-Level / System Languages"),
    ("scientific", "🧪 Scientific and Data Languages"),
    ("web", "🌐 Web Development Languages"),
    ("mobile", "📱 Mobile App Languages"),
    ("embedded", "🛠️ Embedded / Hardware Languages"),
    ("oop", "🧑‍💻 Object-Oriented Programming Languages"),
    ("legacy", "🏛️ Legacy / Historical Languages"),
    ("ai", "🧠 AI and Machine Learning-Oriented"),
    ("game", "🎮 Game Development Languages"),
];

pub const LANGUAGES: &[Language] = &[
    Language {
        id: "c",
        name: "C",
        category: "general",
        icon: "⚡",
        description: "A powerful general-purpose programming language",
        difficulty: Difficulty::Intermediate,
        popularity: 85,
        file_extension: ".c",
        features: &["Low-level control", "Memory management", "System programming"],
    },
    Language {
        id: "cpp",
        name: "C++",
        category: "general",
        icon: "🚀",
        description: "Extension of C with object-oriented features",
        difficulty: Difficulty::Advanced,
        popularity: 90,
        file_extension: ".cpp",
        features: &["Object-oriented", "Templates", "Performance"],
    },
    Language {
        id: "java",
        name: "Java",
        category: "general",
        icon: "☕",
        description: "Write once, run anywhere platform",
        difficulty: Difficulty::Intermediate,
        popularity: 95,
        file_extension: ".java",
        features: &["Platform independent", "Object-oriented", "Enterprise ready"],
    },
    Language {
        id: "python",
        name: "Python",
        category: "general",
        icon: "🐍",
        description: "Simple, readable, and versatile programming language",
        difficulty: Difficulty::Beginner,
        popularity: 98,
        file_extension: ".py",
        features: &["Easy to learn", "Versatile", "Large ecosystem"],
    },
    Language {
        id: "csharp",
        name: "C#",
        category: "general",
        icon: "🔷",
        description: "Modern, object-oriented programming language",
        difficulty: Difficulty::Intermediate,
        popularity: 82,
        file_extension: ".cs",
        features: &["Type-safe", ".NET ecosystem", "Cross-platform"],
    },
    Language {
        id: "javascript",
        name: "JavaScript",
        category: "general",
        icon: "🌟",
        description: "The language of the web",
        difficulty: Difficulty::Beginner,
        popularity: 97,
        file_extension: ".js",
        features: &["Dynamic", "Event-driven", "Full-stack capable"],
    },
    Language {
        id: "go",
        name: "Go",
        category: "general",
        icon: "🚀",
        description: "Fast, reliable, and efficient programming language",
        difficulty: Difficulty::Intermediate,
        popularity: 78,
        file_extension: ".go",
        features: &["Concurrent", "Fast compilation", "Simple syntax"],
    },
    Language {
        id: "ruby",
        name: "Ruby",
        category: "general",
        icon: "💎",
        description: "A programmer's best friend",
        difficulty: Difficulty::Beginner,
        popularity: 72,
        file_extension: ".rb",
        features: &["Readable", "Flexible", "Web development"],
    },
    Language {
        id: "swift",
        name: "Swift",
        category: "general",
        icon: "🦉",
        description: "Modern language for iOS and macOS development",
        difficulty: Difficulty::Intermediate,
        popularity: 75,
        file_extension: ".swift",
        features: &["Type-safe", "Performance", "Modern syntax"],
    },
    Language {
        id: "kotlin",
        name: "Kotlin",
        category: "general",
        icon: "🎯",
        description: "Modern programming language for Android",
        difficulty: Difficulty::Intermediate,
        popularity: 80,
        file_extension: ".kt",
        features: &["Interoperable", "Concise", "Safe"],
    },
    Language {
        id: "rust",
        name: "Rust",
        category: "general",
        icon: "🦀",
        description: "Systems programming with memory safety",
        difficulty: Difficulty::Advanced,
        popularity: 83,
        file_extension: ".rs",
        features: &["Memory safe", "Zero-cost abstractions", "Concurrent"],
    },
    Language {
        id: "dart",
        name: "Dart",
        category: "general",
        icon: "🎪",
        description: "Client-optimized language for fast apps",
        difficulty: Difficulty::Intermediate,
        popularity: 71,
        file_extension: ".dart",
        features: &["Flutter framework", "Hot reload", "Object-oriented"],
    },
    Language {
        id: "typescript",
        name: "TypeScript",
        category: "general",
        icon: "📘",
        description: "JavaScript with static type definitions",
        difficulty: Difficulty::Intermediate,
        popularity: 89,
        file_extension: ".ts",
        features: &["Type safety", "Modern features", "JavaScript compatible"],
    },
    // Scripting
    Language {
        id: "bash",
        name: "Bash",
        category: "scripting",
        icon: "📟",
        description: "Unix shell and command language",
        difficulty: Difficulty::Intermediate,
        popularity: 85,
        file_extension: ".sh",
        features: &["System automation", "Command line", "Text processing"],
    },
    Language {
        id: "perl",
        name: "Perl",
        category: "scripting",
        icon: "🐪",
        description: "Practical extraction and reporting language",
        difficulty: Difficulty::Intermediate,
        popularity: 45,
        file_extension: ".pl",
        features: &["Text processing", "Regular expressions", "System administration"],
    },
    Language {
        id: "lua",
        name: "Lua",
        category: "scripting",
        icon: "🌙",
        description: "Lightweight, embeddable scripting language",
        difficulty: Difficulty::Beginner,
        popularity: 52,
        file_extension: ".lua",
        features: &["Lightweight", "Embeddable", "Game scripting"],
    },
    Language {
        id: "php",
        name: "PHP",
        category: "scripting",
        icon: "🐘",
        description: "Server-side scripting language",
        difficulty: Difficulty::Beginner,
        popularity: 78,
        file_extension: ".php",
        features: &["Web development", "Server-side", "Database integration"],
    },
    Language {
        id: "powershell",
        name: "PowerShell",
        category: "scripting",
        icon: "⚡",
        description: "Task automation and configuration management",
        difficulty: Difficulty::Intermediate,
        popularity: 68,
        file_extension: ".ps1",
        features: &["Windows automation", "Object-oriented", "Cloud management"],
    },
    Language {
        id: "r",
        name: "R",
        category: "scripting",
        icon: "📊",
        description: "Statistical computing and graphics",
        difficulty: Difficulty::Intermediate,
        popularity: 75,
        file_extension: ".r",
        features: &["Statistical analysis", "Data visualization", "Machine learning"],
    },
    // Web
    Language {
        id: "html",
        name: "HTML",
        category: "web",
        icon: "🏗️",
        description: "HyperText Markup Language",
        difficulty: Difficulty::Beginner,
        popularity: 95,
        file_extension: ".html",
        features: &["Structure", "Semantic markup", "Accessibility"],
    },
    Language {
        id: "css",
        name: "CSS",
        category: "web",
        icon: "🎨",
        description: "Cascading Style Sheets",
        difficulty: Difficulty::Beginner,
        popularity: 93,
        file_extension: ".css",
        features: &["Styling", "Responsive design", "Animations"],
    },
    // Functional
    Language {
        id: "haskell",
        name: "Haskell",
        category: "functional",
        icon: "📐",
        description: "Purely functional programming language",
        difficulty: Difficulty::Advanced,
        popularity: 38,
        file_extension: ".hs",
        features: &["Pure functions", "Lazy evaluation", "Type system"],
    },
    Language {
        id: "elixir",
        name: "Elixir",
        category: "functional",
        icon: "💜",
        description: "Dynamic, functional language for scalable applications",
        difficulty: Difficulty::Intermediate,
        popularity: 42,
        file_extension: ".ex",
        features: &["Concurrent", "Fault-tolerant", "Distributed"],
    },
    Language {
        id: "clojure",
        name: "Clojure",
        category: "functional",
        icon: "🌿",
        description: "Dynamic, functional dialect of the Lisp programming language",
        difficulty: Difficulty::Advanced,
        popularity: 35,
        file_extension: ".clj",
        features: &["Immutable data", "JVM compatible", "Concurrent programming"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "python-calculator",
        title: "Simple Calculator",
        description: "Build a basic calculator with GUI using tkinter",
        difficulty: Difficulty::Beginner,
        language_id: "python",
        estimated_time: "2-3 hours",
        skills: &["Basic syntax", "Functions", "GUI programming"],
    },
    Project {
        id: "python-todo",
        title: "To-Do List App",
        description: "Create a task management application with file storage",
        difficulty: Difficulty::Beginner,
        language_id: "python",
        estimated_time: "4-5 hours",
        skills: &["File handling", "Data structures", "User input"],
    },
    Project {
        id: "python-weather",
        title: "Weather App",
        description: "Fetch weather data from API and display it beautifully",
        difficulty: Difficulty::Intermediate,
        language_id: "python",
        estimated_time: "6-8 hours",
        skills: &["API integration", "JSON handling", "Error handling"],
    },
    Project {
        id: "python-web-scraper",
        title: "Web Scraper",
        description: "Extract data from websites using BeautifulSoup",
        difficulty: Difficulty::Intermediate,
        language_id: "python",
        estimated_time: "8-10 hours",
        skills: &["Web scraping", "HTML parsing", "Data processing"],
    },
    Project {
        id: "python-chatbot",
        title: "AI Chatbot",
        description: "Build an intelligent chatbot using NLP libraries",
        difficulty: Difficulty::Advanced,
        language_id: "python",
        estimated_time: "15-20 hours",
        skills: &["Machine learning", "NLP", "AI integration"],
    },
    Project {
        id: "js-clock",
        title: "Digital Clock",
        description: "Create an interactive digital clock with multiple time zones",
        difficulty: Difficulty::Beginner,
        language_id: "javascript",
        estimated_time: "2-3 hours",
        skills: &["DOM manipulation", "Date objects", "CSS styling"],
    },
    Project {
        id: "js-quiz",
        title: "Quiz Application",
        description: "Interactive quiz game with scoring and timer",
        difficulty: Difficulty::Intermediate,
        language_id: "javascript",
        estimated_time: "6-8 hours",
        skills: &["Event handling", "Local storage", "Game logic"],
    },
    Project {
        id: "js-expense-tracker",
        title: "Expense Tracker",
        description: "Personal finance management application",
        difficulty: Difficulty::Intermediate,
        language_id: "javascript",
        estimated_time: "10-12 hours",
        skills: &["Data persistence", "Charts/graphs", "Form validation"],
    },
    Project {
        id: "java-banking",
        title: "Banking System",
        description: "Simple banking application with account management",
        difficulty: Difficulty::Intermediate,
        language_id: "java",
        estimated_time: "12-15 hours",
        skills: &["OOP concepts", "File I/O", "Exception handling"],
    },
    Project {
        id: "java-library",
        title: "Library Management",
        description: "Manage books, members, and borrowing system",
        difficulty: Difficulty::Advanced,
        language_id: "java",
        estimated_time: "20-25 hours",
        skills: &["Database integration", "GUI development", "System design"],
    },
];

/// Larger full-stack builds, listed apart from the per-language starters.
pub const ADVANCED_PROJECTS: &[Project] = &[
    Project {
        id: "full-stack-blog",
        title: "Full-Stack Blog Platform",
        description: "Complete blogging platform with authentication, comments, and admin panel",
        difficulty: Difficulty::Advanced,
        language_id: "javascript",
        estimated_time: "40-50 hours",
        skills: &[
            "Frontend development",
            "Backend APIs",
            "Database design",
            "Authentication",
        ],
    },
    Project {
        id: "ecommerce-platform",
        title: "E-Commerce Website",
        description: "Online shopping platform with payment integration",
        difficulty: Difficulty::Advanced,
        language_id: "javascript",
        estimated_time: "60-80 hours",
        skills: &[
            "Full-stack development",
            "Payment processing",
            "Inventory management",
        ],
    },
    Project {
        id: "social-media-app",
        title: "Social Media Application",
        description: "Social networking app with real-time features",
        difficulty: Difficulty::Advanced,
        language_id: "javascript",
        estimated_time: "80-100 hours",
        skills: &[
            "Real-time communication",
            "Media handling",
            "Scalable architecture",
        ],
    },
];

/// Which project list to browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTrack {
    LanguageSpecific,
    Advanced,
}

impl ProjectTrack {
    pub fn projects(self) -> &'static [Project] {
        match self {
            ProjectTrack::LanguageSpecific => PROJECTS,
            ProjectTrack::Advanced => ADVANCED_PROJECTS,
        }
    }
}

/// Project list filter. `None` and an empty search match everything.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Case-insensitive substring of the title or description.
    pub search: String,
    pub difficulty: Option<Difficulty>,
    pub language_id: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle);
        let matches_difficulty = self.difficulty.is_none_or(|d| d == project.difficulty);
        let matches_language = self
            .language_id
            .as_deref()
            .is_none_or(|id| id == project.language_id);
        matches_search && matches_difficulty && matches_language
    }
}

pub fn language_by_id(id: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.id == id)
}

pub fn terminal_languages() -> &'static [Language] {
    &LANGUAGES[..TERMINAL_LANGUAGE_COUNT]
}

pub fn terminal_language_by_id(id: &str) -> Option<&'static Language> {
    terminal_languages().iter().find(|l| l.id == id)
}

pub fn languages_by_category(category: &str) -> Vec<&'static Language> {
    LANGUAGES.iter().filter(|l| l.category == category).collect()
}

/// Categories that hold at least one language, in sidebar order.
pub fn populated_categories() -> Vec<(&'static str, &'static str)> {
    LANGUAGE_CATEGORIES
        .iter()
        .copied()
        .filter(|(key, _)| LANGUAGES.iter().any(|l| l.category == *key))
        .collect()
}

pub fn projects_by_language(language_id: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| p.language_id == language_id)
        .collect()
}

pub fn filter_projects(track: ProjectTrack, filter: &ProjectFilter) -> Vec<&'static Project> {
    track.projects().iter().filter(|p| filter.matches(p)).collect()
}

/// Languages that have at least one project on either track, in catalog order.
pub fn project_languages() -> Vec<&'static Language> {
    LANGUAGES
        .iter()
        .filter(|l| {
            PROJECTS
                .iter()
                .chain(ADVANCED_PROJECTS)
                .any(|p| p.language_id == l.id)
        })
        .collect()
}
