//! Interest vocabulary for synonym-aware matching

/// Interest synonym table
///
/// Format: (key, [synonyms...]). Lookups are one hop in both directions:
/// a key expands to its synonyms, and a synonym expands to every key that
/// lists it plus that key's synonyms.
pub const INTEREST_SYNONYMS: &[(&str, &[&str])] = &[
    // Computer science & programming
    (
        "programming",
        &[
            "coding",
            "software development",
            "computer science",
            "web development",
            "app development",
            "algorithms",
            "software engineering",
            "development",
            "programming languages",
        ],
    ),
    (
        "computer science",
        &[
            "programming",
            "coding",
            "software engineering",
            "algorithms",
            "data structures",
            "ai",
            "machine learning",
            "cs",
            "computing",
        ],
    ),
    (
        "coding",
        &[
            "programming",
            "software development",
            "computer science",
            "development",
            "web dev",
        ],
    ),
    (
        "ai",
        &[
            "artificial intelligence",
            "machine learning",
            "deep learning",
            "neural networks",
            "computer science",
            "ml",
            "data science",
        ],
    ),
    (
        "machine learning",
        &[
            "ai",
            "artificial intelligence",
            "ml",
            "deep learning",
            "data science",
            "neural networks",
        ],
    ),
    (
        "web development",
        &[
            "web dev",
            "frontend",
            "backend",
            "fullstack",
            "programming",
            "coding",
            "javascript",
            "html",
            "css",
        ],
    ),
    (
        "data science",
        &[
            "data analysis",
            "statistics",
            "machine learning",
            "ai",
            "big data",
            "analytics",
        ],
    ),
    // Literature & writing
    (
        "english literature",
        &[
            "english",
            "literature",
            "creative writing",
            "poetry",
            "novels",
            "reading",
            "literary analysis",
            "books",
        ],
    ),
    (
        "literature",
        &[
            "english literature",
            "reading",
            "books",
            "novels",
            "poetry",
            "creative writing",
        ],
    ),
    (
        "creative writing",
        &[
            "writing",
            "english literature",
            "poetry",
            "fiction",
            "storytelling",
            "composition",
        ],
    ),
    (
        "poetry",
        &[
            "creative writing",
            "literature",
            "english literature",
            "verse",
            "poems",
        ],
    ),
    // Mathematics & sciences
    (
        "mathematics",
        &[
            "math",
            "calculus",
            "algebra",
            "geometry",
            "statistics",
            "probability",
            "maths",
            "mathematical analysis",
        ],
    ),
    (
        "math",
        &["mathematics", "calculus", "algebra", "statistics", "geometry"],
    ),
    (
        "calculus",
        &["mathematics", "math", "analysis", "derivatives", "integrals"],
    ),
    (
        "statistics",
        &[
            "math",
            "mathematics",
            "data analysis",
            "probability",
            "data science",
            "stats",
        ],
    ),
    (
        "biology",
        &[
            "life science",
            "genetics",
            "anatomy",
            "physiology",
            "microbiology",
            "bio",
            "life sciences",
        ],
    ),
    (
        "genetics",
        &["biology", "dna", "heredity", "molecular biology", "life science"],
    ),
    (
        "physics",
        &[
            "mechanics",
            "quantum physics",
            "astrophysics",
            "thermodynamics",
            "physical science",
        ],
    ),
    (
        "chemistry",
        &[
            "organic chemistry",
            "biochemistry",
            "inorganic chemistry",
            "chem",
            "chemical science",
        ],
    ),
    // Social sciences
    (
        "psychology",
        &[
            "behavioral science",
            "cognitive science",
            "neuroscience",
            "psych",
            "mental health",
        ],
    ),
    (
        "economics",
        &[
            "business",
            "finance",
            "microeconomics",
            "macroeconomics",
            "econ",
            "economy",
        ],
    ),
    (
        "business",
        &[
            "economics",
            "finance",
            "marketing",
            "management",
            "entrepreneurship",
            "commerce",
        ],
    ),
    (
        "history",
        &[
            "world history",
            "european history",
            "american history",
            "ancient history",
            "historical studies",
        ],
    ),
    // Arts & humanities
    (
        "art",
        &[
            "painting",
            "drawing",
            "sculpture",
            "art history",
            "design",
            "visual arts",
            "fine arts",
        ],
    ),
    (
        "music",
        &[
            "theory",
            "composition",
            "performance",
            "music history",
            "musical studies",
        ],
    ),
    (
        "philosophy",
        &[
            "ethics",
            "logic",
            "metaphysics",
            "epistemology",
            "critical thinking",
        ],
    ),
    // Engineering & technology
    (
        "engineering",
        &[
            "mechanical engineering",
            "electrical engineering",
            "civil engineering",
            "robotics",
            "technology",
        ],
    ),
    (
        "robotics",
        &[
            "engineering",
            "ai",
            "automation",
            "mechanical engineering",
            "programming",
        ],
    ),
];
