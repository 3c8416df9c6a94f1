//! Demo corpus used to populate a fresh store

use crate::types::{Profile, Viewer};

pub const DEMO_EMAIL: &str = "john@example.com";
pub const DEMO_PASSWORD: &str = "password123";

/// (name, age, current school, dream school, major, study interest, timeframe)
const DEMO_PROFILES: &[(&str, u32, &str, &str, &str, &str, &str)] = &[
    ("Sarah Chen", 20, "Stanford University", "MIT", "Computer Science", "AI fundamentals", "Weekday mornings"),
    ("Mike Johnson", 22, "MIT", "Harvard Business School", "Mathematics", "Probability theory", "Afternoons"),
    ("Emily Rodriguez", 21, "Harvard University", "Stanford University", "Biology", "Genetics", "Weekends"),
    ("David Kim", 23, "Stanford University", "Caltech", "Physics", "Quantum computing", "Evenings"),
    ("Lisa Wang", 20, "Yale University", "Wharton", "Business", "Market analysis", "Early mornings"),
    ("Alex Turner", 22, "MIT", "Stanford University", "Engineering", "Robotics", "Flexible"),
    ("Maya Patel", 21, "Princeton", "Columbia University", "Psychology", "Behavioral research", "Weeknights"),
    ("Chris Lee", 24, "Stanford University", "Oxford University", "Chemistry", "Organic synthesis", "Afternoons"),
    ("Alice Writer", 21, "Columbia University", "Oxford", "English", "English literature", "Weekends"),
    ("Bob Coder", 22, "MIT", "Stanford", "Computer Science", "Programming", "Late nights"),
    ("Charlie Fullstack", 23, "Berkeley", "MIT", "EECS", "Programming, AI", "Flexible"),
    ("Diana Martinez", 20, "Stanford University", "Harvard", "Computer Science", "Programming, AI", "Evenings and weekends"),
    ("Ethan Brown", 22, "Oxford University", "Stanford", "Philosophy", "English literature", "Mornings"),
    ("Fiona Zhang", 21, "MIT", "MIT", "Computer Science", "Programming, Algorithms", "Evenings"),
    ("Gabriel Santos", 23, "Harvard", "MIT", "Economics", "Market analysis, Statistics", "Afternoons"),
    ("Hannah Lee", 20, "Yale", "Columbia", "English", "English literature, Poetry", "Weekends"),
    ("Isaac Chen", 24, "Stanford University", "Oxford University", "Computer Science", "Programming, Machine Learning", "Evenings and weekends"),
    ("Julia Park", 21, "Princeton", "Stanford", "Computer Science", "Programming, Web dev", "Flexible"),
    ("Kevin Nguyen", 22, "Berkeley", "MIT", "Engineering", "Robotics, AI", "Late nights"),
    ("Laura Wilson", 20, "Columbia", "Harvard", "Literature", "English literature, Creative writing", "Weekends"),
    ("Marcus Taylor", 23, "MIT", "Stanford University", "Computer Science", "Programming, Data science", "Evenings"),
    ("Nina Patel", 21, "Stanford University", "Oxford", "Computer Science", "Programming, Software engineering", "Evenings and weekends"),
    ("Oliver James", 22, "Harvard", "MIT", "Mathematics", "Calculus, Programming", "Mornings"),
    ("Priya Sharma", 20, "Yale", "Stanford", "Biology", "Genetics, Research", "Afternoons"),
    ("Quinn Rodriguez", 24, "Oxford University", "Cambridge", "English", "English literature, Linguistics", "Flexible"),
    ("Rachel Kim", 21, "Stanford University", "MIT", "Computer Science", "Programming, AI, Machine Learning", "Evenings and weekends"),
    ("Sam Torres", 23, "MIT", "Stanford", "Data Science", "Data analysis, ML, Statistics", "Evenings"),
    ("Tina Wu", 22, "Berkeley", "MIT", "Engineering", "Robotics, Automation, AI", "Flexible"),
    ("Uma Patel", 20, "Columbia", "Harvard", "Psychology", "Behavioral science, Cognitive science", "Mornings"),
    ("Victor Chen", 21, "Princeton", "Stanford", "Philosophy", "Ethics, Critical thinking, Logic", "Afternoons"),
    ("Wendy Liu", 24, "Yale", "Oxford", "Art", "Painting, Design, Visual arts", "Weekends"),
    ("Xavier Johnson", 22, "Harvard", "MIT", "Economics", "Business, Finance, Market analysis", "Evenings"),
    ("Yara Hassan", 21, "Stanford University", "MIT", "Computer Science", "Web development, Frontend, Fullstack", "Flexible"),
    ("Zoe Martinez", 20, "MIT", "Stanford", "Physics", "Quantum physics, Astrophysics", "Late nights"),
    ("Adam Brown", 23, "Berkeley", "MIT", "Chemistry", "Organic chemistry, Biochemistry", "Mornings"),
    ("Bella Singh", 22, "Oxford", "Cambridge", "History", "World history, Ancient history", "Afternoons"),
    ("Carlos Rivera", 21, "Columbia", "Harvard", "Music", "Composition, Performance, Theory", "Evenings"),
    ("Diana Lee", 24, "Yale", "Stanford", "Computer Science", "Software engineering, Development, Coding", "Flexible"),
];

/// Candidate profiles of the demo corpus
pub fn demo_candidates() -> Vec<Profile> {
    DEMO_PROFILES
        .iter()
        .map(|&(name, age, current, dream, major, interest, timeframe)| {
            Profile::new(name)
                .with_age(age)
                .with_schools(current, dream)
                .with_major(major)
                .with_interest(interest)
                .with_timeframe(timeframe)
        })
        .collect()
}

/// The demo account's viewer
pub fn demo_viewer() -> Viewer {
    let mut viewer = Viewer::with_friends(
        Profile::new("John Doe")
            .with_age(20)
            .with_schools("Stanford University", "MIT")
            .with_major("Computer Science")
            .with_interest("Programming, English literature")
            .with_timeframe("Evenings and weekends"),
        ["Alice Writer", "Bob Coder", "Charlie Fullstack"],
    );
    viewer.bio = Some("Passionate about coding and literature. Looking for study partners!".to_string());
    viewer
}
