use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Required skills per canonical role, used for the matching/missing skill
/// breakdown in ATS reports. Lookup is by the raw applied-role string;
/// unknown roles get an empty requirement list.
pub static ROLE_REQUIREMENTS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        m.insert(
            "Software Engineer",
            &[
                "javascript",
                "python",
                "java",
                "data structures",
                "algorithms",
                "problem solving",
                "git",
                "software design",
            ][..],
        );
        m.insert(
            "Data Scientist",
            &[
                "python",
                "machine learning",
                "statistics",
                "sql",
                "data analysis",
                "r",
                "deep learning",
                "data visualization",
                "numpy",
                "pandas",
            ][..],
        );
        m.insert(
            "Frontend Developer",
            &[
                "html",
                "css",
                "javascript",
                "react",
                "responsive design",
                "typescript",
                "vue.js",
                "angular",
                "web accessibility",
                "sass",
            ][..],
        );
        m.insert(
            "Backend Developer",
            &[
                "node.js",
                "python",
                "java",
                "databases",
                "api design",
                "spring",
                "django",
                "express.js",
                "microservices",
                "redis",
            ][..],
        );
        m.insert(
            "Full Stack Developer",
            &[
                "javascript",
                "html",
                "css",
                "node.js",
                "databases",
                "react",
                "api integration",
                "git",
                "aws",
                "docker",
            ][..],
        );
        m.insert(
            "DevOps Engineer",
            &[
                "aws",
                "docker",
                "kubernetes",
                "ci/cd",
                "linux",
                "terraform",
                "ansible",
                "jenkins",
                "monitoring",
                "security",
            ][..],
        );
        m.insert(
            "UI/UX Designer",
            &[
                "ui design",
                "ux research",
                "figma",
                "wireframing",
                "prototyping",
                "adobe xd",
                "sketch",
                "user testing",
                "interaction design",
            ][..],
        );
        m.insert(
            "Product Manager",
            &[
                "product strategy",
                "agile",
                "user research",
                "roadmapping",
                "stakeholder management",
                "analytics",
                "market research",
            ][..],
        );
        m.insert(
            "Mobile Developer",
            &[
                "react native",
                "flutter",
                "ios",
                "android",
                "swift",
                "kotlin",
                "mobile ui design",
                "app performance",
            ][..],
        );
        m.insert(
            "Cloud Architect",
            &[
                "aws",
                "azure",
                "gcp",
                "cloud security",
                "microservices",
                "serverless",
                "networking",
                "scalability",
            ][..],
        );
        m.insert(
            "Data Engineer",
            &[
                "sql",
                "etl",
                "data warehousing",
                "python",
                "spark",
                "hadoop",
                "airflow",
                "data modeling",
            ][..],
        );
        m.insert(
            "Security Engineer",
            &[
                "cybersecurity",
                "network security",
                "penetration testing",
                "security tools",
                "cryptography",
                "risk assessment",
            ][..],
        );
        m.insert(
            "QA Engineer",
            &[
                "test automation",
                "selenium",
                "manual testing",
                "test planning",
                "api testing",
                "performance testing",
                "jira",
            ][..],
        );
        m.insert(
            "Machine Learning Engineer",
            &[
                "python",
                "deep learning",
                "tensorflow",
                "pytorch",
                "nlp",
                "computer vision",
                "model deployment",
            ][..],
        );
        m.insert(
            "Systems Architect",
            &[
                "system design",
                "scalability",
                "distributed systems",
                "performance optimization",
                "technical leadership",
            ][..],
        );
        m.insert(
            "Blockchain Developer",
            &[
                "solidity",
                "web3",
                "smart contracts",
                "ethereum",
                "blockchain protocols",
                "cryptography",
            ][..],
        );
        m.insert(
            "AR/VR Developer",
            &[
                "unity",
                "unreal engine",
                "3d modeling",
                "ar frameworks",
                "vr development",
                "computer graphics",
            ][..],
        );
        m.insert(
            "Technical Writer",
            &[
                "documentation",
                "api documentation",
                "technical communication",
                "markdown",
                "content strategy",
            ][..],
        );
        m.insert(
            "Database Administrator",
            &[
                "sql",
                "database optimization",
                "backup and recovery",
                "mongodb",
                "postgresql",
                "oracle",
            ][..],
        );
        m.insert(
            "Network Engineer",
            &[
                "networking protocols",
                "cisco",
                "network security",
                "vpn",
                "routing",
                "switching",
            ][..],
        );
        m.insert(
            "Business Analyst",
            &[
                "requirements gathering",
                "data analysis",
                "sql",
                "business process",
                "stakeholder management",
            ][..],
        );
        m.insert(
            "Embedded Systems Engineer",
            &[
                "c",
                "c++",
                "microcontrollers",
                "rtos",
                "embedded linux",
                "hardware interfaces",
            ][..],
        );
        m.insert(
            "Game Developer",
            &[
                "unity",
                "unreal engine",
                "c++",
                "game design",
                "3d graphics",
                "physics engines",
            ][..],
        );
        m.insert(
            "AI Engineer",
            &[
                "machine learning",
                "neural networks",
                "nlp",
                "computer vision",
                "ai frameworks",
                "algorithm design",
            ][..],
        );
        m
    });

/// Required skills for a role, or an empty slice when the role is unknown.
pub fn required_skills(applied_role: &str) -> &'static [&'static str] {
    ROLE_REQUIREMENTS.get(applied_role).copied().unwrap_or(&[])
}

/// Keywords that map candidate skills onto roles, for the inference
/// fallback when a candidate has no stored recommendations.
pub static ROLE_KEYWORDS: Lazy<Vec<(&'static str, &'static [&'static str])>> = Lazy::new(|| {
    vec![
        (
            "Software Engineer",
            &[
                "javascript",
                "python",
                "java",
                "react",
                "node",
                "typescript",
                "programming",
            ][..],
        ),
        (
            "Data Scientist",
            &["python", "machine learning", "data analysis", "statistics", "sql"][..],
        ),
        (
            "Frontend Developer",
            &[
                "html",
                "css",
                "javascript",
                "react",
                "angular",
                "vue",
                "frontend",
                "front-end",
                "front end",
                "senior frontend",
                "senior front-end",
            ][..],
        ),
        (
            "Backend Developer",
            &[
                "node", "python", "java", "php", "sql", "mongodb", "backend", "back-end",
                "back end",
            ][..],
        ),
        (
            "Full Stack Developer",
            &[
                "javascript",
                "python",
                "react",
                "node",
                "mongodb",
                "full stack",
                "fullstack",
                "full-stack",
            ][..],
        ),
        (
            "DevOps Engineer",
            &["aws", "docker", "kubernetes", "ci/cd", "jenkins", "devops"][..],
        ),
        (
            "UI/UX Designer",
            &[
                "ui",
                "ux",
                "design",
                "figma",
                "adobe",
                "user interface",
                "user experience",
            ][..],
        ),
        (
            "Product Manager",
            &["product", "management", "agile", "scrum", "leadership"][..],
        ),
    ]
});
