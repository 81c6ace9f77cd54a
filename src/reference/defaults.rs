//! Built-in reference data used when no usable store record exists.

use super::dictionary::{AliasDictionary, CategoryDictionary, UNCATEGORIZED};

/// Default alias → canonical skill pairs.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    // Programming languages
    ("python", "python"),
    ("java", "java"),
    ("javascript", "javascript"),
    ("typescript", "typescript"),
    ("c++", "c++"),
    ("c#", "c#"),
    ("ruby", "ruby"),
    ("php", "php"),
    ("go", "go"),
    ("rust", "rust"),
    ("scala", "scala"),
    ("kotlin", "kotlin"),
    ("perl", "perl"),
    ("swift", "swift"),
    ("r", "r (programming language)"),
    ("matlab", "matlab"),
    ("bash", "bash"),
    ("powershell", "powershell"),
    ("html", "html"),
    ("css", "css"),
    ("xml", "xml"),
    ("json", "json"),
    ("yaml", "yaml"),
    // Databases
    ("sql", "sql"),
    ("mysql", "mysql"),
    ("postgresql", "postgresql"),
    ("postgres", "postgresql"),
    ("oracle", "oracle database"),
    ("mongodb", "mongodb"),
    ("cassandra", "cassandra"),
    ("redis", "redis"),
    ("dynamodb", "dynamodb"),
    ("sqlite", "sqlite"),
    ("mariadb", "mariadb"),
    ("neo4j", "neo4j"),
    ("elasticsearch", "elasticsearch"),
    // Cloud & infrastructure
    ("aws", "aws"),
    ("amazon web services", "aws"),
    ("azure", "azure"),
    ("microsoft azure", "azure"),
    ("gcp", "gcp"),
    ("google cloud", "gcp"),
    ("terraform", "terraform"),
    ("kubernetes", "kubernetes"),
    ("k8s", "kubernetes"),
    ("docker", "docker"),
    ("jenkins", "jenkins"),
    ("ansible", "ansible"),
    ("puppet", "puppet"),
    ("chef", "chef"),
    ("vagrant", "vagrant"),
    ("github actions", "github actions"),
    ("gitlab ci", "gitlab ci"),
    ("circleci", "circleci"),
    ("travis ci", "travis ci"),
    // Data science & ML
    ("machine learning", "machine learning"),
    ("ml", "machine learning"),
    ("tensorflow", "tensorflow"),
    ("pytorch", "pytorch"),
    ("keras", "keras"),
    ("scikit-learn", "scikit-learn"),
    ("sklearn", "scikit-learn"),
    ("pandas", "pandas"),
    ("numpy", "numpy"),
    ("scipy", "scipy"),
    ("matplotlib", "matplotlib"),
    ("seaborn", "seaborn"),
    ("jupyter", "jupyter"),
    ("deep learning", "deep learning"),
    ("nlp", "natural language processing"),
    ("natural language processing", "natural language processing"),
    ("computer vision", "computer vision"),
    ("data mining", "data mining"),
    // BI & analytics
    ("tableau", "tableau"),
    ("power bi", "power bi"),
    ("looker", "looker"),
    ("qlik", "qlik"),
    ("excel", "excel"),
    ("powerpoint", "powerpoint"),
    ("word", "microsoft word"),
    // Web frameworks & libraries
    ("react", "react"),
    ("angular", "angular"),
    ("vue", "vue.js"),
    ("django", "django"),
    ("flask", "flask"),
    ("spring", "spring"),
    ("spring boot", "spring boot"),
    ("express", "express.js"),
    ("node", "node.js"),
    ("nodejs", "node.js"),
    ("jquery", "jquery"),
    ("bootstrap", "bootstrap"),
    ("tailwind", "tailwind css"),
    ("laravel", "laravel"),
    ("rails", "ruby on rails"),
    ("asp.net", "asp.net"),
    ("next.js", "next.js"),
    ("gatsby", "gatsby"),
    // Mobile
    ("android", "android"),
    ("ios", "ios"),
    ("react native", "react native"),
    ("flutter", "flutter"),
    ("xamarin", "xamarin"),
    // Version control & collaboration
    ("git", "git"),
    ("github", "github"),
    ("gitlab", "gitlab"),
    ("bitbucket", "bitbucket"),
    ("jira", "jira"),
    ("confluence", "confluence"),
    ("slack", "slack"),
    // DevOps practices
    ("ci/cd", "ci/cd"),
    ("continuous integration", "continuous integration"),
    ("continuous deployment", "continuous deployment"),
    ("devops", "devops"),
    // Testing
    ("junit", "junit"),
    ("selenium", "selenium"),
    ("cypress", "cypress"),
    ("jest", "jest"),
    ("pytest", "pytest"),
    ("mocha", "mocha"),
    ("chai", "chai"),
    ("cucumber", "cucumber"),
    ("tdd", "test driven development"),
    ("test driven development", "test driven development"),
    ("bdd", "behavior driven development"),
    ("behavior driven development", "behavior driven development"),
    // Soft skills
    ("communication", "communication"),
    ("teamwork", "teamwork"),
    ("problem solving", "problem solving"),
    ("leadership", "leadership"),
    ("time management", "time management"),
    ("critical thinking", "critical thinking"),
    ("creativity", "creativity"),
    ("decision making", "decision making"),
    ("project management", "project management"),
    ("presentation", "presentation skills"),
    ("analytical skills", "analytical skills"),
    ("attention to detail", "attention to detail"),
    // Project management
    ("agile", "agile"),
    ("scrum", "scrum"),
    ("kanban", "kanban"),
    ("waterfall", "waterfall"),
    ("pmp", "pmp"),
    ("prince2", "prince2"),
    ("asana", "asana"),
    ("trello", "trello"),
    ("ms project", "microsoft project"),
    ("microsoft project", "microsoft project"),
    // APIs, platforms and other common tech
    ("rest api", "rest api"),
    ("graphql", "graphql"),
    ("soap", "soap api"),
    ("microservices", "microservices"),
    ("serverless", "serverless"),
    ("saas", "saas"),
    ("paas", "paas"),
    ("iaas", "iaas"),
    ("oauth", "oauth"),
    ("jwt", "jwt"),
    ("sso", "single sign-on"),
    ("single sign-on", "single sign-on"),
    ("blockchain", "blockchain"),
    ("iot", "internet of things"),
    ("internet of things", "internet of things"),
    ("big data", "big data"),
    ("hadoop", "hadoop"),
    ("spark", "apache spark"),
    ("kafka", "apache kafka"),
    ("etl", "etl"),
    ("erp", "erp"),
    ("crm", "crm"),
    ("salesforce", "salesforce"),
    ("sap", "sap"),
    // Design
    ("ui/ux", "ui/ux design"),
    ("user interface", "user interface design"),
    ("user experience", "user experience design"),
    ("figma", "figma"),
    ("sketch", "sketch"),
    ("adobe xd", "adobe xd"),
    ("photoshop", "adobe photoshop"),
    ("illustrator", "adobe illustrator"),
];

/// Default categories in display order.
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "php", "go",
            "rust", "scala", "kotlin", "perl", "swift", "r (programming language)", "matlab",
            "bash", "powershell",
        ],
    ),
    (
        "Web Technologies",
        &[
            "html", "css", "react", "angular", "vue.js", "django", "flask", "spring",
            "spring boot", "express.js", "node.js", "jquery", "bootstrap", "tailwind css",
            "laravel", "ruby on rails", "asp.net", "next.js", "gatsby",
        ],
    ),
    (
        "Database & Storage",
        &[
            "sql", "mysql", "postgresql", "oracle database", "mongodb", "cassandra", "redis",
            "dynamodb", "sqlite", "mariadb", "neo4j", "elasticsearch",
        ],
    ),
    (
        "Cloud & DevOps",
        &[
            "aws", "azure", "gcp", "terraform", "kubernetes", "docker", "jenkins", "ansible",
            "puppet", "chef", "vagrant", "github actions", "gitlab ci", "circleci", "travis ci",
            "ci/cd", "continuous integration", "continuous deployment", "devops", "serverless",
            "microservices",
        ],
    ),
    (
        "Data Science & Analytics",
        &[
            "machine learning", "tensorflow", "pytorch", "keras", "scikit-learn", "pandas",
            "numpy", "scipy", "matplotlib", "seaborn", "jupyter", "deep learning",
            "natural language processing", "computer vision", "data mining", "big data",
            "hadoop", "apache spark", "apache kafka", "etl",
        ],
    ),
    (
        "Business Tools",
        &[
            "tableau", "power bi", "looker", "qlik", "excel", "powerpoint", "microsoft word",
            "erp", "crm", "salesforce", "sap", "jira", "confluence", "slack", "asana", "trello",
            "microsoft project",
        ],
    ),
    (
        "Mobile Development",
        &["android", "ios", "react native", "flutter", "swift", "kotlin", "xamarin"],
    ),
    (
        "Testing & QA",
        &[
            "junit", "selenium", "cypress", "jest", "pytest", "mocha", "chai", "cucumber",
            "test driven development", "behavior driven development",
        ],
    ),
    (
        "Version Control & Collaboration",
        &["git", "github", "gitlab", "bitbucket"],
    ),
    (
        "API & Integration",
        &["rest api", "graphql", "soap api", "oauth", "jwt", "single sign-on"],
    ),
    (
        "Design & UI/UX",
        &[
            "ui/ux design", "user interface design", "user experience design", "figma",
            "sketch", "adobe xd", "adobe photoshop", "adobe illustrator",
        ],
    ),
    (
        "Emerging Technologies",
        &["blockchain", "internet of things", "saas", "paas", "iaas"],
    ),
    (
        "Soft Skills",
        &[
            "communication", "teamwork", "problem solving", "leadership", "time management",
            "critical thinking", "creativity", "decision making", "project management",
            "presentation skills", "analytical skills", "attention to detail",
        ],
    ),
    (
        "Project Management",
        &["agile", "scrum", "kanban", "waterfall", "pmp", "prince2"],
    ),
    (UNCATEGORIZED, &[]),
];

/// The built-in alias dictionary.
pub fn default_aliases() -> AliasDictionary {
    AliasDictionary::new(DEFAULT_ALIASES.iter().copied())
}

/// The built-in category dictionary, including an empty `Uncategorized` entry.
pub fn default_categories() -> CategoryDictionary {
    CategoryDictionary::new(
        DEFAULT_CATEGORIES
            .iter()
            .map(|(name, skills)| (*name, skills.iter().copied())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_aliases_are_lowercase() {
        for (alias, _) in default_aliases().iter() {
            assert_eq!(alias, alias.to_lowercase(), "alias {alias:?} is not lowercase");
        }
    }

    #[test]
    fn test_default_alias_keys_unique() {
        let keys: HashSet<&str> = DEFAULT_ALIASES.iter().map(|(a, _)| *a).collect();
        assert_eq!(keys.len(), DEFAULT_ALIASES.len());
        assert!(default_aliases().len() >= 150);
    }

    #[test]
    fn test_default_categories_shape() {
        let categories = default_categories();
        assert_eq!(categories.len(), 15);
        assert_eq!(categories.names().next(), Some("Programming Languages"));
        assert_eq!(categories.names().last(), Some(UNCATEGORIZED));
        assert_eq!(categories.get(UNCATEGORIZED), Some(&[][..]));
    }

    #[test]
    fn test_only_data_format_names_lack_a_category() {
        let categories = default_categories();
        let members: HashSet<&str> = categories
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str))
            .collect();
        let aliases = default_aliases();
        let orphans: Vec<&str> = aliases
            .canonical_names()
            .into_iter()
            .filter(|name| !members.contains(name))
            .collect();
        assert_eq!(orphans, vec!["json", "xml", "yaml"]);
    }
}
