//! End-to-end pipeline tests.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use jdskill::{
    AliasDictionary, CategoryDictionary, Config, ReferenceData, SkillPipeline, UNCATEGORIZED,
};

const JOB_DESCRIPTION: &str = r#"
Senior Backend Engineer

We're hiring! Apply at https://careers.example.com/jobs/42 or email talent@example.com.

Requirements:
- 5+ years of Python and Go in production
- Experience with AWS, Docker and Kubernetes (k8s)
- Familiarity with PostgreSQL and Redis
- Exposure to Machine Learning pipelines is a plus
- Strong communication skills; Agile/Scrum teams
"#;

fn pipeline_with(aliases: &[(&str, &str)], categories: &[(&str, &[&str])]) -> SkillPipeline {
    let aliases = AliasDictionary::new(aliases.iter().copied());
    let categories = CategoryDictionary::new(
        categories
            .iter()
            .map(|(name, skills)| (*name, skills.iter().copied())),
    );
    SkillPipeline::new(
        Arc::new(ReferenceData::new(aliases, categories)),
        Config::default(),
    )
}

#[test]
fn test_full_job_description() {
    let report = SkillPipeline::default().analyze(JOB_DESCRIPTION);

    assert!(!report.normalized_text.contains("http"));
    assert!(!report.normalized_text.contains('@'));

    let skills: BTreeSet<&str> = report.skills.iter().map(String::as_str).collect();
    for expected in [
        "python",
        "go",
        "aws",
        "docker",
        "kubernetes",
        "postgresql",
        "redis",
        "machine learning",
        "communication",
        "agile",
        "scrum",
    ] {
        assert!(skills.contains(expected), "missing {expected}: {skills:?}");
    }

    let categories = &report.categories;
    assert!(categories
        .get("Cloud & DevOps")
        .is_some_and(|s| s.contains(&"kubernetes".to_string())));
    assert!(categories
        .get("Database & Storage")
        .is_some_and(|s| s.contains(&"redis".to_string())));
    assert!(categories
        .get("Project Management")
        .is_some_and(|s| s.contains(&"scrum".to_string())));

    let total: usize = report.distribution.iter().map(|c| c.count).sum();
    assert_eq!(total, report.skills.len());
}

#[test]
fn test_reference_example() {
    let pipeline = SkillPipeline::default();
    let normalized =
        pipeline.normalize("Looking for a Python developer with AWS and Machine Learning experience");
    let skills = pipeline.extract_skills(&normalized);

    for skill in ["python", "aws", "machine learning"] {
        assert!(skills.contains(skill));
    }

    let categories = pipeline.categorize(&skills);
    let find = |skill: &str| {
        categories
            .iter()
            .find(|c| c.skills.iter().any(|s| s == skill))
            .map(|c| c.name.clone())
    };
    assert_eq!(find("python").as_deref(), Some("Programming Languages"));
    assert_eq!(find("aws").as_deref(), Some("Cloud & DevOps"));
    assert_eq!(find("machine learning").as_deref(), Some("Data Science & Analytics"));
}

#[test]
fn test_empty_stages() {
    let pipeline = SkillPipeline::default();
    assert_eq!(pipeline.normalize(""), "");
    assert!(pipeline.extract_skills("").is_empty());
    assert!(pipeline.categorize(&Default::default()).is_empty());
}

#[test]
fn test_uncategorized_bucket() {
    let pipeline = pipeline_with(
        &[("rust", "rust"), ("cobol", "cobol")],
        &[("Languages", &["rust"]), (UNCATEGORIZED, &[])],
    );

    let report = pipeline.analyze("Rust and COBOL");
    assert_eq!(report.categories.get("Languages"), Some(&["rust".to_string()][..]));
    assert_eq!(report.categories.get(UNCATEGORIZED), Some(&["cobol".to_string()][..]));

    let report = pipeline.analyze("Rust only");
    assert!(report.categories.get(UNCATEGORIZED).is_none());
    assert_eq!(report.categories.len(), 1);
}

#[test]
fn test_fuzzy_threshold_is_configurable() {
    let data = Arc::new(ReferenceData::builtin());
    let mut config = Config::default();

    let strict = {
        config.matcher.fuzzy_threshold = 100;
        SkillPipeline::new(Arc::clone(&data), config.clone())
    };
    assert!(!strict.analyze("kubernets").skills.contains(&"kubernetes".to_string()));

    let lenient = {
        config.matcher.fuzzy_threshold = 90;
        SkillPipeline::new(data, config)
    };
    assert!(lenient.analyze("kubernets").skills.contains(&"kubernetes".to_string()));
}

#[test]
fn test_concurrent_pipelines_share_reference_data() {
    let pipeline = Arc::new(SkillPipeline::default());
    let inputs = ["Python and Django", "Terraform on Azure", "Figma and Sketch"];

    let handles: Vec<_> = inputs
        .iter()
        .map(|text| {
            let pipeline = Arc::clone(&pipeline);
            let text = text.to_string();
            thread::spawn(move || pipeline.analyze(&text).skills)
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results[0].contains(&"django".to_string()));
    assert!(results[1].contains(&"terraform".to_string()));
    assert!(results[2].contains(&"figma".to_string()));
}
