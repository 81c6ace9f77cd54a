//! Document ingestion tests.

use std::fs;

use tempfile::TempDir;

use jdskill::config::IngestConfig;
use jdskill::{IngestError, ProcessorRegistry, SkillError, SkillPipeline};

#[tokio::test]
async fn test_text_file_to_skills() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jd.txt");
    fs::write(&path, "Data Engineer\nSpark, Kafka and Airflow; Tableau dashboards").unwrap();

    let extracted = ProcessorRegistry::default().extract_file(&path).await.unwrap();
    assert_eq!(extracted.metadata.format, "txt");

    let report = SkillPipeline::default().analyze(&extracted.text);
    for skill in ["apache spark", "apache kafka", "tableau"] {
        assert!(report.skills.contains(&skill.to_string()), "missing {skill}");
    }
}

#[tokio::test]
async fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jd.rtf");
    fs::write(&path, "python").unwrap();

    let err = ProcessorRegistry::default()
        .extract_file(&path)
        .await
        .unwrap_err();
    assert!(matches!(err, SkillError::Ingest(IngestError::UnsupportedFormat(_))));
    assert!(err.to_string().contains("Please upload a .txt, .pdf, or .docx file"));
}

#[tokio::test]
async fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ProcessorRegistry::default()
        .extract_file(dir.path().join("absent.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, SkillError::Ingest(IngestError::Read { .. })));
}

#[tokio::test]
async fn test_corrupt_pdf_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jd.pdf");
    fs::write(&path, b"%PDF-1.4 garbage").unwrap();

    let err = ProcessorRegistry::default()
        .extract_file(&path)
        .await
        .unwrap_err();
    assert!(matches!(err, SkillError::Ingest(IngestError::Pdf(_))));
}

#[tokio::test]
async fn test_size_limit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jd.txt");
    fs::write(&path, "x".repeat(64)).unwrap();

    let registry = ProcessorRegistry::new(&IngestConfig { max_file_bytes: 16 });
    let err = registry.extract_file(&path).await.unwrap_err();
    assert!(matches!(
        err,
        SkillError::Ingest(IngestError::TooLarge { size: 64, max: 16 })
    ));
}
