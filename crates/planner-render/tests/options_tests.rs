use std::path::PathBuf;

use planner_impose::SheetOrder;
use planner_render::*;

#[test]
fn test_validation_rejects_unset_year() {
    let options = GenerateOptions::default();
    let result = options.validate();
    assert!(result.is_err());
    match result {
        Err(RenderError::Config(msg)) => {
            assert!(msg.contains("Year"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_rejects_negative_year() {
    let options = GenerateOptions {
        year: -44,
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_accepts_positive_year() {
    let options = GenerateOptions {
        year: 2024,
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_rejects_empty_template_dir() {
    let options = GenerateOptions {
        year: 2024,
        template_dir: PathBuf::new(),
        ..Default::default()
    };
    match options.validate() {
        Err(RenderError::Config(msg)) => assert!(msg.contains("template")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_default_directories() {
    let options = GenerateOptions::default();
    assert_eq!(options.template_dir, PathBuf::from("a5_templates"));
    assert_eq!(options.output_dir, PathBuf::from("."));
    assert_eq!(options.sheet_order, SheetOrder::Natural);
}

#[test]
fn test_year_dir() {
    let options = GenerateOptions {
        year: 2024,
        output_dir: PathBuf::from("out"),
        ..Default::default()
    };
    assert_eq!(
        options.year_dir(),
        PathBuf::from("out").join("planner_files_2024")
    );
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = GenerateOptions {
        year: 2026,
        sheet_order: SheetOrder::Reordered,
        template_dir: PathBuf::from("custom_templates"),
        output_dir: PathBuf::from("out"),
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    options.save(path).await.unwrap();

    // Load
    let loaded = GenerateOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_garbage() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), b"not json").await.unwrap();

    match GenerateOptions::load(temp_file.path()).await {
        Err(RenderError::Config(msg)) => assert!(msg.contains("parse")),
        _ => panic!("Expected Config error"),
    }
}
