use std::{fs, path::PathBuf};

use tempfile::tempdir;

use kinchart_cli::{Args, run};

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo inputs live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &PathBuf, output: &PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        format: None,
        title: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_json_files(demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output should be written");
                assert!(svg.contains("<svg"), "{} produced no SVG", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_json_files(demos_dir().join("errors"));
    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(!output_path.exists(), "{} left an output file", demo_path.display());
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_cli_overrides_and_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("bare_members.json");
    let output = temp_dir.path().join("tree.svg");

    let mut args = args_for(&input, &output);
    args.config = Some(demos_dir().join("config.toml").to_string_lossy().to_string());
    args.format = Some("A3".to_string());
    args.title = Some("Override Title".to_string());

    run(&args).expect("Render should succeed");

    let svg = fs::read_to_string(&output).expect("Output should be written");
    assert!(svg.contains("Override Title"));
    assert!(svg.contains("Three generations"));
    // A3 portrait is 1190.55pt tall
    assert!(svg.contains("1190.55"));
}

#[test]
fn e2e_invalid_format_flag() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("bare_members.json");
    let output = temp_dir.path().join("tree.svg");

    let mut args = args_for(&input, &output);
    args.format = Some("B5".to_string());

    assert!(run(&args).is_err());
}

#[cfg(feature = "pdf")]
#[test]
fn e2e_pdf_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("bare_members.json");
    let output = temp_dir.path().join("tree.pdf");

    run(&args_for(&input, &output)).expect("Render should succeed");

    let bytes = fs::read(&output).expect("Output should be written");
    assert!(bytes.starts_with(b"%PDF"));
}
