// Allow deprecated APIs (assert_cmd::cargo_bin is deprecated but still works)
#![allow(deprecated)]

use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use rstest::rstest;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const TEMPLATE_DIR: &str =
    "stitch_designs/stitch_leverage_in_the_game_basketball_coaching_website";

fn lig_build(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lig-build").unwrap();
    cmd.current_dir(root);
    cmd
}

/// Write the three design templates with no patchable markup.
fn write_bare_templates(root: &Path) {
    for page in ["3", "5", "1"] {
        let dir = root
            .join(TEMPLATE_DIR)
            .join(format!("leverage_in_the_game_sales_page_{page}"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("code.html"), "<html><body></body></html>").unwrap();
    }
}

/// Write a config that skips scalable fonts, so output is the same on every machine.
fn write_bitmap_config(root: &Path) -> std::path::PathBuf {
    let path = root.join("branding.json");
    fs::write(&path, r#"{"font_candidates": []}"#).unwrap();
    path
}

#[test]
fn test_branding_writes_images() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    let config = write_bitmap_config(root.path());

    lig_build(root.path())
        .arg("branding")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully generated icon.jpg and logo.jpg",
        ));

    let icon = image::open(root.path().join("assets/branding/icon.jpg"))?;
    assert_eq!((icon.width(), icon.height()), (512, 512));
    let logo = image::open(root.path().join("assets/branding/logo.jpg"))?;
    assert_eq!((logo.width(), logo.height()), (1800, 256));
    Ok(())
}

#[test]
fn test_branding_with_explicit_root() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    let elsewhere = TempDir::new()?;
    let config = write_bitmap_config(site.path());

    lig_build(elsewhere.path())
        .arg("branding")
        .arg("--root")
        .arg(site.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(site.path().join("assets/branding/logo.jpg").exists());
    assert!(!elsewhere.path().join("assets").exists());
    Ok(())
}

#[test]
fn test_bad_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    fs::write(root.path().join("bad.json"), "{")?;

    lig_build(root.path())
        .args(["branding", "--config", "bad.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error:"));
    Ok(())
}

#[rstest]
#[case(&["pages"], false)]
#[case(&["pages", "--allow-missing"], true)]
fn test_pages_policy(#[case] args: &[&str], #[case] succeeds: bool) {
    let root = TempDir::new().unwrap();
    write_bare_templates(root.path());

    let assert = lig_build(root.path()).args(args).assert();
    if succeeds {
        assert
            .success()
            .stdout(predicate::str::contains("Pages generated successfully."));
        let html = fs::read_to_string(root.path().join("index.html")).unwrap();
        assert!(html.contains(r#"<script src="js/script.js"></script>"#));
    } else {
        assert
            .failure()
            .stderr(predicate::str::contains("nav-link"));
        assert!(!root.path().join("index.html").exists());
    }
}

#[test]
fn test_pages_missing_templates() {
    let root = TempDir::new().unwrap();
    lig_build(root.path())
        .args(["pages", "--allow-missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read template"));
}

#[test]
fn test_publish_missing_entry() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("index.html"), "<html></html>").unwrap();

    lig_build(root.path())
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required build entry"))
        .stderr(predicate::str::contains("thank-you.html"));
}

#[rstest]
#[case(".")]
#[case("css")]
fn test_publish_refuses_output_over_sources(#[case] output: &str) {
    let root = TempDir::new().unwrap();
    for name in ["index.html", "thank-you.html", "privacy.html", "terms.html"] {
        fs::write(root.path().join(name), "<html></html>").unwrap();
    }
    for dir in ["assets", "css", "js"] {
        fs::create_dir_all(root.path().join(dir)).unwrap();
    }
    fs::write(root.path().join("css/site.css"), "body {}").unwrap();

    lig_build(root.path())
        .arg("publish")
        .args(["--output", output])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to publish into"));

    assert!(root.path().join("index.html").exists());
    assert!(root.path().join("css/site.css").exists());
}

#[test]
fn test_all_builds_public_tree() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    write_bare_templates(root.path());
    let config = write_bitmap_config(root.path());
    for name in ["privacy.html", "terms.html"] {
        fs::write(root.path().join(name), "<html></html>")?;
    }
    for dir in ["css", "js"] {
        fs::create_dir_all(root.path().join(dir))?;
    }
    fs::write(root.path().join("js/config.js"), "")?;
    fs::write(root.path().join("css/site.css"), "")?;

    lig_build(root.path())
        .arg("all")
        .arg("--allow-missing")
        .arg("--config")
        .arg(&config)
        .args(["--output", "dist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated static output in"));

    let public = root.path().join("dist");
    for entry in [
        "index.html",
        "thank-you.html",
        "privacy.html",
        "terms.html",
        "assets/branding/icon.jpg",
        "assets/branding/logo.jpg",
        "js/config.js",
        "css/site.css",
    ] {
        assert!(public.join(entry).exists(), "missing {entry}");
    }
    // checkout.html is built but not part of the published entries
    assert!(!public.join("checkout.html").exists());
    Ok(())
}
