use chrono::Local;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use toml_edit::{DocumentMut, Item};

const MANIFEST: &str = "Cargo.toml";
const CHANGELOG: &str = "CHANGELOG.md";

type ReleaseResult<T> = Result<T, Box<dyn std::error::Error>>;

fn git_output(args: &[&str]) -> ReleaseResult<Option<String>> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8(output.stdout)?.trim().to_string()))
}

fn get_latest_tag() -> ReleaseResult<String> {
    if let Some(tag) = git_output(&["describe", "--tags", "--abbrev=0"])? {
        return Ok(tag);
    }
    // No tags yet, start from the first commit
    Ok(git_output(&["rev-list", "--max-parents=0", "HEAD"])?.unwrap_or_default())
}

fn get_commit_history(previous_tag: &str) -> ReleaseResult<String> {
    let range = format!("{}..HEAD", previous_tag);
    let mut args = vec!["log", "--pretty=format:- %s"];
    if !previous_tag.is_empty() {
        args.push(range.as_str());
    }
    Ok(git_output(&args)?.unwrap_or_default())
}

fn prompt(message: &str) -> Result<String, io::Error> {
    print!("{} ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn confirm(message: &str) -> Result<bool, io::Error> {
    Ok(prompt(&format!("{} (y/n):", message))?.to_lowercase() == "y")
}

fn run(program: &str, args: &[&str], error_msg: &str) -> ReleaseResult<()> {
    println!("Executing: {} {}", program, args.join(" "));
    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        return Err(error_msg.into());
    }
    Ok(())
}

/// Rewrites the package version, leaving the rest of the manifest's formatting alone
fn bump_manifest(new_version: &str) -> ReleaseResult<String> {
    let mut doc = fs::read_to_string(MANIFEST)?.parse::<DocumentMut>()?;
    let current = doc["package"]["version"]
        .as_str()
        .ok_or("Could not find version in Cargo.toml")?
        .to_string();
    doc["package"]["version"] = Item::from(new_version);
    fs::write(MANIFEST, doc.to_string())?;
    Ok(current)
}

/// Prepends a dated section for this release to the changelog
fn update_changelog(new_version: &str, notes: &str) -> ReleaseResult<()> {
    let existing = if Path::new(CHANGELOG).exists() {
        fs::read_to_string(CHANGELOG)?
    } else {
        String::from("# Changelog\n")
    };

    let (title, rest) = existing.split_once('\n').unwrap_or((existing.as_str(), ""));
    let date = Local::now().format("%Y-%m-%d");
    let notes = if notes.is_empty() { "- No changes recorded" } else { notes };
    let section = format!("## v{} ({})\n\n{}\n", new_version, date, notes);

    fs::write(CHANGELOG, format!("{}\n\n{}{}", title, section, rest))?;
    Ok(())
}

fn main() -> ReleaseResult<()> {
    let doc = fs::read_to_string(MANIFEST)?.parse::<DocumentMut>()?;
    let current_version = doc["package"]["version"]
        .as_str()
        .ok_or("Could not find version in Cargo.toml")?;
    println!("Current version is: {}", current_version);

    let new_version = prompt("Enter new version:")?;
    if new_version.is_empty() {
        return Err("Version cannot be empty".into());
    }

    if !confirm(&format!("Ready to release version {}?", new_version))? {
        println!("Release aborted.");
        return Ok(());
    }

    let previous_tag = get_latest_tag()?;
    println!(
        "Previous tag: {}",
        if previous_tag.is_empty() {
            "None"
        } else {
            &previous_tag
        }
    );

    let commit_history = get_commit_history(&previous_tag)?;
    if commit_history.is_empty() {
        println!("Warning: No commit history found between previous tag and HEAD.");
        if !confirm("Continue with empty release notes?")? {
            println!("Release aborted.");
            return Ok(());
        }
    } else {
        println!("Commit history for release notes:");
        println!("{}", commit_history);
    }

    let old_version = bump_manifest(&new_version)?;
    println!("Updated {} from {} to {}", MANIFEST, old_version, new_version);
    update_changelog(&new_version, &commit_history)?;
    println!("Added v{} to {}", new_version, CHANGELOG);

    // Refresh Cargo.lock to match the new version
    run("cargo", &["check"], "Failed to update Cargo.lock")?;

    let tag = format!("v{}", new_version);
    let commit_msg = format!("Bump version to {}", new_version);
    let tag_msg = format!("Version {}", new_version);
    run(
        "git",
        &["add", MANIFEST, "Cargo.lock", CHANGELOG],
        "Failed to stage release files",
    )?;
    run("git", &["commit", "-m", &commit_msg], "Failed to commit version bump")?;
    run("git", &["tag", "-a", &tag, "-m", &tag_msg], "Failed to create tag")?;
    run("git", &["push"], "Failed to push commits")?;
    run("git", &["push", "--tags"], "Failed to push tags")?;

    if confirm("Publish to crates.io?")? {
        run("cargo", &["publish"], "Failed to publish to crates.io")?;
    } else {
        println!("Skipping crates.io publishing.");
    }

    if confirm("Create GitHub release?")? {
        run(
            "gh",
            &["release", "create", &tag, "--title", &tag, "--notes", &commit_history],
            "Failed to create GitHub release",
        )?;
    } else {
        println!("Skipping GitHub release creation.");
    }

    println!("Successfully released version {}", new_version);
    Ok(())
}
