use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain must never depend on: it stays free of I/O and logging.
const DOMAIN_FORBIDDEN_DEPS: &[&str] = &[
    "bestiary-engine",
    "tracing",
    "tracing-subscriber",
    "anyhow",
    "dotenvy",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = domain_dependency_violations(&metadata);
    violations.extend(
        domain_print_violations(&metadata.workspace_root.join("crates/domain/src"))
            .context("scanning domain sources")?,
    );

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn domain_dependency_violations(metadata: &Metadata) -> Vec<String> {
    metadata
        .packages
        .iter()
        .filter(|p| p.name == "bestiary-domain")
        .flat_map(|p| p.dependencies.iter())
        .filter(|d| DOMAIN_FORBIDDEN_DEPS.contains(&d.name.as_str()))
        .map(|d| format!("bestiary-domain must not depend on {}", d.name))
        .collect()
}

/// The domain returns actions; printing belongs to the engine's output port.
fn domain_print_violations(src: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(r"\b(e?print(ln)?|dbg)!\s*\(")
        .context("compiling print pattern")?;
    let mut violations = Vec::new();
    let mut pending = vec![src.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries =
            std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            for (number, line) in source.lines().enumerate() {
                let code = line.trim_start();
                if code.starts_with("//") {
                    continue;
                }
                if pattern.is_match(code) {
                    violations.push(format!("{}:{}: print in domain", path.display(), number + 1));
                }
            }
        }
    }

    violations.sort();
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(domain_deps: &[&str]) -> Metadata {
        Metadata {
            packages: vec![Package {
                name: "bestiary-domain".into(),
                dependencies: domain_deps
                    .iter()
                    .map(|name| Dependency {
                        name: name.to_string(),
                    })
                    .collect(),
            }],
            workspace_root: PathBuf::from("."),
        }
    }

    #[test]
    fn pure_domain_passes() {
        let metadata = metadata(&["serde", "uuid", "thiserror"]);
        assert!(domain_dependency_violations(&metadata).is_empty());
    }

    #[test]
    fn logging_in_domain_is_flagged() {
        let violations = domain_dependency_violations(&metadata(&["serde", "tracing"]));
        assert_eq!(violations, vec!["bestiary-domain must not depend on tracing"]);
    }

    #[test]
    fn print_scan_flags_code_and_skips_comments() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("entities");
        std::fs::create_dir(&nested).expect("create nested dir");
        std::fs::write(
            dir.path().join("lib.rs"),
            "pub fn shout() {\n    println!(\"hi\");\n}\n// println!(\"commented\");\n",
        )
        .expect("write lib.rs");
        std::fs::write(nested.join("kind.rs"), "// dbg!(kind)\npub struct Kind;\n")
            .expect("write kind.rs");
        std::fs::write(dir.path().join("notes.txt"), "println!(\"not rust\")\n")
            .expect("write notes.txt");

        let violations = domain_print_violations(dir.path()).expect("scan succeeds");

        assert_eq!(violations.len(), 1, "{violations:?}");
        assert!(violations[0].ends_with("lib.rs:2: print in domain"));
    }

    #[test]
    fn parses_cargo_metadata_shape() {
        let json = r#"{
            "packages": [{"name": "bestiary-domain", "dependencies": [{"name": "serde", "req": "^1"}], "version": "0.1.0"}],
            "workspace_root": "/tmp/ws",
            "version": 1
        }"#;
        let parsed: Metadata = serde_json::from_str(json).expect("valid metadata");
        assert_eq!(parsed.packages[0].dependencies[0].name, "serde");
        assert_eq!(parsed.workspace_root, PathBuf::from("/tmp/ws"));
    }
}
