//! Developer tasks (schema generation, contract fixtures, documentation coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use configtrace_types::{DocumentationSection, ProblemSetV1, SCHEMA_PROBLEMS_V1, ids};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

/// Get the schemas directory path.
fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Get the contracts/fixtures directory path.
fn contracts_fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("contracts").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

/// Generate the problem set schema.
fn generate_problems_schema() -> schemars::Schema {
    schema_for!(configtrace_types::ProblemSetV1)
}

/// Generate the ConfigtraceConfigV1 schema.
fn generate_config_schema() -> schemars::Schema {
    schema_for!(configtrace_settings::ConfigtraceConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "configtrace.problems.v1.json",
            generate: generate_problems_schema,
        },
        SchemaSpec {
            filename: "configtrace.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate contract fixtures against the problem set schema");
    eprintln!("  docs-coverage     Validate every documentation section has id, anchor and text");
}

/// Validate `contracts/fixtures/*.json` problem sets.
///
/// This checks:
/// 1. Schema validation against the generated `configtrace.problems.v1` schema
/// 2. Schema id: every fixture declares `configtrace.problems.v1`
/// 3. Domain conversion: every problem passes construction checks
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_problems_schema())
        .context("Failed to convert problem set schema to JSON")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    println!("✓ {} schema compiles", SCHEMA_PROBLEMS_V1);

    let fixtures_dir = contracts_fixtures_dir()?;
    if !fixtures_dir.exists() {
        bail!(
            "contracts/fixtures/ not found at {}\n\n\
            Create contract fixtures first.",
            fixtures_dir.display()
        );
    }

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    let mut paths = Vec::new();
    for entry in fs::read_dir(&fixtures_dir).context("Failed to read contracts/fixtures/")? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    for path in &paths {
        fixture_count += 1;
        errors.extend(check_fixture(path, &validator)?);
    }

    if fixture_count == 0 {
        bail!("No JSON fixtures found in {}", fixtures_dir.display());
    }

    if errors.is_empty() {
        println!("✓ {} fixtures conform", fixture_count);
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

fn check_fixture(path: &Path, validator: &jsonschema::Validator) -> anyhow::Result<Vec<String>> {
    let filename = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", filename))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", filename))?;

    let mut errors: Vec<String> = validator
        .iter_errors(&value)
        .map(|err| format!("{}: schema validation: {}", filename, err))
        .collect();
    if !errors.is_empty() {
        return Ok(errors);
    }

    let set: ProblemSetV1 = serde_json::from_value(value)
        .with_context(|| format!("Failed to deserialize {}", filename))?;
    if set.schema != SCHEMA_PROBLEMS_V1 {
        errors.push(format!(
            "{}: schema is '{}', expected '{}'",
            filename, set.schema, SCHEMA_PROBLEMS_V1
        ));
    }
    if let Err(err) = configtrace_domain::problems_from_set(&set) {
        errors.push(format!("{}: {}", filename, err));
    }

    Ok(errors)
}

/// Validate that every documentation section has an id, an anchor, and explain text.
fn docs_coverage() -> anyhow::Result<()> {
    let mut errors = Vec::new();
    let mut anchors = std::collections::BTreeSet::new();

    for section in DocumentationSection::ALL {
        let id = section.id();
        if configtrace_types::lookup_section(id) != Some(section) {
            errors.push(format!("Section '{}' does not resolve by id", id));
        }
        if configtrace_types::lookup_section(section.anchor()) != Some(section) {
            errors.push(format!("Section '{}' does not resolve by anchor", id));
        }
        if !section.anchor().starts_with("config_cache:") {
            errors.push(format!("Section '{}' has anchor outside config_cache", id));
        }
        if !anchors.insert(section.anchor()) {
            errors.push(format!("Section '{}' reuses anchor '{}'", id, section.anchor()));
        }
        if section.title().is_empty() {
            errors.push(format!("Section '{}' has empty title", id));
        }
        if section.summary().is_empty() {
            errors.push(format!("Section '{}' has empty summary", id));
        }
        let serialized = serde_json::to_value(section).context("serialize section")?;
        if serialized.as_str() != Some(id) {
            errors.push(format!("Section '{}' serializes as {}", id, serialized));
        }
    }

    if errors.is_empty() {
        println!(
            "✓ {} documentation sections are complete",
            DocumentationSection::ALL.len()
        );
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Docs coverage validation failed with {} errors", errors.len())
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "docs-coverage" => docs_coverage(),
        "print-schema-ids" => {
            println!("{}", SCHEMA_PROBLEMS_V1);
            println!("{}", ids::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
