//! Round-trip checks of SBGN-ML annotation fixtures.
//!
//! Every fixture is an `<annotation>` element in the compact shape. Reading it and writing it back
//! must reproduce the file byte for byte, and writing the result again must not change it.

use anyhow::{ensure, Context, Result};
use sbgnml_rdf::{Annotation, AnnotationConfig};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use text_diff::{diff, Difference};

/// The directory holding the annotation fixtures of this crate.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Lists the `.xml` files of `dir` in name order.
pub fn list_fixtures(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut fixtures = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|extension| extension == "xml") {
            fixtures.push(path);
        }
    }
    fixtures.sort();
    Ok(fixtures)
}

/// Checks that the annotation in `path` survives a read and write unchanged.
pub fn check_round_trip(path: &Path, config: &AnnotationConfig) -> Result<()> {
    let expected = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let expected = expected.trim_end();

    let annotation = Annotation::from_xml_str(expected, config)
        .with_context(|| format!("Failed to read the annotation of {}", path.display()))?;
    ensure!(
        annotation.iter().all(|graph| !graph.is_empty()),
        "{} contains an RDF block that could not be imported",
        path.display()
    );

    let actual = annotation
        .to_xml_string(config)
        .with_context(|| format!("Failed to write the annotation of {}", path.display()))?;
    ensure!(
        actual == expected,
        "Round trip of {} changed the document:\n{}",
        path.display(),
        format_diff(expected, &actual, "lines")
    );

    let again = Annotation::from_xml_str(&actual, config)?.to_xml_string(config)?;
    ensure!(
        again == actual,
        "Second round trip of {} changed the document:\n{}",
        path.display(),
        format_diff(&actual, &again, "lines")
    );
    Ok(())
}

/// Checks every fixture of `dir`, reporting all failures at once.
pub fn check_fixtures(dir: &Path, config: &AnnotationConfig) -> Result<usize> {
    let fixtures = list_fixtures(dir)?;
    ensure!(!fixtures.is_empty(), "No fixtures found in {}", dir.display());

    let errors = fixtures
        .iter()
        .filter_map(|fixture| check_round_trip(fixture, config).err())
        .map(|error| format!("{error:#}"))
        .collect::<Vec<_>>();
    ensure!(
        errors.is_empty(),
        "{} fixtures failing from {} fixtures:\n{}\n",
        errors.len(),
        fixtures.len(),
        errors.join("\n")
    );
    Ok(fixtures.len())
}

/// Formats a line diff, missing lines in yellow and unexpected lines in blue.
pub fn format_diff(expected: &str, actual: &str, kind: &str) -> String {
    let (_, changeset) = diff(expected, actual, "\n");
    let mut ret = String::new();
    let _ = writeln!(
        &mut ret,
        "Note: missing {kind} in yellow, unexpected {kind} in blue"
    );
    for seq in changeset {
        let _ = match seq {
            Difference::Same(x) => writeln!(&mut ret, "{x}"),
            Difference::Add(x) => writeln!(&mut ret, "\x1B[94m{x}\x1B[0m"),
            Difference::Rem(x) => writeln!(&mut ret, "\x1B[93m{x}\x1B[0m"),
        };
    }
    ret
}
