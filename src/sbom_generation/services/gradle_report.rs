use crate::shared::Result;
use anyhow::Context;
use regex::Regex;
use std::io::BufRead;

/// Width of one indentation unit (`"|    "` or five spaces)
const INDENT_WIDTH: usize = 5;

#[derive(Debug, Clone)]
struct ReportLine {
    value: String,
    children: Vec<usize>,
}

/// A build configuration tree of the report, e.g. `compileClasspath`
#[derive(Debug, Clone, Copy)]
pub struct BuildConfiguration<'a> {
    pub name: &'a str,
    pub description: &'a str,
    /// Entries requested directly by this configuration
    pub dependencies: &'a [usize],
}

/// Parsed output of `gradle dependencies`
///
/// Every line becomes an entry; lines indented with branch markers hang
/// below the entry one level up. Entries are addressed by index.
#[derive(Debug, Clone, Default)]
pub struct DependencyReport {
    lines: Vec<ReportLine>,
    top_level: Vec<usize>,
}

impl DependencyReport {
    /// Parses a report from line-buffered input.
    ///
    /// A line at branch depth `d` must carry exactly `d - 1` indentation
    /// units followed by `+--- ` or `\--- `. A line whose depth skips past
    /// the currently open entry starts a new top-level entry instead.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self> {
        let branch = Regex::new(r"^((?:[| ]    )*)[+\\]--- ")?;
        let mut report = Self::default();
        // open[d] is the latest entry at depth d
        let mut open: Vec<usize> = Vec::new();

        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .context("Failed to read Gradle output")?;
            if read == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']);

            let (depth, value) = match branch.captures(line) {
                Some(captures) => {
                    let prefix = captures.get(0).map_or(0, |m| m.end());
                    let units = captures.get(1).map_or(0, |m| m.len()) / INDENT_WIDTH;
                    (units + 1, &line[prefix..])
                }
                None => (0, line),
            };

            let index = report.lines.len();
            if depth == 0 || depth > open.len() {
                report.lines.push(ReportLine {
                    value: line.to_string(),
                    children: Vec::new(),
                });
                report.top_level.push(index);
                open.clear();
                open.push(index);
                continue;
            }

            report.lines.push(ReportLine {
                value: value.to_string(),
                children: Vec::new(),
            });
            report.lines[open[depth - 1]].children.push(index);
            open.truncate(depth);
            open.push(index);
        }

        Ok(report)
    }

    /// Top-level entries with at least one child, in report order
    pub fn configurations(&self) -> Vec<BuildConfiguration<'_>> {
        self.top_level
            .iter()
            .map(|&index| &self.lines[index])
            .filter(|line| !line.children.is_empty())
            .map(|line| {
                let (name, description) = line
                    .value
                    .split_once(" - ")
                    .unwrap_or((line.value.as_str(), ""));
                BuildConfiguration {
                    name: name.trim(),
                    description,
                    dependencies: &line.children,
                }
            })
            .collect()
    }

    /// Text of an entry without its indentation and branch marker
    pub fn value(&self, index: usize) -> &str {
        &self.lines[index].value
    }

    pub fn children(&self, index: usize) -> &[usize] {
        &self.lines[index].children
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
