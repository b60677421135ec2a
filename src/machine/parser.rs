//! Parsing of the machine description text format
//!
//! One machine per line. A line has three kinds of whitespace-separated
//! tokens: a bracketed light diagram (`#` lit, `.` dark), one or more
//! parenthesized button wirings, and a braced joltage target, e.g.
//!
//! ```text
//! [#.#] (0,1) (1,2) (0,2) {3,5,4}
//! ```

use super::{Button, Machine};
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a single machine description line
pub fn parse_machine_line(line: &str) -> Result<Machine> {
    let mut lights = None;
    let mut joltage = None;
    let mut buttons = Vec::new();

    for token in line.split_whitespace() {
        if token.starts_with('[') {
            lights = Some(parse_lights(token)?);
        } else if token.starts_with('(') {
            buttons.push(parse_button(token)?);
        } else if token.starts_with('{') {
            joltage = Some(parse_joltage(token)?);
        } else {
            anyhow::bail!("Unrecognized token '{}'", token);
        }
    }

    let lights = lights.ok_or_else(|| anyhow::anyhow!("Missing light diagram, e.g. [.##.]"))?;
    let joltage = joltage.ok_or_else(|| anyhow::anyhow!("Missing joltage target, e.g. {{3,5,4}}"))?;

    Ok(Machine::new(lights, buttons, joltage))
}

/// Parse a light diagram token like `[.##.]`
fn parse_lights(token: &str) -> Result<Vec<bool>> {
    let inner = strip_delimiters(token, '[', ']')?;
    inner
        .chars()
        .map(|ch| match ch {
            '#' => Ok(true),
            '.' => Ok(false),
            _ => anyhow::bail!("Invalid light character '{}' in '{}'. Only '#' and '.' are allowed", ch, token),
        })
        .collect()
}

/// Parse a button wiring token like `(0,2,3)`
fn parse_button(token: &str) -> Result<Button> {
    let inner = strip_delimiters(token, '(', ')')?;
    if inner.is_empty() {
        return Ok(Button::new(Vec::new()));
    }
    let indices = inner
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid cell index '{}' in button '{}'", part, token))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Button::new(indices))
}

/// Parse a joltage target token like `{3,5,4}`
fn parse_joltage(token: &str) -> Result<Vec<u64>> {
    let inner = strip_delimiters(token, '{', '}')?;
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid joltage value '{}' in '{}'", part, token))
        })
        .collect()
}

fn strip_delimiters<'a>(token: &'a str, open: char, close: char) -> Result<&'a str> {
    token
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .ok_or_else(|| anyhow::anyhow!("Token '{}' is not enclosed in '{}' and '{}'", token, open, close))
}

/// Parse every machine in a multi-line description
///
/// Blank lines are skipped; errors are reported with their line number.
pub fn parse_machines_from_string(content: &str) -> Result<Vec<Machine>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| {
            parse_machine_line(line).with_context(|| format!("Failed to parse machine on line {}", i + 1))
        })
        .collect()
}

/// Load machines from a text file
pub fn load_machines_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Machine>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read machines file: {}", path.as_ref().display()))?;

    parse_machines_from_string(&content)
        .with_context(|| format!("Failed to parse machines file: {}", path.as_ref().display()))
}

/// Create an example machines file for testing and setup
pub fn create_example_machines<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let example_content = "\
[#.#] (0,1) (1,2) (0,2) {2,1,3}
[##] (0) (0,1) (1) {2,1}
[..##] (0,3) (1,2) (2,3) (0,1) {7,5,5,7}
";
    std::fs::write(dir.join("example.txt"), example_content)
        .context("Failed to write example.txt")?;

    Ok(())
}
