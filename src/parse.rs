//! Parser for the puzzle input text: labeled shape glyph blocks followed by
//! region lines.
//!
//! # Expected format
//!
//! ```text
//! 0:
//! ###
//! #..
//!
//! 1:
//! ##
//!
//! 4x3: 1 2
//! 2x2: 0 1
//! ```
//!
//! Shape blocks are a label line ending in `:`, then grid rows (`#` filled),
//! terminated by a blank line. Region lines are `WxH: c1 c2 ...` with one
//! required count per shape in definition order; missing counts are treated
//! as zero and extra counts are ignored.

use crate::{region::Region, shape::Shape};
use thiserror::Error;

/// Errors produced while parsing puzzle input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A region header had a zero or unparseable width or height.
    #[error("region line [{line}] has invalid dimensions")]
    InvalidDimensions {
        /// The offending line.
        line: String,
    },
    /// A required-count token was not a non-negative integer.
    #[error("region line [{line}] has invalid count [{token}]")]
    InvalidCount {
        /// The offending line.
        line: String,
        /// The token that failed to parse.
        token: String,
    },
}

/// Parse the full puzzle input into its shape library and region list.
///
/// Lines that are neither a shape block nor a region line are skipped, the
/// same leniency the rest of the input handling shows toward stray text.
pub fn parse_input(input: &str) -> Result<(Vec<Shape>, Vec<Region>), ParseError> {
    let lines: Vec<&str> = input.lines().collect();

    // Shape blocks run until the first region line.
    let mut shapes = Vec::new();
    let mut index = 0;
    while index < lines.len() {
        let line = lines[index].trim();
        if line.is_empty() {
            index += 1;
            continue;
        }
        if region_header(line).is_some() {
            break;
        }
        if !line.ends_with(':') {
            index += 1;
            continue;
        }

        index += 1;
        let mut rows = Vec::new();
        while index < lines.len() && !lines[index].trim().is_empty() {
            rows.push(lines[index].trim());
            index += 1;
        }
        shapes.push(Shape::from_glyphs(rows));
    }

    let mut regions = Vec::new();
    for line in &lines[index..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((header, rest)) = region_header(line) else {
            continue;
        };
        let (width, height) = parse_dimensions(header).ok_or_else(|| {
            ParseError::InvalidDimensions {
                line: line.to_owned(),
            }
        })?;

        let mut counts = Vec::with_capacity(shapes.len());
        for token in rest.split_whitespace() {
            let count = token
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidCount {
                    line: line.to_owned(),
                    token: token.to_owned(),
                })?;
            counts.push(count);
        }
        // Pad or trim the counts to one per shape.
        counts.resize(shapes.len(), 0);

        regions.push(Region::new(width, height, counts));
    }

    log::debug!(
        "Parsed [{}] shapes and [{}] regions.",
        shapes.len(),
        regions.len()
    );

    Ok((shapes, regions))
}

/// Split a region line into its `WxH` header and the text after the colon,
/// or `None` if the line does not look like a region line.
fn region_header(line: &str) -> Option<(&str, &str)> {
    let (header, rest) = line.split_once(':')?;
    let header = header.trim();

    let (width, height) = header.split_once('x')?;
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if digits(width) && digits(height) {
        Some((header, rest))
    } else {
        None
    }
}

fn parse_dimensions(header: &str) -> Option<(usize, usize)> {
    let (width, height) = header.split_once('x')?;
    let width = width.parse().ok()?;
    let height = height.parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}
