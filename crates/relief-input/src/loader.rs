//! Batch input loader.
//!
//! # Grammar
//!
//! | Line                          | Meaning                                   |
//! |-------------------------------|-------------------------------------------|
//! | blank, or starting with `#`   | ignored                                   |
//! | `AREAS`                       | start of area rows                        |
//! | `COORDINATES`                 | start of coordinate rows (optional)       |
//! | `ROADS`                       | start of road rows                        |
//! | `<name…> <severity>`          | area row: integer severity                |
//! | `<name…> <lat> <lon>`         | coordinate row for an area declared above |
//! | `<from…> <to…> <distance_km>` | road row                                  |
//!
//! Names are every token before the numeric tail, re-joined with single
//! spaces.  A road row with exactly two name tokens is split between them.
//! With more, the split must be the only one where both halves name
//! registered nodes; that check runs at [`ReliefInput::apply`] time against
//! the live network.
//!
//! Area rows go through `add_area_auto`, so the network's coordinate policy
//! decides where an area sits until a coordinate row moves it.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::info;

use relief_core::GeoPoint;
use relief_network::NetworkModel;

use crate::{InputError, InputResult};

// ── Records ───────────────────────────────────────────────────────────────────

/// `<name…> <severity>` under `AREAS`.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRecord {
    pub line:     usize,
    pub name:     String,
    pub severity: i32,
}

/// `<name…> <lat> <lon>` under `COORDINATES`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRecord {
    pub line:     usize,
    pub name:     String,
    pub position: GeoPoint,
}

/// `<from…> <to…> <distance_km>` under `ROADS`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadRecord {
    pub line:        usize,
    /// Name tokens, not yet split into the two endpoints.
    pub words:       Vec<String>,
    pub distance_km: f64,
}

impl RoadRecord {
    /// Split `words` into `(from, to)`.
    ///
    /// Two tokens split trivially, whether or not they are known.  Longer
    /// rows need exactly one split point where `is_known` accepts both
    /// halves.
    pub fn endpoints(&self, is_known: impl Fn(&str) -> bool) -> InputResult<(String, String)> {
        if let [from, to] = self.words.as_slice() {
            return Ok((from.clone(), to.clone()));
        }

        let splits: Vec<(String, String)> = (1..self.words.len())
            .map(|k| (self.words[..k].join(" "), self.words[k..].join(" ")))
            .filter(|(from, to)| is_known(from) && is_known(to))
            .collect();

        match <[(String, String); 1]>::try_from(splits) {
            Ok([pair]) => Ok(pair),
            Err(splits) => Err(InputError::AmbiguousRoad {
                line:       self.line,
                text:       self.words.join(" "),
                candidates: splits.len(),
            }),
        }
    }
}

/// Parsed contents of one input source, in file order per section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReliefInput {
    pub areas:       Vec<AreaRecord>,
    pub coordinates: Vec<CoordinateRecord>,
    pub roads:       Vec<RoadRecord>,
}

impl ReliefInput {
    /// Feed every record into `network`: areas, then coordinates, then
    /// roads.  Stops at the first failure, reporting its line.
    ///
    /// Not atomic: records applied before the failing line stay in
    /// `network`.  Apply to a clone first to keep a model unchanged on
    /// error (`ReliefSession::load_input` does this).
    pub fn apply(&self, network: &mut NetworkModel) -> InputResult<()> {
        for a in &self.areas {
            network
                .add_area_auto(a.name.as_str(), a.severity)
                .map_err(|source| InputError::Network { line: a.line, source })?;
        }

        for c in &self.coordinates {
            network
                .set_coordinates(&c.name, c.position)
                .map_err(|source| InputError::Network { line: c.line, source })?;
        }

        for r in &self.roads {
            let (from, to) = r.endpoints(|name| network.contains(name))?;
            network
                .add_road(&from, &to, r.distance_km)
                .map_err(|source| InputError::Network { line: r.line, source })?;
        }

        info!(
            "loaded {} areas, {} coordinate rows, {} roads",
            self.areas.len(),
            self.coordinates.len(),
            self.roads.len()
        );
        Ok(())
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse an input file.
pub fn load_input_file(path: &Path) -> InputResult<ReliefInput> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    parse_input(file)
}

/// Like [`load_input_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a byte slice) or text coming from a UI.
pub fn parse_input<R: Read>(reader: R) -> InputResult<ReliefInput> {
    let mut input = ReliefInput::default();
    let mut section = None;

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(s) = Section::from_header(line) {
            section = Some(s);
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match section {
            None => return Err(parse_error(line_no, "row appears before any AREAS / COORDINATES / ROADS header")),
            Some(Section::Areas) => input.areas.push(parse_area(line_no, &tokens)?),
            Some(Section::Coordinates) => {
                let c = parse_coordinate(line_no, &tokens)?;
                if !input.areas.iter().any(|a| a.name == c.name) {
                    return Err(InputError::UnknownArea { line: line_no, name: c.name });
                }
                input.coordinates.push(c);
            }
            Some(Section::Roads) => input.roads.push(parse_road(line_no, &tokens)?),
        }
    }

    Ok(input)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Section {
    Areas,
    Coordinates,
    Roads,
}

impl Section {
    fn from_header(line: &str) -> Option<Section> {
        match line {
            "AREAS" => Some(Section::Areas),
            "COORDINATES" => Some(Section::Coordinates),
            "ROADS" => Some(Section::Roads),
            _ => None,
        }
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> InputError {
    InputError::Parse { line, message: message.into() }
}

/// Split `tokens` into a name and `n` trailing numeric tokens.
fn split_tail<'a>(line: usize, tokens: &'a [&'a str], n: usize, what: &str) -> InputResult<(&'a [&'a str], &'a [&'a str])> {
    if tokens.len() <= n {
        return Err(parse_error(
            line,
            format!("{what} row needs a name followed by {n} number(s), got {:?}", tokens.join(" ")),
        ));
    }
    Ok(tokens.split_at(tokens.len() - n))
}

fn parse_number<T: std::str::FromStr>(line: usize, token: &str, what: &str) -> InputResult<T> {
    token
        .parse::<T>()
        .map_err(|_| parse_error(line, format!("invalid {what} {token:?}")))
}

fn parse_area(line: usize, tokens: &[&str]) -> InputResult<AreaRecord> {
    let (name, tail) = split_tail(line, tokens, 1, "area")?;
    Ok(AreaRecord {
        line,
        name:     name.join(" "),
        severity: parse_number(line, tail[0], "severity")?,
    })
}

fn parse_coordinate(line: usize, tokens: &[&str]) -> InputResult<CoordinateRecord> {
    let (name, tail) = split_tail(line, tokens, 2, "coordinate")?;
    Ok(CoordinateRecord {
        line,
        name:     name.join(" "),
        position: GeoPoint::new(
            parse_number(line, tail[0], "latitude")?,
            parse_number(line, tail[1], "longitude")?,
        ),
    })
}

fn parse_road(line: usize, tokens: &[&str]) -> InputResult<RoadRecord> {
    let (words, tail) = split_tail(line, tokens, 1, "road")?;
    if words.len() < 2 {
        return Err(parse_error(line, "road row needs two endpoint names and a distance"));
    }
    Ok(RoadRecord {
        line,
        words:       words.iter().map(|w| (*w).to_owned()).collect(),
        distance_km: parse_number(line, tail[0], "distance")?,
    })
}
