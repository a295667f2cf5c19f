//! Turn protocol decoder.
//!
//! Reads the initial site layout and the per-turn snapshot blocks from a
//! line-oriented text stream. Every line has a fixed number of integer
//! fields; anything else is a protocol violation.

use std::io::{BufRead, Lines};

use crate::board::{
    Owner, Position, SiteId, SiteLayout, SiteStatus, Structure, TurnSnapshot, Unit, UnitType,
};
use crate::error::ProtocolError;

/// Splits `line` into exactly `N` integers.
fn fields<const N: usize>(line: &str, what: &'static str) -> Result<[i32; N], ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != N {
        return Err(ProtocolError::FieldCount {
            what,
            expected: N,
            found: tokens.len(),
            line: line.to_string(),
        });
    }
    let mut out = [0i32; N];
    for (slot, token) in out.iter_mut().zip(&tokens) {
        *slot = token.parse().map_err(|_| ProtocolError::InvalidNumber {
            what,
            token: token.to_string(),
        })?;
    }
    Ok(out)
}

fn site_id(value: i32, what: &'static str) -> Result<SiteId, ProtocolError> {
    SiteId::try_from(value).map_err(|_| ProtocolError::InvalidNumber {
        what,
        token: value.to_string(),
    })
}

fn count(value: i32, what: &'static str) -> Result<usize, ProtocolError> {
    usize::try_from(value).map_err(|_| ProtocolError::InvalidNumber {
        what,
        token: value.to_string(),
    })
}

/// Parses a count line (`N` or `M`).
pub fn parse_count(line: &str, what: &'static str) -> Result<usize, ProtocolError> {
    let [n] = fields::<1>(line, what)?;
    count(n, what)
}

/// Parses `id x y radius`.
pub fn parse_site_layout(line: &str) -> Result<SiteLayout, ProtocolError> {
    let [id, x, y, radius] = fields::<4>(line, "site layout")?;
    Ok(SiteLayout {
        id: site_id(id, "site layout")?,
        position: Position::new(x, y),
        radius,
    })
}

/// Parses `gold touchedSiteId`; a touched id of `-1` means no site.
pub fn parse_turn_header(line: &str) -> Result<(i32, Option<SiteId>), ProtocolError> {
    let [gold, touched] = fields::<2>(line, "turn header")?;
    let touched = match touched {
        -1 => None,
        id => Some(site_id(id, "turn header")?),
    };
    Ok((gold, touched))
}

/// Parses `siteId goldRemaining maxMineSize structureType owner param1 param2`.
pub fn parse_site_status(line: &str) -> Result<SiteStatus, ProtocolError> {
    let [id, gold_remaining, max_mine_size, structure_type, owner, param1, param2] =
        fields::<7>(line, "site status")?;
    Ok(SiteStatus {
        id: site_id(id, "site status")?,
        gold_remaining,
        max_mine_size,
        owner: Owner::from_code(owner)?,
        structure: Structure::decode(structure_type, param1, param2)?,
    })
}

/// Parses `x y owner unitType health`.
pub fn parse_unit(line: &str) -> Result<Unit, ProtocolError> {
    let [x, y, owner, unit_type, health] = fields::<5>(line, "unit")?;
    Ok(Unit {
        position: Position::new(x, y),
        owner: Owner::from_code(owner)?,
        unit_type: UnitType::from_code(unit_type)?,
        health,
    })
}

/// Pulls protocol blocks off a buffered reader.
pub struct ProtocolReader<R> {
    lines: Lines<R>,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(reader: R) -> Self {
        ProtocolReader {
            lines: reader.lines(),
        }
    }

    /// Next non-blank line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, ProtocolError> {
        for line in self.lines.by_ref() {
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn expect_line(&mut self, what: &'static str) -> Result<String, ProtocolError> {
        self.next_line()?.ok_or(ProtocolError::UnexpectedEnd(what))
    }

    /// Reads the initialization block: a site count, then one layout line
    /// per site.
    pub fn read_layout(&mut self) -> Result<Vec<SiteLayout>, ProtocolError> {
        let n = parse_count(&self.expect_line("site count")?, "site count")?;
        let mut layout = Vec::with_capacity(n);
        for _ in 0..n {
            layout.push(parse_site_layout(&self.expect_line("site layout")?)?);
        }
        Ok(layout)
    }

    /// Reads one turn block. Returns `Ok(None)` when input ends cleanly
    /// before a new block starts; ending inside a block is an error.
    pub fn read_turn(&mut self, site_count: usize) -> Result<Option<TurnSnapshot>, ProtocolError> {
        let header = match self.next_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let (gold, touched_site) = parse_turn_header(&header)?;

        let mut sites = Vec::with_capacity(site_count);
        for _ in 0..site_count {
            sites.push(parse_site_status(&self.expect_line("site status")?)?);
        }

        let m = parse_count(&self.expect_line("unit count")?, "unit count")?;
        let mut units = Vec::with_capacity(m);
        for _ in 0..m {
            units.push(parse_unit(&self.expect_line("unit")?)?);
        }

        Ok(Some(TurnSnapshot {
            gold,
            touched_site,
            sites,
            units,
        }))
    }
}
