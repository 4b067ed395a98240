//! Farm description loader.
//!
//! # Text format
//!
//! ```text
//! 3              ← line 1: ant count (N ≥ 0)
//! ##start        ← marker: the next room definition is the start room
//! s 0 1
//! a 2 1
//! #anything      ← comment, ignored
//! ##end
//! e 4 1
//! s-a            ← tunnel (undirected)
//! a-e
//! ```
//!
//! Room lines are `name x y` (coordinates are display-only).  Tunnel lines
//! are `name1-name2` and may appear before the rooms they reference — they
//! are resolved after the whole file has been read.  Empty lines are
//! skipped.  Every structural violation (duplicate room, duplicate or
//! self tunnel, undefined room reference, missing/doubled terminals) is a
//! typed [`GraphError`]; nothing downstream ever sees a partially built
//! graph.

use std::io::BufRead;
use std::path::Path;

use af_core::GridPoint;

use crate::graph::{FarmGraph, FarmGraphBuilder};
use crate::{GraphError, GraphResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a farm description from a file path.
pub fn load_farm_path(path: &Path) -> GraphResult<(FarmGraph, u32)> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_farm(std::io::BufReader::new(file))
}

/// Load a farm description from any `BufRead` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
/// Returns the validated graph and the ant count from line 1.
pub fn load_farm<R: BufRead>(reader: R) -> GraphResult<(FarmGraph, u32)> {
    let mut builder = FarmGraphBuilder::new();
    let mut ant_count: Option<u32> = None;
    let mut pending_marker: Option<Marker> = None;
    // Tunnel lines may reference rooms defined later; resolve after the scan.
    let mut pending_links: Vec<(String, String)> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(GraphError::Io)?;
        let line = line.trim();

        // ── Line 1: ant count ─────────────────────────────────────────────
        if ant_count.is_none() {
            let n = line.parse::<u32>().map_err(|_| GraphError::Parse {
                line: line_no,
                msg:  format!("invalid ant count {line:?}"),
            })?;
            ant_count = Some(n);
            continue;
        }

        if line.is_empty() {
            continue;
        }

        // ── Markers and comments ──────────────────────────────────────────
        if let Some(rest) = line.strip_prefix('#') {
            let marker = match rest {
                "#start" => Some(Marker::Start),
                "#end"   => Some(Marker::End),
                _        => None, // plain comment
            };
            if let Some(marker) = marker {
                if pending_marker.is_some() {
                    return Err(GraphError::Parse {
                        line: line_no,
                        msg:  format!("marker {line:?} while another marker is still pending"),
                    });
                }
                pending_marker = Some(marker);
            }
            continue;
        }

        // ── Tunnel lines ──────────────────────────────────────────────────
        if !line.contains(char::is_whitespace) {
            let Some((a, b)) = line.split_once('-') else {
                return Err(GraphError::Parse {
                    line: line_no,
                    msg:  format!("expected a room or tunnel definition, got {line:?}"),
                });
            };
            if a.is_empty() || b.is_empty() || b.contains('-') {
                return Err(GraphError::Parse {
                    line: line_no,
                    msg:  format!("malformed tunnel {line:?}"),
                });
            }
            pending_links.push((a.to_owned(), b.to_owned()));
            continue;
        }

        // ── Room lines ────────────────────────────────────────────────────
        let mut fields = line.split_whitespace();
        let (Some(name), Some(x), Some(y), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(GraphError::Parse {
                line: line_no,
                msg:  format!("expected `name x y`, got {line:?}"),
            });
        };
        let pos = parse_coords(x, y).ok_or_else(|| GraphError::Parse {
            line: line_no,
            msg:  format!("invalid coordinates in {line:?}"),
        })?;

        let room = builder.add_room(name, pos)?;
        match pending_marker.take() {
            Some(Marker::Start) => builder.mark_start(room)?,
            Some(Marker::End)   => builder.mark_end(room)?,
            None                => {}
        }
    }

    let ant_count = ant_count.ok_or(GraphError::Parse {
        line: 1,
        msg:  "empty input: expected an ant count on line 1".to_owned(),
    })?;

    if pending_marker.is_some() {
        return Err(GraphError::Parse {
            line: 0,
            msg:  "dangling ##start/##end marker: no room definition follows".to_owned(),
        });
    }

    // ── Resolve deferred tunnel lines ─────────────────────────────────────
    for (a, b) in pending_links {
        let a_id = builder
            .room_id(&a)
            .ok_or_else(|| GraphError::UndefinedRoom(a.clone()))?;
        let b_id = builder
            .room_id(&b)
            .ok_or_else(|| GraphError::UndefinedRoom(b.clone()))?;
        builder.add_tunnel(a_id, b_id)?;
    }

    Ok((builder.build()?, ant_count))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

enum Marker {
    Start,
    End,
}

fn parse_coords(x: &str, y: &str) -> Option<GridPoint> {
    Some(GridPoint::new(x.parse().ok()?, y.parse().ok()?))
}
