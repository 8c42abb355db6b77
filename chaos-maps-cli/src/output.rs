//! CSV export of the computed sequences.

use std::io::{self, Write};

use chaos_maps::{BifurcationDiagram, FinalState, VisibleSlice};

/// Columns `t,y1` and, for two orbits, `y2,diff`.
///
/// `diff` is the full-length difference sequence; only its visible part is written.
pub fn write_time_series<W: Write>(
    out: &mut W,
    slice: &VisibleSlice<'_>,
    diff: Option<&[f64]>,
) -> io::Result<()> {
    match (slice.y2, diff) {
        (Some(y2), Some(diff)) => {
            writeln!(out, "t,y1,y2,diff")?;
            let visible_diff = &diff[diff.len().saturating_sub(slice.time.len())..];
            for (i, &t) in slice.time.iter().enumerate() {
                writeln!(out, "{t},{},{},{}", slice.y1[i], y2[i], visible_diff[i])?;
            }
        }
        _ => {
            writeln!(out, "t,y1")?;
            for (&t, y) in slice.time.iter().zip(slice.y1) {
                writeln!(out, "{t},{y}")?;
            }
        }
    }
    Ok(())
}

/// Columns `r,value,marker`.
pub fn write_final_state<W: Write>(out: &mut W, state: &FinalState) -> io::Result<()> {
    writeln!(out, "r,value,marker")?;
    for (value, marker) in state.points() {
        writeln!(out, "{},{value},{marker}", state.r)?;
    }
    Ok(())
}

/// Columns `r,value`.
pub fn write_bifurcation<W: Write>(out: &mut W, diagram: &BifurcationDiagram) -> io::Result<()> {
    writeln!(out, "r,value")?;
    for point in &diagram.points {
        writeln!(out, "{},{}", point.r, point.value)?;
    }
    Ok(())
}
