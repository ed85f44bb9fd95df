use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use hexboard_board::{Board, RecordingSurface, RenderConfig, RenderTarget, config};
use hexboard_shared::Snapshot;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq, Eq)]
struct ReplayStats {
    rendered: usize,
    skipped: usize,
    malformed: usize,
    instructions: usize,
    exits_finished: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) if path != "-" => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open snapshot stream {path}"))?;
            info!(%path, "replaying snapshot stream");
            Box::new(BufReader::new(file))
        }
        _ => {
            info!("replaying snapshot stream from stdin");
            Box::new(io::stdin().lock())
        }
    };

    let mut board = Board::new(
        RenderTarget::new(config::target_width(), config::target_height()),
        RenderConfig::from_env(),
    );
    let (origin_x, origin_y) = board.target().board_origin();
    info!(
        width = board.target().width,
        height = board.target().height,
        origin_x,
        origin_y,
        board_width = board.dims().width,
        board_height = board.dims().height,
        animation_ms = board.config().animation_ms,
        show_coords = board.config().show_coords,
        "board configured"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = replay(input, &mut board, &mut out)?;
    out.flush().context("failed to flush output")?;

    info!(
        rendered = stats.rendered,
        skipped = stats.skipped,
        malformed = stats.malformed,
        instructions = stats.instructions,
        exits_finished = stats.exits_finished,
        "replay finished"
    );
    Ok(())
}

/// Feed every snapshot line through the board, writing one JSON frame
/// summary per rendered pass.
///
/// Rendered passes are spaced one animation duration apart on the surface
/// clock, so exits started by a pass have finished before the next one.
fn replay(input: impl BufRead, board: &mut Board, out: &mut impl Write) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();
    let mut surface = RecordingSurface::new();
    let step = board.config().animation_ms;

    for (line_no, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", line_no + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let snapshot: Snapshot = match serde_json::from_str(&line) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "skipping malformed snapshot");
                stats.malformed += 1;
                continue;
            }
        };

        stats.exits_finished += finish_exits(&mut surface, stats.rendered as f64 * step);
        let Some(summary) = board.render(&snapshot, &mut surface) else {
            stats.skipped += 1;
            continue;
        };
        stats.rendered += 1;
        stats.instructions += surface.take().len();

        serde_json::to_writer(&mut *out, &summary).context("failed to write frame summary")?;
        writeln!(out).context("failed to write frame summary")?;
    }

    stats.exits_finished += finish_exits(&mut surface, stats.rendered as f64 * step);
    Ok(stats)
}

fn finish_exits(surface: &mut RecordingSurface, now: f64) -> usize {
    let done = surface.advance(now);
    for exit in &done {
        debug!(layer = ?exit.layer, key = %exit.key, "exit finished");
    }
    done.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_BOARD: &str = r#"{"index": 0, "domain": {"xy": [0, 10]}, "prevDomain": null,
        "data": {"board": {"hexes": [[{"coord": [0, 0]}, {"terrain": "forest", "roll": 4}]]}}}"#;

    const NO_DOMAIN: &str = r#"{"index": 1, "domain": null, "prevDomain": null,
        "data": {"board": {}}}"#;

    #[test]
    fn counts_rendered_skipped_and_malformed_lines() {
        let input = format!("{}\n\nnot json\n{}\n", flatten(EMPTY_BOARD), flatten(NO_DOMAIN));
        let mut board = Board::new(RenderTarget::new(100.0, 100.0), RenderConfig::default());
        let mut out = Vec::new();

        let stats = replay(input.as_bytes(), &mut board, &mut out).unwrap();

        assert_eq!(
            stats,
            ReplayStats {
                rendered: 1,
                skipped: 1,
                malformed: 1,
                // one hex plus the 54 coordinate labels
                instructions: 55,
                exits_finished: 0,
            }
        );
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.lines().count(), 1);
        let summary: serde_json::Value = serde_json::from_str(written.trim()).unwrap();
        assert_eq!(summary["index"], 0);
    }

    #[test]
    fn animated_removals_finish_by_the_end_of_the_stream() {
        const CLEARED: &str = r#"{"index": 1, "domain": {"xy": [0, 10]},
            "prevDomain": {"xy": [0, 10]}, "data": {"board": {}}}"#;
        let input = format!("{}\n{}\n", flatten(EMPTY_BOARD), flatten(CLEARED));
        let mut board = Board::new(RenderTarget::new(100.0, 100.0), RenderConfig::default());
        let mut out = Vec::new();

        let stats = replay(input.as_bytes(), &mut board, &mut out).unwrap();

        assert_eq!(stats.rendered, 2);
        // hex removal plus 54 coordinate updates on the second pass
        assert_eq!(stats.instructions, 110);
        assert_eq!(stats.exits_finished, 1);
    }

    fn flatten(raw: &str) -> String {
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
