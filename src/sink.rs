//! Snapshot sinks: where the search reports the layouts it passes through.
//!
//! The search emits one [`Snapshot`] when the initial placement is drawn
//! and one after every accepted move. Sinks only observe; they cannot
//! influence the search other than by failing, which aborts it.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::grid::{Cell, Placement};

/// A view of the grid at one point of the search.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// 0 for the initial placement, then the number of accepted moves.
    pub iteration: usize,
    pub height: usize,
    pub width: usize,
    pub houses: &'a BTreeSet<Cell>,
    pub facilities: &'a Placement,
    pub cost: u64,
}

/// Consumer of search snapshots.
pub trait SnapshotSink {
    fn emit(&mut self, snapshot: &Snapshot<'_>) -> Result<()>;
}

/// Discards every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn emit(&mut self, _snapshot: &Snapshot<'_>) -> Result<()> {
        Ok(())
    }
}

/// Owned copy of the mutable parts of a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSnapshot {
    pub iteration: usize,
    pub facilities: Placement,
    pub cost: u64,
}

/// Keeps every snapshot in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub frames: Vec<RecordedSnapshot>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn costs(&self) -> Vec<u64> {
        self.frames.iter().map(|f| f.cost).collect()
    }
}

impl SnapshotSink for RecordingSink {
    fn emit(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        self.frames.push(RecordedSnapshot {
            iteration: snapshot.iteration,
            facilities: snapshot.facilities.clone(),
            cost: snapshot.cost,
        });
        Ok(())
    }
}

const HOUSE: char = 'H';
const FACILITY: char = '+';
const FREE: char = '.';

/// Renders a snapshot as text: one line per grid row (`H` house,
/// `+` facility, `.` free), a blank line, then `Cost: N`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use u_facility::grid::{Cell, Placement};
/// use u_facility::sink::{render_text, Snapshot};
///
/// let houses: BTreeSet<Cell> = [Cell::new(0, 0)].into_iter().collect();
/// let facilities: Placement = [Cell::new(1, 2)].into_iter().collect();
/// let snapshot = Snapshot { iteration: 0, height: 2, width: 3, houses: &houses, facilities: &facilities, cost: 3 };
/// assert_eq!(render_text(&snapshot), "H..\n..+\n\nCost: 3\n");
/// ```
pub fn render_text(snapshot: &Snapshot<'_>) -> String {
    let mut out = String::with_capacity((snapshot.width + 1) * snapshot.height + 16);
    for row in 0..snapshot.height {
        for col in 0..snapshot.width {
            let cell = Cell::new(row, col);
            out.push(if snapshot.facilities.contains(&cell) {
                FACILITY
            } else if snapshot.houses.contains(&cell) {
                HOUSE
            } else {
                FREE
            });
        }
        out.push('\n');
    }
    out.push_str(&format!("\nCost: {}\n", snapshot.cost));
    out
}

/// Streams rendered snapshots to a writer, each prefixed by an
/// iteration header.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SnapshotSink for TextRenderer<W> {
    fn emit(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        writeln!(self.out, "--- iteration {:03} ---", snapshot.iteration)?;
        self.out.write_all(render_text(snapshot).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes one text frame per snapshot into a directory, named
/// `{prefix}{iteration:03}.txt`.
#[derive(Debug, Clone)]
pub struct FrameWriter {
    dir: PathBuf,
    prefix: String,
}

impl FrameWriter {
    /// Creates the writer, creating `dir` if needed.
    pub fn new(dir: impl AsRef<Path>, prefix: impl Into<String>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            prefix: prefix.into(),
        })
    }

    pub fn frame_path(&self, iteration: usize) -> PathBuf {
        self.dir.join(format!("{}{:03}.txt", self.prefix, iteration))
    }
}

impl SnapshotSink for FrameWriter {
    fn emit(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        let mut file = BufWriter::new(File::create(self.frame_path(snapshot.iteration))?);
        file.write_all(render_text(snapshot).as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

impl<K: SnapshotSink + ?Sized> SnapshotSink for &mut K {
    fn emit(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        (**self).emit(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (BTreeSet<Cell>, Placement) {
        let houses = [Cell::new(0, 1), Cell::new(2, 2)].into_iter().collect();
        let facilities = [Cell::new(1, 1)].into_iter().collect();
        (houses, facilities)
    }

    #[test]
    fn test_render_text() {
        let (houses, facilities) = fixture();
        let snap = Snapshot {
            iteration: 4,
            height: 3,
            width: 3,
            houses: &houses,
            facilities: &facilities,
            cost: 3,
        };
        assert_eq!(render_text(&snap), ".H.\n.+.\n..H\n\nCost: 3\n");
    }

    #[test]
    fn test_text_renderer_header() {
        let (houses, facilities) = fixture();
        let snap = Snapshot {
            iteration: 7,
            height: 3,
            width: 3,
            houses: &houses,
            facilities: &facilities,
            cost: 3,
        };
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.emit(&snap).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.starts_with("--- iteration 007 ---\n"));
        assert!(text.ends_with("Cost: 3\n"));
    }

    #[test]
    fn test_recording_sink() {
        let (houses, facilities) = fixture();
        let mut sink = RecordingSink::new();
        for (i, cost) in [9u64, 5, 3].into_iter().enumerate() {
            sink.emit(&Snapshot {
                iteration: i,
                height: 3,
                width: 3,
                houses: &houses,
                facilities: &facilities,
                cost,
            })
            .unwrap();
        }
        assert_eq!(sink.costs(), vec![9, 5, 3]);
        assert_eq!(sink.frames[2].iteration, 2);
    }

    #[test]
    fn test_frame_writer_names() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FrameWriter::new(dir.path(), "hospitals").unwrap();
        assert_eq!(writer.frame_path(3), dir.path().join("hospitals003.txt"));
        assert_eq!(writer.frame_path(120), dir.path().join("hospitals120.txt"));
    }

    #[test]
    fn test_frame_writer_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = FrameWriter::new(dir.path().join("frames"), "f").unwrap();
        let (houses, facilities) = fixture();
        writer
            .emit(&Snapshot {
                iteration: 0,
                height: 3,
                width: 3,
                houses: &houses,
                facilities: &facilities,
                cost: 3,
            })
            .unwrap();
        let text = fs::read_to_string(dir.path().join("frames").join("f000.txt")).unwrap();
        assert!(text.contains("Cost: 3"));
    }
}
