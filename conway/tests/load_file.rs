use std::io::Write;

use conway::{Grid, LifeError};
use tempfile::{NamedTempFile, TempDir};

fn data_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

#[test]
fn loads_live_cells_from_file() {
    let file = data_file(b"-*-\n-*-\n-*-\n");
    let mut grid = Grid::from_file(3, 3, file.path()).unwrap();
    assert_eq!(grid.live_count(), 3);

    grid.step();
    assert_eq!(grid.to_text(), "---\n***\n---\n");
}

#[test]
fn exact_source_round_trips() {
    let source = "*-*-*\n-----\n**--*\n-*-*-\n";
    let file = data_file(source.as_bytes());
    let grid = Grid::from_file(4, 5, file.path()).unwrap();
    assert_eq!(grid.to_text(), source);
}

#[test]
fn oversized_source_is_clipped_to_default_grid() {
    let line = "*".repeat(30);
    let source = format!("{line}\n").repeat(25);
    let file = data_file(source.as_bytes());

    let grid = Grid::from_file(conway::DEFAULT_ROWS, conway::DEFAULT_COLS, file.path()).unwrap();
    assert_eq!(grid.live_count(), 20 * 20);
}

#[test]
fn short_file_leaves_rest_dead() {
    let file = data_file(b"**");
    let grid = Grid::from_file(2, 4, file.path()).unwrap();
    assert_eq!(grid.to_text(), "**--\n----\n");
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.txt");

    let err = Grid::from_file(20, 20, &path).unwrap_err();
    assert!(matches!(&err, LifeError::NotFound { path: p } if *p == path));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn undecodable_file_is_read_error() {
    let file = data_file(&[b'*', 0xff, 0xfe, b'\n']);
    let err = Grid::from_file(20, 20, file.path()).unwrap_err();
    assert!(matches!(err, LifeError::Read { .. }));
    assert!(err.to_string().contains("cannot be read"));
}

#[test]
fn bad_bytes_past_last_row_are_still_read_error() {
    let file = data_file(b"*\n-\n\xff\xfe\n");
    let err = Grid::from_file(1, 1, file.path()).unwrap_err();
    assert!(matches!(err, LifeError::Read { .. }));
}

#[cfg(unix)]
#[test]
fn directory_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Grid::from_file(20, 20, dir.path()).unwrap_err();
    assert!(matches!(err, LifeError::Read { .. }));
}
