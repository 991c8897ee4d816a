use crate::error::Error;
use crate::io::Scanner;
use crate::shortest_path::dijkstra::Dijkstra;
use crate::shortest_path::grid::{Grid, MAX_SIDE};
use log::info;
use std::io::Write;

pub fn run<W: Write>(input: &[u8], out: &mut W) -> Result<(), Error> {
    let mut input = Scanner::new(input);
    // signed so that a negative side is a dimension error rather than a bad token
    let height: i64 = input.value("height")?;
    let width: i64 = input.value("width")?;
    let side = |s: i64| usize::try_from(s).ok().filter(|s| (1..=MAX_SIDE).contains(s));
    let (height, width) = match (side(height), side(width)) {
        (Some(h), Some(w)) => (h, w),
        _ => return Err(Error::InvalidDimensions { height, width }),
    };
    let grid = Grid::read(height, width, &mut input)?;
    info!("grid {}x{} from {:?} to {:?}", height, width, grid.start(), grid.end());

    match Dijkstra::default().solve(&grid) {
        Some(path) => {
            writeln!(out, "YES")?;
            writeln!(out, "{}", path.len())?;
            writeln!(out, "{}", path)?;
        }
        None => writeln!(out, "NO")?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn output(input: &str) -> Result<String, Error> {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[rstest]
    #[case("5 8\n########\n#.A#...#\n#.##.#B#\n#......#\n########\n", "YES\n9\nLDDRRRRRU\n")]
    #[case("1 3\nA#B\n", "NO\n")]
    #[case("1 2\nBA\n", "YES\n1\nL\n")]
    fn answers(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(output(input).unwrap(), expected);
    }

    #[rstest]
    #[case("0 5\n", "Incorrect dimensions!")]
    #[case("-1 5\n", "Incorrect dimensions!")]
    #[case("5 -1000\n", "Incorrect dimensions!")]
    #[case("1001 1\n", "Incorrect dimensions!")]
    #[case("2 2\nA.\n.C\n", "Incorrect input!")]
    #[case("2 2\nA.\n..\n", "missing cell 'B'")]
    #[case("2\n", "unexpected end of input, expected width")]
    fn rejects(#[case] input: &str, #[case] message: &str) {
        assert_eq!(output(input).unwrap_err().to_string(), message);
    }
}
