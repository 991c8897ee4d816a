use crate::error::Error;
use crate::io::Scanner;
use crate::range_minimum::segment_tree::MinSegmentTree;
use log::info;
use std::io::Write;

const CHANGE: u64 = 1;
const QUERY: u64 = 2;

// 1-indexed position to 0-indexed
fn position(index: usize, len: usize) -> Result<usize, Error> {
    match index.checked_sub(1) {
        Some(i) if i < len => Ok(i),
        _ => Err(Error::IndexOutOfRange { index, len }),
    }
}

pub fn run<W: Write>(input: &[u8], out: &mut W) -> Result<(), Error> {
    let mut input = Scanner::new(input);
    let n: usize = input.value("value count")?;
    let q: usize = input.value("query count")?;
    let values = (0..n).map(|_| input.value::<u64>("value")).collect::<Result<Vec<_>, _>>()?;
    info!("n={} q={}", n, q);

    let mut tree = MinSegmentTree::new(&values);
    for _ in 0..q {
        let kind: u64 = input.value("query type")?;
        let x: usize = input.value("position")?;
        match kind {
            CHANGE => {
                let value: u64 = input.value("value")?;
                tree.update(position(x, n)?, value);
            }
            QUERY => {
                let y: usize = input.value("position")?;
                let (l, r) = (position(x, n)?, position(y, n)?);
                let min = tree.query(l..r + 1).ok_or(Error::InvalidRange(x, y))?;
                writeln!(out, "{}", min)?;
            }
            _ => return Err(Error::InvalidQueryType(kind)),
        }
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

    #[test]
    fn sample() {
        let input = "8 4\n3 2 4 5 1 1 5 3\n2 1 4\n2 5 6\n1 2 3\n2 1 4\n";
        assert_eq!(output(input).unwrap(), "2\n1\n3\n");
    }

    #[test]
    fn single_value() {
        assert_eq!(output("1 3\n7\n2 1 1\n1 1 4\n2 1 1\n").unwrap(), "7\n4\n");
    }

    #[rstest]
    #[case("2 1\n5 6\n3 1 2\n", "invalid query type 3")]
    #[case("2 1\n5 6\n2 1 3\n", "position 3 out of range for 2 values")]
    #[case("2 1\n5 6\n1 0 3\n", "position 0 out of range for 2 values")]
    #[case("2 1\n5 6\n2 2 1\n", "invalid range 2..=1")]
    #[case("2 1\n5\n", "unexpected end of input, expected value")]
    fn rejects(#[case] input: &str, #[case] message: &str) {
        assert_eq!(output(input).unwrap_err().to_string(), message);
    }
}
