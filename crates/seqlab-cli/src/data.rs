use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, bail};

/// Read a numeric sequence, one value per line.
///
/// Leading and trailing whitespace is trimmed and blank lines are skipped.
/// Any line that does not parse as a float is an error carrying its 1-based
/// line number.
pub fn read_sequence<R>(reader: R) -> anyhow::Result<Vec<f64>>
where
    R: BufRead,
{
    let mut values = vec![];
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed
            .parse::<f64>()
            .with_context(|| format!("invalid value {trimmed:?} on line {}", index + 1))?;
        values.push(value);
    }
    Ok(values)
}

/// Read a numeric sequence from a file.
///
/// # Errors
///
/// Returns error if the file cannot be opened, contains an unparsable line,
/// or holds no values at all.
pub fn load_sequence<P>(path: P) -> anyhow::Result<Vec<f64>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let values = read_sequence(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;

    if values.is_empty() {
        bail!("{} is empty", path.display());
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_reads_one_value_per_line() {
        let input = Cursor::new("1.5\n2.0\n-0.25\n");
        assert_eq!(read_sequence(input).unwrap(), vec![1.5, 2.0, -0.25]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = Cursor::new("1.0\n\n   \n2.0\n\n");
        assert_eq!(read_sequence(input).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let input = Cursor::new("  3.5 \n\t4.25e1\n");
        assert_eq!(read_sequence(input).unwrap(), vec![3.5, 42.5]);
    }

    #[test]
    fn test_invalid_value_reports_its_line() {
        let input = Cursor::new("1.0\n2.0\nbogus\n");
        let err = read_sequence(input).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_empty_reader_yields_no_values() {
        let input = Cursor::new("");
        assert!(read_sequence(input).unwrap().is_empty());
    }
}
