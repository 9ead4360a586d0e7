use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Atom list is empty. Expected comma-separated indices such as '2,5,7-9'.")]
    EmptyList,

    #[error("Invalid atom index '{0}'. Expected an integer such as '7'.")]
    InvalidIndex(String),

    #[error("Invalid atom range '{0}'. Expected 'start-end' with start <= end (e.g., '7-9').")]
    InvalidRange(String),
}

/// Parses an atom selection such as `2,5,7-9` into individual indices.
///
/// Ranges are inclusive on both ends. A leading minus sign is read as a negative
/// index rather than a range so the core can report it as out of range.
pub fn parse_index_list(input: &str) -> Result<Vec<isize>, ParseError> {
    let mut indices = Vec::new();
    for token in input.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        if let Ok(index) = token.parse::<isize>() {
            indices.push(index);
            continue;
        }

        let (start, end) = token
            .split_once('-')
            .ok_or_else(|| ParseError::InvalidIndex(token.to_string()))?;
        let start: isize = start
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidRange(token.to_string()))?;
        let end: isize = end
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidRange(token.to_string()))?;
        if start > end {
            return Err(ParseError::InvalidRange(token.to_string()));
        }
        indices.extend(start..=end);
    }

    if indices.is_empty() {
        return Err(ParseError::EmptyList);
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_indices() {
        assert_eq!(parse_index_list("2,5,7,18"), Ok(vec![2, 5, 7, 18]));
    }

    #[test]
    fn expands_inclusive_ranges() {
        assert_eq!(parse_index_list("0, 3-5 ,9"), Ok(vec![0, 3, 4, 5, 9]));
    }

    #[test]
    fn keeps_negative_index_for_later_validation() {
        assert_eq!(parse_index_list("-1"), Ok(vec![-1]));
    }

    #[test]
    fn ignores_trailing_commas() {
        assert_eq!(parse_index_list("1,2,"), Ok(vec![1, 2]));
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(parse_index_list(" , "), Err(ParseError::EmptyList));
    }

    #[test]
    fn rejects_non_numeric_token() {
        assert_eq!(
            parse_index_list("1,x"),
            Err(ParseError::InvalidIndex("x".to_string()))
        );
    }

    #[test]
    fn rejects_reversed_range() {
        assert_eq!(
            parse_index_list("9-7"),
            Err(ParseError::InvalidRange("9-7".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_range() {
        assert_eq!(
            parse_index_list("3-a"),
            Err(ParseError::InvalidRange("3-a".to_string()))
        );
    }
}
