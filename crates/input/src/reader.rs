//! Line reader for the menu loop.

use std::io::BufRead;

use thiserror::Error;

use crate::map::{parse_line, MenuInput};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Read and parse one line. Returns `Ok(None)` at end of input.
pub fn read_input<R: BufRead>(reader: &mut R) -> Result<Option<MenuInput>, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(parse_line(&line)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StackAction;
    use std::io::Cursor;

    #[test]
    fn test_reads_until_eof() {
        let mut input = Cursor::new("2\n\nfoo\n0");
        assert_eq!(
            read_input(&mut input).unwrap(),
            Some(MenuInput::Action(StackAction::HoldTransfer))
        );
        assert_eq!(read_input(&mut input).unwrap(), Some(MenuInput::Empty));
        assert_eq!(
            read_input(&mut input).unwrap(),
            Some(MenuInput::Invalid("foo".to_string()))
        );
        assert_eq!(
            read_input(&mut input).unwrap(),
            Some(MenuInput::Action(StackAction::Exit))
        );
        assert_eq!(read_input(&mut input).unwrap(), None);
    }
}
