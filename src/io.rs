use std::io::BufRead;
use std::str::FromStr;
use log::trace;
use crate::error::{Error, Result, FormatError};

/// Reads the next line, stripped of its line terminator and surrounding whitespace.
/// Running out of input is a format error, since every caller knows how many lines it expects.
pub(crate) fn read_line(input : &mut dyn BufRead) -> Result<String> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Err(FormatError::UnexpectedEof.into());
    }
    let line = String::from_utf8(buf).map_err(|_| Error::from(FormatError::InvalidEncoding))?;
    trace!("read line '{}'", line.trim_end());
    Ok(line.trim().to_string())
}

/// Splits a line at '=' into exactly two tokens.
pub(crate) fn split_pair(line : &str) -> Result<(String, String)> {
    let tokens : Vec<&str> = line.split('=').collect();
    match tokens[..] {
        [key, value] => Ok((key.trim().to_string(), value.trim().to_string())),
        _ => Err(FormatError::MalformedLine(line.to_string()).into())
    }
}

pub(crate) fn read_pair(input : &mut dyn BufRead) -> Result<(String, String)> {
    let line = read_line(input)?;
    split_pair(&line)
}

/// Reads a key=value line whose key must be exactly `key`, returning the value token.
pub(crate) fn read_value(input : &mut dyn BufRead, key : &'static str) -> Result<String> {
    let (found, value) = read_pair(input)?;
    if found != key {
        return Err(FormatError::UnexpectedKey { expected : key, found }.into());
    }
    Ok(value)
}

pub(crate) fn parse_value<T>(key : &str, value : &str) -> Result<T>
where
    T : FromStr
{
    value.parse::<T>().map_err(|_| {
        Error::from(FormatError::InvalidNumber{ key : key.to_string(), value : value.to_string() })
    })
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn split_requires_two_tokens() {
        assert_eq!(split_pair("a=1").unwrap(), ("a".to_string(), "1".to_string()));
        for line in ["a", "a=1=2", ""].iter() {
            match split_pair(line) {
                Err(Error::Format(FormatError::MalformedLine(l))) => assert_eq!(l, *line),
                other => panic!("unexpected result {:?}", other)
            }
        }
    }

    #[test]
    fn read_line_strips_terminators() {
        let mut input = "type=gamma\r\nnext".as_bytes();
        assert_eq!(read_line(&mut input).unwrap(), "type=gamma");
        assert_eq!(read_line(&mut input).unwrap(), "next");
        assert!(matches!(read_line(&mut input), Err(Error::Format(FormatError::UnexpectedEof))));
    }

    #[test]
    fn invalid_utf8_is_format_error() {
        let mut input : &[u8] = b"precision=\xff\n";
        assert!(matches!(read_line(&mut input), Err(Error::Format(FormatError::InvalidEncoding))));
    }

    #[test]
    fn value_key_is_checked() {
        let mut input = "numParams=2\n".as_bytes();
        match read_value(&mut input, "type") {
            Err(Error::Format(FormatError::UnexpectedKey { expected, found })) => {
                assert_eq!(expected, "type");
                assert_eq!(found, "numParams");
            },
            other => panic!("unexpected result {:?}", other)
        }
    }

}
