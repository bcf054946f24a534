//! Response definitions
//!
//! What a command produces besides its effect on the block.

use std::io::{self, Write};

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The command produced no output
    Done,

    /// Raw records in storage order (`list`)
    Records(Vec<String>),

    /// Value of the requested key, `None` if absent (`get`)
    Value(Option<String>),
}

impl Response {
    /// Write the response as text, one line per item
    ///
    /// A missing value prints nothing.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Response::Done | Response::Value(None) => {}
            Response::Records(records) => {
                for record in records {
                    writeln!(out, "{}", record)?;
                }
            }
            Response::Value(Some(value)) => writeln!(out, "{}", value)?,
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(response: &Response) -> String {
        let mut out = Vec::new();
        response.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_records() {
        let response = Response::Records(vec!["A=1".into(), "B=".into()]);
        assert_eq!(render(&response), "A=1\nB=\n");
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render(&Response::Value(Some("1".into()))), "1\n");
        assert_eq!(render(&Response::Value(Some(String::new()))), "\n");
        assert_eq!(render(&Response::Value(None)), "");
        assert_eq!(render(&Response::Done), "");
    }
}
