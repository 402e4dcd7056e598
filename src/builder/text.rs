/*!
Reading a problem from text.

# Format

- Each line holds at most one clause, as literal tokens separated by whitespace or commas.
- A line beginning with `?` holds the query, as literal tokens, and at most one query line is permitted.
- Blank lines, and lines beginning with `#` or `%`, are skipped.

For example, worked in full:

```none
# Either p or q, and each implies r.
p q
~p, r
~q, r
? r
```

Errors are noted with the (one-based) line of the error.

```rust
# use otter_refute::builder::text::read_problem;
# use otter_refute::types::err::{LiteralError, ParseError};
let text = "p q\n~~p\n";

assert_eq!(
    read_problem(text.as_bytes()),
    Err(ParseError::Line(2, LiteralError::DoubleNegation("~~p".to_string())))
);
```
*/

use std::io::BufRead;

use crate::{
    builder::{literals_from_string, Problem},
    misc::log::targets::{self},
    types::err::{self},
};

/// Reads a problem from text.
///
/// The query of the problem is empty if no query line was read.
pub fn read_problem(reader: impl BufRead) -> Result<Problem, err::ParseError> {
    let mut problem = Problem::default();
    let mut query_line: Option<usize> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let line = line.trim();

        match line.chars().next() {
            None | Some('#') | Some('%') => continue,

            Some('?') => {
                if let Some(first) = query_line {
                    log::warn!(target: targets::BUILDER, "Query on line {line_number}, following query on line {first}");
                    return Err(err::ParseError::DuplicateQuery(line_number));
                }
                query_line = Some(line_number);

                problem.query = literals_from_string(&line[1..])
                    .map_err(|e| err::ParseError::Line(line_number, e))?;
            }

            Some(_) => {
                let clause = literals_from_string(line)
                    .map_err(|e| err::ParseError::Line(line_number, e))?;

                if clause.is_empty() {
                    return Err(err::ParseError::EmptyClause(line_number));
                }
                problem.knowledge_base.push(clause);
            }
        }
    }

    log::info!(target: targets::BUILDER, "Read {} clauses", problem.knowledge_base.len());
    Ok(problem)
}
