//! Rendered SQL statements.

use std::fmt;

/// A rendered statement and the statements that must run right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    sql: String,
    follow_ups: Vec<String>,
}

impl SqlStatement {
    /// Creates a statement with no follow-ups.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            follow_ups: Vec::new(),
        }
    }

    /// Appends a follow-up statement.
    #[must_use]
    pub fn then(mut self, sql: impl Into<String>) -> Self {
        self.follow_ups.push(sql.into());
        self
    }

    /// Returns the primary statement.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the follow-up statements in execution order.
    #[must_use]
    pub fn follow_ups(&self) -> &[String] {
        &self.follow_ups
    }

    /// Iterates over all statements in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.sql.as_str()).chain(self.follow_ups.iter().map(String::as_str))
    }

    /// Returns all statements in execution order.
    #[must_use]
    pub fn into_statements(self) -> Vec<String> {
        let mut statements = Vec::with_capacity(1 + self.follow_ups.len());
        statements.push(self.sql);
        statements.extend(self.follow_ups);
        statements
    }
}

impl fmt::Display for SqlStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sql in self.iter() {
            writeln!(f, "{sql};")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_order() {
        let stmt = SqlStatement::new("A").then("B").then("C");
        assert_eq!(stmt.sql(), "A");
        assert_eq!(stmt.follow_ups(), ["B", "C"]);
        assert_eq!(stmt.iter().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(stmt.clone().into_statements(), vec!["A", "B", "C"]);
        assert_eq!(stmt.to_string(), "A;\nB;\nC;\n");
    }
}
