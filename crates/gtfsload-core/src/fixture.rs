//! Request fixture model: a GraphQL document plus harness placeholder
//! variables.
//!
//! The emitted wire shape is `{ "query": ..., "variables": ... }` where
//! `variables` is itself a JSON-encoded string. The double encoding is the
//! convention the consuming load-test harness expects for its variable
//! substitution pass and must be preserved exactly.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Substitution token resolved by the load-test harness, never by this tool.
///
/// Renders as `${name}`. The harness replaces tokens with sampled values
/// (a real feed namespace, a route id drawn from a prior response) before
/// the request goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(&'static str);

impl Placeholder {
    /// Creates a placeholder for the given harness variable name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Harness variable name, without the token syntax.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.0
    }

    /// The `${name}` token exactly as it appears in emitted output.
    #[must_use]
    pub fn token(&self) -> String {
        format!("${{{}}}", self.0)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${{{}}}", self.0)
    }
}

/// GraphQL request body in the form the load-test harness consumes.
///
/// `variables` holds a JSON-encoded string, not a JSON object: the harness
/// substitutes `${...}` tokens textually inside that string, so the double
/// encoding must survive serialization untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    /// GraphQL query document text.
    pub query: String,
    /// JSON-encoded mapping from query parameter name to placeholder token.
    pub variables: String,
}

/// A named load-test fixture: one GraphQL document with placeholder
/// variables.
///
/// Fixtures are static literals defined in [`crate::catalog`]; they are
/// rendered, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct QueryFixture {
    name: &'static str,
    summary: &'static str,
    query: &'static str,
    variables: &'static [(&'static str, Placeholder)],
}

impl QueryFixture {
    /// Defines a fixture. Catalog entries are the only intended callers.
    #[must_use]
    pub const fn new(
        name: &'static str,
        summary: &'static str,
        query: &'static str,
        variables: &'static [(&'static str, Placeholder)],
    ) -> Self {
        Self {
            name,
            summary,
            query,
            variables,
        }
    }

    /// Stable fixture name, used on the command line and in export filenames.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description for listings.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        self.summary
    }

    /// GraphQL query document text.
    #[must_use]
    pub const fn query(&self) -> &'static str {
        self.query
    }

    /// Ordered `(parameter name, placeholder)` pairs.
    #[must_use]
    pub const fn variables(&self) -> &'static [(&'static str, Placeholder)] {
        self.variables
    }

    /// Builds the request body with the variable map JSON-encoded.
    ///
    /// Keys serialize in sorted order (`BTreeMap`), which keeps repeated
    /// renders byte-identical.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails, which static literal
    /// input cannot trigger in practice.
    pub fn request_body(&self) -> Result<RequestBody> {
        let map: BTreeMap<&str, String> = self
            .variables
            .iter()
            .map(|(name, placeholder)| (*name, placeholder.token()))
            .collect();
        Ok(RequestBody {
            query: self.query.to_string(),
            variables: serde_json::to_string(&map)?,
        })
    }

    /// Renders the compact single-line JSON document the harness reads.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.request_body()?)?)
    }

    /// Pretty-printed rendering for human inspection.
    ///
    /// The harness consumes the compact form from [`Self::emit`]; this one is
    /// for eyeballing a fixture before wiring it into a test plan.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.request_body()?)?)
    }

    /// Writes the document plus a trailing newline to `out`.
    ///
    /// Output is a single line: the whole fixture contract is "one JSON
    /// object, fully formed, once".
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<()> {
        let body = self.request_body()?;
        serde_json::to_writer(&mut *out, &body)?;
        writeln!(out)?;
        Ok(())
    }
}
