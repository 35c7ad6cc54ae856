//! Error types shared by the graph builder and every query

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which endpoint(s) of a query are absent from the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingNodes {
    Source(String),
    Target(String),
    Both(String, String),
}

impl fmt::Display for MissingNodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingNodes::Source(word) | MissingNodes::Target(word) => {
                write!(f, "No {} in the graph!", word)
            }
            MissingNodes::Both(a, b) => write!(f, "No {} and {} in the graph!", a, b),
        }
    }
}

/// Errors and negative outcomes surfaced by the library
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Cannot read {}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    NodeNotFound(MissingNodes),

    #[error("No bridge words from {from} to {to}!")]
    NoBridge { from: String, to: String },

    #[error("No path found from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("Cannot write walk to {}", .path.display())]
    SinkUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_endpoint_messages() {
        assert_eq!(
            MissingNodes::Source("cat".into()).to_string(),
            "No cat in the graph!"
        );
        assert_eq!(
            MissingNodes::Target("dog".into()).to_string(),
            "No dog in the graph!"
        );
    }

    #[test]
    fn test_messages() {
        let err = GraphError::NodeNotFound(MissingNodes::Both("x".into(), "y".into()));
        assert_eq!(err.to_string(), "No x and y in the graph!");
        let err = GraphError::NoBridge {
            from: "a".into(),
            to: "b".into(),
        };
        assert_eq!(err.to_string(), "No bridge words from a to b!");
    }

    #[test]
    fn test_io_cause_is_chained_not_repeated() {
        use std::error::Error as _;

        let err = GraphError::SinkUnwritable {
            path: PathBuf::from("nodir/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "disk gone"),
        };
        assert_eq!(err.to_string(), "Cannot write walk to nodir/out.txt");
        assert_eq!(err.source().unwrap().to_string(), "disk gone");

        let err = GraphError::SourceUnreadable {
            path: PathBuf::from("story.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "disk gone"),
        };
        assert_eq!(err.to_string(), "Cannot read story.txt");
        assert!(err.source().is_some());
    }
}
