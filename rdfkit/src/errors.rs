#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Got an invalid argument or parameter value in a function
    InvalidArgument(String),
    /// An atom index is not valid for the trajectory it is used with
    IndexOutOfRange {
        /// the offending atom index
        index: usize,
        /// number of atoms in the trajectory
        size: usize,
    },
    /// Error while serializing/deserializing data
    Json(serde_json::Error),
    /// Error related to reading trajectory files
    Chemfiles(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(e) => write!(f, "invalid argument: {}", e),
            Error::IndexOutOfRange { index, size } => write!(
                f, "atom index out of range: got {} but the trajectory contains {} atoms", index, size
            ),
            Error::Json(e) => write!(f, "json error: {}", e),
            Error::Chemfiles(e) => write!(f, "chemfiles error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidArgument(_) |
            Error::IndexOutOfRange { .. } |
            Error::Chemfiles(_) => None,
            Error::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::Json(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let error = Error::InvalidArgument("bins must be positive".into());
        assert_eq!(error.to_string(), "invalid argument: bins must be positive");

        let error = Error::IndexOutOfRange { index: 12, size: 4 };
        assert_eq!(
            error.to_string(),
            "atom index out of range: got 12 but the trajectory contains 4 atoms"
        );
    }

    #[test]
    fn json_source() {
        let json_error = serde_json::from_str::<f64>("not json").unwrap_err();
        let error = Error::from(json_error);
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().starts_with("json error: "));
    }
}
