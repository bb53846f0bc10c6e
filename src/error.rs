use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to run container runtime '{program}': {source}"))]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[snafu(display("'{program} images' failed ({}): {stderr}", describe_code(*code)))]
    ListFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[snafu(display("Image listing from '{program}' is not valid UTF-8: {source}"))]
    ListingEncoding {
        program: String,
        source: std::string::FromUtf8Error,
    },

    #[snafu(display("Failed to parse image listing at line {line}: {source}"))]
    ImageParse {
        line: usize,
        source: serde_json::Error,
    },

    #[snafu(display("'{program} rmi' failed ({})", describe_code(*code)))]
    RemoveFailed { program: String, code: Option<i32> },
}

impl Error {
    /// Process exit code to report for this error.
    ///
    /// Runtime failures pass the runtime's own exit code through; anything
    /// else (including a runtime killed by a signal) maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ListFailed { code, .. } | Error::RemoveFailed { code, .. } => {
                code.filter(|c| *c != 0).unwrap_or(1)
            }
            _ => 1,
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_failure_passes_runtime_code_through() {
        let err = Error::RemoveFailed {
            program: "docker".to_string(),
            code: Some(125),
        };
        assert_eq!(err.exit_code(), 125);
        assert_eq!(err.to_string(), "'docker rmi' failed (exit code 125)");
    }

    #[test]
    fn signalled_runtime_maps_to_one() {
        let err = Error::ListFailed {
            program: "podman".to_string(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn other_errors_map_to_one() {
        let err = Error::ImageParse {
            line: 1,
            source: serde_json::from_str::<u8>("x").unwrap_err(),
        };
        assert_eq!(err.exit_code(), 1);
    }
}
