use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::error::DocsError;
use crate::normalize::SpecContent;

const FILE_SCHEME: &str = "file";
const FILE_PREFIX: &str = "file://";

/// Convert a bare absolute path, a bare relative path, or a `file://` URL
/// into an absolute `file://` URL.
///
/// Relative input is resolved against the current working directory and
/// `.`/`..` segments are folded lexically. An absolute `file:///...` URL is
/// percent-decoded, so the output of this function maps back to itself.
/// Any other text after `file://` is taken as a literal path, so
/// `file://spec.json` names `spec.json` in the working directory rather
/// than a host.
pub fn normalize_file_url(file_path: &str) -> Result<Url, DocsError> {
    let decoded;
    let path = match file_path.strip_prefix(FILE_PREFIX) {
        Some(rest) if rest.starts_with('/') => {
            decoded = Url::parse(file_path)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .ok_or_else(|| DocsError::InvalidUrl(format!("{file_path}: not a local file path")))?;
            decoded.as_path()
        }
        Some(rest) => Path::new(rest),
        None => Path::new(file_path),
    };
    let absolute = if path.is_absolute() {
        clean_path(path)
    } else {
        let cwd = env::current_dir().map_err(|source| DocsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        clean_path(&cwd.join(path))
    };
    let url = Url::from_file_path(&absolute).map_err(|()| {
        DocsError::InvalidUrl(format!("cannot express {} as a file URL", absolute.display()))
    })?;
    debug!(input = file_path, url = %url, "normalized spec file location");
    Ok(url)
}

fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Read the bytes behind a `file://` URL.
pub fn read_file_from_url(file_url: &str) -> Result<Vec<u8>, DocsError> {
    let url = Url::parse(file_url).map_err(|e| DocsError::InvalidUrl(format!("{file_url}: {e}")))?;
    if url.scheme() != FILE_SCHEME {
        return Err(DocsError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
        });
    }
    let path = url
        .to_file_path()
        .map_err(|()| DocsError::InvalidUrl(format!("{file_url}: not a local file path")))?;
    fs::read(&path).map_err(|source| DocsError::Io { path, source })
}

/// Resolve a spec file to normalized JSON text.
///
/// Returns an empty string when the file is readable but is not JSON.
pub fn load_spec_from_file(file_path: &str) -> Result<String, DocsError> {
    let url = normalize_file_url(file_path)?;
    let bytes = read_file_from_url(url.as_str())?;
    debug!(url = %url, bytes = bytes.len(), "read spec file");
    Ok(SpecContent::Json(String::from_utf8_lossy(&bytes).into_owned()).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        env::current_dir().unwrap()
    }

    #[test]
    fn test_absolute_path() {
        let url = normalize_file_url("/path/to/file.json").unwrap();
        assert_eq!(url.scheme(), "file");
        assert_eq!(url.to_file_path().unwrap(), PathBuf::from("/path/to/file.json"));
    }

    #[test]
    fn test_relative_path() {
        let url = normalize_file_url("file.json").unwrap();
        assert_eq!(url.to_file_path().unwrap(), cwd().join("file.json"));
    }

    #[test]
    fn test_file_url_with_absolute_path() {
        let url = normalize_file_url("file:///path/to/file.json").unwrap();
        assert_eq!(url.as_str(), "file:///path/to/file.json");
    }

    #[test]
    fn test_file_url_is_percent_decoded() {
        let url = normalize_file_url("file:///tmp/my%20spec.json").unwrap();
        assert_eq!(url.to_file_path().unwrap(), PathBuf::from("/tmp/my spec.json"));
        assert_eq!(url.as_str(), "file:///tmp/my%20spec.json");
    }

    #[test]
    fn test_normalized_url_maps_to_itself() {
        for input in ["/tmp/my spec.json", "/tmp/100%.json", "/tmp/caf\u{e9}#1.json", "specs/a b.json"] {
            let once = normalize_file_url(input).unwrap();
            let twice = normalize_file_url(once.as_str()).unwrap();
            assert_eq!(once, twice, "input {input:?}");
        }
    }

    #[test]
    fn test_load_file_url_with_space_in_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my spec.json");
        fs::write(&path, "{\"a\":1}").unwrap();

        let direct = load_spec_from_file(path.to_str().unwrap()).unwrap();
        let url = normalize_file_url(path.to_str().unwrap()).unwrap();
        assert!(url.as_str().contains("my%20spec.json"));
        assert_eq!(load_spec_from_file(url.as_str()).unwrap(), direct);
        assert_eq!(direct, "{\"a\":1}");
    }

    #[test]
    fn test_file_url_with_relative_path() {
        let url = normalize_file_url("file://docs/file.json").unwrap();
        assert_eq!(url.to_file_path().unwrap(), cwd().join("docs").join("file.json"));
    }

    #[test]
    fn test_relative_segments_are_folded() {
        let url = normalize_file_url("./specs/../file.json").unwrap();
        assert_eq!(url.to_file_path().unwrap(), cwd().join("file.json"));
        let url = normalize_file_url("/a/b/../c/./d.json").unwrap();
        assert_eq!(url.to_file_path().unwrap(), PathBuf::from("/a/c/d.json"));
    }

    #[test]
    fn test_empty_path_is_working_directory() {
        let url = normalize_file_url("").unwrap();
        assert!(url.as_str().starts_with("file://"));
        assert_eq!(url.to_file_path().unwrap(), cwd());
    }

    #[test]
    fn test_read_rejects_other_schemes() {
        let err = read_file_from_url("http://example.com/file.json").unwrap_err();
        assert!(matches!(err, DocsError::UnsupportedScheme { ref scheme } if scheme == "http"));
    }

    #[test]
    fn test_read_rejects_unparseable_url() {
        assert!(matches!(
            read_file_from_url("not-a-url").unwrap_err(),
            DocsError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_file_from_url("file:///non/existent/file.json").unwrap_err();
        assert!(matches!(err, DocsError::Io { .. }));
    }

    #[test]
    fn test_load_valid_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let valid = dir.path().join("valid.json");
        fs::write(&valid, "\n  {\"test\": \"content\"}  \n").unwrap();
        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, "not json").unwrap();

        assert_eq!(
            load_spec_from_file(valid.to_str().unwrap()).unwrap(),
            "{\"test\": \"content\"}"
        );
        assert_eq!(load_spec_from_file(invalid.to_str().unwrap()).unwrap(), "");
        let file_url = format!("file://{}", valid.display());
        assert!(!load_spec_from_file(&file_url).unwrap().is_empty());
    }
}
