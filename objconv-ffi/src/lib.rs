//! objconv FFI - dynamic library entry point
//!
//! Exposes the converter to native hosts as a single C function:
//!
//! ```c
//! bool ImportModelFromFile(const char* inputFilename, const char* outputFilename);
//! ```

use std::ffi::{c_char, CStr};
use std::path::{Path, PathBuf};
use std::sync::Once;

use objconv_core::logging::{self, DEFAULT_LOG_FILE};
use objconv_core::{Error, ObjConverter};

static LOGGING: Once = Once::new();

/// Set up console + file logging the first time the library is used
fn init_logging() {
    let log_file = std::env::var_os("OBJCONV_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    init_logging_to(&log_file, false);
}

/// Only the first call in a process has any effect
fn init_logging_to(log_file: &Path, quiet: bool) {
    LOGGING.call_once(|| {
        if let Err(e) = logging::init(Some(log_file), quiet) {
            // The host may already have a subscriber; keep using it
            tracing::debug!("logging not installed: {}", e);
        }
    });
}

/// Convert the OBJ model at `input_filename` into `output_filename`.
///
/// Returns `false` if either path is null, empty or not UTF-8, or if the
/// conversion fails. Details go to the log.
///
/// # Safety
///
/// Both pointers must be null or point to NUL-terminated strings that stay
/// valid for the duration of the call.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn ImportModelFromFile(
    input_filename: *const c_char,
    output_filename: *const c_char,
) -> bool {
    init_logging();

    let paths = path_arg(input_filename, "input").and_then(|input| {
        path_arg(output_filename, "output").map(|output| (input, output))
    });
    match paths {
        Ok((input, output)) => import_model_from_file(input, output),
        Err(e) => {
            tracing::error!(site = "ImportModelFromFile", "{}", e);
            false
        }
    }
}

/// Safe counterpart of [`ImportModelFromFile`] for Rust callers
pub fn import_model_from_file(input: &str, output: &str) -> bool {
    match ObjConverter::default().convert(input, output) {
        Ok(_) => true,
        Err(_) => {
            tracing::error!(
                site = "import_model_from_file",
                "can't convert .obj into the internal model format"
            );
            false
        }
    }
}

unsafe fn path_arg<'a>(ptr: *const c_char, which: &str) -> Result<&'a str, Error> {
    if ptr.is_null() {
        return Err(Error::InvalidPath(format!("{} path is null", which)));
    }
    let path = CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| Error::InvalidPath(format!("{} path is not valid UTF-8", which)))?;
    if path.is_empty() {
        return Err(Error::InvalidPath(format!("{} path is empty", which)));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::fs;
    use std::ptr;
    use tempfile::TempDir;

    /// One log file for the whole test process, outliving every test's TempDir
    fn test_log() -> PathBuf {
        let path = std::env::temp_dir().join(format!("objconv-ffi-{}.log", std::process::id()));
        init_logging_to(&path, true);
        path
    }

    #[test]
    fn test_import_model() {
        let dir = TempDir::new().unwrap();
        test_log();
        let input = dir.path().join("quad.obj");
        let output = dir.path().join("quad.txt");
        fs::write(
            &input,
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvt 0 0\nf 1/1/1 2/1/1 3/1/1\nf 1/1/1 3/1/1 4/1/1\n",
        )
        .unwrap();

        let c_input = CString::new(input.to_str().unwrap()).unwrap();
        let c_output = CString::new(output.to_str().unwrap()).unwrap();
        assert!(unsafe { ImportModelFromFile(c_input.as_ptr(), c_output.as_ptr()) });

        let text = fs::read_to_string(output).unwrap();
        assert!(text.contains("Indices Count: 6\n"));
        assert!(text.contains("Vertex Indices Data:\n2 1 0\n3 2 0\n"));
    }

    #[test]
    fn test_rejects_bad_paths() {
        let dir = TempDir::new().unwrap();
        test_log();
        let empty = CString::new("").unwrap();
        let out = CString::new(dir.path().join("x.txt").to_str().unwrap()).unwrap();

        assert!(!unsafe { ImportModelFromFile(ptr::null(), out.as_ptr()) });
        assert!(!unsafe { ImportModelFromFile(empty.as_ptr(), out.as_ptr()) });
        assert!(!unsafe { ImportModelFromFile(out.as_ptr(), ptr::null()) });
    }

    #[test]
    fn test_missing_input_returns_false() {
        let dir = TempDir::new().unwrap();
        test_log();
        let missing = dir.path().join("missing.obj");
        let output = dir.path().join("missing.txt");
        assert!(!import_model_from_file(
            missing.to_str().unwrap(),
            output.to_str().unwrap()
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_logging_installed_once() {
        let shared = test_log();
        let dir = TempDir::new().unwrap();
        let other = dir.path().join("other.log");

        init_logging_to(&other, true);
        assert!(!other.exists());
        assert!(shared.exists());
    }
}
