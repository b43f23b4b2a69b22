//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use crate::error::{Error, Hint};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves `dir` into an absolute, canonical path to an existing directory.
///
/// Fails with [Error::PathNotFound] when the path does not exist or does not
/// point to a directory. Other filesystem errors are returned as-is.
pub fn resolve_dir(dir: &Path) -> Result<PathBuf, Error> {
    let full = match std::fs::canonicalize(dir) {
        Ok(p) => p,
        Err(e) => match e.kind() {
            ErrorKind::NotFound | ErrorKind::NotADirectory => {
                return Err(Error::PathNotFound(dir.to_path_buf(), Hint::OutputDir))
            }
            _ => return Err(Error::Io(e)),
        },
    };
    match full.is_dir() {
        true => Ok(full),
        false => Err(Error::PathNotFound(dir.to_path_buf(), Hint::OutputDir)),
    }
}

/// Converts the path into a displayable string with forward slashes.
///
/// Removes the extended-length prefix that canonicalization adds on windows.
pub fn into_std_str(path: PathBuf) -> String {
    let s = path.display().to_string();
    let s = match s.strip_prefix(r"\\?\") {
        Some(rest) => rest.to_string(),
        None => s,
    };
    s.replace('\\', "/")
}

/// Resolves a relative path into a path under some `root` path.
///
/// This function is helpful for resolving the input and output paths written
/// in a configuration file, which are relative to that file's directory. The
/// resolved path does not need to exist yet.
pub fn resolve_rel_path(root: &Path, s: &Path) -> PathBuf {
    match s.is_relative() {
        true => root.join(s),
        false => s.to_path_buf(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolve_path_simple() {
        let rel_root = std::env::current_dir().unwrap();
        // expands relative path to full path
        assert_eq!(
            resolve_rel_path(&rel_root, Path::new("src/lib.rs")),
            rel_root.join("src/lib.rs")
        );
        // joins even when nothing exists at the relative root yet
        assert_eq!(
            resolve_rel_path(&rel_root, Path::new("hdlconf-missing")),
            rel_root.join("hdlconf-missing")
        );
        // not relative
        assert_eq!(
            resolve_rel_path(&rel_root, Path::new("/src")),
            PathBuf::from("/src")
        );
    }

    #[test]
    fn resolve_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let full = resolve_dir(dir.path()).unwrap();
        assert_eq!(full.is_absolute(), true);
        assert_eq!(full, std::fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn resolve_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere");
        match resolve_dir(&missing) {
            Err(Error::PathNotFound(p, _)) => assert_eq!(p, missing),
            r => panic!("expected path not found, got {:?}", r),
        }
    }

    #[test]
    fn resolve_file_is_not_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("blueprint.tsv");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(resolve_dir(&file), Err(Error::PathNotFound(..))));
    }

    #[test]
    fn resolve_under_file_is_not_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "").unwrap();
        let nested = file.join("sub");
        match resolve_dir(&nested) {
            Err(Error::PathNotFound(p, _)) => assert_eq!(p, nested),
            r => panic!("expected path not found, got {:?}", r),
        }
    }

    #[test]
    fn std_str_uses_forward_slashes() {
        assert_eq!(
            into_std_str(PathBuf::from(r"\\?\C:\users\chase\rtl")),
            "C:/users/chase/rtl"
        );
        assert_eq!(into_std_str(PathBuf::from("/tmp/rtl")), "/tmp/rtl");
    }
}
