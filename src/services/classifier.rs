//! Entry-point classification of individual files.

use crate::domain::LanguageClass;
use regex::bytes::Regex;
use std::fs::{self, FileType};
use std::path::Path;

/// File names used as their own extension key
const WHOLE_NAME_KEYS: [&str; 2] = ["Makefile", "Dockerfile"];

/// Compute the key a file is classified by: the whole name for
/// `Makefile`/`Dockerfile`, the dotted suffix otherwise.
pub fn extension_key(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    if WHOLE_NAME_KEYS.contains(&name) {
        return Some(name.to_string());
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
}

/// Decide whether a file is an executable candidate, and for which class.
///
/// Content-gated classes (C, C++, Go, Rust, Python) must contain an
/// entry-point declaration; scripts and build files are accepted on their
/// key alone since there is no telling a script from a library.
pub fn classify(path: &Path, file_type: FileType) -> Option<LanguageClass> {
    if file_type.is_dir() {
        return None;
    }

    let class = LanguageClass::from_key(&extension_key(path)?)?;
    match class.entry_pattern() {
        Some(pattern) => has_entry_point(path, pattern).then_some(class),
        None => Some(class),
    }
}

/// Check file content against an entry-point pattern; unreadable files never match
fn has_entry_point(path: &Path, pattern: &Regex) -> bool {
    match fs::read(path) {
        Ok(content) => pattern.is_match(&content),
        Err(e) => {
            tracing::trace!("Skipping unreadable file {:?}: {}", path, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn classify_file(name: &str, content: &[u8]) -> Option<LanguageClass> {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(name);
        fs::write(&path, content).unwrap();
        let file_type = fs::metadata(&path).unwrap().file_type();
        classify(&path, file_type)
    }

    #[test]
    fn test_extension_key() {
        assert_eq!(extension_key(Path::new("cmd/main.go")).as_deref(), Some(".go"));
        assert_eq!(extension_key(Path::new("Makefile")).as_deref(), Some("Makefile"));
        assert_eq!(
            extension_key(Path::new("docker/Dockerfile")).as_deref(),
            Some("Dockerfile")
        );
        assert_eq!(extension_key(Path::new("rules.mk")).as_deref(), Some(".mk"));
        assert_eq!(extension_key(Path::new("README")), None);
    }

    #[test]
    fn test_content_gated_languages() {
        let cases = [
            ("main.c", "int main(void) { return 0; }", LanguageClass::C),
            ("main.c", "void main() {}", LanguageClass::C),
            ("main.cpp", "\nint main() {\n}\n", LanguageClass::Cpp),
            ("main.go", "package main\n\nfunc main()\t{}\n", LanguageClass::Go),
            ("main.rs", "fn main() {\n}\n", LanguageClass::Rust),
            (
                "exec.py",
                "if __name__ == \"__main__\":\n\tprint(\"Hello\")\n",
                LanguageClass::Python,
            ),
            (
                "exec.py",
                "if __name__=='__main__':\n    run()\n",
                LanguageClass::Python,
            ),
        ];

        for (name, content, expected) in cases {
            assert_eq!(
                classify_file(name, content.as_bytes()),
                Some(expected),
                "{} should classify as {}",
                name,
                expected
            );
        }
    }

    #[test]
    fn test_content_gated_without_entry_point() {
        assert_eq!(classify_file("lib.go", b"package main\n\nfunc init()\t{}\n"), None);
        assert_eq!(classify_file("lib.rs", b"pub fn helper() {}\n"), None);
        assert_eq!(classify_file("util.c", b"static int helper(void);\n"), None);
        assert_eq!(classify_file("mod.py", b"def main():\n    pass\n"), None);
    }

    #[test]
    fn test_scripts_accepted_unconditionally() {
        assert_eq!(classify_file("script.sh", b"\necho\n"), Some(LanguageClass::Bash));
        assert_eq!(classify_file("run.fish", b""), Some(LanguageClass::Fish));
        assert_eq!(
            classify_file("index.js", b"module.exports = {}"),
            Some(LanguageClass::JavaScript)
        );
        assert_eq!(
            classify_file("Makefile", b".PHONY: all\nall:\n"),
            Some(LanguageClass::Makefile)
        );
        assert_eq!(classify_file("rules.mk", b""), Some(LanguageClass::Makefile));
        assert_eq!(
            classify_file("Dockerfile", b"FROM alpine\n"),
            Some(LanguageClass::Dockerfile)
        );
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(classify_file("file.txt", b"Hello world!"), None);
        assert_eq!(classify_file("makefile", b"all:\n"), None);
    }

    #[test]
    fn test_non_utf8_source_keeps_entry_point() {
        let latin1 = b"/* Copyright Jos\xe9 */\nint main(void) { return 0; }\n";
        assert_eq!(classify_file("main.c", latin1), Some(LanguageClass::C));
        assert_eq!(classify_file("main.go", &[0xff, 0xfe, 0x00, 0x9f]), None);
    }

    #[test]
    fn test_directories_are_never_candidates() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("pkg.go");
        fs::create_dir(&dir).unwrap();
        assert_eq!(classify(&dir, fs::metadata(&dir).unwrap().file_type()), None);
    }

    #[test]
    fn test_file_removed_before_read_is_not_a_candidate() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("gone.rs");
        fs::write(&file, "fn main() {}").unwrap();
        let file_type = fs::metadata(&file).unwrap().file_type();
        fs::remove_file(&file).unwrap();
        assert_eq!(classify(&file, file_type), None);
    }

    /// The patterns are deliberately coarse: a declaration inside a comment
    /// or string still counts.
    #[test]
    fn test_known_heuristic_false_positives() {
        assert_eq!(
            classify_file("lib.c", b"/* unlike int main, this is a library */\n"),
            Some(LanguageClass::C)
        );
        assert_eq!(
            classify_file("doc.go", b"package doc\n\n// Call func main from cmd.\n"),
            Some(LanguageClass::Go)
        );
        assert_eq!(
            classify_file("lib.rs", b"const HELP: &str = \"fn main\";\n"),
            Some(LanguageClass::Rust)
        );
    }
}
