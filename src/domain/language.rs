//! Supported language classes and their declarative detection/command table.

use regex::bytes::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Placeholder forwarded verbatim to the run script; the shell expands it
/// to the arguments passed on the command line.
pub const ARGS_PLACEHOLDER: &str = "$*";

/// Kind of toolchain or file type a candidate belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageClass {
    C,
    Cpp,
    Rust,
    Go,
    Python,
    JavaScript,
    Bash,
    Fish,
    Makefile,
    Dockerfile,
}

/// How a build-capable class produces an installable binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTemplate {
    /// `go build -o {target} {buildDir}`
    GoBuild,
    /// `cargo install --path {projectRoot}`
    CargoInstall,
    /// `make install`
    MakeInstall,
}

/// One row of the language table.
///
/// Run templates understand the placeholders `{path}` (candidate path),
/// `{dir}` (parent directory with a trailing separator, empty at top level),
/// `{project}` (base name of the resolution root) and `{args}`. Values are
/// inserted as-is without shell quoting.
#[derive(Debug)]
pub struct LanguageDefinition {
    pub class: LanguageClass,
    pub display_name: &'static str,
    /// Dotted extensions, or whole file names for `Makefile`/`Dockerfile`
    pub keys: &'static [&'static str],
    /// Content pattern a file must match to count as an entry point
    pub entry_point: Option<&'static str>,
    pub run: Option<&'static str>,
    pub build: Option<BuildTemplate>,
}

const C_MAIN: &str = r"(void|int)\s+main";

static LANGUAGES: [LanguageDefinition; 10] = [
    LanguageDefinition {
        class: LanguageClass::C,
        display_name: "C",
        keys: &[".c"],
        entry_point: Some(C_MAIN),
        run: Some("gcc -O2 -o main {dir}*.c && ./main {args}"),
        build: None,
    },
    LanguageDefinition {
        class: LanguageClass::Cpp,
        display_name: "C++",
        keys: &[".cpp"],
        entry_point: Some(C_MAIN),
        run: Some("g++ -O2 -std=c++17 -o main {dir}*.cpp && ./main {args}"),
        build: None,
    },
    LanguageDefinition {
        class: LanguageClass::Rust,
        display_name: "Rust",
        keys: &[".rs"],
        entry_point: Some(r"fn\s+main"),
        run: Some("cargo run {args}"),
        build: Some(BuildTemplate::CargoInstall),
    },
    LanguageDefinition {
        class: LanguageClass::Go,
        display_name: "Go",
        keys: &[".go"],
        entry_point: Some(r"func\s+main"),
        run: Some("go run {path} {args}"),
        build: Some(BuildTemplate::GoBuild),
    },
    LanguageDefinition {
        class: LanguageClass::Python,
        display_name: "Python",
        keys: &[".py"],
        entry_point: Some(r#"if\s+__name__\s*==\s*["']__main__["']"#),
        run: Some("python {path} {args}"),
        build: None,
    },
    LanguageDefinition {
        class: LanguageClass::JavaScript,
        display_name: "JavaScript",
        keys: &[".js"],
        entry_point: None,
        run: Some("node {path} {args}"),
        build: None,
    },
    LanguageDefinition {
        class: LanguageClass::Bash,
        display_name: "Bash",
        keys: &[".sh"],
        entry_point: None,
        run: Some("bash {path} {args}"),
        build: None,
    },
    LanguageDefinition {
        class: LanguageClass::Fish,
        display_name: "Fish",
        keys: &[".fish"],
        entry_point: None,
        run: Some("fish {path} {args}"),
        build: None,
    },
    LanguageDefinition {
        class: LanguageClass::Makefile,
        display_name: "Makefile",
        keys: &["Makefile", ".mk"],
        entry_point: None,
        run: Some("make {args}"),
        build: Some(BuildTemplate::MakeInstall),
    },
    LanguageDefinition {
        class: LanguageClass::Dockerfile,
        display_name: "Dockerfile",
        keys: &["Dockerfile"],
        entry_point: None,
        run: Some("docker build -t {project}:local .\ndocker run --rm -ti {args} {project}:local"),
        build: None,
    },
];

impl LanguageClass {
    /// Every supported class, in table order
    #[cfg(test)]
    pub fn all() -> impl Iterator<Item = LanguageClass> {
        LANGUAGES.iter().map(|def| def.class)
    }

    /// Table row for this class
    pub fn definition(self) -> &'static LanguageDefinition {
        // Table rows are declared in enum order
        &LANGUAGES[self as usize]
    }

    /// Look up the class owning an extension key (`.go`, `Makefile`, ...)
    pub fn from_key(key: &str) -> Option<Self> {
        LANGUAGES
            .iter()
            .find(|def| def.keys.contains(&key))
            .map(|def| def.class)
    }

    /// Compiled entry-point pattern, if this class is content-gated.
    ///
    /// Patterns match raw bytes so sources in any encoding are searched.
    pub fn entry_pattern(self) -> Option<&'static Regex> {
        static PATTERNS: OnceLock<HashMap<LanguageClass, Regex>> = OnceLock::new();
        PATTERNS
            .get_or_init(|| {
                LANGUAGES
                    .iter()
                    .filter_map(|def| {
                        def.entry_point.map(|pattern| {
                            let re = Regex::new(pattern).expect("entry-point patterns are valid");
                            (def.class, re)
                        })
                    })
                    .collect()
            })
            .get(&self)
    }

    /// Build strategy, if this class can be built into a standalone binary
    pub fn build_template(self) -> Option<BuildTemplate> {
        self.definition().build
    }

    /// Check if the class has a build command
    pub fn is_buildable(self) -> bool {
        self.build_template().is_some()
    }
}

impl std::fmt::Display for LanguageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.definition().display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_enum_order() {
        for (idx, class) in LanguageClass::all().enumerate() {
            assert_eq!(class as usize, idx);
            assert_eq!(class.definition().class, class);
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(LanguageClass::from_key(".go"), Some(LanguageClass::Go));
        assert_eq!(LanguageClass::from_key(".mk"), Some(LanguageClass::Makefile));
        assert_eq!(
            LanguageClass::from_key("Makefile"),
            Some(LanguageClass::Makefile)
        );
        assert_eq!(
            LanguageClass::from_key("Dockerfile"),
            Some(LanguageClass::Dockerfile)
        );
        assert_eq!(LanguageClass::from_key(".txt"), None);
        assert_eq!(LanguageClass::from_key("fish"), None);
    }

    #[test]
    fn test_content_gated_classes() {
        let gated: Vec<_> = LanguageClass::all()
            .filter(|c| c.entry_pattern().is_some())
            .collect();
        assert_eq!(
            gated,
            vec![
                LanguageClass::C,
                LanguageClass::Cpp,
                LanguageClass::Rust,
                LanguageClass::Go,
                LanguageClass::Python,
            ]
        );
    }

    #[test]
    fn test_buildable_classes() {
        let buildable: Vec<_> = LanguageClass::all().filter(|c| c.is_buildable()).collect();
        assert_eq!(
            buildable,
            vec![LanguageClass::Rust, LanguageClass::Go, LanguageClass::Makefile]
        );
    }

    #[test]
    fn test_every_class_has_run_template() {
        for class in LanguageClass::all() {
            assert!(class.definition().run.is_some(), "{}", class);
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(LanguageClass::Cpp.to_string(), "C++");
        assert_eq!(LanguageClass::JavaScript.to_string(), "JavaScript");
    }
}
