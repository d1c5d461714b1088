const CLASS_SUFFIX: &str = ".class";
const SOURCE_SUFFIX: &str = ".java";

/// Search keys derived from a dotted class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    class_name: String,
    class_path: String,
    source_path: String,
    bare: bool,
}

impl Query {
    pub fn new(class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        let class_path = class_name_to_class_path(&class_name);
        let source_path = class_path_to_source_path(&class_path);
        let bare = is_bare_name(&class_name);
        Self {
            class_name,
            class_path,
            source_path,
            bare,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// `com/foo/Bar.class` for `com.foo.Bar`.
    pub fn class_path(&self) -> &str {
        &self.class_path
    }

    /// `com/foo/Bar.java` for `com.foo.Bar`.
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// True when the name carries no package, so every package of an archive is searched.
    pub fn is_bare(&self) -> bool {
        self.bare
    }
}

pub fn class_name_to_class_path(class_name: &str) -> String {
    format!("{}{CLASS_SUFFIX}", class_name.replace('.', "/"))
}

fn class_path_to_source_path(class_path: &str) -> String {
    match class_path.strip_suffix(CLASS_SUFFIX) {
        Some(stem) => format!("{stem}{SOURCE_SUFFIX}"),
        None => class_path.to_string(),
    }
}

pub fn is_bare_name(class_name: &str) -> bool {
    !class_name.contains('.')
}

/// Turns an archive entry path back into a dotted class name.
pub fn class_path_to_class_name(entry_path: &str) -> String {
    let dotted = entry_path.replace('/', ".");
    let dotted = dotted.strip_prefix('.').unwrap_or(&dotted);
    let dotted = dotted.strip_suffix(CLASS_SUFFIX).unwrap_or(dotted);
    let dotted = dotted.strip_suffix(SOURCE_SUFFIX).unwrap_or(dotted);
    dotted.to_string()
}
