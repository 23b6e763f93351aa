use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
}

pub fn write_plan(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("unconflict.toml");
    write_file(FileSpec::new(path.clone(), content.to_string()));
    path
}

pub fn write_generated_clean_file(dir: &Path, name: &str) -> FileSpec {
    use fake::{Fake, faker::lorem::en::Sentences};

    let content = Sentences(3..8).fake::<Vec<String>>().join("\n") + "\n";
    let file_spec = FileSpec::new(dir.join(name), content);
    write_file(file_spec.clone());

    file_spec
}
