use derive_new::new;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }

    std::fs::write(&file_spec.path, file_spec.content).expect("Failed to write file");
}

/// Write `files_count` files with random names and contents, spread over a
/// few nested directories, and return them keyed by relative path
pub fn write_generated_files(dir: &Path, files_count: usize) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();

    for i in 0..files_count {
        let depth = (0..3).fake::<usize>();
        let mut segments = (0..depth)
            .map(|_| Word().fake::<String>())
            .collect::<Vec<_>>();
        segments.push(format!("{}-{i}.txt", Word().fake::<String>()));
        let relative_path = segments.join("/");

        let content = Words(3..10).fake::<Vec<String>>().join(" ");
        write_file(FileSpec::new(dir.join(&relative_path), content.clone()));
        files.insert(relative_path, content);
    }

    files
}

/// Every regular file below `dir` outside the metadata directory, keyed by relative path
pub fn read_workspace(dir: &Path) -> BTreeMap<String, String> {
    walkdir::WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".joegit")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative_path = entry
                .path()
                .strip_prefix(dir)
                .expect("entry outside of the workspace")
                .components()
                .map(|component| component.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            let content = std::fs::read_to_string(entry.path()).expect("Failed to read file");
            (relative_path, content)
        })
        .collect()
}
