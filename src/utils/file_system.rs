use std::path::Path;
use walkdir::WalkDir;

/// Enumerate the `.cpp` files directly under `<project>/src/`, as relative
/// `./src/<name>` paths in sorted order.
///
/// Execution is argv-based, so there is no shell around to expand the
/// `./src/*.cpp` glob; this is the expansion. Non-recursive on purpose: the
/// assignments keep all translation units at the top of `src/`.
pub fn find_source_files(project_path: &Path) -> Result<Vec<String>, String> {
    let src_dir = project_path.join("src");
    if !src_dir.is_dir() {
        return Err(format!(
            "Source directory {:?} does not exist. Run this from the assignment directory.",
            src_dir
        ));
    }

    let mut sources: Vec<String> = Vec::new();
    for entry in WalkDir::new(&src_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file()
            && entry.path().extension().map_or(false, |ext| ext == "cpp")
        {
            sources.push(format!("./src/{}", entry.file_name().to_string_lossy()));
        }
    }

    if sources.is_empty() {
        return Err(format!("No .cpp files found in {:?}.", src_dir));
    }

    sources.sort();
    Ok(sources)
}
