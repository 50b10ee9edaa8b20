use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn save_json<T: serde::Serialize>(
    data: &T,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(data)?.as_bytes())?;
    tracing::info!("{} written", path.display());
    Ok(())
}

pub fn save_text(content: &str, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    tracing::info!("{} written", path.display());
    Ok(())
}
