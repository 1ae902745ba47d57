use std::path::Path;

use ab_loader::Format;

pub fn run(file: &Path, format: &str, output: Option<&Path>) -> Result<(), String> {
    let format = Format::from_extension(format)
        .map_err(|_| format!("unsupported format: \"{format}\". Use: json, yaml"))?;
    let graph = super::load_adventure(file)?;

    let content = match format {
        Format::Json => ab_loader::to_json_string(&graph),
        Format::Yaml => ab_loader::to_yaml_string(&graph),
    }
    .map_err(|e| format!("{format} serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
