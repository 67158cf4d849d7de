use anyhow::{Context, Result};
use clap::Args;
use shopfront_core::{Breadcrumb, Category, ClientConfig, find_category_path};
use shopfront_interaction::CatalogService;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct BreadcrumbArgs {
    /// Category id to resolve
    pub id: String,

    /// Read the category tree from a JSON file instead of the API
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn run(config: ClientConfig, args: BreadcrumbArgs) -> Result<()> {
    let path = match &args.file {
        Some(file) => find_category_path(&load_tree(file)?, &args.id),
        None => {
            let client = super::build_client(config, None)?;
            CatalogService::new(client).breadcrumb(&args.id).await?
        }
    };

    match path {
        Some(path) => println!("{}", render(&path)),
        None => println!("Category '{}' not found", args.id),
    }
    Ok(())
}

fn load_tree(file: &Path) -> Result<Vec<Category>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", file.display()))
}

fn render(path: &[Breadcrumb]) -> String {
    path.iter()
        .map(|crumb| format!("{} ({})", crumb.name, crumb.href))
        .collect::<Vec<_>>()
        .join(" > ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_tree_and_render() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("categories.json");
        std::fs::write(
            &file,
            r#"[{"id":"1","name":"Books","children":[{"id":"2","name":"Poetry","parentId":"1"}]}]"#,
        )
        .unwrap();

        let tree = load_tree(&file).unwrap();
        let path = find_category_path(&tree, "2").unwrap();
        assert_eq!(render(&path), "Books (/categories/1) > Poetry (/categories/2)");
    }

    #[test]
    fn test_load_tree_reports_bad_json() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("categories.json");
        std::fs::write(&file, "{").unwrap();
        assert!(load_tree(&file).is_err());
    }
}
