//! Qt resource (`.qrc`) manifest generation.
//!
//! The manifest lists every file in the icon directory under the resource
//! prefix, followed by the stylesheet under the style prefix. It carries no
//! state of its own and is rebuilt in full from the directory contents.

use std::fs;
use std::path::Path;

use crate::discovery::list_files;
use crate::error::{IconError, Result};

/// Default prefix for icon resources.
pub const DEFAULT_RESOURCE_PREFIX: &str = "qss_icons";

/// Default prefix for the stylesheet resource.
pub const DEFAULT_STYLE_PREFIX: &str = "qdarkstyle";

/// Stylesheet file declared under the style prefix.
pub const STYLE_FILE: &str = "style.qss";

/// Sub-path icon entries are declared under.
pub const RESOURCE_SUBPATH: &str = "rc";

fn header(resource_prefix: &str) -> String {
    format!(
        "\n<RCC warning=\"File created programmatically. All changes made in this file will be lost!\">\n  <qresource prefix=\"{}\">\n",
        resource_prefix
    )
}

fn footer(style_prefix: &str) -> String {
    format!(
        "\n  </qresource>\n  <qresource prefix=\"{}\">\n      <file>{}</file>\n  </qresource>\n</RCC>\n",
        style_prefix, STYLE_FILE
    )
}

fn entry(filename: &str) -> String {
    format!("    <file>{}/{}</file>", RESOURCE_SUBPATH, filename)
}

/// Render manifest text for `files`, which are sorted first.
pub fn render_manifest(files: &[String], resource_prefix: &str, style_prefix: &str) -> String {
    let mut sorted: Vec<&str> = files.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let entries: Vec<String> = sorted.into_iter().map(entry).collect();

    format!(
        "{}{}{}",
        header(resource_prefix),
        entries.join("\n"),
        footer(style_prefix)
    )
}

/// Build the manifest for the current contents of `output_dir`.
pub fn generate_manifest(output_dir: &Path, resource_prefix: &str, style_prefix: &str) -> Result<String> {
    let files = list_files(output_dir)?;
    Ok(render_manifest(&files, resource_prefix, style_prefix))
}

/// Write manifest text to `path`, replacing any previous manifest.
pub fn write_manifest(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write manifest: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_manifest_snapshot() {
        let files = vec!["arrow_up.png".to_string(), "arrow_down.png".to_string()];

        let qrc = render_manifest(&files, DEFAULT_RESOURCE_PREFIX, DEFAULT_STYLE_PREFIX);

        insta::assert_snapshot!(qrc.trim(), @r#"
        <RCC warning="File created programmatically. All changes made in this file will be lost!">
          <qresource prefix="qss_icons">
            <file>rc/arrow_down.png</file>
            <file>rc/arrow_up.png</file>
          </qresource>
          <qresource prefix="qdarkstyle">
              <file>style.qss</file>
          </qresource>
        </RCC>
        "#);
    }

    #[test]
    fn test_manifest_prefixes_and_entries() {
        let dir = tempdir().unwrap();
        for name in ["b.png", "a@2x.png", "a.png"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let qrc = generate_manifest(dir.path(), "icons", "style").unwrap();

        assert!(qrc
            .trim_start()
            .starts_with("<RCC warning=\"File created programmatically."));
        assert!(qrc.contains("<qresource prefix=\"icons\">"));
        assert!(qrc.trim_end().ends_with("</RCC>"));
        assert!(qrc.contains("<qresource prefix=\"style\">\n      <file>style.qss</file>"));

        let entries: Vec<&str> = qrc
            .lines()
            .filter(|l| l.trim_start().starts_with("<file>rc/"))
            .map(str::trim)
            .collect();
        assert_eq!(
            entries,
            vec![
                "<file>rc/a.png</file>",
                "<file>rc/a@2x.png</file>",
                "<file>rc/b.png</file>",
            ]
        );
    }

    #[test]
    fn test_manifest_of_empty_directory() {
        let dir = tempdir().unwrap();

        let qrc = generate_manifest(dir.path(), "icons", "style").unwrap();

        assert!(!qrc.contains("<file>rc/"));
        assert!(qrc.contains("<file>style.qss</file>"));
    }

    #[test]
    fn test_write_manifest_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.qrc");
        fs::write(&path, "old contents that are much longer than the new ones").unwrap();

        write_manifest(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
