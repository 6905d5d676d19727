//! Scanner for the block-style YAML used by importer sidecars and project settings
//!
//! Only the subset those files use is understood: nested block mappings, block
//! sequences of mappings, and scalar values. Every scalar is recorded under its
//! dotted key path, so `TextureImporter.platformSettings.maxTextureSize` yields
//! one value per sequence entry in document order.

use crate::{Error, Result};
use std::path::Path;

/// Flattened view of a meta document
#[derive(Debug, Clone, Default)]
pub struct MetaDocument {
    root_key: Option<String>,
    entries: Vec<(String, String)>,
}

impl MetaDocument {
    /// Reads and scans a document from disk
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Scans a document from text
    pub fn parse(text: &str) -> Result<Self> {
        let mut doc = MetaDocument::default();
        // (indent, key) of the mappings enclosing the current line
        let mut stack: Vec<(usize, String)> = Vec::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim_end();
            let trimmed = line.trim_start();
            if trimmed.is_empty()
                || trimmed.starts_with('#')
                || line.starts_with('%')
                || line.starts_with("---")
            {
                continue;
            }

            let leading = &line[..line.len() - trimmed.len()];
            if leading.contains('\t') {
                return Err(Error::MalformedMeta {
                    line: index + 1,
                    reason: "tab character in indentation".to_string(),
                });
            }

            let mut indent = leading.len();
            let mut content = trimmed;
            if content == "-" {
                continue;
            }
            if let Some(item) = content.strip_prefix("- ") {
                let item_trimmed = item.trim_start();
                indent += 2 + (item.len() - item_trimmed.len());
                content = item_trimmed;
            }

            let (key, value) = match split_key_value(content) {
                Some(pair) => pair,
                // Plain sequence scalars and wrapped continuation lines carry no key
                None => continue,
            };

            while stack.last().is_some_and(|(level, _)| *level >= indent) {
                stack.pop();
            }

            let path = if stack.is_empty() {
                key.to_string()
            } else {
                let mut path = stack
                    .iter()
                    .map(|(_, k)| k.as_str())
                    .collect::<Vec<_>>()
                    .join(".");
                path.push('.');
                path.push_str(key);
                path
            };

            match value {
                Some(value) => doc.entries.push((path, value.to_string())),
                None => {
                    if stack.is_empty() && doc.root_key.is_none() {
                        doc.root_key = Some(key.to_string());
                    }
                    stack.push((indent, key.to_string()));
                }
            }
        }

        Ok(doc)
    }

    /// First top-level key that opens a mapping, e.g. `TextureImporter`
    pub fn root_key(&self) -> Option<&str> {
        self.root_key.as_deref()
    }

    /// First value recorded under `path`
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, v)| v.as_str())
    }

    /// Every value recorded under `path`, in document order
    pub fn all<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(p, _)| p == path)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(parse_i64)
    }

    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(|v| v.parse().ok())
    }

    /// Reads a flag stored as `0`/`1` or `false`/`true`
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(parse_bool)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn split_key_value(content: &str) -> Option<(&str, Option<&str>)> {
    if let Some(key) = content.strip_suffix(':') {
        return Some((key.trim(), None));
    }
    let (key, value) = content.split_once(": ")?;
    Some((key.trim(), Some(value.trim())))
}

pub(crate) fn parse_i64(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "True" => Some(true),
        "0" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTURE_META: &str = "fileFormatVersion: 2
guid: 0f3c2a9d41b84e6a9d7e2c1b5a3f8e10
TextureImporter:
  internalIDToNameTable: []
  serializedVersion: 12
  mipmaps:
    mipMapMode: 0
    enableMipMap: 1
  maxTextureSize: 2048
  textureType: 8
  platformSettings:
  - serializedVersion: 3
    buildTarget: DefaultTexturePlatform
    maxTextureSize: 512
    textureCompression: 1
    crunchedCompression: 1
  - serializedVersion: 3
    buildTarget: Android
    maxTextureSize: 256
  userData:
";

    #[test]
    fn test_parse_nested_paths() {
        let doc = MetaDocument::parse(TEXTURE_META).unwrap();

        assert_eq!(doc.root_key(), Some("TextureImporter"));
        assert_eq!(doc.get("fileFormatVersion"), Some("2"));
        assert_eq!(doc.get_i64("TextureImporter.maxTextureSize"), Some(2048));
        assert_eq!(doc.get_bool("TextureImporter.mipmaps.enableMipMap"), Some(true));
        assert_eq!(doc.get_i64("TextureImporter.textureType"), Some(8));
    }

    #[test]
    fn test_values_outlive_lookup_key() {
        let doc = MetaDocument::parse(TEXTURE_META).unwrap();

        let value = {
            let key = format!("{}.textureType", "TextureImporter");
            doc.get(&key)
        };
        assert_eq!(value, Some("8"));
    }

    #[test]
    fn test_sequence_entries_keep_document_order() {
        let doc = MetaDocument::parse(TEXTURE_META).unwrap();

        let sizes: Vec<&str> = doc
            .all("TextureImporter.platformSettings.maxTextureSize")
            .collect();
        assert_eq!(sizes, vec!["512", "256"]);
        assert_eq!(
            doc.get("TextureImporter.platformSettings.buildTarget"),
            Some("DefaultTexturePlatform")
        );
        assert_eq!(
            doc.get_bool("TextureImporter.platformSettings.crunchedCompression"),
            Some(true)
        );
    }

    #[test]
    fn test_skips_directives_and_headers() {
        let text = "%YAML 1.1\n%TAG !u! tag:unity3d.com,2011:\n--- !u!129 &1\nPlayerSettings:\n  gcIncremental: 0\n  scriptingBackend:\n    Android: 1\n";
        let doc = MetaDocument::parse(text).unwrap();

        assert_eq!(doc.root_key(), Some("PlayerSettings"));
        assert_eq!(doc.get_bool("PlayerSettings.gcIncremental"), Some(false));
        assert_eq!(doc.get_i64("PlayerSettings.scriptingBackend.Android"), Some(1));
    }

    #[test]
    fn test_tab_indentation_is_rejected() {
        let result = MetaDocument::parse("AudioImporter:\n\tforceToMono: 1\n");
        assert!(matches!(result, Err(Error::MalformedMeta { line: 2, .. })));
    }

    #[test]
    fn test_unknown_values_do_not_parse_as_numbers() {
        let doc = MetaDocument::parse("ModelImporter:\n  meshCompression: high\n").unwrap();
        assert_eq!(doc.get("ModelImporter.meshCompression"), Some("high"));
        assert_eq!(doc.get_i64("ModelImporter.meshCompression"), None);
        assert_eq!(doc.get_bool("ModelImporter.missing"), None);
    }
}
