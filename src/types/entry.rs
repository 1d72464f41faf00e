//! TargetFile - One instruction file as found on disk

use filetime::FileTime;
use std::path::PathBuf;

/// Header used when a file has to be created (or has no header line yet)
pub fn default_header(name: &str) -> String {
    format!("# {name}")
}

/// Split file content into its header line and body
///
/// The header runs up to and including the first line terminator: `\n`,
/// `\r\n`, or a lone `\r`. The terminator stays with the header. Content
/// without any terminator is all header.
pub fn split_document(content: &str) -> (&str, &str) {
    let Some(idx) = content.find(['\n', '\r']) else {
        return (content, "");
    };
    let end = if content[idx..].starts_with("\r\n") {
        idx + 2
    } else {
        idx + 1
    };
    content.split_at(end)
}

/// Join a header line and a body back into file content
pub fn compose_document(header: &str, body: &str) -> String {
    let mut content = String::with_capacity(header.len() + body.len() + 1);
    content.push_str(header);
    if !body.is_empty() && !header.ends_with(['\n', '\r']) {
        content.push('\n');
    }
    content.push_str(body);
    content
}

/// A target file, loaded fresh from disk on every run
#[derive(Debug, Clone, PartialEq)]
pub struct TargetFile {
    /// Name as given on the command line (relative to the sync directory)
    pub name: String,

    /// Absolute path
    pub path: PathBuf,

    /// Last modification time, `None` when the file does not exist
    pub mtime: Option<FileTime>,

    /// First line including its terminator; empty for missing or empty files
    pub header: String,

    /// Everything after the header line
    pub body: String,
}

impl TargetFile {
    /// A target that does not exist yet
    pub fn missing(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
            mtime: None,
            header: String::new(),
            body: String::new(),
        }
    }

    /// A target read from disk
    pub fn existing(name: impl Into<String>, path: PathBuf, mtime: FileTime, content: &str) -> Self {
        let (header, body) = split_document(content);
        Self {
            name: name.into(),
            path,
            mtime: Some(mtime),
            header: header.to_string(),
            body: body.to_string(),
        }
    }

    pub fn exists(&self) -> bool {
        self.mtime.is_some()
    }

    /// Header to keep when rewriting this file
    ///
    /// Missing and empty files get the default `# <name>` header.
    pub fn effective_header(&self) -> String {
        if self.header.is_empty() {
            default_header(&self.name)
        } else {
            self.header.clone()
        }
    }

    /// Full content this file should hold once it carries `body`
    pub fn render_with_body(&self, body: &str) -> String {
        compose_document(&self.effective_header(), body)
    }
}
