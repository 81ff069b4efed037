//! Formatting utilities for listing columns and notifications.

use crate::config::{EMPTY_COLUMN, OPEN_FILE_PREFIX};
use crate::core::OpenRequest;
use crate::models::Node;

/// Text for the "Modified" column. Folders and blank dates show a dash.
pub fn modified_column(node: &Node) -> String {
    match node {
        Node::File(file) => or_dash(&file.modified),
        Node::Folder(_) => EMPTY_COLUMN.to_string(),
    }
}

/// Text for the "Size" column. Folders and blank sizes show a dash.
pub fn size_column(node: &Node) -> String {
    match node {
        Node::File(file) => or_dash(&file.size),
        Node::Folder(_) => EMPTY_COLUMN.to_string(),
    }
}

/// Caption under a grid tile: the size for files, nothing for folders.
pub fn tile_caption(node: &Node) -> Option<String> {
    match node {
        Node::File(file) if !file.size.trim().is_empty() => Some(file.size.clone()),
        _ => None,
    }
}

/// Notification text for a simulated file open.
pub fn open_message(request: &OpenRequest) -> String {
    format!("{}{}", OPEN_FILE_PREFIX, request.name)
}

/// Accessible label for a listing entry.
pub fn aria_label(node: &Node) -> String {
    match node {
        Node::Folder(folder) => format!("Folder: {}", folder.name),
        Node::File(file) => format!("File: {}", file.name),
    }
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        EMPTY_COLUMN.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileKind, NodeId};

    fn report() -> Node {
        Node::file("Report Q2.pdf", "1.8 MB", "Apr 28, 2023", FileKind::Pdf)
    }

    fn folder() -> Node {
        Node::folder("Projects", ["file8", "file9"])
    }

    #[test]
    fn test_columns() {
        assert_eq!(modified_column(&report()), "Apr 28, 2023");
        assert_eq!(size_column(&report()), "1.8 MB");
        assert_eq!(modified_column(&folder()), "\u{2014}");
        assert_eq!(size_column(&folder()), "\u{2014}");
    }

    #[test]
    fn test_blank_file_fields_show_dash() {
        let node = Node::file("untitled", "", " ", FileKind::Other);
        assert_eq!(size_column(&node), EMPTY_COLUMN);
        assert_eq!(modified_column(&node), EMPTY_COLUMN);
        assert_eq!(tile_caption(&node), None);
    }

    #[test]
    fn test_tile_caption() {
        assert_eq!(tile_caption(&report()), Some("1.8 MB".to_string()));
        assert_eq!(tile_caption(&folder()), None);
    }

    #[test]
    fn test_open_message() {
        let request = OpenRequest {
            id: NodeId::from("file4"),
            name: "Report Q2.pdf".to_string(),
            size: "1.8 MB".to_string(),
            modified: "Apr 28, 2023".to_string(),
            file_type: FileKind::Pdf,
        };
        assert_eq!(open_message(&request), "Opening file: Report Q2.pdf");
    }

    #[test]
    fn test_aria_label() {
        assert_eq!(aria_label(&folder()), "Folder: Projects");
        assert_eq!(aria_label(&report()), "File: Report Q2.pdf");
    }
}
