//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{FileKind, Node};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuBookOpen as FilePdf, LuChevronRight as ChevronRight,
        LuFile as File, LuFileText as FileText, LuFolder as Folder, LuHouse as Home,
        LuLayoutGrid as Grid, LuList as List, LuPresentation as FilePresentation,
        LuSearch as Search, LuSheet as FileSpreadsheet, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronRight as ChevronRight, BsFileEarmark as File, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkSlides as FilePresentation, BsFileEarmarkSpreadsheet as FileSpreadsheet,
        BsFileEarmarkText as FileText, BsFileEarmarkZip as FileArchive, BsFolderFill as Folder,
        BsGrid as Grid, BsHouseFill as Home, BsListUl as List, BsSearch as Search,
        BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_SPREADSHEET, FileSpreadsheet);
themed_icon!(FILE_PRESENTATION, FilePresentation);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(SEARCH, Search);
themed_icon!(LIST, List);
themed_icon!(GRID, Grid);
themed_icon!(UPLOAD, Upload);
themed_icon!(CLOSE, Close);

/// Icon for a file kind.
pub fn for_file_kind(kind: FileKind) -> Icon {
    match kind {
        FileKind::Document => FILE_TEXT,
        FileKind::Spreadsheet => FILE_SPREADSHEET,
        FileKind::Presentation => FILE_PRESENTATION,
        FileKind::Pdf => FILE_PDF,
        FileKind::Archive => FILE_ARCHIVE,
        FileKind::Other => FILE,
    }
}

/// Icon for a listing entry.
pub fn for_node(node: &Node) -> Icon {
    match node {
        Node::Folder(_) => FOLDER,
        Node::File(file) => for_file_kind(file.file_type),
    }
}
