//! Netscape Bookmark File Format rendering.
//!
//! Emits the plain-HTML convention browsers accept for import: a fixed
//! header/footer around one flat "Bookmarks Toolbar" folder. Names and URLs
//! land in the document verbatim; no HTML escaping is performed, so output
//! stays byte-identical to existing exports.

const FOOTER: &str = r#"
    </DL><p>
</DL><p>
"#;

/// Renders one `<DT><A>` anchor line. `timestamp` (Unix-epoch seconds) is
/// used for both `ADD_DATE` and `LAST_MODIFIED`.
pub fn entry_line(name: &str, url: &str, timestamp: u64) -> String {
    format!(
        r#"<DT><A HREF="{url}" ADD_DATE="{timestamp}" LAST_MODIFIED="{timestamp}">{name}</A>"#
    )
}

/// Assembles the full bookmarks document: header, entries indented by
/// 8 spaces and newline-joined, footer. The toolbar folder marker carries the
/// same timestamp as the entries. An empty entry list still produces a
/// well-formed document with an empty toolbar folder.
pub fn document(entries: &[String], timestamp: u64) -> String {
    let header = format!(
        r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3 ADD_DATE="{timestamp}" LAST_MODIFIED="{timestamp}" PERSONAL_TOOLBAR_FOLDER="true">Bookmarks Toolbar</H3>
    <DL><p>
"#
    );
    format!("{header}        {}{FOOTER}", entries.join("\n        "))
}
