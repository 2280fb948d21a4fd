// SVG export module
// Writes a polyline document as an SVG with a pixel viewBox

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ridgeline_common::{Document, Polyline};

use crate::error::{Error, Result};

/// Serialize a document to any writer
pub fn write_svg<W: Write>(document: &Document, out: &mut W) -> io::Result<()> {
    let (width, height) = (document.width, document.height);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    )?;

    for polyline in &document.polylines {
        write!(out, r#"<polyline points=""#)?;
        write_points(polyline, out)?;
        writeln!(out, r#"" fill="none" stroke="black" stroke-width="1" />"#)?;
    }

    writeln!(out, "</svg>")?;
    Ok(())
}

/// Space separated `x,y` tokens
fn write_points<W: Write>(polyline: &Polyline, out: &mut W) -> io::Result<()> {
    for (idx, pt) in polyline.points.iter().enumerate() {
        if idx > 0 {
            write!(out, " ")?;
        }
        write!(out, "{},{}", pt.x, pt.y)?;
    }
    Ok(())
}

/// Render a document to an in-memory SVG string
pub fn to_svg_string(document: &Document) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_svg(document, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Export a document to an SVG file
pub fn export_svg(document: &Document, output_path: &Path) -> Result<()> {
    let write_file = || -> io::Result<()> {
        let mut file = BufWriter::new(File::create(output_path)?);
        write_svg(document, &mut file)?;
        file.flush()
    };

    write_file().map_err(|source| Error::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Exported {} polyline(s) to SVG: {}",
        document.polylines.len(),
        output_path.display()
    );
    Ok(())
}
