//! Content stream rendering for pages.

use crate::colour::Colour;
use crate::font::encode_text;
use crate::page::{LineLayout, PageContents, SpanFont, SpanLayout};
use std::io::Write;

/// Renders page contents to a PDF content stream, converting high-level content items into
/// low-level PDF operators.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans)?;
            }
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.width(),
                    image.position.height(),
                    image.position.x1,
                    image.position.y1
                )?;
                write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                write!(&mut content, "Q\n")?;
            }
            PageContents::Line(line) => {
                render_line(&mut content, line)?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(content: &mut Vec<u8>, spans: &[SpanLayout]) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for code in encode_text(&span.text) {
            write!(content, "{code:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_line(content: &mut Vec<u8>, line: &LineLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write_stroke_colour(content, line.colour)?;
    write!(content, "{} {} m\n", line.from.0, line.from.1)?;
    write!(content, "{} {} l\n", line.to.0, line.to.1)?;
    write!(content, "S\n")?;
    write!(content, "Q\n")
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}
