//! Top-down text layout on A4 pages.

use chrono::{DateTime, Utc};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};

use crate::error::Result;
use crate::format::short_date;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
/// Start a new page once the cursor passes this offset from the top.
const PAGE_BREAK_AT: f32 = 270.0;
/// Wordmark printed in every report header.
pub const BRAND: &str = "BRIX";
/// Product name used in report prose.
pub const PRODUCT: &str = "BrixAI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// Writes lines of text from the top of the page downward.
///
/// `y` is measured in millimetres from the top edge; printpdf measures from
/// the bottom, so every draw call flips it.
pub struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PdfWriter {
    pub fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: MARGIN,
        })
    }

    /// Brand wordmark, generation date and a centered title block.
    pub fn header(&mut self, title: &str, subtitle: Option<&str>, now: &DateTime<Utc>) {
        self.draw(BRAND, 24.0, Weight::Bold, MARGIN, self.y + 15.0);
        self.draw(
            &format!("Generated: {}", short_date(now)),
            10.0,
            Weight::Regular,
            160.0,
            self.y + 10.0,
        );

        self.y = 50.0;
        self.centered(title, 20.0, Weight::Bold);
        if let Some(subtitle) = subtitle {
            self.skip(10.0);
            self.centered(subtitle, 12.0, Weight::Regular);
        }
    }

    /// Text at the left margin on the current line.
    pub fn text(&self, text: &str, size: f32, weight: Weight) {
        self.draw(text, size, weight, MARGIN, self.y);
    }

    /// Text at the left margin, then advance by `advance` millimetres.
    pub fn line(&mut self, text: &str, size: f32, weight: Weight, advance: f32) {
        self.text(text, size, weight);
        self.skip(advance);
    }

    /// Section heading followed by the usual gap.
    pub fn heading(&mut self, text: &str, size: f32) {
        self.line(text, size, Weight::Bold, 10.0);
    }

    /// Text horizontally centered on the page, on the current line.
    pub fn centered(&self, text: &str, size: f32, weight: Weight) {
        let x = ((PAGE_WIDTH - approx_width(text, size)) / 2.0).max(MARGIN);
        self.draw(text, size, weight, x, self.y);
    }

    pub fn skip(&mut self, mm: f32) {
        self.y += mm;
    }

    /// Move to a fresh page when the cursor is near the bottom.
    pub fn break_if_full(&mut self) {
        if self.y > PAGE_BREAK_AT {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = MARGIN;
        }
    }

    /// Switch subsequent text to red.
    pub fn alert(&self) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(1.0, 0.0, 0.0, None)));
    }

    /// Switch subsequent text back to black.
    pub fn normal(&self) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    }

    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.doc.save_to_bytes()?)
    }

    fn draw(&self, text: &str, size: f32, weight: Weight, x: f32, y: f32) {
        let font = match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        };
        self.layer
            .use_text(text, size, Mm(x), Mm(PAGE_HEIGHT - y), font);
    }
}

/// Rough Helvetica width in millimetres (half an em per glyph).
fn approx_width(text: &str, size: f32) -> f32 {
    const POINT_TO_MM: f32 = 0.3528;
    text.chars().count() as f32 * size * 0.5 * POINT_TO_MM
}
