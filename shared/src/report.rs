//! Single-page A4 PDF report of the result currently on screen.
//!
//! Layout is computed first as a list of [`DrawOp`]s in millimetres with a
//! top-left origin, then written out with `lopdf`.

use crate::catalog::{NameContext, PropertyCatalog};
use crate::encoding::decode_data_url;
use crate::error::ExportError;
use crate::session::Session;
use crate::view::result_view;
use image::{DynamicImage, ImageFormat};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use std::io::Cursor;

pub const REPORT_FILENAME: &str = "leaf_report.pdf";
pub const REPORT_TITLE: &str = "Leaf Classification Report";
pub const REPORT_CREDIT: &str = "Generated by LeafMD";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const PT_PER_MM: f32 = 72.0 / 25.4;
// Average Helvetica glyph width as a fraction of the font size.
const HELVETICA_AVG_WIDTH: f32 = 0.5;

const HEADER_BLUE: Rgb = Rgb::hex(0x007BFF);
const WHITE: Rgb = Rgb::hex(0xFFFFFF);
const VALUE_TEXT: Rgb = Rgb::hex(0x2C3E50);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    fn components(self) -> [f32; 3] {
        [self.0, self.1, self.2].map(|c| c as f32 / 255.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        align: Align,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Rgb,
    },
}

/// The uploaded photo, re-encoded as baseline JPEG for embedding.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportImage {
    jpeg: Vec<u8>,
    width: u32,
    height: u32,
}

impl ReportImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        let decoded = image::load_from_memory(bytes).map_err(ExportError::ImageDecode)?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        let mut jpeg = Vec::new();
        DynamicImage::ImageRgb8(rgb)
            .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
            .map_err(ExportError::ImageEncode)?;

        Ok(Self {
            jpeg,
            width,
            height,
        })
    }

    /// Accepts what a browser `FileReader.readAsDataURL` produces.
    pub fn from_data_url(url: &str) -> Result<Self, ExportError> {
        let (mime, bytes) = decode_data_url(url)?;
        log::debug!("Re-encoding {} ({} bytes) for report", mime, bytes.len());
        Self::from_bytes(&bytes)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Everything the report prints, captured from a fully resolved session.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportSnapshot {
    pub class_label: String,
    pub scientific_name: String,
    pub confidence: String,
    pub properties: Vec<String>,
    pub image: Option<ReportImage>,
}

impl ReportSnapshot {
    pub fn capture<F, P>(
        session: &Session<F, P>,
        catalog: &PropertyCatalog,
    ) -> Result<Self, ExportError> {
        if !result_view(session, catalog).can_export() {
            return Err(ExportError::NotExportable);
        }
        let resolution = session.resolution().ok_or(ExportError::NotExportable)?;
        let label = &resolution.result.class_label;

        Ok(Self {
            class_label: or_not_available(label),
            scientific_name: catalog
                .resolve_scientific_name(label, NameContext::Report)
                .to_string(),
            confidence: or_not_available(resolution.confidence.as_str()),
            properties: resolution.properties.clone(),
            image: None,
        })
    }

    pub fn with_image(mut self, image: ReportImage) -> Self {
        self.image = Some(image);
        self
    }
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NameContext::Report.placeholder().to_string()
    } else {
        value.to_string()
    }
}

pub fn report_layout(snapshot: &ReportSnapshot) -> Vec<DrawOp> {
    let mut ops = vec![
        DrawOp::FillRect {
            x: 0.0,
            y: 0.0,
            width: PAGE_WIDTH_MM,
            height: 25.0,
            color: HEADER_BLUE,
        },
        text(REPORT_TITLE, 105.0, 15.0, 20.0, WHITE, Align::Center),
    ];

    let mut y = 40.0;
    if snapshot.image.is_some() {
        ops.push(DrawOp::Image {
            x: 75.0,
            y,
            width: 60.0,
            height: 60.0,
        });
        y += 70.0;
    }

    for (label, value) in [
        ("Leaf Class:", &snapshot.class_label),
        ("Scientific Name:", &snapshot.scientific_name),
        ("Confidence:", &snapshot.confidence),
    ] {
        ops.push(text(label, 10.0, y, 14.0, HEADER_BLUE, Align::Left));
        ops.push(text(value, 50.0, y, 14.0, VALUE_TEXT, Align::Left));
        y += 10.0;
    }

    ops.push(text(
        "Medicinal Properties:",
        10.0,
        y,
        14.0,
        HEADER_BLUE,
        Align::Left,
    ));
    y += 8.0;
    for (index, property) in snapshot.properties.iter().enumerate() {
        ops.push(text(
            &format!("{}. {}", index + 1, property),
            15.0,
            y,
            14.0,
            VALUE_TEXT,
            Align::Left,
        ));
        y += 8.0;
    }

    ops.push(DrawOp::Line {
        from: (10.0, y + 5.0),
        to: (200.0, y + 5.0),
        color: HEADER_BLUE,
    });
    y += 15.0;
    ops.push(text(REPORT_CREDIT, 105.0, y, 10.0, HEADER_BLUE, Align::Center));

    ops
}

fn text(value: &str, x: f32, y: f32, size: f32, color: Rgb, align: Align) -> DrawOp {
    DrawOp::Text {
        text: value.to_string(),
        x,
        y,
        size,
        color,
        align,
    }
}

pub fn render_pdf(snapshot: &ReportSnapshot) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut xobjects = Dictionary::new();
    if let Some(image) = &snapshot.image {
        let image_stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => image.width as i64,
                "Height" => image.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            image.jpeg.clone(),
        );
        xobjects.set("Im1", doc.add_object(image_stream));
    }

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
        "XObject" => xobjects,
    });

    let content: Content<Vec<Operation>> = Content {
        operations: report_layout(snapshot)
            .iter()
            .flat_map(pdf_operations)
            .collect(),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![
                real(0.0),
                real(0.0),
                real(PAGE_WIDTH_MM * PT_PER_MM),
                real(PAGE_HEIGHT_MM * PT_PER_MM),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    log::info!("Rendered report ({} bytes)", bytes.len());
    Ok(bytes)
}

fn pdf_operations(op: &DrawOp) -> Vec<Operation> {
    match op {
        DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => vec![
            fill_color(*color),
            Operation::new(
                "re",
                vec![
                    real(pt(*x)),
                    real(page_y(y + height)),
                    real(pt(*width)),
                    real(pt(*height)),
                ],
            ),
            Operation::new("f", vec![]),
        ],
        DrawOp::Text {
            text,
            x,
            y,
            size,
            color,
            align,
        } => {
            let left = match align {
                Align::Left => *x,
                Align::Center => x - estimated_width_mm(text, *size) / 2.0,
            };
            vec![
                fill_color(*color),
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), real(*size)]),
                Operation::new("Td", vec![real(pt(left)), real(page_y(*y))]),
                Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]),
                Operation::new("ET", vec![]),
            ]
        }
        DrawOp::Image {
            x,
            y,
            width,
            height,
        } => vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    real(pt(*width)),
                    real(0.0),
                    real(0.0),
                    real(pt(*height)),
                    real(pt(*x)),
                    real(page_y(y + height)),
                ],
            ),
            Operation::new("Do", vec!["Im1".into()]),
            Operation::new("Q", vec![]),
        ],
        DrawOp::Line { from, to, color } => {
            let [r, g, b] = color.components();
            vec![
                Operation::new("RG", vec![real(r), real(g), real(b)]),
                Operation::new("w", vec![real(0.57)]),
                Operation::new("m", vec![real(pt(from.0)), real(page_y(from.1))]),
                Operation::new("l", vec![real(pt(to.0)), real(page_y(to.1))]),
                Operation::new("S", vec![]),
            ]
        }
    }
}

fn fill_color(color: Rgb) -> Operation {
    let [r, g, b] = color.components();
    Operation::new("rg", vec![real(r), real(g), real(b)])
}

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

fn pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

fn page_y(mm_from_top: f32) -> f32 {
    pt(PAGE_HEIGHT_MM - mm_from_top)
}

fn estimated_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * HELVETICA_AVG_WIDTH / PT_PER_MM
}

// Helvetica with WinAnsiEncoding covers Latin-1 only.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
