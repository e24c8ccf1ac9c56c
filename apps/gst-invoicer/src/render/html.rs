//! HTML preview rendering with tera.
//!
//! The template is compiled into the binary. It is registered under a name
//! ending in `.html`, which turns on tera's autoescaping: every value typed
//! into the form reaches the page escaped.

use tera::{Context, Tera};

use super::{document_title, InvoiceView, OutputFormat, RenderedDocument};
use crate::error::AppError;

const PREVIEW_TEMPLATE: &str = include_str!("../../templates/preview.html.tera");
const TEMPLATE_NAME: &str = "preview.html";

/// Renders the invoice as a standalone HTML page.
///
/// With `auto_print` the page calls `window.print()` once loaded.
pub fn render(view: &InvoiceView, auto_print: bool) -> Result<RenderedDocument, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, PREVIEW_TEMPLATE)?;

    let title = document_title(view);
    let mut context = Context::from_serialize(view)?;
    context.insert("title", &title);
    context.insert("auto_print", &auto_print);

    let body = tera.render(TEMPLATE_NAME, &context)?;
    Ok(RenderedDocument {
        title,
        format: OutputFormat::Html,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::sample_snapshot;
    use crate::render::PreviewStyle;
    use crate::state::AppConfig;

    fn view(style: PreviewStyle) -> InvoiceView {
        InvoiceView::from_snapshot(&sample_snapshot(), style, &AppConfig::default())
    }

    #[test]
    fn test_renders_totals_and_labels() {
        let doc = render(&view(PreviewStyle::Modern), false).unwrap();
        assert_eq!(doc.format, OutputFormat::Html);
        assert_eq!(doc.title, "TAX INVOICE INV-42");
        assert!(doc.body.contains("CGST @ 9%"));
        assert!(doc.body.contains("₹118.00"));
        assert!(doc.body.contains("One Hundred Eighteen Rupees Only"));
        assert!(doc.body.contains("Billed to:"));
        assert!(doc.body.contains("@media print"));
        assert!(!doc.body.contains("window.print()"));
    }

    #[test]
    fn test_print_variant_calls_print() {
        let doc = render(&view(PreviewStyle::Modern), true).unwrap();
        assert!(doc.body.contains("window.print()"));
    }

    #[test]
    fn test_style_class_and_labels() {
        let doc = render(&view(PreviewStyle::Classic), false).unwrap();
        assert!(doc.body.contains("style-classic"));
        assert!(doc.body.contains("Description of Goods"));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let mut v = view(PreviewStyle::Modern);
        v.buyer_name = "<script>alert(1)</script>".to_string();
        let doc = render(&v, false).unwrap();
        assert!(!doc.body.contains("<script>alert(1)</script>"));
        assert!(doc.body.contains("&lt;script&gt;"));
    }
}
